use std::sync::Arc;

use anyhow::Result;
use dishpick_core::{DATABASE_NOT_CONFIGURED, app_environment, resolve_database_url};
use dishpick_http::{AppState, Settings, create_router};
use dishpick_storage::StorageBackend;

async fn open_storage(memory: bool) -> Option<Arc<StorageBackend>> {
    if memory {
        tracing::info!("using in-memory dish store, data is lost on exit");
        return Some(Arc::new(StorageBackend::new_memory()));
    }
    match resolve_database_url() {
        Some(db) => {
            tracing::info!(source = db.source, "connecting to PostgreSQL");
            match StorageBackend::new_postgres(&db.url).await {
                Ok(backend) => Some(Arc::new(backend)),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "PostgreSQL unavailable; dish routes will answer with errors"
                    );
                    None
                },
            }
        },
        None => {
            tracing::error!("{DATABASE_NOT_CONFIGURED}; dish routes will answer with errors");
            None
        },
    }
}

pub(crate) async fn run(port: u16, host: String, memory: bool) -> Result<()> {
    let storage = open_storage(memory).await;
    if let Some(backend) = &storage {
        tracing::info!(backend = backend.kind(), "dish store ready");
    }
    let settings = Settings { environment: app_environment() };
    tracing::info!(environment = %settings.environment, "starting dishpick");

    let router = create_router(Arc::new(AppState::new(storage, settings)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
