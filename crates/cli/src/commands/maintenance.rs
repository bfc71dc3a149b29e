//! One-off database maintenance: schema init, menu import, env inspection.

use std::path::Path;

use anyhow::{Context, Result, bail};
use dishpick_core::{
    APP_ENV_VAR, DATABASE_NOT_CONFIGURED, DATABASE_URL_VARS, DishName, SAMPLE_DISHES, parse_menu,
    resolve_database_url,
};
use dishpick_storage::{DishStore, StorageBackend};

const PREVIEW_LEN: usize = 10;
const MASK_AFTER_CHARS: usize = 50;

async fn connect() -> Result<StorageBackend> {
    let Some(db) = resolve_database_url() else {
        bail!(DATABASE_NOT_CONFIGURED);
    };
    println!("connecting to database ({})...", db.source);
    Ok(StorageBackend::new_postgres(&db.url).await?)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct ImportTally {
    added: usize,
    skipped: usize,
    failed: usize,
}

async fn insert_each(storage: &StorageBackend, names: &[&str]) -> ImportTally {
    let mut tally = ImportTally::default();
    for &raw in names {
        let name = match DishName::new(raw) {
            Ok(name) => name,
            Err(e) => {
                println!("❌ failed: {raw} - {e}");
                tally.failed += 1;
                continue;
            },
        };
        match storage.insert_one(&name).await {
            Ok(_) => {
                println!("✅ added: {name}");
                tally.added += 1;
            },
            Err(e) if e.is_duplicate() => {
                println!("⚠️  already exists: {name}");
                tally.skipped += 1;
            },
            Err(e) => {
                println!("❌ failed: {name} - {e}");
                tally.failed += 1;
            },
        }
    }
    tally
}

pub(crate) async fn init_db() -> Result<()> {
    let storage = connect().await?;
    storage.ensure_schema().await?;
    println!("✅ dishes table ready");

    let count = storage.count().await?;
    if count == 0 {
        println!("seeding sample dishes...");
        insert_each(&storage, SAMPLE_DISHES).await;
    } else {
        println!("📊 database already holds {count} dishes");
    }
    println!("🎉 database initialized");
    Ok(())
}

pub(crate) async fn import(file: &Path, dry_run: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read menu file {}", file.display()))?;
    let dishes = parse_menu(&content);
    println!("📋 found {} distinct dishes in {}", dishes.len(), file.display());
    for (index, dish) in dishes.iter().take(PREVIEW_LEN).enumerate() {
        println!("   {}. {dish}", index + 1);
    }
    if dishes.len() > PREVIEW_LEN {
        println!("   ... and {} more", dishes.len() - PREVIEW_LEN);
    }
    if dry_run {
        return Ok(());
    }

    let storage = connect().await?;
    storage.ensure_schema().await?;
    let names: Vec<&str> = dishes.iter().map(String::as_str).collect();
    let tally = insert_each(&storage, &names).await;

    println!();
    println!("=== import finished ===");
    println!("✅ added: {}", tally.added);
    println!("⚠️  already present: {}", tally.skipped);
    println!("❌ failed: {}", tally.failed);
    println!("📊 processed: {}", dishes.len());
    println!("🗄️  dishes in database: {}", storage.count().await?);
    Ok(())
}

fn mask(value: &str) -> String {
    let shown: String = value.chars().take(MASK_AFTER_CHARS).collect();
    format!("{shown}...")
}

fn is_database_var(key: &str) -> bool {
    ["DATABASE", "NEON", "POSTGRES"].iter().any(|marker| key.contains(marker))
}

pub(crate) fn check_env() {
    println!("🔍 database environment variables (first non-empty wins):");
    for var in DATABASE_URL_VARS {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => println!("✅ {var}: {}", mask(&value)),
            _ => println!("❌ {var}: not set"),
        }
    }

    println!();
    println!("🌍 all database-related variables:");
    let mut related: Vec<(String, String)> =
        std::env::vars().filter(|(key, _)| is_database_var(key)).collect();
    related.sort();
    for (key, value) in related {
        println!("   {key}: {}", mask(&value));
    }

    println!();
    match resolve_database_url() {
        Some(db) => println!("🔗 selected: {}", db.source),
        None => println!("🔗 selected: none ({DATABASE_NOT_CONFIGURED})"),
    }
    let environment = std::env::var(APP_ENV_VAR).unwrap_or_else(|_| "not set".to_owned());
    println!("📊 {APP_ENV_VAR}: {environment}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_truncates_long_values() {
        let url = format!("postgres://user:{}@host/db", "x".repeat(80));
        let masked = mask(&url);
        assert_eq!(masked.chars().count(), MASK_AFTER_CHARS + 3);
        assert!(masked.ends_with("..."));
    }

    #[test]
    fn database_vars_detected() {
        assert!(is_database_var("DATABASE_URL"));
        assert!(is_database_var("NEON_DATABASE_URL"));
        assert!(is_database_var("POSTGRES_PRISMA_URL"));
        assert!(!is_database_var("HOME"));
    }

    #[tokio::test]
    async fn insert_each_counts_outcomes() {
        let storage = StorageBackend::new_memory();
        let tally = insert_each(&storage, &["红烧肉", "红烧肉", "  ", "水煮鱼"]).await;
        assert_eq!(tally, ImportTally { added: 2, skipped: 1, failed: 1 });
    }
}
