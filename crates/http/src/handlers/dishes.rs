//! `/api/dishes` handlers.
//!
//! Each handler ensures the table exists, performs its operation, then
//! re-reads the whole list for the response.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::api_error::ApiError;
use crate::request_types::{AddDishes, AddDishesBody, RemoveDishes, RemoveDishesBody};
use crate::response_types::{DishListResponse, RandomDishResponse};

pub async fn list_dishes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DishListResponse>, ApiError> {
    let dishes = state.dishes()?;
    dishes.ensure_schema().await;
    let names = dishes.list_names().await.map_err(|e| state.fail(e, "failed to load dishes"))?;
    Ok(Json(DishListResponse::new(names)))
}

pub async fn add_dishes(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AddDishesBody>, JsonRejection>,
) -> Result<Json<DishListResponse>, ApiError> {
    let dishes = state.dishes()?;
    let Json(body) = body?;
    let request = AddDishes::try_from(body)?;
    dishes.ensure_schema().await;

    let message = match request {
        AddDishes::Batch(names) => {
            let outcome =
                dishes.add_many(&names).await.map_err(|e| state.fail(e, "failed to add dishes"))?;
            format!("added {} dishes", outcome.added.len())
        },
        AddDishes::Single(name) => {
            dishes.add_one(&name).await.map_err(|e| state.fail(e, "failed to add dish"))?;
            "dish added".to_owned()
        },
    };

    let names = dishes.list_names().await.map_err(|e| state.fail(e, "failed to load dishes"))?;
    Ok(Json(DishListResponse::new(names).with_message(message)))
}

pub async fn remove_dishes(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RemoveDishesBody>, JsonRejection>,
) -> Result<Json<DishListResponse>, ApiError> {
    let dishes = state.dishes()?;
    let Json(body) = body?;
    let request = RemoveDishes::try_from(body)?;
    dishes.ensure_schema().await;

    let message = match request {
        RemoveDishes::ClearAll => {
            dishes.clear().await.map_err(|e| state.fail(e, "failed to clear dishes"))?;
            "all dishes cleared"
        },
        RemoveDishes::Single(name) => {
            dishes.remove(&name).await.map_err(|e| state.fail(e, "failed to delete dish"))?;
            "dish deleted"
        },
    };

    let names = dishes.list_names().await.map_err(|e| state.fail(e, "failed to load dishes"))?;
    Ok(Json(DishListResponse::new(names).with_message(message)))
}

/// A stored dish chosen by the database, `data: null` when nothing is stored.
pub async fn random_dish(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RandomDishResponse>, ApiError> {
    let dishes = state.dishes()?;
    dishes.ensure_schema().await;
    let picked =
        dishes.pick_random().await.map_err(|e| state.fail(e, "failed to pick a dish"))?;
    Ok(Json(RandomDishResponse { success: true, data: picked.map(|d| d.name) }))
}
