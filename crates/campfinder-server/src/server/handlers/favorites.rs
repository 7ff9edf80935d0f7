//! Favorites endpoints. Every operation requires a verified bearer token;
//! the user id comes from the token, never from the request body.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::{AppError, AppState};

pub async fn list_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let user = state.authorize(&headers).await?;
    let camp_ids = state.favorites()?.list(&user.sub).await?;
    Ok(Json(json!({ "camp_ids": camp_ids })))
}

#[derive(Debug, Deserialize)]
pub struct AddFavorite {
    pub camp_id: String,
}

pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AddFavorite>,
) -> Result<Json<Value>, AppError> {
    let user = state.authorize(&headers).await?;
    let camp_id = request.camp_id.trim();
    if camp_id.is_empty() {
        return Err(AppError::BadRequest("camp_id is required".to_string()));
    }

    // Duplicate pairs are swallowed by the store; saving twice succeeds.
    state.favorites()?.add(&user.sub, camp_id).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(camp_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = state.authorize(&headers).await?;
    state.favorites()?.remove(&user.sub, &camp_id).await?;
    Ok(Json(json!({ "success": true })))
}
