//! Token verification endpoint for protecting authenticated routes.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::server::{AppError, AppState};

pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let user = state.authorize(&headers).await?;
    Ok(Json(json!({
        "valid": true,
        "sub": user.sub,
        "email": user.email,
        "role": user.role,
    })))
}
