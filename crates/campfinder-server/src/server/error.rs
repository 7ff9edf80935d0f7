use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use campfinder_core::api::ApiError;
use campfinder_core::auth::AuthError;

/// Errors a handler can surface to an HTTP caller.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    // One generic message for every rejected credential; details go to the
    // log, not the caller.
    #[error("Invalid or expired token")]
    Unauthorized,

    #[error("Server configuration error")]
    NotConfigured,

    #[error("Favorites are not available")]
    FavoritesUnavailable,

    #[error("Camp not found")]
    CampNotFound,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FavoritesUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::CampNotFound => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Upstream { status: e.upstream_status(), message: e.to_string() }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        // Every verification failure answers 401, including a JWKS fetch
        // that never got off the ground.
        match e {
            AuthError::InvalidToken | AuthError::KeySetUnavailable(_) => AppError::Unauthorized,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_http_statuses() {
        assert_eq!(
            AppError::BadRequest("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotConfigured.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::CampNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn forwards_upstream_statuses() {
        let err: AppError = ApiError::from_status(reqwest::StatusCode::UNPROCESSABLE_ENTITY, "x").into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::Upstream { status: 999, message: "weird".to_string() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn auth_failures_are_401() {
        let err: AppError = AuthError::KeySetUnavailable("down".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
