//! HTTP API surface.
//!
//! Thin handlers over the cache, filter, and resolver, plus the
//! credential-hiding proxy endpoints the browser calls. Credentials live
//! only in `AppState`; responses are JSON throughout and CORS is
//! permissive, matching the deployment the site expects.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderMap};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use campfinder_core::api::AirtableClient;
use campfinder_core::auth::{bearer_token, AuthVerifier, VerifiedUser};
use campfinder_core::cache::CampCache;

use crate::config::Config;
use crate::favorites::FavoritesStore;

pub use error::AppError;

/// Shared handler state. Every optional piece corresponds to a credential
/// that may be absent; handlers answer with a configuration error rather
/// than the process refusing to start.
#[derive(Clone)]
pub struct AppState {
    pub airtable: Option<AirtableClient>,
    pub cache: Option<Arc<CampCache<AirtableClient>>>,
    pub verifier: Option<Arc<AuthVerifier>>,
    pub favorites: Option<Arc<FavoritesStore>>,
}

impl AppState {
    /// Wire up clients from config. The favorites store needs an async
    /// connection and is attached separately in `main`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let airtable = match &config.airtable {
            Some(creds) => Some(
                AirtableClient::new(creds.api_key.clone(), creds.base_id.clone())
                    .context("Failed to build the Airtable client")?,
            ),
            None => None,
        };
        let cache = airtable.clone().map(|client| Arc::new(CampCache::new(client)));

        let verifier = match &config.supabase_url {
            Some(url) => Some(Arc::new(
                AuthVerifier::new(url).context("Failed to build the auth verifier")?,
            )),
            None => None,
        };

        Ok(Self { airtable, cache, verifier, favorites: None })
    }

    pub fn airtable(&self) -> Result<&AirtableClient, AppError> {
        self.airtable.as_ref().ok_or(AppError::NotConfigured)
    }

    pub fn cache(&self) -> Result<&Arc<CampCache<AirtableClient>>, AppError> {
        self.cache.as_ref().ok_or(AppError::NotConfigured)
    }

    pub fn favorites(&self) -> Result<&Arc<FavoritesStore>, AppError> {
        self.favorites.as_ref().ok_or(AppError::FavoritesUnavailable)
    }

    /// Verify the request's bearer token and return the caller's identity.
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<VerifiedUser, AppError> {
        let verifier = self.verifier.as_ref().ok_or(AppError::NotConfigured)?;
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AppError::Unauthorized)?;
        Ok(verifier.verify(token).await?)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/airtable", get(handlers::proxy::airtable_proxy))
        .route("/api/feedback", post(handlers::feedback::submit_feedback))
        .route("/api/auth/verify", get(handlers::auth::verify_token))
        .route("/api/camps", get(handlers::camps::list_camps))
        .route("/api/camps/{id}", get(handlers::camps::camp_detail))
        .route("/api/categories", get(handlers::camps::list_categories))
        .route("/api/cities", get(handlers::camps::list_cities))
        .route("/api/stats", get(handlers::camps::stats))
        .route("/api/cache/invalidate", post(handlers::camps::invalidate_cache))
        .route(
            "/api/favorites",
            get(handlers::favorites::list_favorites).post(handlers::favorites::add_favorite),
        )
        .route("/api/favorites/{camp_id}", delete(handlers::favorites::remove_favorite))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
