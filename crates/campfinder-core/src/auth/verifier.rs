//! Bearer token verification against the auth provider's published keys.
//!
//! The provider (Supabase Auth) signs access tokens and publishes its
//! verification keys at a well-known JWKS URL. The key set is fetched
//! lazily and cached; an unknown `kid` triggers one refetch to pick up
//! rotated keys.

use std::time::Duration;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// HTTP timeout for JWKS fetches in seconds
const JWKS_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Failed to fetch verification keys: {0}")]
    KeySetUnavailable(String),
}

/// Claims extracted from a verified access token.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedUser {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Verifies bearer tokens against a remote JWKS.
pub struct AuthVerifier {
    client: Client,
    jwks_url: String,
    keys: RwLock<Option<JwkSet>>,
}

impl AuthVerifier {
    /// Build a verifier for an auth provider base URL
    /// (e.g. `https://xyz.supabase.co`).
    pub fn new(provider_url: &str) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(JWKS_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        let jwks_url = format!(
            "{}/auth/v1/.well-known/jwks.json",
            provider_url.trim_end_matches('/')
        );

        Ok(Self { client, jwks_url, keys: RwLock::new(None) })
    }

    async fn key_set(&self, refresh: bool) -> Result<JwkSet, AuthError> {
        if !refresh {
            if let Some(cached) = self.keys.read().await.clone() {
                return Ok(cached);
            }
        }

        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::KeySetUnavailable(format!(
                "JWKS endpoint returned {}",
                response.status()
            )));
        }

        let set: JwkSet = response
            .json()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        debug!(url = %self.jwks_url, keys = set.keys.len(), "Fetched JWKS");
        *self.keys.write().await = Some(set.clone());
        Ok(set)
    }

    /// Verify a bearer token and return its identity claims.
    pub async fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError> {
        let header = decode_header(token).map_err(|e| {
            debug!(error = %e, "Unparsable token header");
            AuthError::InvalidToken
        })?;
        let kid = header.kid.ok_or(AuthError::InvalidToken)?;

        let mut set = self.key_set(false).await?;
        if set.find(&kid).is_none() {
            // Keys rotate; refetch once before giving up on this kid.
            set = self.key_set(true).await?;
        }
        let jwk = set.find(&kid).ok_or_else(|| {
            warn!(kid = %kid, "Token signed with unknown key");
            AuthError::InvalidToken
        })?;

        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::InvalidToken)?;
        let mut validation = Validation::new(header.alg);
        validation.validate_aud = false;

        let data = decode::<VerifiedUser>(token, &key, &validation).map_err(|e| {
            debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        Ok(data.claims)
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
