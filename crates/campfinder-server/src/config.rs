//! Server configuration from environment variables.
//!
//! Credentials never reach the client; they are read here and used only
//! by server-side code. A missing variable disables the feature that
//! needs it instead of aborting startup - the affected endpoints answer
//! with a configuration error and everything else keeps serving.

use std::env;

use tracing::warn;

/// Default listen address
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub airtable: Option<AirtableConfig>,
    pub supabase_url: Option<String>,
    pub database_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        let airtable = match (var("AIRTABLE_API_KEY"), var("AIRTABLE_BASE_ID")) {
            (Some(api_key), Some(base_id)) => Some(AirtableConfig { api_key, base_id }),
            _ => {
                warn!("AIRTABLE_API_KEY / AIRTABLE_BASE_ID not set; camp data endpoints will answer 500");
                None
            }
        };

        let supabase_url = var("SUPABASE_URL");
        if supabase_url.is_none() {
            warn!("SUPABASE_URL not set; auth verification and favorites disabled");
        }

        let database_url = var("DATABASE_URL");
        if database_url.is_none() {
            warn!("DATABASE_URL not set; favorites disabled");
        }

        Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            airtable,
            supabase_url,
            database_url,
        }
    }
}

/// Read an environment variable, treating empty values as unset.
fn var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
