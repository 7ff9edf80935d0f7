//! Airtable proxy endpoint.
//!
//! Forwards table reads with the API key attached server-side and returns
//! the fully paginated record set in one response, so the browser never
//! needs to follow the offset cursor itself.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::{AppError, AppState};

/// Tables the proxy will read. Anything else is rejected outright.
const ALLOWED_TABLES: &[&str] = &["Camps", "Categories"];

fn default_table() -> String {
    "Camps".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default)]
    pub offset: Option<String>,
}

pub(crate) fn is_allowed_table(table: &str) -> bool {
    ALLOWED_TABLES.contains(&table)
}

pub async fn airtable_proxy(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Json<Value>, AppError> {
    if !is_allowed_table(&query.table) {
        return Err(AppError::BadRequest("Invalid table name".to_string()));
    }

    let client = state.airtable()?;
    let records = client
        .fetch_table_raw(&query.table, query.offset.as_deref())
        .await?;

    Ok(Json(json!({ "records": records })))
}
