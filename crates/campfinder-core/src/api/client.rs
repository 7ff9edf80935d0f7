//! API client for the Airtable REST API.
//!
//! This module provides the `AirtableClient` for fetching camp and
//! category records and for submitting feedback rows. The API is bearer
//! token authenticated and pages list responses with an `offset` cursor.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::{Camp, CategoryRecord};

use super::ApiError;

/// Base URL for the Airtable REST API
const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One page of a list response. Airtable returns at most 100 records per
/// page and an `offset` cursor whenever more pages remain.
#[derive(Debug, Deserialize)]
struct RecordPage<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
    #[serde(default)]
    offset: Option<String>,
}

/// Fields for one row of the Feedback table.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackFields {
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Suggestions", skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(rename = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "Submitted At")]
    pub submitted_at: String,
}

/// API client for one Airtable base.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AirtableClient {
    client: Client,
    api_key: String,
    base_id: String,
}

impl AirtableClient {
    pub fn new(api_key: String, base_id: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, api_key, base_id })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", AIRTABLE_API_URL, self.base_id, table)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        table: &str,
        offset: Option<&str>,
    ) -> Result<RecordPage<T>, ApiError> {
        let mut request = self.client.get(self.table_url(table)).bearer_auth(&self.api_key);
        if let Some(cursor) = offset {
            request = request.query(&[("offset", cursor)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{} page: {}", table, e)))
    }

    /// Fetch every record in a table, following the pagination cursor.
    /// Page requests are strictly sequential; each waits for the prior
    /// page's cursor before issuing the next.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        table: &str,
        start_offset: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let mut records: Vec<T> = Vec::new();
        let mut offset = start_offset.map(str::to_string);

        loop {
            let page: RecordPage<T> = self.fetch_page(table, offset.as_deref()).await?;
            records.extend(page.records);
            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        debug!(table, count = records.len(), "Fetched all records");
        Ok(records)
    }

    /// Fetch all camps from the Camps table.
    pub async fn fetch_camps(&self) -> Result<Vec<Camp>, ApiError> {
        self.fetch_all("Camps", None).await
    }

    /// Fetch all category rows from the Categories table.
    pub async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        self.fetch_all("Categories", None).await
    }

    /// Fetch a table as raw JSON records for the proxy endpoint. The
    /// optional starting offset lets a caller resume mid-pagination; the
    /// result is always paginated to the end.
    pub async fn fetch_table_raw(
        &self,
        table: &str,
        start_offset: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        self.fetch_all(table, start_offset).await
    }

    /// Create one row in the Feedback table, returning the created record.
    pub async fn create_feedback(
        &self,
        fields: FeedbackFields,
    ) -> Result<serde_json::Value, ApiError> {
        let body = serde_json::json!({ "fields": fields });

        let response = self
            .client
            .post(self.table_url("Feedback"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &text));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("feedback record: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paged_list_response() {
        let json = r#"{
            "records": [
                {"id": "recA", "fields": {"Camp Name": "Pine Hollow"}},
                {"id": "recB", "fields": {}}
            ],
            "offset": "itrNext/recB"
        }"#;
        let page: RecordPage<Camp> = serde_json::from_str(json).unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.offset.as_deref(), Some("itrNext/recB"));
    }

    #[test]
    fn parses_final_page_without_offset() {
        let json = r#"{"records": []}"#;
        let page: RecordPage<Camp> = serde_json::from_str(json).unwrap();
        assert!(page.records.is_empty());
        assert!(page.offset.is_none());
    }

    #[test]
    fn feedback_fields_omit_empty_optionals() {
        let fields = FeedbackFields {
            rating: 4.0,
            suggestions: None,
            page: Some("browse.html".to_string()),
            submitted_at: "2026-08-28T00:00:00Z".to_string(),
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["Rating"], 4.0);
        assert_eq!(value["Page"], "browse.html");
        assert!(value.get("Suggestions").is_none());
    }
}
