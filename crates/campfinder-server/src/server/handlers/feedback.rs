//! Feedback submission endpoint.
//!
//! Validates the visitor's rating and forwards the row to the Feedback
//! table with the API key attached server-side.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use campfinder_core::api::FeedbackFields;

use crate::server::{AppError, AppState};

/// A validated submission, before the server timestamp is attached.
#[derive(Debug, PartialEq)]
pub(crate) struct FeedbackSubmission {
    pub rating: f64,
    pub suggestions: Option<String>,
    pub page: Option<String>,
}

/// Validate the raw request body. The rating must be a JSON number in
/// `[1, 5]`; blank suggestions and page strings are dropped.
pub(crate) fn validate_feedback(body: &Value) -> Result<FeedbackSubmission, String> {
    let rating = body
        .get("rating")
        .and_then(Value::as_f64)
        .ok_or_else(|| "Rating must be a number between 1 and 5".to_string())?;
    if !(1.0..=5.0).contains(&rating) {
        return Err("Rating must be a number between 1 and 5".to_string());
    }

    let text_field = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Ok(FeedbackSubmission {
        rating,
        suggestions: text_field("suggestions"),
        page: text_field("page"),
    })
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let submission = validate_feedback(&body).map_err(AppError::BadRequest)?;
    let client = state.airtable()?;

    let record = client
        .create_feedback(FeedbackFields {
            rating: submission.rating,
            suggestions: submission.suggestions,
            page: submission.page,
            submitted_at: Utc::now().to_rfc3339(),
        })
        .await?;

    Ok(Json(json!({ "success": true, "record": record })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_full_submission() {
        let body = json!({ "rating": 4, "suggestions": " more camps ", "page": "browse.html" });
        let submission = validate_feedback(&body).unwrap();
        assert_eq!(submission.rating, 4.0);
        assert_eq!(submission.suggestions.as_deref(), Some("more camps"));
        assert_eq!(submission.page.as_deref(), Some("browse.html"));
    }

    #[test]
    fn drops_blank_optional_fields() {
        let body = json!({ "rating": 5, "suggestions": "   ", "page": "" });
        let submission = validate_feedback(&body).unwrap();
        assert!(submission.suggestions.is_none());
        assert!(submission.page.is_none());
    }

    #[test]
    fn rejects_missing_or_non_numeric_ratings() {
        assert!(validate_feedback(&json!({})).is_err());
        assert!(validate_feedback(&json!({ "rating": "5" })).is_err());
        assert!(validate_feedback(&json!({ "rating": null })).is_err());
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        assert!(validate_feedback(&json!({ "rating": 0 })).is_err());
        assert!(validate_feedback(&json!({ "rating": 6 })).is_err());
        assert!(validate_feedback(&json!({ "rating": -3 })).is_err());
        // Fractional ratings inside the range are fine.
        assert!(validate_feedback(&json!({ "rating": 4.5 })).is_ok());
    }
}
