//! Camp listing, detail, and summary endpoints.
//!
//! Handlers read the cached snapshot, apply the query's filter, and shape
//! each record into a `CampView` with the display strings and resolved
//! registration status the site renders directly.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use campfinder_core::filter::{filter_camps, CampFilter};
use campfinder_core::models::{
    format_registration_date, resolve_categories, resolve_status, Camp, RegistrationStatus,
};
use campfinder_core::summaries::{directory_stats, unique_cities};

use crate::server::{AppError, AppState};

/// The featured strip shows at most this many camps, flagged or not.
const FEATURED_LIMIT: usize = 6;

/// Listing query parameters. Everything is optional; an empty query
/// returns the whole directory.
#[derive(Debug, Default, Deserialize)]
pub struct CampQuery {
    pub search: Option<String>,
    pub age: Option<i64>,
    pub max_price: Option<f64>,
    pub city: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub after_care: bool,
    #[serde(default)]
    pub refresh: bool,
    pub featured: Option<bool>,
}

impl CampQuery {
    fn to_filter(&self) -> CampFilter {
        CampFilter {
            search_query: self.search.clone().unwrap_or_default(),
            age: self.age,
            max_price: self.max_price,
            city: self.city.clone(),
            category: self.category.clone(),
            after_care: self.after_care,
        }
    }
}

/// One camp shaped for display. Raw upstream fields are normalized here so
/// the client never re-derives status, cost, or age text.
#[derive(Debug, Serialize)]
pub struct CampView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub has_after_care: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    pub featured: bool,
    pub registration_status: RegistrationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_opens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_offered: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_care_notes: Option<String>,
}

impl CampView {
    pub fn from_camp(camp: &Camp) -> Self {
        let fields = &camp.fields;
        Self {
            id: camp.id.clone(),
            name: fields.display_name().to_string(),
            primary_category: fields.primary_category.clone(),
            age_range: fields.age_range_text(),
            cost: fields.cost_text(),
            city: fields.city.clone(),
            location_name: fields.location_name.clone(),
            address: fields.address.clone(),
            has_after_care: fields.has_after_care,
            description: fields.description_text().map(str::to_string),
            activities: fields.activities.clone(),
            featured: fields.featured,
            registration_status: resolve_status(
                fields.registration_status.as_deref(),
                fields.registration_opens_date.as_deref(),
            ),
            registration_opens: format_registration_date(
                fields.registration_opens_date.as_deref(),
                fields.registration_opens_time.as_deref(),
            ),
            website: fields.website_url().map(str::to_string),
            session_dates: fields.session_dates_text().map(str::to_string),
            weeks_offered: fields.weeks_offered,
            schedule_notes: fields.schedule_notes.clone(),
            registration_notes: fields.registration_notes.clone(),
            extended_care_notes: fields.extended_care_notes.clone(),
        }
    }
}

/// Select the featured strip: flagged camps, or the head of the directory
/// when nothing is flagged. Both branches are capped at the strip size.
fn featured_camps(camps: &[Camp]) -> Vec<Camp> {
    let flagged: Vec<Camp> = camps
        .iter()
        .filter(|c| c.fields.featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect();
    if !flagged.is_empty() {
        return flagged;
    }
    camps.iter().take(FEATURED_LIMIT).cloned().collect()
}

pub async fn list_camps(
    State(state): State<AppState>,
    Query(query): Query<CampQuery>,
) -> Result<Json<Value>, AppError> {
    let snapshot = state.cache()?.get_camps(query.refresh).await;

    let matched = match query.featured {
        Some(true) => featured_camps(&snapshot),
        _ => filter_camps(&snapshot, &query.to_filter()),
    };
    let camps: Vec<CampView> = matched.iter().map(CampView::from_camp).collect();

    Ok(Json(json!({ "count": camps.len(), "camps": camps })))
}

pub async fn camp_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CampView>, AppError> {
    let camp = state.cache()?.camp_by_id(&id).await.ok_or(AppError::CampNotFound)?;
    Ok(Json(CampView::from_camp(&camp)))
}

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cache = state.cache()?;
    let records = cache.get_categories().await;
    let camps = cache.get_camps(false).await;
    let categories = resolve_categories(&records, &camps);
    Ok(Json(json!({ "categories": categories })))
}

pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let camps = state.cache()?.get_camps(false).await;
    Ok(Json(json!({ "cities": unique_cities(&camps) })))
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let camps = state.cache()?.get_camps(false).await;
    Ok(Json(json!(directory_stats(&camps))))
}

/// Drop both cached snapshots so the next reads fetch fresh data. This is
/// the only way to refresh categories short of a restart.
pub async fn invalidate_cache(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.cache()?.invalidate().await;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campfinder_core::models::CampFields;

    fn camp(id: &str, fields: CampFields) -> Camp {
        Camp { id: id.to_string(), created_time: None, fields }
    }

    #[test]
    fn query_maps_onto_filter() {
        let query = CampQuery {
            search: Some("robot".to_string()),
            age: Some(10),
            city: Some("Raleigh".to_string()),
            after_care: true,
            ..Default::default()
        };
        let filter = query.to_filter();
        assert_eq!(filter.search_query, "robot");
        assert_eq!(filter.age, Some(10));
        assert_eq!(filter.city.as_deref(), Some("Raleigh"));
        assert!(filter.after_care);
        assert!(filter.max_price.is_none());

        assert_eq!(CampQuery::default().to_filter(), CampFilter::default());
    }

    #[test]
    fn view_normalizes_display_fields() {
        let camp = camp(
            "rec1",
            CampFields {
                name: Some("Pine Hollow".to_string()),
                age_min: Some(6),
                age_max: Some(12),
                cost_per_week: Some(450.0),
                registration_status: Some("Coming Soon".to_string()),
                registration_opens_date: Some("2099-02-02".to_string()),
                registration_opens_time: Some("7am".to_string()),
                registration_url: Some("https://reg.example".to_string()),
                ..Default::default()
            },
        );
        let view = CampView::from_camp(&camp);
        assert_eq!(view.name, "Pine Hollow");
        assert_eq!(view.age_range.as_deref(), Some("6-12"));
        assert_eq!(view.cost.as_deref(), Some("$450"));
        assert_eq!(view.registration_status, RegistrationStatus::ComingSoon);
        assert_eq!(view.registration_opens.as_deref(), Some("Feb 2, 2099 at 7am"));
        assert_eq!(view.website.as_deref(), Some("https://reg.example"));
    }

    #[test]
    fn view_of_empty_record_uses_fallback_name() {
        let view = CampView::from_camp(&camp("rec2", CampFields::default()));
        assert_eq!(view.name, "Camp");
        assert_eq!(view.registration_status, RegistrationStatus::NotUpdated);
        assert!(view.registration_opens.is_none());

        let encoded = serde_json::to_value(&view).unwrap();
        assert!(encoded.get("cost").is_none());
        assert_eq!(encoded["registration_status"], "Not Updated");
    }

    #[test]
    fn featured_prefers_flagged_records() {
        let mut camps: Vec<Camp> = (0..10)
            .map(|i| camp(&format!("rec{i}"), CampFields::default()))
            .collect();

        // Nothing flagged: the strip is the head of the directory.
        let fallback = featured_camps(&camps);
        assert_eq!(fallback.len(), FEATURED_LIMIT);
        assert_eq!(fallback[0].id, "rec0");

        camps[7].fields.featured = true;
        let flagged = featured_camps(&camps);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, "rec7");
    }

    #[test]
    fn featured_strip_is_capped_either_way() {
        let mut camps: Vec<Camp> = (0..10)
            .map(|i| camp(&format!("rec{i}"), CampFields::default()))
            .collect();
        for camp in camps.iter_mut().skip(1).take(8) {
            camp.fields.featured = true;
        }

        // Eight flagged records, but the strip still holds six, in order.
        let flagged = featured_camps(&camps);
        assert_eq!(flagged.len(), FEATURED_LIMIT);
        assert_eq!(flagged[0].id, "rec1");
        assert_eq!(flagged[5].id, "rec6");
    }
}
