//! Multi-criterion camp filtering.
//!
//! A `CampFilter` is built fresh from query/control state for every
//! evaluation and applied as a pure predicate over the camp list. Criteria
//! are ANDed together; the filter is stable, preserving original record
//! order, and never sorts.

use crate::models::{Camp, CampFields};

/// Sentinel select value meaning "no restriction" for city and category.
const FILTER_ALL: &str = "all";

/// Active search and filter criteria. `Default` is the all-pass filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampFilter {
    pub search_query: String,
    pub age: Option<i64>,
    pub max_price: Option<f64>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub after_care: bool,
}

impl CampFilter {
    /// Decide whether one camp passes every active criterion.
    ///
    /// A camp missing a bound is never excluded by the age or price
    /// criteria: the comparison against an absent field cannot fail it.
    /// This deliberately matches the upstream listing behavior and keeps
    /// sparsely-filled records visible.
    pub fn matches(&self, fields: &CampFields) -> bool {
        if let Some(age) = self.age {
            if fields.age_min.is_some_and(|min| min > age) {
                return false;
            }
            if fields.age_max.is_some_and(|max| max < age) {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if fields.cost_per_week.is_some_and(|cost| cost > max_price) {
                return false;
            }
        }

        if let Some(city) = active_choice(self.city.as_deref()) {
            if fields.city.as_deref() != Some(city) {
                return false;
            }
        }

        if let Some(category) = active_choice(self.category.as_deref()) {
            if fields.primary_category.as_deref() != Some(category) {
                return false;
            }
        }

        if self.after_care && !fields.has_after_care {
            return false;
        }

        let query = self.search_query.trim();
        if !query.is_empty() && !fields.searchable_text().contains(&query.to_lowercase()) {
            return false;
        }

        true
    }
}

/// A select criterion is active only when set to something other than the
/// "all" sentinel.
fn active_choice(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != FILTER_ALL)
}

/// Apply the filter over the full camp sequence, keeping original order.
pub fn filter_camps(camps: &[Camp], filter: &CampFilter) -> Vec<Camp> {
    camps
        .iter()
        .filter(|camp| filter.matches(&camp.fields))
        .cloned()
        .collect()
}
