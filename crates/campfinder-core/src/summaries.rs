//! Directory-wide roll-ups for the homepage and browse controls: overall
//! stats plus the unique city list that seeds the filter dropdown.

use serde::Serialize;

use crate::models::Camp;

/// Homepage stats: how many camps, the overall age span, and the price
/// spread. Bounds are absent when no camp carries the field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectoryStats {
    pub total_camps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
}

pub fn directory_stats(camps: &[Camp]) -> DirectoryStats {
    let age_min = camps.iter().filter_map(|c| c.fields.age_min).min();
    let age_max = camps.iter().filter_map(|c| c.fields.age_max).max();

    // Zero and negative prices are placeholder data, not real costs.
    let prices: Vec<f64> = camps
        .iter()
        .filter_map(|c| c.fields.cost_per_week)
        .filter(|p| *p > 0.0)
        .collect();
    let price_min = prices.iter().copied().reduce(f64::min);
    let price_max = prices.iter().copied().reduce(f64::max);

    DirectoryStats {
        total_camps: camps.len(),
        age_min,
        age_max,
        price_min,
        price_max,
    }
}

/// Unique city names, sorted.
pub fn unique_cities(camps: &[Camp]) -> Vec<String> {
    let mut cities: Vec<String> = camps
        .iter()
        .filter_map(|c| c.fields.city.clone())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}
