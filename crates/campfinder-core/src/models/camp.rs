use serde::{Deserialize, Serialize};

/// One camp record from the Camps table.
/// `id` is the stable Airtable record id used for detail links and favorites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camp {
    pub id: String,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    pub fields: CampFields,
}

/// Camp fields as stored upstream. Airtable omits empty cells entirely,
/// so everything except the booleans is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampFields {
    #[serde(rename = "Camp Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Primary Category", default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,
    #[serde(rename = "Age Min", default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<i64>,
    #[serde(rename = "Age Max", default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<i64>,
    #[serde(rename = "Cost Per Week", default, skip_serializing_if = "Option::is_none")]
    pub cost_per_week: Option<f64>,
    #[serde(rename = "Cost Display", default, skip_serializing_if = "Option::is_none")]
    pub cost_display: Option<String>,
    #[serde(rename = "City", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "Location Name", default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(rename = "Address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Has After Care", default)]
    pub has_after_care: bool,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Short Description", default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "Activities", default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(rename = "Featured", default)]
    pub featured: bool,
    #[serde(rename = "Registration Status", default, skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<String>,
    #[serde(rename = "Registration Opens Date", default, skip_serializing_if = "Option::is_none")]
    pub registration_opens_date: Option<String>,
    #[serde(rename = "Registration Opens Time", default, skip_serializing_if = "Option::is_none")]
    pub registration_opens_time: Option<String>,
    #[serde(rename = "Website", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "Registration URL", default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(rename = "Session Dates", default, skip_serializing_if = "Option::is_none")]
    pub session_dates: Option<String>,
    #[serde(rename = "Dates", default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(rename = "Weeks Offered", default, skip_serializing_if = "Option::is_none")]
    pub weeks_offered: Option<f64>,
    #[serde(rename = "Schedule Notes", default, skip_serializing_if = "Option::is_none")]
    pub schedule_notes: Option<String>,
    #[serde(rename = "Registration Notes", default, skip_serializing_if = "Option::is_none")]
    pub registration_notes: Option<String>,
    #[serde(rename = "Extended Care Notes", default, skip_serializing_if = "Option::is_none")]
    pub extended_care_notes: Option<String>,
}

impl CampFields {
    /// Display title, with a neutral fallback for incomplete records.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Camp")
    }

    /// "Cost Display" wins over a formatted "Cost Per Week".
    pub fn cost_text(&self) -> Option<String> {
        if let Some(ref display) = self.cost_display {
            return Some(display.clone());
        }
        self.cost_per_week.map(format_dollars)
    }

    /// "5-12" when both bounds are present.
    pub fn age_range_text(&self) -> Option<String> {
        match (self.age_min, self.age_max) {
            (Some(min), Some(max)) => Some(format!("{}-{}", min, max)),
            _ => None,
        }
    }

    /// External link for the camp; the dedicated website wins over the
    /// registration page.
    pub fn website_url(&self) -> Option<&str> {
        self.website.as_deref().or(self.registration_url.as_deref())
    }

    /// Session dates text; the older "Dates" column is a fallback.
    pub fn session_dates_text(&self) -> Option<&str> {
        self.session_dates.as_deref().or(self.dates.as_deref())
    }

    /// First non-blank of the long and short descriptions.
    pub fn description_text(&self) -> Option<&str> {
        for candidate in [self.description.as_deref(), self.short_description.as_deref()] {
            if let Some(text) = candidate {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed);
                }
            }
        }
        None
    }

    /// Lower-cased haystack for the search filter: name, descriptions,
    /// category, city, and activities, space-joined. Missing fields
    /// contribute nothing.
    pub fn searchable_text(&self) -> String {
        let activities = self.activities.as_ref().map(|a| a.join(" "));
        let parts = [
            self.name.as_deref(),
            self.description.as_deref(),
            self.short_description.as_deref(),
            self.primary_category.as_deref(),
            self.city.as_deref(),
            activities.as_deref(),
        ];
        parts
            .iter()
            .flatten()
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Format a dollar amount the way the listing cards do: whole amounts
/// without a decimal point.
pub fn format_dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount as i64)
    } else {
        format!("${}", amount)
    }
}
