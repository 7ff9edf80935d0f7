use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Camp;

/// One category record from the Categories table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    pub fields: CategoryFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryFields {
    #[serde(rename = "Category Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Camp Count", default, skip_serializing_if = "Option::is_none")]
    pub camp_count: Option<i64>,
    #[serde(rename = "Icon", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Denormalized category for listing: name plus camp count, with an
/// optional icon when the upstream table provides one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Build the category list from explicit records, falling back to grouping
/// camps by primary category when the Categories table is empty.
pub fn resolve_categories(records: &[CategoryRecord], camps: &[Camp]) -> Vec<Category> {
    if records.is_empty() {
        return derive_categories(camps);
    }
    records
        .iter()
        .filter_map(|record| {
            record.fields.name.as_ref().map(|name| Category {
                name: name.clone(),
                count: record.fields.camp_count.unwrap_or(0),
                icon: record.fields.icon.clone(),
            })
        })
        .collect()
}

/// Group camps by primary category, preserving first-appearance order.
pub fn derive_categories(camps: &[Camp]) -> Vec<Category> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, i64> = HashMap::new();

    for camp in camps {
        if let Some(ref category) = camp.fields.primary_category {
            if !counts.contains_key(category) {
                order.push(category.clone());
            }
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }

    order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            Category { name, count, icon: None }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CampFields;

    fn camp_in(category: &str) -> Camp {
        Camp {
            id: format!("rec-{}", category),
            created_time: None,
            fields: CampFields {
                primary_category: Some(category.to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn derives_counts_in_first_appearance_order() {
        let camps = vec![
            camp_in("Sports"),
            camp_in("STEM"),
            camp_in("Sports"),
            Camp { id: "rec-none".to_string(), created_time: None, fields: CampFields::default() },
        ];
        let categories = derive_categories(&camps);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], Category { name: "Sports".to_string(), count: 2, icon: None });
        assert_eq!(categories[1], Category { name: "STEM".to_string(), count: 1, icon: None });
    }

    #[test]
    fn explicit_records_win_over_derivation() {
        let records = vec![CategoryRecord {
            id: "recC1".to_string(),
            created_time: None,
            fields: CategoryFields {
                name: Some("Music".to_string()),
                camp_count: Some(4),
                icon: Some("🎵".to_string()),
            },
        }];
        let camps = vec![camp_in("Sports")];

        let categories = resolve_categories(&records, &camps);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Music");
        assert_eq!(categories[0].count, 4);
    }

    #[test]
    fn empty_records_fall_back_to_camps() {
        let categories = resolve_categories(&[], &[camp_in("Arts & Crafts")]);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Arts & Crafts");
    }
}
