//! Data models for camp directory entities.
//!
//! This module contains the record types pulled from the Airtable tables:
//!
//! - `Camp` / `CampFields`: a single camp listing
//! - `CategoryRecord` / `Category`: explicit and derived categories
//! - `RegistrationStatus`: normalized registration state for display

pub mod camp;
pub mod category;
pub mod registration;

pub use camp::{format_dollars, Camp, CampFields};
pub use category::{derive_categories, resolve_categories, Category, CategoryFields, CategoryRecord};
pub use registration::{
    format_registration_date, resolve_status, resolve_status_on, RegistrationStatus,
};
