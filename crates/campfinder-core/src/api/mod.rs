//! REST API client module for the Airtable data store.
//!
//! This module provides the `AirtableClient` for fetching camp and
//! category records and submitting feedback. All requests are bearer
//! token authenticated; credentials stay server-side.

pub mod client;
pub mod error;

pub use client::{AirtableClient, FeedbackFields};
pub use error::ApiError;
