//! Core library for the CampFinder summer camp directory.
//!
//! Everything here is frontend-agnostic: the Airtable API client, the
//! record models and registration-status resolver, the in-memory snapshot
//! cache, the filter engine, directory roll-ups, and bearer token
//! verification. The HTTP server in `campfinder-server` composes these.

pub mod api;
pub mod auth;
pub mod cache;
pub mod filter;
pub mod models;
pub mod summaries;
