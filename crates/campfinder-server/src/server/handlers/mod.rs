//! Request handlers, grouped by endpoint family.

pub mod auth;
pub mod camps;
pub mod favorites;
pub mod feedback;
pub mod proxy;
