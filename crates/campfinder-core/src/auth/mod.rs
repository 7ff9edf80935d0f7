//! Authentication module.
//!
//! Token verification only: login and the OAuth redirect dance happen at
//! the auth provider, never here. This module checks the bearer tokens
//! the provider issued.

pub mod verifier;

pub use verifier::{bearer_token, AuthError, AuthVerifier, VerifiedUser};
