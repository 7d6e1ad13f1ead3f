//! GitHub GraphQL access for a user's contribution history
//!
//! - `index` holds the HTTP client and the per-query fetchers
//! - `models` holds the typed response payloads

pub mod index;
pub mod models;
