//! GitHub contribution badges
//!
//! - Year-window GraphQL fetch and merge pipelines in `pipelines/`
//! - Streak analysis, repository ranking and SVG rendering in `utils/`
//! - Requires GITHUB_TOKEN env var for API access

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod pipelines;
pub mod utils;
