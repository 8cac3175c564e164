//! lusodir-server
//!
//! Rocket transport for the business directory search service.
pub mod logging;
pub mod routes;

pub use routes::{build_rocket, SearchState};
