//! lusodir-catalog
//!
//! In-memory business directory loaded from a JSON fixture. Implements the
//! `BusinessSearch` collaborator so the service can run without the hosted
//! database, and so tests get deterministic ordering.
pub mod entry;
pub mod geo;
pub mod search;

pub use entry::CatalogEntry;
pub use search::{BusinessCatalog, MatchKind};
