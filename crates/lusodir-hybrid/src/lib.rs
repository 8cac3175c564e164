//! lusodir-hybrid
//!
//! Request pipeline for the business directory search: normalise the query,
//! build filters, call the search collaborator once, aggregate the returned
//! page and assemble the response envelope.
pub mod aggregate;
pub mod filters;
pub mod logger;
pub mod normalize;
pub mod response;
pub mod service;

pub use filters::FilterBuilder;
pub use logger::TracingSearchLogger;
pub use response::{FailureBody, SearchFailure, SuccessBody};
pub use service::BusinessSearchService;
