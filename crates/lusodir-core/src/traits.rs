use async_trait::async_trait;
use serde_json::Value;

use crate::types::{BusinessRecord, SearchFilters};

/// Full text + geo search over the business directory.
///
/// Results come back in the implementation's own relevance order; callers
/// must not re-sort them.
#[async_trait]
pub trait BusinessSearch: Send + Sync {
    async fn search_businesses_hybrid(&self, filters: &SearchFilters) -> anyhow::Result<Vec<BusinessRecord>>;
}

/// Structured log sink used by the request pipeline. Failures are never fatal.
pub trait SearchLogger: Send + Sync {
    fn warn(&self, message: &str, context: &Value) -> anyhow::Result<()>;
    fn error(&self, message: &str, context: &Value) -> anyhow::Result<()>;
}
