use lusodir_core::traits::SearchLogger;
use serde_json::Value;

/// Default `SearchLogger`: forwards to `tracing` with the context as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSearchLogger;

impl SearchLogger for TracingSearchLogger {
    fn warn(&self, message: &str, context: &Value) -> anyhow::Result<()> {
        tracing::warn!(target: "lusodir::search", context = %context, "{}", message);
        Ok(())
    }

    fn error(&self, message: &str, context: &Value) -> anyhow::Result<()> {
        tracing::error!(target: "lusodir::search", context = %context, "{}", message);
        Ok(())
    }
}
