use lusodir_core::config::SearchSettings;
use lusodir_core::error::Error;
use lusodir_core::traits::{BusinessSearch, SearchLogger};
use lusodir_core::types::{RawSearchParams, SearchFilters, SearchResponse};
use serde_json::json;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::filters::FilterBuilder;
use crate::response::{assemble, SearchFailure};

/// The business directory search endpoint, minus the transport.
///
/// Collaborators are injected at construction; the service keeps no mutable
/// state, so one instance can serve any number of concurrent requests.
pub struct BusinessSearchService {
    search: Arc<dyn BusinessSearch>,
    logger: Arc<dyn SearchLogger>,
    filters: FilterBuilder,
    settings: SearchSettings,
}

impl BusinessSearchService {
    /// Fails with `Error::InvalidConfig` when `settings` do not validate.
    pub fn new(
        search: Arc<dyn BusinessSearch>,
        logger: Arc<dyn SearchLogger>,
        settings: SearchSettings,
    ) -> lusodir_core::error::Result<Self> {
        let filters = FilterBuilder::new(settings.clone())?;
        Ok(Self { search, logger, filters, settings })
    }

    pub fn settings(&self) -> &SearchSettings { &self.settings }

    /// Validate, search once, aggregate, assemble. Every outcome carries
    /// the elapsed time, failures included.
    pub async fn handle(&self, raw: &RawSearchParams) -> Result<SearchResponse, SearchFailure> {
        let started = Instant::now();

        let filters = match self.filters.build(raw) {
            Ok(filters) => filters,
            Err(error) => {
                debug!(%error, "rejected search request");
                return Err(SearchFailure { error, execution_time_ms: elapsed_ms(started) });
            }
        };

        let mut businesses = match self.search.search_businesses_hybrid(&filters).await {
            Ok(businesses) => businesses,
            Err(e) => {
                let execution_time_ms = elapsed_ms(started);
                let context = json!({
                    "query": filters.query,
                    "error": format!("{e:#}"),
                    "execution_time_ms": execution_time_ms,
                });
                let _ = self.logger.error("Business directory search failed", &context);
                return Err(SearchFailure { error: Error::Upstream(e), execution_time_ms });
            }
        };
        businesses.truncate(filters.limit);

        let analytics = aggregate(&businesses, &filters);
        let execution_time_ms = elapsed_ms(started);
        if execution_time_ms > self.settings.slow_query_ms {
            self.report_slow(&filters, businesses.len(), execution_time_ms);
        }
        info!(query = %filters.query, results = businesses.len(), execution_time_ms, "business search");

        Ok(assemble(businesses, filters, analytics, execution_time_ms, self.settings.cache_hint_ms))
    }

    fn report_slow(&self, filters: &SearchFilters, result_count: usize, execution_time_ms: u64) {
        let context = json!({
            "query": filters.query,
            "location": filters.location,
            "filters": {
                "radius_km": filters.radius_km,
                "business_types": filters.business_types,
                "min_rating": filters.min_rating,
                "verified_only": filters.verified_only,
                "limit": filters.limit,
            },
            "resultCount": result_count,
        });
        let message = format!("Slow business directory search: {execution_time_ms}ms");
        let _ = self.logger.warn(&message, &context);
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
