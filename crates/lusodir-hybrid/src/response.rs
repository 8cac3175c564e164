use lusodir_core::error::Error;
use lusodir_core::types::{
    BusinessRecord, PerformanceInfo, SearchAnalytics, SearchFilters, SearchMetadata, SearchResponse,
};
use serde::Serialize;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub success: bool,
    pub data: SearchResponse,
}

impl From<SearchResponse> for SuccessBody {
    fn from(data: SearchResponse) -> Self {
        Self { success: true, data }
    }
}

/// `{ "success": false, "error": ..., "execution_time_ms": ... }`
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
    pub execution_time_ms: u64,
}

/// A failed search, still timed.
#[derive(Debug)]
pub struct SearchFailure {
    pub error: Error,
    pub execution_time_ms: u64,
}

impl SearchFailure {
    /// 400 for validation problems, 500 for everything else.
    pub fn status_code(&self) -> u16 {
        if self.error.is_client_error() { 400 } else { 500 }
    }

    pub fn body(&self) -> FailureBody {
        FailureBody {
            success: false,
            error: self.error.public_message(),
            execution_time_ms: self.execution_time_ms,
        }
    }
}

pub fn assemble(
    businesses: Vec<BusinessRecord>,
    filters: SearchFilters,
    analytics: SearchAnalytics,
    execution_time_ms: u64,
    cache_hint_ms: u64,
) -> SearchResponse {
    let total_results = businesses.len();
    let metadata = SearchMetadata {
        query: filters.query,
        search_location: filters.location,
        radius_km: filters.radius_km,
        business_types: filters.business_types,
        min_rating: filters.min_rating,
        verified_only: filters.verified_only,
        limit: filters.limit,
        total_results,
        has_more: total_results >= filters.limit,
    };
    SearchResponse {
        businesses,
        metadata,
        analytics,
        performance: PerformanceInfo { execution_time_ms, cache_used: execution_time_ms < cache_hint_ms },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;

    fn filters(limit: usize) -> SearchFilters {
        SearchFilters {
            query: "Lisboa Bakery".into(),
            location: None,
            radius_km: 50.0,
            business_types: vec!["bakery".into()],
            min_rating: 4.0,
            verified_only: true,
            limit,
        }
    }

    fn page(n: usize) -> Vec<BusinessRecord> {
        (0..n).map(|_| BusinessRecord::new("bakery", 4.5)).collect()
    }

    #[test]
    fn has_more_when_page_is_full() {
        let f = filters(2);
        let analytics = aggregate(&page(2), &f);
        let r = assemble(page(2), f, analytics, 12, 100);
        assert!(r.metadata.has_more);
        assert_eq!(r.metadata.total_results, 2);

        let f = filters(3);
        let analytics = aggregate(&page(2), &f);
        assert!(!assemble(page(2), f, analytics, 12, 100).metadata.has_more);
    }

    #[test]
    fn cache_hint_follows_execution_time() {
        let f = filters(10);
        let analytics = aggregate(&[], &f);
        assert!(assemble(vec![], f.clone(), analytics.clone(), 99, 100).performance.cache_used);
        assert!(!assemble(vec![], f, analytics, 100, 100).performance.cache_used);
    }

    #[test]
    fn success_body_shape() {
        let f = filters(10);
        let analytics = aggregate(&page(1), &f);
        let body = SuccessBody::from(assemble(page(1), f, analytics, 5, 100));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["metadata"]["search_location"], serde_json::Value::Null);
        assert_eq!(json["data"]["metadata"]["business_types"][0], "bakery");
        assert_eq!(json["data"]["analytics"]["avg_distance_km"], serde_json::Value::Null);
        assert_eq!(json["data"]["analytics"]["top_business_types"][0][0], "bakery");
        assert_eq!(json["data"]["analytics"]["top_business_types"][0][1], 1);
        assert_eq!(json["data"]["performance"]["execution_time_ms"], 5);
    }

    #[test]
    fn failure_status_and_body() {
        let bad = SearchFailure { error: Error::InvalidCoordinates, execution_time_ms: 1 };
        assert_eq!(bad.status_code(), 400);
        let upstream = SearchFailure { error: Error::Upstream(anyhow::anyhow!("pg: timeout")), execution_time_ms: 42 };
        assert_eq!(upstream.status_code(), 500);
        let body = serde_json::to_value(upstream.body()).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to search businesses");
        assert_eq!(body["execution_time_ms"], 42);
        assert!(!body.to_string().contains("pg: timeout"));
    }
}
