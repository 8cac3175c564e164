//! Domain types shared by the search pipeline, the catalog and the server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Query parameters exactly as received, before any validation.
///
/// Scalars stay as strings so that parsing, defaulting and clamping all
/// happen in one place (`FilterBuilder`) regardless of transport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSearchParams {
    pub q: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub min_rating: Option<String>,
    pub verified: Option<String>,
    pub limit: Option<String>,
}

impl RawSearchParams {
    pub fn with_query(q: impl Into<String>) -> Self {
        Self { q: Some(q.into()), ..Self::default() }
    }
}

/// Validated, clamped filters handed to the search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: String,
    pub location: Option<GeoPoint>,
    pub radius_km: f64,
    pub business_types: Vec<String>,
    pub min_rating: f64,
    pub verified_only: bool,
    pub limit: usize,
}

/// One business as returned by the search collaborator.
///
/// Only the fields the aggregator reads are typed; everything else the
/// collaborator sends is kept in `extra` and echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BusinessRecord {
    pub fn new(business_type: impl Into<String>, average_rating: f64) -> Self {
        Self {
            business_type: business_type.into(),
            average_rating,
            match_type: None,
            distance_km: None,
            extra: Map::new(),
        }
    }

    pub fn with_match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = Some(match_type.into());
        self
    }

    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }
}

/// Echo of the applied filters plus pagination hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub query: String,
    pub search_location: Option<GeoPoint>,
    pub radius_km: f64,
    pub business_types: Vec<String>,
    pub min_rating: f64,
    pub verified_only: bool,
    pub limit: usize,
    pub total_results: usize,
    pub has_more: bool,
}

/// Summary statistics over the returned page only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchAnalytics {
    pub match_type_distribution: BTreeMap<String, usize>,
    pub avg_rating: f64,
    pub avg_distance_km: Option<f64>,
    pub top_business_types: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceInfo {
    pub execution_time_ms: u64,
    /// Heuristic only: true when the request finished under the cache hint threshold.
    pub cache_used: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub businesses: Vec<BusinessRecord>,
    pub metadata: SearchMetadata,
    pub analytics: SearchAnalytics,
    pub performance: PerformanceInfo,
}
