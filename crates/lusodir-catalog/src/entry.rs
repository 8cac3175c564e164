use lusodir_core::types::GeoPoint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One business listing in the fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub business_type: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Anything else (address, phone, opening hours...) is passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)).filter(GeoPoint::is_valid),
            _ => None,
        }
    }
}
