use async_trait::async_trait;
use lusodir_core::error::{Error, Result};
use lusodir_core::traits::BusinessSearch;
use lusodir_core::types::{BusinessRecord, SearchFilters};
use serde_json::Value;
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, info};

use crate::entry::CatalogEntry;
use crate::geo::haversine_km;

/// Why an entry matched, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Name,
    Specialty,
    Type,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Name => "name",
            MatchKind::Specialty => "specialty",
            MatchKind::Type => "type",
        }
    }
}

const TYPED_RECORD_KEYS: &[&str] = &["business_type", "average_rating", "match_type", "distance_km"];

pub struct BusinessCatalog {
    entries: Vec<CatalogEntry>,
}

struct Candidate<'a> {
    entry: &'a CatalogEntry,
    kind: MatchKind,
    distance_km: Option<f64>,
}

impl BusinessCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self { Self { entries } }

    /// Load a JSON array of listings.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Catalog(format!("cannot read {}: {}", path.display(), e)))?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)
            .map_err(|e| Error::Catalog(format!("cannot parse {}: {}", path.display(), e)))?;
        info!(path = %path.display(), businesses = entries.len(), "catalog loaded");
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn search(&self, filters: &SearchFilters) -> Vec<BusinessRecord> {
        let needle = filters.query.to_lowercase();
        let mut candidates: Vec<Candidate<'_>> = self
            .entries
            .iter()
            .filter(|e| !filters.verified_only || e.verified)
            .filter(|e| e.average_rating >= filters.min_rating)
            .filter(|e| {
                filters.business_types.is_empty()
                    || filters.business_types.iter().any(|t| t.eq_ignore_ascii_case(&e.business_type))
            })
            .filter_map(|entry| {
                let kind = match_kind(entry, &needle)?;
                let distance_km = match filters.location {
                    Some(origin) => {
                        let d = haversine_km(origin, entry.location()?);
                        if d > filters.radius_km { return None; }
                        Some(round2(d))
                    }
                    None => None,
                };
                Some(Candidate { entry, kind, distance_km })
            })
            .collect();

        candidates.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| cmp_f64(a.distance_km.unwrap_or(0.0), b.distance_km.unwrap_or(0.0)))
                .then_with(|| cmp_f64(b.entry.average_rating, a.entry.average_rating))
                .then_with(|| a.entry.name.cmp(&b.entry.name))
        });
        candidates.truncate(filters.limit);
        debug!(query = %filters.query, hits = candidates.len(), "catalog search");
        candidates.into_iter().map(to_record).collect()
    }
}

#[async_trait]
impl BusinessSearch for BusinessCatalog {
    async fn search_businesses_hybrid(&self, filters: &SearchFilters) -> anyhow::Result<Vec<BusinessRecord>> {
        Ok(self.search(filters))
    }
}

fn match_kind(entry: &CatalogEntry, needle: &str) -> Option<MatchKind> {
    if entry.name.to_lowercase().contains(needle) {
        Some(MatchKind::Name)
    } else if entry.specialties.iter().any(|s| s.to_lowercase().contains(needle)) {
        Some(MatchKind::Specialty)
    } else if entry.business_type.to_lowercase().contains(needle) {
        Some(MatchKind::Type)
    } else {
        None
    }
}

fn to_record(c: Candidate<'_>) -> BusinessRecord {
    let e = c.entry;
    let mut extra = e.extra.clone();
    // typed record fields win over same-named passthrough keys
    for key in TYPED_RECORD_KEYS {
        extra.remove(*key);
    }
    extra.insert("id".into(), Value::from(e.id.clone()));
    extra.insert("name".into(), Value::from(e.name.clone()));
    extra.insert("specialties".into(), Value::from(e.specialties.clone()));
    extra.insert("verified".into(), Value::from(e.verified));
    if let Some(p) = e.location() {
        extra.insert("latitude".into(), Value::from(p.latitude));
        extra.insert("longitude".into(), Value::from(p.longitude));
    }
    BusinessRecord {
        business_type: e.business_type.clone(),
        average_rating: e.average_rating,
        match_type: Some(c.kind.as_str().to_string()),
        distance_km: c.distance_km,
        extra,
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering { a.partial_cmp(&b).unwrap_or(Ordering::Equal) }

fn round2(v: f64) -> f64 { (v * 100.0).round() / 100.0 }
