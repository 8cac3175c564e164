use lusodir_core::types::{BusinessRecord, SearchAnalytics, SearchFilters};
use std::collections::{BTreeMap, HashMap};

pub const UNKNOWN_MATCH_TYPE: &str = "unknown";
pub const TOP_TYPES: usize = 5;

/// Summarise the returned page. Nothing here re-queries the collaborator,
/// so every figure describes this page only.
pub fn aggregate(records: &[BusinessRecord], filters: &SearchFilters) -> SearchAnalytics {
    SearchAnalytics {
        match_type_distribution: match_type_distribution(records),
        avg_rating: avg_rating(records),
        avg_distance_km: if filters.location.is_some() { avg_distance_km(records) } else { None },
        top_business_types: top_business_types(records, TOP_TYPES),
    }
}

pub fn match_type_distribution(records: &[BusinessRecord]) -> BTreeMap<String, usize> {
    let mut out = BTreeMap::new();
    for r in records {
        let key = r.match_type.as_deref().unwrap_or(UNKNOWN_MATCH_TYPE);
        *out.entry(key.to_string()).or_insert(0) += 1;
    }
    out
}

/// Mean rating rounded to one decimal; 0 for an empty page.
pub fn avg_rating(records: &[BusinessRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.average_rating).sum();
    round_to(sum / records.len() as f64, 1)
}

/// Mean distance rounded to two decimals; records without a distance count as 0.
pub fn avg_distance_km(records: &[BusinessRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.distance_km.unwrap_or(0.0)).sum();
    Some(round_to(sum / records.len() as f64, 2))
}

/// Most frequent business types, count descending, ties alphabetical.
pub fn top_business_types(records: &[BusinessRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.business_type.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().map(|(t, c)| (t.to_string(), c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
