use lusodir_core::config::SearchSettings;
use lusodir_core::error::{Error, Result};
use lusodir_core::types::{GeoPoint, RawSearchParams, SearchFilters};
use tracing::debug;

use crate::normalize::normalize_query;

/// Turns raw query parameters into validated, clamped `SearchFilters`.
///
/// Out-of-range radius, limit and rating values are clamped rather than
/// rejected. Only the query and the coordinates can fail validation.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    settings: SearchSettings,
}

impl FilterBuilder {
    /// Rejects settings that would make clamping impossible.
    pub fn new(settings: SearchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn build(&self, raw: &RawSearchParams) -> Result<SearchFilters> {
        let s = &self.settings;
        let query = normalize_query(raw.q.as_deref(), s.min_query_len)?;
        let location = parse_location(raw.lat.as_deref(), raw.lng.as_deref())?;

        let radius_km = parse_f64(raw.radius.as_deref())
            .unwrap_or(s.default_radius_km)
            .clamp(0.0, s.max_radius_km);
        let limit = parse_i64(raw.limit.as_deref())
            .map_or(s.default_limit, |l| usize::try_from(l.max(1)).unwrap_or(s.max_limit))
            .clamp(1, s.max_limit);
        let min_rating = parse_f64(raw.min_rating.as_deref()).unwrap_or(0.0).max(0.0);
        let verified_only = raw.verified.as_deref() != Some("false");

        let mut business_types: Vec<String> = Vec::new();
        for t in raw.types.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !business_types.iter().any(|seen| seen == t) {
                business_types.push(t.to_string());
            }
        }

        let filters = SearchFilters { query, location, radius_km, business_types, min_rating, verified_only, limit };
        debug!(?filters, "filters built");
        Ok(filters)
    }
}

/// Both coordinates or neither; blank strings count as absent.
fn parse_location(lat: Option<&str>, lng: Option<&str>) -> Result<Option<GeoPoint>> {
    let lat = lat.map(str::trim).filter(|s| !s.is_empty());
    let lng = lng.map(str::trim).filter(|s| !s.is_empty());
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let point = match (lat.parse::<f64>(), lng.parse::<f64>()) {
                (Ok(lat), Ok(lng)) => GeoPoint::new(lat, lng),
                _ => return Err(Error::InvalidCoordinates),
            };
            if point.is_valid() { Ok(Some(point)) } else { Err(Error::InvalidCoordinates) }
        }
        _ => Err(Error::InvalidCoordinates),
    }
}

fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Leading integer of the input, so `"10.5"` and `"12abc"` read as 10 and 12.
fn parse_i64(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim();
    let digits_start = usize::from(s.starts_with(['+', '-']));
    let digits_end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| digits_start + i);
    if digits_end == digits_start {
        return None;
    }
    match s[..digits_end].parse::<i64>() {
        Ok(v) => Some(v),
        // too many digits for i64: saturate in the sign's direction
        Err(_) => Some(if s.starts_with('-') { i64::MIN } else { i64::MAX }),
    }
}
