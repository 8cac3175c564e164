use lusodir_core::types::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = GeoPoint::new(51.5, -0.12);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn london_to_lisbon() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let lisbon = GeoPoint::new(38.7223, -9.1393);
        let d = haversine_km(london, lisbon);
        assert!((d - 1585.0).abs() < 10.0, "got {d}");
    }
}
