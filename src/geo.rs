use crate::location::Location;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two (latitude, longitude)
/// pairs given in degrees, via the haversine formula.
///
/// Coordinates are not validated; out-of-range input yields a mathematically
/// defined but meaningless result.
pub fn haversine((lat1, lon1): (f64, f64), (lat2, lon2): (f64, f64)) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// A location selected by the radius filter, annotated with its distance from
/// the reference coordinate.
#[derive(Debug)]
pub struct Nearby<'a> {
    pub location: &'a Location,
    pub distance_km: f64,
}

/// Every location within `max_km` of `origin`, in input order. Results are
/// intentionally not sorted by proximity.
pub fn find_nearby<'a>(
    locations: &'a [Location],
    origin: (f64, f64),
    max_km: f64,
) -> Vec<Nearby<'a>> {
    locations
        .iter()
        .map(|location| Nearby {
            location,
            distance_km: haversine(origin, location.coordinates()),
        })
        .filter(|nearby| nearby.distance_km <= max_km)
        .collect()
}
