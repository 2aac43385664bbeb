use super::geo_point::degrees_to_radians;
use super::GeoPoint;

// average earth radius is assumed to be 6371km
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance in kilometers between two
/// latitude/longitude pairs given in degrees.
/// Done using formula from https://en.wikipedia.org/wiki/Haversine_formula.
/// The angular distance is recovered with atan2 instead of asin so the
/// result stays accurate when the points are nearly antipodal.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = degrees_to_radians(lat2 - lat1);
    let d_lon = degrees_to_radians(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2)
            * degrees_to_radians(lat1).cos()
            * degrees_to_radians(lat2).cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculates the distance between two geopoints in kilometers.
pub fn geodistance_haversine(point_a: GeoPoint, point_b: GeoPoint) -> f64 {
    haversine(point_a.lat(), point_a.lon(), point_b.lat(), point_b.lon())
}
