use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A geographical coordinate as a latitude/longitude pair in decimal degrees.
/// Values outside the usual [-90, 90] / [-180, 180] ranges are not rejected;
/// distances computed from them are mathematically defined but not
/// geographically meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    pub fn from_radians(lat_rad: f64, lon_rad: f64) -> Self {
        GeoPoint {
            lat: radians_to_degrees(lat_rad),
            lon: radians_to_degrees(lon_rad),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_rad(&self) -> f64 {
        degrees_to_radians(self.lat)
    }

    pub fn lon_rad(&self) -> f64 {
        degrees_to_radians(self.lon)
    }
}

pub(super) fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
