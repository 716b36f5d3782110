//! # Great-Circle Distance
//!
//! Shortest surface distance between two latitude/longitude points on a
//! spherical Earth, via the Haversine formula.
//!
//! ## Assumptions
//!
//! - Spherical Earth of mean radius 6371 km unless overridden
//! - Coordinates in decimal degrees, north and east positive
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::geo::great_circle::{calculate, GreatCircleInput};
//!
//! // Los Angeles to New York
//! let input = GreatCircleInput::new(34.0522, -118.2437, 40.7128, -74.0060);
//! let result = calculate(&input).unwrap();
//! assert!((result.distance_km - 3935.0).abs() < 40.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::geodesy::{
    haversine_central_angle, initial_bearing_deg, midpoint, EARTH_MEAN_RADIUS_KM, KM_PER_NAUTICAL_MILE,
    MILES_PER_KM,
};
use crate::errors::{ensure_finite, require_finite, require_positive, CalcError, CalcResult};

fn default_radius_km() -> f64 {
    EARTH_MEAN_RADIUS_KM
}

/// Two points and the sphere radius.
///
/// ## JSON Example
///
/// ```json
/// { "lat1": 34.0522, "lon1": -118.2437, "lat2": 40.7128, "lon2": -74.0060 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreatCircleInput {
    /// Latitude of the first point, degrees in [-90, 90]
    pub lat1: f64,
    /// Longitude of the first point, degrees in [-180, 180]
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
    /// Sphere radius in km (defaults to Earth's mean radius)
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

impl GreatCircleInput {
    /// Two points on the default Earth sphere
    pub fn new(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        GreatCircleInput {
            lat1,
            lon1,
            lat2,
            lon2,
            radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_latitude("lat1", self.lat1)?;
        validate_longitude("lon1", self.lon1)?;
        validate_latitude("lat2", self.lat2)?;
        validate_longitude("lon2", self.lon2)?;
        require_positive("radius_km", self.radius_km)?;
        Ok(())
    }
}

fn validate_latitude(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if !(-90.0..=90.0).contains(&value) {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Latitude must be between -90 and 90 degrees",
        ));
    }
    Ok(())
}

fn validate_longitude(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if !(-180.0..=180.0).contains(&value) {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Longitude must be between -180 and 180 degrees",
        ));
    }
    Ok(())
}

/// Results from the great-circle calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreatCircleResult {
    pub distance_km: f64,
    pub distance_miles: f64,
    pub distance_nautical_miles: f64,
    /// Angle subtended at the sphere's centre, degrees
    pub central_angle_deg: f64,
    /// Compass bearing to set off on from point 1, degrees in [0, 360)
    pub initial_bearing_deg: f64,
    pub midpoint_lat: f64,
    pub midpoint_lon: f64,
}

/// Calculate the great-circle distance between two points.
pub fn calculate(input: &GreatCircleInput) -> CalcResult<GreatCircleResult> {
    input.validate()?;

    let central_angle = haversine_central_angle(input.lat1, input.lon1, input.lat2, input.lon2);
    let distance_km = ensure_finite("GreatCircle", "distance", input.radius_km * central_angle)?;
    let (midpoint_lat, midpoint_lon) = midpoint(input.lat1, input.lon1, input.lat2, input.lon2);

    Ok(GreatCircleResult {
        distance_km,
        distance_miles: ensure_finite("GreatCircle", "distance in miles", distance_km * MILES_PER_KM)?,
        distance_nautical_miles: ensure_finite(
            "GreatCircle",
            "distance in nautical miles",
            distance_km / KM_PER_NAUTICAL_MILE,
        )?,
        central_angle_deg: central_angle.to_degrees(),
        initial_bearing_deg: initial_bearing_deg(input.lat1, input.lon1, input.lat2, input.lon2),
        midpoint_lat,
        midpoint_lon,
    })
}
