//! # Spherical Earth Formulas
//!
//! Great-circle geometry on a sphere of radius `R`.
//!
//! ## Notation
//!
//! - `φ` = Latitude (radians), `λ` = Longitude (radians)
//! - `Δφ = φ2 − φ1`, `Δλ = λ2 − λ1`
//! - `c` = Central angle between the two points
//!
//! All public functions take and return degrees.

/// Mean Earth radius (IUGG), km
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Statute miles per kilometre
pub const MILES_PER_KM: f64 = 0.621371;

/// Kilometres per international nautical mile
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Central angle between two points via the Haversine formula
///
/// # Formulas
/// - a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// - c = 2 · atan2(√a, √(1−a))
///
/// # Returns
/// Central angle in radians, in [0, π]
#[inline]
pub fn haversine_central_angle(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let phi1 = lat1_deg.to_radians();
    let phi2 = lat2_deg.to_radians();
    let d_phi = (lat2_deg - lat1_deg).to_radians();
    let d_lambda = (lon2_deg - lon1_deg).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance d = R · c
#[inline]
pub fn haversine_distance(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64, radius: f64) -> f64 {
    radius * haversine_central_angle(lat1_deg, lon1_deg, lat2_deg, lon2_deg)
}

/// Initial bearing (forward azimuth) from point 1 toward point 2
///
/// # Formula
/// θ = atan2(sin Δλ · cos φ2, cos φ1 · sin φ2 − sin φ1 · cos φ2 · cos Δλ)
///
/// # Returns
/// Compass bearing in degrees, normalised to [0, 360)
#[inline]
pub fn initial_bearing_deg(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let phi1 = lat1_deg.to_radians();
    let phi2 = lat2_deg.to_radians();
    let d_lambda = (lon2_deg - lon1_deg).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Point halfway along the great circle between two points
///
/// # Formulas
/// - Bx = cos φ2 · cos Δλ, By = cos φ2 · sin Δλ
/// - φm = atan2(sin φ1 + sin φ2, √((cos φ1 + Bx)² + By²))
/// - λm = λ1 + atan2(By, cos φ1 + Bx)
///
/// # Returns
/// (latitude, longitude) in degrees, longitude normalised to [-180, 180]
#[inline]
pub fn midpoint(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> (f64, f64) {
    let phi1 = lat1_deg.to_radians();
    let phi2 = lat2_deg.to_radians();
    let lambda1 = lon1_deg.to_radians();
    let d_lambda = (lon2_deg - lon1_deg).to_radians();

    let bx = phi2.cos() * d_lambda.cos();
    let by = phi2.cos() * d_lambda.sin();
    let phi_m = (phi1.sin() + phi2.sin()).atan2(((phi1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lambda_m = lambda1 + by.atan2(phi1.cos() + bx);

    let lon = (lambda_m.to_degrees() + 540.0) % 360.0 - 180.0;
    (phi_m.to_degrees(), lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_zero_distance() {
        let c = haversine_central_angle(51.5, -0.12, 51.5, -0.12);
        assert!(approx_eq(c, 0.0), "c = {}", c);
    }

    #[test]
    fn test_quarter_meridian() {
        // Equator to pole is a quarter of a great circle
        let c = haversine_central_angle(0.0, 0.0, 90.0, 0.0);
        assert!(approx_eq(c, std::f64::consts::FRAC_PI_2), "c = {}", c);
    }

    #[test]
    fn test_antipodal_points() {
        let c = haversine_central_angle(0.0, 0.0, 0.0, 180.0);
        assert!(approx_eq(c, std::f64::consts::PI), "c = {}", c);
    }

    #[test]
    fn test_la_to_nyc() {
        let d = haversine_distance(34.0522, -118.2437, 40.7128, -74.0060, EARTH_MEAN_RADIUS_KM);
        assert!((d - 3935.0).abs() / 3935.0 < 0.01, "d = {} km", d);
    }

    #[test]
    fn test_bearing_due_east_on_equator() {
        let b = initial_bearing_deg(0.0, 0.0, 0.0, 10.0);
        assert!(approx_eq(b, 90.0), "bearing = {}", b);
    }

    #[test]
    fn test_bearing_due_south() {
        let b = initial_bearing_deg(10.0, 5.0, -10.0, 5.0);
        assert!(approx_eq(b, 180.0), "bearing = {}", b);
    }

    #[test]
    fn test_midpoint_on_equator() {
        let (lat, lon) = midpoint(0.0, 0.0, 0.0, 90.0);
        assert!(approx_eq(lat, 0.0), "lat = {}", lat);
        assert!(approx_eq(lon, 45.0), "lon = {}", lon);
    }

    #[test]
    fn test_midpoint_across_antimeridian() {
        let (_, lon) = midpoint(0.0, 170.0, 0.0, -170.0);
        assert!(approx_eq(lon.abs(), 180.0), "lon = {}", lon);
    }
}
