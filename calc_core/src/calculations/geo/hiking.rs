//! # Hiking Time (Naismith's Rule)
//!
//! Estimated walking time = distance / base pace + ascent / climb rate.
//!
//! Naismith's original rule is 3 mph plus one hour per 2000 ft of ascent;
//! the metric form used here defaults to 5 km/h plus one hour per 600 m.
//! Descent is not counted.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, require_non_negative, require_positive, CalcError, CalcResult};

/// Flat-ground walking pace, km/h
pub const DEFAULT_PACE_KMH: f64 = 5.0;

/// Vertical metres climbed per added hour
pub const DEFAULT_ASCENT_M_PER_HOUR: f64 = 600.0;

fn default_pace_kmh() -> f64 {
    DEFAULT_PACE_KMH
}

fn default_ascent_m_per_hour() -> f64 {
    DEFAULT_ASCENT_M_PER_HOUR
}

/// Route inputs.
///
/// ## JSON Example
///
/// ```json
/// { "distance_km": 12.0, "ascent_m": 900.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HikingInput {
    /// Horizontal route length, km
    pub distance_km: f64,
    /// Total elevation gain, m
    pub ascent_m: f64,
    #[serde(default = "default_pace_kmh")]
    pub pace_kmh: f64,
    #[serde(default = "default_ascent_m_per_hour")]
    pub ascent_m_per_hour: f64,
}

impl HikingInput {
    /// Route with the standard Naismith rates
    pub fn new(distance_km: f64, ascent_m: f64) -> Self {
        HikingInput {
            distance_km,
            ascent_m,
            pace_kmh: DEFAULT_PACE_KMH,
            ascent_m_per_hour: DEFAULT_ASCENT_M_PER_HOUR,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("distance_km", self.distance_km)?;
        require_non_negative("ascent_m", self.ascent_m)?;
        require_positive("pace_kmh", self.pace_kmh)?;
        require_positive("ascent_m_per_hour", self.ascent_m_per_hour)?;
        Ok(())
    }
}

/// Estimated hiking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikingResult {
    pub total_hours: f64,
    /// Time spent covering horizontal distance
    pub flat_hours: f64,
    /// Time added for climbing
    pub ascent_hours: f64,
    /// Whole hours of the rounded total
    pub hours: u64,
    /// Remaining minutes of the rounded total
    pub minutes: u64,
    /// e.g. "3h 54m"
    pub formatted: String,
}

/// Estimate hiking time with Naismith's Rule.
pub fn calculate(input: &HikingInput) -> CalcResult<HikingResult> {
    input.validate()?;

    let flat_hours = ensure_finite("Hiking", "flat hours", input.distance_km / input.pace_kmh)?;
    let ascent_hours = ensure_finite("Hiking", "ascent hours", input.ascent_m / input.ascent_m_per_hour)?;
    let total_hours = ensure_finite("Hiking", "total hours", flat_hours + ascent_hours)?;

    let rounded_minutes = (total_hours * 60.0).round();
    if rounded_minutes >= u64::MAX as f64 {
        return Err(CalcError::calculation_failed(
            "Hiking",
            format!("{} hours is too long to express in minutes", total_hours),
        ));
    }
    let total_minutes = rounded_minutes as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    Ok(HikingResult {
        total_hours,
        flat_hours,
        ascent_hours,
        hours,
        minutes,
        formatted: format!("{}h {:02}m", hours, minutes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_route() {
        let result = calculate(&HikingInput::new(10.0, 0.0)).unwrap();
        assert!((result.total_hours - 2.0).abs() < 1e-12);
        assert_eq!(result.formatted, "2h 00m");
    }

    #[test]
    fn test_with_ascent() {
        // 12 km → 2.4 h, 900 m → 1.5 h
        let result = calculate(&HikingInput::new(12.0, 900.0)).unwrap();
        assert!((result.flat_hours - 2.4).abs() < 1e-12);
        assert!((result.ascent_hours - 1.5).abs() < 1e-12);
        assert_eq!((result.hours, result.minutes), (3, 54));
    }

    #[test]
    fn test_original_imperial_rule() {
        // 3 mph and 2000 ft/h expressed in metric
        let input = HikingInput {
            distance_km: 4.828032,
            ascent_m: 609.6,
            pace_kmh: 4.828032,
            ascent_m_per_hour: 609.6,
        };
        let result = calculate(&input).unwrap();
        assert!((result.total_hours - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(calculate(&HikingInput::new(-1.0, 0.0)).is_err());
        assert!(calculate(&HikingInput::new(1.0, -10.0)).is_err());
        let mut input = HikingInput::new(1.0, 0.0);
        input.pace_kmh = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("pace_kmh"));
    }

    #[test]
    fn test_unrepresentable_duration_fails() {
        let mut input = HikingInput::new(f64::MAX, 0.0);
        input.pace_kmh = 1e-10;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "CALCULATION_FAILED");

        // Finite hours, but more minutes than fit the counter
        let err = calculate(&HikingInput::new(1e20, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
