//! Number formatting shared by result descriptions (polynomials, intervals).

/// Decimal places kept when rendering a number as text
const DISPLAY_DECIMALS: i32 = 10;

/// Render a number without floating-point noise or trailing zeros.
///
/// `4.0` → `"4"`, `0.30000000000000004` → `"0.3"`, `-2.5` → `"-2.5"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{:.*}", DISPLAY_DECIMALS as usize, rounded);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Round to a fixed number of decimal places for display
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_decimals() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_noise_is_rounded_away() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
    }
}
