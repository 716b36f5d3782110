//! # Bessel Functions
//!
//! Bessel functions of the first kind `Jn(x)` and second kind `Yn(x)` for
//! integer order.
//!
//! Orders 0 and 1 use the polynomial approximations of Abramowitz & Stegun
//! §9.4 (absolute error below 1e-7). Higher orders are built by recurrence:
//!
//! - `Yn`: forward recurrence, which is stable for all x
//! - `Jn`: forward recurrence when |x| > n, otherwise Miller's backward
//!   recurrence normalised with 1 = J0 + 2·(J2 + J4 + ...)
//!
//! `Yn` is singular at the origin; every `bessel_y*` function returns
//! `f64::NEG_INFINITY` at x = 0 and NaN for x < 0.

use std::f64::consts::FRAC_2_PI;

/// Start of the backward recurrence is `n + sqrt(ACC·n)`
const MILLER_ACC: f64 = 160.0;
const BIG: f64 = 1.0e10;
const BIG_INV: f64 = 1.0e-10;

/// Evaluate c0 + c1·t + c2·t² + ... by Horner's rule
#[inline]
fn horner(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

// A&S 9.4.1, |x| ≤ 3, powers of (x/3)²
const J0_SMALL: [f64; 7] = [
    1.0, -2.2499997, 1.2656208, -0.3163866, 0.0444479, -0.0039444, 0.0002100,
];

// A&S 9.4.2, 0 < x ≤ 3, powers of (x/3)²
const Y0_SMALL: [f64; 7] = [
    0.36746691, 0.60559366, -0.74350384, 0.25300117, -0.04261214, 0.00427916, -0.00024846,
];

// A&S 9.4.3, x ≥ 3, powers of 3/x
const F0_LARGE: [f64; 7] = [
    0.79788456, -0.00000077, -0.00552740, -0.00009512, 0.00137237, -0.00072805, 0.00014476,
];
const THETA0_LARGE: [f64; 7] = [
    -0.78539816, -0.04166397, -0.00003954, 0.00262573, -0.00054125, -0.00029333, 0.00013558,
];

// A&S 9.4.4, |x| ≤ 3, x⁻¹·J1(x) in powers of (x/3)²
const J1_SMALL: [f64; 7] = [
    0.5, -0.56249985, 0.21093573, -0.03954289, 0.00443319, -0.00031761, 0.00001109,
];

// A&S 9.4.5, 0 < x ≤ 3, x·Y1(x) remainder in powers of (x/3)²
const Y1_SMALL: [f64; 7] = [
    -0.6366198, 0.2212091, 2.1682709, -1.3164827, 0.3123951, -0.0400976, 0.0027873,
];

// A&S 9.4.6, x ≥ 3, powers of 3/x
const F1_LARGE: [f64; 7] = [
    0.79788456, 0.00000156, 0.01659667, 0.00017105, -0.00249511, 0.00113653, -0.00020033,
];
const THETA1_LARGE: [f64; 7] = [
    -2.35619449, 0.12499612, 0.00005650, -0.00637879, 0.00074348, 0.00079824, -0.00029166,
];

/// Modulus and phase (f, θ) of the asymptotic form J = f·cos θ / √x, Y = f·sin θ / √x
#[inline]
fn asymptotic(x: f64, f_coeffs: &[f64], theta_coeffs: &[f64]) -> (f64, f64) {
    let t = 3.0 / x;
    (horner(t, f_coeffs), x + horner(t, theta_coeffs))
}

/// J0(x), even in x
pub fn bessel_j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= 3.0 {
        horner((ax / 3.0).powi(2), &J0_SMALL)
    } else {
        let (f, theta) = asymptotic(ax, &F0_LARGE, &THETA0_LARGE);
        f * theta.cos() / ax.sqrt()
    }
}

/// J1(x), odd in x
pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= 3.0 {
        x * horner((ax / 3.0).powi(2), &J1_SMALL)
    } else {
        let (f, theta) = asymptotic(ax, &F1_LARGE, &THETA1_LARGE);
        (f * theta.cos() / ax.sqrt()).copysign(x)
    }
}

/// Y0(x) for x > 0
pub fn bessel_y0(x: f64) -> f64 {
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x <= 3.0 {
        FRAC_2_PI * (x / 2.0).ln() * bessel_j0(x) + horner((x / 3.0).powi(2), &Y0_SMALL)
    } else {
        let (f, theta) = asymptotic(x, &F0_LARGE, &THETA0_LARGE);
        f * theta.sin() / x.sqrt()
    }
}

/// Y1(x) for x > 0
pub fn bessel_y1(x: f64) -> f64 {
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x <= 3.0 {
        FRAC_2_PI * (x / 2.0).ln() * bessel_j1(x) + horner((x / 3.0).powi(2), &Y1_SMALL) / x
    } else {
        let (f, theta) = asymptotic(x, &F1_LARGE, &THETA1_LARGE);
        f * theta.sin() / x.sqrt()
    }
}

/// Jn(x) for non-negative integer order
pub fn bessel_jn(n: u32, x: f64) -> f64 {
    match n {
        0 => return bessel_j0(x),
        1 => return bessel_j1(x),
        _ => {}
    }

    let ax = x.abs();
    if ax == 0.0 {
        return 0.0;
    }

    let two_over_x = 2.0 / ax;
    let value = if ax > f64::from(n) {
        let mut j_prev = bessel_j0(ax);
        let mut j = bessel_j1(ax);
        for k in 1..n {
            let j_next = f64::from(k) * two_over_x * j - j_prev;
            j_prev = j;
            j = j_next;
        }
        j
    } else {
        // Even starting index so the normalisation sum picks up J0, J2, J4, ...
        let start = 2 * ((n + (MILLER_ACC * f64::from(n)).sqrt() as u32) / 2);
        let mut add_to_sum = false;
        let mut j_next = 0.0;
        let mut j = 1.0;
        let mut result = 0.0;
        let mut sum = 0.0;
        for k in (1..=start).rev() {
            let j_prev = f64::from(k) * two_over_x * j - j_next;
            j_next = j;
            j = j_prev;
            if j.abs() > BIG {
                j *= BIG_INV;
                j_next *= BIG_INV;
                result *= BIG_INV;
                sum *= BIG_INV;
            }
            if add_to_sum {
                sum += j;
            }
            add_to_sum = !add_to_sum;
            if k == n {
                result = j_next;
            }
        }
        sum = 2.0 * sum - j;
        result / sum
    };

    if x < 0.0 && n % 2 == 1 {
        -value
    } else {
        value
    }
}

/// Yn(x) for non-negative integer order and x > 0
pub fn bessel_yn(n: u32, x: f64) -> f64 {
    match n {
        0 => return bessel_y0(x),
        1 => return bessel_y1(x),
        _ => {}
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x < 0.0 {
        return f64::NAN;
    }

    let two_over_x = 2.0 / x;
    let mut y_prev = bessel_y0(x);
    let mut y = bessel_y1(x);
    for k in 1..n {
        let y_next = f64::from(k) * two_over_x * y - y_prev;
        y_prev = y;
        y = y_next;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tabulated values (A&S Table 9.1 and 9.2)
    const TOLERANCE: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_j0_values() {
        assert!(approx_eq(bessel_j0(0.0), 1.0));
        assert!(approx_eq(bessel_j0(1.0), 0.7651976866), "J0(1) = {}", bessel_j0(1.0));
        assert!(approx_eq(bessel_j0(5.0), -0.1775967713), "J0(5) = {}", bessel_j0(5.0));
        assert!(approx_eq(bessel_j0(-1.0), bessel_j0(1.0)));
    }

    #[test]
    fn test_j1_values() {
        assert!(approx_eq(bessel_j1(0.0), 0.0));
        assert!(approx_eq(bessel_j1(1.0), 0.4400505857), "J1(1) = {}", bessel_j1(1.0));
        assert!(approx_eq(bessel_j1(5.0), -0.3275791376), "J1(5) = {}", bessel_j1(5.0));
        assert!(approx_eq(bessel_j1(-5.0), 0.3275791376));
    }

    #[test]
    fn test_y0_y1_values() {
        assert!(approx_eq(bessel_y0(1.0), 0.0882569642), "Y0(1) = {}", bessel_y0(1.0));
        assert!(approx_eq(bessel_y0(5.0), -0.3085176252), "Y0(5) = {}", bessel_y0(5.0));
        assert!(approx_eq(bessel_y1(1.0), -0.7812128213), "Y1(1) = {}", bessel_y1(1.0));
        assert!(approx_eq(bessel_y1(5.0), 0.1478631434), "Y1(5) = {}", bessel_y1(5.0));
    }

    #[test]
    fn test_higher_order_j() {
        assert!(approx_eq(bessel_jn(2, 1.0), 0.1149034849), "J2(1) = {}", bessel_jn(2, 1.0));
        assert!(approx_eq(bessel_jn(3, 2.0), 0.1289432495), "J3(2) = {}", bessel_jn(3, 2.0));
        assert!(approx_eq(bessel_jn(2, 5.0), 0.0465651163), "J2(5) = {}", bessel_jn(2, 5.0));
        assert!(approx_eq(bessel_jn(5, 0.0), 0.0));
        assert!(approx_eq(bessel_jn(3, -2.0), -0.1289432495));
    }

    #[test]
    fn test_higher_order_y() {
        assert!(approx_eq(bessel_yn(2, 1.0), -1.6506826068), "Y2(1) = {}", bessel_yn(2, 1.0));
        assert!(approx_eq(bessel_yn(2, 5.0), 0.3676628826), "Y2(5) = {}", bessel_yn(2, 5.0));
    }

    #[test]
    fn test_y_singular_at_origin() {
        assert_eq!(bessel_y0(0.0), f64::NEG_INFINITY);
        assert_eq!(bessel_y1(0.0), f64::NEG_INFINITY);
        assert_eq!(bessel_yn(4, 0.0), f64::NEG_INFINITY);
        assert!(bessel_yn(2, -1.0).is_nan());
    }
}
