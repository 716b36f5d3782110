//! # Formula Library
//!
//! Raw formulas behind every calculator, kept in one place so each can be
//! checked against its published source. Functions here take plain `f64`
//! arguments and perform no validation; the `calculations` layer validates
//! inputs before calling them.
//!
//! ## Modules
//!
//! - [`geodesy`] - Haversine distance, initial bearing, midpoint
//! - [`growth`] - Compound growth, annuity future value, doubling time
//! - [`bessel`] - Bessel functions of the first and second kind
//! - [`polynomial`] - Polynomial parsing and like-term arithmetic
//!
//! ## Conventions
//!
//! - **Angles**: Degrees at the public boundary, radians internally
//! - **Rates**: Percent at the public boundary (`10.0` = 10 %), fractions internally
//!
//! ## References
//!
//! - Abramowitz & Stegun, Handbook of Mathematical Functions, §9.4
//! - Press et al., Numerical Recipes, 3rd Edition, §6.5
//! - Sinnott, "Virtues of the Haversine", Sky & Telescope 68(2), 1984

pub mod bessel;
pub mod geodesy;
pub mod growth;
pub mod polynomial;

pub use bessel::{bessel_j0, bessel_j1, bessel_jn, bessel_y0, bessel_y1, bessel_yn};

pub use geodesy::{
    haversine_central_angle,
    haversine_distance,
    initial_bearing_deg,
    midpoint,
    EARTH_MEAN_RADIUS_KM,
    KM_PER_NAUTICAL_MILE,
    MILES_PER_KM,
};

pub use growth::{
    compound_step,
    doubling_time_exact,
    doubling_time_rule,
    future_value_annuity,
    future_value_lump_sum,
};

pub use polynomial::{Monomial, Polynomial};
