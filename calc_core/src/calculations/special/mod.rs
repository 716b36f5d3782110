//! Special functions.

pub mod bessel;

pub use bessel::{BesselInput, BesselKind, BesselResult};
