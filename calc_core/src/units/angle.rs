//! Angle units. Base: radian.

use std::f64::consts::PI;

unit_table! {
    /// Angle units (base: radian)
    Angle, quantity = "angle", base = Radian;
    Radian => ("rad", "Radian", 1.0, ["radians"]),
    Milliradian => ("mrad", "Milliradian", 1e-3, ["mil", "milliradians"]),
    Degree => ("deg", "Degree", PI / 180.0, ["°", "degrees"]),
    Gradian => ("grad", "Gradian", PI / 200.0, ["gon", "gradians"]),
    ArcMinute => ("arcmin", "Arcminute", PI / 10_800.0, ["′", "arcminutes"]),
    ArcSecond => ("arcsec", "Arcsecond", PI / 648_000.0, ["″", "arcseconds"]),
    Turn => ("turn", "Turn", 2.0 * PI, ["rev", "revolution", "turns"]),
}
