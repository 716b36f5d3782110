//! Force units. Base: newton.

/// Standard gravity, m/s²
const STANDARD_GRAVITY: f64 = 9.80665;
/// Pound-force in newtons (avoirdupois pound × standard gravity)
const POUND_FORCE_N: f64 = 0.45359237 * STANDARD_GRAVITY;

unit_table! {
    /// Force units (base: newton)
    Force, quantity = "force", base = Newton;
    Dyne => ("dyn", "Dyne", 1e-5, ["dynes"]),
    Newton => ("N", "Newton", 1.0, ["newtons"]),
    Kilonewton => ("kN", "Kilonewton", 1e3, ["kilonewtons"]),
    KilogramForce => ("kgf", "Kilogram-force", STANDARD_GRAVITY, ["kilopond", "kp"]),
    PoundForce => ("lbf", "Pound-force", POUND_FORCE_N, ["pound-force", "pounds-force"]),
    OunceForce => ("ozf", "Ounce-force", POUND_FORCE_N / 16.0, ["ounce-force"]),
    Poundal => ("pdl", "Poundal", 0.138254954376, ["poundals"]),
    Kip => ("kip", "Kip", POUND_FORCE_N * 1000.0, ["kips"]),
}
