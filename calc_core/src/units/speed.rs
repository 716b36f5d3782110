//! Speed units. Base: metre per second.

unit_table! {
    /// Speed units (base: metre per second)
    Speed, quantity = "speed", base = MeterPerSecond;
    MeterPerSecond => ("m/s", "Meter per second", 1.0, ["mps", "meters per second"]),
    KilometerPerHour => ("km/h", "Kilometer per hour", 1.0 / 3.6, ["kph", "kmh", "kilometers per hour"]),
    MilePerHour => ("mph", "Mile per hour", 0.44704, ["mi/h", "miles per hour"]),
    FootPerSecond => ("ft/s", "Foot per second", 0.3048, ["fps", "feet per second"]),
    Knot => ("kn", "Knot", 1852.0 / 3600.0, ["kt", "knots"]),
    // Speed of sound in dry air at 20 °C
    Mach => ("Ma", "Mach (20 °C air)", 343.0, ["mach"]),
}
