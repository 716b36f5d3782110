//! Length units. Base: metre.

unit_table! {
    /// Length units (base: metre)
    Length, quantity = "length", base = Meter;
    Nanometer => ("nm", "Nanometer", 1e-9, ["nanometers", "nanometre"]),
    Micrometer => ("um", "Micrometer", 1e-6, ["µm", "micron", "micrometers"]),
    Millimeter => ("mm", "Millimeter", 1e-3, ["millimeters", "millimetre", "millimetres"]),
    Centimeter => ("cm", "Centimeter", 1e-2, ["centimeters", "centimetre", "centimetres"]),
    Meter => ("m", "Meter", 1.0, ["meters", "metre", "metres"]),
    Kilometer => ("km", "Kilometer", 1e3, ["kilometers", "kilometre", "kilometres"]),
    Inch => ("in", "Inch", 0.0254, ["inches", "\""]),
    Foot => ("ft", "Foot", 0.3048, ["feet", "'"]),
    Yard => ("yd", "Yard", 0.9144, ["yards"]),
    Mile => ("mi", "Mile", 1609.344, ["miles"]),
    NauticalMile => ("nmi", "Nautical mile", 1852.0, ["nautical miles", "NM"]),
}
