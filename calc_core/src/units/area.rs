//! Area units. Base: square metre.

unit_table! {
    /// Area units (base: square metre)
    Area, quantity = "area", base = SquareMeter;
    SquareMillimeter => ("mm2", "Square millimeter", 1e-6, ["mm²"]),
    SquareCentimeter => ("cm2", "Square centimeter", 1e-4, ["cm²"]),
    SquareMeter => ("m2", "Square meter", 1.0, ["m²", "sqm"]),
    Hectare => ("ha", "Hectare", 1e4, ["hectares"]),
    SquareKilometer => ("km2", "Square kilometer", 1e6, ["km²"]),
    SquareInch => ("in2", "Square inch", 0.00064516, ["in²", "sq in"]),
    SquareFoot => ("ft2", "Square foot", 0.09290304, ["ft²", "sq ft", "sqft"]),
    SquareYard => ("yd2", "Square yard", 0.83612736, ["yd²", "sq yd"]),
    Acre => ("ac", "Acre", 4046.8564224, ["acre", "acres"]),
    SquareMile => ("mi2", "Square mile", 2_589_988.110336, ["mi²", "sq mi"]),
}
