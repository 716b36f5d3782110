//! Volume units. Base: litre.
//!
//! US customary units use the US liquid definitions (1 gal = 231 in³).

unit_table! {
    /// Volume units (base: litre)
    Volume, quantity = "volume", base = Liter;
    Milliliter => ("mL", "Milliliter", 1e-3, ["ml", "millilitre", "milliliters"]),
    CubicCentimeter => ("cm3", "Cubic centimeter", 1e-3, ["cm³", "cc"]),
    Liter => ("L", "Liter", 1.0, ["l", "litre", "liters", "litres"]),
    CubicMeter => ("m3", "Cubic meter", 1e3, ["m³", "cubic metre"]),
    UsTeaspoon => ("tsp", "Teaspoon (US)", 0.00492892159375, ["teaspoon"]),
    UsTablespoon => ("tbsp", "Tablespoon (US)", 0.01478676478125, ["tablespoon"]),
    UsFluidOunce => ("fl oz", "Fluid ounce (US)", 0.0295735295625, ["floz", "fluid ounce"]),
    UsCup => ("cup", "Cup (US)", 0.2365882365, ["cups"]),
    UsPint => ("pt", "Pint (US)", 0.473176473, ["pint", "pints"]),
    UsQuart => ("qt", "Quart (US)", 0.946352946, ["quart", "quarts"]),
    UsGallon => ("gal", "Gallon (US)", 3.785411784, ["gallon", "gallons", "us gal"]),
    ImperialGallon => ("imp gal", "Gallon (imperial)", 4.54609, ["uk gal", "imperial gallon"]),
    CubicInch => ("in3", "Cubic inch", 0.016387064, ["in³", "cubic inches"]),
    CubicFoot => ("ft3", "Cubic foot", 28.316846592, ["ft³", "cubic feet"]),
}
