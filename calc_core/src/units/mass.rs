//! Mass units. Base: kilogram.

const POUND_KG: f64 = 0.45359237;

unit_table! {
    /// Mass units (base: kilogram)
    Mass, quantity = "mass", base = Kilogram;
    Milligram => ("mg", "Milligram", 1e-6, ["milligrams"]),
    Gram => ("g", "Gram", 1e-3, ["grams"]),
    Kilogram => ("kg", "Kilogram", 1.0, ["kilograms", "kilo"]),
    Tonne => ("t", "Tonne", 1e3, ["tonnes", "metric ton"]),
    Ounce => ("oz", "Ounce", POUND_KG / 16.0, ["ounces"]),
    Pound => ("lb", "Pound", POUND_KG, ["lbs", "pounds"]),
    Stone => ("st", "Stone", POUND_KG * 14.0, ["stones"]),
    ShortTon => ("ton", "Short ton (US)", POUND_KG * 2000.0, ["short ton", "us ton"]),
}
