//! # Unit Conversion Module
//!
//! This module converts between the weight and volume units used for recipe
//! costing. All conversions pass through grams as the canonical base unit so
//! that an ingredient can be bought in one unit (a 1 kg bag) and used in
//! another (50 g) with the cost prorated correctly.
//!
//! ## Features
//!
//! - Closed set of costing units: g, kg, oz, lb, ml, fl oz
//! - Long-form alias parsing (gram(s), kilogram(s), pound(s), ...)
//! - Case-insensitive, whitespace-tolerant unit lookup
//! - Lenient fallback: unrecognized units convert with multiplier 1
//! - Permissive numeric parsing for form-style string input
//!
//! Liquid units use the density of water (1 ml = 1 g, 1 fl oz = 29.5735 g).
//! This is an intentional simplification for recipe costing, not a general
//! physical conversion.

use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Grams per US fluid ounce, at water density.
pub const GRAMS_PER_FL_OZ: f64 = 29.5735;
/// Grams per avoirdupois ounce.
pub const GRAMS_PER_OZ: f64 = 28.3495;
/// Grams per pound.
pub const GRAMS_PER_LB: f64 = 453.592;

/// Alias lookup for unit strings, normalized to lowercase
static UNIT_ALIASES: LazyLock<HashMap<&'static str, WeightUnit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("g", WeightUnit::Grams);
    map.insert("gram", WeightUnit::Grams);
    map.insert("grams", WeightUnit::Grams);

    map.insert("kg", WeightUnit::Kilograms);
    map.insert("kilogram", WeightUnit::Kilograms);
    map.insert("kilograms", WeightUnit::Kilograms);

    map.insert("oz", WeightUnit::Ounces);
    map.insert("ounce", WeightUnit::Ounces);
    map.insert("ounces", WeightUnit::Ounces);

    map.insert("lb", WeightUnit::Pounds);
    map.insert("lbs", WeightUnit::Pounds);
    map.insert("pound", WeightUnit::Pounds);
    map.insert("pounds", WeightUnit::Pounds);

    map.insert("ml", WeightUnit::Milliliters);
    map.insert("milliliter", WeightUnit::Milliliters);
    map.insert("milliliters", WeightUnit::Milliliters);
    map.insert("millilitre", WeightUnit::Milliliters);
    map.insert("millilitres", WeightUnit::Milliliters);

    map.insert("fl oz", WeightUnit::FluidOunces);
    map.insert("floz", WeightUnit::FluidOunces);
    map.insert("fluid ounce", WeightUnit::FluidOunces);
    map.insert("fluid ounces", WeightUnit::FluidOunces);

    map
});

/// Weight and volume units recognized by the costing engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Grams (the canonical base unit)
    Grams,
    /// Kilograms
    Kilograms,
    /// Ounces
    Ounces,
    /// Pounds
    Pounds,
    /// Milliliters (water density)
    Milliliters,
    /// US fluid ounces (water density)
    FluidOunces,
    /// Any unit string this module does not recognize
    Unknown(String),
}

impl WeightUnit {
    /// Parse a unit string into a `WeightUnit`
    ///
    /// Lookup is case-insensitive and whitespace-trimmed. Unrecognized unit
    /// strings produce `WeightUnit::Unknown` rather than an error; form
    /// validation belongs to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use platecost::units::WeightUnit;
    ///
    /// assert_eq!(WeightUnit::parse("KG"), WeightUnit::Kilograms);
    /// assert_eq!(WeightUnit::parse(" fluid ounces "), WeightUnit::FluidOunces);
    /// assert_eq!(
    ///     WeightUnit::parse("bunch"),
    ///     WeightUnit::Unknown("bunch".to_string())
    /// );
    /// ```
    pub fn parse(unit: &str) -> Self {
        let normalized = unit.trim().to_lowercase();
        match UNIT_ALIASES.get(normalized.as_str()) {
            Some(unit) => unit.clone(),
            None => {
                trace!("Unrecognized unit '{}', treating as grams", normalized);
                WeightUnit::Unknown(normalized)
            }
        }
    }

    /// Gram-equivalent multiplier for one of this unit
    ///
    /// Unknown units fall back to multiplier 1 (treated as grams). This is a
    /// deliberate lenient policy: the cost display must never fail on a unit
    /// the user typed freehand.
    pub fn grams_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Grams => 1.0,
            WeightUnit::Kilograms => 1000.0,
            WeightUnit::Ounces => GRAMS_PER_OZ,
            WeightUnit::Pounds => GRAMS_PER_LB,
            WeightUnit::Milliliters => 1.0,
            WeightUnit::FluidOunces => GRAMS_PER_FL_OZ,
            WeightUnit::Unknown(_) => 1.0,
        }
    }

    /// Short display label (the form value, e.g. "fl oz")
    pub fn display_name(&self) -> &str {
        match self {
            WeightUnit::Grams => "g",
            WeightUnit::Kilograms => "kg",
            WeightUnit::Ounces => "oz",
            WeightUnit::Pounds => "lb",
            WeightUnit::Milliliters => "ml",
            WeightUnit::FluidOunces => "fl oz",
            WeightUnit::Unknown(original) => original,
        }
    }

    /// Long display label for unit pickers, e.g. "Kilograms (kg)"
    pub fn long_label(&self) -> String {
        match self {
            WeightUnit::Grams => "Grams (g)".to_string(),
            WeightUnit::Kilograms => "Kilograms (kg)".to_string(),
            WeightUnit::Ounces => "Ounces (oz)".to_string(),
            WeightUnit::Pounds => "Pounds (lb)".to_string(),
            WeightUnit::Milliliters => "Milliliters (ml)".to_string(),
            WeightUnit::FluidOunces => "Fluid Ounces (fl oz)".to_string(),
            WeightUnit::Unknown(original) => original.clone(),
        }
    }

    /// The closed selection list offered by unit pickers
    pub fn selectable() -> [WeightUnit; 6] {
        [
            WeightUnit::Grams,
            WeightUnit::Kilograms,
            WeightUnit::Ounces,
            WeightUnit::Pounds,
            WeightUnit::Milliliters,
            WeightUnit::FluidOunces,
        ]
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Convert a value in the given unit to grams
///
/// # Arguments
///
/// * `value` - The amount to convert
/// * `unit` - Unit string (case-insensitive; unknown units convert 1:1)
///
/// # Examples
///
/// ```rust
/// use platecost::units::to_grams;
///
/// assert_eq!(to_grams(1.0, "kg"), 1000.0);
/// assert_eq!(to_grams(1.0, "lb"), 453.592);
/// assert_eq!(to_grams(5.0, "bogus-unit"), 5.0); // lenient fallback
/// ```
pub fn to_grams(value: f64, unit: &str) -> f64 {
    value * WeightUnit::parse(unit).grams_per_unit()
}

/// Convert a gram amount to the given unit (inverse of [`to_grams`])
///
/// Uses the reciprocal of the canonical multiplier; the same unknown-unit
/// fallback applies.
pub fn from_grams(grams: f64, unit: &str) -> f64 {
    grams / WeightUnit::parse(unit).grams_per_unit()
}

/// Permissively parse a numeric form field
///
/// Mirrors the behavior cost forms rely on: leading whitespace is skipped and
/// the longest leading decimal-number prefix is read, so "2.5 kg" parses as
/// 2.5. Empty or unparsable input yields 0.0 rather than an error.
///
/// # Examples
///
/// ```rust
/// use platecost::units::parse_loose;
///
/// assert_eq!(parse_loose("3.49"), 3.49);
/// assert_eq!(parse_loose("2.5 kg"), 2.5);
/// assert_eq!(parse_loose(""), 0.0);
/// assert_eq!(parse_loose("n/a"), 0.0);
/// ```
pub fn parse_loose(input: &str) -> f64 {
    let trimmed = input.trim_start();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_grams_canonical_multipliers() {
        assert_eq!(to_grams(1.0, "g"), 1.0);
        assert_eq!(to_grams(1.0, "kg"), 1000.0);
        assert_eq!(to_grams(1.0, "oz"), 28.3495);
        assert_eq!(to_grams(1.0, "lb"), 453.592);
        assert_eq!(to_grams(1.0, "ml"), 1.0);
        assert_eq!(to_grams(1.0, "fl oz"), 29.5735);
    }

    #[test]
    fn test_to_grams_long_form_aliases() {
        assert_eq!(to_grams(2.0, "kilograms"), 2000.0);
        assert_eq!(to_grams(3.0, "grams"), 3.0);
        assert_eq!(to_grams(1.0, "pound"), 453.592);
        assert_eq!(to_grams(1.0, "fluid ounce"), 29.5735);
        assert_eq!(to_grams(1.0, "millilitres"), 1.0);
    }

    #[test]
    fn test_unit_lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(to_grams(1.0, "KG"), 1000.0);
        assert_eq!(to_grams(1.0, "  Lb "), 453.592);
        assert_eq!(to_grams(1.0, "Fl Oz"), 29.5735);
    }

    #[test]
    fn test_unknown_unit_falls_back_to_multiplier_one() {
        assert_eq!(to_grams(5.0, "bogus-unit"), 5.0);
        assert_eq!(to_grams(7.5, ""), 7.5);
        assert_eq!(from_grams(5.0, "bogus-unit"), 5.0);
    }

    #[test]
    fn test_from_grams_is_inverse() {
        let units = ["g", "kg", "oz", "lb", "ml", "fl oz"];
        for unit in units {
            let grams = to_grams(2.5, unit);
            let back = from_grams(grams, unit);
            assert!(
                (back - 2.5).abs() < 1e-9,
                "round trip through '{}' drifted: {}",
                unit,
                back
            );
        }
    }

    #[test]
    fn test_parse_yields_unknown_variant() {
        assert_eq!(WeightUnit::parse("g"), WeightUnit::Grams);
        assert_eq!(
            WeightUnit::parse("bunch"),
            WeightUnit::Unknown("bunch".to_string())
        );
        assert_eq!(WeightUnit::parse("bunch").grams_per_unit(), 1.0);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(WeightUnit::FluidOunces.display_name(), "fl oz");
        assert_eq!(WeightUnit::Kilograms.long_label(), "Kilograms (kg)");
        assert_eq!(WeightUnit::selectable().len(), 6);
    }

    #[test]
    fn test_parse_loose() {
        let cases = vec![
            ("3.49", 3.49),
            ("  10", 10.0),
            ("2.5 kg", 2.5),
            ("-1.5", -1.5),
            ("+4", 4.0),
            (".5", 0.5),
            ("5.", 5.0),
            ("", 0.0),
            ("abc", 0.0),
            ("n/a", 0.0),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_loose(input), expected, "input: '{}'", input);
        }
    }
}
