//! # Menu Data Model
//!
//! This module defines the persisted aggregates of the costing engine: dishes,
//! their ingredient entries, and reusable ingredient templates (sub-recipes).
//!
//! ## Core Concepts
//!
//! - **IngredientEntry**: one priced ingredient line inside a dish or template
//! - **Dish**: ingredient entries plus pricing targets
//! - **IngredientTemplate**: a sub-recipe with its own yield, priced per yield unit
//!
//! Plate cost, suggested price and food-cost percentage are *derived* values
//! (see [`crate::costing`]) and are intentionally absent from these structs:
//! only raw entries and metadata cross the persistence boundary, and every
//! read recomputes the money figures from current ingredients. This keeps the
//! stored data and the displayed numbers from drifting apart.
//!
//! ## Usage
//!
//! ```rust
//! use platecost::menu_model::{Dish, IngredientEntry};
//!
//! let dish = Dish::new("Pan-seared salmon")
//!     .with_ingredient(
//!         IngredientEntry::new("salmon")
//!             .with_package_pricing(5.0, 200.0, "g")
//!             .with_quantity(50.0, "g"),
//!     )
//!     .with_target_margin(30.0);
//! ```

use crate::units::parse_loose;
use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_target_margin() -> f64 {
    30.0
}

/// One priced ingredient line within a dish or template
///
/// Two costing modes exist. When `package_cost`, `package_size` and
/// `package_unit` are all present, package-based costing takes precedence:
/// the per-use cost is prorated from the bulk package through grams.
/// Otherwise the direct `unit_cost * quantity` form applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Ingredient name as the user entered it
    pub name: String,

    /// Direct cost per unit (used when no package pricing is present)
    #[serde(default)]
    pub unit_cost: f64,

    /// Quantity used in the dish
    #[serde(default)]
    pub quantity: f64,

    /// Unit for `quantity` (lenient: unknown strings cost as grams)
    #[serde(default)]
    pub unit: String,

    /// Total cost of the purchased package, if package-priced
    #[serde(default)]
    pub package_cost: Option<f64>,

    /// Size of the purchased package, if package-priced
    #[serde(default)]
    pub package_size: Option<f64>,

    /// Unit for `package_size`, if package-priced
    #[serde(default)]
    pub package_unit: Option<String>,
}

impl IngredientEntry {
    /// Create a new entry with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            unit_cost: 0.0,
            quantity: 0.0,
            unit: "g".to_string(),
            package_cost: None,
            package_size: None,
            package_unit: None,
        }
    }

    /// Set the direct per-unit cost
    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// Set the quantity used and its unit
    pub fn with_quantity(mut self, quantity: f64, unit: &str) -> Self {
        self.quantity = quantity;
        self.unit = unit.to_string();
        self
    }

    /// Switch this entry to package-based pricing
    pub fn with_package_pricing(mut self, cost: f64, size: f64, unit: &str) -> Self {
        self.package_cost = Some(cost);
        self.package_size = Some(size);
        self.package_unit = Some(unit.to_string());
        self
    }

    /// Build an entry from raw form fields, parsing numerics permissively
    ///
    /// Empty or unparsable numeric fields become 0; form input never fails.
    pub fn from_form(name: &str, unit_cost: &str, quantity: &str, unit: &str) -> Self {
        Self::new(name)
            .with_unit_cost(parse_loose(unit_cost))
            .with_quantity(parse_loose(quantity), unit)
    }

    /// Whether package-based costing applies to this entry
    ///
    /// All three package fields must be present and non-zero/non-empty;
    /// anything less falls back to direct costing.
    pub fn uses_package_pricing(&self) -> bool {
        self.package_cost.unwrap_or(0.0) != 0.0
            && self.package_size.unwrap_or(0.0) != 0.0
            && self
                .package_unit
                .as_deref()
                .map(|u| !u.is_empty())
                .unwrap_or(false)
    }
}

/// A dish: ingredient entries plus pricing targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Dish name
    pub name: String,

    /// Ingredient lines; owned by this dish
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,

    /// Target food-cost percentage (not a profit margin), defaults to 30
    #[serde(default = "default_target_margin")]
    pub target_margin: f64,

    /// Actual menu price, when the user has set one
    #[serde(default)]
    pub selling_price: Option<f64>,
}

impl Dish {
    /// Create a new dish with no ingredients and the default target margin
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: Vec::new(),
            target_margin: default_target_margin(),
            selling_price: None,
        }
    }

    /// Append one ingredient entry
    pub fn with_ingredient(mut self, entry: IngredientEntry) -> Self {
        self.ingredients.push(entry);
        self
    }

    /// Replace the ingredient list
    pub fn with_ingredients(mut self, ingredients: Vec<IngredientEntry>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Set the target food-cost percentage
    pub fn with_target_margin(mut self, target_margin: f64) -> Self {
        self.target_margin = target_margin;
        self
    }

    /// Set the actual selling price
    pub fn with_selling_price(mut self, selling_price: f64) -> Self {
        self.selling_price = Some(selling_price);
        self
    }

    /// Serialize to the JSON payload exchanged with the persistence collaborator
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a persistence payload back into a dish
    ///
    /// Missing optional fields take their defaults, so older payloads without
    /// a `target_margin` still load.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// A reusable sub-recipe priced per unit of its yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientTemplate {
    /// Template name
    pub name: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Ingredient lines; owned by this template
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,

    /// Total yield produced by the sub-recipe
    #[serde(default)]
    pub total_yield: f64,

    /// Unit of the yield (also lenient)
    #[serde(default)]
    pub yield_unit: String,
}

impl IngredientTemplate {
    /// Create a new template with the given yield
    pub fn new(name: &str, total_yield: f64, yield_unit: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            ingredients: Vec::new(),
            total_yield,
            yield_unit: yield_unit.to_string(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Append one ingredient entry
    pub fn with_ingredient(mut self, entry: IngredientEntry) -> Self {
        self.ingredients.push(entry);
        self
    }

    /// Build a template from raw form fields, parsing the yield permissively
    pub fn from_form(name: &str, total_yield: &str, yield_unit: &str) -> Self {
        Self::new(name, parse_loose(total_yield), yield_unit)
    }

    /// Serialize to the JSON payload exchanged with the persistence collaborator
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a persistence payload back into a template
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = IngredientEntry::new("salmon")
            .with_package_pricing(5.0, 200.0, "g")
            .with_quantity(50.0, "g");

        assert_eq!(entry.name, "salmon");
        assert!(entry.uses_package_pricing());
        assert_eq!(entry.package_cost, Some(5.0));
    }

    #[test]
    fn test_package_pricing_requires_all_three_fields() {
        let direct = IngredientEntry::new("salt").with_unit_cost(0.002);
        assert!(!direct.uses_package_pricing());

        let mut partial = IngredientEntry::new("salt");
        partial.package_cost = Some(5.0);
        assert!(!partial.uses_package_pricing());

        // Zero-valued package fields do not trigger package costing
        let zeroed = IngredientEntry::new("salt").with_package_pricing(5.0, 0.0, "g");
        assert!(!zeroed.uses_package_pricing());

        let empty_unit = IngredientEntry::new("salt").with_package_pricing(5.0, 200.0, "");
        assert!(!empty_unit.uses_package_pricing());
    }

    #[test]
    fn test_entry_from_form_is_permissive() {
        let entry = IngredientEntry::from_form("flour", "", "not a number", "g");
        assert_eq!(entry.unit_cost, 0.0);
        assert_eq!(entry.quantity, 0.0);

        let entry = IngredientEntry::from_form("flour", "1.50", "500", "g");
        assert_eq!(entry.unit_cost, 1.5);
        assert_eq!(entry.quantity, 500.0);
    }

    #[test]
    fn test_dish_defaults() {
        let dish = Dish::new("Omelette");
        assert_eq!(dish.target_margin, 30.0);
        assert_eq!(dish.selling_price, None);
        assert!(dish.ingredients.is_empty());
    }

    #[test]
    fn test_dish_json_round_trip() -> Result<()> {
        let dish = Dish::new("Pasta")
            .with_ingredient(IngredientEntry::new("pasta").with_unit_cost(0.002).with_quantity(120.0, "g"))
            .with_selling_price(12.5);

        let payload = dish.to_json()?;
        let restored = Dish::from_json(&payload)?;

        assert_eq!(restored, dish);
        Ok(())
    }

    #[test]
    fn test_dish_from_sparse_payload_takes_defaults() -> Result<()> {
        let dish = Dish::from_json(r#"{"name":"Soup"}"#)?;
        assert_eq!(dish.target_margin, 30.0);
        assert!(dish.ingredients.is_empty());
        assert_eq!(dish.selling_price, None);
        Ok(())
    }

    #[test]
    fn test_template_from_form_unparsable_yield_is_zero() {
        let template = IngredientTemplate::from_form("Stock", "", "ml");
        assert_eq!(template.total_yield, 0.0);

        let template = IngredientTemplate::from_form("Stock", "2.5", "ml");
        assert_eq!(template.total_yield, 2.5);
    }

    #[test]
    fn test_template_json_round_trip() -> Result<()> {
        let template = IngredientTemplate::new("Tomato sauce", 1000.0, "ml")
            .with_description("House base sauce")
            .with_ingredient(IngredientEntry::new("tomato").with_unit_cost(0.003).with_quantity(800.0, "g"));

        let restored = IngredientTemplate::from_json(&template.to_json()?)?;
        assert_eq!(restored, template);
        Ok(())
    }
}
