//! # Plate Costing Engine
//!
//! Pure derivation functions that turn ingredient entries into money figures:
//! per-entry cost, total plate cost, suggested selling price, food-cost
//! percentage, and cost-per-yield-unit for sub-recipe templates.
//!
//! ## Design
//!
//! Every function here is total over its input domain. Zero denominators
//! (package size, yield, selling price) resolve to 0, never to NaN, Infinity
//! or a panic; the cost display must keep working mid-edit, while a form is
//! half filled in. Results carry full floating-point precision; rounding for
//! display is the presentation layer's concern.
//!
//! All functions are synchronous, allocation-free and free of shared state,
//! so callers may invoke them on every keystroke.

use crate::menu_model::{Dish, IngredientEntry, IngredientTemplate};
use crate::units::to_grams;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default target food-cost percentage applied when a dish has none
pub const DEFAULT_TARGET_MARGIN: f64 = 30.0;

/// Cost of using part of a bulk package, prorated through grams
///
/// Both the package size and the quantity used are converted to grams first,
/// so the purchase unit and the usage unit are independent: buy a 1 kg bag,
/// cost out 50 g of it.
///
/// A package size that converts to 0 g yields a cost of 0 (division guard).
///
/// # Examples
///
/// ```rust
/// use platecost::costing::calculate_ingredient_cost;
///
/// // $5.00 for a 200 g package, using 50 g: $0.025/g * 50 g = $1.25
/// assert_eq!(calculate_ingredient_cost(5.0, 200.0, "g", 50.0, "g"), 1.25);
///
/// // $10 for a 1 kg bag, using 500 g
/// assert_eq!(calculate_ingredient_cost(10.0, 1.0, "kg", 500.0, "g"), 5.0);
/// ```
pub fn calculate_ingredient_cost(
    package_cost: f64,
    package_size: f64,
    package_unit: &str,
    quantity_used: f64,
    quantity_unit: &str,
) -> f64 {
    let package_size_in_grams = to_grams(package_size, package_unit);
    let quantity_used_in_grams = to_grams(quantity_used, quantity_unit);

    if package_size_in_grams == 0.0 {
        return 0.0;
    }

    let cost_per_gram = package_cost / package_size_in_grams;
    cost_per_gram * quantity_used_in_grams
}

/// Cost of a single ingredient entry
///
/// Package-priced entries go through [`calculate_ingredient_cost`]; everything
/// else is the direct `unit_cost * quantity` form. Missing numerics count
/// as 0.
pub fn entry_cost(entry: &IngredientEntry) -> f64 {
    if entry.uses_package_pricing() {
        calculate_ingredient_cost(
            entry.package_cost.unwrap_or(0.0),
            entry.package_size.unwrap_or(0.0),
            entry.package_unit.as_deref().unwrap_or(""),
            entry.quantity,
            &entry.unit,
        )
    } else {
        entry.unit_cost * entry.quantity
    }
}

/// Total ingredient cost for one serving of a dish
///
/// The sum of every entry's cost; an empty list costs 0. Input is borrowed
/// and never mutated, so repeated calls over the same entries are idempotent.
///
/// # Examples
///
/// ```rust
/// use platecost::costing::calculate_plate_cost;
/// use platecost::menu_model::IngredientEntry;
///
/// assert_eq!(calculate_plate_cost(&[]), 0.0);
///
/// let entries = vec![
///     IngredientEntry::new("salmon")
///         .with_package_pricing(5.0, 200.0, "g")
///         .with_quantity(50.0, "g"),
///     IngredientEntry::new("lemon").with_unit_cost(0.5).with_quantity(1.0, "g"),
/// ];
/// assert_eq!(calculate_plate_cost(&entries), 1.75);
/// ```
pub fn calculate_plate_cost(ingredients: &[IngredientEntry]) -> f64 {
    let total = ingredients.iter().map(entry_cost).sum();
    debug!(
        "Plate cost over {} ingredient entries: {:.4}",
        ingredients.len(),
        total
    );
    total
}

/// Suggested selling price from a target food-cost percentage
///
/// `plate_cost / (target_margin / 100)`; a plate cost or margin of 0 yields 0.
/// Feeding the result back through [`calculate_food_cost_percentage`]
/// reproduces the target margin (within floating-point tolerance).
///
/// # Examples
///
/// ```rust
/// use platecost::costing::calculate_suggested_price;
///
/// // $3.00 plate cost at a 30% target: $3.00 / 0.30 = $10.00
/// assert_eq!(calculate_suggested_price(3.0, 30.0), 10.0);
/// assert_eq!(calculate_suggested_price(0.0, 30.0), 0.0);
/// assert_eq!(calculate_suggested_price(3.0, 0.0), 0.0);
/// ```
pub fn calculate_suggested_price(plate_cost: f64, target_margin: f64) -> f64 {
    if plate_cost == 0.0 || target_margin == 0.0 {
        return 0.0;
    }

    plate_cost / (target_margin / 100.0)
}

/// Food-cost percentage of a dish at a given selling price
///
/// `(plate_cost / selling_price) * 100`, or 0 when the selling price is 0.
/// There is no upper clamp: a value above 100 means the dish sells for less
/// than its ingredients cost, and callers must see that, not a capped number.
///
/// # Examples
///
/// ```rust
/// use platecost::costing::calculate_food_cost_percentage;
///
/// assert_eq!(calculate_food_cost_percentage(3.0, 10.0), 30.0);
/// assert_eq!(calculate_food_cost_percentage(3.0, 0.0), 0.0);
/// assert_eq!(calculate_food_cost_percentage(12.0, 10.0), 120.0); // unprofitable, surfaced
/// ```
pub fn calculate_food_cost_percentage(plate_cost: f64, selling_price: f64) -> f64 {
    if selling_price == 0.0 {
        return 0.0;
    }

    (plate_cost / selling_price) * 100.0
}

/// Cost per yield unit of a sub-recipe template
///
/// Plate cost of the template's ingredients divided by its total yield.
/// Templates with no ingredients or a yield of 0 cost 0 per unit, never
/// NaN or Infinity.
pub fn calculate_template_cost_per_unit(template: &IngredientTemplate) -> f64 {
    if template.ingredients.is_empty() {
        return 0.0;
    }

    let total_cost = calculate_plate_cost(&template.ingredients);
    if template.total_yield == 0.0 {
        return 0.0;
    }

    total_cost / template.total_yield
}

/// Derived money figures for one dish
///
/// Transient: computed on demand from the dish's current ingredients and
/// never persisted, so it cannot go stale against the entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishCostSummary {
    /// Total ingredient cost for one serving
    pub plate_cost: f64,
    /// Selling price that would hit the target food-cost percentage
    pub suggested_price: f64,
    /// Food-cost percentage at the effective selling price
    pub food_cost_percentage: f64,
    /// True when an actual selling price is set and the dish runs over target
    pub above_target: bool,
}

/// Compute the full cost summary for a dish
///
/// The effective selling price is the dish's actual `selling_price` when set,
/// otherwise the suggested price. `above_target` only fires for an actual
/// selling price: at the suggested price the percentage equals the target by
/// construction, and float noise there must not raise a warning.
pub fn cost_summary(dish: &Dish) -> DishCostSummary {
    let plate_cost = calculate_plate_cost(&dish.ingredients);
    let suggested_price = calculate_suggested_price(plate_cost, dish.target_margin);
    let effective_price = dish.selling_price.unwrap_or(suggested_price);
    let food_cost_percentage = calculate_food_cost_percentage(plate_cost, effective_price);

    DishCostSummary {
        plate_cost,
        suggested_price,
        food_cost_percentage,
        above_target: dish.selling_price.is_some() && food_cost_percentage > dish.target_margin,
    }
}
