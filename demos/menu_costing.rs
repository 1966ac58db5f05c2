//! # Menu Costing Example
//!
//! This example walks a dish from raw ingredient entries to plate cost,
//! suggested price and food-cost percentage, then prices a reusable
//! sub-recipe template and asks the market estimator for a starting cost.

use platecost::costing::{calculate_template_cost_per_unit, cost_summary};
use platecost::invoice_review::format_dish_costing;
use platecost::market_estimate::estimate_ingredient_cost;
use platecost::menu_model::{Dish, IngredientEntry, IngredientTemplate};

#[tokio::main]
async fn main() {
    env_logger::init();

    // A dish mixing package-based and direct pricing
    let dish = Dish::new("Pan-seared salmon")
        .with_ingredient(
            IngredientEntry::new("salmon")
                .with_package_pricing(25.0, 1.0, "kg")
                .with_quantity(180.0, "g"),
        )
        .with_ingredient(
            IngredientEntry::new("butter")
                .with_package_pricing(4.0, 500.0, "g")
                .with_quantity(25.0, "g"),
        )
        .with_ingredient(IngredientEntry::new("lemon").with_unit_cost(0.4).with_quantity(1.0, "g"))
        .with_selling_price(16.5);

    println!("🍽️  Dish costing\n");
    let summary = cost_summary(&dish);
    println!("{}", format_dish_costing(&dish));
    println!(
        "Full precision plate cost: {} (display rounding is the caller's job)\n",
        summary.plate_cost
    );

    // A sub-recipe priced per milliliter of yield
    let sauce = IngredientTemplate::new("Beurre blanc", 500.0, "ml")
        .with_ingredient(
            IngredientEntry::new("butter")
                .with_package_pricing(4.0, 500.0, "g")
                .with_quantity(250.0, "g"),
        )
        .with_ingredient(IngredientEntry::new("white wine").with_unit_cost(0.01).with_quantity(100.0, "ml"));

    println!(
        "🧪 Template '{}' costs {:.4} per {}\n",
        sauce.name,
        calculate_template_cost_per_unit(&sauce),
        sauce.yield_unit
    );

    // Ask the estimator for a plausible starting cost
    println!("💭 Estimating market cost for 'organic salmon'...");
    let estimate = estimate_ingredient_cost("organic salmon").await;
    println!(
        "   {:.4}/{} (range {:.4}-{:.4}, confidence {:.0}%) via {}",
        estimate.per_unit_cost,
        estimate.unit,
        estimate.min_cost,
        estimate.max_cost,
        estimate.confidence * 100.0,
        estimate.source
    );
}
