//! # Invoice Review and Promotion
//!
//! This module is the glue between the extraction heuristics and the menu
//! model: it turns reviewed invoice candidates into ingredient entries or
//! reusable templates, prices template selections into entries, and formats
//! dish costing summaries for display.
//!
//! Extraction output is never trusted directly: a [`ReviewedItem`] carries
//! the user's edits (or the defaults) and only approved items get promoted.

use crate::costing::{calculate_template_cost_per_unit, cost_summary};
use crate::invoice_parser::InvoiceLineItem;
use crate::menu_model::{Dish, IngredientEntry, IngredientTemplate};
use crate::units::WeightUnit;
use log::info;

/// Guess a purchase unit from the line-item price alone
///
/// A rough heuristic with no basis in the unit model: an expensive line was
/// probably priced per kilogram, a cheap one per gram. It only seeds the
/// review form default; the user confirms or corrects the unit before
/// anything is promoted.
pub fn infer_unit_for_price(price: f64) -> WeightUnit {
    if price > 10.0 {
        WeightUnit::Kilograms
    } else {
        WeightUnit::Grams
    }
}

/// An extracted candidate after user review
///
/// Starts from an [`InvoiceLineItem`] with the unit defaulted by
/// [`infer_unit_for_price`]; the `with_*` methods apply the user's edits.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewedItem {
    /// Ingredient name, possibly renamed during review
    pub name: String,
    /// Price, possibly corrected during review
    pub price: f64,
    /// Purchase unit confirmed or corrected by the user
    pub unit: WeightUnit,
}

impl ReviewedItem {
    /// Seed a review row from an extracted candidate
    pub fn from_line_item(item: &InvoiceLineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            unit: infer_unit_for_price(item.price),
        }
    }

    /// Apply a rename from the review form
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Apply a price correction from the review form
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Apply a unit correction from the review form
    pub fn with_unit(mut self, unit: WeightUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Promote this approved item into an ingredient entry
    ///
    /// The invoice states a price but not how much of the ingredient a dish
    /// will use, so the entry assumes quantity 1 with direct pricing; the
    /// user adjusts the quantity when adding it to a dish.
    pub fn promote_to_entry(&self) -> IngredientEntry {
        IngredientEntry::new(&self.name)
            .with_unit_cost(self.price)
            .with_quantity(1.0, self.unit.display_name())
    }

    /// Promote this approved item into a single-ingredient template
    ///
    /// Imported costs are stored as templates so they can be reused across
    /// dishes: yield 1 of the purchase unit, priced at the invoice price.
    pub fn promote_to_template(&self) -> IngredientTemplate {
        let description = format!(
            "Imported from invoice - ${:.2} per {}",
            self.price,
            self.unit.display_name()
        );

        IngredientTemplate::new(&self.name, 1.0, self.unit.display_name())
            .with_description(&description)
            .with_ingredient(self.promote_to_entry())
    }
}

/// Promote every approved item in one pass
pub fn promote_approved(items: &[ReviewedItem]) -> Vec<IngredientTemplate> {
    let templates: Vec<IngredientTemplate> =
        items.iter().map(ReviewedItem::promote_to_template).collect();
    info!("Promoted {} approved invoice items to templates", templates.len());
    templates
}

/// Build an ingredient entry from a template selection
///
/// The entry is priced at the template's cost per yield unit and measured in
/// the template's yield unit; the quantity starts at 0 for the caller to
/// fill in. An empty yield unit falls back to grams.
pub fn entry_from_template(template: &IngredientTemplate) -> IngredientEntry {
    let unit = if template.yield_unit.is_empty() {
        "g"
    } else {
        &template.yield_unit
    };

    IngredientEntry::new(&template.name)
        .with_unit_cost(calculate_template_cost_per_unit(template))
        .with_quantity(0.0, unit)
}

/// Plain-text costing summary for one dish
///
/// Display convenience only: the numbers are rounded here, while the
/// underlying [`cost_summary`] values keep full precision for callers that
/// format differently.
pub fn format_dish_costing(dish: &Dish) -> String {
    let summary = cost_summary(dish);

    let mut output = String::new();
    output.push_str(&format!("Costing for {}\n", dish.name));
    output.push_str(&format!("  Plate cost:      ${:.2}\n", summary.plate_cost));
    output.push_str(&format!("  Suggested price: ${:.2}\n", summary.suggested_price));
    output.push_str(&format!(
        "  Food cost:       {:.1}% (target {:.0}%)\n",
        summary.food_cost_percentage, dish.target_margin
    ));

    if summary.above_target {
        output.push_str("  ! Above target\n");
    }

    output
}
