#[cfg(test)]
mod tests {
    use platecost::costing::{
        calculate_food_cost_percentage, calculate_ingredient_cost, calculate_plate_cost,
        calculate_suggested_price, calculate_template_cost_per_unit, cost_summary,
    };
    use platecost::menu_model::{Dish, IngredientEntry, IngredientTemplate};
    use platecost::units::{from_grams, to_grams};

    #[test]
    fn test_to_grams_known_units() {
        assert_eq!(to_grams(1.0, "kg"), 1000.0);
        assert_eq!(to_grams(1.0, "lb"), 453.592);
        assert_eq!(to_grams(1.0, "oz"), 28.3495);
        assert_eq!(to_grams(1.0, "fl oz"), 29.5735);
    }

    #[test]
    fn test_to_grams_unknown_unit_fallback() {
        assert_eq!(to_grams(5.0, "bogus-unit"), 5.0);
    }

    #[test]
    fn test_from_grams_inverts_to_grams() {
        let grams = to_grams(3.0, "lb");
        assert!((from_grams(grams, "lb") - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ingredient_cost_worked_examples() {
        // $5 per 200 g, using 50 g
        assert_eq!(calculate_ingredient_cost(5.0, 200.0, "g", 50.0, "g"), 1.25);
        // $10 per kg, using 500 g
        assert!((calculate_ingredient_cost(10.0, 1.0, "kg", 500.0, "g") - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_plate_cost_of_full_dish() {
        let ingredients = vec![
            IngredientEntry::new("salmon")
                .with_package_pricing(25.0, 1.0, "kg")
                .with_quantity(180.0, "g"),
            IngredientEntry::new("butter")
                .with_package_pricing(4.0, 500.0, "g")
                .with_quantity(25.0, "g"),
            IngredientEntry::new("lemon").with_unit_cost(0.4).with_quantity(1.0, "g"),
            IngredientEntry::new("dill").with_unit_cost(0.15).with_quantity(4.0, "g"),
        ];

        // 25/1000*180 + 4/500*25 + 0.4 + 0.6 = 4.5 + 0.2 + 0.4 + 0.6
        let plate_cost = calculate_plate_cost(&ingredients);
        assert!((plate_cost - 5.7).abs() < 1e-9);

        // Calling again on the untouched slice gives the identical result
        assert_eq!(calculate_plate_cost(&ingredients), plate_cost);
    }

    #[test]
    fn test_plate_cost_empty_inputs() {
        assert_eq!(calculate_plate_cost(&[]), 0.0);
        assert_eq!(calculate_plate_cost(&Vec::new()), 0.0);
    }

    #[test]
    fn test_pricing_round_trip_law() {
        for margin in [5.0_f64, 20.0, 30.0, 42.5, 66.0, 100.0] {
            for plate_cost in [0.01_f64, 1.0, 3.0, 57.25] {
                let price = calculate_suggested_price(plate_cost, margin);
                let recovered = calculate_food_cost_percentage(plate_cost, price);
                assert!(
                    (recovered - margin).abs() < 1e-9,
                    "plate {} at margin {} recovered {}",
                    plate_cost,
                    margin,
                    recovered
                );
            }
        }
    }

    #[test]
    fn test_unprofitable_dish_percentage_is_surfaced() {
        let percentage = calculate_food_cost_percentage(15.0, 10.0);
        assert_eq!(percentage, 150.0);
    }

    #[test]
    fn test_template_zero_yield_never_throws() {
        let template = IngredientTemplate::new("Broken batch", 0.0, "g").with_ingredient(
            IngredientEntry::new("flour").with_unit_cost(0.001).with_quantity(500.0, "g"),
        );

        assert_eq!(calculate_template_cost_per_unit(&template), 0.0);
    }

    #[test]
    fn test_template_cost_feeds_back_into_dish() {
        // A sauce template used as an ingredient in a dish, priced per ml
        let sauce = IngredientTemplate::new("Marinara", 2000.0, "ml")
            .with_ingredient(
                IngredientEntry::new("tomato")
                    .with_package_pricing(3.0, 1.0, "kg")
                    .with_quantity(1600.0, "g"),
            )
            .with_ingredient(IngredientEntry::new("garlic").with_unit_cost(0.008).with_quantity(30.0, "g"));

        let per_ml = calculate_template_cost_per_unit(&sauce);
        // (4.80 + 0.24) / 2000
        assert!((per_ml - 0.00252).abs() < 1e-9);

        let dish = Dish::new("Spaghetti marinara")
            .with_ingredient(IngredientEntry::new("spaghetti").with_unit_cost(0.002).with_quantity(120.0, "g"))
            .with_ingredient(IngredientEntry::new("Marinara").with_unit_cost(per_ml).with_quantity(150.0, "ml"));

        let summary = cost_summary(&dish);
        // 0.24 + 0.378
        assert!((summary.plate_cost - 0.618).abs() < 1e-9);
        assert!((summary.suggested_price - 2.06).abs() < 1e-9);
    }

    #[test]
    fn test_summary_recomputes_from_current_ingredients() {
        let mut dish = Dish::new("Seasonal soup").with_ingredient(
            IngredientEntry::new("squash").with_unit_cost(0.003).with_quantity(400.0, "g"),
        );

        let before = cost_summary(&dish);
        assert!((before.plate_cost - 1.2).abs() < 1e-9);

        dish.ingredients
            .push(IngredientEntry::new("cream").with_unit_cost(0.006).with_quantity(100.0, "g"));

        let after = cost_summary(&dish);
        assert!((after.plate_cost - 1.8).abs() < 1e-9);
    }
}
