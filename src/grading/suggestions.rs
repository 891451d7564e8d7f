// ABOUTME: Suggestion text composition for nutrient grades
// ABOUTME: Per-nutrient example-food lists and increase/reduce/maintain phrasing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Intake Suggestions
//!
//! Static per-nutrient example-food lists and the sentence composer that
//! turns a grade into advice. Below the peak the advice names foods to eat
//! more of; above it the advice is to cut back, with calorie- and
//! fat-specific variants.

use sprout_core::models::Nutrient;

use super::GradeTier;

/// Example foods rich in the given nutrient, used to compose "eat more of"
/// suggestions
#[must_use]
pub const fn example_foods(nutrient: Nutrient) -> &'static [&'static str] {
    match nutrient {
        Nutrient::Calories => &["whole wheat bread", "oats", "brown rice", "sweet potato", "corn"],
        Nutrient::Protein => &["chicken breast", "fish", "eggs", "tofu", "milk"],
        Nutrient::Fat => &["nuts", "olive oil", "avocado", "salmon", "sesame"],
        Nutrient::Calcium => &["milk", "yogurt", "tofu", "dried shrimp", "sesame"],
        Nutrient::Iron => &["spinach", "lean beef", "black fungus", "red dates", "laver"],
        Nutrient::Zinc => &["oysters", "lean beef", "pumpkin seeds", "sesame", "peanuts"],
        Nutrient::Magnesium => &["leafy greens", "nuts", "fish"],
        Nutrient::VitaminA => &["carrots", "spinach", "pumpkin", "mango", "sweet potato"],
        Nutrient::VitaminB1 => {
            &["brown rice", "lean pork", "peanuts", "legumes", "whole wheat bread"]
        }
        Nutrient::VitaminB2 => &["milk", "eggs", "lean meat", "shiitake mushrooms", "legumes"],
        Nutrient::VitaminC => &["kiwi", "citrus fruit", "bell peppers", "broccoli", "strawberries"],
        Nutrient::VitaminD => &["fish", "egg yolk", "milk", "shiitake mushrooms", "seafood"],
        Nutrient::VitaminE => {
            &["nuts", "vegetable oils", "legumes", "leafy greens", "whole grains"]
        }
    }
}

/// Compose the suggestion sentence for a graded nutrient
///
/// Level 4 is the single peak, so any non-peak tier is resolved into
/// "increase" or "reduce" purely by which side of 100% the percentage
/// falls on.
#[must_use]
pub fn compose(nutrient: Nutrient, tier: GradeTier, percentage: f64) -> String {
    if tier.level() == 4 {
        return "intake is on target, keep up the balanced diet".to_owned();
    }

    if percentage < 100.0 {
        let foods = example_foods(nutrient).join(", ");
        format!("consider increasing {nutrient} intake, good sources include: {foods}")
    } else {
        match nutrient {
            Nutrient::Calories => {
                format!("consider reducing {nutrient} intake: watch portion sizes and add more physical activity")
            }
            Nutrient::Fat => {
                format!("consider reducing {nutrient} intake: cut down on fried food and prefer steaming or boiling")
            }
            _ => format!(
                "consider reducing {nutrient} intake: keep the diet balanced rather than leaning on a few foods"
            ),
        }
    }
}
