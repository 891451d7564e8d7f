// ABOUTME: Integration tests for meal-record orchestration over the food catalog seam
// ABOUTME: Covers catalog misses, slot fallback, duplicate policies, and computed totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use sprout_core::models::MealSlot;
use sprout_core::{DuplicateMealPolicy, EngineConfig, EngineError};
use sprout_nutrition::catalog::{FoodCatalog, StaticFoodCatalog};
use sprout_nutrition::recorder::{FoodPortion, MealRecorder, MealRequest};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    date().and_hms_opt(hour, minute, 0).unwrap()
}

fn request(slot: Option<MealSlot>, foods: Vec<FoodPortion>) -> MealRequest {
    MealRequest {
        date: date(),
        slot,
        recorded_at: at(12, 30),
        foods,
    }
}

// === Food resolution ===

#[test]
fn seed_catalog_resolves_by_id_and_name() {
    let catalog = StaticFoodCatalog::with_seed_foods();

    let by_id = catalog.profile_by_id(1).unwrap();
    assert_eq!(by_id.name, "spare ribs");

    let by_name = catalog.profile_by_name("salmon").unwrap();
    assert!((by_name.protein - 21.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_food_aborts_the_whole_meal() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    let result = recorder.record(
        &request(
            None,
            vec![FoodPortion::single(1), FoodPortion::single(999)],
        ),
        &[],
    );

    assert!(matches!(result, Err(EngineError::FoodNotFound(_))));
}

#[test]
fn unknown_name_is_a_clean_miss() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let result = catalog.profile_by_name("dragonfruit");
    assert!(matches!(result, Err(EngineError::FoodNotFound(name)) if name == "dragonfruit"));
}

// === Request validation ===

#[test]
fn a_meal_needs_at_least_one_food() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    let result = recorder.record(&request(None, vec![]), &[]);
    assert!(matches!(result, Err(EngineError::InvalidInput(_))));
}

#[test]
fn non_positive_portions_are_rejected() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    let result = recorder.record(
        &request(
            None,
            vec![FoodPortion {
                food_id: 7,
                portions: -1.0,
            }],
        ),
        &[],
    );

    assert!(matches!(result, Err(EngineError::InvalidPortion { .. })));
}

// === Slot resolution ===

#[test]
fn explicit_slot_wins_over_the_timestamp() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    let (meal, _) = recorder
        .record(
            &request(Some(MealSlot::Dinner), vec![FoodPortion::single(1)]),
            &[],
        )
        .unwrap();

    assert_eq!(meal.slot, MealSlot::Dinner);
}

#[test]
fn missing_slot_is_classified_from_the_timestamp() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    // recorded_at is 12:30, squarely lunch
    let (meal, _) = recorder
        .record(&request(None, vec![FoodPortion::single(1)]), &[])
        .unwrap();

    assert_eq!(meal.slot, MealSlot::Lunch);
}

// === Computed nutrition ===

#[test]
fn totals_sum_scaled_item_nutrition() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    // Spare ribs (264 kcal) plus two eggs (77 kcal each)
    let (meal, _) = recorder
        .record(
            &request(
                Some(MealSlot::Lunch),
                vec![
                    FoodPortion::single(1),
                    FoodPortion {
                        food_id: 7,
                        portions: 2.0,
                    },
                ],
            ),
            &[],
        )
        .unwrap();

    assert_eq!(meal.items.len(), 2);
    assert!((meal.totals.calories - 418.0).abs() < 1e-9);
    assert!((meal.items[1].nutrition.calories - 154.0).abs() < 1e-9);
}

// === Duplicate-slot policies ===

#[test]
fn replace_policy_clears_an_occupied_slot() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    let (_, plan) = recorder
        .record(
            &request(Some(MealSlot::Lunch), vec![FoodPortion::single(2)]),
            &[1, 7],
        )
        .unwrap();

    assert!(plan.clear_existing);
    assert!(plan.skipped.is_empty());
}

#[test]
fn replace_policy_leaves_an_empty_slot_alone() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig::default();
    let recorder = MealRecorder::new(&catalog, &config);

    let (_, plan) = recorder
        .record(
            &request(Some(MealSlot::Lunch), vec![FoodPortion::single(2)]),
            &[],
        )
        .unwrap();

    assert!(!plan.clear_existing);
}

#[test]
fn skip_policy_drops_already_recorded_foods() {
    let catalog = StaticFoodCatalog::with_seed_foods();
    let config = EngineConfig {
        duplicate_meal_policy: DuplicateMealPolicy::SkipRecorded,
        ..EngineConfig::default()
    };
    let recorder = MealRecorder::new(&catalog, &config);

    let (meal, plan) = recorder
        .record(
            &request(
                Some(MealSlot::Dinner),
                vec![FoodPortion::single(1), FoodPortion::single(2)],
            ),
            &[1],
        )
        .unwrap();

    assert!(!plan.clear_existing);
    assert_eq!(plan.skipped, vec![1]);
    assert_eq!(meal.items.len(), 1);
    assert_eq!(meal.items[0].food_name, "salmon");
}
