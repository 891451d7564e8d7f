// ABOUTME: Integration tests for the spirit progression state machine
// ABOUTME: Covers experience gains, leveling, attribute caps, seeding, and assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sprout_core::models::{Gender, NutrientTotals, SpiritState};
use sprout_core::{EngineConfig, EngineError};
use sprout_nutrition::spirit::{apply_meal_event, assess, grow_spirit};
use uuid::Uuid;

fn balanced_totals() -> NutrientTotals {
    NutrientTotals {
        calories: 2000.0,
        protein: 30.0,
        fat: 25.0,
        calcium: 10.0,
        ..NutrientTotals::default()
    }
}

// === Experience gains ===

#[test]
fn fully_balanced_meal_earns_maximum_experience() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    let growth = apply_meal_event(&mut spirit, &balanced_totals(), &EngineConfig::default());

    // 5 base + 2 each for calories, protein, fat, calcium
    assert_eq!(growth.experience_gained, 13);
    assert_eq!(spirit.experience, 13);
    assert_eq!(spirit.level, 1);
}

#[test]
fn missing_fat_drops_one_balance_bonus() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    let totals = NutrientTotals {
        calories: 2000.0,
        protein: 30.0,
        calcium: 10.0,
        ..NutrientTotals::default()
    };

    let growth = apply_meal_event(&mut spirit, &totals, &EngineConfig::default());
    assert_eq!(growth.experience_gained, 11);
}

#[test]
fn empty_meal_still_earns_base_experience() {
    let mut spirit = SpiritState::new("test", Gender::Female);
    let growth = apply_meal_event(
        &mut spirit,
        &NutrientTotals::default(),
        &EngineConfig::default(),
    );

    assert_eq!(growth.experience_gained, 5);
}

// === Leveling ===

#[test]
fn level_up_subtracts_the_threshold() {
    let config = EngineConfig {
        experience_per_level: 10,
        ..EngineConfig::default()
    };
    let mut spirit = SpiritState::new("test", Gender::Male);

    // 13 gained against a level-1 threshold of 10
    let growth = apply_meal_event(&mut spirit, &balanced_totals(), &config);

    assert_eq!(growth.levels_gained, 1);
    assert_eq!(spirit.level, 2);
    assert_eq!(spirit.experience, 3);
    assert_eq!(growth.next_level_experience, 20);
}

#[test]
fn one_event_can_cross_several_levels() {
    let config = EngineConfig {
        experience_per_level: 3,
        ..EngineConfig::default()
    };
    let mut spirit = SpiritState::new("test", Gender::Male);

    // 13 gained: 13 - 3 = 10 (level 2), 10 - 6 = 4 (level 3), 4 < 9
    let growth = apply_meal_event(&mut spirit, &balanced_totals(), &config);

    assert_eq!(growth.levels_gained, 2);
    assert_eq!(spirit.level, 3);
    assert_eq!(spirit.experience, 4);
}

#[test]
fn experience_invariant_holds_after_every_update() {
    let config = EngineConfig::default();
    let mut spirit = SpiritState::new("test", Gender::Female);

    for _ in 0..100 {
        apply_meal_event(&mut spirit, &balanced_totals(), &config);
        assert!(spirit.experience < config.level_threshold(spirit.level));
    }
}

#[test]
fn leveling_is_idempotent_in_aggregate_experience() {
    let config = EngineConfig::default();

    // Thirty events of 13 experience each, applied one at a time
    let mut incremental = SpiritState::new("test", Gender::Male);
    for _ in 0..30 {
        apply_meal_event(&mut incremental, &balanced_totals(), &config);
    }

    // The same total reduced through the threshold loop in one pass
    let mut level = 1_u32;
    let mut experience = 30_u32 * 13;
    while experience >= config.level_threshold(level) {
        experience -= config.level_threshold(level);
        level += 1;
    }

    assert_eq!(incremental.level, level);
    assert_eq!(incremental.experience, experience);
}

// === Attribute growth ===

#[test]
fn attribute_gains_follow_the_growth_formulas() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    let totals = NutrientTotals {
        calories: 2000.0,
        protein: 30.0,
        calcium: 10.0,
        ..NutrientTotals::default()
    };

    apply_meal_event(&mut spirit, &totals, &EngineConfig::default());

    // Male seeds: height 100, weight 20, intelligence 40, strength 40
    assert!((spirit.weight - 20.1).abs() < 1e-9);
    assert!((spirit.strength - 40.1).abs() < 1e-9);
    assert!((spirit.height - 100.05).abs() < 1e-9);
    assert!((spirit.intelligence - 40.0).abs() < 1e-9);
}

#[test]
fn half_portion_nutrients_grow_attributes_proportionally() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    let totals = NutrientTotals {
        calories: 1000.0,
        protein: 15.0,
        ..NutrientTotals::default()
    };

    apply_meal_event(&mut spirit, &totals, &EngineConfig::default());

    assert!((spirit.weight - 20.05).abs() < 1e-9);
    assert!((spirit.strength - 40.05).abs() < 1e-9);
}

#[test]
fn per_meal_gains_cap_under_absurd_inputs() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    let totals = NutrientTotals {
        calories: 1_000_000.0,
        protein: 10_000.0,
        ..NutrientTotals::default()
    };

    apply_meal_event(&mut spirit, &totals, &EngineConfig::default());

    assert!((spirit.weight - 20.1).abs() < 1e-9);
    assert!((spirit.strength - 40.1).abs() < 1e-9);
}

#[test]
fn attributes_clamp_at_domain_maxima() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    spirit.weight = 99.95;
    spirit.strength = 99.98;
    spirit.height = 199.99;
    spirit.intelligence = 99.99;

    let totals = NutrientTotals {
        calories: 1_000_000.0,
        protein: 10_000.0,
        calcium: 500.0,
        vitamin_a: 1.0,
        vitamin_b1: 1.0,
        vitamin_c: 50.0,
        vitamin_d: 5.0,
        ..NutrientTotals::default()
    };
    apply_meal_event(&mut spirit, &totals, &EngineConfig::default());

    assert!((spirit.weight - 100.0).abs() < f64::EPSILON);
    assert!((spirit.strength - 100.0).abs() < f64::EPSILON);
    assert!((spirit.height - 200.0).abs() < f64::EPSILON);
    assert!((spirit.intelligence - 100.0).abs() < f64::EPSILON);
}

#[test]
fn vitamins_grow_intelligence_per_distinct_vitamin() {
    let mut spirit = SpiritState::new("test", Gender::Female);
    let totals = NutrientTotals {
        vitamin_a: 0.5,
        vitamin_c: 30.0,
        vitamin_e: 2.0,
        ..NutrientTotals::default()
    };

    apply_meal_event(&mut spirit, &totals, &EngineConfig::default());

    // Female intelligence seed 45, three vitamins at 0.05 each
    assert!((spirit.intelligence - 45.15).abs() < 1e-9);
}

#[test]
fn vitamin_d_alone_grows_height() {
    let mut spirit = SpiritState::new("test", Gender::Female);
    let totals = NutrientTotals {
        vitamin_d: 5.0,
        ..NutrientTotals::default()
    };

    apply_meal_event(&mut spirit, &totals, &EngineConfig::default());
    assert!((spirit.height - 95.05).abs() < 1e-9);
}

// === Seeding and the user-keyed wrapper ===

#[test]
fn seeds_differ_by_gender() {
    let boy = SpiritState::new("a", Gender::Male);
    assert!((boy.height - 100.0).abs() < f64::EPSILON);
    assert!((boy.weight - 20.0).abs() < f64::EPSILON);
    assert!((boy.intelligence - 40.0).abs() < f64::EPSILON);
    assert!((boy.strength - 40.0).abs() < f64::EPSILON);

    let girl = SpiritState::new("b", Gender::Female);
    assert!((girl.height - 95.0).abs() < f64::EPSILON);
    assert!((girl.weight - 18.0).abs() < f64::EPSILON);
    assert!((girl.intelligence - 45.0).abs() < f64::EPSILON);
    assert!((girl.strength - 35.0).abs() < f64::EPSILON);

    assert_eq!(boy.level, 1);
    assert_eq!(boy.experience, 0);
}

#[test]
fn default_names_follow_gender() {
    assert_eq!(
        SpiritState::default_name("Ming", Gender::Male),
        "Ming's little champion"
    );
    assert_eq!(
        SpiritState::default_name("Hong", Gender::Female),
        "Hong's little fairy"
    );
}

#[test]
fn missing_state_is_a_no_op_signal() {
    let user_id = Uuid::new_v4();
    let result = grow_spirit(None, user_id, &balanced_totals(), &EngineConfig::default());

    assert!(matches!(
        result,
        Err(EngineError::NoProgressionState(id)) if id == user_id
    ));
}

#[test]
fn present_state_grows_through_the_wrapper() {
    let mut spirit = SpiritState::new("test", Gender::Male);
    let growth = grow_spirit(
        Some(&mut spirit),
        Uuid::new_v4(),
        &balanced_totals(),
        &EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(growth.experience_gained, 13);
}

// === Assessment ===

#[test]
fn assessment_reports_progress_and_bands() {
    let config = EngineConfig::default();
    let mut spirit = SpiritState::new("test", Gender::Male);
    spirit.experience = 50;

    let report = assess(&spirit, &config);

    assert_eq!(report.progress.next_level_experience, 200);
    assert!((report.progress.percent - 25.0).abs() < 1e-9);
    // Male seed 20kg at 1.00m is BMI 20, normal
    assert!((report.bmi.value - 20.0).abs() < 1e-9);
    assert_eq!(report.bmi.status, "normal");
    assert_eq!(report.strength.level, "average");
    assert_eq!(report.intelligence.level, "average");
}

#[test]
fn assessment_bands_scale_with_attributes() {
    let config = EngineConfig::default();
    let mut spirit = SpiritState::new("test", Gender::Male);
    spirit.strength = 95.0;
    spirit.intelligence = 10.0;

    let report = assess(&spirit, &config);
    assert_eq!(report.strength.level, "mighty");
    assert_eq!(report.intelligence.level, "slow");
}
