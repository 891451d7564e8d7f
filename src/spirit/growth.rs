// ABOUTME: Progression state machine - experience, leveling, and capped attribute growth
// ABOUTME: One meal event in, one atomic state transition out, multi-level-ups supported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Growth State Machine
//!
//! Applies a meal event's nutrient totals to a spirit state: base plus
//! balance-bonus experience, repeated-subtraction leveling, and four
//! independently capped attribute gains. The update is atomic against a
//! single state instance; callers hand in a consistent snapshot and write
//! the result back.

use serde::{Deserialize, Serialize};
use sprout_core::constants::growth::{
    BALANCE_BONUS_EXPERIENCE, BASE_MEAL_EXPERIENCE, HEIGHT_GAIN_PER_MEAL,
    INTELLIGENCE_GAIN_PER_VITAMIN, STRENGTH_GAIN_PER_MEAL_CAP, STRENGTH_GAIN_PROTEIN_DIVISOR,
    WEIGHT_GAIN_CALORIE_DIVISOR, WEIGHT_GAIN_PER_MEAL_CAP,
};
use sprout_core::constants::limits::{MAX_HEIGHT, MAX_INTELLIGENCE, MAX_STRENGTH, MAX_WEIGHT};
use sprout_core::errors::{EngineError, EngineResult};
use sprout_core::models::{Nutrient, NutrientTotals, SpiritState};
use sprout_core::EngineConfig;
use tracing::{debug, info};
use uuid::Uuid;

/// The nutrients whose presence earns the balanced-nutrition bonus
const BALANCE_NUTRIENTS: [Nutrient; 4] = [
    Nutrient::Calories,
    Nutrient::Protein,
    Nutrient::Fat,
    Nutrient::Calcium,
];

/// Summary of one meal event's effect on a spirit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealGrowth {
    /// Experience gained from this event
    pub experience_gained: u32,
    /// Levels gained from this event (0 for most meals)
    pub levels_gained: u32,
    /// Level after the update
    pub level: u32,
    /// Experience within the current level after the update
    pub experience: u32,
    /// Experience threshold to reach the next level
    pub next_level_experience: u32,
    /// Height after the update
    pub height: f64,
    /// Weight after the update
    pub weight: f64,
    /// Intelligence after the update
    pub intelligence: f64,
    /// Strength after the update
    pub strength: f64,
}

/// Apply one meal event to a spirit state
///
/// Experience: 5 base per recorded meal, +2 for each of calories, protein,
/// fat, and calcium present with a strictly positive total. Level-ups
/// resolve by repeated subtraction against `level * experience_per_level`,
/// so one large event can cross several levels. Attribute gains are capped
/// per meal and clamped to their domain maxima; attributes never decrease.
pub fn apply_meal_event(
    state: &mut SpiritState,
    totals: &NutrientTotals,
    config: &EngineConfig,
) -> MealGrowth {
    let balance_count = BALANCE_NUTRIENTS
        .iter()
        .filter(|n| totals.get(**n) > 0.0)
        .count() as u32;
    let gained = BASE_MEAL_EXPERIENCE + balance_count * BALANCE_BONUS_EXPERIENCE;

    state.experience += gained;

    let mut levels_gained = 0;
    while state.experience >= config.level_threshold(state.level) {
        state.experience -= config.level_threshold(state.level);
        state.level += 1;
        levels_gained += 1;
    }

    if levels_gained > 0 {
        info!(
            spirit = %state.name,
            level = state.level,
            levels_gained,
            "spirit leveled up"
        );
    }

    // Calories feed weight, protein feeds strength; both scale with the
    // meal but cap at one full increment per event.
    if totals.calories > 0.0 {
        let gain = (totals.calories / WEIGHT_GAIN_CALORIE_DIVISOR * WEIGHT_GAIN_PER_MEAL_CAP)
            .min(WEIGHT_GAIN_PER_MEAL_CAP);
        state.weight = (state.weight + gain).min(MAX_WEIGHT);
    }
    if totals.protein > 0.0 {
        let gain = (totals.protein / STRENGTH_GAIN_PROTEIN_DIVISOR * STRENGTH_GAIN_PER_MEAL_CAP)
            .min(STRENGTH_GAIN_PER_MEAL_CAP);
        state.strength = (state.strength + gain).min(MAX_STRENGTH);
    }

    // Calcium or vitamin D grows height by a fixed step.
    if totals.calcium > 0.0 || totals.vitamin_d > 0.0 {
        state.height = (state.height + HEIGHT_GAIN_PER_MEAL).min(MAX_HEIGHT);
    }

    // Each distinct vitamin present grows intelligence.
    let vitamin_count = Nutrient::VITAMINS
        .iter()
        .filter(|n| totals.get(**n) > 0.0)
        .count();
    if vitamin_count > 0 {
        let gain = vitamin_count as f64 * INTELLIGENCE_GAIN_PER_VITAMIN;
        state.intelligence = (state.intelligence + gain).min(MAX_INTELLIGENCE);
    }

    debug!(
        spirit = %state.name,
        experience_gained = gained,
        level = state.level,
        "applied meal event to spirit"
    );

    MealGrowth {
        experience_gained: gained,
        levels_gained,
        level: state.level,
        experience: state.experience,
        next_level_experience: config.level_threshold(state.level),
        height: state.height,
        weight: state.weight,
        intelligence: state.intelligence,
        strength: state.strength,
    }
}

/// Apply one meal event for a user whose spirit may not exist yet
///
/// # Errors
///
/// Returns `EngineError::NoProgressionState` if `state` is `None`; nothing
/// is mutated and the caller decides whether to lazily create a spirit or
/// surface the error.
pub fn grow_spirit(
    state: Option<&mut SpiritState>,
    user_id: Uuid,
    totals: &NutrientTotals,
    config: &EngineConfig,
) -> EngineResult<MealGrowth> {
    state.map_or(Err(EngineError::NoProgressionState(user_id)), |spirit| {
        Ok(apply_meal_event(spirit, totals, config))
    })
}
