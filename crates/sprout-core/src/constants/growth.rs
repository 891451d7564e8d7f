// ABOUTME: Experience and attribute growth-rate constants for the spirit progression engine
// ABOUTME: Base meal experience, balance bonuses, and per-nutrient growth divisors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

/// Base experience granted for every recorded meal
pub const BASE_MEAL_EXPERIENCE: u32 = 5;

/// Bonus experience per balanced-nutrition component present in a meal
///
/// Granted once for each of calories, protein, fat, and calcium with a
/// strictly positive total (maximum 4 components, +8).
pub const BALANCE_BONUS_EXPERIENCE: u32 = 2;

/// Default experience required per level, multiplied by the current level.
///
/// Threshold to advance from level `n` is `n * EXPERIENCE_PER_LEVEL`.
pub const DEFAULT_EXPERIENCE_PER_LEVEL: u32 = 200;

/// Calories required for the full per-meal weight gain
pub const WEIGHT_GAIN_CALORIE_DIVISOR: f64 = 2000.0;

/// Maximum weight gained from a single meal event
pub const WEIGHT_GAIN_PER_MEAL_CAP: f64 = 0.1;

/// Grams of protein required for the full per-meal strength gain
pub const STRENGTH_GAIN_PROTEIN_DIVISOR: f64 = 30.0;

/// Maximum strength gained from a single meal event
pub const STRENGTH_GAIN_PER_MEAL_CAP: f64 = 0.1;

/// Height gained when a meal supplies calcium or vitamin D
pub const HEIGHT_GAIN_PER_MEAL: f64 = 0.05;

/// Intelligence gained per distinct vitamin present in a meal
pub const INTELLIGENCE_GAIN_PER_VITAMIN: f64 = 0.05;
