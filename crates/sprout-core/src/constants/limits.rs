// ABOUTME: Attribute domain maxima and gender-dependent seed values for spirit state
// ABOUTME: Attributes are clamped to these caps and never decrease
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

/// Maximum spirit height (cm)
pub const MAX_HEIGHT: f64 = 200.0;

/// Maximum spirit weight (kg)
pub const MAX_WEIGHT: f64 = 100.0;

/// Maximum spirit intelligence
pub const MAX_INTELLIGENCE: f64 = 100.0;

/// Maximum spirit strength
pub const MAX_STRENGTH: f64 = 100.0;

/// Seed attributes for a male user's spirit: height, weight, intelligence, strength
pub const MALE_SEED_ATTRIBUTES: (f64, f64, f64, f64) = (100.0, 20.0, 40.0, 40.0);

/// Seed attributes for a female user's spirit: height, weight, intelligence, strength
pub const FEMALE_SEED_ATTRIBUTES: (f64, f64, f64, f64) = (95.0, 18.0, 45.0, 35.0);
