// ABOUTME: Spirit progression state - the gamified per-user companion record
// ABOUTME: Gender-dependent seeding, level/experience counters, and capped attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::limits::{FEMALE_SEED_ATTRIBUTES, MALE_SEED_ATTRIBUTES};

/// User gender, a closed two-valued domain as used by the reference
/// standards table and spirit seeding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// The gamified per-user companion state driven by meal events
///
/// Created once per user at registration with gender-dependent seed
/// attributes, then updated once per recorded meal for the remainder of the
/// user's lifetime. Owned exclusively by one user; the progression engine is
/// the sole writer.
///
/// Invariants maintained by the engine:
/// - `level >= 1`, increases monotonically one step at a time
/// - `experience < level * experience_per_level` after every update
/// - each attribute is clamped to its domain maximum and never decreases
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpiritState {
    /// Display name of the spirit
    pub name: String,
    /// Current level, starts at 1
    pub level: u32,
    /// Experience accumulated within the current level
    pub experience: u32,
    /// Height attribute (cm), capped at 200
    pub height: f64,
    /// Weight attribute (kg), capped at 100
    pub weight: f64,
    /// Intelligence attribute, capped at 100
    pub intelligence: f64,
    /// Strength attribute, capped at 100
    pub strength: f64,
}

impl SpiritState {
    /// Create a fresh spirit for a newly registered user
    ///
    /// Seeds the four attributes from the user's gender: boys start taller
    /// and stronger, girls start brighter.
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        let (height, weight, intelligence, strength) = match gender {
            Gender::Male => MALE_SEED_ATTRIBUTES,
            Gender::Female => FEMALE_SEED_ATTRIBUTES,
        };
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            height,
            weight,
            intelligence,
            strength,
        }
    }

    /// Compose the default spirit name used at registration
    #[must_use]
    pub fn default_name(user_name: &str, gender: Gender) -> String {
        match gender {
            Gender::Male => format!("{user_name}'s little champion"),
            Gender::Female => format!("{user_name}'s little fairy"),
        }
    }
}
