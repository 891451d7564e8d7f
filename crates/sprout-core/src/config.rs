// ABOUTME: Engine configuration resolved once at startup and treated as immutable
// ABOUTME: Carries the leveling threshold constant and the duplicate-meal policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! Engine configuration
//!
//! Two behaviors are deliberately configuration rather than hard-coded:
//! the per-level experience requirement and the policy applied when a meal
//! slot already holds records. Both are read once at startup and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::growth::DEFAULT_EXPERIENCE_PER_LEVEL;

/// Policy for a meal-record request targeting a (user, date, slot) that
/// already holds records
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateMealPolicy {
    /// Drop all existing records for the slot, then write the incoming meal
    #[default]
    ReplaceSlot,
    /// Keep existing records; write only foods not already recorded in the slot
    SkipRecorded,
}

/// Engine configuration values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Experience required per level: the threshold to leave level `n` is
    /// `n * experience_per_level`
    pub experience_per_level: u32,
    /// How to treat a meal-record request for an already-recorded slot
    pub duplicate_meal_policy: DuplicateMealPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            experience_per_level: DEFAULT_EXPERIENCE_PER_LEVEL,
            duplicate_meal_policy: DuplicateMealPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Experience threshold required to advance past the given level
    #[must_use]
    pub const fn level_threshold(&self, level: u32) -> u32 {
        level * self.experience_per_level
    }
}
