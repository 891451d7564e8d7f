// ABOUTME: Spirit progression engine - growth state machine and assessment reports
// ABOUTME: Re-exports apply_meal_event, grow_spirit, MealGrowth, and SpiritAssessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Spirit Progression
//!
//! The state machine that turns a meal event into spirit growth, plus the
//! pure assessment report over a spirit's current state.

mod assessment;
mod growth;

pub use assessment::{assess, AttributeBand, BmiReading, ExperienceProgress, SpiritAssessment};
pub use growth::{apply_meal_event, grow_spirit, MealGrowth};
