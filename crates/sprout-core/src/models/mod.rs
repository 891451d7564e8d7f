// ABOUTME: Core data models for the Sprout nutrition engine
// ABOUTME: Re-exports Nutrient, NutrientProfile, NutrientTotals, MealSlot, SpiritState and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Data Models
//!
//! Core data structures shared by every engine component.
//!
//! ## Design Principles
//!
//! - **Closed nutrient set**: every nutrient key is statically known; totals
//!   and grades are fixed-field records, never dynamic maps
//! - **Explicit absence**: per-food nutrient values that may be missing are
//!   `Option<f64>`, and aggregation treats absence as zero contribution
//! - **Serializable**: all models support JSON serialization
//! - **Type safe**: strong typing prevents mixing observed values, standards,
//!   and percentages

// Domain modules
mod nutrition;
mod spirit;
mod user;

// Nutrition domain
pub use nutrition::{ConsumedItem, MealSlot, Nutrient, NutrientProfile, NutrientTotals};

// Spirit progression domain
pub use spirit::{Gender, SpiritState};

// User domain
pub use user::UserProfile;
