// ABOUTME: Main library entry point for the Sprout nutrition intelligence engine
// ABOUTME: Aggregation, reference grading, spirit progression, and statistics over meal data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

#![deny(unsafe_code)]

//! # Sprout Nutrition Engine
//!
//! The computation core of the Sprout nutrition platform: it turns lists of
//! consumed foods into nutrient totals, grades those totals against
//! age/gender-specific reference standards, and drives the growth of each
//! user's nutrition spirit in response to meal events.
//!
//! ## Architecture
//!
//! Every component depends only on data passed in; the engine performs no
//! I/O, owns no persistence, and assumes the caller hands it consistent
//! state snapshots:
//!
//! - **classifier**: maps timestamps to meal slots
//! - **aggregator**: sums per-food nutrient values into totals records
//! - **grading**: reference standards, seven-tier grading, and suggestions
//! - **spirit**: experience, leveling, and attribute growth state machine
//! - **recorder**: meal-record orchestration over the food catalog seam
//! - **statistics**: daily and date-range consumption reports
//!
//! Routing, authentication, the food catalog, and the record store are
//! external collaborators reached through the traits in [`catalog`].
//!
//! ## Example
//!
//! ```rust
//! use sprout_nutrition::aggregator::aggregate;
//! use sprout_core::models::{ConsumedItem, NutrientProfile};
//!
//! # fn main() -> sprout_core::EngineResult<()> {
//! let egg = NutrientProfile {
//!     name: "egg".into(),
//!     serving_grams: 50.0,
//!     calories: 77.0,
//!     protein: 6.5,
//!     fat: 5.5,
//!     calcium: Some(28.0),
//!     iron: Some(2.7),
//!     zinc: Some(1.0),
//!     magnesium: None,
//!     vitamin_a: Some(0.234),
//!     vitamin_b1: Some(0.3),
//!     vitamin_b2: None,
//!     vitamin_c: None,
//!     vitamin_d: None,
//!     vitamin_e: None,
//! };
//! let totals = aggregate(&[ConsumedItem::new(egg, 2.0)])?;
//! assert!((totals.calories - 154.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

/// Nutrient aggregation over consumed items
pub mod aggregator;

/// Food catalog and collaborator seams
pub mod catalog;

/// Meal slot classification from timestamps
pub mod classifier;

/// Reference standards, grading tiers, and intake suggestions
pub mod grading;

/// Logging configuration and structured logging setup
pub mod logging;

/// Meal-record orchestration over the catalog seam
pub mod recorder;

/// Spirit progression state machine and assessment reports
pub mod spirit;

/// Daily and date-range consumption statistics
pub mod statistics;

// Re-export the foundation crate's entry types so callers need a single import
pub use sprout_core::{DuplicateMealPolicy, EngineConfig, EngineError, EngineResult};
