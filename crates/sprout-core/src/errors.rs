// ABOUTME: Unified error types for nutrition aggregation and progression operations
// ABOUTME: EngineError covers portion validation, catalog misses, and progression state lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Engine Error Types
//!
//! All engine failures are synchronous return-path errors. The engine performs
//! no I/O, so there is no retry machinery here; retries, if any, belong to the
//! calling layer around its collaborator calls.

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for engine operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Portion multiplier was zero or negative.
    ///
    /// Rejected before any aggregation work; a failed meal produces no
    /// partial totals.
    #[error("portion multiplier for '{food}' must be positive, got {multiplier}")]
    InvalidPortion {
        /// Display name of the offending food
        food: String,
        /// The rejected multiplier value
        multiplier: f64,
    },

    /// A nutrient name outside the fixed tracked set was requested.
    ///
    /// Unreachable through the closed `Nutrient` enumeration; surfaces only
    /// on the string-parsing path.
    #[error("unknown nutrient '{0}'")]
    UnknownNutrient(String),

    /// Food lookup failed in the catalog collaborator.
    ///
    /// Callers abort the whole meal-record operation rather than partially
    /// record it.
    #[error("food '{0}' not found in catalog")]
    FoodNotFound(String),

    /// A progression update was requested for a user without an initialized
    /// spirit state. The operation is a no-op; the caller decides whether to
    /// lazily create a state or surface the error.
    #[error("no spirit state initialized for user {0}")]
    NoProgressionState(Uuid),

    /// Generic precondition failure (invalid date range and similar)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Create an "invalid portion" error
    #[must_use]
    pub fn invalid_portion(food: impl Into<String>, multiplier: f64) -> Self {
        Self::InvalidPortion {
            food: food.into(),
            multiplier,
        }
    }

    /// Create an "unknown nutrient" error
    #[must_use]
    pub fn unknown_nutrient(name: impl Into<String>) -> Self {
        Self::UnknownNutrient(name.into())
    }

    /// Create a "food not found" error
    #[must_use]
    pub fn food_not_found(name: impl Into<String>) -> Self {
        Self::FoodNotFound(name.into())
    }

    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
