// ABOUTME: Nutrient aggregation - sums per-food values scaled by portion multipliers
// ABOUTME: Pure summation over the fixed nutrient set, order-insensitive, absence contributes zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Nutrient Aggregator
//!
//! Converts a list of consumed foods into a [`NutrientTotals`] record. The
//! same operation serves a single meal and, by repeated merging, multi-day
//! statistics.

use sprout_core::errors::{EngineError, EngineResult};
use sprout_core::models::{ConsumedItem, Nutrient, NutrientTotals};
use tracing::debug;

/// Sum the nutrient values of all consumed items, scaled by their portion
/// multipliers
///
/// A nutrient absent on a given food contributes zero, not an error. An
/// empty item list yields all-zero totals. The result is insensitive to
/// item ordering.
///
/// # Errors
///
/// Returns `EngineError::InvalidPortion` if any item carries a portion
/// multiplier that is not strictly positive. Validation happens before any
/// summation, so a failed call produces no partial totals.
pub fn aggregate(items: &[ConsumedItem]) -> EngineResult<NutrientTotals> {
    for item in items {
        if item.portions <= 0.0 {
            return Err(EngineError::invalid_portion(
                item.profile.name.clone(),
                item.portions,
            ));
        }
    }

    let mut totals = NutrientTotals::default();
    for item in items {
        for nutrient in Nutrient::ALL {
            if let Some(value) = item.profile.value_of(nutrient) {
                totals.add(nutrient, value * item.portions);
            }
        }
    }

    debug!(
        items = items.len(),
        calories = totals.calories,
        protein = totals.protein,
        "aggregated meal totals"
    );
    Ok(totals)
}

/// Merge any number of totals records into one by elementwise addition
#[must_use]
pub fn merge_totals<'a>(parts: impl IntoIterator<Item = &'a NutrientTotals>) -> NutrientTotals {
    let mut merged = NutrientTotals::default();
    for part in parts {
        merged.merge_in_place(part);
    }
    merged
}
