// ABOUTME: Meal-record orchestration - resolves foods, aggregates, and plans slot writes
// ABOUTME: Pure over passed-in state; any catalog miss aborts the whole meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Meal Recorder
//!
//! Turns a meal-record request into computed results and a write plan for
//! the persistence collaborator. The recorder performs no I/O: the caller
//! supplies the food ids already recorded for the target slot and is
//! responsible for executing the returned [`SlotWritePlan`] and for
//! serializing concurrent requests against the same (user, date, slot).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sprout_core::errors::{EngineError, EngineResult};
use sprout_core::models::{ConsumedItem, MealSlot, NutrientTotals};
use sprout_core::{DuplicateMealPolicy, EngineConfig};
use tracing::{debug, warn};

use crate::aggregator::aggregate;
use crate::catalog::{FoodCatalog, FoodId};
use crate::classifier::classify;

/// One requested food with its portion multiplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodPortion {
    /// Catalog identifier of the food
    pub food_id: FoodId,
    /// Portion multiplier, must be strictly positive
    pub portions: f64,
}

impl FoodPortion {
    /// One standard serving of the given food
    #[must_use]
    pub const fn single(food_id: FoodId) -> Self {
        Self {
            food_id,
            portions: 1.0,
        }
    }
}

/// A meal-record request as produced by the request-handling layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRequest {
    /// Meal date
    pub date: NaiveDate,
    /// Explicit meal slot; when absent the slot is classified from
    /// `recorded_at`
    pub slot: Option<MealSlot>,
    /// Timestamp of the request, the classification fallback
    pub recorded_at: NaiveDateTime,
    /// Requested foods with portions
    pub foods: Vec<FoodPortion>,
}

/// One resolved food within a recorded meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedItem {
    /// Catalog identifier of the food
    pub food_id: FoodId,
    /// Food display name
    pub food_name: String,
    /// Portion multiplier
    pub portions: f64,
    /// Nutrient values scaled by the portion multiplier
    pub nutrition: NutrientTotals,
}

/// The computed result of a meal-record request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedMeal {
    /// Meal date
    pub date: NaiveDate,
    /// Resolved meal slot
    pub slot: MealSlot,
    /// Foods to be written, with per-item scaled nutrition
    pub items: Vec<RecordedItem>,
    /// Summed nutrition over all items
    pub totals: NutrientTotals,
}

/// What the persistence collaborator should do with the slot's records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotWritePlan {
    /// Whether existing records for the slot must be deleted first
    pub clear_existing: bool,
    /// Requested foods dropped because the slot already recorded them
    /// (only under [`DuplicateMealPolicy::SkipRecorded`])
    pub skipped: Vec<FoodId>,
}

/// Meal-record orchestration over a food catalog
#[derive(Debug)]
pub struct MealRecorder<'a, C: FoodCatalog> {
    catalog: &'a C,
    config: &'a EngineConfig,
}

impl<'a, C: FoodCatalog> MealRecorder<'a, C> {
    /// Create a recorder over the given catalog and configuration
    #[must_use]
    pub const fn new(catalog: &'a C, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Compute the record result and write plan for a meal request
    ///
    /// `existing` lists the food ids already recorded for the target
    /// (user, date, slot); the configured [`DuplicateMealPolicy`] decides
    /// whether they are replaced or preserved.
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidInput` if the request contains no foods
    /// - `EngineError::FoodNotFound` if any food id is unknown; the whole
    ///   meal is abandoned, no partial totals are computed
    /// - `EngineError::InvalidPortion` if any portion is not strictly
    ///   positive
    pub fn record(
        &self,
        request: &MealRequest,
        existing: &[FoodId],
    ) -> EngineResult<(RecordedMeal, SlotWritePlan)> {
        if request.foods.is_empty() {
            return Err(EngineError::invalid_input(
                "a meal must contain at least one food",
            ));
        }

        let slot = request
            .slot
            .unwrap_or_else(|| classify(request.recorded_at));

        // Resolve every food before computing anything, so a miss aborts
        // the whole meal.
        let mut resolved = Vec::with_capacity(request.foods.len());
        for portion in &request.foods {
            let profile = self.catalog.profile_by_id(portion.food_id)?;
            resolved.push((portion.food_id, profile, portion.portions));
        }

        for (_, profile, portions) in &resolved {
            if *portions <= 0.0 {
                return Err(EngineError::invalid_portion(profile.name.clone(), *portions));
            }
        }

        let plan = match self.config.duplicate_meal_policy {
            DuplicateMealPolicy::ReplaceSlot => SlotWritePlan {
                clear_existing: !existing.is_empty(),
                skipped: Vec::new(),
            },
            DuplicateMealPolicy::SkipRecorded => {
                let skipped: Vec<FoodId> = resolved
                    .iter()
                    .filter(|(id, _, _)| existing.contains(id))
                    .map(|(id, _, _)| *id)
                    .collect();
                resolved.retain(|(id, _, _)| !existing.contains(id));
                SlotWritePlan {
                    clear_existing: false,
                    skipped,
                }
            }
        };

        if !plan.skipped.is_empty() {
            warn!(
                skipped = plan.skipped.len(),
                slot = %slot,
                "dropping foods already recorded for slot"
            );
        }

        let mut items = Vec::with_capacity(resolved.len());
        for (food_id, profile, portions) in resolved {
            let food_name = profile.name.clone();
            let nutrition = aggregate(&[ConsumedItem::new(profile, portions)])?;
            items.push(RecordedItem {
                food_id,
                food_name,
                portions,
                nutrition,
            });
        }

        let mut totals = NutrientTotals::default();
        for item in &items {
            totals.merge_in_place(&item.nutrition);
        }

        debug!(
            date = %request.date,
            slot = %slot,
            items = items.len(),
            "computed meal record"
        );

        Ok((
            RecordedMeal {
                date: request.date,
                slot,
                items,
                totals,
            },
            plan,
        ))
    }
}
