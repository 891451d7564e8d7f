// ABOUTME: Food catalog seam - the trait boundary to the catalog collaborator
// ABOUTME: StaticFoodCatalog ships the platform's seed foods for tests and demos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Food Catalog
//!
//! The engine never stores food data; it reads [`NutrientProfile`]s through
//! the [`FoodCatalog`] trait. The production catalog lives behind a
//! persistence collaborator; [`StaticFoodCatalog`] is the in-memory
//! implementation preloaded with the platform's seed foods.

use std::collections::HashMap;

use sprout_core::errors::{EngineError, EngineResult};
use sprout_core::models::{Nutrient, NutrientProfile};

/// Identifier for a food within the catalog
pub type FoodId = u32;

/// Lookup seam to the food catalog collaborator
///
/// Both lookups must fail cleanly with `FoodNotFound` when the food is
/// absent; callers abort the whole meal-record operation on a miss rather
/// than partially record it.
pub trait FoodCatalog {
    /// Resolve a food's nutrient profile by identifier
    ///
    /// # Errors
    ///
    /// Returns `EngineError::FoodNotFound` if no food has this identifier.
    fn profile_by_id(&self, id: FoodId) -> EngineResult<NutrientProfile>;

    /// Resolve a food's nutrient profile by display name
    ///
    /// # Errors
    ///
    /// Returns `EngineError::FoodNotFound` if no food has this name.
    fn profile_by_name(&self, name: &str) -> EngineResult<NutrientProfile>;
}

/// In-memory food catalog
///
/// Preloaded with the seed foods the platform ships with; additional foods
/// can be registered at startup. Read-only once handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct StaticFoodCatalog {
    foods: HashMap<FoodId, NutrientProfile>,
}

impl StaticFoodCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog preloaded with the platform's seed foods
    #[must_use]
    pub fn with_seed_foods() -> Self {
        let mut catalog = Self::new();
        for (id, profile) in seed_foods() {
            catalog.register(id, profile);
        }
        catalog
    }

    /// Register a food under the given identifier, replacing any previous
    /// entry
    pub fn register(&mut self, id: FoodId, profile: NutrientProfile) {
        self.foods.insert(id, profile);
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FoodCatalog for StaticFoodCatalog {
    fn profile_by_id(&self, id: FoodId) -> EngineResult<NutrientProfile> {
        self.foods
            .get(&id)
            .cloned()
            .ok_or_else(|| EngineError::food_not_found(format!("#{id}")))
    }

    fn profile_by_name(&self, name: &str) -> EngineResult<NutrientProfile> {
        self.foods
            .values()
            .find(|profile| profile.name == name)
            .cloned()
            .ok_or_else(|| EngineError::food_not_found(name))
    }
}

/// The seed foods the platform ships with
///
/// Values are per standard serving; missing micronutrients reflect gaps in
/// the source data, not zeros.
fn seed_foods() -> Vec<(FoodId, NutrientProfile)> {
    use Nutrient::{Calcium, Iron, VitaminA, VitaminB1, VitaminC, Zinc};

    vec![
        (
            1,
            NutrientProfile::new("spare ribs", 100.0, 264.0, 18.3, 20.4)
                .with(Calcium, 8.0)
                .with(Iron, 0.8)
                .with(Zinc, 3.36),
        ),
        (
            2,
            NutrientProfile::new("salmon", 100.0, 130.0, 21.0, 7.4)
                .with(Calcium, 286.0)
                .with(Iron, 0.34)
                .with(VitaminA, 0.058)
                .with(VitaminB1, 0.16),
        ),
        (
            3,
            NutrientProfile::new("cauliflower", 100.0, 24.0, 2.1, 0.2)
                .with(Calcium, 23.0)
                .with(Iron, 1.1)
                .with(Zinc, 0.38)
                .with(VitaminA, 0.005)
                .with(VitaminC, 61.0),
        ),
        (
            4,
            NutrientProfile::new("shiitake mushrooms", 100.0, 278.0, 20.0, 1.8)
                .with(Calcium, 124.0)
                .with(Iron, 25.3)
                .with(Zinc, 3.36)
                .with(VitaminA, 0.004)
                .with(VitaminB1, 1.2),
        ),
        (
            5,
            NutrientProfile::new("spaghetti", 100.0, 350.0, 12.0, 2.0)
                .with(Calcium, 8.0)
                .with(Iron, 1.1)
                .with(VitaminA, 0.004)
                .with(VitaminB1, 0.6),
        ),
        (
            6,
            NutrientProfile::new("milk", 200.0, 130.0, 6.6, 6.4)
                .with(Calcium, 236.0)
                .with(Zinc, 0.4)
                .with(VitaminA, 0.12)
                .with(VitaminB1, 0.22),
        ),
        (
            7,
            NutrientProfile::new("egg", 50.0, 77.0, 6.5, 5.5)
                .with(Calcium, 28.0)
                .with(Iron, 2.7)
                .with(Zinc, 1.0)
                .with(VitaminA, 0.234)
                .with(VitaminB1, 0.3),
        ),
        (
            8,
            NutrientProfile::new("spinach", 100.0, 23.0, 2.9, 0.4)
                .with(Calcium, 23.0)
                .with(Iron, 2.7)
                .with(Zinc, 0.85)
                .with(VitaminA, 0.487)
                .with(VitaminC, 39.0),
        ),
    ]
}
