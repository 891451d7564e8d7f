// ABOUTME: Nutrition tracking models for meal intake aggregation and analysis
// ABOUTME: Nutrient enumeration, NutrientProfile, ConsumedItem, NutrientTotals, and MealSlot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// The fixed set of tracked nutrients
///
/// Every totals record, reference standard, and grade covers exactly this
/// set. Adding a nutrient is a source change, not a runtime event, which
/// keeps aggregation and grading exhaustive by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Fat (g)
    Fat,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Zinc (mg)
    Zinc,
    /// Magnesium (mg)
    Magnesium,
    /// Vitamin A (mg)
    VitaminA,
    /// Vitamin B1 (mg)
    VitaminB1,
    /// Vitamin B2 (mg)
    VitaminB2,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin D (mg)
    VitaminD,
    /// Vitamin E (mg)
    VitaminE,
}

impl Nutrient {
    /// All tracked nutrients, in canonical order
    pub const ALL: [Self; 13] = [
        Self::Calories,
        Self::Protein,
        Self::Fat,
        Self::Calcium,
        Self::Iron,
        Self::Zinc,
        Self::Magnesium,
        Self::VitaminA,
        Self::VitaminB1,
        Self::VitaminB2,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
    ];

    /// The vitamins that contribute to intelligence growth
    pub const VITAMINS: [Self; 6] = [
        Self::VitaminA,
        Self::VitaminB1,
        Self::VitaminB2,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
    ];

    /// Canonical snake_case name, as used in serialized records
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::Zinc => "zinc",
            Self::Magnesium => "magnesium",
            Self::VitaminA => "vitamin_a",
            Self::VitaminB1 => "vitamin_b1",
            Self::VitaminB2 => "vitamin_b2",
            Self::VitaminC => "vitamin_c",
            Self::VitaminD => "vitamin_d",
            Self::VitaminE => "vitamin_e",
        }
    }

    /// Measurement unit for this nutrient
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Fat => "g",
            _ => "mg",
        }
    }

    /// Whether this nutrient is one of the tracked vitamins
    #[must_use]
    pub const fn is_vitamin(self) -> bool {
        matches!(
            self,
            Self::VitaminA
                | Self::VitaminB1
                | Self::VitaminB2
                | Self::VitaminC
                | Self::VitaminD
                | Self::VitaminE
        )
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nutrient {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calories" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "fat" => Ok(Self::Fat),
            "calcium" => Ok(Self::Calcium),
            "iron" => Ok(Self::Iron),
            "zinc" => Ok(Self::Zinc),
            "magnesium" => Ok(Self::Magnesium),
            "vitamin_a" => Ok(Self::VitaminA),
            "vitamin_b1" => Ok(Self::VitaminB1),
            "vitamin_b2" => Ok(Self::VitaminB2),
            "vitamin_c" => Ok(Self::VitaminC),
            "vitamin_d" => Ok(Self::VitaminD),
            "vitamin_e" => Ok(Self::VitaminE),
            other => Err(EngineError::unknown_nutrient(other)),
        }
    }
}

/// Per-serving nutrient values for one food
///
/// Owned by the catalog collaborator; the engine only reads it. The three
/// macronutrients are always present, the micronutrients may be absent for
/// foods the catalog has no data on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientProfile {
    /// Food display name
    pub name: String,
    /// Standard serving size in grams
    pub serving_grams: f64,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein: f64,
    /// Fat per serving (g)
    pub fat: f64,
    /// Calcium per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Iron per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Zinc per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zinc: Option<f64>,
    /// Magnesium per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnesium: Option<f64>,
    /// Vitamin A per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<f64>,
    /// Vitamin B1 per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_b1: Option<f64>,
    /// Vitamin B2 per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_b2: Option<f64>,
    /// Vitamin C per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
    /// Vitamin D per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<f64>,
    /// Vitamin E per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_e: Option<f64>,
}

impl NutrientProfile {
    /// Create a profile with the three macronutrients and no micronutrient
    /// data; chain [`Self::with`] to fill in known micronutrients
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        serving_grams: f64,
        calories: f64,
        protein: f64,
        fat: f64,
    ) -> Self {
        Self {
            name: name.into(),
            serving_grams,
            calories,
            protein,
            fat,
            calcium: None,
            iron: None,
            zinc: None,
            magnesium: None,
            vitamin_a: None,
            vitamin_b1: None,
            vitamin_b2: None,
            vitamin_c: None,
            vitamin_d: None,
            vitamin_e: None,
        }
    }

    /// Set one nutrient value, builder style
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Protein => self.protein = value,
            Nutrient::Fat => self.fat = value,
            Nutrient::Calcium => self.calcium = Some(value),
            Nutrient::Iron => self.iron = Some(value),
            Nutrient::Zinc => self.zinc = Some(value),
            Nutrient::Magnesium => self.magnesium = Some(value),
            Nutrient::VitaminA => self.vitamin_a = Some(value),
            Nutrient::VitaminB1 => self.vitamin_b1 = Some(value),
            Nutrient::VitaminB2 => self.vitamin_b2 = Some(value),
            Nutrient::VitaminC => self.vitamin_c = Some(value),
            Nutrient::VitaminD => self.vitamin_d = Some(value),
            Nutrient::VitaminE => self.vitamin_e = Some(value),
        }
        self
    }

    /// Per-serving value for the given nutrient, `None` when the catalog
    /// has no data for it
    #[must_use]
    pub const fn value_of(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => Some(self.calories),
            Nutrient::Protein => Some(self.protein),
            Nutrient::Fat => Some(self.fat),
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Zinc => self.zinc,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminB1 => self.vitamin_b1,
            Nutrient::VitaminB2 => self.vitamin_b2,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
        }
    }
}

/// One food consumed with a portion multiplier
///
/// Transient, constructed per request. A portion of 1.0 is one standard
/// serving of the food.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumedItem {
    /// Nutrient profile of the consumed food
    pub profile: NutrientProfile,
    /// Portion multiplier, must be strictly positive
    pub portions: f64,
}

impl ConsumedItem {
    /// Create a consumed item from a profile and portion multiplier
    #[must_use]
    pub const fn new(profile: NutrientProfile, portions: f64) -> Self {
        Self { profile, portions }
    }
}

/// Summed nutrient consumption for a set of consumed items
///
/// Fixed-field record covering exactly the tracked nutrient set. Created
/// fresh per aggregation call and never mutated after return; callers merge
/// multiple totals by elementwise addition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Total energy (kcal)
    pub calories: f64,
    /// Total protein (g)
    pub protein: f64,
    /// Total fat (g)
    pub fat: f64,
    /// Total calcium (mg)
    pub calcium: f64,
    /// Total iron (mg)
    pub iron: f64,
    /// Total zinc (mg)
    pub zinc: f64,
    /// Total magnesium (mg)
    pub magnesium: f64,
    /// Total vitamin A (mg)
    pub vitamin_a: f64,
    /// Total vitamin B1 (mg)
    pub vitamin_b1: f64,
    /// Total vitamin B2 (mg)
    pub vitamin_b2: f64,
    /// Total vitamin C (mg)
    pub vitamin_c: f64,
    /// Total vitamin D (mg)
    pub vitamin_d: f64,
    /// Total vitamin E (mg)
    pub vitamin_e: f64,
}

impl NutrientTotals {
    /// Accumulated value for the given nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Zinc => self.zinc,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminB1 => self.vitamin_b1,
            Nutrient::VitaminB2 => self.vitamin_b2,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
        }
    }

    /// Add a value to the given nutrient's total
    pub fn add(&mut self, nutrient: Nutrient, value: f64) {
        let slot = match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Zinc => &mut self.zinc,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminB1 => &mut self.vitamin_b1,
            Nutrient::VitaminB2 => &mut self.vitamin_b2,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::VitaminE => &mut self.vitamin_e,
        };
        *slot += value;
    }

    /// Elementwise sum of two totals records
    ///
    /// Associative and commutative; used to merge per-meal totals into
    /// per-day and per-range totals.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.merge_in_place(other);
        merged
    }

    /// Add another totals record into this one, elementwise
    pub fn merge_in_place(&mut self, other: &Self) {
        for nutrient in Nutrient::ALL {
            self.add(nutrient, other.get(nutrient));
        }
    }

    /// Divide every total by a day count, producing daily averages
    #[must_use]
    pub fn scaled(&self, divisor: f64) -> Self {
        let mut scaled = Self::default();
        for nutrient in Nutrient::ALL {
            scaled.add(nutrient, self.get(nutrient) / divisor);
        }
        scaled
    }

    /// Whether every tracked nutrient total is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n) == 0.0)
    }
}

/// Meal slot classification
///
/// The unit of meal-type classification: every recorded meal belongs to
/// exactly one slot of its day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast, 05:00-10:00
    Breakfast,
    /// Lunch, 10:00-15:00
    Lunch,
    /// Dinner, 15:00-23:00
    Dinner,
}

impl MealSlot {
    /// All slots in day order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Classify an hour of day (0-23) into a meal slot
    ///
    /// Hours in [23,24) and [0,5) count as the next day's breakfast. Total
    /// over all valid hours, no failure modes.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=9 => Self::Breakfast,
            10..=14 => Self::Lunch,
            15..=22 => Self::Dinner,
            // 23:00-05:00 belongs to the next day's first meal
            _ => Self::Breakfast,
        }
    }

    /// Classify a timestamp into a meal slot
    #[must_use]
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self::from_hour(timestamp.hour())
    }

    /// Slot display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
