// ABOUTME: Recommended daily intake standards keyed by nutrient, gender, and age bracket
// ABOUTME: Static process-wide table, immutable by construction via exhaustive match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Reference Standards
//!
//! Recommended daily values per (nutrient, gender, age bracket). The table
//! is a constant function over the closed nutrient set rather than a shared
//! mutable map: loaded never, mutated never.

use serde::{Deserialize, Serialize};
use sprout_core::models::{Gender, Nutrient};

/// Age bracket used by the reference standards table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// 18 years and younger
    Young,
    /// Older than 18 years
    Adult,
}

impl AgeBracket {
    /// Resolve the bracket for an age in years
    #[must_use]
    pub const fn from_age(age: u8) -> Self {
        if age <= 18 {
            Self::Young
        } else {
            Self::Adult
        }
    }
}

/// Recommended daily intake for a nutrient, in that nutrient's unit
///
/// Values follow the dietary reference standards the platform ships with.
/// Growing users (18 and under) get higher energy, protein, and fat
/// targets; iron and zinc differ by gender.
#[must_use]
pub const fn recommended_intake(nutrient: Nutrient, gender: Gender, bracket: AgeBracket) -> f64 {
    use AgeBracket::{Adult, Young};
    use Gender::{Female, Male};

    match nutrient {
        Nutrient::Calories => match (gender, bracket) {
            (Male, Young) => 2700.0,
            (Male, Adult) => 2400.0,
            (Female, Young) => 2400.0,
            (Female, Adult) => 2100.0,
        },
        Nutrient::Protein => match (gender, bracket) {
            (Male, Young) => 75.0,
            (Male, Adult) => 65.0,
            (Female, Young) => 65.0,
            (Female, Adult) => 55.0,
        },
        Nutrient::Fat => match (gender, bracket) {
            (Male, Young) => 75.0,
            (Male, Adult) => 70.0,
            (Female, Young) => 65.0,
            (Female, Adult) => 60.0,
        },
        Nutrient::Calcium => match bracket {
            Young => 1000.0,
            Adult => 800.0,
        },
        Nutrient::Iron => match gender {
            Male => 12.0,
            Female => 15.0,
        },
        Nutrient::Zinc => match gender {
            Male => 15.0,
            Female => 12.0,
        },
        Nutrient::VitaminA => match gender {
            Male => 800.0,
            Female => 700.0,
        },
        Nutrient::VitaminB1 | Nutrient::VitaminB2 => match gender {
            Male => 1.4,
            Female => 1.2,
        },
        Nutrient::Magnesium | Nutrient::VitaminC | Nutrient::VitaminD | Nutrient::VitaminE => {
            100.0
        }
    }
}
