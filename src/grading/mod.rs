// ABOUTME: Reference grading - compares observed daily intake to recommended standards
// ABOUTME: Seven-tier V-shaped severity curve around 100% with actionable suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Reference Grader
//!
//! Looks up the age/gender-specific recommended daily value for a nutrient,
//! computes the consumption ratio, and classifies it into a seven-tier grade
//! with a textual suggestion. Tier severity forms a symmetric "V" around
//! 100%: both strong deficiency and strong excess bottom out at level 1,
//! with level 4 the single peak at the recommended value.

pub mod standards;
pub mod suggestions;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sprout_core::errors::EngineResult;
use sprout_core::models::{Gender, Nutrient};
use tracing::trace;

pub use standards::{recommended_intake, AgeBracket};
pub use suggestions::example_foods;

/// The seven-tier grade classification of observed intake versus the
/// recommended standard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GradeTier {
    /// Below 60% of the recommended value
    SevereDeficiency,
    /// 60% up to 80%
    Deficiency,
    /// 80% up to 95%
    SlightlyLow,
    /// 95% through 105%, the single peak
    Normal,
    /// Above 105% through 120%
    Sufficient,
    /// Above 120% through 140%
    Excess,
    /// Above 140%
    SevereExcess,
}

impl GradeTier {
    /// Classify a consumption percentage into its tier
    ///
    /// Boundaries are half-open on the lower edge and inclusive on the
    /// upper edge: exactly 60.0 is `Deficiency`, exactly 105.0 is `Normal`.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 60.0 {
            Self::SevereDeficiency
        } else if percentage < 80.0 {
            Self::Deficiency
        } else if percentage < 95.0 {
            Self::SlightlyLow
        } else if percentage <= 105.0 {
            Self::Normal
        } else if percentage <= 120.0 {
            Self::Sufficient
        } else if percentage <= 140.0 {
            Self::Excess
        } else {
            Self::SevereExcess
        }
    }

    /// Tier severity level, 1 (worst) through 4 (ideal)
    ///
    /// Symmetric around the peak: deficiency and excess tiers of equal
    /// severity share a level.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::SevereDeficiency | Self::SevereExcess => 1,
            Self::Deficiency | Self::Excess => 2,
            Self::SlightlyLow | Self::Sufficient => 3,
            Self::Normal => 4,
        }
    }

    /// Human-readable tier label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SevereDeficiency => "severe deficiency",
            Self::Deficiency => "deficiency",
            Self::SlightlyLow => "slightly low",
            Self::Normal => "normal",
            Self::Sufficient => "sufficient",
            Self::Excess => "excess",
            Self::SevereExcess => "severe excess",
        }
    }

    /// Indicator color for report rendering
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::SevereDeficiency | Self::SevereExcess => "red",
            Self::Deficiency | Self::Excess => "orange",
            Self::SlightlyLow => "yellow",
            Self::Normal => "green",
            Self::Sufficient => "blue",
        }
    }

    /// One-line assessment of this tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SevereDeficiency => {
                "intake far below the recommended value, improve immediately"
            }
            Self::Deficiency => "intake below the recommended value, consider increasing",
            Self::SlightlyLow => {
                "intake close to the recommended value, a small increase would help"
            }
            Self::Normal => "intake matches the recommended value, keep it up",
            Self::Sufficient => {
                "intake slightly above the recommended value, a small reduction would help"
            }
            Self::Excess => "intake clearly above the recommended value, reduce it",
            Self::SevereExcess => "intake far above the recommended value, cut back immediately",
        }
    }
}

/// Complete grading output for one nutrient
///
/// Serialize-only: grades are computed fresh from totals, never read back.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradeResult {
    /// Graded nutrient
    pub nutrient: Nutrient,
    /// Observed daily-average intake
    pub observed: f64,
    /// Recommended daily value for the user's gender and age bracket
    pub standard: f64,
    /// Consumption ratio, observed / standard x 100
    pub percentage: f64,
    /// Tier classification
    pub tier: GradeTier,
    /// Tier severity level, 1-4
    pub level: u8,
    /// Indicator color for report rendering
    pub color: &'static str,
    /// One-line assessment
    pub description: &'static str,
    /// Actionable suggestion text
    pub suggestion: String,
}

/// Grade an observed daily-average intake against the reference standard
///
/// The nutrient set is closed, so standard lookup cannot fail; grading a
/// nutrient name arriving as a string goes through [`grade_named`], which
/// rejects names outside the set.
#[must_use]
pub fn grade(observed: f64, gender: Gender, age: u8, nutrient: Nutrient) -> GradeResult {
    let standard = recommended_intake(nutrient, gender, AgeBracket::from_age(age));
    let percentage = observed / standard * 100.0;
    let tier = GradeTier::from_percentage(percentage);
    let suggestion = suggestions::compose(nutrient, tier, percentage);

    trace!(
        nutrient = %nutrient,
        percentage,
        tier = tier.label(),
        "graded nutrient intake"
    );

    GradeResult {
        nutrient,
        observed,
        standard,
        percentage,
        tier,
        level: tier.level(),
        color: tier.color(),
        description: tier.description(),
        suggestion,
    }
}

/// Grade a nutrient identified by its serialized name
///
/// # Errors
///
/// Returns `EngineError::UnknownNutrient` if the name is not in the fixed
/// nutrient catalog.
pub fn grade_named(
    observed: f64,
    gender: Gender,
    age: u8,
    nutrient_name: &str,
) -> EngineResult<GradeResult> {
    let nutrient = Nutrient::from_str(nutrient_name)?;
    Ok(grade(observed, gender, age, nutrient))
}
