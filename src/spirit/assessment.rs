// ABOUTME: Pure assessment report over a spirit's current state
// ABOUTME: Experience progress, BMI reading, and strength/intelligence bands with advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Spirit Assessment
//!
//! Derives a status report from a spirit state: how far into the current
//! level it is, its BMI, and banded evaluations of strength and
//! intelligence with one advice line each.

use serde::Serialize;
use sprout_core::models::SpiritState;
use sprout_core::EngineConfig;

/// Progress through the current level
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExperienceProgress {
    /// Experience threshold to reach the next level
    pub next_level_experience: u32,
    /// Percent of the way through the current level
    pub percent: f64,
}

/// Body-mass-index reading for the spirit
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BmiReading {
    /// BMI value, weight / height(m)^2
    pub value: f64,
    /// Band label: underweight, normal, overweight, obese
    pub status: &'static str,
}

/// Banded evaluation of one attribute
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttributeBand {
    /// Band label
    pub level: &'static str,
    /// One advice line for this band
    pub advice: &'static str,
}

/// Complete assessment of a spirit's physical and mental development
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpiritAssessment {
    /// Progress through the current level
    pub progress: ExperienceProgress,
    /// BMI reading
    pub bmi: BmiReading,
    /// Strength band
    pub strength: AttributeBand,
    /// Intelligence band
    pub intelligence: AttributeBand,
}

/// Assess a spirit's current development
#[must_use]
pub fn assess(state: &SpiritState, config: &EngineConfig) -> SpiritAssessment {
    let next_level_experience = config.level_threshold(state.level);
    let percent = f64::from(state.experience) / f64::from(next_level_experience) * 100.0;

    SpiritAssessment {
        progress: ExperienceProgress {
            next_level_experience,
            percent,
        },
        bmi: bmi_reading(state.height, state.weight),
        strength: strength_band(state.strength),
        intelligence: intelligence_band(state.intelligence),
    }
}

fn bmi_reading(height_cm: f64, weight_kg: f64) -> BmiReading {
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    let status = if value < 18.5 {
        "underweight"
    } else if value < 24.0 {
        "normal"
    } else if value < 28.0 {
        "overweight"
    } else {
        "obese"
    };
    BmiReading { value, status }
}

fn strength_band(strength: f64) -> AttributeBand {
    if strength < 30.0 {
        AttributeBand {
            level: "weak",
            advice: "needs more protein and calcium",
        }
    } else if strength < 60.0 {
        AttributeBand {
            level: "average",
            advice: "a little more nutrition would help",
        }
    } else if strength < 90.0 {
        AttributeBand {
            level: "strong",
            advice: "keep up the good eating habits",
        }
    } else {
        AttributeBand {
            level: "mighty",
            advice: "nutrition intake is excellently balanced",
        }
    }
}

fn intelligence_band(intelligence: f64) -> AttributeBand {
    if intelligence < 30.0 {
        AttributeBand {
            level: "slow",
            advice: "needs more B vitamins and brain foods",
        }
    } else if intelligence < 60.0 {
        AttributeBand {
            level: "average",
            advice: "some extra brain foods would help",
        }
    } else if intelligence < 90.0 {
        AttributeBand {
            level: "bright",
            advice: "intellect is developing well",
        }
    } else {
        AttributeBand {
            level: "genius",
            advice: "nutrition has fueled the mind well",
        }
    }
}
