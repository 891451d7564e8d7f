// ABOUTME: Meal slot classification from timestamps using fixed hour ranges
// ABOUTME: Thin wrapper over MealSlot::from_hour, kept as the engine's public contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Meal Classifier
//!
//! Maps a timestamp to one of the three meal slots using fixed hour ranges:
//! [5,10) breakfast, [10,15) lunch, [15,23) dinner. The late-night window
//! [23,5) counts as the next day's breakfast.

use chrono::NaiveDateTime;
use sprout_core::models::MealSlot;

/// Classify a timestamp into a meal slot
///
/// Pure and total over all valid timestamps; no failure modes.
#[must_use]
pub fn classify(timestamp: NaiveDateTime) -> MealSlot {
    MealSlot::from_timestamp(timestamp)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 18)
            .and_then(|d| {
                NaiveTime::from_hms_opt(hour, 30, 0).map(|t| d.and_time(t))
            })
            .unwrap()
    }

    #[test]
    fn slot_boundaries_follow_hour_ranges() {
        assert_eq!(classify(at(5)), MealSlot::Breakfast);
        assert_eq!(classify(at(9)), MealSlot::Breakfast);
        assert_eq!(classify(at(10)), MealSlot::Lunch);
        assert_eq!(classify(at(14)), MealSlot::Lunch);
        assert_eq!(classify(at(15)), MealSlot::Dinner);
        assert_eq!(classify(at(22)), MealSlot::Dinner);
    }

    #[test]
    fn late_night_belongs_to_next_breakfast() {
        assert_eq!(classify(at(23)), MealSlot::Breakfast);
        assert_eq!(classify(at(0)), MealSlot::Breakfast);
        assert_eq!(classify(at(4)), MealSlot::Breakfast);
    }
}
