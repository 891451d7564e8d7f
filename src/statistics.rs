// ABOUTME: Daily and date-range consumption statistics over persisted meal records
// ABOUTME: Pure reducers - grouping, totals, daily averages, compliance, and per-nutrient analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! # Consumption Statistics
//!
//! Reduces slices of persisted meal records into reports: a single day's
//! log grouped by slot, or a date-range summary with daily averages and a
//! per-nutrient analysis against the user's reference standards. All
//! values are scaled by portion multipliers through the aggregator, so a
//! half portion counts as half.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprout_core::errors::{EngineError, EngineResult};
use sprout_core::models::{ConsumedItem, MealSlot, Nutrient, NutrientTotals, UserProfile};
use tracing::debug;

use crate::aggregator::aggregate;
use crate::grading::{grade, GradeResult};

/// One persisted meal-record row, as supplied by the record store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    /// Meal date
    pub date: NaiveDate,
    /// Meal slot
    pub slot: MealSlot,
    /// The consumed food and portion
    pub item: ConsumedItem,
}

/// One slot's consumption within a daily log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotSummary {
    /// The meal slot
    pub slot: MealSlot,
    /// Foods consumed in this slot
    pub items: Vec<ConsumedItem>,
    /// Summed nutrition for this slot
    pub totals: NutrientTotals,
}

/// A single day's consumption log
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyMealLog {
    /// The logged date
    pub date: NaiveDate,
    /// Per-slot breakdown, in day order; slots without records carry empty
    /// items and zero totals
    pub slots: Vec<SlotSummary>,
    /// Summed nutrition over the whole day
    pub totals: NutrientTotals,
    /// Per-nutrient analysis of the day's totals against the user's
    /// reference standards
    pub analysis: Vec<GradeResult>,
}

/// Consumption for one day within a date-range summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyIntake {
    /// The date
    pub date: NaiveDate,
    /// Number of records on this date
    pub meals_count: usize,
    /// Summed nutrition for this date
    pub totals: NutrientTotals,
}

/// Date-range consumption statistics
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeStatistics {
    /// Range start (inclusive)
    pub start: NaiveDate,
    /// Range end (inclusive)
    pub end: NaiveDate,
    /// Calendar days in the range
    pub days_count: u32,
    /// Days that have at least one record
    pub days_with_records: u32,
    /// Percent of range days with at least one record
    pub compliance_percent: f64,
    /// Per-day breakdown, dates with records only, ascending
    pub daily: Vec<DailyIntake>,
    /// Summed nutrition over the whole range
    pub totals: NutrientTotals,
    /// Totals divided by the calendar day count
    pub daily_averages: NutrientTotals,
    /// Per-nutrient analysis of the daily averages against the user's
    /// reference standards
    pub analysis: Vec<GradeResult>,
}

/// Build a single day's consumption log
///
/// Records outside `date` are ignored, so callers may pass a wider slice.
///
/// # Errors
///
/// Returns `EngineError::InvalidPortion` if any record carries a
/// non-positive portion multiplier.
pub fn daily_log(
    date: NaiveDate,
    records: &[MealRecord],
    profile: &UserProfile,
) -> EngineResult<DailyMealLog> {
    let mut slots = Vec::with_capacity(MealSlot::ALL.len());
    let mut totals = NutrientTotals::default();

    for slot in MealSlot::ALL {
        let items: Vec<ConsumedItem> = records
            .iter()
            .filter(|r| r.date == date && r.slot == slot)
            .map(|r| r.item.clone())
            .collect();
        let slot_totals = aggregate(&items)?;
        totals.merge_in_place(&slot_totals);
        slots.push(SlotSummary {
            slot,
            items,
            totals: slot_totals,
        });
    }

    let analysis = analyze(&totals, profile);

    Ok(DailyMealLog {
        date,
        slots,
        totals,
        analysis,
    })
}

/// Build date-range consumption statistics
///
/// Averages divide by the calendar day count, not the recorded day count:
/// a skipped day drags the average down, which is what compliance tracking
/// wants to see.
///
/// # Errors
///
/// - `EngineError::InvalidInput` if `start` is after `end`
/// - `EngineError::InvalidPortion` if any record carries a non-positive
///   portion multiplier
pub fn range_statistics(
    start: NaiveDate,
    end: NaiveDate,
    records: &[MealRecord],
    profile: &UserProfile,
) -> EngineResult<RangeStatistics> {
    if start > end {
        return Err(EngineError::invalid_input(
            "start date must not be after end date",
        ));
    }

    let mut by_date: BTreeMap<NaiveDate, Vec<&MealRecord>> = BTreeMap::new();
    for record in records {
        if record.date >= start && record.date <= end {
            by_date.entry(record.date).or_default().push(record);
        }
    }

    let mut daily = Vec::with_capacity(by_date.len());
    let mut totals = NutrientTotals::default();
    for (date, day_records) in &by_date {
        let items: Vec<ConsumedItem> = day_records.iter().map(|r| r.item.clone()).collect();
        let day_totals = aggregate(&items)?;
        totals.merge_in_place(&day_totals);
        daily.push(DailyIntake {
            date: *date,
            meals_count: day_records.len(),
            totals: day_totals,
        });
    }

    let days_count = (end - start).num_days() as u32 + 1;
    let days_with_records = daily.len() as u32;
    let compliance_percent = f64::from(days_with_records) / f64::from(days_count) * 100.0;
    let daily_averages = totals.scaled(f64::from(days_count));
    let analysis = analyze(&daily_averages, profile);

    debug!(
        %start,
        %end,
        days_with_records,
        "computed range statistics"
    );

    Ok(RangeStatistics {
        start,
        end,
        days_count,
        days_with_records,
        compliance_percent,
        daily,
        totals,
        daily_averages,
        analysis,
    })
}

/// Grade every tracked nutrient of a totals record against the user's
/// standards
fn analyze(totals: &NutrientTotals, profile: &UserProfile) -> Vec<GradeResult> {
    Nutrient::ALL
        .iter()
        .map(|nutrient| grade(totals.get(*nutrient), profile.gender, profile.age, *nutrient))
        .collect()
}
