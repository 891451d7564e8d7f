// ABOUTME: User profile data consumed by grading and statistics
// ABOUTME: Lookup result from the user-profile collaborator, read-only inside the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::spirit::Gender;

/// User profile as provided by the user-profile collaborator
///
/// The engine reads gender and age to resolve reference standards; the rest
/// is carried through into statistics reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Verified user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Gender, used to resolve reference standards
    pub gender: Gender,
    /// Age in years, used to resolve the age bracket
    pub age: u8,
    /// Height in cm
    pub height_cm: f64,
    /// Weight in kg
    pub weight_kg: f64,
}
