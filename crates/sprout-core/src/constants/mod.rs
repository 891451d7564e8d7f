// ABOUTME: Domain constants organized by concern
// ABOUTME: Re-exports growth-rate and attribute-limit constant groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Nutrition Intelligence

//! Application-wide constants organized by domain

/// Spirit growth rates and experience values
pub mod growth;

/// Attribute domain maxima and seed values
pub mod limits;
