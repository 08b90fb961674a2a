// ABOUTME: Configuration module for the sprout-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

/// Engine configuration (anthropometry bands, trend tolerances, advisor messages)
pub mod engine;

pub use engine::{
    AdvisorConfig, AdvisorMessages, AnthropometryConfig, BmiBands, ConfigError, EngineConfig,
    MeasurementBounds, TrendConfig,
};
