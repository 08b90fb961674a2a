// ABOUTME: Configuration error types for engine config validation
// ABOUTME: Defines error variants for invalid ranges and unparseable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Configuration error types for engine config validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value ordering constraint violated (e.g. band cut points not increasing)
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse a configuration override value
    #[error("parse error: {0}")]
    Parse(String),
}
