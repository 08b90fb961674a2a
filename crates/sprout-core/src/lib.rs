// ABOUTME: Core types and constants for the Sprout childcare nutrition platform
// ABOUTME: Domain models, error taxonomy, and growth reference data shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! # Sprout Core
//!
//! Foundation crate for the Sprout nutrition and menu analytics engine.
//! Holds the plain domain records the engine consumes (children, assessments,
//! menus, dishes, ingredients), the error taxonomy for rejected inputs, and
//! the growth reference constants that seed the engine configuration.
//!
//! Persistence, transport, and authentication live elsewhere: everything in
//! this crate is plain data with serde derives, fetched and stored by the
//! calling layer.

pub mod constants;
pub mod errors;
pub mod models;

pub use errors::{EngineError, EngineResult};
