// ABOUTME: Reference constants for the Sprout platform
// ABOUTME: Re-exports growth and nutrition reference data modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Reference constants shared across the platform.

pub mod growth;
