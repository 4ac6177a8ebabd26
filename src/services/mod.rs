// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides protocol-agnostic services reusable across entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Domain service layer
//!
//! Business logic extracted from route handlers so that the matching and
//! persistence rules stay identical regardless of the entry point.

/// Dinner matching, background persistence, and saved-dinner listing
pub mod dinners;
