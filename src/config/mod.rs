// ABOUTME: Configuration management for the Culinaire server
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Configuration management

/// Environment-based server configuration
pub mod environment;
