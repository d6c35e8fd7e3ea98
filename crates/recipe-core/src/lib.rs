// ABOUTME: Core types and constants for the recipe service
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! service. Nothing here touches the network or the store, so it changes
//! rarely and compiles independently of the server crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `RecipeError`
//! - **models**: `Recipe`, `Ingredient`, and the partial-edit `RecipeUpdate`
//! - **constants**: Service identity and configuration defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Recipe data models and their validation rules
pub mod models;

/// Service identity and configuration defaults
pub mod constants;
