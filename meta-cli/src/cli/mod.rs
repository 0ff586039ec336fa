// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for GraphLite Meta
//!
//! Provides schema listing and one-off type inspection of meta queries
//! against a schema document.

pub mod commands;
pub mod error;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_classes, handle_inspect, handle_version};
