// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the CLI

use graphlite_meta::{LookupError, SchemaError};
use thiserror::Error;

/// Result type alias for CLI handlers
pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// The schema document could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Type inspection failed
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Query file parsing or output rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument combinations clap cannot express
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
