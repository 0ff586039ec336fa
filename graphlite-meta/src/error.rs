// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for type inspection and schema loading

use thiserror::Error;

/// Result type alias for property kind lookups
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Result type alias for schema catalog construction
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// A type source could not resolve the kind of a property.
///
/// This is the only way [`TypeInspector::process`](crate::TypeInspector::process)
/// can fail. The first failure aborts the whole call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The class is not known to the type source
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// The class exists but has no such property
    #[error("Unknown property '{property}' on class '{class}'")]
    UnknownProperty { class: String, property: String },

    /// The type source itself failed (backend fault, unreachable store, ...)
    #[error("Type source error: {0}")]
    Source(String),
}

impl From<String> for LookupError {
    fn from(s: String) -> Self {
        LookupError::Source(s)
    }
}

impl From<&str> for LookupError {
    fn from(s: &str) -> Self {
        LookupError::Source(s.to_string())
    }
}

/// Errors raised while building a [`SchemaCatalog`](crate::SchemaCatalog)
#[derive(Error, Debug)]
pub enum SchemaError {
    /// I/O errors while reading a schema document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document is not valid JSON or has the wrong shape
    #[error("Schema parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Class names must start with an upper-case letter
    #[error("Invalid class name: '{0}'")]
    InvalidClassName(String),

    /// A class with this name is already defined
    #[error("Class '{0}' is already defined")]
    DuplicateClass(String),

    /// A property with this name is already defined on the class
    #[error("Property '{property}' is already defined on class '{class}'")]
    DuplicateProperty { class: String, property: String },

    /// A property declared no data type at all
    #[error("Property '{property}' on class '{class}' has an empty dataType")]
    EmptyDataType { class: String, property: String },

    /// A data type entry is neither a primitive token nor a valid class reference,
    /// or a primitive token was mixed with other entries
    #[error("Property '{property}' on class '{class}' has an invalid dataType: {reason}")]
    InvalidDataType {
        class: String,
        property: String,
        reason: String,
    },
}
