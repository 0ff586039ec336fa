// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema-side view of properties
//!
//! This module provides:
//! - Property kinds (primitive or reference) and the primitive type tokens
//! - The `TypeSource` capability consulted by the type inspector
//! - An in-memory schema catalog implementing `TypeSource`

pub mod catalog;
pub mod source;
pub mod types;

pub use catalog::{ClassDefinition, ClassKind, PropertyDefinition, SchemaCatalog};
pub use source::TypeSource;
pub use types::{PrimitiveType, PropertyKind};
