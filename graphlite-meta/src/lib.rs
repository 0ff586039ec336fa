// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! GraphLite Meta - type inspection for aggregate meta queries
//!
//! When a meta query asks for statistics over the properties of a class, some
//! of the requested analyses are not statistics at all but questions about the
//! property's type: `type` ("what is it?") and `pointingTo` ("which classes
//! can it reference?"). This crate answers those questions and leaves the
//! numeric analyses to the aggregation engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   MetaQuery (class + property requests) │
//! └─────────────────────────────────────────┘
//!                  │
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  TypeInspector                          │
//! │  - skips type-irrelevant requests       │
//! │  - resolves kinds via TypeSource        │
//! └─────────────────────────────────────────┘
//!                  │
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  TypeSource (SchemaCatalog or custom)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - Meta query model and analysis kinds
//! - [`schema`] - Property kinds, the `TypeSource` capability and the in-memory catalog
//! - [`inspect`] - The type inspector and its annotation output
//! - [`error`] - Error types

pub mod ast;
pub mod error;
pub mod inspect;
pub mod schema;

// Re-export main types for convenience
pub use ast::{ClassName, MetaProperty, MetaQuery, StatisticalAnalysis};
pub use error::{LookupError, LookupResult, SchemaError, SchemaResult};
pub use inspect::{PropertyTypeAnnotation, TypeAnnotations, TypeInspector, REFERENCE_TYPE};
pub use schema::{
    ClassDefinition, ClassKind, PrimitiveType, PropertyDefinition, PropertyKind, SchemaCatalog,
    TypeSource,
};
