// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Type inspection for meta queries

pub mod annotation;
pub mod type_inspector;

pub use annotation::{PropertyTypeAnnotation, TypeAnnotations, REFERENCE_TYPE};
pub use type_inspector::TypeInspector;
