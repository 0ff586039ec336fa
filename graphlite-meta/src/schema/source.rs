// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! The `TypeSource` capability

use std::sync::Arc;

use super::types::PropertyKind;
use crate::ast::ClassName;
use crate::error::LookupResult;

/// Resolves the kind of a property of a class.
///
/// The type inspector treats the answer as authoritative and neither caches
/// nor validates it. Implementations must tolerate concurrent reads.
pub trait TypeSource: Send + Sync {
    fn resolve_property_kind(
        &self,
        class_name: &ClassName,
        property_name: &str,
    ) -> LookupResult<PropertyKind>;
}

impl<T: TypeSource + ?Sized> TypeSource for Arc<T> {
    fn resolve_property_kind(
        &self,
        class_name: &ClassName,
        property_name: &str,
    ) -> LookupResult<PropertyKind> {
        (**self).resolve_property_kind(class_name, property_name)
    }
}

impl<T: TypeSource + ?Sized> TypeSource for &T {
    fn resolve_property_kind(
        &self,
        class_name: &ClassName,
        property_name: &str,
    ) -> LookupResult<PropertyKind> {
        (**self).resolve_property_kind(class_name, property_name)
    }
}
