// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Type annotations produced by the type inspector

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// `type` answer for every reference property, whatever it points to
pub const REFERENCE_TYPE: &str = "cref";

/// Type information for one property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypeAnnotation {
    /// Primitive token, or [`REFERENCE_TYPE`] for reference properties
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Classes a reference property may point to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointing_to: Option<Vec<String>>,
}

impl PropertyTypeAnnotation {
    pub fn is_empty(&self) -> bool {
        self.type_name.is_none() && self.pointing_to.is_none()
    }
}

/// Property name to type annotation.
///
/// Every entry carries at least one key; a property without type information
/// is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeAnnotations {
    entries: HashMap<String, PropertyTypeAnnotation>,
}

impl TypeAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an annotation unless it is empty. Returns whether it was stored.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        annotation: PropertyTypeAnnotation,
    ) -> bool {
        if annotation.is_empty() {
            return false;
        }
        self.entries.insert(property.into(), annotation);
        true
    }

    pub fn get(&self, property: &str) -> Option<&PropertyTypeAnnotation> {
        self.entries.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyTypeAnnotation)> {
        self.entries.iter()
    }

    /// Render the nested JSON object handed to the response serializer
    pub fn to_json(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }
}

impl FromIterator<(String, PropertyTypeAnnotation)> for TypeAnnotations {
    /// Empty annotations are dropped, as with [`TypeAnnotations::insert`]
    fn from_iter<I: IntoIterator<Item = (String, PropertyTypeAnnotation)>>(iter: I) -> Self {
        let mut annotations = TypeAnnotations::new();
        for (property, annotation) in iter {
            annotations.insert(property, annotation);
        }
        annotations
    }
}

impl<'de> Deserialize<'de> for TypeAnnotations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = HashMap::<String, PropertyTypeAnnotation>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl IntoIterator for TypeAnnotations {
    type Item = (String, PropertyTypeAnnotation);
    type IntoIter = std::collections::hash_map::IntoIter<String, PropertyTypeAnnotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
