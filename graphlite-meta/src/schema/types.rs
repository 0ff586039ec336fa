// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Property kinds and primitive data types

use serde::{Deserialize, Serialize};

/// Primitive data types a schema property can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveType {
    String,
    Text,
    Int,
    Number,
    Boolean,
    Date,
    GeoCoordinates,
    PhoneNumber,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::String,
        PrimitiveType::Text,
        PrimitiveType::Int,
        PrimitiveType::Number,
        PrimitiveType::Boolean,
        PrimitiveType::Date,
        PrimitiveType::GeoCoordinates,
        PrimitiveType::PhoneNumber,
    ];

    /// Token reported as the `type` of a primitive property
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Text => "text",
            PrimitiveType::Int => "int",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Date => "date",
            PrimitiveType::GeoCoordinates => "geoCoordinates",
            PrimitiveType::PhoneNumber => "phoneNumber",
        }
    }
}

impl std::str::FromStr for PrimitiveType {
    type Err = String;

    /// Tokens are matched exactly: `Int` is a class name, `int` is a primitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveType::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown primitive type: {}", s))
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a type source knows about a property: it is exactly one of these
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertyKind {
    /// Holds values of a primitive type, identified by its token (e.g. `int`)
    Primitive { token: String },
    /// Points to instances of the listed classes, in the order the source reports them
    Reference { targets: Vec<String> },
}

impl PropertyKind {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        PropertyKind::Primitive {
            token: primitive.as_str().to_string(),
        }
    }

    pub fn reference<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyKind::Reference {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, PropertyKind::Reference { .. })
    }
}
