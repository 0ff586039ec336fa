// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Meta query parameters

use serde::{Deserialize, Serialize};

use super::analysis::StatisticalAnalysis;

/// Name of a schema class, e.g. `City`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One requested property and the analyses asked for on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaProperty {
    pub name: String,
    /// Unordered; duplicates are allowed and carry no extra meaning
    #[serde(default)]
    pub statistical_analyses: Vec<StatisticalAnalysis>,
}

impl MetaProperty {
    pub fn new(name: impl Into<String>, statistical_analyses: Vec<StatisticalAnalysis>) -> Self {
        Self {
            name: name.into(),
            statistical_analyses,
        }
    }
}

/// A meta query over the properties of one class.
///
/// Property names are expected to be unique within a query; this is the
/// caller's responsibility and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaQuery {
    pub class_name: ClassName,
    #[serde(default)]
    pub properties: Vec<MetaProperty>,
}

impl MetaQuery {
    /// Create a query without any property requests
    pub fn new(class_name: impl Into<ClassName>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property request
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        statistical_analyses: Vec<StatisticalAnalysis>,
    ) -> Self {
        self.properties.push(MetaProperty::new(name, statistical_analyses));
        self
    }
}
