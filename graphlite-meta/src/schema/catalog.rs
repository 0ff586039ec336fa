// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! SchemaCatalog - in-memory `TypeSource` built from a schema document
//!
//! The document lists classes in two sections, `things` and `actions`:
//!
//! ```text
//! {
//!   "things": {
//!     "classes": [
//!       {
//!         "class": "City",
//!         "properties": [
//!           { "name": "population", "dataType": ["int"] },
//!           { "name": "inCountry", "dataType": ["Country", "WeaviateB/Country"] }
//!         ]
//!       }
//!     ]
//!   },
//!   "actions": { "classes": [] }
//! }
//! ```
//!
//! A `dataType` holding a single primitive token describes a primitive
//! property; otherwise every entry must name a class, either local
//! (`Country`) or on a network peer (`WeaviateB/Country`).

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::source::TypeSource;
use super::types::{PrimitiveType, PropertyKind};
use crate::ast::ClassName;
use crate::error::{LookupError, LookupResult, SchemaError, SchemaResult};

lazy_static! {
    static ref CLASS_NAME: Regex = Regex::new(r"^[A-Z][A-Za-z0-9_]*$").unwrap();
    static ref NETWORK_CLASS_NAME: Regex =
        Regex::new(r"^[A-Z][A-Za-z0-9]*/[A-Z][A-Za-z0-9_]*$").unwrap();
}

/// Section of the schema a class belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassKind {
    Thing,
    Action,
}

impl std::fmt::Display for ClassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ClassKind::Thing => "thing",
            ClassKind::Action => "action",
        };
        write!(f, "{}", name)
    }
}

/// A property as declared in the schema document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub name: String,
    pub data_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDefinition {
    pub fn new<I, S>(name: impl Into<String>, data_type: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            data_type: data_type.into_iter().map(Into::into).collect(),
            description: None,
        }
    }
}

/// A class as declared in the schema document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    #[serde(rename = "class")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct ClassSection {
    #[serde(default)]
    classes: Vec<ClassDefinition>,
}

#[derive(Debug, Default, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    things: ClassSection,
    #[serde(default)]
    actions: ClassSection,
}

#[derive(Debug)]
struct CatalogEntry {
    kind: ClassKind,
    definition: ClassDefinition,
    property_kinds: HashMap<String, PropertyKind>,
}

/// Read-only schema catalog answering property kind lookups
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    /// Map of class name to its entry
    classes: HashMap<String, CatalogEntry>,

    /// Class names in the order they were added
    order: Vec<String>,
}

impl SchemaCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a JSON schema document
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        let document: SchemaDocument = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for class in document.things.classes {
            catalog.add_class(ClassKind::Thing, class)?;
        }
        for class in document.actions.classes {
            catalog.add_class(ClassKind::Action, class)?;
        }

        log::debug!("Loaded schema catalog with {} classes", catalog.len());
        Ok(catalog)
    }

    /// Read and build a catalog from a JSON schema file
    pub fn from_path(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        log::debug!("Reading schema document from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate and add a class
    pub fn add_class(&mut self, kind: ClassKind, class: ClassDefinition) -> SchemaResult<()> {
        if !CLASS_NAME.is_match(&class.name) {
            return Err(SchemaError::InvalidClassName(class.name));
        }
        if self.classes.contains_key(&class.name) {
            return Err(SchemaError::DuplicateClass(class.name));
        }

        let mut property_kinds = HashMap::with_capacity(class.properties.len());
        for property in &class.properties {
            let kind = classify_data_type(&class.name, property)?;
            if property_kinds.insert(property.name.clone(), kind).is_some() {
                return Err(SchemaError::DuplicateProperty {
                    class: class.name.clone(),
                    property: property.name.clone(),
                });
            }
        }

        log::trace!(
            "Adding {} class '{}' with {} properties",
            kind,
            class.name,
            property_kinds.len()
        );

        self.order.push(class.name.clone());
        self.classes.insert(
            class.name.clone(),
            CatalogEntry {
                kind,
                definition: class,
                property_kinds,
            },
        );
        Ok(())
    }

    /// Class definitions in insertion order, with their kind
    pub fn classes(&self) -> impl Iterator<Item = (ClassKind, &ClassDefinition)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.classes.get(name))
            .map(|entry| (entry.kind, &entry.definition))
    }

    /// Get a class definition by name
    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name).map(|entry| &entry.definition)
    }

    /// Section a class was declared in
    pub fn kind_of(&self, name: &str) -> Option<ClassKind> {
        self.classes.get(name).map(|entry| entry.kind)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TypeSource for SchemaCatalog {
    fn resolve_property_kind(
        &self,
        class_name: &ClassName,
        property_name: &str,
    ) -> LookupResult<PropertyKind> {
        let entry = self
            .classes
            .get(class_name.as_str())
            .ok_or_else(|| LookupError::UnknownClass(class_name.to_string()))?;

        // Query surfaces capitalize reference properties (`InCountry`), the
        // schema stores them as declared (`inCountry`).
        let kind = entry
            .property_kinds
            .get(property_name)
            .or_else(|| entry.property_kinds.get(&untitle(property_name)));

        kind.cloned().ok_or_else(|| LookupError::UnknownProperty {
            class: class_name.to_string(),
            property: property_name.to_string(),
        })
    }
}

fn classify_data_type(class: &str, property: &PropertyDefinition) -> SchemaResult<PropertyKind> {
    let invalid = |reason: String| SchemaError::InvalidDataType {
        class: class.to_string(),
        property: property.name.clone(),
        reason,
    };

    let primitives: Vec<PrimitiveType> = property
        .data_type
        .iter()
        .filter_map(|entry| entry.parse::<PrimitiveType>().ok())
        .collect();

    match (property.data_type.len(), primitives.as_slice()) {
        (0, _) => Err(SchemaError::EmptyDataType {
            class: class.to_string(),
            property: property.name.clone(),
        }),
        (1, [primitive]) => Ok(PropertyKind::primitive(*primitive)),
        (_, []) => {
            if let Some(bad) = property
                .data_type
                .iter()
                .find(|entry| !CLASS_NAME.is_match(entry) && !NETWORK_CLASS_NAME.is_match(entry))
            {
                return Err(invalid(format!(
                    "'{}' is neither a primitive type nor a class reference",
                    bad
                )));
            }
            Ok(PropertyKind::Reference {
                targets: property.data_type.clone(),
            })
        }
        _ => Err(invalid(
            "a primitive type cannot be combined with other data types".to_string(),
        )),
    }
}

fn untitle(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_schema() -> &'static str {
        r#"{
            "things": {
                "classes": [
                    {
                        "class": "City",
                        "description": "A city",
                        "properties": [
                            {"name": "name", "dataType": ["string"]},
                            {"name": "population", "dataType": ["int"]},
                            {"name": "inCountry", "dataType": ["Country", "WeaviateB/Country"]}
                        ]
                    },
                    {"class": "Country", "properties": [{"name": "name", "dataType": ["string"]}]}
                ]
            },
            "actions": {
                "classes": [
                    {"class": "Flight", "properties": [{"name": "to", "dataType": ["City"]}]}
                ]
            }
        }"#
    }

    #[test]
    fn loads_both_sections_in_order() {
        let catalog = SchemaCatalog::from_json_str(city_schema()).unwrap();

        assert_eq!(catalog.len(), 3);
        let listed: Vec<(ClassKind, &str)> = catalog
            .classes()
            .map(|(kind, class)| (kind, class.name.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (ClassKind::Thing, "City"),
                (ClassKind::Thing, "Country"),
                (ClassKind::Action, "Flight")
            ]
        );
        assert_eq!(catalog.kind_of("Flight"), Some(ClassKind::Action));
        assert_eq!(
            catalog.class("City").and_then(|c| c.description.as_deref()),
            Some("A city")
        );
    }

    #[test]
    fn resolves_primitive_and_reference_kinds() {
        let catalog = SchemaCatalog::from_json_str(city_schema()).unwrap();
        let city = ClassName::from("City");

        assert_eq!(
            catalog.resolve_property_kind(&city, "population").unwrap(),
            PropertyKind::primitive(PrimitiveType::Int)
        );
        assert_eq!(
            catalog.resolve_property_kind(&city, "inCountry").unwrap(),
            PropertyKind::reference(["Country", "WeaviateB/Country"])
        );
    }

    #[test]
    fn capitalized_property_names_fall_back_to_declared_name() {
        let catalog = SchemaCatalog::from_json_str(city_schema()).unwrap();

        assert_eq!(
            catalog
                .resolve_property_kind(&ClassName::from("City"), "InCountry")
                .unwrap(),
            PropertyKind::reference(["Country", "WeaviateB/Country"])
        );
    }

    #[test]
    fn unknown_class_and_property_are_lookup_errors() {
        let catalog = SchemaCatalog::from_json_str(city_schema()).unwrap();

        assert_eq!(
            catalog.resolve_property_kind(&ClassName::from("Town"), "name"),
            Err(LookupError::UnknownClass("Town".to_string()))
        );
        assert_eq!(
            catalog.resolve_property_kind(&ClassName::from("City"), "mayor"),
            Err(LookupError::UnknownProperty {
                class: "City".to_string(),
                property: "mayor".to_string()
            })
        );
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = SchemaCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_invalid_class_names() {
        let mut catalog = SchemaCatalog::new();
        let err = catalog
            .add_class(ClassKind::Thing, ClassDefinition::new("city"))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidClassName(name) if name == "city"));
    }

    #[test]
    fn rejects_duplicate_classes_across_sections() {
        let mut catalog = SchemaCatalog::new();
        catalog
            .add_class(ClassKind::Thing, ClassDefinition::new("City"))
            .unwrap();
        let err = catalog
            .add_class(ClassKind::Action, ClassDefinition::new("City"))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateClass(name) if name == "City"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn rejects_duplicate_properties() {
        let class = ClassDefinition::new("City")
            .with_property(PropertyDefinition::new("name", ["string"]))
            .with_property(PropertyDefinition::new("name", ["text"]));

        let err = SchemaCatalog::new()
            .add_class(ClassKind::Thing, class)
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateProperty { property, .. } if property == "name"));
    }

    #[test]
    fn rejects_empty_data_types() {
        let class = ClassDefinition::new("City")
            .with_property(PropertyDefinition::new("name", Vec::<String>::new()));

        let err = SchemaCatalog::new()
            .add_class(ClassKind::Thing, class)
            .unwrap_err();
        assert!(matches!(err, SchemaError::EmptyDataType { .. }));
    }

    #[test]
    fn rejects_primitives_mixed_with_references() {
        let class = ClassDefinition::new("City")
            .with_property(PropertyDefinition::new("inCountry", ["Country", "int"]));

        let err = SchemaCatalog::new()
            .add_class(ClassKind::Thing, class)
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDataType { .. }));
    }

    #[test]
    fn rejects_malformed_references() {
        let class = ClassDefinition::new("City")
            .with_property(PropertyDefinition::new("inCountry", ["country"]));

        let err = SchemaCatalog::new()
            .add_class(ClassKind::Thing, class)
            .unwrap_err();
        match err {
            SchemaError::InvalidDataType { reason, .. } => assert!(reason.contains("'country'")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SchemaCatalog::from_json_str("{\"things\": [").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn untitle_lowercases_only_the_first_character() {
        assert_eq!(untitle("InCountry"), "inCountry");
        assert_eq!(untitle("inCountry"), "inCountry");
        assert_eq!(untitle(""), "");
    }
}
