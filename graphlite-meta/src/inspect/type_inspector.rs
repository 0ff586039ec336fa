// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! TypeInspector - answers the `type` and `pointingTo` analyses of a meta query

use std::sync::Arc;

use super::annotation::{PropertyTypeAnnotation, TypeAnnotations, REFERENCE_TYPE};
use crate::ast::{MetaProperty, MetaQuery, StatisticalAnalysis};
use crate::error::LookupResult;
use crate::schema::{PropertyKind, TypeSource};

/// Type-related questions asked about one property
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TypeRequest {
    type_name: bool,
    pointing_to: bool,
}

impl TypeRequest {
    fn from_analyses(analyses: &[StatisticalAnalysis]) -> Self {
        let mut request = TypeRequest::default();
        for analysis in analyses {
            match analysis {
                StatisticalAnalysis::Type => request.type_name = true,
                StatisticalAnalysis::PointingTo => request.pointing_to = true,
                // Computed by the aggregation engine
                StatisticalAnalysis::Count
                | StatisticalAnalysis::Sum
                | StatisticalAnalysis::Mean
                | StatisticalAnalysis::Median
                | StatisticalAnalysis::Mode
                | StatisticalAnalysis::Maximum
                | StatisticalAnalysis::Minimum
                | StatisticalAnalysis::TotalTrue
                | StatisticalAnalysis::TotalFalse
                | StatisticalAnalysis::PercentageTrue
                | StatisticalAnalysis::PercentageFalse
                | StatisticalAnalysis::TopOccurrences => {}
            }
        }
        request
    }

    fn is_empty(self) -> bool {
        !self.type_name && !self.pointing_to
    }
}

/// Builds type annotations for the properties of a meta query.
///
/// The inspector only holds its type source; it is cheap to share and
/// `process` may be called concurrently.
#[derive(Clone)]
pub struct TypeInspector {
    type_source: Arc<dyn TypeSource>,
}

impl TypeInspector {
    /// Create an inspector resolving property kinds through `type_source`
    pub fn new(type_source: Arc<dyn TypeSource>) -> Self {
        Self { type_source }
    }

    /// Create an inspector that takes ownership of its type source
    pub fn from_source<S: TypeSource + 'static>(type_source: S) -> Self {
        Self::new(Arc::new(type_source))
    }

    /// Annotate every property of `query` that asked for `type` or `pointingTo`.
    ///
    /// Properties with only statistical analyses are skipped without touching
    /// the type source. The first lookup failure aborts the call and no
    /// partial annotations are returned.
    pub fn process(&self, query: &MetaQuery) -> LookupResult<TypeAnnotations> {
        let mut annotations = TypeAnnotations::new();

        for property in &query.properties {
            let request = TypeRequest::from_analyses(&property.statistical_analyses);
            if request.is_empty() {
                log::debug!(
                    "Skipping property '{}' of class '{}': no type analysis requested",
                    property.name,
                    query.class_name
                );
                continue;
            }

            let annotation = self.analyze_property(query, property, request)?;
            if !annotations.insert(property.name.clone(), annotation) {
                log::debug!(
                    "Property '{}' of class '{}' has no type information for the requested analyses",
                    property.name,
                    query.class_name
                );
            }
        }

        Ok(annotations)
    }

    fn analyze_property(
        &self,
        query: &MetaQuery,
        property: &MetaProperty,
        request: TypeRequest,
    ) -> LookupResult<PropertyTypeAnnotation> {
        let kind = self
            .type_source
            .resolve_property_kind(&query.class_name, &property.name)
            .map_err(|e| {
                log::debug!(
                    "Failed to resolve kind of '{}.{}': {}",
                    query.class_name,
                    property.name,
                    e
                );
                e
            })?;

        log::debug!(
            "Resolved '{}.{}' as a {} property",
            query.class_name,
            property.name,
            if kind.is_reference() { "reference" } else { "primitive" }
        );
        log::trace!("Kind of '{}.{}': {:?}", query.class_name, property.name, kind);

        let annotation = match kind {
            PropertyKind::Reference { targets } => analyze_reference(request, targets),
            PropertyKind::Primitive { token } => analyze_primitive(request, token),
        };
        Ok(annotation)
    }
}

fn analyze_reference(request: TypeRequest, targets: Vec<String>) -> PropertyTypeAnnotation {
    PropertyTypeAnnotation {
        type_name: request.type_name.then(|| REFERENCE_TYPE.to_string()),
        pointing_to: request.pointing_to.then_some(targets),
    }
}

// `pointingTo` has no meaning for primitives and is dropped silently.
fn analyze_primitive(request: TypeRequest, token: String) -> PropertyTypeAnnotation {
    PropertyTypeAnnotation {
        type_name: request.type_name.then_some(token),
        pointing_to: None,
    }
}
