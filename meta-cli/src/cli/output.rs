// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Rendering of type annotations and schema listings

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use graphlite_meta::{SchemaCatalog, TypeAnnotations};

use super::commands::OutputFormat;
use super::error::CliResult;

pub struct AnnotationFormatter;

impl AnnotationFormatter {
    pub fn format(annotations: &TypeAnnotations, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&annotations.to_json()?)?),
            OutputFormat::Table => Ok(Self::format_table(annotations)),
        }
    }

    fn format_table(annotations: &TypeAnnotations) -> String {
        if annotations.is_empty() {
            return "No type information requested".to_string();
        }

        let mut rows: Vec<_> = annotations.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["property", "type", "pointingTo"]);

        for (property, annotation) in rows {
            table.add_row(vec![
                Cell::new(property),
                Cell::new(annotation.type_name.as_deref().unwrap_or("")),
                Cell::new(
                    annotation
                        .pointing_to
                        .as_ref()
                        .map(|targets| targets.join(", "))
                        .unwrap_or_default(),
                ),
            ]);
        }

        format!("{}\n({} properties)", table, annotations.len())
    }
}

pub struct SchemaFormatter;

impl SchemaFormatter {
    pub fn format(catalog: &SchemaCatalog) -> String {
        if catalog.is_empty() {
            return "Schema has no classes".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["class", "kind", "properties"]);

        for (kind, class) in catalog.classes() {
            let properties: Vec<String> = class
                .properties
                .iter()
                .map(|p| format!("{}: {}", p.name, p.data_type.join(" | ")))
                .collect();
            table.add_row(vec![
                Cell::new(&class.name),
                Cell::new(kind.to_string()),
                Cell::new(properties.join("\n")),
            ]);
        }

        format!("{}\n({} classes)", table, catalog.len())
    }
}
