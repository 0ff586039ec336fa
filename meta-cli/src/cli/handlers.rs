// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for GraphLite Meta

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::commands::{OutputFormat, PropertyArg};
use super::error::{CliError, CliResult};
use super::output::{AnnotationFormatter, SchemaFormatter};
use graphlite_meta::{MetaQuery, SchemaCatalog, TypeInspector};

/// Handle the version command
pub fn handle_version() -> CliResult<()> {
    println!(
        "{} {}",
        env!("CARGO_PKG_NAME").bold().green(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    Ok(())
}

/// Handle the inspect command (one-off type inspection)
pub fn handle_inspect(
    schema: PathBuf,
    query: Option<PathBuf>,
    class: Option<String>,
    properties: Vec<PropertyArg>,
    format: OutputFormat,
) -> CliResult<()> {
    let catalog = load_catalog(&schema)?;
    let query = build_query(query.as_deref(), class, properties)?;

    log::info!(
        "Inspecting {} properties of class '{}'",
        query.properties.len(),
        query.class_name
    );

    let inspector = TypeInspector::from_source(catalog);
    let annotations = inspector.process(&query)?;

    println!("{}", AnnotationFormatter::format(&annotations, format)?);
    Ok(())
}

/// Handle the classes command
pub fn handle_classes(schema: PathBuf) -> CliResult<()> {
    let catalog = load_catalog(&schema)?;
    println!("{}", SchemaFormatter::format(&catalog));
    Ok(())
}

fn load_catalog(path: &Path) -> CliResult<SchemaCatalog> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "Schema document not found at {:?}",
            path
        )));
    }
    Ok(SchemaCatalog::from_path(path)?)
}

/// Assemble the meta query from a query document or from --class/--property
fn build_query(
    query: Option<&Path>,
    class: Option<String>,
    properties: Vec<PropertyArg>,
) -> CliResult<MetaQuery> {
    if let Some(path) = query {
        log::debug!("Reading meta query from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&json)?);
    }

    let class = class.ok_or_else(|| {
        CliError::InvalidArguments("either --query or --class is required".to_string())
    })?;

    let mut meta_query = MetaQuery::new(class);
    meta_query.properties = properties.into_iter().map(|arg| arg.0).collect();
    Ok(meta_query)
}
