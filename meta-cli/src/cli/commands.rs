// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for GraphLite Meta

use clap::{Parser, Subcommand, ValueEnum};
use graphlite_meta::{MetaProperty, StatisticalAnalysis};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (skipped and resolved properties)
    Debug,
    /// All messages including resolved property kinds
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// GraphLite Meta CLI - type inspection for meta queries
#[derive(Parser, Debug)]
#[command(name = "graphlite-meta")]
#[command(about = "GraphLite Meta - type inspection for aggregate meta queries")]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Level requested on the command line, if any. `--verbose` wins.
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            Some(log::LevelFilter::Debug)
        } else {
            self.log_level.map(LogLevel::to_level_filter)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show detailed version information
    Version,

    /// Resolve `type` and `pointingTo` analyses of a meta query
    Inspect {
        /// Schema document (JSON)
        #[arg(long)]
        schema: PathBuf,

        /// Meta query document (JSON); replaces --class and --property
        #[arg(long, conflicts_with_all = ["class", "properties"])]
        query: Option<PathBuf>,

        /// Target class of the meta query
        #[arg(short, long)]
        class: Option<String>,

        /// Property request, e.g. `inCountry=pointingTo,count` (repeatable)
        #[arg(short = 'p', long = "property", value_name = "NAME=ANALYSES")]
        properties: Vec<PropertyArg>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List the classes of a schema document
    Classes {
        /// Schema document (JSON)
        #[arg(long)]
        schema: PathBuf,
    },
}

/// A `NAME=ANALYSIS[,ANALYSIS...]` property request from the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyArg(pub MetaProperty);

impl std::str::FromStr for PropertyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, analyses) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=ANALYSES, got: {}", s))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Missing property name in: {}", s));
        }

        let statistical_analyses = analyses
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<StatisticalAnalysis>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PropertyArg(MetaProperty::new(name, statistical_analyses)))
    }
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_property_argument() {
        let arg: PropertyArg = "inCountry=pointingTo, count".parse().unwrap();
        assert_eq!(
            arg.0,
            MetaProperty::new(
                "inCountry",
                vec![StatisticalAnalysis::PointingTo, StatisticalAnalysis::Count]
            )
        );
    }

    #[test]
    fn property_argument_may_request_nothing() {
        let arg: PropertyArg = "meta=".parse().unwrap();
        assert!(arg.0.statistical_analyses.is_empty());
    }

    #[test]
    fn rejects_malformed_property_arguments() {
        assert!("population".parse::<PropertyArg>().is_err());
        assert!("=type".parse::<PropertyArg>().is_err());
        assert!("population=average".parse::<PropertyArg>().is_err());
    }

    #[test]
    fn parses_inspect_command() {
        let cli = Cli::try_parse_from([
            "graphlite-meta",
            "inspect",
            "--schema",
            "schema.json",
            "--class",
            "City",
            "-p",
            "InCountry=pointingTo",
            "-p",
            "population=type,mean",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Inspect {
                class,
                properties,
                format,
                query,
                ..
            } => {
                assert_eq!(class.as_deref(), Some("City"));
                assert_eq!(properties.len(), 2);
                assert_eq!(format, OutputFormat::Json);
                assert!(query.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn query_file_conflicts_with_class() {
        let result = Cli::try_parse_from([
            "graphlite-meta",
            "inspect",
            "--schema",
            "schema.json",
            "--query",
            "query.json",
            "--class",
            "City",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_overrides_log_level() {
        let cli =
            Cli::try_parse_from(["graphlite-meta", "-v", "-l", "error", "version"]).unwrap();
        assert_eq!(cli.level_filter(), Some(log::LevelFilter::Debug));

        let cli = Cli::try_parse_from(["graphlite-meta", "version"]).unwrap();
        assert_eq!(cli.level_filter(), None);
    }
}
