// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! GraphLite Meta command-line entry point

mod cli;

use clap::Parser;
use colored::Colorize;

use cli::{handle_classes, handle_inspect, handle_version, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.level_filter() {
        logger.filter_level(level);
    }
    logger.init();

    let result = match cli.command {
        Commands::Version => handle_version(),
        Commands::Inspect {
            schema,
            query,
            class,
            properties,
            format,
        } => handle_inspect(schema, query, class, properties, format),
        Commands::Classes { schema } => handle_classes(schema),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
