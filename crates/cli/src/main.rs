// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand classifier.
//!
//! Reads deals of ten card tokens, five hand cards followed by five deck
//! cards, and prints the best achievable category for each deal.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::{path::PathBuf, process::ExitCode};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Input file with the deals, reads stdin if missing or `-`.
    file: Option<PathBuf>,
    /// Classify this many random deals instead of reading input.
    #[clap(long, short, conflicts_with = "file")]
    random: Option<usize>,
    /// Seed for random deals.
    #[clap(long, requires = "random")]
    seed: Option<u64>,
    /// Number of classification tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = report::Config {
        input: match cli.random {
            Some(count) => report::Input::Random {
                count,
                seed: cli.seed,
            },
            None => report::Input::File(cli.file.filter(|p| p.as_os_str() != "-")),
        },
        tasks: cli.tasks as usize,
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: report::Config) -> Result<()> {
    let stdout = std::io::stdout();
    report::run(&config, &mut stdout.lock())
}
