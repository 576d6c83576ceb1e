// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Loads deals, classifies them and writes the report.
use anyhow::{Context, Result};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};

use drawpoker_eval::{Category, Deal, classify_all, par_classify_all, parse_deals};

/// Where deals come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Card tokens from a file, or from stdin if `None`.
    File(Option<PathBuf>),
    /// Randomly dealt deals.
    Random {
        /// Number of deals.
        count: usize,
        /// Seed for reproducible deals.
        seed: Option<u64>,
    },
}

/// Classifier config.
#[derive(Debug)]
pub struct Config {
    /// The deals input.
    pub input: Input,
    /// Number of classification tasks.
    pub tasks: usize,
}

/// Classifies the configured deals and writes one line per deal.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let deals = load(&config.input)?;

    let now = Instant::now();
    let categories = if config.tasks > 1 {
        par_classify_all(&deals, config.tasks)
    } else {
        classify_all(&deals)
    };

    info!(
        "Classified {} deals with {} tasks in {:.3}s",
        deals.len(),
        config.tasks,
        now.elapsed().as_secs_f64()
    );

    write_report(&deals, &categories, out)
}

/// Writes a line per deal with its hand, deck and best category.
pub fn write_report<W: Write>(deals: &[Deal], categories: &[Category], out: &mut W) -> Result<()> {
    for (deal, category) in deals.iter().zip(categories) {
        writeln!(out, "{deal} Best hand: {category}")?;
    }

    out.flush()?;
    Ok(())
}

fn load(input: &Input) -> Result<Vec<Deal>> {
    match input {
        Input::File(Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            parse_deals(&text).with_context(|| format!("Invalid input in {}", path.display()))
        }
        Input::File(None) => {
            let text = io::read_to_string(io::stdin()).context("Cannot read stdin")?;
            parse_deals(&text).context("Invalid input")
        }
        Input::Random { count, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };

            Ok((0..*count).map(|_| Deal::random(&mut rng)).collect())
        }
    }
}
