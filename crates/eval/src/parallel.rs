// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Parallel classification.
use std::thread;

use crate::{Category, Deal, classify};

/// Classifies deals from `num_tasks` scoped threads.
///
/// Deals are split in contiguous chunks, one per task, and the results are
/// returned in input order.
///
/// Panics if `num_tasks` is zero.
pub fn par_classify_all(deals: &[Deal], num_tasks: usize) -> Vec<Category> {
    assert!(num_tasks > 0);

    let mut out = vec![Category::HighCard; deals.len()];
    if deals.is_empty() {
        return out;
    }

    let deals_per_task = deals.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let chunks = deals
            .chunks(deals_per_task)
            .zip(out.chunks_mut(deals_per_task));
        for (deals, out) in chunks {
            s.spawn(move || {
                for (deal, category) in deals.iter().zip(out) {
                    *category = classify(deal);
                }
            });
        }
    });

    out
}
