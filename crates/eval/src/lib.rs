// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand achievability evaluator.
//!
//! A deal is a five cards hand and a five cards deck in draw order. The holder
//! may discard some hand cards and draws the same number of replacements from
//! the front of the deck. For each category the evaluator builds the sets of
//! cards that would make that category and checks whether the needed cards
//! can be drawn, then reports the strongest achievable category:
//!
//! ```
//! # use drawpoker_eval::*;
//! let deal = "QC QD QS QH KH AH 2S 6S TH JH".parse::<Deal>()?;
//! assert_eq!(classify(&deal), Category::FourOfAKind);
//!
//! let deals = parse_deals("2H 2S 3H 3S 3C 2D 3D 6C 9C TH 2H 2S 3H 3S 3C 2D 9C 3D 6C TH")?;
//! let categories = classify_all(&deals);
//! assert_eq!(categories, [Category::FourOfAKind, Category::FullHouse]);
//! # Ok::<(), ParseError>(())
//! ```
//!
//! The **`parallel`** feature adds [par_classify_all] to classify many deals
//! from multiple threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{Category, classify, classify_all};

pub mod deal;
pub use deal::{Deal, DealError, Deck, Hand, ParseError, parse_deals};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_classify_all;

pub mod reach;
pub mod wanted;

// Reexport cards types.
pub use drawpoker_cards::{Card, CardSet, Pack, Rank, Suit};
