// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Draw poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("AH".parse(), Ok(ah));
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! a [CardSet] value type for set arithmetic on small groups of cards:
//!
//! ```
//! # use drawpoker_cards::{Card, CardSet};
//! let hand = ["QC", "QD", "KH"].map(|t| t.parse::<Card>().unwrap());
//! let queens = ["QC", "QD", "QH", "QS"].map(|t| t.parse::<Card>().unwrap());
//! let keep = CardSet::from_cards(&hand).intersection(CardSet::from_cards(&queens));
//! assert_eq!(keep.len(), 2);
//! ```
//!
//! and a [Pack] type for shuffling and dealing cards:
//!
//! ```
//! # use drawpoker_cards::Pack;
//! let mut pack = Pack::new_and_shuffled(&mut rand::rng());
//! let hand = (0..5).map(|_| pack.deal()).collect::<Vec<_>>();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(pack.count(), Pack::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Pack, ParseCardError, Rank, Suit};

mod set;
pub use set::CardSet;
