// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the classifier.
//!
//! Categories are tested strongest first and the first achievable one is the
//! deal classification, [Category::HighCard] when none is achievable.
//!
//! Categories don't all reduce their candidates the same way:
//!
//! - straight flush, four of a kind, full house and two pair need a candidate
//!   with every needed card reachable;
//! - flush, straight and three of a kind need a candidate with at least one
//!   reachable needed card, or one that needs no draw at all;
//! - pair only looks at the last deck card (see [Tally::pair]).
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use drawpoker_cards::CardSet;

use crate::{Deal, reach::Candidate, wanted::Tally};

/// A poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No category, the fallback.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five ranks in a row.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

/// How a category reduces its candidates to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Some candidate has all its needed cards reachable.
    AllNeeded,
    /// Some candidate has at least one reachable needed card.
    AnyDraw,
    /// The pair rule on the last deck card.
    LastDeckCard,
    /// Always achievable.
    Fallback,
}

impl Category {
    /// The tested categories, strongest first.
    pub const PRIORITY: [Category; 8] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
    ];

    /// The wanted sets for this category.
    ///
    /// Pair and high card have no wanted sets.
    pub fn wanted_sets(self, deal: &Deal) -> Vec<CardSet> {
        let tally = Tally::new(deal);
        match self {
            Category::StraightFlush => tally.straight_flush(),
            Category::FourOfAKind => tally.four_of_a_kind(),
            Category::FullHouse => tally.full_house(),
            Category::Flush => tally.flush(),
            Category::Straight => tally.straight(),
            Category::ThreeOfAKind => tally.three_of_a_kind(),
            Category::TwoPair => tally.two_pair(),
            Category::Pair | Category::HighCard => Vec::new(),
        }
    }

    /// Checks if the holder can reach this category.
    pub fn achievable(self, deal: &Deal) -> bool {
        match self.rule() {
            Rule::AllNeeded => self
                .wanted_sets(deal)
                .into_iter()
                .any(|wanted| Candidate::new(wanted, deal).is_reachable()),
            Rule::AnyDraw => self.wanted_sets(deal).into_iter().any(|wanted| {
                let candidate = Candidate::new(wanted, deal);
                candidate.discard_budget() == 0 || candidate.reachable_draws() > 0
            }),
            Rule::LastDeckCard => Tally::new(deal).pair(),
            Rule::Fallback => true,
        }
    }

    fn rule(self) -> Rule {
        match self {
            Category::StraightFlush
            | Category::FourOfAKind
            | Category::FullHouse
            | Category::TwoPair => Rule::AllNeeded,
            Category::Flush | Category::Straight | Category::ThreeOfAKind => Rule::AnyDraw,
            Category::Pair => Rule::LastDeckCard,
            Category::HighCard => Rule::Fallback,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "highest-card",
            Category::Pair => "one-pair",
            Category::TwoPair => "two-pairs",
            Category::ThreeOfAKind => "three-of-a-kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full-house",
            Category::FourOfAKind => "four-of-a-kind",
            Category::StraightFlush => "straight-flush",
        };

        write!(f, "{name}")
    }
}

/// Returns the best achievable category for a deal.
pub fn classify(deal: &Deal) -> Category {
    let category = Category::PRIORITY
        .into_iter()
        .find(|c| c.achievable(deal))
        .unwrap_or(Category::HighCard);

    debug!("{deal} classified as {category}");
    category
}

/// Classifies each deal in order.
pub fn classify_all(deals: &[Deal]) -> Vec<Category> {
    deals.iter().map(classify).collect()
}
