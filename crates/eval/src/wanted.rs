// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Wanted sets generators.
//!
//! For each category a generator lists the sets of deal cards whose presence
//! in the final hand would make that category. Generators only propose cards
//! that are in the deal, so needed cards are always in the deck.
use drawpoker_cards::{Card, CardSet, Rank, Suit};

use crate::Deal;

/// The rank cycle used for straights, the ace closes both ends.
pub const RANK_CYCLE: [Rank; 14] = {
    use Rank::*;
    [
        Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
    ]
};

/// Number of cards in a straight.
const RUN_LEN: usize = 5;

/// Returns the ten straight runs from A-5 up to T-A.
pub fn runs() -> impl Iterator<Item = &'static [Rank]> {
    let cycle: &'static [Rank] = &RANK_CYCLE;
    cycle.windows(RUN_LEN)
}

/// Deal cards grouped by rank and by suit.
#[derive(Debug, Clone)]
pub struct Tally<'a> {
    deal: &'a Deal,
    by_rank: [CardSet; 13],
    by_suit: [CardSet; 4],
}

impl<'a> Tally<'a> {
    /// Groups the deal cards.
    pub fn new(deal: &'a Deal) -> Self {
        let mut by_rank = [CardSet::EMPTY; 13];
        let mut by_suit = [CardSet::EMPTY; 4];

        for card in deal.cards() {
            by_rank[card.rank() as usize].insert(card);
            by_suit[card.suit() as usize].insert(card);
        }

        Self {
            deal,
            by_rank,
            by_suit,
        }
    }

    /// Deal cards with the given rank.
    pub fn rank(&self, rank: Rank) -> CardSet {
        self.by_rank[rank as usize]
    }

    /// Deal cards with the given suit.
    pub fn suit(&self, suit: Suit) -> CardSet {
        self.by_suit[suit as usize]
    }

    /// Ranks with at least `n` cards in the deal, deuce first.
    pub fn ranks_with(&self, n: usize) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().filter(move |&r| self.rank(r).len() >= n)
    }

    /// Suits with at least `n` cards in the deal.
    pub fn suits_with(&self, n: usize) -> impl Iterator<Item = Suit> + '_ {
        Suit::suits().filter(move |&s| self.suit(s).len() >= n)
    }

    /// Straight flush candidates: every run fully present in a suit that has
    /// at least five cards in the deal.
    pub fn straight_flush(&self) -> Vec<CardSet> {
        let mut sets = Vec::new();

        for suit in self.suits_with(RUN_LEN) {
            let suited = self.suit(suit);
            for run in runs() {
                let wanted = run.iter().map(|&r| Card::new(r, suit)).collect::<CardSet>();
                if wanted.is_subset(suited) {
                    sets.push(wanted);
                }
            }
        }

        sets
    }

    /// Four of a kind candidates: all four cards of each rank.
    pub fn four_of_a_kind(&self) -> Vec<CardSet> {
        self.ranks_with(4).map(|r| self.rank(r)).collect()
    }

    /// The full house candidate.
    ///
    /// Needs a rank with three cards, the candidate is then the union of all
    /// ranks with at least two cards as long as it has five or more cards.
    pub fn full_house(&self) -> Vec<CardSet> {
        if self.ranks_with(3).next().is_none() {
            return Vec::new();
        }

        let wanted = self
            .ranks_with(2)
            .fold(CardSet::EMPTY, |acc, r| acc.union(self.rank(r)));

        if wanted.len() >= 5 {
            vec![wanted]
        } else {
            Vec::new()
        }
    }

    /// Flush candidates: all cards of each suit with five or more cards.
    pub fn flush(&self) -> Vec<CardSet> {
        self.suits_with(5).map(|s| self.suit(s)).collect()
    }

    /// Straight candidates: one card per rank for every run whose ranks are
    /// all in the deal.
    ///
    /// Each rank takes a hand card when there is one, or else the first card of
    /// that rank in draw order.
    pub fn straight(&self) -> Vec<CardSet> {
        runs()
            .filter_map(|run| {
                run.iter()
                    .map(|&r| self.pick(r))
                    .collect::<Option<CardSet>>()
            })
            .collect()
    }

    /// Three of a kind candidates: all cards of each rank with three or more.
    pub fn three_of_a_kind(&self) -> Vec<CardSet> {
        self.ranks_with(3).map(|r| self.rank(r)).collect()
    }

    /// Two pair candidates: the union of every two ranks with a pair.
    pub fn two_pair(&self) -> Vec<CardSet> {
        let pairs = self.ranks_with(2).collect::<Vec<_>>();

        let mut sets = Vec::new();
        for (idx, &r1) in pairs.iter().enumerate() {
            for &r2 in &pairs[idx + 1..] {
                sets.push(self.rank(r1).union(self.rank(r2)));
            }
        }

        sets
    }

    /// The pair rule.
    ///
    /// Fails only when the deal has exactly one paired rank, with exactly two
    /// cards, and the last deck card has that rank. Any other deal passes.
    pub fn pair(&self) -> bool {
        let mut pairs = self.ranks_with(2);
        match (pairs.next(), pairs.next()) {
            (Some(rank), None) => {
                !(self.rank(rank).len() == 2 && self.deal.deck().last().rank() == rank)
            }
            _ => true,
        }
    }

    /// A card for the given rank, preferring the hand, then draw order.
    fn pick(&self, rank: Rank) -> Option<Card> {
        let hand = self.deal.hand().cards().iter();
        let deck = self.deal.deck().cards().iter();
        hand.chain(deck).copied().find(|c| c.rank() == rank)
    }
}
