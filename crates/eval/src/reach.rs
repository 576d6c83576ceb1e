// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Draw-order reachability of a wanted set.
//!
//! The holder discards every hand card outside the wanted set and draws the
//! same number of cards from the front of the deck. A wanted card missing from
//! the hand can only be obtained if its deck position is below the number of
//! discarded cards.
use log::trace;

use drawpoker_cards::{Card, CardSet};

use crate::Deal;

/// A wanted set split into the cards to keep and the cards to draw.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    deal: &'a Deal,
    wanted: CardSet,
    keep: CardSet,
    need: CardSet,
    budget: usize,
}

impl<'a> Candidate<'a> {
    /// Splits a wanted set against the deal hand.
    pub fn new(wanted: CardSet, deal: &'a Deal) -> Self {
        let hand = deal.hand().set();
        let keep = wanted.intersection(hand);
        let need = wanted.difference(hand);
        let budget = hand.difference(wanted).len();

        Self {
            deal,
            wanted,
            keep,
            need,
            budget,
        }
    }

    /// Wanted cards already in the hand.
    pub fn keep(&self) -> CardSet {
        self.keep
    }

    /// Wanted cards that must come from the deck.
    pub fn need(&self) -> CardSet {
        self.need
    }

    /// Number of hand cards outside the wanted set, that is the number of
    /// cards discarded and then drawn.
    pub fn discard_budget(&self) -> usize {
        self.budget
    }

    /// Checks if every needed card can be drawn.
    ///
    /// With a zero budget nothing is drawn and the candidate is reachable as is.
    pub fn is_reachable(&self) -> bool {
        let reachable = self.budget == 0 || self.need.iter().all(|card| self.can_draw(card));

        trace!(
            "Candidate {:?} keep={} need={} budget={} reachable={reachable}",
            self.wanted,
            self.keep.len(),
            self.need.len(),
            self.budget
        );

        reachable
    }

    /// Number of needed cards that can be drawn.
    ///
    /// With a zero budget no needed card is discounted.
    pub fn reachable_draws(&self) -> usize {
        let draws = self
            .need
            .iter()
            .filter(|&card| self.budget == 0 || self.can_draw(card))
            .count();

        trace!(
            "Candidate {:?} need={} budget={} draws={draws}",
            self.wanted,
            self.need.len(),
            self.budget
        );

        draws
    }

    /// Checks if the card sits in the deck within the discard budget.
    fn can_draw(&self, card: Card) -> bool {
        self.deal
            .deck()
            .position(card)
            .is_some_and(|pos| pos < self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(s: &str) -> Deal {
        s.parse().unwrap()
    }

    fn set(s: &str) -> CardSet {
        s.split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect()
    }

    #[test]
    fn keep_need_budget() {
        let deal = deal("TH JH QC QD QS QH KH AH 2S 6S");
        let c = Candidate::new(set("TH JH QH KH AH"), &deal);

        assert_eq!(c.keep(), set("TH JH"));
        assert_eq!(c.need(), set("QH KH AH"));
        assert_eq!(c.discard_budget(), 3);
        assert!(c.is_reachable());
        assert_eq!(c.reachable_draws(), 3);
    }

    #[test]
    fn need_beyond_budget() {
        // Discarding 2H 2S draws 2D 3D, the 3D at position 2 is out of reach.
        let deal = deal("2H 2S 3H 3S 3C 2D 9C 3D 6C TH");
        let c = Candidate::new(set("3H 3S 3C 3D"), &deal);

        assert_eq!(c.discard_budget(), 2);
        assert!(!c.is_reachable());
        assert_eq!(c.reachable_draws(), 0);
    }

    #[test]
    fn partial_draws() {
        let deal = deal("2H AD 5H AC 7H AH 6H 9H 4H 3C");
        let hearts = set("2H 5H 7H AH 6H 9H 4H");
        let c = Candidate::new(hearts, &deal);

        // AD and AC are discarded, AH and 6H are drawn, 9H and 4H are not.
        assert_eq!(c.discard_budget(), 2);
        assert!(!c.is_reachable());
        assert_eq!(c.reachable_draws(), 2);
    }

    #[test]
    fn zero_budget_is_reachable() {
        // The wanted set covers the whole hand, nothing is drawn.
        let deal = deal("2H 2S 3H 3S 3C 2D 9C 3D 6C TH");
        let c = Candidate::new(set("2H 2S 2D 3H 3S 3C 3D"), &deal);

        assert_eq!(c.discard_budget(), 0);
        assert_eq!(c.need(), set("2D 3D"));
        assert!(c.is_reachable());
        assert_eq!(c.reachable_draws(), 2);
    }

    #[test]
    fn need_outside_deal() {
        let deal = deal("2H AD 5H AC 7H AH 6H 9H 4H 3C");
        let c = Candidate::new(set("AD AC AS"), &deal);

        assert_eq!(c.discard_budget(), 3);
        assert!(!c.is_reachable());
        assert_eq!(c.reachable_draws(), 0);
    }

    #[test]
    fn moving_need_cards() {
        // Three kings wanted, discarding 3 hand cards, the king at
        // position 1 is reachable as long as it stays below 3.
        for (deck, reachable) in [
            ("KS 2C 3C 4C 5C", true),
            ("2C KS 3C 4C 5C", true),
            ("2C 3C KS 4C 5C", true),
            ("2C 3C 4C KS 5C", false),
            ("2C 3C 4C 5C KS", false),
        ] {
            let deal = self::deal(&format!("KH KD 7S 8S 9S {deck}"));
            let c = Candidate::new(set("KH KD KS"), &deal);
            assert_eq!(c.discard_budget(), 3);
            assert_eq!(c.is_reachable(), reachable, "deck {deck}");
        }
    }
}
