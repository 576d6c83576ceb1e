// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! A set of cards backed by a bit mask.
use std::fmt;

use crate::{Card, Pack};

/// A set of cards.
///
/// Each card sets the bit at its [Card::id], set operations are plain bit
/// operations on a copyable value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Creates a set from a slice of cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }

    /// Adds a card, returns false if the card was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.0 |= Self::bit(card);
        !present
    }

    /// Checks if the card is in this set.
    pub fn contains(&self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    /// Number of cards in this set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cards in either set.
    pub fn union(&self, other: CardSet) -> CardSet {
        CardSet(self.0 | other.0)
    }

    /// Cards in both sets.
    pub fn intersection(&self, other: CardSet) -> CardSet {
        CardSet(self.0 & other.0)
    }

    /// Cards in this set that are not in `other`.
    pub fn difference(&self, other: CardSet) -> CardSet {
        CardSet(self.0 & !other.0)
    }

    /// Checks if every card of this set is in `other`.
    pub fn is_subset(&self, other: CardSet) -> bool {
        self.difference(other).is_empty()
    }

    /// Iterates the cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        let mask = self.0;
        (0..Pack::SIZE as u8)
            .filter(move |id| mask & (1 << id) != 0)
            .filter_map(Card::from_id)
    }

    #[inline]
    fn bit(card: Card) -> u64 {
        1 << card.id()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardSet::EMPTY;
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
