// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is stored as a single byte id with the following layout:
///
/// ```text
///   id = rank * 4 + suit
///   rank = deuce=0,trey=1,four=2,five=3,...,ace=12
///   suit = clubs=0,diamonds=1,hearts=2,spades=3
/// ```
///
/// so that ids fall in `0..52` and can index a 64 bit mask (see
/// [CardSet](crate::CardSet)).
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) * 4 + suit as u8)
    }

    /// This card unique id in `0..52`.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card with the given id, `None` if the id is out of range.
    pub fn from_id(id: u8) -> Option<Card> {
        (usize::from(id) < Pack::SIZE).then_some(Card(id))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[usize::from(self.0 % 4)]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[usize::from(self.0 / 4)]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when a card token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card '{token}'")]
pub struct ParseCardError {
    token: String,
}

impl ParseCardError {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a token like `QH` or `10S`, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let upper = token.to_ascii_uppercase();

        let (rank, suit) = match upper.strip_prefix("10") {
            Some(suit) => ("T", suit),
            None if upper.is_char_boundary(1) => upper.split_at(1),
            None => return Err(ParseCardError::new(token)),
        };

        match (rank.parse::<Rank>(), suit.parse::<Suit>()) {
            (Ok(rank), Ok(suit)) => Ok(Card::new(rank, suit)),
            _ => Err(ParseCardError::new(token)),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The one character symbol for this rank.
    pub fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::ranks()
                .find(|r| r.symbol() == c.to_ascii_uppercase())
                .ok_or_else(|| ParseCardError::new(s)),
            _ => Err(ParseCardError::new(s)),
        }
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The one character symbol for this suit.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::suits()
                .find(|suit| suit.symbol() == c.to_ascii_uppercase())
                .ok_or_else(|| ParseCardError::new(s)),
            _ => Err(ParseCardError::new(s)),
        }
    }
}

/// A full pack of 52 cards used to deal random hands.
#[derive(Debug, Clone)]
pub struct Pack {
    cards: Vec<Card>,
}

impl Pack {
    /// The number of cards in the pack.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled pack.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pack = Self::default();
        pack.cards.shuffle(rng);
        pack
    }

    /// Deals a card from the pack.
    ///
    /// # Panics
    ///
    /// Panics if all the pack cards have been dealt.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().expect("deal from an empty pack")
    }

    /// Number of cards in the pack.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Pack {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Pack {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
