// Copyright (C) 2025 Drawpoker Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hand, deck and deal types.
//!
//! A [Deal] is ten distinct cards split into a five cards [Hand] and a five
//! cards [Deck] whose order is the draw order. Deals are validated when they
//! are created so the evaluator can assume well formed input.
use rand::prelude::*;
use std::{array, fmt, str::FromStr};
use thiserror::Error;

use drawpoker_cards::{Card, CardSet, Pack, ParseCardError};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 5;

/// Number of cards in a deal.
pub const DEAL_SIZE: usize = HAND_SIZE + DECK_SIZE;

/// Error for a deal that breaks the deal invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deal doesn't have exactly ten cards.
    #[error("invalid deal: expected 10 cards, got {0}")]
    WrongCardCount(usize),
    /// A card appears twice, in the hand, in the deck, or in both.
    #[error("invalid deal: card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Error returned when parsing deals from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token is not a card.
    #[error("deal {deal}: {source}")]
    Card {
        /// The 1-based deal number.
        deal: usize,
        /// The card error.
        source: ParseCardError,
    },
    /// The cards don't form a valid deal.
    #[error("deal {deal}: {source}")]
    Deal {
        /// The 1-based deal number.
        deal: usize,
        /// The deal error.
        source: DealError,
    },
    /// The input ended in the middle of a deal.
    #[error("incomplete deal with {cards} cards, a deal needs 10")]
    Incomplete {
        /// Number of cards in the last deal.
        cards: usize,
    },
}

/// The five cards currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// The hand cards in the order they were dealt.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// The hand cards as a set.
    pub fn set(&self) -> CardSet {
        CardSet::from_cards(&self.0)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}

/// The five cards draw pile, position 0 is drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck([Card; DECK_SIZE]);

impl Deck {
    /// The deck cards in draw order.
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.0
    }

    /// The draw-order index of a card, `None` if the card is not in the deck.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.0.iter().position(|&c| c == card)
    }

    /// The card drawn last.
    pub fn last(&self) -> Card {
        self.0[DECK_SIZE - 1]
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}

/// A hand and its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    hand: Hand,
    deck: Deck,
}

impl Deal {
    /// Creates a deal checking that all ten cards are distinct.
    pub fn new(hand: [Card; HAND_SIZE], deck: [Card; DECK_SIZE]) -> Result<Self, DealError> {
        let mut seen = CardSet::EMPTY;
        for &card in hand.iter().chain(&deck) {
            if !seen.insert(card) {
                return Err(DealError::DuplicateCard(card));
            }
        }

        Ok(Self {
            hand: Hand(hand),
            deck: Deck(deck),
        })
    }

    /// Creates a deal from ten cards, the first five are the hand and the
    /// last five the deck in draw order.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DealError> {
        if cards.len() != DEAL_SIZE {
            return Err(DealError::WrongCardCount(cards.len()));
        }

        Self::new(
            array::from_fn(|idx| cards[idx]),
            array::from_fn(|idx| cards[HAND_SIZE + idx]),
        )
    }

    /// Deals a random deal from a shuffled pack.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pack = Pack::new_and_shuffled(rng);
        let hand = Hand(array::from_fn(|_| pack.deal()));
        let deck = Deck(array::from_fn(|_| pack.deal()));
        Self { hand, deck }
    }

    /// The held cards.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The draw pile.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Splits the deal back into its hand and deck.
    pub fn into_parts(self) -> (Hand, Deck) {
        (self.hand, self.deck)
    }

    /// Iterates all ten cards, hand first then deck.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand.0.iter().chain(&self.deck.0).copied()
    }

    /// All ten cards as a set.
    pub fn card_set(&self) -> CardSet {
        self.cards().collect()
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand: {} Deck: {}", self.hand, self.deck)
    }
}

impl FromStr for Deal {
    type Err = ParseError;

    /// Parses exactly one deal of ten whitespace separated tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s.split_whitespace(), 1)?;
        Deal::from_cards(&cards).map_err(|source| ParseError::Deal { deal: 1, source })
    }
}

/// Parses whitespace separated card tokens into deals of ten cards.
///
/// ```
/// # use drawpoker_eval::parse_deals;
/// let deals = parse_deals("TH JH QC QD QS QH KH AH 2S 6S\n2H 2S 3H 3S 3C 2D 3D 6C 9C TH")?;
/// assert_eq!(deals.len(), 2);
/// assert_eq!(deals[1].deck().to_string(), "2D 3D 6C 9C TH");
/// # Ok::<(), drawpoker_eval::ParseError>(())
/// ```
pub fn parse_deals(input: &str) -> Result<Vec<Deal>, ParseError> {
    let tokens = input.split_whitespace().collect::<Vec<_>>();

    tokens
        .chunks(DEAL_SIZE)
        .enumerate()
        .map(|(idx, chunk)| {
            let deal = idx + 1;
            if chunk.len() < DEAL_SIZE {
                return Err(ParseError::Incomplete { cards: chunk.len() });
            }

            let cards = parse_cards(chunk.iter().copied(), deal)?;
            Deal::from_cards(&cards).map_err(|source| ParseError::Deal { deal, source })
        })
        .collect()
}

fn parse_cards<'a>(
    tokens: impl Iterator<Item = &'a str>,
    deal: usize,
) -> Result<Vec<Card>, ParseError> {
    tokens
        .map(|t| t.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ParseError::Card { deal, source })
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn deal_round_trip() {
        let input = cards("2H AD 5H AC 7H AH 6H 9H 4H 3C");
        let deal = Deal::from_cards(&input).unwrap();
        let (hand, deck) = deal.into_parts();

        assert_eq!(hand.cards(), &input[..5]);
        assert_eq!(deck.cards(), &input[5..]);
        assert_eq!(deal.cards().collect::<Vec<_>>(), input);
        assert_eq!(deal.card_set().len(), DEAL_SIZE);
    }

    #[test]
    fn deck_positions() {
        let deal = "2H AD 5H AC 7H AH 6H 9H 4H 3C".parse::<Deal>().unwrap();
        let deck = deal.deck();

        assert_eq!(deck.position("AH".parse().unwrap()), Some(0));
        assert_eq!(deck.position("3C".parse().unwrap()), Some(4));
        assert_eq!(deck.position("2H".parse().unwrap()), None);
        assert_eq!(deck.last(), "3C".parse::<Card>().unwrap());
        assert!(deal.hand().set().contains("AC".parse().unwrap()));
        assert!(!deal.hand().set().contains("AH".parse().unwrap()));
    }

    #[test]
    fn invalid_deals() {
        let err = Deal::from_cards(&cards("2H AD 5H AC 7H AH 6H 9H 4H")).unwrap_err();
        assert_eq!(err, DealError::WrongCardCount(9));

        // Duplicate inside the hand.
        let err = Deal::from_cards(&cards("2H 2H 5H AC 7H AH 6H 9H 4H 3C")).unwrap_err();
        assert_eq!(err, DealError::DuplicateCard("2H".parse().unwrap()));

        // Hand and deck overlap.
        let err = Deal::from_cards(&cards("2H AD 5H AC 7H AH 6H 9H 4H 7H")).unwrap_err();
        assert_eq!(err, DealError::DuplicateCard("7H".parse().unwrap()));
        assert_eq!(
            err.to_string(),
            "invalid deal: card 7H appears more than once"
        );
    }

    #[test]
    fn parse_many_deals() {
        let input = "
            TH JH QC QD QS QH KH AH 2S 6S
            2H 2S 3H 3S 3C 2D 3D 6C 9C TH
            2h 2s 3h 3s 3c 2d 9c 3d 6c 10h
        ";

        let deals = parse_deals(input).unwrap();
        assert_eq!(deals.len(), 3);
        assert_eq!(deals[0].hand().to_string(), "TH JH QC QD QS");
        assert_eq!(
            deals[2].to_string(),
            "Hand: 2H 2S 3H 3S 3C Deck: 2D 9C 3D 6C TH"
        );
        assert!(parse_deals("   ").unwrap().is_empty());
    }

    #[test]
    fn parse_errors() {
        let err = parse_deals("TH JH QC QD QS QH KH AH 2S 6S 2H 2S").unwrap_err();
        assert_eq!(err, ParseError::Incomplete { cards: 2 });

        let input = "TH JH QC QD QS QH KH AH 2S 6S 2H 2S 3H 3S 3C 2D 3D 6C 9C XX";
        let err = parse_deals(input).unwrap_err();
        assert!(matches!(err, ParseError::Card { deal: 2, .. }));
        assert_eq!(err.to_string(), "deal 2: invalid card 'XX'");

        let err = parse_deals("TH JH QC QD QS QH KH AH 2S TH").unwrap_err();
        assert!(matches!(err, ParseError::Deal { deal: 1, .. }));

        let err = "TH JH QC".parse::<Deal>().unwrap_err();
        assert_eq!(
            err,
            ParseError::Deal {
                deal: 1,
                source: DealError::WrongCardCount(3)
            }
        );
    }

    #[test]
    fn random_deals_follow_the_seed() {
        let deal = Deal::random(&mut StdRng::seed_from_u64(3));
        assert_eq!(deal, Deal::random(&mut StdRng::seed_from_u64(3)));
        assert_ne!(deal, Deal::random(&mut StdRng::seed_from_u64(4)));
    }

    #[test]
    fn random_deals_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let deal = Deal::random(&mut rng);
            let cards = deal.cards().collect::<Vec<_>>();
            assert_eq!(Deal::from_cards(&cards), Ok(deal));
        }
    }
}
