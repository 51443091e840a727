//! Core card-table entities: cards, the deck, hands, and the shared trick
//! pool.
//!
//! All containers here are plain ordered collections with no notion of
//! authority; the single-writer discipline is enforced one level up by
//! [`GameState`](super::state::GameState) and the table actor, which are the
//! only owners of mutable instances. Everything a viewer receives is an owned
//! snapshot.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt};

use super::GameError;
use super::constants::{JESTER_COUNT, RANKS_PER_COLOR, WIZARD_COUNT};

/// Card color. `Special` is reserved for Wizards and Jesters; `None` only
/// exists so a zeroed wire value is representable.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum CardColor {
    None,
    Red,
    Blue,
    Green,
    Yellow,
    Special,
}

impl CardColor {
    /// The four trick colors, in deck-construction order.
    pub const COLORS: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::None => "-",
            Self::Red => "R",
            Self::Blue => "B",
            Self::Green => "G",
            Self::Yellow => "Y",
            Self::Special => "*",
        };
        write!(f, "{repr}")
    }
}

/// Card rank. Jester is the lowest, Wizard the highest; `None` only exists so
/// a zeroed wire value is representable.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum CardRank {
    None,
    Jester,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Wizard,
}

impl CardRank {
    /// The thirteen numbered ranks, ascending.
    pub const NUMBERED: [CardRank; RANKS_PER_COLOR] = [
        CardRank::One,
        CardRank::Two,
        CardRank::Three,
        CardRank::Four,
        CardRank::Five,
        CardRank::Six,
        CardRank::Seven,
        CardRank::Eight,
        CardRank::Nine,
        CardRank::Ten,
        CardRank::Eleven,
        CardRank::Twelve,
        CardRank::Thirteen,
    ];
}

impl fmt::Display for CardRank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::None => "-".to_string(),
            Self::Jester => "J".to_string(),
            Self::Wizard => "W".to_string(),
            numbered => ((*numbered as u8) - 1).to_string(),
        };
        write!(f, "{repr}")
    }
}

/// An immutable card value. Cards never exist outside a container; they are
/// copied between the deck, hands, and the trick pool.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card {
    pub color: CardColor,
    pub rank: CardRank,
}

impl Card {
    pub fn new(color: CardColor, rank: CardRank) -> Self {
        Self { color, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = format!("{}/{}", self.rank, self.color);
        write!(f, "{repr:>5}")
    }
}

/// A participant's stable identifier, assigned by the transport at join time.
/// The ascending order of identifiers is the roster order every viewer agrees
/// on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Which end of the deck a card is drawn from.
///
/// The dealer always draws from the front; see [`Deck::draw_from`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawEnd {
    Front,
    Back,
}

/// The host-only draw pile. Rebuilt and shuffled at every round start,
/// drained by the dealer.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the canonical 60-card deck in a deterministic order: the four
    /// colors each with ranks One through Thirteen, then four Wizards, then
    /// four Jesters.
    pub fn build() -> Self {
        let mut cards = VecDeque::with_capacity(super::constants::DECK_SIZE);
        for color in CardColor::COLORS {
            for rank in CardRank::NUMBERED {
                cards.push_back(Card::new(color, rank));
            }
        }
        for _ in 0..WIZARD_COUNT {
            cards.push_back(Card::new(CardColor::Special, CardRank::Wizard));
        }
        for _ in 0..JESTER_COUNT {
            cards.push_back(Card::new(CardColor::Special, CardRank::Jester));
        }
        Self { cards }
    }

    /// In-place Fisher-Yates shuffle, walking from the last index down to 1
    /// and drawing a uniform swap index in `[0, i]` at each step. Reproducible
    /// given a seeded `rng`.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
    }

    /// Removes and returns one card from the given end, or `None` when the
    /// deck is empty.
    ///
    /// The shuffled order is the deal order: the dealer draws from
    /// [`DrawEnd::Front`] exclusively. Both ends are exposed so that a future
    /// trump-reveal (flipping the bottom card) does not disturb the deal.
    pub fn draw_from(&mut self, end: DrawEnd) -> Option<Card> {
        match end {
            DrawEnd::Front => self.cards.pop_front(),
            DrawEnd::Back => self.cards.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// A participant's ordered cards. Mutable only through the authoritative
/// state; replicated to viewers as owned snapshots. Order is meaningful for
/// layout by position and is never sorted.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dealt card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`, shifting subsequent cards
    /// left. The index is validated against the current length at the moment
    /// of application, so a stale index from an out-of-date replica is
    /// rejected rather than trusted.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Owned copy of the current hand, in order. This is what replication
    /// events carry.
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The shared pool of cards played into the current trick. Append-only during
/// a trick, bulk-cleared between tricks, host-only mutation.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TablePool {
    cards: Vec<Card>,
}

impl TablePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a played card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the pool between tricks.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    fn card_counts(cards: impl Iterator<Item = Card>) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_build_yields_sixty_cards_with_exact_multiplicities() {
        let deck = Deck::build();
        assert_eq!(deck.len(), 60);

        let counts = card_counts(deck.cards().copied());
        for color in CardColor::COLORS {
            for rank in CardRank::NUMBERED {
                assert_eq!(counts.get(&Card::new(color, rank)), Some(&1));
            }
        }
        assert_eq!(
            counts.get(&Card::new(CardColor::Special, CardRank::Wizard)),
            Some(&4)
        );
        assert_eq!(
            counts.get(&Card::new(CardColor::Special, CardRank::Jester)),
            Some(&4)
        );
        // 52 distinct colored cards + wizard + jester
        assert_eq!(counts.len(), 54);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut deck = Deck::build();
        let before = card_counts(deck.cards().copied());
        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);
        let after = card_counts(deck.cards().copied());
        assert_eq!(before, after);
        assert_eq!(deck.len(), 60);
    }

    #[test]
    fn test_shuffle_is_reproducible_for_equal_seeds() {
        let mut first = Deck::build();
        let mut second = Deck::build();
        first.shuffle(&mut StdRng::seed_from_u64(42));
        second.shuffle(&mut StdRng::seed_from_u64(42));
        let first: Vec<Card> = first.cards().copied().collect();
        let second: Vec<Card> = second.cards().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_from_front_follows_deck_order() {
        let mut deck = Deck::build();
        let expected = Card::new(CardColor::Red, CardRank::One);
        assert_eq!(deck.draw_from(DrawEnd::Front), Some(expected));
        assert_eq!(deck.len(), 59);
    }

    #[test]
    fn test_draw_from_back_takes_the_last_card() {
        let mut deck = Deck::build();
        let expected = Card::new(CardColor::Special, CardRank::Jester);
        assert_eq!(deck.draw_from(DrawEnd::Back), Some(expected));
    }

    #[test]
    fn test_draw_from_empty_deck_is_none() {
        let mut deck = Deck::default();
        assert_eq!(deck.draw_from(DrawEnd::Front), None);
        assert_eq!(deck.draw_from(DrawEnd::Back), None);
    }

    #[test]
    fn test_hand_remove_at_returns_the_card_at_index() {
        let mut hand = Hand::new();
        let red_one = Card::new(CardColor::Red, CardRank::One);
        let blue_two = Card::new(CardColor::Blue, CardRank::Two);
        let green_three = Card::new(CardColor::Green, CardRank::Three);
        hand.push(red_one);
        hand.push(blue_two);
        hand.push(green_three);

        assert_eq!(hand.remove_at(1), Ok(blue_two));
        assert_eq!(hand.cards(), &[red_one, green_three]);
    }

    #[test]
    fn test_hand_remove_at_out_of_range_leaves_hand_unchanged() {
        let mut hand = Hand::new();
        hand.push(Card::new(CardColor::Yellow, CardRank::Five));

        let err = hand.remove_at(1).unwrap_err();
        assert_eq!(err, GameError::InvalidIndex { index: 1, len: 1 });
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_hand_remove_from_empty_hand_fails() {
        let mut hand = Hand::new();
        let err = hand.remove_at(0).unwrap_err();
        assert_eq!(err, GameError::InvalidIndex { index: 0, len: 0 });
    }

    #[test]
    fn test_table_pool_add_and_clear() {
        let mut pool = TablePool::new();
        pool.add(Card::new(CardColor::Red, CardRank::Seven));
        pool.add(Card::new(CardColor::Special, CardRank::Wizard));
        assert_eq!(pool.len(), 2);

        pool.clear();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(
            Card::new(CardColor::Red, CardRank::Thirteen).to_string(),
            " 13/R"
        );
        assert_eq!(
            Card::new(CardColor::Special, CardRank::Wizard).to_string(),
            "  W/*"
        );
    }

    #[test]
    fn test_card_wire_encoding_is_deterministic() {
        let card = Card::new(CardColor::Green, CardRank::Ten);
        let config = bincode::config::standard();
        let first = bincode::serde::encode_to_vec(card, config).unwrap();
        let second = bincode::serde::encode_to_vec(card, config).unwrap();
        assert_eq!(first, second);

        let (decoded, _): (Card, usize) =
            bincode::serde::decode_from_slice(&first, config).unwrap();
        assert_eq!(decoded, card);
    }
}
