use std::io::BufRead;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{identity_deck, DECK_SIZE};
use crate::errors::CipherError;

/// The circular sequence of 28 distinct card values that drives the
/// keystream.
///
/// Stored as a vector with a fixed convention: index 0 is the top card (the
/// anchor's successor) and the last index is the anchor ("rear", the bottom
/// card). Circular traversal is modular index arithmetic; re-anchoring is a
/// physical rotation of the vector.
///
/// A deck is always a permutation of `1..=28` — construction validates this
/// and no operation changes the count or value set, only the ordering.
///
/// # Examples
///
/// ```
/// use pontifex_engine::deck::Deck;
///
/// // Same seed produces the same ordering
/// let d1 = Deck::new_with_seed(42);
/// let d2 = Deck::new_with_seed(42);
/// assert_eq!(d1, d2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<u8>,
}

impl Deck {
    /// Creates a deck by shuffling the identity ordering with a ChaCha20
    /// RNG seeded from `seed`. The ordering is a pure function of the seed.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = identity_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck by shuffling the identity ordering with OS entropy.
    pub fn shuffled() -> Self {
        let mut rng = rand::rng();
        let mut cards = identity_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck from an explicit ordering, top card first.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyDeck`] for empty input,
    /// [`CipherError::InvalidDeckSize`] for any other wrong length,
    /// [`CipherError::CardOutOfRange`] for a value outside `1..=28`, and
    /// [`CipherError::DuplicateCard`] for a repeated value. No partial deck
    /// is produced on failure.
    pub fn from_cards(cards: Vec<u8>) -> Result<Self, CipherError> {
        if cards.is_empty() {
            return Err(CipherError::EmptyDeck);
        }
        if cards.len() != DECK_SIZE {
            return Err(CipherError::InvalidDeckSize {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }
        let mut seen = [false; DECK_SIZE];
        for &value in &cards {
            if value == 0 || value as usize > DECK_SIZE {
                return Err(CipherError::CardOutOfRange {
                    value,
                    max: DECK_SIZE as u8,
                });
            }
            if seen[value as usize - 1] {
                return Err(CipherError::DuplicateCard { value });
            }
            seen[value as usize - 1] = true;
        }
        Ok(Self { cards })
    }

    /// Reads an ordering from whitespace-separated integer tokens, top card
    /// first, then validates it like [`Deck::from_cards`].
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Io`] if reading fails,
    /// [`CipherError::MalformedCard`] for a non-numeric token, plus every
    /// validation error of [`Deck::from_cards`].
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, CipherError> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|e| CipherError::Io {
                message: e.to_string(),
            })?;
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for token in input.split_whitespace() {
            let value: u8 = token.parse().map_err(|_| CipherError::MalformedCard {
                token: token.to_string(),
            })?;
            cards.push(value);
        }
        Self::from_cards(cards)
    }

    /// Number of cards in the deck. Always `DECK_SIZE` after construction.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The current ordering, top card first.
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Value of the top card (the anchor's successor).
    pub fn top(&self) -> u8 {
        self.cards[0]
    }

    /// Value of the bottom card (the anchor itself).
    pub fn bottom(&self) -> u8 {
        self.cards[self.cards.len() - 1]
    }

    /// Value at a 0-based position from the top, wrapping circularly.
    pub fn value_at(&self, pos: usize) -> u8 {
        self.cards[pos % self.cards.len()]
    }

    /// Position of the card one step after `pos` in circular order.
    pub fn successor(&self, pos: usize) -> usize {
        (pos + 1) % self.cards.len()
    }

    /// Position of the card one step before `pos` in circular order.
    pub fn predecessor(&self, pos: usize) -> usize {
        (pos + self.cards.len() - 1) % self.cards.len()
    }

    /// Locates a card by value. Operations search by value because a card's
    /// position is determined entirely by prior steps and cached nowhere.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingCard`] if the value is absent, which
    /// indicates a prior invariant violation.
    pub fn position_of(&self, value: u8) -> Result<usize, CipherError> {
        self.cards
            .iter()
            .position(|&c| c == value)
            .ok_or(CipherError::MissingCard { value })
    }

    /// Swaps the values at two positions, wrapping circularly.
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.cards.len();
        self.cards.swap(a % len, b % len);
    }

    /// Replaces the ordering wholesale after a cut relinks segments. The
    /// new ordering must be the same value set; cuts only rearrange.
    pub(crate) fn reorder(&mut self, cards: Vec<u8>) {
        debug_assert_eq!(cards.len(), self.cards.len());
        debug_assert_eq!(sorted(&cards), sorted(&self.cards));
        self.cards = cards;
    }
}

fn sorted(cards: &[u8]) -> Vec<u8> {
    let mut v = cards.to_vec();
    v.sort_unstable();
    v
}
