use crate::cards::{is_joker, JOKER_A, JOKER_B};
use crate::deck::Deck;
use crate::errors::CipherError;
use crate::steps::advance_round;

/// Upper bound on consecutive joker rejections before the generator fails.
///
/// For a valid deck a joker candidate appears with probability 2/28 per
/// round, so hitting this bound means the deck's invariants were violated
/// somewhere; failing loudly beats spinning forever.
pub const REJECTION_LIMIT: u32 = 1024;

/// A keystream session: a live deck plus the count of keys consumed.
///
/// The deck advances one round per emitted key and is never reset between
/// calls, so the key sequence is a pure function of the initial ordering.
/// Reproducing a keystream requires starting a fresh session from an
/// identically ordered deck.
///
/// # Examples
///
/// ```
/// use pontifex_engine::deck::Deck;
/// use pontifex_engine::keystream::Keystream;
///
/// // The identity ordering produces a fixed key sequence.
/// let deck = Deck::from_cards((1..=28).collect()).unwrap();
/// let mut ks = Keystream::new(deck);
/// let keys: Vec<u8> = (0..5).map(|_| ks.next_key().unwrap()).collect();
/// assert_eq!(keys, vec![8, 16, 11, 8, 6]);
/// ```
#[derive(Debug)]
pub struct Keystream {
    deck: Deck,
    drawn: u64,
}

impl Keystream {
    /// Binds a session to a deck. The session takes exclusive ownership;
    /// independent messages need independently constructed decks.
    pub fn new(deck: Deck) -> Self {
        Self { deck, drawn: 0 }
    }

    /// Produces the next key value, always in `1..=26`.
    ///
    /// Runs one full round, reads the top card's value `c` (`JOKER_B`
    /// counts as `JOKER_A` here), counts down `c` cards from the anchor and
    /// takes the value of the card after that. A joker candidate is
    /// discarded and another full round runs on the current deck.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::RejectionLimitExceeded`] after
    /// [`REJECTION_LIMIT`] consecutive joker candidates, and propagates any
    /// deck invariant failure from the round's steps.
    pub fn next_key(&mut self) -> Result<u8, CipherError> {
        for _ in 0..REJECTION_LIMIT {
            advance_round(&mut self.deck)?;
            let mut count = self.deck.top();
            if count == JOKER_B {
                count = JOKER_A;
            }
            // counting starts at the anchor, so the count lands on position
            // count - 1 from the top and the candidate is the card after it
            let candidate = self.deck.value_at(count as usize);
            if !is_joker(candidate) {
                self.drawn += 1;
                return Ok(candidate);
            }
        }
        Err(CipherError::RejectionLimitExceeded {
            rounds: REJECTION_LIMIT,
        })
    }

    /// Number of keys emitted so far (rejected joker candidates excluded).
    pub fn keys_drawn(&self) -> u64 {
        self.drawn
    }

    /// Current deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the session, returning the deck in its current state.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
