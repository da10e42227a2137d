/// Number of cards in the deck. The reduced Solitaire variant uses 28; the
/// full-deck variant is obtained by setting this to 54, since every other
/// constant is derived from it.
pub const DECK_SIZE: usize = 28;

/// The first joker value (27). Drives the triple cut and is never emitted
/// as a key.
pub const JOKER_A: u8 = (DECK_SIZE - 1) as u8;

/// The second joker value (28). Counts as `JOKER_A` wherever its value is
/// used as a count, and is never emitted as a key.
pub const JOKER_B: u8 = DECK_SIZE as u8;

/// Largest value the keystream can emit (26). Keys are always in
/// `1..=MAX_KEY`.
pub const MAX_KEY: u8 = (DECK_SIZE - 2) as u8;

/// Number of letters in the cipher alphabet (A..=Z).
pub const ALPHABET_SIZE: u8 = 26;

/// Returns true for the two joker values.
pub fn is_joker(value: u8) -> bool {
    value == JOKER_A || value == JOKER_B
}

/// The identity ordering `1, 2, ..., DECK_SIZE`, top card first.
/// Starting point for shuffled deck construction.
pub fn identity_deck() -> Vec<u8> {
    (1..=DECK_SIZE as u8).collect()
}
