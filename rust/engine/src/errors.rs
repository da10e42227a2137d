use thiserror::Error;

/// Errors raised by deck construction and keystream operations.
///
/// Construction-time variants (`InvalidDeckSize`, `EmptyDeck`,
/// `DuplicateCard`, `CardOutOfRange`, `MalformedCard`) reject input that is
/// not a permutation of `1..=DECK_SIZE`; no partial deck is produced.
/// `MissingCard` and `RejectionLimitExceeded` are defensive guards against a
/// deck whose invariants were violated after construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid deck: expected {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: usize },
    #[error("deck input contains no cards")]
    EmptyDeck,
    #[error("invalid deck: card value {value} appears more than once")]
    DuplicateCard { value: u8 },
    #[error("invalid deck: card value {value} is outside 1..={max}")]
    CardOutOfRange { value: u8, max: u8 },
    #[error("invalid deck input: {token:?} is not a card value")]
    MalformedCard { token: String },
    #[error("failed to read deck input: {message}")]
    Io { message: String },
    #[error("card value {value} is missing from the deck")]
    MissingCard { value: u8 },
    #[error("keystream emitted no key after {rounds} consecutive rounds")]
    RejectionLimitExceeded { rounds: u32 },
}
