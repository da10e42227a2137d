//! # pontifex-engine: Solitaire Stream Cipher Core
//!
//! A deterministic implementation of Bruce Schneier's Solitaire ("Pontifex")
//! keystream generator and the symmetric stream cipher built on it, using the
//! reduced 28-card deck. A secret deck ordering drives a reproducible
//! keystream; alphabetic text is encrypted and decrypted by modular addition
//! and subtraction of that keystream.
//!
//! ## Core Modules
//!
//! - [`cards`] - Deck constants (size, joker values) and the identity ordering
//! - [`deck`] - The circular card sequence: construction, validation, queries
//! - [`steps`] - The four deck operations (joker A, joker B, triple cut, count cut)
//! - [`keystream`] - Keystream session: one round per key, joker rejection
//! - [`cipher`] - Encryption and decryption of alphabetic text
//! - [`logger`] - Session record serialization to JSONL
//! - [`errors`] - Error types for deck and keystream operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pontifex_engine::cipher::{decrypt, encrypt};
//! use pontifex_engine::deck::Deck;
//!
//! // Both sides share the same secret initial ordering.
//! let sender = Deck::new_with_seed(42);
//! let receiver = sender.clone();
//!
//! let ciphertext = encrypt("Hello, World!", sender).unwrap();
//! assert_eq!(ciphertext.len(), 10); // punctuation and spaces are stripped
//!
//! let plaintext = decrypt(&ciphertext, receiver).unwrap();
//! assert_eq!(plaintext, "HELLOWORLD");
//! ```
//!
//! ## Deterministic Keystreams
//!
//! The generator is a pure function of the initial deck ordering:
//!
//! ```rust
//! use pontifex_engine::deck::Deck;
//! use pontifex_engine::keystream::Keystream;
//!
//! let mut ks1 = Keystream::new(Deck::new_with_seed(7));
//! let mut ks2 = Keystream::new(Deck::new_with_seed(7));
//! for _ in 0..50 {
//!     assert_eq!(ks1.next_key().unwrap(), ks2.next_key().unwrap());
//! }
//! ```
//!
//! ## Loading an Explicit Ordering
//!
//! A deck can be constructed from an explicit permutation of `1..=28`, for
//! example read from a key file:
//!
//! ```rust
//! use pontifex_engine::deck::Deck;
//!
//! let deck = Deck::from_cards((1..=28).collect()).unwrap();
//! assert_eq!(deck.top(), 1);
//! assert_eq!(deck.bottom(), 28);
//! ```

pub mod cards;
pub mod cipher;
pub mod deck;
pub mod errors;
pub mod keystream;
pub mod logger;
pub mod steps;
