use crate::cards::ALPHABET_SIZE;
use crate::deck::Deck;
use crate::errors::CipherError;
use crate::keystream::Keystream;

/// Strips a message down to the characters the cipher operates on: ASCII
/// letters only, uppercased. Everything else (spaces, punctuation, digits,
/// non-ASCII) is dropped.
pub fn normalize(message: &str) -> String {
    message
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Encrypts a message with the keystream generated from `deck`.
///
/// Each letter maps to its alphabet position in `1..=26` (A=1), has one key
/// value added, wraps back into `1..=26`, and maps back to a letter. The
/// output has the length of the normalized input, not of the original
/// message.
///
/// The deck is consumed: encryption and decryption must each start from an
/// independently constructed deck with the identical initial ordering. Key
/// synchronization is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use pontifex_engine::cipher::encrypt;
/// use pontifex_engine::deck::Deck;
///
/// let deck = Deck::from_cards((1..=28).collect()).unwrap();
/// let ciphertext = encrypt("Hello, World!", deck).unwrap();
/// assert_eq!(ciphertext, "PUWTUVTSFK");
/// ```
///
/// # Errors
///
/// Propagates keystream failures ([`CipherError::RejectionLimitExceeded`]
/// or a deck invariant violation).
pub fn encrypt(message: &str, deck: Deck) -> Result<String, CipherError> {
    let mut keystream = Keystream::new(deck);
    let mut out = String::new();
    for letter in normalize(message).bytes() {
        let position = letter - b'A' + 1;
        let key = keystream.next_key()?;
        let mut shifted = position + key;
        if shifted > ALPHABET_SIZE {
            shifted -= ALPHABET_SIZE;
        }
        out.push((shifted - 1 + b'A') as char);
    }
    Ok(out)
}

/// Decrypts a message with the keystream generated from `deck`.
///
/// Inverse of [`encrypt`]: subtracts each key value and wraps back into
/// `1..=26`. Requires a deck ordered identically to the one encryption
/// started from.
///
/// # Errors
///
/// Propagates keystream failures, as [`encrypt`] does.
pub fn decrypt(message: &str, deck: Deck) -> Result<String, CipherError> {
    let mut keystream = Keystream::new(deck);
    let mut out = String::new();
    for letter in normalize(message).bytes() {
        let position = i16::from(letter - b'A' + 1);
        let key = i16::from(keystream.next_key()?);
        let mut shifted = position - key;
        if shifted <= 0 {
            shifted += i16::from(ALPHABET_SIZE);
        }
        out.push((shifted as u8 - 1 + b'A') as char);
    }
    Ok(out)
}
