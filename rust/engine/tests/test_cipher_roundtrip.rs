use pontifex_engine::cipher::{decrypt, encrypt, normalize};
use pontifex_engine::deck::Deck;

fn identity() -> Deck {
    Deck::from_cards((1..=28).collect()).unwrap()
}

#[test]
fn normalize_strips_everything_but_ascii_letters() {
    assert_eq!(normalize("Hello, World!"), "HELLOWORLD");
    assert_eq!(normalize("a1b2 c3-d4"), "ABCD");
    assert_eq!(normalize("1234 !?"), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn encrypt_hello_world_with_identity_deck() {
    let ciphertext = encrypt("Hello, World!", identity()).unwrap();
    assert_eq!(ciphertext, "PUWTUVTSFK");
    assert_eq!(ciphertext.len(), 10, "output length equals filtered length");
}

#[test]
fn decrypt_recovers_the_filtered_plaintext() {
    let ciphertext = encrypt("Hello, World!", identity()).unwrap();
    let plaintext = decrypt(&ciphertext, identity()).unwrap();
    assert_eq!(plaintext, "HELLOWORLD");
}

#[test]
fn roundtrip_across_many_seeds() {
    let message = "Do not use for anything you actually want to keep secret; \
                   the 28-card variant exists to be studied, not trusted.";
    for seed in 0..20 {
        let ciphertext = encrypt(message, Deck::new_with_seed(seed)).unwrap();
        let plaintext = decrypt(&ciphertext, Deck::new_with_seed(seed)).unwrap();
        assert_eq!(plaintext, normalize(message), "roundtrip broke (seed {})", seed);
    }
}

#[test]
fn ciphertext_is_uppercase_letters_only() {
    let ciphertext = encrypt("mixed Case, with 42 digits & symbols!", identity()).unwrap();
    assert!(ciphertext.bytes().all(|b| b.is_ascii_uppercase()));
}

#[test]
fn empty_and_letterless_messages_encrypt_to_empty() {
    assert_eq!(encrypt("", identity()).unwrap(), "");
    assert_eq!(encrypt("123 !?", Deck::new_with_seed(9)).unwrap(), "");
}

#[test]
fn mismatched_decks_do_not_decrypt() {
    let message = "The shared secret is the initial ordering and nothing else";
    let ciphertext = encrypt(message, Deck::new_with_seed(1)).unwrap();
    let wrong = decrypt(&ciphertext, Deck::new_with_seed(2)).unwrap();
    assert_ne!(wrong, normalize(message));
}

#[test]
fn wrap_around_at_both_alphabet_boundaries() {
    // Z plus any key wraps high; A minus any key wraps low. Both must stay
    // inverses of each other.
    let ciphertext = encrypt("ZZZZZZZZZZAAAAAAAAAA", Deck::new_with_seed(3)).unwrap();
    let plaintext = decrypt(&ciphertext, Deck::new_with_seed(3)).unwrap();
    assert_eq!(plaintext, "ZZZZZZZZZZAAAAAAAAAA");
}

#[test]
fn encryption_consumes_one_key_per_letter() {
    // Same prefix, same seed: the first letters encrypt identically.
    let short = encrypt("HELLO", Deck::new_with_seed(11)).unwrap();
    let long = encrypt("HELLO AGAIN", Deck::new_with_seed(11)).unwrap();
    assert_eq!(&long[..5], short.as_str());
}
