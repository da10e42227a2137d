use crate::cards::{is_joker, JOKER_A, JOKER_B};
use crate::deck::Deck;
use crate::errors::CipherError;

/// Step 1: swap `JOKER_A` with the card immediately after it in circular
/// order. The anchor stays where it is; only values move.
///
/// No-op on a deck with fewer than 2 cards.
///
/// # Errors
///
/// Returns [`CipherError::MissingCard`] if `JOKER_A` is absent from the
/// deck, which indicates a prior invariant violation.
pub fn joker_a(deck: &mut Deck) -> Result<(), CipherError> {
    if deck.len() < 2 {
        return Ok(());
    }
    let pos = deck.position_of(JOKER_A)?;
    let next = deck.successor(pos);
    deck.swap(pos, next);
    Ok(())
}

/// Step 2: move `JOKER_B` two positions forward, swapping through each
/// intervening card one at a time.
///
/// # Errors
///
/// Returns [`CipherError::MissingCard`] if `JOKER_B` is absent.
pub fn joker_b(deck: &mut Deck) -> Result<(), CipherError> {
    if deck.len() < 2 {
        return Ok(());
    }
    let mut pos = deck.position_of(JOKER_B)?;
    for _ in 0..2 {
        let next = deck.successor(pos);
        deck.swap(pos, next);
        pos = next;
    }
    Ok(())
}

/// Step 3: triple cut around the two jokers.
///
/// With the jokers at positions `first < second` (top card = position 0),
/// the cards above the first joker and the cards below the second joker
/// exchange places; the segment from the first joker through the second
/// keeps its internal order. The new anchor is the last card of the
/// relocated above-segment.
///
/// The two boundary cases move no cards; only the anchor is redefined:
/// - a joker at the rear leaves no below-segment,
/// - a joker on top leaves no above-segment.
///
/// # Errors
///
/// Returns [`CipherError::MissingCard`] if either joker is absent.
pub fn triple_cut(deck: &mut Deck) -> Result<(), CipherError> {
    let a = deck.position_of(JOKER_A)?;
    let b = deck.position_of(JOKER_B)?;
    let (first, second) = if a < b { (a, b) } else { (b, a) };
    let rear = deck.len() - 1;
    let cards = deck.cards();

    let new_order: Vec<u8> = if second == rear {
        // joker at the rear: only the above-segment moves below the pair
        cards[first..].iter().chain(&cards[..first]).copied().collect()
    } else if first == 0 {
        // joker on top: only the below-segment moves above the pair
        cards[second + 1..]
            .iter()
            .chain(&cards[..=second])
            .copied()
            .collect()
    } else {
        cards[second + 1..]
            .iter()
            .chain(&cards[first..=second])
            .chain(&cards[..first])
            .copied()
            .collect()
    };
    deck.reorder(new_order);
    Ok(())
}

/// Step 4: count cut on the bottom card's value `v`.
///
/// The top `v` cards rotate to sit immediately above the bottom card, which
/// stays at the bottom. When the bottom card is a joker (either value) the
/// cut is skipped; that is a valid completion of the step, not an error.
pub fn count_cut(deck: &mut Deck) -> Result<(), CipherError> {
    if deck.len() < 2 {
        return Ok(());
    }
    let value = deck.bottom();
    if is_joker(value) {
        return Ok(());
    }
    let count = value as usize;
    let rear = deck.len() - 1;
    let cards = deck.cards();
    // value <= DECK_SIZE - 2, so count never reaches the rear index
    let new_order: Vec<u8> = cards[count..rear]
        .iter()
        .chain(&cards[..count])
        .chain(std::iter::once(&cards[rear]))
        .copied()
        .collect();
    deck.reorder(new_order);
    Ok(())
}

/// One full round: joker A, joker B, triple cut, count cut. The order is
/// load-bearing; reordering the steps produces a different keystream.
pub fn advance_round(deck: &mut Deck) -> Result<(), CipherError> {
    joker_a(deck)?;
    joker_b(deck)?;
    triple_cut(deck)?;
    count_cut(deck)
}
