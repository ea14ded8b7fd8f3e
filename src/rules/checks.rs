//! Pure legality predicates shared by the receptacles.
//!
//! These take card slices and return either a boolean or the `Rejection`
//! describing the first rule that failed. They never touch receptacle state.

use crate::cards::Card;
use crate::core::error::Rejection;

/// Consecutive cards descend by exactly one rank, head to top.
#[must_use]
pub fn is_sequenced(run: &[Card]) -> bool {
    run.windows(2)
        .all(|pair| pair[0].rank().checked_sub(pair[1].rank()) == Some(1))
}

/// No two consecutive cards share a color.
#[must_use]
pub fn is_alternating(run: &[Card]) -> bool {
    run.windows(2).all(|pair| !pair[0].is_same_color(&pair[1]))
}

/// Check whether `head` may be placed on a tableau `top`.
///
/// Each failing condition maps to its own rejection, checked in order:
/// rank direction, color, then the exact one-rank step.
pub fn continues_tableau(top: &Card, head: &Card) -> Result<(), Rejection> {
    if head.is_higher_in_rank(top) {
        return Err(Rejection::RankNotBelow);
    }
    if head.is_same_color(top) {
        return Err(Rejection::SameColor);
    }
    if top.rank() - head.rank() != 1 {
        return Err(Rejection::RankGap);
    }
    Ok(())
}

/// Check whether `card` may be placed on a foundation topped by `top`.
pub fn continues_foundation(top: Option<&Card>, card: &Card) -> Result<(), Rejection> {
    match top {
        None if card.is_ace() => Ok(()),
        None => Err(Rejection::NotAnAce),
        Some(top) if !top.is_same_suit(card) => Err(Rejection::WrongSuit),
        Some(top) if card.rank().checked_sub(top.rank()) != Some(1) => Err(Rejection::NotNextRank),
        Some(_) => Ok(()),
    }
}

/// Check a tableau run can be lifted as a unit.
///
/// Sequencing, alternation and capacity are independent conditions; the
/// first that fails is reported.
pub fn check_liftable(run: &[Card], capacity: usize) -> Result<(), Rejection> {
    if run.is_empty() {
        return Err(Rejection::EmptyRun);
    }
    if !is_sequenced(run) {
        return Err(Rejection::NotSequenced);
    }
    if !is_alternating(run) {
        return Err(Rejection::ColorsNotAlternating);
    }
    if run.len() > capacity {
        return Err(Rejection::ExceedsCapacity {
            run_len: run.len(),
            capacity,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_sequenced() {
        assert!(is_sequenced(&[]));
        assert!(is_sequenced(&[card(Suit::Spades, 4)]));
        assert!(is_sequenced(&[card(Suit::Spades, 6), card(Suit::Hearts, 5), card(Suit::Clubs, 4)]));
        assert!(!is_sequenced(&[card(Suit::Spades, 6), card(Suit::Hearts, 4)]));
        assert!(!is_sequenced(&[card(Suit::Spades, 4), card(Suit::Hearts, 5)]));
    }

    #[test]
    fn test_alternating() {
        assert!(is_alternating(&[card(Suit::Spades, 6), card(Suit::Hearts, 5), card(Suit::Clubs, 4)]));
        assert!(!is_alternating(&[card(Suit::Spades, 6), card(Suit::Clubs, 5)]));
        assert!(!is_alternating(&[card(Suit::Diamonds, 6), card(Suit::Hearts, 5)]));
    }

    #[test]
    fn test_continues_tableau() {
        let seven_spades = card(Suit::Spades, 6);

        assert_eq!(continues_tableau(&seven_spades, &card(Suit::Diamonds, 5)), Ok(()));
        assert_eq!(
            continues_tableau(&seven_spades, &card(Suit::Clubs, 5)),
            Err(Rejection::SameColor)
        );
        assert_eq!(
            continues_tableau(&seven_spades, &card(Suit::Diamonds, 4)),
            Err(Rejection::RankGap)
        );
        assert_eq!(
            continues_tableau(&seven_spades, &card(Suit::Diamonds, 7)),
            Err(Rejection::RankNotBelow)
        );
        // Equal rank is not higher, but is not a one-rank step either
        assert_eq!(
            continues_tableau(&seven_spades, &card(Suit::Diamonds, 6)),
            Err(Rejection::RankGap)
        );
    }

    #[test]
    fn test_continues_foundation() {
        let ace = card(Suit::Diamonds, 0);
        let two = card(Suit::Diamonds, 1);

        assert_eq!(continues_foundation(None, &ace), Ok(()));
        assert_eq!(continues_foundation(None, &two), Err(Rejection::NotAnAce));
        assert_eq!(continues_foundation(Some(&ace), &two), Ok(()));
        assert_eq!(
            continues_foundation(Some(&ace), &card(Suit::Hearts, 1)),
            Err(Rejection::WrongSuit)
        );
        assert_eq!(
            continues_foundation(Some(&ace), &card(Suit::Diamonds, 2)),
            Err(Rejection::NotNextRank)
        );
        assert_eq!(
            continues_foundation(Some(&two), &ace),
            Err(Rejection::NotNextRank)
        );
    }

    #[test]
    fn test_check_liftable() {
        let run = [card(Suit::Spades, 6), card(Suit::Hearts, 5), card(Suit::Clubs, 4)];

        assert_eq!(check_liftable(&run, 3), Ok(()));
        assert_eq!(
            check_liftable(&run, 2),
            Err(Rejection::ExceedsCapacity { run_len: 3, capacity: 2 })
        );
        assert_eq!(check_liftable(&run[..2], 2), Ok(()));
        assert_eq!(check_liftable(&[], 5), Err(Rejection::EmptyRun));
    }

    #[test]
    fn test_liftable_checks_are_independent() {
        // Unsequenced fails even with plenty of capacity
        let gap = [card(Suit::Spades, 6), card(Suit::Hearts, 3)];
        assert_eq!(check_liftable(&gap, 10), Err(Rejection::NotSequenced));

        let same_color = [card(Suit::Spades, 6), card(Suit::Clubs, 5)];
        assert_eq!(check_liftable(&same_color, 10), Err(Rejection::ColorsNotAlternating));
    }
}
