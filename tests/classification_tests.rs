use std::cmp::Ordering;

use pokerhand::{compare_hands, Hand, HandError, Kind, Rules};
use rstest::rstest;

#[rstest]
#[case("2C 3D 4H 5S 6C", Kind::Straight)]
#[case("AC 2C 3C 4C 5C", Kind::StraightFlush)]
#[case("AD 2C 3C 4C 5C", Kind::Straight)]
#[case("TD TC TH 7C 7D", Kind::FullHouse)]
#[case("2C 2D 2H 2S 9C", Kind::FourOfAKind)]
#[case("2C 4D 6H 8S TC", Kind::HighCard)]
fn test_known_hands(#[case] cards: &str, #[case] expected: Kind) {
    let hand: Hand = cards.parse().unwrap();
    assert_eq!(hand.kind(), expected);
    // Classification is recomputed on every call and never changes
    assert_eq!(hand.kind(), expected);
}

#[test]
fn test_sorting_hands_by_kind() {
    let mut hands: Vec<Hand> = [
        "TD TC TH 7C 7D",
        "2C 4D 6H 8S TC",
        "AC 2C 3C 4C 5C",
        "7C 7D 9H JS KC",
        "2H 5H 9H JH KH",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    hands.sort_by(|a, b| a.compare(b));

    let kinds: Vec<Kind> = hands.iter().map(Hand::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Kind::HighCard,
            Kind::Pair,
            Kind::Flush,
            Kind::FullHouse,
            Kind::StraightFlush
        ]
    );
}

#[test]
fn test_two_different_full_houses_compare_equal() {
    assert_eq!(
        compare_hands("TD TC TH 7C 7D", "AD AC AH KC KD"),
        Ok(Ordering::Equal)
    );
}

#[test]
fn test_two_pair_rule_is_opt_in() {
    let hand: Hand = "KC KD 4H 4S 9C".parse().unwrap();
    assert_eq!(hand.kind(), Kind::Pair);
    assert_eq!(
        hand.kind_with(Rules {
            detect_two_pair: true
        }),
        Kind::TwoPair
    );
}

#[test]
fn test_malformed_input_is_rejected() {
    assert_eq!(
        "2C 3D 4H".parse::<Hand>(),
        Err(HandError::InvalidHandSize(3))
    );
    assert!(matches!(
        "2C 3D 4H 5S 6Z".parse::<Hand>(),
        Err(HandError::InvalidCard(_))
    ));
}
