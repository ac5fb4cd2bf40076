//! Тесты оценщика рук (crate::eval).
//!
//! Проверяем:
//! - распознавание всех категорий;
//! - колесо A2345 как младший стрит;
//! - стрит-флеш вне пяти старших карт масти;
//! - сравнение по кикерам и полосы категорий;
//! - частичные руки (меньше 5 карт) и пустой вход.

use holdem_sim::domain::{card::Card, hand::HandRank};
use holdem_sim::eval::{describe_hand, evaluate, evaluate_best_hand, HandCategory, CATEGORY_BAND};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn score(s: &str) -> HandRank {
    evaluate(&cards(s)).score
}

//
// TEST 1 - все категории
//
#[test]
fn recognizes_every_category() {
    let table = [
        ("Ah Kd 9c 7s 3h 2d 4c", HandCategory::HighCard),
        ("Ah Ad 9c 7s 3h 2d Jc", HandCategory::Pair),
        ("Ah Ad 9c 9s 3h 2d Jc", HandCategory::TwoPair),
        ("Ah Ad Ac 9s 3h 2d Jc", HandCategory::ThreeOfAKind),
        ("9h Td Jc Qs Kh 2d 2c", HandCategory::Straight),
        ("2h 7h 9h Jh Kh 3d 4c", HandCategory::Flush),
        ("Ah Ad Ac 9s 9h 2d Jc", HandCategory::FullHouse),
        ("Ah Ad Ac As 9h 2d Jc", HandCategory::FourOfAKind),
        ("5h 6h 7h 8h 9h Ad Ac", HandCategory::StraightFlush),
        ("Ts Js Qs Ks As 2d 2c", HandCategory::RoyalFlush),
    ];

    let mut previous = None;
    for (hand, category) in table {
        let result = evaluate(&cards(hand));
        assert_eq!(result.category, category, "hand {hand}");
        assert_eq!(result.best_cards.len(), 5, "hand {hand}");
        assert_eq!(result.score.category(), category);
        assert_eq!(describe_hand(result.score), category.name());
        if let Some(prev) = previous {
            assert!(result.score > prev, "{hand} must beat the previous category");
        }
        previous = Some(result.score);
    }
}

//
// TEST 2 - колесо
//
#[test]
fn wheel_is_lowest_straight() {
    let wheel = evaluate(&cards("Ah 2d 3c 4s 5h Kd Qc"));
    assert_eq!(wheel.category, HandCategory::Straight);
    assert_eq!(wheel.best_cards[0].rank, cards("5h")[0].rank);

    let six_high = score("2d 3c 4s 5h 6d Kd Qc");
    assert!(wheel.score < six_high);

    let steel_wheel = evaluate(&cards("Ah 2h 3h 4h 5h Kd Qc"));
    assert_eq!(steel_wheel.category, HandCategory::StraightFlush);
}

#[test]
fn six_card_run_uses_highest_straight() {
    let result = evaluate(&cards("4d 5c 6s 7h 8d 9c 2s"));
    assert_eq!(result.category, HandCategory::Straight);
    assert_eq!(result.best_cards, cards("9c 8d 7h 6s 5c"));
}

//
// TEST 3 - стрит-флеш среди всех карт масти, а не только пяти старших
//
#[test]
fn straight_flush_below_top_flush_cards() {
    let result = evaluate(&cards("Ah Kh 9h 8h 7h 6h 5h"));
    assert_eq!(result.category, HandCategory::StraightFlush);
    assert_eq!(result.best_cards, cards("9h 8h 7h 6h 5h"));
}

#[test]
fn royal_flush_from_hole_and_board() {
    let result = evaluate_best_hand(&cards("As Ks"), &cards("Qs Js Ts 2d 2c"));
    assert_eq!(result.category, HandCategory::RoyalFlush);
    assert_eq!(result.rank_name(), "Royal Flush");
}

//
// TEST 4 - порядок внутри и между категориями
//
#[test]
fn full_house_beats_two_pair_regardless_of_ranks() {
    let boat = score("Qh Qd Qc 5s 5h");
    let aces_up = score("Ah Ad Kc Ks 2h");
    assert!(boat > aces_up);
}

#[test]
fn two_trips_make_full_house_with_higher_set() {
    let result = evaluate(&cards("9h 9d 9c 4s 4h 4d Ac"));
    assert_eq!(result.category, HandCategory::FullHouse);
    assert_eq!(result.best_cards, cards("9h 9d 9c 4s 4h"));
}

#[test]
fn category_bands_do_not_overlap() {
    // Лучшая пара (AA K Q J) всё равно ниже худших двух пар (33 22 4).
    let best_pair = score("Ah Ad Kc Qs Jh");
    let worst_two_pair = score("3h 3d 2c 2s 4h");
    assert_eq!(best_pair, HandRank(1_755_490));
    assert_eq!(worst_two_pair, HandRank(2_159_525));
    assert!(best_pair < worst_two_pair);
    assert!(best_pair.0 < 2 * CATEGORY_BAND);
}

#[test]
fn kickers_break_ties() {
    let ak = score("Ah Ad Kc 7s 3h");
    let aq = score("As Ac Qd 7h 3c");
    assert!(ak > aq);

    // Пятая карта решает.
    let high_4 = score("Ah Kd 9c 7s 4h");
    let high_3 = score("As Kc 9d 7h 3c");
    assert!(high_4 > high_3);

    // Одинаковые пять лучших карт – одинаковый счёт, независимо от масти.
    let board = cards("Ah Kd Qc Js 9h");
    let a = evaluate_best_hand(&cards("2c 3d"), &board);
    let b = evaluate_best_hand(&cards("2h 3s"), &board);
    assert_eq!(a.score, b.score);
    assert!(!a.beats(&b));
}

//
// TEST 5 - неполные руки
//
#[test]
fn partial_hands_are_ranked() {
    let pocket_pair = evaluate(&cards("Qh Qd"));
    assert_eq!(pocket_pair.category, HandCategory::Pair);
    assert_eq!(pocket_pair.best_cards.len(), 2);

    let trips = evaluate(&cards("7h 7d 7c 2s"));
    assert_eq!(trips.category, HandCategory::ThreeOfAKind);

    let high = evaluate(&cards("Ah 9d"));
    assert_eq!(high.category, HandCategory::HighCard);
    assert!(pocket_pair.score > high.score);
}

#[test]
fn empty_input_is_zero_high_card() {
    let result = evaluate(&[]);
    assert_eq!(result.category, HandCategory::HighCard);
    assert_eq!(result.score, HandRank(0));
    assert!(result.best_cards.is_empty());
}
