use simple_poker_engine::cards::{Card, Rank as R, Suit as S};
use simple_poker_engine::hand::{compare_evaluations, evaluate, Category, Hand};

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

fn hand(cards: [Card; 4]) -> Hand {
    Hand::new(cards)
}

#[test]
fn pair_of_aces() {
    let h = hand([
        c(R::Ace, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::Seven, S::Spades),
        c(R::Eight, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.tie_break, 14);
}

#[test]
fn three_sevens() {
    let h = hand([
        c(R::Seven, S::Hearts),
        c(R::Seven, S::Diamonds),
        c(R::Seven, S::Spades),
        c(R::Eight, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.tie_break, 7);
}

#[test]
fn kings_and_queens() {
    let h = hand([
        c(R::King, S::Hearts),
        c(R::King, S::Diamonds),
        c(R::Queen, S::Spades),
        c(R::Queen, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.tie_break, 13);
}

#[test]
fn two_pair_tie_break_is_higher_pair_regardless_of_order() {
    let h = hand([
        c(R::Eight, S::Hearts),
        c(R::Jack, S::Diamonds),
        c(R::Eight, S::Spades),
        c(R::Jack, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.tie_break, 11);
}

#[test]
fn four_of_a_kind() {
    let h = hand([
        c(R::Nine, S::Hearts),
        c(R::Nine, S::Diamonds),
        c(R::Nine, S::Spades),
        c(R::Nine, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.tie_break, 9);
}

#[test]
fn no_pair_uses_highest_card() {
    let h = hand([
        c(R::Seven, S::Hearts),
        c(R::Ten, S::Diamonds),
        c(R::Nine, S::Spades),
        c(R::Eight, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::NoPair);
    assert_eq!(e.tie_break, 10);
}

#[test]
fn pair_beats_higher_singles() {
    // pair of sevens: tie-break is the pair, not the ace
    let h = hand([
        c(R::Ace, S::Hearts),
        c(R::Seven, S::Diamonds),
        c(R::King, S::Spades),
        c(R::Seven, S::Clubs),
    ]);
    let e = evaluate(&h);
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.tie_break, 7);
}

#[test]
fn evaluation_ignores_card_order() {
    let a = hand([
        c(R::Ace, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::Seven, S::Spades),
        c(R::Eight, S::Clubs),
    ]);
    let b = hand([
        c(R::Seven, S::Spades),
        c(R::Eight, S::Clubs),
        c(R::Ace, S::Hearts),
        c(R::Ace, S::Diamonds),
    ]);
    assert_eq!(evaluate(&a), evaluate(&b));
}

#[test]
fn evaluation_is_idempotent() {
    let h = hand([
        c(R::Queen, S::Hearts),
        c(R::Jack, S::Diamonds),
        c(R::Queen, S::Spades),
        c(R::Seven, S::Clubs),
    ]);
    assert_eq!(evaluate(&h), evaluate(&h));
}

#[test]
fn category_ordering_is_correct() {
    assert!(Category::NoPair < Category::Pair);
    assert!(Category::Pair < Category::TwoPair);
    assert!(Category::TwoPair < Category::ThreeOfAKind);
    assert!(Category::ThreeOfAKind < Category::FourOfAKind);
}

#[test]
fn same_top_pair_with_different_second_pair_compares_equal() {
    let a = evaluate(&hand([
        c(R::King, S::Hearts),
        c(R::King, S::Diamonds),
        c(R::Queen, S::Spades),
        c(R::Queen, S::Clubs),
    ]));
    let b = evaluate(&hand([
        c(R::King, S::Spades),
        c(R::King, S::Clubs),
        c(R::Seven, S::Hearts),
        c(R::Seven, S::Diamonds),
    ]));
    assert!(compare_evaluations(&a, &b).is_eq());
}

#[test]
fn trips_beat_two_pair() {
    let trips = evaluate(&hand([
        c(R::Seven, S::Hearts),
        c(R::Seven, S::Diamonds),
        c(R::Seven, S::Spades),
        c(R::Eight, S::Clubs),
    ]));
    let two_pair = evaluate(&hand([
        c(R::Ace, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::King, S::Spades),
        c(R::King, S::Clubs),
    ]));
    assert!(compare_evaluations(&trips, &two_pair).is_gt());
}
