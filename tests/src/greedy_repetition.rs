use pattern_runtime::prelude::*;

use crate::matches_of;

#[test]
fn should_match_zero_or_more_repetitions() {
    let hi0 = literal(b"h") + literal(b"i").zero_or_more();
    let input_output = vec![
        ("h", vec![("h", 0..1)]),
        ("hi", vec![("hi", 0..2)]),
        ("hii", vec![("hii", 0..3)]),
        ("hiii", vec![("hiii", 0..4)]),
        ("hoi", vec![("h", 0..1)]),
        ("hh", vec![("h", 0..1), ("h", 1..2)]),
        ("hih", vec![("hi", 0..2), ("h", 2..3)]),
        ("hiih", vec![("hii", 0..3), ("h", 3..4)]),
        ("hiiih", vec![("hiii", 0..4), ("h", 4..5)]),
        ("hoih", vec![("h", 0..1), ("h", 3..4)]),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = matches_of(&hi0, input);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_match_one_or_more_repetitions() {
    let hi1 = literal(b"h") + literal(b"i").one_or_more();
    let input_output = vec![
        ("h", vec![]),
        ("hi", vec![("hi", 0..2)]),
        ("hii", vec![("hii", 0..3)]),
        ("hiii", vec![("hiii", 0..4)]),
        ("hoi", vec![]),
        ("hhi", vec![("hi", 1..3)]),
        ("hihi", vec![("hi", 0..2), ("hi", 2..4)]),
        ("hiihi", vec![("hii", 0..3), ("hi", 3..5)]),
        ("hiiihi", vec![("hiii", 0..4), ("hi", 4..6)]),
        ("hoihi", vec![("hi", 3..5)]),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = matches_of(&hi1, input);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_iterate_submatches_of_repeated_predicate() {
    let hiho = literal(b"h") + one_of(*b"io").one_or_more();
    let input_output = vec![
        ("h", vec![]),
        ("hi", vec![("hi", 0..2)]),
        ("hiii", vec![("hiii", 0..4)]),
        ("hoi", vec![("hoi", 0..3)]),
        ("hooo", vec![("hooo", 0..4)]),
        ("hio", vec![("hio", 0..3)]),
        ("hhi", vec![("hi", 1..3)]),
        ("hiihi", vec![("hii", 0..3), ("hi", 3..5)]),
        ("hoihi", vec![("hoi", 0..3), ("hi", 3..5)]),
        ("hho", vec![("ho", 1..3)]),
        ("hoho", vec![("ho", 0..2), ("ho", 2..4)]),
        ("hoooho", vec![("hooo", 0..4), ("ho", 4..6)]),
        ("hoioho", vec![("hoio", 0..4), ("ho", 4..6)]),
        ("hioho", vec![("hio", 0..3), ("ho", 3..5)]),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = matches_of(&hiho, input);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_backtrack_repetition_to_satisfy_what_follows() {
    let hi0i = literal(b"h") + literal(b"i").zero_or_more() + literal(b"i");
    let input_output = vec![
        ("h", vec![]),
        ("hi", vec![("hi", 0..2)]),
        ("hii", vec![("hii", 0..3)]),
        ("hiii", vec![("hiii", 0..4)]),
        ("hoi", vec![]),
        ("hhi", vec![("hi", 1..3)]),
        ("hihi", vec![("hi", 0..2), ("hi", 2..4)]),
        ("hiihi", vec![("hii", 0..3), ("hi", 3..5)]),
        ("hiiihi", vec![("hiii", 0..4), ("hi", 4..6)]),
        ("hoihi", vec![("hi", 3..5)]),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = matches_of(&hi0i, input);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_respect_bounded_repetition_counts() {
    let digits = within(b'0'..=b'9').repeating(2..=3).unwrap();
    let input_output = vec![
        ("1", vec![]),
        ("12", vec![("12", 0..2)]),
        ("12345", vec![("123", 0..3), ("45", 3..5)]),
        ("1a234567", vec![("234", 2..5), ("567", 5..8)]),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = matches_of(&digits, input);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_terminate_on_repeated_zero_width_subpattern() {
    let nested = literal(b"a").zero_or_more().zero_or_more();

    assert_eq!(
        vec![("aa", 0..2), ("", 2..2), ("a", 3..4), ("", 4..4)],
        matches_of(&nested, "aaba")
    );
}
