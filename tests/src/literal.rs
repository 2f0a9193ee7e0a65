use pattern_runtime::prelude::*;

use crate::matches_of;

#[test]
fn should_find_every_non_overlapping_literal() {
    let hello = literal(b"hello");

    assert_eq!(
        vec![("hello", 0..5), ("hello", 6..11), ("hello", 12..17)],
        matches_of(&hello, "hello hello hello")
    );
}

#[test]
fn should_report_whether_target_contains_a_match() {
    let hello = literal(b"hello");
    let input_output = [
        ("hello", true),
        ("hellish", false),
        ("hello world", true),
        ("I say hello", true),
        ("I say 'hello'", true),
        ("", false),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = input.as_bytes().contains_match(&hello);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_count_ranges_of_repeated_literal() {
    let hello = literal(b"hello");
    let ranges: Vec<_> = "hello hi hello".as_bytes().ranges(&hello).collect();

    assert_eq!(vec![0..5, 9..14], ranges);
}

#[test]
fn should_prefer_earlier_alternative_at_each_position() {
    let greeting = literal(b"hi") | literal(b"hello") | literal(b"hey");

    assert_eq!(
        vec![("hello", 0..5), ("hi", 7..9), ("hey", 11..14)],
        matches_of(&greeting, "hello, hi, hey")
    );
}

#[test]
fn should_match_sequences_of_non_text_elements() {
    let rising = predicate(|n: &i32| *n > 0).one_or_more();
    let readings = [0, 3, 4, -1, 0, 2, -5];

    let ranges: Vec<_> = readings.ranges(&rising).collect();

    assert_eq!(vec![1..3, 5..6], ranges);
}
