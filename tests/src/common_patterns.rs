use pattern_runtime::prelude::*;

use crate::matches_of;

#[test]
fn should_match_quoted_strings_with_escapes() {
    // paired double quotes, allowing backslash escapes.
    let unquoted = || none_of(*b"\"\\").zero_or_more();
    let escaped = literal(b"\\") + any::<u8>();
    let quoted_string =
        literal(b"\"") + unquoted() + (escaped + unquoted()).zero_or_more() + literal(b"\"");

    let input_output = vec![
        (
            r#"let y = "Hello, world!""#,
            vec![(r#""Hello, world!""#, 8..23)],
        ),
        (
            r#"let y = "Hello\" world!""#,
            vec![(r#""Hello\" world!""#, 8..24)],
        ),
        (
            r#"let y = "Hello\\ world!""#,
            vec![(r#""Hello\\ world!""#, 8..24)],
        ),
        (
            r#"let y = "Hello\\" world!""#,
            vec![(r#""Hello\\""#, 8..17)],
        ),
        (
            r#"let y = "Hello, world!"; let z = "Goodnight, moon!""#,
            vec![
                (r#""Hello, world!""#, 8..23),
                (r#""Goodnight, moon!""#, 33..51),
            ],
        ),
        (r#"let y = "Hello, world!"#, vec![]),
    ];

    for (test_case, (input, expected)) in input_output.into_iter().enumerate() {
        let res = matches_of(&quoted_string, input);
        assert_eq!((test_case, expected), (test_case, res));
    }
}

#[test]
fn should_match_identifiers_but_not_leading_digits() {
    let head = within(b'a'..=b'z') | within(b'A'..=b'Z') | literal(b"_");
    let tail = (within(b'a'..=b'z') | within(b'0'..=b'9') | literal(b"_")).zero_or_more();
    let identifier = head + tail;

    assert_eq!(
        vec![("let", 0..3), ("x_1", 4..7), ("_y", 11..13)],
        matches_of(&identifier, "let x_1 = 9_y")
    );
}
