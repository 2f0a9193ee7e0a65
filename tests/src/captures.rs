use pattern_runtime::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Setting<'a> {
    key: Span<'a, u8>,
    value: Span<'a, u8>,
}

fn key<'a>(setting: &Setting<'a>) -> Span<'a, u8> {
    setting.key
}

fn with_key<'a>(setting: Setting<'a>, key: Span<'a, u8>) -> Setting<'a> {
    Setting { key, ..setting }
}

fn value<'a>(setting: &Setting<'a>) -> Span<'a, u8> {
    setting.value
}

fn with_value<'a>(setting: Setting<'a>, value: Span<'a, u8>) -> Setting<'a> {
    Setting { value, ..setting }
}

#[test]
fn should_capture_fields_of_each_match() {
    let word = || within(b'a'..=b'z').one_or_more();
    let setting = capture(word()).into_field(FieldLens::new(key, with_key))
        + literal(b"=")
        + capture(word()).into_field(FieldLens::new(value, with_value));
    let target = b"name=orchid; lang=rust; broken=";

    let settings: Vec<_> = target
        .matches_with(&setting, Setting::default())
        .into_iter()
        .map(|m| {
            let setting = m.into_captures();
            (setting.key.as_slice(), setting.value.as_slice())
        })
        .collect();

    assert_eq!(
        vec![(&b"name"[..], &b"orchid"[..]), (&b"lang"[..], &b"rust"[..])],
        settings
    );
}

#[test]
fn should_capture_exactly_the_matched_span() {
    let quoted = capture(literal(b"'") + none_of(*b"'").zero_or_more() + literal(b"'"));
    let target = b"say 'hi' and 'bye' or '";
    let mut count = 0;

    for m in target.matches_with(&quoted, Span::default()) {
        assert_eq!(m.contents(), *m.captures());
        count += 1;
    }

    assert_eq!(2, count);
}

#[test]
fn should_transform_captured_spans() {
    let number = capture(within(b'0'..=b'9').one_or_more()).map_captures(Span::<u8>::default(), |digits| {
        digits
            .as_slice()
            .iter()
            .fold(0u32, |n, digit| n * 10 + u32::from(digit - b'0'))
    });
    let target = b"12 apples, 345 pears";

    let numbers: Vec<u32> = target
        .matches_with(&number, 0)
        .into_iter()
        .map(|m| m.into_captures())
        .collect();

    assert_eq!(vec![12, 345], numbers);
}
