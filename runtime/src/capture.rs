//! Combinators transforming the capture payload of a match without altering
//! which elements it covers.
use std::fmt::Display;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::{MandatoryPrefix, Pattern, PatternMatch, Prefixed, Span};

/// Records the matched span itself as the capture payload.
///
/// The subpattern is seeded with a fixed starting payload, and both the
/// incoming payload and the subpattern's own captures are discarded.
///
/// # Example
///
/// ```
/// use pattern_runtime::prelude::*;
///
/// let word = capture(within(b'a'..=b'z').one_or_more());
/// let target = "key=value".as_bytes();
/// let found = target.matches_with(&word, Span::default()).iter().next();
///
/// assert_eq!(Some(&b"key"[..]), found.map(|m| m.captures().as_slice()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<P, S> {
    subpattern: P,
    starting_value: S,
}

impl<P, S> Capture<P, S> {
    #[must_use]
    pub fn new(subpattern: P, starting_value: S) -> Self {
        Self {
            subpattern,
            starting_value,
        }
    }
}

impl<E, P: Prefixed<E>, S> Prefixed<E> for Capture<P, S> {
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        self.subpattern.mandatory_prefix()
    }
}

impl<'a, E, P, S> Pattern<'a, E, Span<'a, E>> for Capture<P, S>
where
    E: 'a,
    S: Clone + 'a,
    P: Pattern<'a, E, S> + 'a,
{
    type Matcher = CaptureMatcher<'a, E, S, P>;

    fn make_matcher(&'a self, target: Span<'a, E>, _: Span<'a, E>) -> Self::Matcher {
        CaptureMatcher {
            submatcher: self
                .subpattern
                .make_matcher(target, self.starting_value.clone()),
        }
    }
}

impl<P: Display, S> Display for Capture<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "capture({})", self.subpattern)
    }
}

pub struct CaptureMatcher<'a, E, S, P>
where
    E: 'a,
    P: Pattern<'a, E, S>,
{
    submatcher: P::Matcher,
}

impl<'a, E, S, P> Clone for CaptureMatcher<'a, E, S, P>
where
    E: 'a,
    P: Pattern<'a, E, S>,
{
    fn clone(&self) -> Self {
        Self {
            submatcher: self.submatcher.clone(),
        }
    }
}

impl<'a, E, S, P> Iterator for CaptureMatcher<'a, E, S, P>
where
    E: 'a,
    P: Pattern<'a, E, S>,
{
    type Item = PatternMatch<'a, E, Span<'a, E>>;

    fn next(&mut self) -> Option<Self::Item> {
        let contents = self.submatcher.next()?.contents();
        Some(PatternMatch::new(contents, contents))
    }
}

impl<'a, E, S, P> FusedIterator for CaptureMatcher<'a, E, S, P>
where
    E: 'a,
    P: Pattern<'a, E, S>,
{
}

/// A reusable accessor for one field of a composite payload.
pub trait Lens {
    /// The composite payload.
    type Whole;
    /// The field addressed within it.
    type Part;

    fn get(&self, whole: &Self::Whole) -> Self::Part;

    /// Returns a copy of `whole` with the addressed field replaced.
    fn with(&self, whole: Self::Whole, part: Self::Part) -> Self::Whole;
}

/// A [Lens] built from a getter and a setter.
pub struct FieldLens<W, T, G, S> {
    getter: G,
    setter: S,
    marker: PhantomData<fn(W) -> T>,
}

impl<W, T, G, S> FieldLens<W, T, G, S>
where
    G: Fn(&W) -> T,
    S: Fn(W, T) -> W,
{
    #[must_use]
    pub fn new(getter: G, setter: S) -> Self {
        Self {
            getter,
            setter,
            marker: PhantomData,
        }
    }
}

impl<W, T, G, S> Lens for FieldLens<W, T, G, S>
where
    G: Fn(&W) -> T,
    S: Fn(W, T) -> W,
{
    type Whole = W;
    type Part = T;

    fn get(&self, whole: &W) -> T {
        (self.getter)(whole)
    }

    fn with(&self, whole: W, part: T) -> W {
        (self.setter)(whole, part)
    }
}

/// Runs a subpattern on one field of a composite payload.
///
/// The subpattern is seeded with the current value of the field, and each of
/// its matches writes the resulting capture back into a copy of the outer
/// payload, leaving all other fields untouched.
pub struct CaptureInto<P, L> {
    subpattern: P,
    lens: L,
}

impl<P, L> CaptureInto<P, L> {
    #[must_use]
    pub fn new(subpattern: P, lens: L) -> Self {
        Self { subpattern, lens }
    }
}

impl<E, P: Prefixed<E>, L> Prefixed<E> for CaptureInto<P, L> {
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        self.subpattern.mandatory_prefix()
    }
}

impl<'a, E, P, L> Pattern<'a, E, L::Whole> for CaptureInto<P, L>
where
    E: 'a,
    L: Lens + 'a,
    L::Whole: Clone,
    P: Pattern<'a, E, L::Part> + 'a,
{
    type Matcher = CaptureIntoMatcher<'a, E, P, L>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: L::Whole) -> Self::Matcher {
        let field = self.lens.get(&captures);

        CaptureIntoMatcher {
            earlier_captures: captures,
            lens: &self.lens,
            submatcher: self.subpattern.make_matcher(target, field),
        }
    }
}

impl<P: Display, L> Display for CaptureInto<P, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}).into_field(..)", self.subpattern)
    }
}

pub struct CaptureIntoMatcher<'a, E, P, L>
where
    E: 'a,
    L: Lens,
    P: Pattern<'a, E, L::Part>,
{
    earlier_captures: L::Whole,
    lens: &'a L,
    submatcher: P::Matcher,
}

impl<'a, E, P, L> Clone for CaptureIntoMatcher<'a, E, P, L>
where
    E: 'a,
    L: Lens,
    L::Whole: Clone,
    P: Pattern<'a, E, L::Part>,
{
    fn clone(&self) -> Self {
        Self {
            earlier_captures: self.earlier_captures.clone(),
            lens: self.lens,
            submatcher: self.submatcher.clone(),
        }
    }
}

impl<'a, E, P, L> Iterator for CaptureIntoMatcher<'a, E, P, L>
where
    E: 'a,
    L: Lens,
    L::Whole: Clone,
    P: Pattern<'a, E, L::Part>,
{
    type Item = PatternMatch<'a, E, L::Whole>;

    fn next(&mut self) -> Option<Self::Item> {
        let (contents, field) = self.submatcher.next()?.into_parts();
        let captures = self.lens.with(self.earlier_captures.clone(), field);

        Some(PatternMatch::new(contents, captures))
    }
}

impl<'a, E, P, L> FusedIterator for CaptureIntoMatcher<'a, E, P, L>
where
    E: 'a,
    L: Lens,
    L::Whole: Clone,
    P: Pattern<'a, E, L::Part>,
{
}

/// Runs a subpattern from a fixed starting payload and transforms each of its
/// resulting captures.
pub struct CaptureMap<P, S, F> {
    subpattern: P,
    starting_value: S,
    transform: F,
}

impl<P, S, F> CaptureMap<P, S, F> {
    #[must_use]
    pub fn new(subpattern: P, starting_value: S, transform: F) -> Self {
        Self {
            subpattern,
            starting_value,
            transform,
        }
    }
}

impl<E, P: Prefixed<E>, S, F> Prefixed<E> for CaptureMap<P, S, F> {
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        self.subpattern.mandatory_prefix()
    }
}

impl<'a, E, P, S, F, T> Pattern<'a, E, T> for CaptureMap<P, S, F>
where
    E: 'a,
    S: Clone + 'a,
    F: Fn(S) -> T + 'a,
    P: Pattern<'a, E, S> + 'a,
{
    type Matcher = CaptureMapMatcher<'a, E, S, P, F>;

    fn make_matcher(&'a self, target: Span<'a, E>, _: T) -> Self::Matcher {
        CaptureMapMatcher {
            transform: &self.transform,
            submatcher: self
                .subpattern
                .make_matcher(target, self.starting_value.clone()),
        }
    }
}

impl<P: Display, S, F> Display for CaptureMap<P, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}).map_captures(..)", self.subpattern)
    }
}

pub struct CaptureMapMatcher<'a, E, S, P, F>
where
    E: 'a,
    P: Pattern<'a, E, S>,
{
    transform: &'a F,
    submatcher: P::Matcher,
}

impl<'a, E, S, P, F> Clone for CaptureMapMatcher<'a, E, S, P, F>
where
    E: 'a,
    P: Pattern<'a, E, S>,
{
    fn clone(&self) -> Self {
        Self {
            transform: self.transform,
            submatcher: self.submatcher.clone(),
        }
    }
}

impl<'a, E, S, P, F, T> Iterator for CaptureMapMatcher<'a, E, S, P, F>
where
    E: 'a,
    F: Fn(S) -> T,
    P: Pattern<'a, E, S>,
{
    type Item = PatternMatch<'a, E, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (contents, captures) = self.submatcher.next()?.into_parts();
        Some(PatternMatch::new(contents, (self.transform)(captures)))
    }
}

impl<'a, E, S, P, F, T> FusedIterator for CaptureMapMatcher<'a, E, S, P, F>
where
    E: 'a,
    F: Fn(S) -> T,
    P: Pattern<'a, E, S>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{capture, literal, one_of, within};
    use crate::Combinator;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Assignment<'a> {
        key: Span<'a, u8>,
        value: Span<'a, u8>,
        separators: usize,
    }

    fn key_of<'a>(assignment: &Assignment<'a>) -> Span<'a, u8> {
        assignment.key
    }

    fn with_key<'a>(assignment: Assignment<'a>, key: Span<'a, u8>) -> Assignment<'a> {
        Assignment { key, ..assignment }
    }

    fn value_of<'a>(assignment: &Assignment<'a>) -> Span<'a, u8> {
        assignment.value
    }

    fn with_value<'a>(assignment: Assignment<'a>, value: Span<'a, u8>) -> Assignment<'a> {
        Assignment { value, ..assignment }
    }

    #[test]
    fn should_capture_matched_span() {
        let digits = capture(within(b'0'..=b'9').one_or_more());
        let target = b"123a";
        let found: Vec<_> = digits
            .make_matcher(Span::new(&target[..]), Span::default())
            .map(|m| (m.range(), m.captures().as_slice().to_vec()))
            .collect();

        assert_eq!(
            vec![
                (0..3, b"123".to_vec()),
                (0..2, b"12".to_vec()),
                (0..1, b"1".to_vec())
            ],
            found
        );
    }

    #[test]
    fn should_write_captures_into_addressed_field_only() {
        let word = || within(b'a'..=b'z').one_or_more();
        let pattern = capture(word())
            .into_field(FieldLens::new(key_of, with_key))
            .then(literal(b"="))
            .then(capture(word()).into_field(FieldLens::new(value_of, with_value)));
        let target = b"name=orchid";
        let seed = Assignment {
            separators: 7,
            ..Assignment::default()
        };

        let assignment = pattern
            .make_matcher(Span::new(&target[..]), seed)
            .next()
            .map(|m| m.into_captures());

        assert_eq!(
            Some((&b"name"[..], &b"orchid"[..], 7)),
            assignment
                .as_ref()
                .map(|a| (a.key.as_slice(), a.value.as_slice(), a.separators))
        );
    }

    #[test]
    fn should_transform_captures_from_fixed_seed() {
        let separators = one_of(*b",;")
            .map_captures(0usize, |count| count + 1)
            .into_field(FieldLens::new(
                |a: &Assignment| a.separators,
                |a: Assignment, separators| Assignment { separators, ..a },
            ));
        let target = b";";
        let found = separators
            .make_matcher(Span::new(&target[..]), Assignment::default())
            .next()
            .map(|m| m.into_captures().separators);

        assert_eq!(Some(1), found);
    }

    #[test]
    fn should_preserve_match_geometry() {
        let plain = literal(b"ab").or(literal(b"a"));
        let mapped = literal(b"ab")
            .or(literal(b"a"))
            .map_captures((), |_| "mapped");
        let target = b"ab";

        let plain_ranges: Vec<_> = plain
            .make_matcher(Span::new(&target[..]), ())
            .map(|m| m.range())
            .collect();
        let mapped_ranges: Vec<_> = mapped
            .make_matcher(Span::new(&target[..]), "seed")
            .map(|m| m.range())
            .collect();

        assert_eq!(plain_ranges, mapped_ranges);
    }
}
