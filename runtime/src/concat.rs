use std::fmt::Display;
use std::iter::FusedIterator;

use crate::{MandatoryPrefix, Pattern, PatternMatch, Prefixed, Span};

/// Matches `first` immediately followed by `second`.
///
/// Matches are produced depth-first: every match of `second` following a
/// given match of `first` is produced before `first` is advanced to its next
/// candidate. Captures produced by `first` seed `second`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<E, A, B> Prefixed<E> for Concat<A, B>
where
    A: Prefixed<E>,
    B: Prefixed<E>,
{
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        self.first
            .mandatory_prefix()
            .followed_by(|| self.second.mandatory_prefix())
    }
}

impl<'a, E, C, A, B> Pattern<'a, E, C> for Concat<A, B>
where
    E: 'a,
    C: Clone,
    A: Pattern<'a, E, C> + 'a,
    B: Pattern<'a, E, C> + 'a,
{
    type Matcher = ConcatMatcher<'a, E, C, A, B>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher {
        ConcatMatcher {
            second_pattern: &self.second,
            target,
            first: self.first.make_matcher(target, captures),
            second: None,
        }
    }
}

impl<A: Display, B: Display> Display for Concat<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

/// The matcher of a [Concat] pattern.
///
/// Holds the matcher of the first subpattern and, once it has produced a
/// candidate, a matcher of the second subpattern anchored at that candidate's
/// end.
pub struct ConcatMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
    second_pattern: &'a B,
    target: Span<'a, E>,
    first: A::Matcher,
    second: Option<B::Matcher>,
}

impl<'a, E, C, A, B> Clone for ConcatMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            second_pattern: self.second_pattern,
            target: self.target,
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<'a, E, C, A, B> Iterator for ConcatMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(second_match) = self.second.as_mut().and_then(Iterator::next) {
                let (contents, captures) = second_match.into_parts();
                return Some(PatternMatch::new(
                    self.target.prefix_to(contents.end()),
                    captures,
                ));
            }

            // the current candidate of `first` is spent, bump it forward.
            let (contents, captures) = self.first.next()?.into_parts();
            self.second = Some(
                self.second_pattern
                    .make_matcher(self.target.suffix_from(contents.end()), captures),
            );
        }
    }
}

impl<'a, E, C, A, B> FusedIterator for ConcatMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
}
