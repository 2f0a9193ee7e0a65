use std::fmt::Display;
use std::iter::FusedIterator;

use crate::{MandatoryPrefix, Pattern, PatternMatch, Prefixed, Span};

/// Ordered choice between two patterns.
///
/// Every match of `primary` is produced before any match of `alternate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternation<A, B> {
    primary: A,
    alternate: B,
}

impl<A, B> Alternation<A, B> {
    #[must_use]
    pub fn new(primary: A, alternate: B) -> Self {
        Self { primary, alternate }
    }
}

impl<E, A, B> Prefixed<E> for Alternation<A, B>
where
    E: PartialEq,
    A: Prefixed<E>,
    B: Prefixed<E>,
{
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        self.primary
            .mandatory_prefix()
            .common(self.alternate.mandatory_prefix())
    }
}

impl<'a, E, C, A, B> Pattern<'a, E, C> for Alternation<A, B>
where
    E: PartialEq + 'a,
    C: Clone,
    A: Pattern<'a, E, C> + 'a,
    B: Pattern<'a, E, C> + 'a,
{
    type Matcher = AlternationMatcher<'a, E, C, A, B>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher {
        AlternationMatcher {
            primary: Some(self.primary.make_matcher(target, captures.clone())),
            alternate: self.alternate.make_matcher(target, captures),
        }
    }
}

impl<A: Display, B: Display> Display for Alternation<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.primary, self.alternate)
    }
}

/// The matcher of an [Alternation] pattern.
///
/// While `primary` is present the matcher is trying the primary branch. Once
/// that branch is exhausted it is dropped and all further calls delegate to
/// `alternate`.
pub struct AlternationMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
    primary: Option<A::Matcher>,
    alternate: B::Matcher,
}

impl<'a, E, C, A, B> Clone for AlternationMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            primary: self.primary.clone(),
            alternate: self.alternate.clone(),
        }
    }
}

impl<'a, E, C, A, B> Iterator for AlternationMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(primary) = self.primary.as_mut() {
            match primary.next() {
                Some(found) => return Some(found),
                None => self.primary = None,
            }
        }

        self.alternate.next()
    }
}

impl<'a, E, C, A, B> FusedIterator for AlternationMatcher<'a, E, C, A, B>
where
    E: 'a,
    A: Pattern<'a, E, C>,
    B: Pattern<'a, E, C>,
{
}
