use std::iter::FusedIterator;

use crate::PatternMatch;

/// A stateful enumerator of the matches of a pattern anchored at a fixed
/// start position.
///
/// Matchers must provide value semantics: cloning one yields an independent
/// enumerator that neither observes nor affects the original's subsequent
/// calls. Once a matcher returns `None` it must keep returning `None`.
///
/// Any fused, clonable iterator of [PatternMatch] values is a matcher.
pub trait Matcher<'a, E: 'a, C>:
    Iterator<Item = PatternMatch<'a, E, C>> + FusedIterator + Clone
{
}

impl<'a, E: 'a, C, M> Matcher<'a, E, C> for M where
    M: Iterator<Item = PatternMatch<'a, E, C>> + FusedIterator + Clone
{
}

/// Matcher for patterns which can only match in one way, so there is no
/// backtracking frontier to explore.
///
/// # Examples
///
/// ```
/// use pattern_runtime::{PatternMatch, SimpleMatcher, Span};
///
/// let target = [1, 2, 3];
/// let span = Span::new(&target);
/// let mut matcher = SimpleMatcher::new(span.take(1).map(|head| PatternMatch::new(head, ())));
///
/// // Yields its single match.
/// assert_eq!(Some(0..1), matcher.next().map(|m| m.range()));
///
/// // And is exhausted from then on.
/// assert!(matcher.next().is_none());
/// assert!(matcher.next().is_none());
/// ```
pub struct SimpleMatcher<'a, E, C> {
    value: Option<PatternMatch<'a, E, C>>,
}

impl<'a, E, C> SimpleMatcher<'a, E, C> {
    #[must_use]
    pub fn new(value: Option<PatternMatch<'a, E, C>>) -> Self {
        Self { value }
    }
}

impl<'a, E, C: Clone> Clone for SimpleMatcher<'a, E, C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<'a, E, C> Iterator for SimpleMatcher<'a, E, C> {
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }
}

impl<'a, E, C> FusedIterator for SimpleMatcher<'a, E, C> {}
