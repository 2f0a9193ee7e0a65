//! Enumerates every match of a pattern within a target.
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::floating::{FloatingMatcher, FloatingStart};
use crate::{Element, Pattern, PatternMatch, Span};

/// All non-overlapping matches of a pattern within a target, in order of
/// their start position.
///
/// Matches are found lazily. The collection can be walked any number of
/// times, either as an iterator or with explicit [MatchCursor]s, and each
/// walk starts the search over.
///
/// # Example
///
/// ```
/// use pattern_runtime::prelude::*;
///
/// let hih = literal(b"h") + literal(b"i").zero_or_more();
/// let target = "hih".as_bytes();
/// let matches = target.matches(&hih);
///
/// let start = matches.start_cursor();
/// assert_eq!(Some(0..2), start.get().map(|m| m.range()));
///
/// let second = start.successor();
/// assert_eq!(Some(2..3), second.get().map(|m| m.range()));
/// assert!(second.successor() == matches.end_cursor());
/// ```
pub struct MatchCollection<'a, E: Element, C, P> {
    floating: FloatingStart<'a, E, P>,
    target: Span<'a, E>,
    captures: C,
}

impl<'a, E, C, P> MatchCollection<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    pub fn new(pattern: &'a P, target: Span<'a, E>, captures: C) -> Self {
        log::debug!(
            "searching {}..{} with a mandatory prefix of {} elements",
            target.start(),
            target.end(),
            pattern.mandatory_prefix().elements.len()
        );

        Self {
            floating: FloatingStart::new(pattern),
            target,
            captures,
        }
    }

    fn make_matcher(&self) -> FloatingMatcher<'a, E, C, P> {
        self.floating.make_matcher(self.target, self.captures.clone())
    }

    /// Returns a cursor positioned at the first match, or the end cursor if
    /// there is none.
    pub fn start_cursor(&self) -> MatchCursor<'a, E, C, P> {
        MatchCursor::advance(0, self.make_matcher())
    }

    pub fn end_cursor(&self) -> MatchCursor<'a, E, C, P> {
        MatchCursor::end()
    }

    pub fn iter(&self) -> Matches<'a, E, C, P> {
        Matches {
            matcher: self.make_matcher(),
        }
    }

    /// Returns an iterator over the range of each match.
    pub fn ranges(&self) -> Ranges<'a, E, C, P> {
        self.iter().map(range_of::<E, C> as fn(_) -> _)
    }
}

fn range_of<E, C>(found: PatternMatch<'_, E, C>) -> Range<usize> {
    found.range()
}

impl<'a, E, C, P> IntoIterator for MatchCollection<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;
    type IntoIter = Matches<'a, E, C, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'c, E, C, P> IntoIterator for &'c MatchCollection<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;
    type IntoIter = Matches<'a, E, C, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A position within a [MatchCollection].
///
/// A cursor holds the match at its position along with the search state
/// needed to find the match after it. Cursors are ordered by how many
/// matches precede them, and the end cursor follows every real position.
pub struct MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
    counter: usize,
    state: Option<(PatternMatch<'a, E, C>, FloatingMatcher<'a, E, C, P>)>,
}

impl<'a, E, C, P> MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    fn advance(counter: usize, mut matcher: FloatingMatcher<'a, E, C, P>) -> Self {
        match matcher.next() {
            Some(found) => Self {
                counter,
                state: Some((found, matcher)),
            },
            None => Self::end(),
        }
    }

    fn end() -> Self {
        Self {
            counter: usize::MAX,
            state: None,
        }
    }

    /// The match at this position, or `None` at the end.
    pub fn get(&self) -> Option<&PatternMatch<'a, E, C>> {
        self.state.as_ref().map(|(found, _)| found)
    }

    pub fn is_end(&self) -> bool {
        self.state.is_none()
    }

    /// Returns the cursor following this one. The successor of the end
    /// cursor is the end cursor.
    pub fn successor(&self) -> Self {
        match &self.state {
            Some((_, matcher)) => Self::advance(self.counter + 1, matcher.clone()),
            None => Self::end(),
        }
    }
}

impl<'a, E, C, P> Clone for MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            counter: self.counter,
            state: self.state.clone(),
        }
    }
}

impl<'a, E, C, P> PartialEq for MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter
    }
}

impl<'a, E, C, P> Eq for MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
}

impl<'a, E, C, P> PartialOrd for MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, E, C, P> Ord for MatchCursor<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.counter.cmp(&other.counter)
    }
}

/// An iterator over the matches of a [MatchCollection].
pub struct Matches<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
    matcher: FloatingMatcher<'a, E, C, P>,
}

impl<'a, E, C, P> Clone for Matches<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
        }
    }
}

impl<'a, E, C, P> Iterator for Matches<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matcher.next()
    }
}

impl<'a, E, C, P> FusedIterator for Matches<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
}

/// An iterator over the ranges of the matches of a [MatchCollection].
pub type Ranges<'a, E, C, P> =
    std::iter::Map<Matches<'a, E, C, P>, fn(PatternMatch<'a, E, C>) -> Range<usize>>;

/// Searches a slice for matches of a pattern.
pub trait Search<E: Element> {
    /// Returns every match of `pattern`, seeding each with `captures`.
    fn matches_with<'a, C, P>(&'a self, pattern: &'a P, captures: C) -> MatchCollection<'a, E, C, P>
    where
        E: 'a,
        C: Clone,
        P: Pattern<'a, E, C>;

    fn matches<'a, P>(&'a self, pattern: &'a P) -> MatchCollection<'a, E, (), P>
    where
        E: 'a,
        P: Pattern<'a, E, ()>,
    {
        self.matches_with(pattern, ())
    }

    fn first_match<'a, P>(&'a self, pattern: &'a P) -> Option<PatternMatch<'a, E, ()>>
    where
        E: 'a,
        P: Pattern<'a, E, ()>,
    {
        self.matches(pattern).iter().next()
    }

    fn ranges<'a, P>(&'a self, pattern: &'a P) -> Ranges<'a, E, (), P>
    where
        E: 'a,
        P: Pattern<'a, E, ()>,
    {
        self.matches(pattern).ranges()
    }

    fn first_range<'a, P>(&'a self, pattern: &'a P) -> Option<Range<usize>>
    where
        E: 'a,
        P: Pattern<'a, E, ()>,
    {
        self.first_match(pattern).map(|found| found.range())
    }

    /// Returns the position at which the first match begins.
    fn position_of<'a, P>(&'a self, pattern: &'a P) -> Option<usize>
    where
        E: 'a,
        P: Pattern<'a, E, ()>,
    {
        self.first_range(pattern).map(|range| range.start)
    }

    fn contains_match<'a, P>(&'a self, pattern: &'a P) -> bool
    where
        E: 'a,
        P: Pattern<'a, E, ()>,
    {
        self.first_match(pattern).is_some()
    }
}

impl<E: Element> Search<E> for [E] {
    fn matches_with<'a, C, P>(&'a self, pattern: &'a P, captures: C) -> MatchCollection<'a, E, C, P>
    where
        E: 'a,
        C: Clone,
        P: Pattern<'a, E, C>,
    {
        MatchCollection::new(pattern, Span::new(self), captures)
    }
}
