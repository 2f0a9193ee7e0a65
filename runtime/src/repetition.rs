//! Greedy, bounded repetition of a subpattern.
use std::fmt::Display;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::{MandatoryPrefix, Pattern, PatternError, PatternMatch, Prefixed, Span};

/// An inclusive range of permitted repetition counts. `max` of `None` is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    min: usize,
    max: Option<usize>,
}

impl Quantity {
    /// Instantiates a new count range, rejecting a minimum above the maximum.
    pub fn new(min: usize, max: Option<usize>) -> Result<Self, PatternError> {
        match max {
            Some(max) if min > max => Err(PatternError::InvertedCountRange { min, max }),
            _ => Ok(Self { min, max }),
        }
    }

    pub const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn zero_or_one() -> Self {
        Self {
            min: 0,
            max: Some(1),
        }
    }

    /// Converts any standard range of counts, i.e. `2..5`, `1..`, `..=3`.
    ///
    /// # Example
    ///
    /// ```
    /// use pattern_runtime::{PatternError, Quantity};
    ///
    /// assert_eq!(Quantity::new(2, Some(4)), Quantity::from_bounds(2..5));
    /// assert_eq!(Ok(Quantity::at_least(1)), Quantity::from_bounds(1..));
    /// assert!(matches!(
    ///     Quantity::from_bounds(3..3),
    ///     Err(PatternError::EmptyCountRange(_))
    /// ));
    /// ```
    pub fn from_bounds<R: RangeBounds<usize>>(counts: R) -> Result<Self, PatternError> {
        let min = match counts.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n
                .checked_add(1)
                .ok_or_else(|| PatternError::EmptyCountRange(format!("{}..", n)))?,
            Bound::Unbounded => 0,
        };
        let max = match counts.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) if n > min => Some(n - 1),
            Bound::Excluded(&n) => {
                return Err(PatternError::EmptyCountRange(format!("{}..{}", min, n)))
            }
            Bound::Unbounded => None,
        };

        Self::new(min, max)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns true if `count` repetitions may be followed by another.
    pub fn admits_more_than(&self, count: usize) -> bool {
        self.max.map_or(true, |max| count < max)
    }

    /// Returns true if `count` repetitions meet the minimum.
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        count >= self.min
    }

    pub fn is_exact(&self) -> bool {
        self.max == Some(self.min)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}

/// Matches a subpattern repeated a number of times within a count range,
/// preferring as many repetitions as possible.
///
/// A repetition instance that matches zero elements ends the repetition once
/// the minimum count has been met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<P> {
    subpattern: P,
    counts: Quantity,
}

impl<P> Repeat<P> {
    /// Repeats `subpattern` within any standard range of counts.
    pub fn new<R: RangeBounds<usize>>(subpattern: P, counts: R) -> Result<Self, PatternError> {
        Quantity::from_bounds(counts).map(|counts| Self::with_quantity(subpattern, counts))
    }

    #[must_use]
    pub fn with_quantity(subpattern: P, counts: Quantity) -> Self {
        Self { subpattern, counts }
    }

    pub fn counts(&self) -> Quantity {
        self.counts
    }
}

impl<E, P> Prefixed<E> for Repeat<P>
where
    E: Clone,
    P: Prefixed<E>,
{
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        if self.counts.min == 0 {
            return MandatoryPrefix::none();
        }

        let single = self.subpattern.mandatory_prefix();
        if !single.continuable {
            return single;
        }

        let elements = (0..self.counts.min)
            .flat_map(|_| single.elements.iter().cloned())
            .collect();

        MandatoryPrefix {
            elements,
            continuable: self.counts.is_exact(),
        }
    }
}

impl<'a, E, C, P> Pattern<'a, E, C> for Repeat<P>
where
    E: Clone + 'a,
    C: Clone,
    P: Pattern<'a, E, C> + 'a,
{
    type Matcher = RepeatMatcher<'a, E, C, P>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher {
        RepeatMatcher {
            pattern: self,
            target,
            seed: Some(captures),
            frames: vec![],
        }
    }
}

impl<P: Display> Display for Repeat<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}).repeating({})", self.subpattern, self.counts)
    }
}

/// One consumed repetition instance: the submatcher that produced it, along
/// with the position and captures it started from.
#[derive(Clone)]
struct Frame<M, C> {
    matcher: M,
    start: usize,
    captures: C,
}

/// The matcher of a [Repeat] pattern.
///
/// The stack of frames is the backtracking frontier. Each frame owns a
/// snapshot of the submatcher for one repetition instance, so retrying the
/// last instance never disturbs the instances beneath it.
pub struct RepeatMatcher<'a, E, C, P>
where
    E: 'a,
    P: Pattern<'a, E, C>,
{
    pattern: &'a Repeat<P>,
    target: Span<'a, E>,
    /// Initial captures, present until the first call.
    seed: Option<C>,
    frames: Vec<Frame<P::Matcher, C>>,
}

impl<'a, E, C, P> RepeatMatcher<'a, E, C, P>
where
    E: 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    /// Pushes as many further repetition instances as possible, starting at
    /// `end`. Returns the end position and captures after the last one.
    fn extend(&mut self, mut end: usize, mut captures: C, mut after_empty: bool) -> (usize, C) {
        let pattern = self.pattern;

        while pattern.counts.admits_more_than(self.frames.len())
            && !(after_empty && pattern.counts.is_satisfied_by(self.frames.len()))
        {
            let mut submatcher = pattern
                .subpattern
                .make_matcher(self.target.suffix_from(end), captures.clone());
            let (contents, next_captures) = match submatcher.next() {
                Some(found) => found.into_parts(),
                None => break,
            };

            self.frames.push(Frame {
                matcher: submatcher,
                start: end,
                captures,
            });
            after_empty = contents.is_empty();
            end = contents.end();
            captures = next_captures;
        }

        (end, captures)
    }

    fn covering(&self, end: usize, captures: C) -> PatternMatch<'a, E, C> {
        PatternMatch::new(self.target.prefix_to(end), captures)
    }

    /// Produces the next candidate regardless of the minimum count.
    fn next_ignoring_minimum(&mut self) -> Option<PatternMatch<'a, E, C>> {
        if let Some(captures) = self.seed.take() {
            let (end, captures) = self.extend(self.target.start(), captures, false);
            return Some(self.covering(end, captures));
        }

        let mut frame = self.frames.pop()?;
        match frame.matcher.next() {
            Some(found) => {
                let (contents, captures) = found.into_parts();
                self.frames.push(frame);
                let (end, captures) = self.extend(contents.end(), captures, contents.is_empty());
                Some(self.covering(end, captures))
            }
            // this instance has no more choices, so drop it.
            None => Some(self.covering(frame.start, frame.captures)),
        }
    }
}

impl<'a, E, C, P> Clone for RepeatMatcher<'a, E, C, P>
where
    E: 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern,
            target: self.target,
            seed: self.seed.clone(),
            frames: self.frames.clone(),
        }
    }
}

impl<'a, E, C, P> Iterator for RepeatMatcher<'a, E, C, P>
where
    E: 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.next_ignoring_minimum()?;
            if self.pattern.counts.is_satisfied_by(self.frames.len()) {
                return Some(candidate);
            }
        }
    }
}

impl<'a, E, C, P> FusedIterator for RepeatMatcher<'a, E, C, P>
where
    E: 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
}
