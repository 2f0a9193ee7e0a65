//! Leaf patterns: fixed runs of elements and single-element predicates.
use std::fmt::{Debug, Display};

use crate::{MandatoryPrefix, Pattern, PatternMatch, Prefixed, SimpleMatcher, Span};

/// Matches a fixed run of elements.
///
/// # Example
///
/// ```
/// use pattern_runtime::prelude::*;
///
/// let hello = literal(b"hello");
/// let ranges: Vec<_> = "hello hello hello".as_bytes().ranges(&hello).collect();
///
/// assert_eq!(vec![0..5, 6..11, 12..17], ranges);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal<E> {
    needle: Vec<E>,
}

impl<E> Literal<E> {
    #[must_use]
    pub fn new(needle: Vec<E>) -> Self {
        Self { needle }
    }

    pub fn needle(&self) -> &[E] {
        &self.needle
    }
}

impl<E: Clone> Prefixed<E> for Literal<E> {
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        MandatoryPrefix::literal(self.needle.clone())
    }
}

impl<'a, E, C> Pattern<'a, E, C> for Literal<E>
where
    E: PartialEq + Clone + 'a,
    C: Clone,
{
    type Matcher = SimpleMatcher<'a, E, C>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher {
        let found = target
            .take(self.needle.len())
            .filter(|head| head.as_slice() == self.needle.as_slice())
            .map(|head| PatternMatch::new(head, captures));

        SimpleMatcher::new(found)
    }
}

impl<E: Debug> Display for Literal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.needle)
    }
}

/// Matches any single element accepted by a predicate.
///
/// Predicates can be complemented with `!`, which flips the acceptance of the
/// wrapped test.
#[derive(Clone)]
pub struct Predicate<F> {
    predicate: F,
    negated: bool,
}

impl<F> Predicate<F> {
    #[must_use]
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            negated: false,
        }
    }

    /// Returns a predicate accepting exactly the elements this one rejects.
    pub fn negate(self) -> Self {
        Self {
            predicate: self.predicate,
            negated: !self.negated,
        }
    }

    /// Tests a single element against the predicate.
    pub fn accepts<E>(&self, elem: &E) -> bool
    where
        F: Fn(&E) -> bool,
    {
        (self.predicate)(elem) != self.negated
    }
}

impl<F> std::ops::Not for Predicate<F> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl<E, F> Prefixed<E> for Predicate<F> {
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        MandatoryPrefix::none()
    }
}

impl<'a, E, C, F> Pattern<'a, E, C> for Predicate<F>
where
    E: 'a,
    C: Clone,
    F: Fn(&E) -> bool + 'a,
{
    type Matcher = SimpleMatcher<'a, E, C>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher {
        let found = target
            .first()
            .filter(|elem| self.accepts(*elem))
            .and_then(|_| target.take(1))
            .map(|head| PatternMatch::new(head, captures));

        SimpleMatcher::new(found)
    }
}

impl<F> Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("negated", &self.negated)
            .finish_non_exhaustive()
    }
}

impl<F> Display for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "!any(..)")
        } else {
            write!(f, "any(..)")
        }
    }
}
