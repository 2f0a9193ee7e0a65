//! Builder functions and operators for assembling patterns.
//!
//! The free functions construct leaf and capture patterns, and the
//! [Combinator] trait, implemented for every pattern type, composes them.
//! `a + b` concatenates two patterns, `a | b` tries `a` before `b`, and `!p`
//! complements an element predicate.
use std::collections::HashSet;
use std::fmt::Display;
use std::ops::{Add, BitOr, RangeBounds, RangeInclusive};

use crate::capture::{Capture, CaptureInto, CaptureMap, Lens};
use crate::leaf::{Literal, Predicate};
use crate::repetition::{Quantity, Repeat};
use crate::trace::{TraceObserver, Traced};
use crate::{Alternation, Concat, Element, PatternError};

/// Matches a fixed run of elements.
pub fn literal<E: Clone>(needle: &[E]) -> Literal<E> {
    Literal::new(needle.to_vec())
}

/// Matches any single element accepted by `test`.
pub fn predicate<E, F>(test: F) -> Predicate<F>
where
    F: Fn(&E) -> bool,
{
    Predicate::new(test)
}

/// Matches any single element.
pub fn any<E>() -> Predicate<impl Fn(&E) -> bool + Clone> {
    Predicate::new(|_: &E| true)
}

/// Matches any single element of `elements`.
///
/// # Example
///
/// ```
/// use pattern_runtime::prelude::*;
///
/// let vowel = one_of("aeiou".chars());
/// let target: Vec<char> = "rhythm and blues".chars().collect();
///
/// assert_eq!(Some(7), target.position_of(&vowel));
/// ```
pub fn one_of<E, I>(elements: I) -> Predicate<impl Fn(&E) -> bool + Clone>
where
    E: Element,
    I: IntoIterator<Item = E>,
{
    let set: HashSet<E> = elements.into_iter().collect();
    Predicate::new(move |elem: &E| set.contains(elem))
}

/// Matches any single element not in `elements`.
pub fn none_of<E, I>(elements: I) -> Predicate<impl Fn(&E) -> bool + Clone>
where
    E: Element,
    I: IntoIterator<Item = E>,
{
    !one_of(elements)
}

/// Matches any single element within an inclusive range.
pub fn within<E>(range: RangeInclusive<E>) -> Predicate<impl Fn(&E) -> bool + Clone>
where
    E: PartialOrd + Clone,
{
    Predicate::new(move |elem: &E| range.contains(elem))
}

/// Captures the span matched by `subpattern`.
pub fn capture<P>(subpattern: P) -> Capture<P, ()> {
    Capture::new(subpattern, ())
}

/// Captures the span matched by `subpattern`, running it from the starting
/// payload `seed`.
pub fn capture_from<P, S>(subpattern: P, seed: S) -> Capture<P, S> {
    Capture::new(subpattern, seed)
}

/// Composition methods available on every pattern.
pub trait Combinator: Sized {
    /// Matches `self` immediately followed by `second`.
    fn then<B>(self, second: B) -> Concat<Self, B> {
        Concat::new(self, second)
    }

    /// Matches `self`, then, once its matches are exhausted, `alternate`.
    fn or<B>(self, alternate: B) -> Alternation<Self, B> {
        Alternation::new(self, alternate)
    }

    fn zero_or_more(self) -> Repeat<Self> {
        Repeat::with_quantity(self, Quantity::at_least(0))
    }

    fn one_or_more(self) -> Repeat<Self> {
        Repeat::with_quantity(self, Quantity::at_least(1))
    }

    fn optional(self) -> Repeat<Self> {
        Repeat::with_quantity(self, Quantity::zero_or_one())
    }

    fn exactly(self, count: usize) -> Repeat<Self> {
        Repeat::with_quantity(self, Quantity::exactly(count))
    }

    /// Repeats `self` a number of times within `counts`, i.e. `2..5` or `3..`.
    ///
    /// # Example
    ///
    /// ```
    /// use pattern_runtime::prelude::*;
    /// use pattern_runtime::PatternError;
    ///
    /// let pattern = literal(b"ab").repeating(2..)?;
    /// assert_eq!(Some(1..7), "cabababc".as_bytes().first_range(&pattern));
    ///
    /// assert!(literal(b"ab").repeating(3..=1).is_err());
    /// # Ok::<(), PatternError>(())
    /// ```
    fn repeating<R: RangeBounds<usize>>(self, counts: R) -> Result<Repeat<Self>, PatternError> {
        Repeat::new(self, counts)
    }

    /// Runs `self` on the field of the payload addressed by `lens`.
    fn into_field<L: Lens>(self, lens: L) -> CaptureInto<Self, L> {
        CaptureInto::new(self, lens)
    }

    /// Runs `self` from the starting payload `seed`, then transforms each
    /// resulting payload with `transform`.
    fn map_captures<S, F, T>(self, seed: S, transform: F) -> CaptureMap<Self, S, F>
    where
        F: Fn(S) -> T,
    {
        CaptureMap::new(self, seed, transform)
    }

    /// Reports the progress of matching `self` to `observer`.
    fn traced<O: TraceObserver>(self, observer: O) -> Traced<Self, O>
    where
        Self: Display,
    {
        Traced::new(self, observer)
    }
}

macro_rules! impl_combinator {
    ($($pattern:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Combinator for $pattern<$($param),+> {}

            impl<$($param,)+ Rhs> Add<Rhs> for $pattern<$($param),+> {
                type Output = Concat<Self, Rhs>;

                fn add(self, rhs: Rhs) -> Self::Output {
                    Concat::new(self, rhs)
                }
            }

            impl<$($param,)+ Rhs> BitOr<Rhs> for $pattern<$($param),+> {
                type Output = Alternation<Self, Rhs>;

                fn bitor(self, rhs: Rhs) -> Self::Output {
                    Alternation::new(self, rhs)
                }
            }
        )+
    };
}

impl_combinator!(
    Literal<E>,
    Predicate<F>,
    Concat<A, B>,
    Alternation<A, B>,
    Repeat<P>,
    Capture<P, S>,
    CaptureInto<P, L>,
    CaptureMap<P, S, F>,
    Traced<P, O>,
);
