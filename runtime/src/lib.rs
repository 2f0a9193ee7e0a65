//! Provides a library of composable, backtracking matcher combinators that
//! find every occurrence of a structural pattern inside any slice of
//! comparable elements.
//!
//! Patterns are assembled from leaves (literal runs and element predicates)
//! and structural combinators (concatenation, alternation and greedy
//! repetition), optionally threading a caller-defined capture payload
//! through the match.
//!
//! # Example
//!
//! ```
//! use pattern_runtime::prelude::*;
//!
//! // Either `hi` or `hello`.
//! let greeting = literal(b"hi") | literal(b"hello");
//! let target = "hello, hi".as_bytes();
//!
//! let ranges: Vec<_> = target.ranges(&greeting).collect();
//! assert_eq!(vec![0..5, 7..9], ranges);
//!
//! // `h` followed by one or more of `i` or `o`.
//! let hiho = literal(b"h") + one_of(*b"io").one_or_more();
//! assert_eq!(Some(0..3), "hoi".as_bytes().first_range(&hiho));
//! ```
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

pub mod alternation;
pub mod capture;
pub mod combinator;
pub mod concat;
pub mod error;
pub mod floating;
pub mod leaf;
pub mod matcher;
pub mod repetition;
pub mod search;
pub mod skipper;
pub mod trace;

pub use alternation::Alternation;
pub use capture::{Capture, CaptureInto, CaptureMap, FieldLens, Lens};
pub use combinator::Combinator;
pub use concat::Concat;
pub use error::PatternError;
pub use floating::FloatingStart;
pub use leaf::{Literal, Predicate};
pub use matcher::{Matcher, SimpleMatcher};
pub use repetition::{Quantity, Repeat};
pub use search::{MatchCollection, MatchCursor, Matches, Ranges, Search};
pub use trace::{LogObserver, TraceObserver, Traced};

/// Commonly used types, traits and constructors.
pub mod prelude {
    pub use crate::capture::{FieldLens, Lens};
    pub use crate::combinator::{
        any, capture, capture_from, literal, none_of, one_of, predicate, within, Combinator,
    };
    pub use crate::search::Search;
    pub use crate::{Element, MandatoryPrefix, Pattern, PatternMatch, Prefixed, Span};
}

/// Defines the requirements of a type that can be matched as an element of a
/// target sequence.
pub trait Element: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Element for T {}

/// A borrowed sub-range of a target sequence.
///
/// Positions are absolute offsets into the full haystack, so a `Span` taken
/// from deep inside a match still reports where it sits in the original
/// target.
pub struct Span<'a, E> {
    haystack: &'a [E],
    start: usize,
    end: usize,
}

impl<'a, E> Span<'a, E> {
    /// Returns a span covering the entire haystack.
    pub fn new(haystack: &'a [E]) -> Self {
        Self {
            haystack,
            start: 0,
            end: haystack.len(),
        }
    }

    /// Returns a span covering `range` of the haystack, or `None` if the range
    /// falls outside of it.
    pub fn with_range(haystack: &'a [E], range: Range<usize>) -> Option<Self> {
        (range.start <= range.end && range.end <= haystack.len()).then_some(Self {
            haystack,
            start: range.start,
            end: range.end,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The full sequence this span was taken from.
    pub fn haystack(&self) -> &'a [E] {
        self.haystack
    }

    /// The elements covered by this span.
    pub fn as_slice(&self) -> &'a [E] {
        &self.haystack[self.start..self.end]
    }

    pub fn first(&self) -> Option<&'a E> {
        self.as_slice().first()
    }

    /// Returns the span from `pos` to the end of this span.
    ///
    /// `pos` must lie within `[start, end]`.
    pub fn suffix_from(&self, pos: usize) -> Self {
        debug_assert!(self.start <= pos && pos <= self.end);
        Self {
            haystack: self.haystack,
            start: pos,
            end: self.end,
        }
    }

    /// Returns the span from the start of this span up to `pos`.
    ///
    /// `pos` must lie within `[start, end]`.
    pub fn prefix_to(&self, pos: usize) -> Self {
        debug_assert!(self.start <= pos && pos <= self.end);
        Self {
            haystack: self.haystack,
            start: self.start,
            end: pos,
        }
    }

    /// Returns the first `count` elements of the span, or `None` if the span
    /// is shorter than that.
    pub fn take(&self, count: usize) -> Option<Self> {
        (count <= self.len()).then(|| self.prefix_to(self.start + count))
    }

    /// Offsets `pos` by `count` positions, clamped to the end of the span.
    pub fn offset_clamped(&self, pos: usize, count: usize) -> usize {
        pos.saturating_add(count).min(self.end)
    }
}

impl<'a, E> Clone for Span<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for Span<'a, E> {}

impl<'a, E> Default for Span<'a, E> {
    fn default() -> Self {
        Self {
            haystack: &[],
            start: 0,
            end: 0,
        }
    }
}

impl<'a, E: PartialEq> PartialEq for Span<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        self.range() == other.range() && self.as_slice() == other.as_slice()
    }
}

impl<'a, E: Eq> Eq for Span<'a, E> {}

impl<'a, E: Debug> Debug for Span<'a, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("range", &self.range())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// A single match of a pattern: the matched sub-range of the target and the
/// capture payload built up while matching it.
#[derive(Debug, PartialEq)]
pub struct PatternMatch<'a, E, C> {
    contents: Span<'a, E>,
    captures: C,
}

impl<'a, E, C> PatternMatch<'a, E, C> {
    #[must_use]
    pub fn new(contents: Span<'a, E>, captures: C) -> Self {
        Self { contents, captures }
    }

    pub fn contents(&self) -> Span<'a, E> {
        self.contents
    }

    pub fn captures(&self) -> &C {
        &self.captures
    }

    pub fn into_captures(self) -> C {
        self.captures
    }

    pub fn into_parts(self) -> (Span<'a, E>, C) {
        (self.contents, self.captures)
    }

    /// The absolute positions of the match within the target.
    pub fn range(&self) -> Range<usize> {
        self.contents.range()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl<'a, E, C: Clone> Clone for PatternMatch<'a, E, C> {
    fn clone(&self) -> Self {
        Self {
            contents: self.contents,
            captures: self.captures.clone(),
        }
    }
}

/// Elements that must appear at the start of any successful match.
///
/// `continuable` signals that the pattern fully constrains its own prefix, so
/// a pattern following it in a concatenation may append its own prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryPrefix<E> {
    pub elements: Vec<E>,
    pub continuable: bool,
}

impl<E> MandatoryPrefix<E> {
    /// A prefix that promises nothing. Always sound.
    pub fn none() -> Self {
        Self {
            elements: vec![],
            continuable: false,
        }
    }

    /// A prefix made of a fixed run of elements that may be extended.
    pub fn literal(elements: Vec<E>) -> Self {
        Self {
            elements,
            continuable: true,
        }
    }

    /// Appends the prefix of a following pattern, if this prefix permits it.
    pub fn followed_by(self, next: impl FnOnce() -> Self) -> Self {
        if !self.continuable {
            return self;
        }

        let Self {
            mut elements,
            continuable,
        } = next();
        let mut combined = self.elements;
        combined.append(&mut elements);

        Self {
            elements: combined,
            continuable,
        }
    }
}

impl<E: PartialEq> MandatoryPrefix<E> {
    /// The longest leading run shared by two prefixes. Never continuable.
    pub fn common(self, other: Self) -> Self {
        let shared = self
            .elements
            .into_iter()
            .zip(other.elements)
            .take_while(|(lhs, rhs)| lhs == rhs)
            .map(|(lhs, _)| lhs)
            .collect();

        Self {
            elements: shared,
            continuable: false,
        }
    }
}

/// Reports the mandatory prefix of a pattern for search acceleration.
pub trait Prefixed<E> {
    /// Returns the elements that must be present at the start of any target
    /// this pattern can match.
    ///
    /// Returning [MandatoryPrefix::none] is always correct, only slower.
    fn mandatory_prefix(&self) -> MandatoryPrefix<E>;
}

/// Conforming types describe a pattern of elements in a slice.
///
/// A pattern is an immutable factory of [Matcher]s. Each matcher enumerates
/// every match anchored at the start of the target it was created for, from
/// most preferred to least preferred.
pub trait Pattern<'a, E: 'a, C>: Prefixed<E> {
    type Matcher: Matcher<'a, E, C>;

    /// Creates a matcher which iterates over all possible matches for this
    /// pattern anchored at `target.start()`, seeded with `captures`.
    ///
    /// Every match it returns has `target.start()` as its start.
    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher;
}
