//! Prefix-skip acceleration for searching a target for the mandatory prefix
//! of a pattern.
use std::collections::HashMap;

use crate::{Element, Span};

/// Accelerates a search for a fixed run of elements using a
/// Boyer-Moore-Horspool style table of skip distances.
///
/// For every distinct element of the needle the table records the distance
/// from the end of the needle to that element's rightmost occurrence. For the
/// needle `foobar` that is `f: 5, o: 3, b: 2, a: 1, r: 0`. Elements absent
/// from the needle skip the full needle length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSkipper<E: Element> {
    offsets: HashMap<E, usize>,
    count: usize,
}

impl<E: Element> SearchSkipper<E> {
    pub fn new(needle: &[E]) -> Self {
        let mut offsets = HashMap::with_capacity(needle.len());
        for (offset, elem) in needle.iter().rev().enumerate() {
            offsets.entry(elem.clone()).or_insert(offset);
        }

        Self {
            offsets,
            count: needle.len(),
        }
    }

    /// Returns the first position in `haystack` at which the needle might
    /// begin, or `haystack.end()` if it can't begin anywhere.
    ///
    /// No occurrence of the needle begins before the returned position, but
    /// an occurrence is not guaranteed to begin at it.
    ///
    /// # Example
    ///
    /// ```
    /// use pattern_runtime::skipper::SearchSkipper;
    /// use pattern_runtime::Span;
    ///
    /// let skipper = SearchSkipper::new(b"bar");
    /// let haystack = b"foo bar";
    ///
    /// assert_eq!(4, skipper.skip_index(Span::new(&haystack[..])));
    /// ```
    pub fn skip_index(&self, haystack: Span<'_, E>) -> usize {
        if self.count == 0 {
            return haystack.start();
        }

        let elements = haystack.as_slice();
        let mut first = 0;
        while let Some(last) = elements.get(first + self.count - 1) {
            let offset = self.offsets.get(last).copied().unwrap_or(self.count);
            if offset == 0 {
                return haystack.start() + first;
            }

            first += offset;
        }

        haystack.end()
    }
}
