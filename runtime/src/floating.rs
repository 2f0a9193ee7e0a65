//! Searches for matches of an anchored pattern at every position of a target.
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::skipper::SearchSkipper;
use crate::{Element, Pattern, PatternMatch, Prefixed, Span};

/// Wraps an anchored pattern so that it matches anywhere in a target.
///
/// The mandatory prefix of the subpattern is compiled into a
/// [SearchSkipper] once, and shared by every matcher created from this
/// wrapper, so positions that cannot begin a match are skipped without
/// running the subpattern.
///
/// Matches returned by its matcher don't overlap and are returned in order
/// of their start position.
pub struct FloatingStart<'a, E: Element, P> {
    subpattern: &'a P,
    skipper: Arc<SearchSkipper<E>>,
}

impl<'a, E: Element, P: Prefixed<E>> FloatingStart<'a, E, P> {
    pub fn new(subpattern: &'a P) -> Self {
        let prefix = subpattern.mandatory_prefix();

        Self {
            subpattern,
            skipper: Arc::new(SearchSkipper::new(&prefix.elements)),
        }
    }
}

impl<'a, E: Element, P> FloatingStart<'a, E, P> {
    pub fn subpattern(&self) -> &'a P {
        self.subpattern
    }

    /// Returns a matcher which yields each non-overlapping match of the
    /// subpattern within `target`, seeding every attempt with `captures`.
    pub fn make_matcher<C>(&self, target: Span<'a, E>, captures: C) -> FloatingMatcher<'a, E, C, P>
    where
        C: Clone,
        P: Pattern<'a, E, C>,
    {
        FloatingMatcher {
            subpattern: self.subpattern,
            skipper: Arc::clone(&self.skipper),
            captures,
            window: target,
            exhausted: false,
        }
    }
}

impl<'a, E: Element, P> Clone for FloatingStart<'a, E, P> {
    fn clone(&self) -> Self {
        Self {
            subpattern: self.subpattern,
            skipper: Arc::clone(&self.skipper),
        }
    }
}

/// The matcher of a [FloatingStart] wrapper.
///
/// `window` is the remainder of the target not yet searched. Each call moves
/// its start forward, first by skipping positions that can't begin the
/// mandatory prefix, then past any match found.
pub struct FloatingMatcher<'a, E, C, P>
where
    E: Element + 'a,
    P: Pattern<'a, E, C>,
{
    subpattern: &'a P,
    skipper: Arc<SearchSkipper<E>>,
    captures: C,
    window: Span<'a, E>,
    exhausted: bool,
}

impl<'a, E, C, P> FloatingMatcher<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    fn skip_ahead_to_matching_prefix(&mut self) {
        let start = self.window.start();
        let potential_match = self.skipper.skip_index(self.window);

        if potential_match != start {
            log::trace!("skipped from {} to {}", start, potential_match);
            self.window = self.window.suffix_from(potential_match);
        }
    }

    /// Moves the window to start one past `pos`. Returns false if `pos` is
    /// already the end of the window.
    fn bump_after(&mut self, pos: usize) -> bool {
        if pos == self.window.end() {
            return false;
        }

        self.window = self.window.suffix_from(pos + 1);
        true
    }

    /// Moves the window past a match so it isn't found again.
    fn bump_past(&mut self, found: &PatternMatch<'a, E, C>) {
        let end = found.contents().end();

        if !found.is_empty() {
            self.window = self.window.suffix_from(end);
        } else if !self.bump_after(end) {
            // an empty match at the very end leaves nowhere left to search.
            self.exhausted = true;
        }
    }
}

impl<'a, E, C, P> Clone for FloatingMatcher<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            subpattern: self.subpattern,
            skipper: Arc::clone(&self.skipper),
            captures: self.captures.clone(),
            window: self.window,
            exhausted: self.exhausted,
        }
    }
}

impl<'a, E, C, P> Iterator for FloatingMatcher<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        loop {
            self.skip_ahead_to_matching_prefix();

            let mut submatcher = self
                .subpattern
                .make_matcher(self.window, self.captures.clone());
            if let Some(found) = submatcher.next() {
                self.bump_past(&found);
                return Some(found);
            }

            if !self.bump_after(self.window.start()) {
                self.exhausted = true;
                return None;
            }

            log::trace!("bumped along to {}", self.window.start());
        }
    }
}

impl<'a, E, C, P> FusedIterator for FloatingMatcher<'a, E, C, P>
where
    E: Element + 'a,
    C: Clone,
    P: Pattern<'a, E, C>,
{
}
