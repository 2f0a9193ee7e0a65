//! Diagnostic tracing of pattern matching through an injected observer.
use std::fmt::Display;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{MandatoryPrefix, Pattern, PatternMatch, Prefixed, Span};

/// Receives the progress of every matcher created by a [Traced] pattern.
pub trait TraceObserver {
    /// Called when a matcher for the pattern described by `description` is
    /// created at position `start`. Returns an id that identifies that matcher
    /// in the calls that follow.
    fn started(&self, description: &str, start: usize) -> usize;

    fn matched(&self, id: usize, range: Range<usize>);

    fn exhausted(&self, id: usize);
}

impl<O: TraceObserver + ?Sized> TraceObserver for &O {
    fn started(&self, description: &str, start: usize) -> usize {
        (**self).started(description, start)
    }

    fn matched(&self, id: usize, range: Range<usize>) {
        (**self).matched(id, range)
    }

    fn exhausted(&self, id: usize) {
        (**self).exhausted(id)
    }
}

/// Forwards trace events to the `log` facade at trace level, numbering
/// matchers in the order they are created.
#[derive(Debug, Default)]
pub struct LogObserver {
    created: AtomicUsize,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceObserver for LogObserver {
    fn started(&self, description: &str, start: usize) -> usize {
        let id = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        log::trace!("{} matching {} at {}", id, description, start);
        id
    }

    fn matched(&self, id: usize, range: Range<usize>) {
        log::trace!("{}     ...matched {}..{}", id, range.start, range.end);
    }

    fn exhausted(&self, id: usize) {
        log::trace!("{}     ...done", id);
    }
}

/// Reports every matcher created for a subpattern, and each of its results,
/// to an observer.
///
/// # Example
///
/// ```
/// use pattern_runtime::prelude::*;
/// use pattern_runtime::LogObserver;
///
/// let observer = LogObserver::new();
/// let pattern = literal(b"ab").traced(&observer);
///
/// assert_eq!(Some(2..4), "xxab".as_bytes().first_range(&pattern));
/// ```
pub struct Traced<P, O> {
    subpattern: P,
    observer: O,
    description: String,
}

impl<P: Display, O> Traced<P, O> {
    #[must_use]
    pub fn new(subpattern: P, observer: O) -> Self {
        let description = subpattern.to_string();

        Self {
            subpattern,
            observer,
            description,
        }
    }
}

impl<E, P: Prefixed<E>, O> Prefixed<E> for Traced<P, O> {
    fn mandatory_prefix(&self) -> MandatoryPrefix<E> {
        let prefix = self.subpattern.mandatory_prefix();
        log::trace!(
            "{} requires a prefix of {} elements{}",
            self.description,
            prefix.elements.len(),
            if prefix.continuable {
                " (can append more)"
            } else {
                ""
            }
        );

        prefix
    }
}

impl<'a, E, C, P, O> Pattern<'a, E, C> for Traced<P, O>
where
    E: 'a,
    P: Pattern<'a, E, C> + 'a,
    O: TraceObserver + 'a,
{
    type Matcher = TracedMatcher<'a, E, C, P, O>;

    fn make_matcher(&'a self, target: Span<'a, E>, captures: C) -> Self::Matcher {
        let id = self.observer.started(&self.description, target.start());

        TracedMatcher {
            observer: &self.observer,
            id,
            submatcher: self.subpattern.make_matcher(target, captures),
            reported_exhaustion: false,
        }
    }
}

impl<P: Display, O> Display for Traced<P, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trace({})", self.subpattern)
    }
}

pub struct TracedMatcher<'a, E, C, P, O>
where
    E: 'a,
    P: Pattern<'a, E, C>,
{
    observer: &'a O,
    id: usize,
    submatcher: P::Matcher,
    reported_exhaustion: bool,
}

impl<'a, E, C, P, O> Clone for TracedMatcher<'a, E, C, P, O>
where
    E: 'a,
    P: Pattern<'a, E, C>,
{
    fn clone(&self) -> Self {
        Self {
            observer: self.observer,
            id: self.id,
            submatcher: self.submatcher.clone(),
            reported_exhaustion: self.reported_exhaustion,
        }
    }
}

impl<'a, E, C, P, O> Iterator for TracedMatcher<'a, E, C, P, O>
where
    E: 'a,
    P: Pattern<'a, E, C>,
    O: TraceObserver,
{
    type Item = PatternMatch<'a, E, C>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.submatcher.next() {
            Some(found) => {
                self.observer.matched(self.id, found.range());
                Some(found)
            }
            None => {
                if !self.reported_exhaustion {
                    self.observer.exhausted(self.id);
                    self.reported_exhaustion = true;
                }
                None
            }
        }
    }
}

impl<'a, E, C, P, O> FusedIterator for TracedMatcher<'a, E, C, P, O>
where
    E: 'a,
    P: Pattern<'a, E, C>,
    O: TraceObserver,
{
}
