//! Scenario tests exercising patterns end to end through the search surface.
#[cfg(test)]
mod captures;
#[cfg(test)]
mod common_patterns;
#[cfg(test)]
mod greedy_repetition;
#[cfg(test)]
mod literal;

#[cfg(test)]
use pattern_runtime::prelude::*;

/// Returns the contents and range of every match of `pattern` in `target`.
#[cfg(test)]
fn matches_of<'a, P>(pattern: &'a P, target: &'a str) -> Vec<(&'a str, std::ops::Range<usize>)>
where
    P: Pattern<'a, u8, ()>,
{
    target
        .as_bytes()
        .matches(pattern)
        .into_iter()
        .map(|m| (&target[m.range()], m.range()))
        .collect()
}
