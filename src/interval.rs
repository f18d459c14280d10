// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines `Interval`, the most elementary building block of a
//! GAI instance: a run-length compressed run of `amount` identical
//! `[bottom, top]` integer intervals.

use serde::{Deserialize, Serialize};

/// A run of `amount` identical intervals `[bottom, top]` on `{1..n}`.
///
/// `amount` is a run-length compression: it means "this interval appears
/// `amount` times in the multiset", not that the interval itself spans a
/// wider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub bottom: u32,
    pub top: u32,
    pub amount: u32,
}

impl Interval {
    /// Builds a new interval. Callers are expected to pass validated data:
    /// `1 <= bottom <= top` and `amount >= 1`. Malformed intervals are
    /// undefined behaviour for the solver (see the crate's error handling
    /// notes); in debug builds this is caught early.
    pub fn new(bottom: u32, top: u32, amount: u32) -> Self {
        debug_assert!(bottom >= 1 && bottom <= top, "invalid interval bounds");
        debug_assert!(amount >= 1, "an interval must occur at least once");
        Interval { bottom, top, amount }
    }

    /// `bottom <= value <= top`.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        self.bottom <= value && value <= self.top
    }

    /// `bottom > value`: the interval lies entirely to the right of `value`.
    #[inline]
    pub fn greater(&self, value: u32) -> bool {
        self.bottom > value
    }

    /// `top >= value`.
    ///
    /// This is the name the original sources used for this predicate, but
    /// its actual semantics only look at the interval's `top`, not at
    /// whether the whole interval lies at or above `value`. That
    /// discrepancy is intentional: it is the behaviour the rest of the
    /// algorithm (`lowest_part`, `count_lowest_part_ge_j`) was built
    /// against, so it is kept verbatim rather than "fixed".
    #[inline]
    pub fn greater_equal(&self, value: u32) -> bool {
        self.top >= value
    }

    /// `top < value`: the interval lies entirely to the left of `value`.
    #[inline]
    pub fn less(&self, value: u32) -> bool {
        self.top < value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let iv = Interval::new(2, 5, 1);
        assert!(iv.contains(2));
        assert!(iv.contains(5));
        assert!(iv.contains(3));
        assert!(!iv.contains(1));
        assert!(!iv.contains(6));
    }

    #[test]
    fn greater_looks_at_bottom() {
        let iv = Interval::new(5, 9, 1);
        assert!(iv.greater(4));
        assert!(!iv.greater(5));
        assert!(!iv.greater(9));
    }

    #[test]
    fn greater_equal_looks_at_top_not_bottom() {
        // this pins the observed (if misleadingly named) semantics
        let iv = Interval::new(1, 5, 1);
        assert!(iv.greater_equal(5));
        assert!(iv.greater_equal(1));
        assert!(!iv.greater_equal(6));
    }

    #[test]
    fn less_looks_at_top() {
        let iv = Interval::new(3, 5, 1);
        assert!(iv.less(6));
        assert!(!iv.less(5));
        assert!(!iv.less(4));
    }
}
