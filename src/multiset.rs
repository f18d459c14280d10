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

//! This module defines `IntervalMultiset`, the part-solution object the
//! whole DP revolves around: an ordered sequence of distinct `Interval`
//! entries (each already carrying its own multiplicity) paired with the
//! `PredecessorStack` of DP cells whose extension produced it.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::stack::{CellCoord, PredecessorStack};

/// An ordered, run-length compressed multiset of intervals plus the
/// predecessor trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalMultiset {
    intervals: Vec<Interval>,
    stack: PredecessorStack,
}

impl IntervalMultiset {
    /// Takes ownership of `intervals` and an optional predecessor stack
    /// (an absent stack means "base case", i.e. an empty stack).
    pub fn new(intervals: Vec<Interval>, stack: Option<PredecessorStack>) -> Self {
        IntervalMultiset {
            intervals,
            stack: stack.unwrap_or_default(),
        }
    }

    pub fn stack(&self) -> &PredecessorStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut PredecessorStack {
        &mut self.stack
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The number of *distinct* interval entries.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sorts the entries by non-increasing `bottom`, in place -- the
    /// original source's `heapSort` sorts descending, so that
    /// `without_first_g_including_i` consumes the widest/highest-`bottom`
    /// containers first.
    pub fn sort_by_bottom(&mut self) {
        self.intervals.sort_unstable_by_key(|iv| std::cmp::Reverse(iv.bottom));
    }

    /// The cardinality: `sum(amount)` over all entries.
    pub fn count_intervals(&self) -> u32 {
        self.intervals.iter().map(|iv| iv.amount).sum()
    }

    fn count_where(&self, pred: impl Fn(&Interval) -> bool) -> u32 {
        self.intervals
            .iter()
            .filter(|iv| pred(iv))
            .map(|iv| iv.amount)
            .sum()
    }

    /// `sum(amount)` over entries with `bottom > value`.
    pub fn count_greater_i(&self, value: u32) -> u32 {
        self.count_where(|iv| iv.greater(value))
    }

    /// `sum(amount)` over entries containing `value`.
    pub fn count_containing_i(&self, value: u32) -> u32 {
        self.count_where(|iv| iv.contains(value))
    }

    /// `sum(amount)` over entries with `top >= value`.
    pub fn count_greater_equal_i(&self, value: u32) -> u32 {
        self.count_where(|iv| iv.greater_equal(value))
    }

    /// The first entry (in current order) that contains `value`.
    pub fn first_containing_i(&self, value: u32) -> Option<Interval> {
        self.intervals.iter().copied().find(|iv| iv.contains(value))
    }

    /// A new multiset identical to `self` except that the first `g`
    /// *instances* of intervals containing `value` are removed, preserving
    /// run-length encoding (an entry with some instances removed and some
    /// kept is re-emitted with the reduced `amount`, never split into two
    /// entries).
    pub fn without_first_g_including_i(&self, value: u32, g: u32) -> IntervalMultiset {
        let mut result = Vec::with_capacity(self.intervals.len());
        let mut n_removed = 0u32;
        for iv in &self.intervals {
            let removable = if iv.contains(value) {
                (g - n_removed).min(iv.amount)
            } else {
                0
            };
            n_removed += removable;
            let kept = iv.amount - removable;
            if kept > 0 {
                result.push(Interval::new(iv.bottom, iv.top, kept));
            }
        }
        IntervalMultiset::new(result, Some(self.stack.clone()))
    }

    fn predecessor_pivot_and_floor(&self) -> Option<(usize, u32)> {
        let pred = self.stack.top()?;
        let floor = self
            .first_containing_i(pred.pivot as u32)
            .map(|iv| iv.bottom)
            .unwrap_or(0);
        Some((pred.pivot, floor))
    }

    /// The sub-multiset left of the most recent pivot and at or above the
    /// dynamic bottom floor. A copy of `self` when the stack is empty.
    pub fn lowest_part(&self) -> IntervalMultiset {
        let Some((pivot, floor)) = self.predecessor_pivot_and_floor() else {
            return self.clone();
        };
        let intervals = self
            .intervals
            .iter()
            .copied()
            .filter(|iv| iv.less(pivot as u32) && iv.bottom >= floor)
            .collect();
        IntervalMultiset::new(intervals, Some(self.stack.clone()))
    }

    /// The cardinality of `lowest_part`, additionally restricted to entries
    /// with `top >= j`. Falls back to `count_greater_equal_i(j)` when the
    /// stack is empty.
    pub fn count_lowest_part_ge_j(&self, j: u32) -> u32 {
        let Some((pivot, floor)) = self.predecessor_pivot_and_floor() else {
            return self.count_greater_equal_i(j);
        };
        self.count_where(|iv| iv.less(pivot as u32) && iv.bottom >= floor && iv.greater_equal(j))
    }

    /// The entries that do *not* satisfy the `lowest_part`-with-floor-`j`
    /// filter. Empty when the stack is empty.
    pub fn inverse_lowest_part_ge_j(&self, j: u32) -> IntervalMultiset {
        let Some((pivot, floor)) = self.predecessor_pivot_and_floor() else {
            return IntervalMultiset::new(Vec::new(), None);
        };
        let intervals = self
            .intervals
            .iter()
            .copied()
            .filter(|iv| !(iv.less(pivot as u32) && iv.bottom >= floor && iv.greater_equal(j)))
            .collect();
        IntervalMultiset::new(intervals, Some(self.stack.clone()))
    }

    /// `true` iff `self` and `other` have equal cardinality and, when both
    /// are traversed in bottom-sorted order expanding each entry `amount`
    /// times, every paired element of `other` has `bottom <= self.bottom`.
    /// Assumes both multisets are already sorted by `sort_by_bottom`.
    pub fn is_dominated_by(&self, other: &IntervalMultiset) -> bool {
        if self.count_intervals() != other.count_intervals() {
            return false;
        }
        let mut other_bottoms = other
            .intervals
            .iter()
            .flat_map(|iv| std::iter::repeat(iv.bottom).take(iv.amount as usize));
        for iv in &self.intervals {
            for _ in 0..iv.amount {
                let other_bottom = other_bottoms
                    .next()
                    .expect("cardinalities were checked equal above");
                if other_bottom > iv.bottom {
                    return false;
                }
            }
        }
        true
    }

    /// Pushes a coordinate onto this multiset's stack, returning `self` for
    /// chaining at call sites that just produced a residual and now record
    /// the predecessor cell that produced it.
    pub fn with_pushed(mut self, coord: CellCoord) -> Self {
        self.stack.push(coord);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(entries: &[(u32, u32, u32)]) -> IntervalMultiset {
        let intervals = entries
            .iter()
            .map(|&(b, t, a)| Interval::new(b, t, a))
            .collect();
        IntervalMultiset::new(intervals, None)
    }

    #[test]
    fn count_intervals_sums_amounts() {
        let m = ms(&[(1, 3, 2), (2, 2, 1)]);
        assert_eq!(3, m.count_intervals());
    }

    #[test]
    fn sort_by_bottom_is_idempotent() {
        let mut m = ms(&[(3, 3, 1), (1, 3, 1), (2, 2, 1)]);
        m.sort_by_bottom();
        let once = m.clone();
        m.sort_by_bottom();
        assert_eq!(once, m);
        let bottoms: Vec<_> = m.intervals().iter().map(|iv| iv.bottom).collect();
        assert_eq!(vec![3, 2, 1], bottoms);
    }

    #[test]
    fn without_first_g_including_i_preserves_cardinality_minus_g() {
        let m = ms(&[(1, 5, 3), (2, 2, 2)]);
        let before = m.count_intervals();
        let after = m.without_first_g_including_i(2, 2);
        assert_eq!(before - 2, after.count_intervals());
    }

    #[test]
    fn without_first_g_including_i_merges_partial_runs() {
        // Both entries contain 2; removing 3 should eat the whole first
        // entry and part of the second, keeping run-length encoding.
        let m = ms(&[(1, 5, 2), (2, 2, 3)]);
        let after = m.without_first_g_including_i(2, 3);
        assert_eq!(1, after.len());
        assert_eq!(2, after.intervals()[0].amount);
    }

    #[test]
    fn without_first_g_leaves_non_containing_entries_untouched() {
        let m = ms(&[(10, 20, 1), (1, 1, 1)]);
        let after = m.without_first_g_including_i(1, 1);
        assert_eq!(1, after.len());
        assert_eq!(10, after.intervals()[0].bottom);
    }

    #[test]
    fn lowest_part_is_identity_copy_when_stack_empty() {
        let m = ms(&[(1, 3, 1), (2, 2, 1)]);
        let lp = m.lowest_part();
        assert_eq!(m.intervals(), lp.intervals());
    }

    #[test]
    fn lowest_part_restricts_left_of_pivot_above_floor() {
        let mut m = ms(&[(1, 3, 1), (4, 6, 1), (2, 5, 1)]);
        m.stack_mut().push(CellCoord::new(4, 4));
        // predecessor pivot = 4; first interval containing 4 is (4,6) -> floor = 4
        let lp = m.lowest_part();
        // (1,3) has top<4 but bottom(1) < floor(4) -> excluded
        // (2,5) has top>=4 -> not less(4) -> excluded
        // (4,6) has top>=4 -> not less(4) -> excluded
        assert!(lp.is_empty());
    }

    #[test]
    fn lowest_part_ge_j_decomposition_matches_inverse() {
        let mut m = ms(&[(1, 3, 1), (2, 9, 1), (4, 9, 1), (5, 5, 1)]);
        m.stack_mut().push(CellCoord::new(4, 4));
        let covered = m.count_lowest_part_ge_j(2);
        let inverse = m.inverse_lowest_part_ge_j(2);
        assert_eq!(m.count_intervals(), covered + inverse.count_intervals());
    }

    #[test]
    fn inverse_lowest_part_is_empty_when_stack_empty() {
        let m = ms(&[(1, 3, 1)]);
        assert!(m.inverse_lowest_part_ge_j(1).is_empty());
    }

    #[test]
    fn dominance_is_reflexive() {
        let mut m = ms(&[(1, 3, 1), (2, 2, 1)]);
        m.sort_by_bottom();
        assert!(m.is_dominated_by(&m));
    }

    #[test]
    fn dominance_requires_equal_cardinality() {
        let a = ms(&[(1, 1, 1)]);
        let b = ms(&[(1, 1, 1), (1, 1, 1)]);
        assert!(!a.is_dominated_by(&b));
    }

    #[test]
    fn dominance_checks_pointwise_bottoms() {
        let mut worse = ms(&[(5, 5, 1)]);
        let mut better = ms(&[(1, 1, 1)]);
        worse.sort_by_bottom();
        better.sort_by_bottom();
        assert!(worse.is_dominated_by(&better));
        assert!(!better.is_dominated_by(&worse));
    }
}
