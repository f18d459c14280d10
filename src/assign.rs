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

//! The assignment operator: the single place where the solver decides
//! whether a group of a given size can be carved out of a residual
//! part-solution, mirroring `assign`/`assignRest` in `badMemoryAlg.c`.
//!
//! `AssignStatus` is a closed, local-recovery error model: `ErrorEvtl`
//! ("eventually an error", i.e. *for this group size*) is recoverable by
//! backtracking to try a different ancestor part-solution, while
//! `ErrorDefn` ("definitively an error") means the branch is dead and must
//! not be retried. Neither variant is a `std::error::Error` -- they never
//! escape the solver (see the crate's error handling notes).

use crate::multiset::IntervalMultiset;

/// The outcome of attempting to carve a group out of a part-solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignStatus {
    Success,
    ErrorEvtl,
    ErrorDefn,
}

/// The result of a successful assignment: the residual multiset left once
/// the group has been removed.
#[derive(Debug, Clone)]
pub struct AssignOutcome {
    pub status: AssignStatus,
    pub residual: Option<IntervalMultiset>,
}

impl AssignOutcome {
    fn success(residual: IntervalMultiset) -> Self {
        AssignOutcome {
            status: AssignStatus::Success,
            residual: Some(residual),
        }
    }

    fn error(status: AssignStatus) -> Self {
        debug_assert_ne!(status, AssignStatus::Success);
        AssignOutcome { status, residual: None }
    }
}

/// Attempts to carve a group of size `group_size` out of `set`, using the
/// whole set's containment count as the budget. Mirrors `assign`.
pub fn assign(set: &IntervalMultiset, group_size: u32) -> AssignOutcome {
    assign_with_counts(set, group_size, set.count_containing_i(group_size), group_size)
}

/// Attempts to carve a group of size `group_size` out of `set`, but capped
/// at (and removing only) `rest` instances rather than the whole set's
/// containment count. Mirrors `assignRest`.
pub fn assign_rest(set: &IntervalMultiset, group_size: u32, rest: u32) -> AssignOutcome {
    assign_with_counts(set, group_size, set.count_containing_i(group_size), rest)
}

fn assign_with_counts(set: &IntervalMultiset, group_size: u32, n_containing: u32, n: u32) -> AssignOutcome {
    if set.count_greater_i(group_size) > 0 {
        return AssignOutcome::error(AssignStatus::ErrorDefn);
    }
    if n_containing < n {
        return AssignOutcome::error(AssignStatus::ErrorEvtl);
    }
    AssignOutcome::success(set.without_first_g_including_i(group_size, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn set(entries: &[(u32, u32, u32)]) -> IntervalMultiset {
        let intervals = entries.iter().map(|&(b, t, a)| Interval::new(b, t, a)).collect();
        IntervalMultiset::new(intervals, None)
    }

    #[test]
    fn assign_succeeds_when_enough_containing_intervals() {
        let s = set(&[(1, 5, 3)]);
        let outcome = assign(&s, 2);
        assert_eq!(AssignStatus::Success, outcome.status);
        assert_eq!(1, outcome.residual.unwrap().count_intervals());
    }

    #[test]
    fn assign_is_evtl_error_when_too_few_containing() {
        let s = set(&[(1, 5, 1)]);
        let outcome = assign(&s, 3);
        assert_eq!(AssignStatus::ErrorEvtl, outcome.status);
        assert!(outcome.residual.is_none());
    }

    #[test]
    fn assign_is_defn_error_when_some_interval_strictly_beyond_group_size() {
        let s = set(&[(10, 10, 1)]);
        let outcome = assign(&s, 2);
        assert_eq!(AssignStatus::ErrorDefn, outcome.status);
    }

    #[test]
    fn assign_rest_removes_only_rest_many_instances() {
        let s = set(&[(1, 5, 5)]);
        // containment count would allow 5, but rest caps removal at 2
        let outcome = assign_rest(&s, 2, 2);
        assert_eq!(AssignStatus::Success, outcome.status);
        assert_eq!(3, outcome.residual.unwrap().count_intervals());
    }

    #[test]
    fn assign_rest_is_evtl_error_when_containment_below_rest() {
        let s = set(&[(1, 5, 1)]);
        // only one containing interval available, but three are demanded
        let outcome = assign_rest(&s, 2, 3);
        assert_eq!(AssignStatus::ErrorEvtl, outcome.status);
    }
}
