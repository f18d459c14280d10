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

//! The canonical solver: fills the DP table one mass column at a time, in
//! ascending order, exactly mirroring the nested-loop structure of
//! `badMemoryAlgorithm` in the original sources.

use std::time::Instant;

use crate::metrics::SolveMetrics;
use crate::multiset::IntervalMultiset;
use crate::stack::CellCoord;
use crate::table::DpTable;

use super::{apply_row_attempt, attempt_row, finalize, populate_base_cases, resolve_deferred, SolveResult};

/// Solves the instance by filling `DpTable` column by column (ascending
/// mass), row by row (descending pivot within a column), never revisiting
/// a column once closed.
pub fn solve(input: &IntervalMultiset) -> SolveResult {
    let start = Instant::now();
    let mut input = input.clone();
    input.sort_by_bottom();
    let n = input.count_intervals() as usize;
    let mut table = DpTable::new(n);
    let mut metrics = SolveMetrics::new();

    populate_base_cases(&mut table, &input, &mut metrics);

    for s in 2..=n {
        for i in (1..s).rev() {
            let at = CellCoord::new(i, s);
            let attempt = attempt_row(&table, i, s);
            let deferred = apply_row_attempt(&mut table, at, attempt, &mut metrics);
            resolve_deferred(&mut table, at, deferred, &mut metrics);
            table.cell_at_mut(at).remove_dominated_sets();
        }
    }

    finalize(table, metrics, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn multiset(entries: &[(u32, u32, u32)]) -> IntervalMultiset {
        let intervals = entries.iter().map(|&(b, t, a)| Interval::new(b, t, a)).collect();
        IntervalMultiset::new(intervals, None)
    }

    #[test]
    fn single_interval_of_length_one_is_trivially_satisfiable() {
        // one interval [1,1], group size 1: consumes the whole instance.
        let instance = multiset(&[(1, 1, 1)]);
        let result = solve(&instance);
        assert!(result.solution_found);
    }

    #[test]
    fn two_identical_wide_intervals_can_form_a_group_of_two() {
        // two [1,2] intervals can form one group of size 2 (both contain 2).
        let instance = multiset(&[(1, 2, 2)]);
        let result = solve(&instance);
        assert!(result.solution_found);
    }

    #[test]
    fn a_lone_unreachable_interval_is_unsatisfiable() {
        // a single interval [5,5] can never be grouped: no group of size 5
        // exists with only one interval available.
        let instance = multiset(&[(5, 5, 1)]);
        let result = solve(&instance);
        assert!(!result.solution_found);
    }

    #[test]
    fn metrics_count_at_least_the_base_case_attempts() {
        let instance = multiset(&[(1, 1, 1)]);
        let result = solve(&instance);
        assert!(result.metrics.n_groups_built >= 1);
    }
}
