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

//! The parallelised solver. Column `s` only ever reads columns `< s`
//! (every predecessor `(i', s - i)` has `s - i < s` since `i >= 1`), so once
//! a column is closed every row of the next column can be computed against
//! it concurrently.
//!
//! Each worker computes its row's candidate residuals purely by reading
//! the (already finalised, therefore shared-immutable) table -- no row
//! mutates the table while the column is being computed, so rows never
//! contend with each other. Work is handed out from a `parking_lot`-guarded
//! queue rather than a fixed static split, so a column with uneven row
//! costs still balances across the pool. The rare case of a row needing
//! `backtrack` (which *does* mutate an ancestor cell's marks) is deferred
//! and replayed single-threaded once the column's fast path has drained,
//! the same "exactly one writer" discipline the fast path gets for free.

use std::time::Instant;

use crossbeam::thread;
use parking_lot::Mutex;

use crate::metrics::SolveMetrics;
use crate::multiset::IntervalMultiset;
use crate::stack::CellCoord;
use crate::table::DpTable;

use super::{apply_row_attempt, attempt_row, finalize, populate_base_cases, resolve_deferred, Deferred, RowAttempt, SolveResult};

/// Solves the instance using up to `n_threads` worker threads per column
/// (`None` defaults to `num_cpus::get()`).
pub fn solve(input: &IntervalMultiset, n_threads: Option<usize>) -> SolveResult {
    let start = Instant::now();
    let mut input = input.clone();
    input.sort_by_bottom();
    let n = input.count_intervals() as usize;
    let mut table = DpTable::new(n);
    let mut metrics = SolveMetrics::new();
    let workers = n_threads.unwrap_or_else(num_cpus::get).max(1);

    populate_base_cases(&mut table, &input, &mut metrics);

    for s in 2..=n {
        let rows: Vec<usize> = (1..s).collect();
        let queue = Mutex::new(rows);
        let results = Mutex::new(Vec::<(usize, RowAttempt)>::new());

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|_| loop {
                    let next = queue.lock().pop();
                    let Some(i) = next else { break };
                    let attempt = attempt_row(&table, i, s);
                    results.lock().push((i, attempt));
                });
            }
        })
        .expect("worker thread panicked while computing a DP column");

        let mut all_deferred: Vec<(usize, Vec<Deferred>)> = Vec::new();
        for (i, attempt) in results.into_inner() {
            let at = CellCoord::new(i, s);
            let deferred = apply_row_attempt(&mut table, at, attempt, &mut metrics);
            if !deferred.is_empty() {
                all_deferred.push((i, deferred));
            }
        }
        for (i, deferred) in all_deferred {
            resolve_deferred(&mut table, CellCoord::new(i, s), deferred, &mut metrics);
        }
        for i in 1..s {
            table.cell_at_mut(CellCoord::new(i, s)).remove_dominated_sets();
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
    fn agrees_with_breadth_first_on_a_yes_instance() {
        let instance = multiset(&[(1, 2, 2)]);
        let bf = super::super::breadth_first::solve(&instance);
        let par = solve(&instance, Some(2));
        assert_eq!(bf.solution_found, par.solution_found);
    }

    #[test]
    fn agrees_with_breadth_first_on_a_no_instance() {
        let instance = multiset(&[(5, 5, 1)]);
        let bf = super::super::breadth_first::solve(&instance);
        let par = solve(&instance, Some(4));
        assert_eq!(bf.solution_found, par.solution_found);
    }

    #[test]
    fn single_worker_thread_still_completes() {
        let instance = multiset(&[(1, 1, 1)]);
        let par = solve(&instance, Some(1));
        assert!(par.solution_found);
    }
}
