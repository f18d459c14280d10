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

//! Shared data-plane logic for the three execution strategies
//! (breadth-first, depth-first, parallel). Each strategy walks the same
//! dependency DAG over `DpTable` cells -- `(i, s)` depends on every
//! `(i', s - i)` for `i <= i' <= n` -- and calls into the functions defined
//! here to populate one cell from its predecessors.

pub mod breadth_first;
pub mod depth_first;
pub mod parallel;

use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::assign::{assign, assign_rest, AssignStatus};
use crate::metrics::{RunInfo, SolveMetrics};
use crate::multiset::IntervalMultiset;
use crate::stack::CellCoord;
use crate::table::DpTable;

/// Which execution strategy produced a `SolveResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    Parallel,
}

/// The outcome of a full solve: whether the instance is a YES instance,
/// plus the populated table and the statistics gathered while building it.
pub struct SolveResult {
    pub solution_found: bool,
    pub table: DpTable,
    pub metrics: SolveMetrics,
    pub run_time: Duration,
}

impl SolveResult {
    pub fn run_info(&self, description: impl Into<String>) -> RunInfo {
        RunInfo::from_table(description, &self.table, self.solution_found, &self.metrics, self.run_time)
    }
}

/// A residual that failed to extend, paired with the coordinate of the
/// predecessor cell it lives in.
pub(crate) struct Deferred {
    pub from: CellCoord,
    pub failed: Rc<IntervalMultiset>,
}

/// The sets and the deferred (backtrack-needing) failures produced by
/// attempting to populate cell `(i, s)` from its predecessors. Pure: does
/// not mutate `table`, so it is safe to call from multiple threads against
/// a table whose predecessor columns are already finalized.
pub(crate) struct RowAttempt {
    pub new_sets: Vec<(CellCoord, IntervalMultiset)>,
    pub deferred: Vec<Deferred>,
}

pub(crate) fn attempt_row(table: &DpTable, i: usize, s: usize) -> RowAttempt {
    let n = table.n();
    let mut new_sets = Vec::new();
    let mut deferred = Vec::new();
    for i_prime in i..=n {
        let mass = s - i;
        if mass == 0 || mass > n {
            continue;
        }
        let pred_coord = CellCoord::new(i_prime, mass);
        for residual in table.cell_at(pred_coord).sets() {
            let lowest = residual.lowest_part();
            let outcome = assign(&lowest, i as u32);
            match outcome.status {
                AssignStatus::Success => {
                    let extended = outcome.residual.unwrap().with_pushed(pred_coord);
                    new_sets.push((pred_coord, extended));
                }
                AssignStatus::ErrorEvtl => deferred.push(Deferred {
                    from: pred_coord,
                    failed: Rc::clone(residual),
                }),
                AssignStatus::ErrorDefn => {}
            }
        }
    }
    RowAttempt { new_sets, deferred }
}

pub(crate) fn apply_row_attempt(
    table: &mut DpTable,
    at: CellCoord,
    attempt: RowAttempt,
    metrics: &mut SolveMetrics,
) -> Vec<Deferred> {
    for (pred_coord, set) in attempt.new_sets {
        metrics.record_group_built();
        if table.cell_at(at).should_be_added(&set) {
            table.cell_at_mut(at).add_interval_set(set);
            table.connect(pred_coord, at);
            metrics.record_group_kept();
        }
        metrics.record_step();
    }
    attempt.deferred
}

pub(crate) fn resolve_deferred(
    table: &mut DpTable,
    at: CellCoord,
    deferred: Vec<Deferred>,
    metrics: &mut SolveMetrics,
) {
    for d in deferred {
        backtrack(table, d.from, at, d.failed, metrics);
    }
}

/// Populates the base case `(i, i)`: the group of size `i` carved directly
/// out of the whole input instance. Base-case residuals keep an empty
/// stack -- there is no predecessor to record.
pub(crate) fn populate_base_cases(table: &mut DpTable, input: &IntervalMultiset, metrics: &mut SolveMetrics) {
    let n = table.n();
    for i in 1..=n {
        let coord = CellCoord::new(i, i);
        let outcome = assign(input, i as u32);
        metrics.record_group_built();
        if let AssignStatus::Success = outcome.status {
            let residual = outcome.residual.unwrap();
            if table.cell_at(coord).should_be_added(&residual) {
                table.cell_at_mut(coord).add_interval_set(residual);
                metrics.record_group_kept();
            }
        }
        metrics.record_step();
    }
}

/// Attempts to recover from a failed extension of `failed` (living at
/// `pred`, trying to reach `curr`) by carving `curr`'s group out of
/// `failed`'s own inverse-lowest-part, or, failing that, out of an
/// alternative part-solution of `failed`'s ancestor cell. Mirrors
/// `backtrack` in the original sources exactly: marks `failed` against
/// `curr` so it is never retried for this destination, and every residual
/// it manages to build is added to `curr` directly as a side effect
/// (there may be more than one, since every unmarked sibling whose stack
/// still matches is tried). `ErrorDefn` ends the branch with no effect.
pub(crate) fn backtrack(
    table: &mut DpTable,
    pred: CellCoord,
    curr: CellCoord,
    failed: Rc<IntervalMultiset>,
    metrics: &mut SolveMetrics,
) {
    metrics.record_step();
    table.cell_at_mut(curr).marks_mut().mark(&failed);
    metrics.record_mark();

    let n_low = failed.count_lowest_part_ge_j(curr.pivot as u32);
    let rest = (curr.mass as u32).wrapping_sub(pred.mass as u32).wrapping_sub(n_low);
    let inverse = failed.inverse_lowest_part_ge_j(curr.pivot as u32);
    let outcome = assign_rest(&inverse, curr.pivot as u32, rest);

    match outcome.status {
        AssignStatus::Success => {
            let residual = outcome.residual.unwrap();
            metrics.record_group_built();
            if table.cell_at(curr).should_be_added(&residual) {
                table.cell_at_mut(curr).add_interval_set(residual);
                table.connect(pred, curr);
                metrics.record_group_kept();
            }
        }
        AssignStatus::ErrorEvtl => {
            let mut ancestor_stack = failed.stack().clone();
            if let Some(next_pred) = ancestor_stack.pop() {
                let candidates: Vec<Rc<IntervalMultiset>> = table
                    .cell_at(next_pred)
                    .sets()
                    .iter()
                    .filter(|c| !table.cell_at(curr).marks().is_marked(c))
                    .filter(|c| c.stack().equals(&ancestor_stack))
                    .cloned()
                    .collect();
                for candidate in candidates {
                    backtrack(table, next_pred, curr, candidate, metrics);
                }
            }
        }
        AssignStatus::ErrorDefn => {}
    }
}

pub(crate) fn finalize(table: DpTable, mut metrics: SolveMetrics, start: Instant) -> SolveResult {
    let n = table.n();
    let solution_found = table.has_full_solution_at_mass(n);
    if solution_found {
        record_path_lengths(&table, &mut metrics);
    }
    SolveResult {
        solution_found,
        table,
        metrics,
        run_time: start.elapsed(),
    }
}

/// Computes the shortest and longest dependency-chain length reaching any
/// column-`n` cell holding a solution, via a backwards traversal over
/// incoming edges down to a base case (`spec.md` §9).
fn record_path_lengths(table: &DpTable, metrics: &mut SolveMetrics) {
    let n = table.n();
    let mut memo: HashMap<CellCoord, (i64, i64)> = HashMap::new();
    for i in 1..=n {
        let coord = CellCoord::new(i, n);
        if table.cell_at(coord).n_interval_sets() > 0 {
            let (shortest, longest) = path_bounds(table, coord, &mut memo);
            metrics.record_path_length(shortest);
            metrics.record_path_length(longest);
        }
    }
}

/// `(shortest, longest)` path length in edges from a base case up to
/// `coord`, memoized since the dependency DAG re-shares ancestors heavily.
fn path_bounds(table: &DpTable, coord: CellCoord, memo: &mut HashMap<CellCoord, (i64, i64)>) -> (i64, i64) {
    if let Some(&bounds) = memo.get(&coord) {
        return bounds;
    }
    let bounds = if coord.pivot == coord.mass {
        (0, 0)
    } else {
        let mut shortest = i64::MAX;
        let mut longest = i64::MIN;
        for &pred in table.cell_at(coord).incoming() {
            let (pred_shortest, pred_longest) = path_bounds(table, pred, memo);
            shortest = shortest.min(pred_shortest + 1);
            longest = longest.max(pred_longest + 1);
        }
        if shortest == i64::MAX {
            (0, 0)
        } else {
            (shortest, longest)
        }
    };
    memo.insert(coord, bounds);
    bounds
}
