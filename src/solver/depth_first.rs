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

//! A recursive-descent variant of the solver: cells are populated lazily,
//! on demand, the first time something asks for them, rather than in a
//! fixed column sweep. The dependency DAG and the per-cell logic are
//! identical to the breadth-first strategy (`super::attempt_row` and
//! friends); only the traversal order differs, which only matters for
//! cache locality and for how quickly a YES answer can short-circuit the
//! rest of the table.

use std::time::Instant;

use fxhash::FxHashSet;

use crate::metrics::SolveMetrics;
use crate::multiset::IntervalMultiset;
use crate::stack::CellCoord;
use crate::table::DpTable;

use super::{apply_row_attempt, attempt_row, finalize, populate_base_cases, resolve_deferred, SolveResult};

/// Solves the instance by recursively ensuring a cell's predecessors exist
/// before the cell itself is populated, memoizing on `computed` so no cell
/// is ever built twice.
pub fn solve(input: &IntervalMultiset) -> SolveResult {
    let start = Instant::now();
    let mut input = input.clone();
    input.sort_by_bottom();
    let n = input.count_intervals() as usize;
    let mut table = DpTable::new(n);
    let mut metrics = SolveMetrics::new();
    let mut computed = FxHashSet::default();

    populate_base_cases(&mut table, &input, &mut metrics);
    for i in 1..=n {
        computed.insert(CellCoord::new(i, i));
    }

    if n >= 1 {
        for i in 1..n {
            ensure_cell(&mut table, &mut computed, &input, &mut metrics, i, n);
        }
    }

    finalize(table, metrics, start)
}

fn ensure_cell(
    table: &mut DpTable,
    computed: &mut FxHashSet<CellCoord>,
    input: &IntervalMultiset,
    metrics: &mut SolveMetrics,
    i: usize,
    s: usize,
) {
    let at = CellCoord::new(i, s);
    if computed.contains(&at) {
        return;
    }
    computed.insert(at);

    if i == s {
        return; // base cases are all populated up front
    }

    let n = table.n();
    for i_prime in i..=n {
        let mass = s - i;
        if mass == 0 {
            continue;
        }
        ensure_cell(table, computed, input, metrics, i_prime, mass);
    }

    let attempt = attempt_row(table, i, s);
    let deferred = apply_row_attempt(table, at, attempt, metrics);
    resolve_deferred(table, at, deferred, metrics);
    table.cell_at_mut(at).remove_dominated_sets();
}
