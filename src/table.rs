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

//! `DpTable`, the `n x n` grid of `DpCell`s the solver populates. Cells are
//! addressed with the 1-indexed `(pivot, mass)` coordinates used throughout
//! the rest of the crate -- `getGraphNode` in the original sources applies
//! the same `-1` shift to reach a 0-indexed backing array.

use crate::cell::DpCell;
use crate::stack::CellCoord;

/// A heap-allocated `n x n` grid of DP cells, never a stack VLA.
#[derive(Debug)]
pub struct DpTable {
    cells: Vec<Vec<DpCell>>,
    n: usize,
}

impl DpTable {
    /// Builds a fresh `n x n` table; `cell(i, s)` is valid for
    /// `1 <= i, s <= n`.
    pub fn new(n: usize) -> Self {
        let cells = (1..=n)
            .map(|i| (1..=n).map(|s| DpCell::new(CellCoord::new(i, s))).collect())
            .collect();
        DpTable { cells, n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn cell(&self, i: usize, s: usize) -> &DpCell {
        &self.cells[i - 1][s - 1]
    }

    pub fn cell_mut(&mut self, i: usize, s: usize) -> &mut DpCell {
        &mut self.cells[i - 1][s - 1]
    }

    pub fn cell_at(&self, coord: CellCoord) -> &DpCell {
        self.cell(coord.pivot, coord.mass)
    }

    pub fn cell_at_mut(&mut self, coord: CellCoord) -> &mut DpCell {
        self.cell_mut(coord.pivot, coord.mass)
    }

    /// Records an edge `from -> to` on both endpoints: `to` in `from`'s
    /// outgoing set, `from` in `to`'s incoming set. Mirrors
    /// `graphNodeStorageConnectNodes`.
    pub fn connect(&mut self, from: CellCoord, to: CellCoord) {
        self.cell_at_mut(from).connect_outgoing(to);
        self.cell_at_mut(to).connect_incoming(from);
    }

    /// `true` iff some part-solution at `(i, n)` accounts for the whole
    /// instance -- the final YES/NO test of the breadth-first algorithm.
    pub fn has_full_solution_at_mass(&self, mass: usize) -> bool {
        (1..=self.n).any(|i| self.cell(i, mass).n_interval_sets() > 0)
    }

    pub fn total_used_nodes(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.n_interval_sets() > 0)
            .count()
    }

    pub fn total_outgoing_edges(&self) -> usize {
        self.cells.iter().flatten().map(|c| c.outgoing().len()).sum()
    }

    pub fn total_incoming_edges(&self) -> usize {
        self.cells.iter().flatten().map(|c| c.incoming().len()).sum()
    }

    pub fn max_outgoing_edges(&self) -> usize {
        self.cells.iter().flatten().map(|c| c.outgoing().len()).max().unwrap_or(0)
    }

    pub fn max_incoming_edges(&self) -> usize {
        self.cells.iter().flatten().map(|c| c.incoming().len()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_has_empty_cells() {
        let table = DpTable::new(3);
        assert_eq!(0, table.cell(1, 1).n_interval_sets());
        assert_eq!(0, table.total_used_nodes());
    }

    #[test]
    fn connect_updates_both_endpoints() {
        let mut table = DpTable::new(3);
        table.connect(CellCoord::new(1, 1), CellCoord::new(2, 2));
        assert!(table.cell(1, 1).outgoing().contains(&CellCoord::new(2, 2)));
        assert!(table.cell(2, 2).incoming().contains(&CellCoord::new(1, 1)));
    }

    #[test]
    fn one_indexed_accessors_reach_corners() {
        let table = DpTable::new(4);
        let _ = table.cell(1, 1);
        let _ = table.cell(4, 4);
    }
}
