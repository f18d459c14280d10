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

//! `DpCell`, the node of the dependency graph the solver builds one column
//! at a time: a `(pivot, mass)` coordinate, the dominance-pruned list of
//! residual part-solutions reachable at that coordinate, the mark storage
//! used while backtracking out of this cell, and the incoming/outgoing edge
//! sets that record which other cells this one was derived from or feeds.

use std::rc::Rc;

use fxhash::FxHashSet;

use crate::marks::MarkStorage;
use crate::multiset::IntervalMultiset;
use crate::stack::CellCoord;

/// One node of the DP table.
#[derive(Debug)]
pub struct DpCell {
    coord: CellCoord,
    sets: Vec<Rc<IntervalMultiset>>,
    marks: MarkStorage,
    incoming: FxHashSet<CellCoord>,
    outgoing: FxHashSet<CellCoord>,
}

impl DpCell {
    pub fn new(coord: CellCoord) -> Self {
        DpCell {
            coord,
            sets: Vec::new(),
            marks: MarkStorage::new(),
            incoming: FxHashSet::default(),
            outgoing: FxHashSet::default(),
        }
    }

    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    pub fn sets(&self) -> &[Rc<IntervalMultiset>] {
        &self.sets
    }

    pub fn marks_mut(&mut self) -> &mut MarkStorage {
        &mut self.marks
    }

    pub fn marks(&self) -> &MarkStorage {
        &self.marks
    }

    pub fn n_interval_sets(&self) -> usize {
        self.sets.len()
    }

    pub fn incoming(&self) -> &FxHashSet<CellCoord> {
        &self.incoming
    }

    pub fn outgoing(&self) -> &FxHashSet<CellCoord> {
        &self.outgoing
    }

    /// `true` iff no set currently held by this cell dominates `candidate`.
    /// Mirrors `graphNodeSetShouldBeAdded`.
    pub fn should_be_added(&self, candidate: &IntervalMultiset) -> bool {
        !self.sets.iter().any(|existing| candidate.is_dominated_by(existing))
    }

    /// Publishes a new residual into this cell, head-inserted like the
    /// original linked-list implementation (`graphNodeAddIntervalSet`).
    pub fn add_interval_set(&mut self, set: IntervalMultiset) {
        self.sets.insert(0, Rc::new(set));
    }

    /// Removes every set dominated by some other set currently in this
    /// cell. Idempotent: a second call is a no-op. Mirrors
    /// `graphNodeRemoveDominatedSets`.
    pub fn remove_dominated_sets(&mut self) {
        let mut kept: Vec<Rc<IntervalMultiset>> = Vec::with_capacity(self.sets.len());
        'outer: for candidate in self.sets.drain(..) {
            for other in &kept {
                if Rc::ptr_eq(&candidate, other) {
                    continue;
                }
                if candidate.is_dominated_by(other) {
                    continue 'outer;
                }
            }
            kept.retain(|other| !other.is_dominated_by(&candidate));
            kept.push(candidate);
        }
        self.sets = kept;
    }

    pub fn connect_incoming(&mut self, from: CellCoord) {
        self.incoming.insert(from);
    }

    pub fn connect_outgoing(&mut self, to: CellCoord) {
        self.outgoing.insert(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn set(bottoms: &[u32]) -> IntervalMultiset {
        let intervals = bottoms.iter().map(|&b| Interval::new(b, b, 1)).collect();
        let mut m = IntervalMultiset::new(intervals, None);
        m.sort_by_bottom();
        m
    }

    #[test]
    fn should_be_added_rejects_dominated_candidate() {
        let mut cell = DpCell::new(CellCoord::new(1, 1));
        cell.add_interval_set(set(&[1]));
        // candidate with a higher bottom is dominated by the existing [1]
        assert!(!cell.should_be_added(&set(&[5])));
    }

    #[test]
    fn should_be_added_accepts_incomparable_or_better_candidate() {
        let mut cell = DpCell::new(CellCoord::new(1, 1));
        cell.add_interval_set(set(&[5]));
        assert!(cell.should_be_added(&set(&[1])));
    }

    #[test]
    fn remove_dominated_sets_is_idempotent() {
        let mut cell = DpCell::new(CellCoord::new(1, 2));
        cell.add_interval_set(set(&[5, 5]));
        cell.add_interval_set(set(&[1, 1]));
        cell.add_interval_set(set(&[1, 9]));
        cell.remove_dominated_sets();
        let once = cell.n_interval_sets();
        cell.remove_dominated_sets();
        assert_eq!(once, cell.n_interval_sets());
    }

    #[test]
    fn remove_dominated_sets_keeps_only_pareto_front() {
        let mut cell = DpCell::new(CellCoord::new(1, 1));
        cell.add_interval_set(set(&[9]));
        cell.add_interval_set(set(&[1]));
        cell.remove_dominated_sets();
        assert_eq!(1, cell.n_interval_sets());
        assert_eq!(1, cell.sets()[0].intervals()[0].bottom);
    }

    #[test]
    fn connect_edges_are_deduplicated() {
        let mut cell = DpCell::new(CellCoord::new(2, 2));
        cell.connect_incoming(CellCoord::new(1, 1));
        cell.connect_incoming(CellCoord::new(1, 1));
        assert_eq!(1, cell.incoming().len());
    }
}
