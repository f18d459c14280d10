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

//! This module defines `CellCoord`, the `(pivot, mass)` coordinate of a DP
//! cell, and `PredecessorStack`, the LIFO chain of coordinates that records
//! the DP trajectory that produced a given part-solution.
//!
//! Stack entries are coordinates, not cell handles: resolving a coordinate
//! back to its `DpCell` always goes through the `DpTable`. This keeps the
//! stack a *weak* reference to the table -- cells are never kept alive, nor
//! even reachable, through a stack alone.

use serde::{Deserialize, Serialize};

/// The `(i, s)` address of a DP cell: `pivot` is the most recently
/// attempted group size, `mass` is the total cardinality committed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub pivot: usize,
    pub mass: usize,
}

impl CellCoord {
    pub fn new(pivot: usize, mass: usize) -> Self {
        CellCoord { pivot, mass }
    }
}

/// A persistent-style LIFO of `CellCoord`s. Cloning a `PredecessorStack` is
/// always a deep copy of the chain (coordinates are `Copy`, so this is
/// cheap), never a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredecessorStack(Vec<CellCoord>);

impl PredecessorStack {
    pub fn new() -> Self {
        PredecessorStack(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pushes a coordinate onto the top of the stack.
    pub fn push(&mut self, coord: CellCoord) {
        self.0.push(coord);
    }

    /// Pops the top coordinate off the stack, or `None` if it is empty --
    /// the caller tells that apart from "popped a real coordinate" by the
    /// `Option`, rather than by a sentinel value.
    pub fn pop(&mut self) -> Option<CellCoord> {
        self.0.pop()
    }

    /// The top coordinate, without removing it.
    pub fn top(&self) -> Option<CellCoord> {
        self.0.last().copied()
    }

    /// Structural equality: same length, same coordinates top-to-bottom.
    /// `PredecessorStack` already derives `PartialEq` with this meaning;
    /// this method exists to mirror the explicit `equals` operation named
    /// in the component design.
    pub fn equals(&self, other: &PredecessorStack) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_on_empty_yields_none() {
        let mut s = PredecessorStack::new();
        assert_eq!(None, s.pop());
    }

    #[test]
    fn push_pop_is_lifo() {
        let mut s = PredecessorStack::new();
        s.push(CellCoord::new(1, 1));
        s.push(CellCoord::new(2, 3));
        assert_eq!(Some(CellCoord::new(2, 3)), s.top());
        assert_eq!(Some(CellCoord::new(2, 3)), s.pop());
        assert_eq!(Some(CellCoord::new(1, 1)), s.pop());
        assert_eq!(None, s.pop());
    }

    #[test]
    fn equals_is_reflexive_and_symmetric() {
        let mut s1 = PredecessorStack::new();
        s1.push(CellCoord::new(3, 5));
        let s2 = s1.clone();
        assert!(s1.equals(&s2.clone()));
        assert_eq!(s1.equals(&s2), s2.equals(&s1));
    }

    #[test]
    fn differing_stacks_are_not_equal() {
        let mut s1 = PredecessorStack::new();
        s1.push(CellCoord::new(3, 5));
        let mut s2 = PredecessorStack::new();
        s2.push(CellCoord::new(3, 6));
        assert!(!s1.equals(&s2));
    }
}
