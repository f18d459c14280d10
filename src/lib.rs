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

//! # gai-solver
//!
//! A dynamic-programming decision procedure for Group Assignment on
//! Intervals (GAI): given a multiset of integer intervals `[a, b]` on
//! `{1..n}`, decide whether it can be partitioned into groups such that a
//! group of size `g` consists of exactly `g` intervals all containing the
//! value `g`.
//!
//! The table is filled one `(pivot, mass)` cell at a time; each cell holds
//! a dominance-pruned set of residual part-solutions (`IntervalMultiset`)
//! reachable by some sequence of group extractions, along with the
//! predecessor trail (`PredecessorStack`) that produced each one. Three
//! strategies populate the same table: [`solver::breadth_first`] (the
//! canonical column sweep), [`solver::depth_first`] (lazy, on-demand
//! recursion) and [`solver::parallel`] (column-parallel, since `(i, s)`
//! only ever depends on `(i', s - i)` with `s - i < s`).
//!
//! ## Quick example
//! ```
//! use gai_solver::interval::Interval;
//! use gai_solver::multiset::IntervalMultiset;
//! use gai_solver::solver::breadth_first;
//!
//! // two intervals [1,2]: they can form one group of size 2, since both
//! // contain the value 2.
//! let instance = IntervalMultiset::new(vec![Interval::new(1, 2, 2)], None);
//! let result = breadth_first::solve(&instance);
//! assert!(result.solution_found);
//! ```

pub mod assign;
pub mod cell;
pub mod generators;
pub mod interval;
pub mod marks;
pub mod metrics;
pub mod multiset;
pub mod report;
pub mod solver;
pub mod stack;
pub mod table;

pub use assign::{AssignOutcome, AssignStatus};
pub use cell::DpCell;
pub use interval::Interval;
pub use metrics::{RunInfo, SolveMetrics};
pub use multiset::IntervalMultiset;
pub use solver::{SolveResult, Strategy};
pub use stack::{CellCoord, PredecessorStack};
pub use table::DpTable;
