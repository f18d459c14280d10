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

//! `RunInfo`, the statistics record emitted at the end of a solve, and
//! `SolveMetrics`, the mutable accumulator the solvers feed while they run.
//! Grounded on `jsonPrinter.h`/`jsonPrinter.c`'s `RunInfo` struct and
//! `addRunInfoToJson`.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::table::DpTable;

/// The final, immutable statistics record for one solve, ready to be
/// serialised to a JSON report.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct RunInfo {
    pub description: String,
    pub solution_found: bool,
    pub n_intervals: u32,
    pub n_groups_built: u64,
    pub n_groups_kept: u64,
    pub n_solutions: u64,
    pub n_steps: u64,
    pub n_used_nodes: usize,
    pub n_outgoing_edges: usize,
    pub n_incoming_edges: usize,
    pub avg_outgoing_edges: f64,
    pub avg_incoming_edges: f64,
    pub max_outgoing_edges: usize,
    pub max_incoming_edges: usize,
    pub n_edges: usize,
    pub n_marked_sets: u64,
    #[builder(default = "-1")]
    pub longest_path: i64,
    #[builder(default = "-1")]
    pub shortest_path: i64,
    pub run_time_millis: u128,
    #[builder(default)]
    pub metadata: Vec<i64>,
}

impl RunInfo {
    /// Derives the edge/node-shaped fields directly from a finished table,
    /// leaving the solve-specific counters to the caller.
    pub fn from_table(
        description: impl Into<String>,
        table: &DpTable,
        solution_found: bool,
        metrics: &SolveMetrics,
        run_time: Duration,
    ) -> RunInfo {
        let n_used_nodes = table.total_used_nodes();
        let n_outgoing_edges = table.total_outgoing_edges();
        let n_incoming_edges = table.total_incoming_edges();
        let avg_outgoing_edges = if n_used_nodes > 0 {
            n_outgoing_edges as f64 / n_used_nodes as f64
        } else {
            0.0
        };
        let avg_incoming_edges = if n_used_nodes > 0 {
            n_incoming_edges as f64 / n_used_nodes as f64
        } else {
            0.0
        };
        RunInfoBuilder::default()
            .description(description.into())
            .solution_found(solution_found)
            .n_intervals(table.n() as u32)
            .n_groups_built(metrics.n_groups_built)
            .n_groups_kept(metrics.n_groups_kept)
            .n_solutions(metrics.n_solutions)
            .n_steps(metrics.n_steps)
            .n_used_nodes(n_used_nodes)
            .n_outgoing_edges(n_outgoing_edges)
            .n_incoming_edges(n_incoming_edges)
            .avg_outgoing_edges(avg_outgoing_edges)
            .avg_incoming_edges(avg_incoming_edges)
            .max_outgoing_edges(table.max_outgoing_edges())
            .max_incoming_edges(table.max_incoming_edges())
            .n_edges(n_outgoing_edges)
            .n_marked_sets(metrics.n_marked_sets)
            .longest_path(if solution_found { metrics.longest_path } else { -1 })
            .shortest_path(if solution_found { metrics.shortest_path } else { -1 })
            .run_time_millis(run_time.as_millis())
            .metadata(metrics.metadata.clone())
            .build()
            .expect("every required RunInfo field is set above")
    }
}

/// A mutable counter bag the solvers update in place while running;
/// consumed into a `RunInfo` once the table is fully populated.
#[derive(Debug, Clone, Default)]
pub struct SolveMetrics {
    pub n_groups_built: u64,
    pub n_groups_kept: u64,
    pub n_solutions: u64,
    pub n_steps: u64,
    pub n_marked_sets: u64,
    pub longest_path: i64,
    pub shortest_path: i64,
    pub metadata: Vec<i64>,
}

impl SolveMetrics {
    pub fn new() -> Self {
        SolveMetrics {
            longest_path: -1,
            shortest_path: -1,
            ..Default::default()
        }
    }

    pub fn record_group_built(&mut self) {
        self.n_groups_built += 1;
    }

    pub fn record_group_kept(&mut self) {
        self.n_groups_kept += 1;
    }

    pub fn record_step(&mut self) {
        self.n_steps += 1;
    }

    pub fn record_mark(&mut self) {
        self.n_marked_sets += 1;
    }

    pub fn record_path_length(&mut self, length: i64) {
        self.longest_path = self.longest_path.max(length);
        self.shortest_path = if self.shortest_path < 0 {
            length
        } else {
            self.shortest_path.min(length)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_table_on_empty_table_has_zero_averages() {
        let table = DpTable::new(2);
        let metrics = SolveMetrics::new();
        let info = RunInfo::from_table("test", &table, false, &metrics, Duration::from_millis(0));
        assert_eq!(0.0, info.avg_outgoing_edges);
        assert_eq!(-1, info.longest_path);
    }

    #[test]
    fn path_length_tracks_min_and_max_across_records() {
        let mut metrics = SolveMetrics::new();
        metrics.record_path_length(3);
        metrics.record_path_length(7);
        metrics.record_path_length(1);
        assert_eq!(7, metrics.longest_path);
        assert_eq!(1, metrics.shortest_path);
    }

    #[test]
    fn run_info_round_trips_through_json() {
        let table = DpTable::new(1);
        let metrics = SolveMetrics::new();
        let info = RunInfo::from_table("rt", &table, false, &metrics, Duration::from_millis(5));
        let json = serde_json::to_string(&info).unwrap();
        let back: RunInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.description, back.description);
        assert_eq!(info.run_time_millis, back.run_time_millis);
    }
}
