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

//! Writes a `RunInfo` to disk as pretty-printed JSON, mirroring
//! `jsonPrinterSaveToFile`'s collision-avoidance naming scheme:
//! `results/<description>_<n_intervals>_<idx>.json`, where `idx` increments
//! past any file that already exists.

use std::fs::{self, File};
use std::path::PathBuf;

use thiserror::Error;

use crate::metrics::RunInfo;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create the results directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("failed to write the report file: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to serialize the run report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Picks the first non-colliding path `results/<description>_<n>_<idx>.json`
/// and writes `info` to it as pretty JSON. Returns the path written to.
pub fn save_to_file(info: &RunInfo, results_dir: impl Into<PathBuf>) -> Result<PathBuf, ReportError> {
    let results_dir = results_dir.into();
    fs::create_dir_all(&results_dir).map_err(ReportError::CreateDir)?;

    let mut idx = 0u32;
    let path = loop {
        let candidate = results_dir.join(format!("{}_{}_{}.json", info.description, info.n_intervals, idx));
        if !candidate.exists() {
            break candidate;
        }
        idx += 1;
    };

    let file = File::create(&path).map_err(ReportError::Write)?;
    serde_json::to_writer_pretty(file, info)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DpTable;
    use std::time::Duration;

    #[test]
    fn save_to_file_avoids_name_collisions() {
        let dir = std::env::temp_dir().join(format!("gai-report-test-{}", std::process::id()));
        let table = DpTable::new(1);
        let metrics = crate::metrics::SolveMetrics::new();
        let info = RunInfo::from_table("collision_test", &table, false, &metrics, Duration::from_millis(1));

        let first = save_to_file(&info, &dir).unwrap();
        let second = save_to_file(&info, &dir).unwrap();
        assert_ne!(first, second);

        let _ = fs::remove_dir_all(&dir);
    }
}
