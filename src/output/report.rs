//! Summary of a completed batch run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<FileReport>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub rows_converted: usize,
    pub headers_skipped: usize,
    /// `None` when the file held no data rows and nothing was written.
    pub output_path: Option<PathBuf>,
}

impl RunReport {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            files: Vec::new(),
            started_at: Utc::now(),
            elapsed_ms: 0,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|f| f.rows_converted).sum()
    }

    pub fn files_written(&self) -> usize {
        self.files.iter().filter(|f| f.output_path.is_some()).count()
    }

    pub fn files_skipped(&self) -> usize {
        self.files.len() - self.files_written()
    }

    pub fn finish(&mut self) {
        let elapsed = Utc::now() - self.started_at;
        self.elapsed_ms = elapsed.num_milliseconds().max(0) as u64;
    }
}
