pub mod csv;
pub mod json;
pub mod record;
pub mod text;

use clap::ValueEnum;
use record::WeblocRecord;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_matched: usize,
    pub files_succeeded: usize,
    pub files_failed: usize,
    pub report_path: Option<PathBuf>,
    pub scan_duration: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.files_succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Jsonl,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Jsonl => "jsonl",
        }
    }
}

/// Destination for report rows. Rows are written as they are produced.
pub trait ReportSink {
    fn write_record(&mut self, record: &WeblocRecord) -> io::Result<()>;

    /// Flush buffered rows. Called on both the success and the abort path.
    fn finish(&mut self) -> io::Result<()>;
}
