use crate::output::ReportFormat;
use crate::timestamp::TimestampMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub timestamps: TimestampConfig,
}

/// What to do when the walk hits an unreadable directory or entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WalkErrorPolicy {
    /// Close the report and stop the run
    #[default]
    Abort,
    /// Warn and keep walking
    Skip,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_links: bool,

    /// Traversal error handling
    #[serde(default)]
    pub on_error: WalkErrorPolicy,

    /// Paths to skip (glob patterns, relative to the scan root)
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the report is written to
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Report file name prefix, followed by the run's start time
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub format: ReportFormat,

    /// Whether to use colors
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print a line per processed file
    #[serde(default = "default_true")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            prefix: default_prefix(),
            format: ReportFormat::default(),
            color: true,
            progress: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimestampConfig {
    #[serde(default)]
    pub mode: TimestampMode,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_prefix() -> String {
    "webloc_report_".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self {
            scan: ScanConfig {
                follow_links: false,
                on_error: WalkErrorPolicy::Skip,
                exclude: vec!["**/.Trash/**".to_string(), "**/node_modules/**".to_string()],
            },
            output: OutputConfig {
                directory: default_directory(),
                prefix: default_prefix(),
                format: ReportFormat::Csv,
                color: true,
                progress: true,
            },
            timestamps: TimestampConfig {
                mode: TimestampMode::Auto,
            },
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
