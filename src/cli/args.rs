use crate::config::{Config, EnvConfig, WalkErrorPolicy};
use crate::output::ReportFormat;
use crate::timestamp::TimestampMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webloc-report")]
#[command(about = "Report the URLs stored in .webloc shortcut files under a directory")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a directory tree and write a report (default)
    Scan(ScanArgs),
    /// Create default config file
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory to write the report into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Report file name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// What to do when a directory cannot be read
    #[arg(long, value_enum)]
    pub on_error: Option<WalkErrorPolicy>,

    /// Where creation times come from
    #[arg(long, value_enum)]
    pub timestamps: Option<TimestampMode>,

    /// Paths to skip, relative to the scan root (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_links: bool,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            output_dir: None,
            prefix: None,
            format: None,
            on_error: None,
            timestamps: None,
            exclude: vec![],
            follow_links: false,
            config: None,
            no_config: false,
            no_color: false,
            verbose: 0,
            quiet: false,
        }
    }
}

impl ScanArgs {
    /// Layer environment and command-line settings over a loaded config.
    pub fn apply(&self, mut config: Config, env: &EnvConfig) -> Config {
        if let Some(dir) = &env.output_dir {
            config.output.directory = dir.clone();
        }
        if env.no_color == Some(true) || EnvConfig::no_color_env() {
            config.output.color = false;
        }

        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.output.prefix = prefix.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(policy) = self.on_error {
            config.scan.on_error = policy;
        }
        if let Some(mode) = self.timestamps {
            config.timestamps.mode = mode;
        }
        config.scan.exclude.extend(self.exclude.iter().cloned());
        if self.follow_links {
            config.scan.follow_links = true;
        }
        if self.no_color {
            config.output.color = false;
        }
        if self.quiet {
            config.output.progress = false;
        }
        config
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Create config with all options filled in
    #[arg(long)]
    pub full: bool,

    /// Output path
    #[arg(short, long, default_value = ".weblocreport.yaml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}
