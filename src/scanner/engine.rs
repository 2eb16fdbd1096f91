use crate::config::{Config, WalkErrorPolicy};
use crate::error::ReportError;
use crate::output::csv::CsvReportWriter;
use crate::output::json::JsonLinesWriter;
use crate::output::record::WeblocRecord;
use crate::output::text::Console;
use crate::output::{ReportFormat, ReportSink, RunSummary};
use crate::scanner::filter::PathFilter;
use crate::scanner::walker::{validate_root, WeblocFile, WeblocWalker};
use crate::shortcut::read_url;
use crate::timestamp::CreationTimeResolver;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// `YYYY-MM-DD_HH-MM-SS`, used in report file names.
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Drives one run: walk, parse, resolve, write.
pub struct ReportEngine {
    output_dir: PathBuf,
    prefix: String,
    format: ReportFormat,
    on_error: WalkErrorPolicy,
    follow_links: bool,
    excludes: Vec<String>,
    resolver: CreationTimeResolver,
}

impl ReportEngine {
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.output.directory.clone(),
            prefix: config.output.prefix.clone(),
            format: config.output.format,
            on_error: config.scan.on_error,
            follow_links: config.scan.follow_links,
            excludes: config.scan.exclude.clone(),
            resolver: CreationTimeResolver::detect(config.timestamps.mode),
        }
    }

    pub fn with_resolver(mut self, resolver: CreationTimeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Full run: check the root, create the report file, scan, print the
    /// summary. The report is never created if the root is invalid.
    pub fn run(&self, root: &Path, console: &mut Console) -> Result<RunSummary, ReportError> {
        let start = Instant::now();
        let started_at = Local::now();

        let root = validate_root(root)?;

        let report_path = self
            .output_dir
            .join(report_file_name(&self.prefix, self.format, &started_at));
        let file = File::create(&report_path).map_err(|source| ReportError::CreateReport {
            path: report_path.clone(),
            source,
        })?;
        let out = BufWriter::new(file);

        tracing::info!(
            root = %root.display(),
            report = %report_path.display(),
            "starting scan"
        );

        let mut sink: Box<dyn ReportSink> = match self.format {
            ReportFormat::Csv => Box::new(CsvReportWriter::new(out)?),
            ReportFormat::Jsonl => Box::new(JsonLinesWriter::new(out)),
        };

        let mut summary = self.scan(&root, sink.as_mut(), console)?;
        drop(sink);

        summary.report_path = Some(report_path);
        summary.scan_duration = start.elapsed();

        tracing::info!(
            matched = summary.files_matched,
            succeeded = summary.files_succeeded,
            failed = summary.files_failed,
            "scan finished"
        );

        console.summary(&summary)?;
        Ok(summary)
    }

    /// Scan `root` and write one row per shortcut into `sink`.
    ///
    /// The sink is flushed before returning, including when a traversal
    /// error aborts the scan.
    pub fn scan<S: ReportSink + ?Sized>(
        &self,
        root: &Path,
        sink: &mut S,
        console: &mut Console,
    ) -> Result<RunSummary, ReportError> {
        let walker = WeblocWalker::new(root)
            .with_follow_links(self.follow_links)
            .with_filter(PathFilter::new(&self.excludes));
        let mut summary = RunSummary::new();

        for entry in walker.walk() {
            let file = match entry {
                Ok(file) => file,
                Err(e) => match self.on_error {
                    WalkErrorPolicy::Abort => {
                        sink.finish()?;
                        return Err(ReportError::Walk {
                            root: walker.root().to_path_buf(),
                            source: e,
                        });
                    }
                    WalkErrorPolicy::Skip => {
                        tracing::warn!(error = %e, "skipping entry");
                        console.walk_warning(&e.to_string())?;
                        continue;
                    }
                },
            };

            if let Err(e) = self.process(&file, &mut summary, sink, console) {
                let _ = sink.finish();
                return Err(e);
            }
        }

        sink.finish()?;
        Ok(summary)
    }

    fn process<S: ReportSink + ?Sized>(
        &self,
        file: &WeblocFile,
        summary: &mut RunSummary,
        sink: &mut S,
        console: &mut Console,
    ) -> Result<(), ReportError> {
        summary.files_matched += 1;

        let url = read_url(&file.path);
        let record = WeblocRecord {
            filename: file.filename.clone(),
            url: url.as_ref().ok().cloned(),
            creation_date: self.resolver.resolve(&file.path),
            relative_path: file.relative_dir.clone(),
        };

        console.progress(&record)?;

        match url {
            Ok(_) => summary.record_success(),
            Err(reason) => {
                summary.record_failure();
                tracing::debug!(path = %file.path.display(), %reason, "no URL extracted");
                console.url_warning(&record, reason)?;
            }
        }

        sink.write_record(&record)?;
        Ok(())
    }
}

/// `<prefix><YYYY-MM-DD_HH-MM-SS>.<ext>`
pub fn report_file_name(prefix: &str, format: ReportFormat, started_at: &DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        prefix,
        started_at.format(FILE_STAMP_FORMAT),
        format.extension()
    )
}
