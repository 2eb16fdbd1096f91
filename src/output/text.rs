use crate::output::record::WeblocRecord;
use crate::output::RunSummary;
use crate::shortcut::UrlNotFound;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Console progress, warnings and the closing summary.
pub struct Console {
    out: Box<dyn WriteColor>,
    show_progress: bool,
}

impl Console {
    pub fn stdout(use_color: bool, show_progress: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(Box::new(StandardStream::stdout(choice)), show_progress)
    }

    pub fn new(out: Box<dyn WriteColor>, show_progress: bool) -> Self {
        Self { out, show_progress }
    }

    pub fn progress(&mut self, record: &WeblocRecord) -> io::Result<()> {
        if !self.show_progress {
            return Ok(());
        }
        writeln!(self.out, "Processing: {}", record.display_path())
    }

    pub fn url_warning(&mut self, record: &WeblocRecord, reason: UrlNotFound) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(self.out, "Warning:")?;
        self.out.reset()?;
        writeln!(
            self.out,
            " could not extract URL from {} ({})",
            record.display_path(),
            reason
        )
    }

    pub fn walk_warning(&mut self, message: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(self.out, "Warning:")?;
        self.out.reset()?;
        writeln!(self.out, " skipping unreadable entry: {}", message)
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;

        if summary.files_matched == 0 {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
            writeln!(self.out, "No .webloc files found")?;
        } else {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(self.out, "Processing complete")?;
        }
        self.out.reset()?;

        writeln!(self.out, "  Total files: {}", summary.files_matched)?;
        writeln!(self.out, "  Successful:  {}", summary.files_succeeded)?;

        if summary.has_failures() {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        }
        writeln!(self.out, "  Errors:      {}", summary.files_failed)?;
        self.out.reset()?;

        if let Some(path) = &summary.report_path {
            writeln!(self.out, "  Report:      {}", path.display())?;
        }
        writeln!(
            self.out,
            "  Finished in {:.2}s",
            summary.scan_duration.as_secs_f64()
        )?;

        self.out.flush()
    }
}
