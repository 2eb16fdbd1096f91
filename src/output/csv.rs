use crate::output::record::WeblocRecord;
use crate::output::ReportSink;
use std::io::{self, Write};

pub const CSV_HEADER: &str = "Filename, URL, Creation Date, Relative Path";

/// CSV report writer. The header goes out as soon as the writer is built.
pub struct CsvReportWriter<W: Write> {
    out: W,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", CSV_HEADER)?;
        Ok(Self { out })
    }

    /// Escape a value for CSV (handle commas, quotes, newlines)
    fn escape_value(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for CsvReportWriter<W> {
    fn write_record(&mut self, record: &WeblocRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{}",
            Self::escape_value(&record.filename),
            Self::escape_value(record.url_cell()),
            Self::escape_value(&record.creation_date),
            Self::escape_value(&record.relative_path),
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
