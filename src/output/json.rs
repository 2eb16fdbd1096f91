use crate::output::record::{WeblocRecord, URL_ERROR_MARKER};
use crate::output::ReportSink;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonRecord<'a> {
    filename: &'a str,
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    creation_date: &'a str,
    relative_path: &'a str,
}

/// JSON Lines report writer: one object per shortcut, no header.
pub struct JsonLinesWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonLinesWriter<W> {
    fn write_record(&mut self, record: &WeblocRecord) -> io::Result<()> {
        let row = JsonRecord {
            filename: &record.filename,
            url: record.url.as_deref(),
            error: record.url.is_none().then_some(URL_ERROR_MARKER),
            creation_date: &record.creation_date,
            relative_path: &record.relative_path,
        };
        serde_json::to_writer(&mut self.out, &row)?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
