//! Best-effort file creation ("birth") time.
//!
//! Birth time is not available everywhere. The resolver asks a native
//! provider first and falls back to filesystem metadata, which may report
//! a later time (last status change) than the real creation time.

pub mod metadata;
pub mod native;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use metadata::MetadataTime;
pub use native::StatBirthTime;

/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cell text when no timestamp could be obtained.
pub const UNKNOWN: &str = "Unknown";

/// A source of creation timestamps.
pub trait TimestampProvider {
    fn name(&self) -> &'static str;

    fn timestamp(&self, path: &Path) -> Option<DateTime<Local>>;
}

/// Which providers the resolver is allowed to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Native query where the platform has one, metadata otherwise
    #[default]
    Auto,
    /// Always try the `stat` utility first
    Native,
    /// Filesystem metadata only
    Metadata,
}

pub struct CreationTimeResolver {
    primary: Option<Box<dyn TimestampProvider>>,
    fallback: Box<dyn TimestampProvider>,
}

impl CreationTimeResolver {
    pub fn new(
        primary: Option<Box<dyn TimestampProvider>>,
        fallback: Box<dyn TimestampProvider>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Pick providers for the host platform.
    pub fn detect(mode: TimestampMode) -> Self {
        let primary: Option<Box<dyn TimestampProvider>> = match mode {
            TimestampMode::Auto => {
                StatBirthTime::for_host().map(|p| Box::new(p) as Box<dyn TimestampProvider>)
            }
            TimestampMode::Native => Some(Box::new(
                StatBirthTime::for_host().unwrap_or_else(StatBirthTime::bsd),
            )),
            TimestampMode::Metadata => None,
        };

        tracing::debug!(
            primary = primary.as_ref().map(|p| p.name()).unwrap_or("none"),
            "creation time providers selected"
        );

        Self::new(primary, Box::new(MetadataTime))
    }

    pub fn creation_time(&self, path: &Path) -> Option<DateTime<Local>> {
        if let Some(primary) = &self.primary {
            if let Some(ts) = primary.timestamp(path) {
                return Some(ts);
            }
            tracing::debug!(
                path = %path.display(),
                provider = primary.name(),
                "birth time unavailable, using {}",
                self.fallback.name()
            );
        }
        self.fallback.timestamp(path)
    }

    /// Formatted creation time, or [`UNKNOWN`].
    pub fn resolve(&self, path: &Path) -> String {
        match self.creation_time(path) {
            Some(ts) => format_timestamp(&ts),
            None => UNKNOWN.to_string(),
        }
    }
}

pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use regex::Regex;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::NamedTempFile;

    struct Fixed {
        value: Option<DateTime<Local>>,
        calls: Rc<Cell<usize>>,
    }

    impl Fixed {
        fn new(value: Option<DateTime<Local>>) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            (
                Self {
                    value,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl TimestampProvider for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn timestamp(&self, _path: &Path) -> Option<DateTime<Local>> {
            self.calls.set(self.calls.get() + 1);
            self.value
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn pattern() -> Regex {
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap()
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(&at(2021, 3, 4, 5, 6, 7)), "2021-03-04 05:06:07");
    }

    #[test]
    fn test_primary_wins() {
        let (primary, _) = Fixed::new(Some(at(2020, 1, 2, 3, 4, 5)));
        let (fallback, fallback_calls) = Fixed::new(Some(at(2024, 1, 1, 0, 0, 0)));
        let resolver = CreationTimeResolver::new(Some(Box::new(primary)), Box::new(fallback));

        assert_eq!(resolver.resolve(Path::new("x.webloc")), "2020-01-02 03:04:05");
        assert_eq!(fallback_calls.get(), 0);
    }

    #[test]
    fn test_falls_back_when_primary_fails() {
        let (primary, primary_calls) = Fixed::new(None);
        let (fallback, _) = Fixed::new(Some(at(2024, 12, 31, 23, 59, 58)));
        let resolver = CreationTimeResolver::new(Some(Box::new(primary)), Box::new(fallback));

        assert_eq!(resolver.resolve(Path::new("x.webloc")), "2024-12-31 23:59:58");
        assert_eq!(primary_calls.get(), 1);
    }

    #[test]
    fn test_unknown_when_everything_fails() {
        let (primary, _) = Fixed::new(None);
        let (fallback, _) = Fixed::new(None);
        let resolver = CreationTimeResolver::new(Some(Box::new(primary)), Box::new(fallback));

        assert_eq!(resolver.resolve(Path::new("x.webloc")), UNKNOWN);
    }

    #[test]
    fn test_metadata_mode_on_real_file() {
        let file = NamedTempFile::new().unwrap();
        let resolver = CreationTimeResolver::detect(TimestampMode::Metadata);

        assert!(pattern().is_match(&resolver.resolve(file.path())));
    }

    #[test]
    fn test_auto_mode_on_real_file() {
        let file = NamedTempFile::new().unwrap();
        let resolver = CreationTimeResolver::detect(TimestampMode::Auto);

        assert!(pattern().is_match(&resolver.resolve(file.path())));
    }

    #[test]
    fn test_missing_file_is_unknown() {
        let temp = tempfile::TempDir::new().unwrap();
        let resolver = CreationTimeResolver::detect(TimestampMode::Auto);

        assert_eq!(resolver.resolve(&temp.path().join("vanished.webloc")), UNKNOWN);
    }
}
