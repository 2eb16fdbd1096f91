use super::TimestampProvider;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Portable fallback built on `std::fs::metadata`.
///
/// On Unix this is the inode change time (`ctime`), which is only an upper
/// bound on creation time. Elsewhere the platform's creation time is used,
/// or the modification time when that is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataTime;

impl TimestampProvider for MetadataTime {
    fn name(&self) -> &'static str {
        "metadata"
    }

    #[cfg(unix)]
    fn timestamp(&self, path: &Path) -> Option<DateTime<Local>> {
        use chrono::TimeZone;
        use std::os::unix::fs::MetadataExt;

        let meta = fs::metadata(path).ok()?;
        Local
            .timestamp_opt(meta.ctime(), meta.ctime_nsec().clamp(0, 999_999_999) as u32)
            .single()
    }

    #[cfg(not(unix))]
    fn timestamp(&self, path: &Path) -> Option<DateTime<Local>> {
        let meta = fs::metadata(path).ok()?;
        let time = meta.created().or_else(|_| meta.modified()).ok()?;
        Some(DateTime::<Local>::from(time))
    }
}
