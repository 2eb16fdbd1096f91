use super::TimestampProvider;
use chrono::{DateTime, Local, TimeZone};
use std::path::Path;
use std::process::Command;

/// Birth time from the system `stat` utility.
///
/// The call blocks until `stat` exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct StatBirthTime {
    program: &'static str,
    format_args: [&'static str; 2],
    dialect: &'static str,
}

impl StatBirthTime {
    /// `stat -f %B` (macOS and the BSDs)
    pub fn bsd() -> Self {
        Self {
            program: "stat",
            format_args: ["-f", "%B"],
            dialect: "stat-bsd",
        }
    }

    /// `stat -c %W` (GNU coreutils)
    pub fn gnu() -> Self {
        Self {
            program: "stat",
            format_args: ["-c", "%W"],
            dialect: "stat-gnu",
        }
    }

    /// The dialect the host's `stat` speaks, if it has a birth time field.
    pub fn for_host() -> Option<Self> {
        if cfg!(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd",
            target_os = "dragonfly"
        )) {
            Some(Self::bsd())
        } else if cfg!(any(target_os = "linux", target_os = "android")) {
            Some(Self::gnu())
        } else {
            None
        }
    }

    #[cfg(test)]
    fn with_program(mut self, program: &'static str) -> Self {
        self.program = program;
        self
    }
}

impl TimestampProvider for StatBirthTime {
    fn name(&self) -> &'static str {
        self.dialect
    }

    fn timestamp(&self, path: &Path) -> Option<DateTime<Local>> {
        let output = Command::new(self.program)
            .args(self.format_args)
            .arg("--")
            .arg(path)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        parse_epoch(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `stat` output as epoch seconds. Zero, negative, `-` and anything
/// non-numeric mean the filesystem did not record a birth time.
fn parse_epoch(raw: &str) -> Option<DateTime<Local>> {
    let secs: i64 = raw.trim().parse().ok()?;
    if secs <= 0 {
        return None;
    }
    Local.timestamp_opt(secs, 0).single()
}
