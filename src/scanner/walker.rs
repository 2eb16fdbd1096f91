//! Recursive discovery of `.webloc` files.

use crate::error::ReportError;
use crate::scanner::filter::PathFilter;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use walkdir::{DirEntry, WalkDir};

pub const WEBLOC_EXTENSION: &str = "webloc";

/// Report value for files that sit directly in the scan root.
pub const ROOT_MARKER: &str = "/";

/// A matched shortcut file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeblocFile {
    pub path: PathBuf,
    pub filename: String,
    /// Containing directory relative to the scan root, `/` for the root.
    pub relative_dir: String,
}

pub struct WeblocWalker {
    root: PathBuf,
    follow_links: bool,
    filter: PathFilter,
}

impl WeblocWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: normalize_root(root),
            follow_links: false,
            filter: PathFilter::allow_all(),
        }
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree, depth first, yielding matched files and
    /// traversal errors in discovery order.
    pub fn walk(&self) -> impl Iterator<Item = Result<WeblocFile, walkdir::Error>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.excluded(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_file() && is_webloc(entry.path()) => {
                    Some(Ok(self.to_file(&entry)))
                }
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
    }

    fn excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        match entry.path().strip_prefix(&self.root) {
            Ok(relative) => self.filter.is_excluded(relative),
            Err(_) => false,
        }
    }

    fn to_file(&self, entry: &DirEntry) -> WeblocFile {
        WeblocFile {
            path: entry.path().to_path_buf(),
            filename: entry.file_name().to_string_lossy().into_owned(),
            relative_dir: relative_dir(&self.root, entry.path()),
        }
    }
}

/// Strip trailing separators, keeping a bare filesystem root intact.
pub fn normalize_root(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    let trimmed = raw.trim_end_matches(|c: char| c == '/' || c == MAIN_SEPARATOR);
    if trimmed.is_empty() || trimmed.len() == raw.len() {
        root.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}

/// Check the scan root before anything is written.
pub fn validate_root(root: &Path) -> Result<PathBuf, ReportError> {
    let root = normalize_root(root);
    if !root.exists() {
        return Err(ReportError::RootNotFound(root));
    }
    if !root.is_dir() {
        return Err(ReportError::RootNotDirectory(root));
    }
    Ok(root)
}

/// Case-insensitive `.webloc` extension check.
pub fn is_webloc(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case(WEBLOC_EXTENSION))
        .unwrap_or(false)
}

/// Directory containing `file`, relative to `root`, joined with `/`.
pub fn relative_dir(root: &Path, file: &Path) -> String {
    let parent = file.parent().unwrap_or(Path::new(""));

    let joined = match parent.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => parent
            .to_string_lossy()
            .trim_start_matches(|c: char| c == '/' || c == MAIN_SEPARATOR)
            .to_string(),
    };

    if joined.is_empty() {
        ROOT_MARKER.to_string()
    } else {
        joined
    }
}
