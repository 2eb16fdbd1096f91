use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Exclude patterns, matched against paths relative to the scan root.
pub struct PathFilter {
    excludes: Option<GlobSet>,
}

impl PathFilter {
    pub fn new(exclude_patterns: &[String]) -> Self {
        if exclude_patterns.is_empty() {
            return Self { excludes: None };
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid exclude pattern"),
            }
        }

        Self {
            excludes: builder.build().ok(),
        }
    }

    pub fn allow_all() -> Self {
        Self { excludes: None }
    }

    pub fn is_excluded(&self, relative: &Path) -> bool {
        match &self.excludes {
            Some(set) => set.is_match(relative),
            None => false,
        }
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::allow_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_patterns() {
        let filter = PathFilter::new(&[]);
        assert!(!filter.is_excluded(Path::new("anything/at/all.webloc")));
    }

    #[test]
    fn test_directory_pattern() {
        let filter = PathFilter::new(&["archive".to_string(), "**/.Trash/**".to_string()]);

        assert!(filter.is_excluded(Path::new("archive")));
        assert!(filter.is_excluded(Path::new("home/.Trash/old.webloc")));
        assert!(!filter.is_excluded(Path::new("docs/archive.webloc")));
    }

    #[test]
    fn test_file_pattern() {
        let filter = PathFilter::new(&["**/draft-*.webloc".to_string()]);

        assert!(filter.is_excluded(Path::new("links/draft-1.webloc")));
        assert!(!filter.is_excluded(Path::new("links/final.webloc")));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let filter = PathFilter::new(&["[".to_string(), "skip/**".to_string()]);

        assert!(filter.is_excluded(Path::new("skip/a.webloc")));
        assert!(!filter.is_excluded(Path::new("keep/a.webloc")));
    }
}
