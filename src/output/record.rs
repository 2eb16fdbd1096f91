/// Marker written in the URL column when no URL could be extracted.
pub const URL_ERROR_MARKER: &str = "ERROR: URL not found";

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeblocRecord {
    pub filename: String,
    pub url: Option<String>,
    pub creation_date: String,
    pub relative_path: String,
}

impl WeblocRecord {
    /// The URL, or the error marker.
    pub fn url_cell(&self) -> &str {
        self.url.as_deref().unwrap_or(URL_ERROR_MARKER)
    }

    /// `relative/dir/file.webloc`, for console output.
    pub fn display_path(&self) -> String {
        if self.relative_path == "/" {
            self.filename.clone()
        } else {
            format!("{}/{}", self.relative_path, self.filename)
        }
    }
}
