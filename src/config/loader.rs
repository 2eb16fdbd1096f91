//! Config loading with precedence from multiple locations

use crate::config::schema::Config;
use std::fs;
use std::path::Path;

/// Config file names to search for
pub const CONFIG_NAMES: &[&str] = &[".weblocreport.yaml", ".weblocreport.yml"];

/// Load config with precedence:
/// 1. Explicit path (`--config` flag or `WEBLOC_REPORT_CONFIG`)
/// 2. The search directory (normally the current directory)
/// 3. ~/.config/webloc-report/config.yaml
/// 4. Built-in defaults
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path) -> Config {
    if let Some(path) = explicit_path {
        if let Some(config) = load_from_path(path) {
            return config;
        }
        tracing::warn!(path = %path.display(), "config file not usable, searching defaults");
    }

    for name in CONFIG_NAMES {
        if let Some(config) = load_from_path(&search_dir.join(name)) {
            return config;
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("webloc-report");
        for name in &["config.yaml", "config.yml"] {
            if let Some(config) = load_from_path(&dir.join(name)) {
                return config;
            }
        }
    }

    Config::default()
}

/// Load config from a specific path
fn load_from_path(path: &Path) -> Option<Config> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read config file");
            return None;
        }
    };

    match serde_yaml::from_str(&content) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalkErrorPolicy;
    use crate::output::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_search_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".weblocreport.yaml"),
            "output:\n  prefix: bookmarks_\n",
        )
        .unwrap();

        let config = load_config(None, temp.path());
        assert_eq!(config.output.prefix, "bookmarks_");
    }

    #[test]
    fn test_yml_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".weblocreport.yml"),
            "output:\n  format: jsonl\n",
        )
        .unwrap();

        let config = load_config(None, temp.path());
        assert_eq!(config.output.format, ReportFormat::Jsonl);
    }

    #[test]
    fn test_explicit_path_takes_precedence() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".weblocreport.yaml"),
            "scan:\n  on_error: abort\n",
        )
        .unwrap();

        let explicit = temp.path().join("custom.yaml");
        fs::write(&explicit, "scan:\n  on_error: skip\n").unwrap();

        let config = load_config(Some(&explicit), temp.path());
        assert_eq!(config.scan.on_error, WalkErrorPolicy::Skip);
    }

    #[test]
    fn test_invalid_explicit_falls_back_to_search_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".weblocreport.yaml"),
            "output:\n  prefix: local_\n",
        )
        .unwrap();

        let explicit = temp.path().join("broken.yaml");
        fs::write(&explicit, "scan: [not, a, map").unwrap();

        let config = load_config(Some(&explicit), temp.path());
        assert_eq!(config.output.prefix, "local_");
    }
}
