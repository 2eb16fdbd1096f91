use std::env;
use std::path::PathBuf;

/// Environment variable configuration
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub no_color: Option<bool>,
}

impl EnvConfig {
    pub fn load() -> Self {
        Self {
            config_path: env::var("WEBLOC_REPORT_CONFIG").ok().map(PathBuf::from),
            output_dir: env::var("WEBLOC_REPORT_OUTPUT_DIR").ok().map(PathBuf::from),
            no_color: env::var("WEBLOC_REPORT_NO_COLOR")
                .ok()
                .map(|v| v == "1" || v.to_lowercase() == "true"),
        }
    }

    /// Check if NO_COLOR env var is set (standard convention)
    pub fn no_color_env() -> bool {
        env::var("NO_COLOR").is_ok()
    }
}
