use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const ROOT_ENV: &str = "DOCDESK_ROOT";
pub const LOG_ENV: &str = "DOCDESK_LOG";
pub const PDF_MAX_BYTES_ENV: &str = "DOCDESK_PDF_MAX_BYTES";

const DEFAULT_ROOT: &str = "./source_files";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Folder whose first- and second-level subfolders are offered for browsing.
    pub root_folder: PathBuf,
    pub log_filter: String,
    /// Largest PDF that will be embedded; `None` means no limit.
    pub pdf_max_bytes: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_folder: PathBuf::from(DEFAULT_ROOT),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pdf_max_bytes: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(root) = get(ROOT_ENV) {
            config.root_folder = PathBuf::from(root);
        }
        if let Some(filter) = get(LOG_ENV) {
            config.log_filter = filter;
        }
        if let Some(raw) = get(PDF_MAX_BYTES_ENV) {
            let limit = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{PDF_MAX_BYTES_ENV} must be a byte count, got '{raw}'"))?;
            config.pdf_max_bytes = Some(limit);
        }
        Ok(config)
    }
}
