//! Submission configuration for the Beacon wizard.
//!
//! The configuration supplies the category catalog offered to authors and the
//! attachment policy (advisory by default). It is read from
//! `~/.config/beacon/submission.yaml` on most platforms, or from the path in
//! `BEACON_CONFIG_PATH`. A missing file yields the defaults.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use beacon_types::Category;
use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{expand_tilde, format_bytes};

/// Environment variable allowing callers to override the configuration path.
pub const BEACON_CONFIG_PATH_ENV: &str = "BEACON_CONFIG_PATH";

/// Default filename for the configuration file.
pub const CONFIG_FILE_NAME: &str = "submission.yaml";

const MIB: u64 = 1024 * 1024;
const DEFAULT_MAX_SIZE_BYTES: u64 = 20 * MIB;

/// Error surfaced when reading or validating the configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported config format for {0}; expected .yaml, .yml or .json")]
    UnknownFormat(PathBuf),
    #[error("category catalog must not be empty")]
    EmptyCatalog,
    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(Category),
    #[error("accepted extension '{0}' must be a bare extension such as 'pdf'")]
    InvalidExtension(String),
}

/// Accepted file types and size limit for manuscripts.
///
/// With `enforce = false` (the default) the extensions and limit are only
/// declared to the author; files outside them are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentPolicy {
    /// Lowercase extensions without the leading dot.
    pub accepted_extensions: Vec<String>,
    pub max_size_bytes: u64,
    pub enforce: bool,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["pdf".to_string(), "docx".to_string(), "doc".to_string()],
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            enforce: false,
        }
    }
}

impl AttachmentPolicy {
    /// Returns `true` when the extension is on the allow-list (case-insensitive).
    pub fn is_accepted_extension(&self, extension: Option<&str>) -> bool {
        extension.is_some_and(|ext| {
            self.accepted_extensions
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
    }

    /// Trims each extension, strips a leading dot and lowercases it, so `.PDF` reads as `pdf`.
    pub fn normalize_extensions(&mut self) {
        for extension in &mut self.accepted_extensions {
            let trimmed = extension.trim();
            *extension = trimmed.strip_prefix('.').unwrap_or(trimmed).to_ascii_lowercase();
        }
    }

    /// Hint rendered under the drop target, e.g. `Supported formats: PDF, DOCX, DOC (Max: 20MB)`.
    pub fn describe(&self) -> String {
        let formats: Vec<String> = self.accepted_extensions.iter().map(|ext| ext.to_ascii_uppercase()).collect();
        let limit = if self.max_size_bytes > 0 && self.max_size_bytes % MIB == 0 {
            format!("{}MB", self.max_size_bytes / MIB)
        } else {
            format_bytes(self.max_size_bytes)
        };
        format!("Supported formats: {} (Max: {})", formats.join(", "), limit)
    }
}

/// Options supplied to a wizard session by its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Categories offered in the select, in display order.
    pub categories: Vec<Category>,
    pub attachment: AttachmentPolicy,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            attachment: AttachmentPolicy::default(),
        }
    }
}

impl SubmissionConfig {
    /// Checks that the catalog is non-empty and free of duplicates and that
    /// every accepted extension is a bare, dot-free name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bad) = self
            .attachment
            .accepted_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.contains(['.', '/', '\\']))
        {
            return Err(ConfigError::InvalidExtension(bad.clone()));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(*category) {
                return Err(ConfigError::DuplicateCategory(*category));
            }
        }
        Ok(())
    }
}

/// Returns the default path for the configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(BEACON_CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("beacon")
        .join(CONFIG_FILE_NAME)
}

/// Loads the configuration from the default path.
pub fn load_config() -> Result<SubmissionConfig, ConfigError> {
    load_config_from_path(&default_config_path())
}

/// Loads and validates the configuration stored at `path`.
pub fn load_config_from_path(path: &Path) -> Result<SubmissionConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No submission config found; using defaults");
            return Ok(SubmissionConfig::default());
        }
        Err(error) => return Err(ConfigError::Io(error)),
    };

    let mut config: SubmissionConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => return Err(ConfigError::UnknownFormat(path.to_path_buf())),
    };
    config.attachment.normalize_extensions();
    config.validate()?;

    if config.attachment.enforce {
        debug!(path = %path.display(), "Attachment policy is enforced");
    }
    if config.categories.len() != Category::ALL.len() {
        warn!(
            path = %path.display(),
            configured = config.categories.len(),
            "Category catalog does not list every category"
        );
    }
    Ok(config)
}
