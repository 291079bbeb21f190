//! Configuration loading and small helpers shared by the Beacon crates.

pub mod config;
pub mod path_processing;
pub mod size_format;

pub use config::{
    AttachmentPolicy, BEACON_CONFIG_PATH_ENV, CONFIG_FILE_NAME, ConfigError, SubmissionConfig, default_config_path,
    load_config, load_config_from_path,
};
pub use path_processing::expand_tilde;
pub use size_format::format_bytes;
