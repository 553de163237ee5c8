//! Error types for the `hello` command.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Everything that can stop the `hello` command before it greets.
///
/// The greeters themselves never fail; these errors all come from resolving
/// the configuration.
#[derive(Error, Debug)]
pub enum CliError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path given with `--config`
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this command
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// Path given with `--config`
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A value from the config file or the command line is out of range
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// What was wrong
        reason: String,
    },
}

impl CliError {
    /// Hints printed under the error message
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            CliError::ConfigRead { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Omit --config to use the built-in defaults".to_string(),
            ],
            CliError::ConfigParse { .. } => vec![
                "Supported keys are: name, linkage, repeat".to_string(),
                "Example: name = \"World\"".to_string(),
            ],
            CliError::InvalidArguments { .. } => vec!["Run `hello --help` for usage".to_string()],
        }
    }
}
