//! Runtime configuration: defaults, then the TOML config file, then flags.

use crate::cli::Args;
use crate::error::{CliError, Result};
use hello_libs::Linkage;
use serde::Deserialize;
use std::path::Path;

/// Name greeted when neither the config file nor the command line gives one
pub const DEFAULT_NAME: &str = "World";

/// Upper bound on `repeat`
pub const MAX_REPEAT: usize = 1000;

/// Contents of a `--config` file. Every key is optional.
///
/// ```toml
/// name = "World"
/// linkage = "static"
/// repeat = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Name to greet
    pub name: Option<String>,
    /// `"shared"` or `"static"`
    pub linkage: Option<String>,
    /// How many times to greet
    pub repeat: Option<usize>,
}

impl FileConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::parse(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses config file contents.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Verbosity level for diagnostics on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Errors only
    Quiet,
    /// Warnings and errors
    Normal,
    /// Debug information
    Verbose,
}

impl VerbosityLevel {
    /// Default `env_logger` filter for this level; `RUST_LOG` overrides it.
    pub fn log_filter(self) -> &'static str {
        match self {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "debug",
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Name handed to the greeter
    pub name: String,
    /// Which greeter to build
    pub linkage: Linkage,
    /// Number of `greet()` calls
    pub repeat: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            linkage: Linkage::default(),
            repeat: 1,
        }
    }
}

impl RuntimeConfig {
    /// Resolves the settings for `args`, loading `--config` if given.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, args)
    }

    /// Applies `file` over the defaults and `args` over both.
    pub fn merge(file: FileConfig, args: &Args) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = file.name {
            config.name = name;
        }
        if let Some(linkage) = file.linkage {
            config.linkage = linkage
                .parse::<Linkage>()
                .map_err(|e| CliError::InvalidArguments {
                    reason: format!("config file: {}", e),
                })?;
        }
        if let Some(repeat) = file.repeat {
            config.repeat = repeat;
        }

        if let Some(name) = &args.name {
            config.name = name.clone();
        }
        if let Some(linkage) = args.linkage {
            config.linkage = linkage;
        }
        if let Some(repeat) = args.repeat {
            config.repeat = repeat;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges. The name is never validated.
    pub fn validate(&self) -> Result<()> {
        if self.repeat == 0 {
            return Err(CliError::InvalidArguments {
                reason: "repeat must be at least 1".to_string(),
            });
        }
        if self.repeat > MAX_REPEAT {
            return Err(CliError::InvalidArguments {
                reason: format!("repeat cannot exceed {}", MAX_REPEAT),
            });
        }
        Ok(())
    }
}
