//! Command line argument parsing.

use crate::config::VerbosityLevel;
use clap::Parser;
use hello_libs::Linkage;
use std::path::PathBuf;

/// Greets a name using the shared-library or the static-library greeter
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hello",
    version,
    about = "Greets a name using the shared-library or the static-library greeter",
    long_about = "Greets a name using one of two packagings of the same greeter:
the shared library (prints \"Hello NAME\") or the static library
(prints \"Hello NAME from a static library.\")."
)]
pub struct Args {
    /// Name to greet (defaults to "World")
    pub name: Option<String>,

    /// Greeter to use: shared or static
    #[arg(short, long, value_name = "LINKAGE")]
    pub linkage: Option<Linkage>,

    /// How many times to greet
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub repeat: Option<usize>,

    /// TOML config file with name, linkage and repeat keys
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all diagnostics except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Verbosity selected by `--verbose` / `--quiet`
    pub fn verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}
