//! # hello
//!
//! Consumer program for the greeter libraries. Links the static variant at
//! build time and the shared variant through its Rust API, and prints the
//! greeting of whichever one is selected.
//!
//! ```bash
//! hello                       # Hello World
//! hello Ferris -l static      # Hello Ferris from a static library.
//! hello -c hello.toml -n 3    # settings from a config file, greeted three times
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;

pub use cli::{run, Args};
pub use config::{FileConfig, RuntimeConfig, VerbosityLevel};
pub use error::{CliError, Result};

/// Installs `env_logger` on stderr, filtered by `RUST_LOG` or `verbosity`.
pub fn init_logging(verbosity: VerbosityLevel) {
    let env = env_logger::Env::default().default_filter_or(verbosity.log_filter());
    // A logger may already be installed when embedded; keep that one.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
