//! Command line interface for the `hello` binary.

mod args;

pub use args::Args;

use crate::config::RuntimeConfig;
use crate::error::Result;
use hello_libs::greeter;

/// Resolves the configuration for `args` and greets.
pub fn run(args: &Args) -> Result<()> {
    let config = RuntimeConfig::resolve(args)?;
    execute(&config);
    Ok(())
}

/// Builds the configured greeter and calls `greet()` `repeat` times.
pub fn execute(config: &RuntimeConfig) {
    log::debug!(
        "greeting {:?} {} time(s) with the {} greeter",
        config.name,
        config.repeat,
        config.linkage
    );
    let hello = greeter(config.linkage, config.name.as_str());
    for _ in 0..config.repeat {
        hello.greet();
    }
}
