//! `hello` - greets a name with the shared or the static greeter.

use hello_cli::{init_logging, run, Args};
use std::process;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbosity());

    if let Err(e) = run(&args) {
        eprintln!("❌ {}", e);

        let suggestions = e.recovery_suggestions();
        if !suggestions.is_empty() && !args.quiet {
            eprintln!("\n💡 Recovery suggestions:");
            for suggestion in suggestions {
                eprintln!("  • {}", suggestion);
            }
        }

        process::exit(1);
    }
}
