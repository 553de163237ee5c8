//! # Hello (static library)
//!
//! The same greeter as `hello_shared`, packaged to be linked into its
//! consumer at build time. Nothing is exported beyond the Rust API; the
//! printing lives in a crate-private helper.
//!
//! ```rust
//! use hello_static::Hello;
//!
//! let hello = Hello::new("World");
//! assert_eq!(hello.greeting(), "Hello World from a static library.\n");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use std::io::{self, Write};

mod details;

/// A greeter holding a name fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hello {
    name: String,
}

impl Hello {
    /// Creates a greeter, taking ownership of `name`. No validation is done.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name given at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line [`greet`](Self::greet) prints.
    pub fn greeting(&self) -> String {
        details::line(&self.name)
    }

    /// Writes the greeting line to `out`.
    pub fn write_greeting<W: Write>(&self, out: W) -> io::Result<()> {
        details::write_impl(out, &self.name)
    }

    /// Prints the greeting to standard output, ignoring write failures.
    pub fn greet(&self) {
        details::print_impl(&self.name);
    }
}
