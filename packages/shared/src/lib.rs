//! # Hello (shared library)
//!
//! A greeter packaged as a dynamically linked library. The crate builds a
//! `cdylib` whose C ABI is declared in `include/hello_shared.h`, plus an
//! `rlib` for Rust consumers.
//!
//! ## Example
//!
//! ```rust
//! use hello_shared::Hello;
//!
//! let hello = Hello::new("World");
//! assert_eq!(hello.greeting(), "Hello World\n");
//! hello.greet(); // prints "Hello World"
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

use std::io::{self, Write};

/// Exported C ABI
pub mod ffi;

/// A greeter holding a name fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hello {
    name: String,
}

impl Hello {
    /// Creates a greeter, taking ownership of `name`.
    ///
    /// The name is not validated; an empty name is greeted as-is.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name given at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line [`greet`](Self::greet) prints, including the trailing newline.
    pub fn greeting(&self) -> String {
        format!("Hello {}\n", self.name)
    }

    /// Writes the greeting line to `out`.
    pub fn write_greeting<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Hello {}", self.name)
    }

    /// Prints the greeting to standard output.
    ///
    /// Write failures are ignored.
    pub fn greet(&self) {
        log::trace!("greeting {:?} from the shared library", self.name);
        let _ = self.write_greeting(io::stdout().lock());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_greeting_world() {
        let hello = Hello::new("World");
        assert_eq!(hello.greeting(), "Hello World\n");
    }

    #[test]
    fn test_greeting_empty_name() {
        let hello = Hello::new("");
        assert_eq!(hello.name(), "");
        assert_eq!(hello.greeting(), "Hello \n");
    }

    #[test]
    fn test_new_moves_string() {
        let name = String::from("Ferris");
        let ptr = name.as_ptr();
        let hello = Hello::new(name);
        // No reallocation: the buffer handed in is the one stored.
        assert_eq!(hello.name().as_ptr(), ptr);
    }

    #[test]
    fn test_write_greeting_matches_greeting() {
        let hello = Hello::new("World");
        let mut buf = Vec::new();
        hello.write_greeting(&mut buf).expect("write to Vec");
        assert_eq!(String::from_utf8(buf).expect("utf8"), hello.greeting());
    }

    #[test]
    fn test_repeated_writes_are_identical() {
        let hello = Hello::new("again");
        let mut buf = Vec::new();
        hello.write_greeting(&mut buf).expect("first write");
        hello.write_greeting(&mut buf).expect("second write");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "Hello again\nHello again\n"
        );
        assert_eq!(hello.name(), "again");
    }

    #[test]
    fn test_no_static_suffix() {
        assert!(!Hello::new("World").greeting().contains("library"));
    }

    #[test]
    fn test_write_failure_is_reported_to_caller_only() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert!(Hello::new("x").write_greeting(Broken).is_err());
    }

    #[test]
    fn test_greet_does_not_panic() {
        let hello = Hello::new("stdout");
        hello.greet();
        hello.greet();
    }
}
