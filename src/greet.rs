//! The [`Greet`] trait and linkage selection

use std::io::{self, Write};
#[cfg(all(feature = "shared", feature = "static"))]
use std::{fmt, str::FromStr};

/// Common face of both greeter variants.
///
/// Each variant keeps its own output format; this trait only lets callers
/// hold either one behind `&dyn Greet` or `Box<dyn Greet>`.
pub trait Greet {
    /// The line [`greet`](Greet::greet) prints, trailing newline included.
    fn greeting(&self) -> String;

    /// Writes the greeting line to `out`.
    fn write_greeting(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Prints the greeting to standard output, ignoring write failures.
    fn greet(&self);
}

#[cfg(feature = "shared")]
impl Greet for hello_shared::Hello {
    #[inline]
    fn greeting(&self) -> String {
        hello_shared::Hello::greeting(self)
    }

    #[inline]
    fn write_greeting(&self, out: &mut dyn Write) -> io::Result<()> {
        hello_shared::Hello::write_greeting(self, out)
    }

    #[inline]
    fn greet(&self) {
        hello_shared::Hello::greet(self)
    }
}

#[cfg(feature = "static")]
impl Greet for hello_static::Hello {
    #[inline]
    fn greeting(&self) -> String {
        hello_static::Hello::greeting(self)
    }

    #[inline]
    fn write_greeting(&self, out: &mut dyn Write) -> io::Result<()> {
        hello_static::Hello::write_greeting(self, out)
    }

    #[inline]
    fn greet(&self) {
        hello_static::Hello::greet(self)
    }
}

/// Which packaging of the greeter to use.
#[cfg(all(feature = "shared", feature = "static"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Linkage {
    /// [`hello_shared::Hello`]
    #[default]
    Shared,
    /// [`hello_static::Hello`]
    Static,
}

#[cfg(all(feature = "shared", feature = "static"))]
impl Linkage {
    /// Both linkages, shared first.
    pub const ALL: [Linkage; 2] = [Linkage::Shared, Linkage::Static];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Linkage::Shared => "shared",
            Linkage::Static => "static",
        }
    }
}

#[cfg(all(feature = "shared", feature = "static"))]
impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Linkage`].
#[cfg(all(feature = "shared", feature = "static"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLinkageError(String);

#[cfg(all(feature = "shared", feature = "static"))]
impl fmt::Display for ParseLinkageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown linkage '{}', expected 'shared' or 'static'",
            self.0
        )
    }
}

#[cfg(all(feature = "shared", feature = "static"))]
impl std::error::Error for ParseLinkageError {}

#[cfg(all(feature = "shared", feature = "static"))]
impl FromStr for Linkage {
    type Err = ParseLinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" | "dynamic" => Ok(Linkage::Shared),
            "static" => Ok(Linkage::Static),
            _ => Err(ParseLinkageError(s.to_string())),
        }
    }
}

/// Creates a greeter of the requested linkage, taking ownership of `name`.
///
/// ```rust
/// use hello_libs::{greeter, Linkage};
///
/// let shared = greeter(Linkage::Shared, "World");
/// let fixed = greeter(Linkage::Static, "World");
/// assert_eq!(shared.greeting(), "Hello World\n");
/// assert_eq!(fixed.greeting(), "Hello World from a static library.\n");
/// ```
#[cfg(all(feature = "shared", feature = "static"))]
pub fn greeter(linkage: Linkage, name: impl Into<String>) -> Box<dyn Greet> {
    match linkage {
        Linkage::Shared => Box::new(hello_shared::Hello::new(name)),
        Linkage::Static => Box::new(hello_static::Hello::new(name)),
    }
}
