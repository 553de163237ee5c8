//! # Hello Libs
//!
//! One tiny greeter, packaged two ways:
//!
//! - `shared` - the `hello_shared` crate, built as a `cdylib` with an exported C ABI
//! - `static` - the `hello_static` crate, built as a `staticlib` and linked at build time
//!
//! Both variants are independent crates. This facade re-exports them behind
//! features and lets callers treat either one as a [`Greet`]. With both
//! features on, `greeter` picks one by `Linkage`.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "shared")]
//! # {
//! use hello_libs::{Greet, SharedHello};
//!
//! let hello: &dyn Greet = &SharedHello::new("World");
//! assert_eq!(hello.greeting(), "Hello World\n");
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

mod greet;

pub use greet::Greet;

#[cfg(all(feature = "shared", feature = "static"))]
pub use greet::{greeter, Linkage, ParseLinkageError};

/// The shared-library greeter and its C ABI.
#[cfg(feature = "shared")]
pub use hello_shared as shared;

/// The static-library greeter.
#[cfg(feature = "static")]
pub use hello_static as r#static;

#[cfg(feature = "shared")]
pub use hello_shared::Hello as SharedHello;

#[cfg(feature = "static")]
pub use hello_static::Hello as StaticHello;
