//! Printing helpers private to the static library.

use std::io::{self, Write};

pub(crate) fn line(name: &str) -> String {
    format!("Hello {} from a static library.\n", name)
}

pub(crate) fn write_impl<W: Write>(mut out: W, name: &str) -> io::Result<()> {
    out.write_all(line(name).as_bytes())
}

pub(crate) fn print_impl(name: &str) {
    log::trace!("greeting {:?} from the static library", name);
    let _ = write_impl(io::stdout().lock(), name);
}
