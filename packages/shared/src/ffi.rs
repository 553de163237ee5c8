//! C ABI exported from the `cdylib`.
//!
//! These are the only symbols the shared library makes visible to foreign
//! consumers; everything else in the crate keeps Rust linkage. The matching
//! declarations live in `include/hello_shared.h`.
//!
//! Ownership: `hello_new` hands a boxed [`Hello`] to the caller, which must be
//! released exactly once with `hello_free`. Strings from `hello_greeting` are
//! released with `hello_string_free`. Null pointers are accepted everywhere
//! and turn the call into a no-op (or a null result).

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::Hello;

/// Creates a greeter from a NUL-terminated name.
///
/// Invalid UTF-8 in `name` is replaced with U+FFFD. Returns null if `name`
/// is null.
///
/// # Safety
///
/// `name` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn hello_new(name: *const c_char) -> *mut Hello {
    if name.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
    Box::into_raw(Box::new(Hello::new(name)))
}

/// Prints the greeting of `hello` to standard output.
///
/// # Safety
///
/// `hello` must be null or a live pointer returned by [`hello_new`].
#[no_mangle]
pub unsafe extern "C" fn hello_greet(hello: *const Hello) {
    // SAFETY: null or live per the caller contract.
    if let Some(hello) = unsafe { hello.as_ref() } {
        hello.greet();
    }
}

/// Returns a newly allocated copy of the greeting line.
///
/// Returns null if `hello` is null or the name contains an interior NUL.
/// The result must be released with [`hello_string_free`].
///
/// # Safety
///
/// `hello` must be null or a live pointer returned by [`hello_new`].
#[no_mangle]
pub unsafe extern "C" fn hello_greeting(hello: *const Hello) -> *mut c_char {
    // SAFETY: null or live per the caller contract.
    match unsafe { hello.as_ref() } {
        Some(hello) => CString::new(hello.greeting())
            .map(CString::into_raw)
            .unwrap_or(ptr::null_mut()),
        None => ptr::null_mut(),
    }
}

/// Releases a greeter created by [`hello_new`].
///
/// # Safety
///
/// `hello` must be null or a pointer returned by [`hello_new`] that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn hello_free(hello: *mut Hello) {
    if !hello.is_null() {
        // SAFETY: produced by Box::into_raw in hello_new and not yet freed.
        drop(unsafe { Box::from_raw(hello) });
    }
}

/// Releases a string returned by [`hello_greeting`].
///
/// # Safety
///
/// `s` must be null or a pointer returned by [`hello_greeting`] that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn hello_string_free(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: produced by CString::into_raw in hello_greeting.
        drop(unsafe { CString::from_raw(s) });
    }
}
