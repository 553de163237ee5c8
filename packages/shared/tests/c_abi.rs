//! Drives the library only through its C signatures, declared in an
//! `extern "C"` block and resolved against the statically linked rlib.
//! `dynamic_library.rs` covers the same calls through the built cdylib.

// Linked for its exported symbols only.
extern crate hello_shared;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

#[repr(C)]
struct OpaqueHello {
    _private: [u8; 0],
}

extern "C" {
    fn hello_new(name: *const c_char) -> *mut OpaqueHello;
    fn hello_greet(hello: *const OpaqueHello);
    fn hello_greeting(hello: *const OpaqueHello) -> *mut c_char;
    fn hello_free(hello: *mut OpaqueHello);
    fn hello_string_free(s: *mut c_char);
}

fn greeting_of(name: &str) -> String {
    let name = CString::new(name).expect("no interior NUL");
    unsafe {
        let hello = hello_new(name.as_ptr());
        assert!(!hello.is_null());
        hello_greet(hello);
        let raw = hello_greeting(hello);
        let line = CStr::from_ptr(raw).to_string_lossy().into_owned();
        hello_string_free(raw);
        hello_free(hello);
        line
    }
}

#[test]
fn test_exported_symbols_greet_world() {
    assert_eq!(greeting_of("World"), "Hello World\n");
}

#[test]
fn test_exported_symbols_empty_name() {
    assert_eq!(greeting_of(""), "Hello \n");
}

#[test]
fn test_exported_symbols_independent_instances() {
    let alice = CString::new("Alice").expect("no NUL");
    let bob = CString::new("Bob").expect("no NUL");
    unsafe {
        let a = hello_new(alice.as_ptr());
        let b = hello_new(bob.as_ptr());
        let la = hello_greeting(a);
        let lb = hello_greeting(b);
        assert_eq!(CStr::from_ptr(la).to_str(), Ok("Hello Alice\n"));
        assert_eq!(CStr::from_ptr(lb).to_str(), Ok("Hello Bob\n"));
        hello_string_free(la);
        hello_string_free(lb);
        hello_free(a);
        hello_free(b);
    }
}

#[test]
fn test_exported_symbols_accept_null() {
    unsafe {
        assert!(hello_new(std::ptr::null()).is_null());
        hello_greet(std::ptr::null());
        assert!(hello_greeting(std::ptr::null()).is_null());
        hello_free(std::ptr::null_mut());
    }
}
