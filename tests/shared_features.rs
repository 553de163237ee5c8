//! Tests for the shared feature

#[cfg(feature = "shared")]
mod shared_tests {
    use hello_libs::{Greet, SharedHello};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shared_greets_world() {
        assert_eq!(SharedHello::new("World").greeting(), "Hello World\n");
    }

    #[test]
    fn test_shared_empty_name() {
        assert_eq!(SharedHello::new("").greeting(), "Hello \n");
    }

    #[test]
    fn test_shared_repeated_greeting_is_unchanged() {
        let hello = SharedHello::new("World");
        let mut out = Vec::new();
        Greet::write_greeting(&hello, &mut out).unwrap();
        Greet::write_greeting(&hello, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello World\nHello World\n");
        assert_eq!(hello, SharedHello::new("World"));
    }

    #[test]
    fn test_shared_module_reexport() {
        let hello = hello_libs::shared::Hello::new("module");
        assert_eq!(hello.name(), "module");
    }
}
