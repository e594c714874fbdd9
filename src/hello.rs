//! Addition and greeting helpers
//!
//! Both functions are pure: the result depends only on the arguments.

/// Name used by [`greet`] when no name is given
pub const DEFAULT_NAME: &str = "World";

/// Add two integers.
///
/// The sum must fit in `i64`; use [`checked_add`] when it might not.
///
/// # Panics
///
/// Panics on overflow when built with overflow checks (debug builds).
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Add two integers, returning `None` if the sum overflows `i64`.
pub fn checked_add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

/// Build the greeting `Hello, <name>!`, falling back to [`DEFAULT_NAME`].
///
/// ```
/// use nbn_dummy_package::greet;
///
/// assert_eq!(greet(None), "Hello, World!");
/// assert_eq!(greet(Some("Alice")), "Hello, Alice!");
/// ```
pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}
