//! Custom assertion macros and utilities
//!
//! Provides assertion macros with more descriptive failure output.

/// Assert a response's status and `message` field together
#[macro_export]
macro_rules! assert_message {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status, $status,
            "unexpected status, body: {:?}",
            response.body
        );
        assert_eq!(response.message(), $message);
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a string does not contain a substring
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            !$haystack.contains($needle),
            "Expected '{}' not to contain '{}'",
            $haystack,
            $needle
        );
    };
}
