//! Custom assertion macros
//!
//! Assertions that print the response body on failure. Each macro evaluates
//! its response argument exactly once.

/// Assert a `TestResponse` status, showing the body if it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status, $status,
            "Unexpected status, body: {}",
            response.text
        );
    }};
}

/// Assert that a JSON error body has the expected shape and status
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        let status = $status;
        assert_eq!(
            response.status, status,
            "Unexpected status, body: {}",
            response.text
        );
        let body = response.json();
        assert_eq!(body["status"], status.as_u16());
        assert!(body["error"].is_string(), "Missing error message: {}", body);
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {{
        let haystack = $haystack;
        assert!(
            haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            haystack,
            $needle
        );
    }};
}
