//! Error types for route registration.
//!
//! Guard evaluation itself has no error path: every combination of identity
//! and access class maps to a [`crate::types::Decision`]. The only failures in
//! this crate are configuration mistakes made while building the route table,
//! and those are caught at registration time, before any navigation happens.

use thiserror::Error;

/// Errors raised while registering routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthzError {
    /// An access class string did not name one of the known classes.
    #[error("Unknown access class: {0}")]
    UnknownAccessClass(String),

    /// The same path was registered twice.
    #[error("Route already registered: {0}")]
    DuplicateRoute(String),

    /// A route path was empty or relative, or had whitespace, a query or a fragment.
    #[error("Invalid route path: {0:?}")]
    InvalidPath(String),
}

/// A specialized Result type for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthzError::UnknownAccessClass("staff".to_string());
        assert_eq!(err.to_string(), "Unknown access class: staff");

        let err = AuthzError::DuplicateRoute("/signup".to_string());
        assert_eq!(err.to_string(), "Route already registered: /signup");

        let err = AuthzError::InvalidPath("guest/home".to_string());
        assert_eq!(err.to_string(), "Invalid route path: \"guest/home\"");
    }
}
