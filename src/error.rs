//! Error types for control lookups

use std::fmt;

/// Error type for id-based element lookups
///
/// The togglers resolve elements by string id and fail fast when the id does
/// not resolve; they never create elements implicitly or skip silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// No element with the given id exists in the page
    NoSuchElement(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::NoSuchElement(id) => write!(f, "no element with id '{}'", id),
        }
    }
}

impl std::error::Error for ControlError {}
