//! Errors of the non-numeric API surface.
//!
//! The numeric kernel signals invalid input with `NaN` instead.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation Error: {0} should be {1}")]
    Validation(String, String),
}
