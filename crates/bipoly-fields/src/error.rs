//! Field arithmetic errors.

use thiserror::Error;

/// Errors raised by field element arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The additive identity has no multiplicative inverse.
    #[error("division by zero in {field}")]
    DivisionByZero {
        /// Name of the field the division happened in.
        field: &'static str,
    },
}
