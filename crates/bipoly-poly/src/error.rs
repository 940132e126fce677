//! Errors raised by the polynomial kernel.

use bipoly_fields::FieldError;
use thiserror::Error;

use crate::degree::Degree;

/// The semantic category of a [`PolyError`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// Operands belong to different rings.
    ArithmeticIncompat,
    /// An argument violates a precondition.
    InputValue,
    /// Degree arithmetic exceeded the exponent range.
    Overflow,
    /// The field arithmetic failed.
    Field,
}

/// Errors that can occur during polynomial and ideal computations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("operands belong to different rings")]
    ArithmeticIncompat,

    #[error("invalid input: {0}")]
    InputValue(String),

    #[error("degree overflow adding {lhs} and {rhs}")]
    Overflow { lhs: Degree, rhs: Degree },

    #[error(transparent)]
    Field(#[from] FieldError),

    /// Wraps an underlying failure with context, keeping its kind.
    #[error("{context}: {source}")]
    Inherit {
        context: &'static str,
        source: Box<PolyError>,
    },
}

impl PolyError {
    /// Wraps `source` with a short description of the failing operation.
    #[must_use]
    pub fn inherit(context: &'static str, source: PolyError) -> Self {
        PolyError::Inherit {
            context,
            source: Box::new(source),
        }
    }

    /// Returns the semantic kind, looking through `Inherit` wrappers.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolyError::ArithmeticIncompat => ErrorKind::ArithmeticIncompat,
            PolyError::InputValue(_) => ErrorKind::InputValue,
            PolyError::Overflow { .. } => ErrorKind::Overflow,
            PolyError::Field(_) => ErrorKind::Field,
            PolyError::Inherit { source, .. } => source.kind(),
        }
    }
}
