use std::fmt;

use thiserror::Error;

/// A required request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Origin,
    Destination,
    Mode,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Origin      => "origin",
            Field::Destination => "destination",
            Field::Mode        => "mode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request was refused before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("distance must be a finite number > 0, got {0}")]
    InvalidDistance(f64),

    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),
}

pub type CalcResult<T> = Result<T, ValidationError>;

/// Why [`Calculator::submit`][crate::Calculator::submit] produced no result.
///
/// All variants are recoverable: fix the input (or wait) and submit again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("a calculation is already in progress")]
    Pending,

    #[error("no known route between {origin:?} and {destination:?}")]
    RouteNotFound { origin: String, destination: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
