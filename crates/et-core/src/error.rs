//! Estimator error type.
//!
//! Sub-crates define their own error enums for their own failure modes and
//! wrap `EtError` as one variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `et-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EtError {
    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `et-*` crates.
pub type EtResult<T> = Result<T, EtError>;
