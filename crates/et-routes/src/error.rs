//! Route-table error type.

use thiserror::Error;

/// Errors produced while building a [`RouteIndex`][crate::RouteIndex].
///
/// Lookups never fail; only malformed table entries are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("route #{index} has an empty {which} name")]
    EmptyName { index: usize, which: &'static str },

    #[error("route #{index} ({origin} -> {destination}) has invalid distance {distance_km} km")]
    InvalidDistance {
        index:       usize,
        origin:      String,
        destination: String,
        distance_km: f64,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
