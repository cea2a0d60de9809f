//! `et-core` — foundational types for the `ecotrip` carbon estimator.
//!
//! This crate is a dependency of every other `et-*` crate.  It has no `et-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`transport`]   | `TransportMode` enum (bicycle, car, bus, truck)       |
//! | [`factors`]     | `EmissionFactors` — kg CO₂ per km, one per mode       |
//! | [`credit`]      | `CarbonCreditPolicy` — kg per credit, price band      |
//! | [`config`]      | `EstimatorConfig` — factors + credit policy           |
//! | [`round`]       | `round_to` — half-away-from-zero decimal rounding     |
//! | [`error`]       | `EtError`, `EtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod credit;
pub mod error;
pub mod factors;
pub mod round;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EstimatorConfig;
pub use credit::CarbonCreditPolicy;
pub use error::{EtError, EtResult};
pub use factors::EmissionFactors;
pub use round::round_to;
pub use transport::TransportMode;
