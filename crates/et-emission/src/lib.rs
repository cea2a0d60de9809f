//! `et-emission` — the arithmetic behind every published figure.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`engine`]  | `EmissionEngine` — emission, comparison, savings, credits    |
//! | [`figures`] | `ModeComparison`, `Savings`, `CreditPrice` value types       |
//!
//! # Rounding contract
//!
//! | Figure                | Decimals | Computed from                       |
//! |-----------------------|----------|-------------------------------------|
//! | emission (kg)         | 2        | `distance × factor`                 |
//! | percentage vs car     | 1        | the two *rounded* emissions         |
//! | savings (kg)          | 2        | rounded emission and baseline       |
//! | savings (%)           | 1        | unrounded saved kg / baseline       |
//! | credits               | 4        | `emission / kg_per_credit`          |
//! | price min / max / avg | 2        | unrounded `credits × price` values  |
//!
//! Rounding is half away from zero ([`et_core::round_to`]).

pub mod engine;
pub mod figures;


pub use engine::EmissionEngine;
pub use figures::{CreditPrice, ModeComparison, Savings};
