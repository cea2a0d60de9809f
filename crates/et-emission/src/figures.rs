//! Plain value types returned by [`EmissionEngine`][crate::EmissionEngine].

use et_core::TransportMode;

/// One row of the all-modes comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeComparison {
    pub mode:              TransportMode,
    /// kg CO₂ for the trip, 2 decimals.
    pub emission:          f64,
    /// `100 × emission / car emission`, 1 decimal.
    pub percentage_vs_car: f64,
}

/// CO₂ avoided relative to a baseline.  Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Savings {
    /// kg CO₂ avoided, 2 decimals.
    pub saved_kg:   f64,
    /// Share of the baseline avoided, 1 decimal.
    pub percentage: f64,
}

/// Estimated cost of offsetting a number of credits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditPrice {
    pub min:     f64,
    pub max:     f64,
    pub average: f64,
}
