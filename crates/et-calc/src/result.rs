//! The result bundle handed to presentation.

use et_core::TransportMode;
use et_emission::{CreditPrice, ModeComparison, Savings};

/// Every figure for one request, plus the echoed inputs.
///
/// Built once by [`Calculator::compute`][crate::Calculator::compute] and
/// never mutated afterwards; renderers only read it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    // ── Echoed input ──────────────────────────────────────────────────────
    pub origin:                   String,
    pub destination:              String,
    pub distance_km:              f64,
    pub mode:                     TransportMode,
    pub manual_distance_override: bool,

    // ── Figures ───────────────────────────────────────────────────────────
    /// kg CO₂ for the selected mode.
    pub emission:     f64,
    /// kg CO₂ the same trip would emit by car.
    pub car_baseline: f64,
    /// Selected mode vs. car.
    pub savings:      Savings,
    /// All modes, cheapest first.
    pub comparison:   Vec<ModeComparison>,
    /// Credits needed to offset `emission`.
    pub credits:      f64,
    /// Cost band for `credits`.
    pub price:        CreditPrice,
}

impl CalculationResult {
    /// The comparison row for the selected mode.
    pub fn selected_row(&self) -> Option<&ModeComparison> {
        self.comparison.iter().find(|r| r.mode == self.mode)
    }

    /// `true` when the selected mode beats the car by a positive margin.
    pub fn has_savings(&self) -> bool {
        self.mode != TransportMode::BASELINE && self.savings.saved_kg > 0.0
    }
}
