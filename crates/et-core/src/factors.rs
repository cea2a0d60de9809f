//! Emission factor table: kilograms of CO₂ emitted per kilometre, per mode.
//!
//! Backed by a fixed-size array indexed by [`TransportMode::index`], so the
//! "exactly one factor per mode" invariant holds by construction.  Values are
//! validated (finite, non-negative) whenever they enter the table.

use crate::{EtError, EtResult, TransportMode};

/// Mode → kg CO₂ per km.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionFactors {
    kg_per_km: [f64; TransportMode::ALL.len()],
}

impl EmissionFactors {
    /// Average factors for Brazilian road transport.
    pub const BRAZIL: EmissionFactors = EmissionFactors {
        kg_per_km: [
            0.0,   // bicycle
            0.12,  // car
            0.089, // bus
            0.96,  // truck
        ],
    };

    /// Build a table from one factor per mode.
    pub fn new(bicycle: f64, car: f64, bus: f64, truck: f64) -> EtResult<Self> {
        let table = Self { kg_per_km: [bicycle, car, bus, truck] };
        table.validate()?;
        Ok(table)
    }

    /// Factor for `mode` in kg CO₂ per km.
    #[inline]
    pub fn factor(&self, mode: TransportMode) -> f64 {
        self.kg_per_km[mode.index()]
    }

    /// Return a copy with `mode`'s factor replaced.
    pub fn with_factor(mut self, mode: TransportMode, kg_per_km: f64) -> EtResult<Self> {
        check_factor(mode, kg_per_km)?;
        self.kg_per_km[mode.index()] = kg_per_km;
        Ok(self)
    }

    /// Iterate `(mode, factor)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        TransportMode::ALL.into_iter().map(|m| (m, self.factor(m)))
    }

    /// Check every factor is finite and `≥ 0`.
    pub fn validate(&self) -> EtResult<()> {
        self.iter().try_for_each(|(mode, f)| check_factor(mode, f))
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::BRAZIL
    }
}

fn check_factor(mode: TransportMode, kg_per_km: f64) -> EtResult<()> {
    if kg_per_km.is_finite() && kg_per_km >= 0.0 {
        Ok(())
    } else {
        Err(EtError::Config(format!(
            "emission factor for {mode} must be a finite number >= 0, got {kg_per_km}"
        )))
    }
}
