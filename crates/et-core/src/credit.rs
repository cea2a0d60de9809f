//! Carbon-credit conversion and market price band.

use crate::{EtError, EtResult};

/// How many kilograms of CO₂ one credit offsets, and what a credit costs.
///
/// Prices are in the single supported currency (BRL).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarbonCreditPolicy {
    /// Kilograms of CO₂ per credit.  One credit = one tonne by default.
    pub kg_per_credit: f64,
    /// Lowest market price per credit.
    pub price_min_per_credit: f64,
    /// Highest market price per credit.
    pub price_max_per_credit: f64,
}

impl CarbonCreditPolicy {
    /// 1 credit = 1 t CO₂, priced between R$ 50 and R$ 150.
    pub const DEFAULT: CarbonCreditPolicy = CarbonCreditPolicy {
        kg_per_credit:        1000.0,
        price_min_per_credit: 50.0,
        price_max_per_credit: 150.0,
    };

    /// Build a validated policy.
    pub fn new(kg_per_credit: f64, price_min: f64, price_max: f64) -> EtResult<Self> {
        let policy = Self {
            kg_per_credit,
            price_min_per_credit: price_min,
            price_max_per_credit: price_max,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// `kg_per_credit > 0`, `0 ≤ price_min ≤ price_max`, all finite.
    pub fn validate(&self) -> EtResult<()> {
        if !(self.kg_per_credit.is_finite() && self.kg_per_credit > 0.0) {
            return Err(EtError::Config(format!(
                "kg_per_credit must be a finite number > 0, got {}",
                self.kg_per_credit
            )));
        }
        if !(self.price_min_per_credit.is_finite() && self.price_min_per_credit >= 0.0) {
            return Err(EtError::Config(format!(
                "price_min_per_credit must be a finite number >= 0, got {}",
                self.price_min_per_credit
            )));
        }
        if !(self.price_max_per_credit.is_finite()
            && self.price_max_per_credit >= self.price_min_per_credit)
        {
            return Err(EtError::Config(format!(
                "price_max_per_credit ({}) must be finite and >= price_min_per_credit ({})",
                self.price_max_per_credit, self.price_min_per_credit
            )));
        }
        Ok(())
    }
}

impl Default for CarbonCreditPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
