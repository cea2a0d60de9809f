//! Estimator configuration.
//!
//! Everything the arithmetic depends on is held in one read-only value that
//! is constructed once and handed to the engine.  There is no global state.

use crate::{CarbonCreditPolicy, EmissionFactors, EtResult};

/// Constants driving every emission and credit calculation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorConfig {
    pub factors:       EmissionFactors,
    pub credit_policy: CarbonCreditPolicy,
}

impl EstimatorConfig {
    /// Validate all constants.  Called by builders before an engine is handed
    /// out, since the fields are public and may have been edited in place.
    pub fn validate(&self) -> EtResult<()> {
        self.factors.validate()?;
        self.credit_policy.validate()
    }
}
