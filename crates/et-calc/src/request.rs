//! Typed calculation request and its validation rules.

use et_core::TransportMode;

use crate::{CalcResult, Field, ValidationError};

/// One user submission, after the raw form text has been parsed.
///
/// `mode` stays a raw identifier until validation so that an unrecognised
/// value can be reported as [`ValidationError::UnknownMode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationRequest {
    pub origin:                   String,
    pub destination:              String,
    pub distance_km:              f64,
    pub mode:                     Option<String>,
    pub manual_distance_override: bool,
}

impl CalculationRequest {
    /// Convenience constructor for a request with a known mode.
    pub fn new(
        origin:      impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
        mode:        TransportMode,
    ) -> Self {
        Self {
            origin:                   origin.into(),
            destination:              destination.into(),
            distance_km,
            mode:                     Some(mode.as_str().to_owned()),
            manual_distance_override: false,
        }
    }

    /// Mark the distance as user-entered rather than looked up.
    pub fn manual(mut self) -> Self {
        self.manual_distance_override = true;
        self
    }

    /// Check every field and return the parsed mode.
    ///
    /// Checks run in this order and stop at the first failure:
    ///
    /// | Check                                   | Error            |
    /// |-----------------------------------------|------------------|
    /// | origin non-blank                        | `MissingField`   |
    /// | destination non-blank                   | `MissingField`   |
    /// | mode present and non-blank              | `MissingField`   |
    /// | mode is a known identifier              | `UnknownMode`    |
    /// | distance finite and `> 0`               | `InvalidDistance`|
    pub fn validate(&self) -> CalcResult<TransportMode> {
        if self.origin.trim().is_empty() {
            return Err(ValidationError::MissingField(Field::Origin));
        }
        if self.destination.trim().is_empty() {
            return Err(ValidationError::MissingField(Field::Destination));
        }
        let mode_id = match self.mode.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => return Err(ValidationError::MissingField(Field::Mode)),
        };
        let mode = mode_id
            .parse::<TransportMode>()
            .map_err(|_| ValidationError::UnknownMode(mode_id.to_owned()))?;
        if !(self.distance_km.is_finite() && self.distance_km > 0.0) {
            return Err(ValidationError::InvalidDistance(self.distance_km));
        }
        Ok(mode)
    }
}
