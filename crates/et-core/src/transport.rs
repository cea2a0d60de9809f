//! Transportation mode enum shared by the emission engine and the calculator.
//!
//! The set is closed: every table keyed by mode (factors, comparison rows,
//! presentation metadata) has exactly one entry per variant.  Display data
//! such as labels and icons lives in `et-output`, not here.

use std::str::FromStr;

use crate::EtError;

/// The means of travel a trip is estimated for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    Bicycle,
    /// Private car.  Always the comparison baseline.
    Car,
    Bus,
    Truck,
}

impl TransportMode {
    /// Every mode, in declaration order.  Comparison tables start from this
    /// order before sorting, so ties keep it.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bicycle,
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Truck,
    ];

    /// The mode every other mode is compared against.
    pub const BASELINE: TransportMode = TransportMode::Car;

    /// Position in [`TransportMode::ALL`], usable as a table index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier, as submitted by forms and written to CSV.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Bicycle => "bicycle",
            TransportMode::Car     => "car",
            TransportMode::Bus     => "bus",
            TransportMode::Truck   => "truck",
        }
    }
}

impl FromStr for TransportMode {
    type Err = EtError;

    /// Parse an exact lowercase identifier.  Anything else is
    /// [`EtError::UnknownMode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| EtError::UnknownMode(s.to_owned()))
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
