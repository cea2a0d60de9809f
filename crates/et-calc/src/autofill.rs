//! Distance autofill from the route table.

use et_routes::DistanceResolver;

/// What the distance field should show for the current origin/destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutofillState {
    /// The user enters the distance; nothing is looked up.
    Manual,
    /// Origin or destination is still blank.
    Incomplete,
    /// Known route; the field is filled and read-only.
    Resolved(f64),
    /// Both names given but no route is known.  The caller should offer
    /// manual entry.
    NotFound,
}

impl AutofillState {
    /// The looked-up distance, if any.
    pub fn distance_km(self) -> Option<f64> {
        match self {
            AutofillState::Resolved(km) => Some(km),
            _ => None,
        }
    }

    /// `true` when the distance field should accept typing.
    pub fn is_editable(self) -> bool {
        matches!(self, AutofillState::Manual)
    }
}

/// Decide the distance field state for `origin` → `destination`.
pub fn autofill<R: DistanceResolver + ?Sized>(
    resolver:    &R,
    origin:      &str,
    destination: &str,
    manual:      bool,
) -> AutofillState {
    if manual {
        return AutofillState::Manual;
    }
    let (origin, destination) = (origin.trim(), destination.trim());
    if origin.is_empty() || destination.is_empty() {
        return AutofillState::Incomplete;
    }
    match resolver.find_distance(origin, destination) {
        Some(km) => AutofillState::Resolved(km),
        None     => AutofillState::NotFound,
    }
}
