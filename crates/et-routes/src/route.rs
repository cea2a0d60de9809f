//! Route record and the pluggable distance-lookup trait.

/// A known origin–destination pair and its road distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub origin:      String,
    pub destination: String,
    /// Road distance in kilometres.  Always finite and `> 0`.
    pub distance_km: f64,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, distance_km: f64) -> Self {
        Self {
            origin:      origin.into(),
            destination: destination.into(),
            distance_km,
        }
    }
}

/// Resolves the distance between two place names.
///
/// The calculator's autofill step goes through this trait so a different
/// backend (a larger table, a test double) can be swapped in without touching
/// the form pipeline.  [`RouteIndex`][crate::RouteIndex] is the default.
///
/// Implementations must be `Send + Sync` so one resolver can serve batch
/// estimation on several threads.
pub trait DistanceResolver: Send + Sync {
    /// Distance in km between `origin` and `destination`, in either order.
    ///
    /// Returns `None` when either name is blank or no route is known.
    fn find_distance(&self, origin: &str, destination: &str) -> Option<f64>;
}
