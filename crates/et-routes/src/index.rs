//! Route index and builder.
//!
//! Endpoint names are normalized once at build time so each lookup only
//! normalizes the two query strings and then does a linear scan.  The tables
//! this serves hold tens of routes, so a scan in declaration order is both
//! fast enough and the simplest way to keep "first match wins" exact.

use crate::normalize::{collation_key, normalize};
use crate::route::{DistanceResolver, Route};
use crate::{BRAZIL_ROUTES, RouteError, RouteResult};

/// A route with its endpoint names pre-normalized.
#[derive(Debug, Clone)]
struct IndexedRoute {
    route:            Route,
    norm_origin:      String,
    norm_destination: String,
}

impl IndexedRoute {
    fn new(route: Route) -> Self {
        Self {
            norm_origin:      normalize(&route.origin),
            norm_destination: normalize(&route.destination),
            route,
        }
    }

    #[inline]
    fn matches(&self, origin: &str, destination: &str) -> bool {
        (self.norm_origin == origin && self.norm_destination == destination)
            || (self.norm_origin == destination && self.norm_destination == origin)
    }
}

// ── RouteIndex ────────────────────────────────────────────────────────────────

/// Read-only table of known routes with bidirectional, accent- and
/// case-insensitive lookup.
///
/// Do not construct directly; use [`RouteIndexBuilder`] or
/// [`RouteIndex::brazil`].
#[derive(Debug, Clone)]
pub struct RouteIndex {
    routes: Vec<IndexedRoute>,
}

impl RouteIndex {
    /// The compiled-in table of Brazilian intercity routes.
    ///
    /// The table is constant, so it skips builder validation; the unit tests
    /// run it through [`RouteIndexBuilder`] instead.
    pub fn brazil() -> Self {
        let routes = BRAZIL_ROUTES
            .iter()
            .map(|&(origin, destination, km)| IndexedRoute::new(Route::new(origin, destination, km)))
            .collect();
        Self { routes }
    }

    /// An index with no routes.  Every lookup misses.
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter().map(|r| &r.route)
    }

    /// Distance between two places, order-independent.
    ///
    /// Returns the distance of the first route in declaration order whose
    /// normalized endpoints match the query forward or reversed.  Blank
    /// inputs and unknown pairs yield `None`.
    pub fn find_distance(&self, origin: &str, destination: &str) -> Option<f64> {
        let origin      = normalize(origin);
        let destination = normalize(destination);
        if origin.is_empty() || destination.is_empty() {
            return None;
        }
        self.routes
            .iter()
            .find(|r| r.matches(&origin, &destination))
            .map(|r| r.route.distance_km)
    }

    /// Every distinct origin and destination name, alphabetically.
    ///
    /// Names are deduplicated by exact string value, so two spellings of the
    /// same place both appear.  Used for input suggestions only.
    pub fn all_cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .routes
            .iter()
            .flat_map(|r| [r.route.origin.clone(), r.route.destination.clone()])
            .collect();
        cities.sort_by(|a, b| collation_key(a, b));
        cities.dedup();
        cities
    }
}

impl Default for RouteIndex {
    fn default() -> Self {
        Self::brazil()
    }
}

impl DistanceResolver for RouteIndex {
    fn find_distance(&self, origin: &str, destination: &str) -> Option<f64> {
        RouteIndex::find_distance(self, origin, destination)
    }
}

// ── RouteIndexBuilder ─────────────────────────────────────────────────────────

/// Incrementally collect routes, then validate and freeze them into a
/// [`RouteIndex`].
///
/// Duplicate pairs (in either direction) are accepted; lookups return the
/// first one added.
#[derive(Debug, Default)]
pub struct RouteIndexBuilder {
    routes: Vec<Route>,
}

impl RouteIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one route.  Validation is deferred to [`build`][Self::build].
    pub fn add_route(
        &mut self,
        origin:      impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
    ) -> &mut Self {
        self.routes.push(Route::new(origin, destination, distance_km));
        self
    }

    /// Check every route and build the index.
    ///
    /// Fails on blank endpoint names or a distance that is not a finite
    /// number `> 0`.
    pub fn build(self) -> RouteResult<RouteIndex> {
        let routes = self
            .routes
            .into_iter()
            .enumerate()
            .map(|(index, route)| {
                let indexed = IndexedRoute::new(route);
                if indexed.norm_origin.is_empty() {
                    return Err(RouteError::EmptyName { index, which: "origin" });
                }
                if indexed.norm_destination.is_empty() {
                    return Err(RouteError::EmptyName { index, which: "destination" });
                }
                let km = indexed.route.distance_km;
                if !(km.is_finite() && km > 0.0) {
                    return Err(RouteError::InvalidDistance {
                        index,
                        origin:      indexed.route.origin,
                        destination: indexed.route.destination,
                        distance_km: km,
                    });
                }
                Ok(indexed)
            })
            .collect::<RouteResult<Vec<_>>>()?;

        Ok(RouteIndex { routes })
    }
}
