//! `et-routes` — known routes and order-independent distance lookup.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`normalize`] | `normalize`, `collation_key` — accent/case folding        |
//! | [`route`]     | `Route`, `DistanceResolver` trait                         |
//! | [`index`]     | `RouteIndex`, `RouteIndexBuilder`                         |
//! | [`builtin`]   | `BRAZIL_ROUTES` — the compiled-in route table             |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                            |
//!
//! # Lookup model
//!
//! Every route is stored once, in declaration order, with its endpoint names
//! pre-normalized.  A query matches a route when the normalized query pair
//! equals the route pair in either direction; the first match wins.  A miss
//! is `None`, never an error: callers decide whether to ask for a manual
//! distance.

pub mod builtin;
pub mod error;
pub mod index;
pub mod normalize;
pub mod route;

#[cfg(test)]
mod tests;

pub use builtin::BRAZIL_ROUTES;
pub use error::{RouteError, RouteResult};
pub use index::{RouteIndex, RouteIndexBuilder};
pub use normalize::{collation_key, normalize};
pub use route::{DistanceResolver, Route};
