//! `et-calc` — turns raw request fields into a [`CalculationResult`].
//!
//! # Pipeline
//!
//! ```text
//! RawForm ──parse──▶ CalculationRequest ──validate──▶ compute ──▶ CalculationResult
//!            │                                                        │
//!            └─ autofill: DistanceResolver (unless manual distance)   └─▶ ResultObserver
//! ```
//!
//! 1. **Parse**: [`RawForm::to_request`] trims text fields and parses the
//!    distance text.  Unparseable text becomes `NaN`, which validation
//!    rejects.
//! 2. **Autofill**: unless the user asked for a manual distance, the
//!    distance comes from the route table ([`autofill`]).  A miss is
//!    [`SubmitError::RouteNotFound`], not a validation error.
//! 3. **Validate**: fail fast, in field order; no partial results.
//! 4. **Compute**: one [`EmissionEngine`][et_emission::EmissionEngine] pass
//!    per request.  Nothing is cached.
//!
//! [`Calculator::submit`] runs all four behind a [`SubmissionGate`], so a
//! resubmission while one is pending is refused instead of interleaving.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `compute_batch` runs on Rayon's thread pool.             |
//! | `serde`    | Serde derives on requests and results.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use et_calc::{CalculatorBuilder, RawForm, NoopObserver};
//!
//! let calc = CalculatorBuilder::new().build()?;
//! let form = RawForm::new("São Paulo, SP", "Rio de Janeiro, RJ", "", Some("bus"));
//! let result = calc.submit(&form, &mut NoopObserver)?;
//! assert_eq!(result.emission, 38.27);
//! ```

pub mod autofill;
pub mod batch;
pub mod builder;
pub mod calculator;
pub mod error;
pub mod form;
pub mod gate;
pub mod observer;
pub mod request;
pub mod result;


pub use autofill::{AutofillState, autofill};
pub use builder::CalculatorBuilder;
pub use calculator::Calculator;
pub use error::{CalcResult, Field, SubmitError, ValidationError};
pub use form::{RawForm, parse_distance};
pub use gate::{SubmissionGate, SubmissionGuard};
pub use observer::{NoopObserver, ResultObserver};
pub use request::CalculationRequest;
pub use result::CalculationResult;
