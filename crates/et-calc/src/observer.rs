//! Rendering callbacks for the submission pipeline.

use crate::{AutofillState, CalculationResult, SubmitError};

/// Callbacks invoked by [`Calculator::submit`][crate::Calculator::submit].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they render.  Exactly one of `on_result` / `on_rejected`
/// is called per submission.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl ResultObserver for Printer {
///     fn on_result(&mut self, r: &CalculationResult) {
///         println!("{} kg CO₂", r.emission);
///     }
/// }
/// ```
pub trait ResultObserver {
    /// Called after the distance field state is decided, before validation.
    fn on_autofill(&mut self, _state: &AutofillState) {}

    /// Called with the finished result.
    fn on_result(&mut self, _result: &CalculationResult) {}

    /// Called when the submission produced no result.
    fn on_rejected(&mut self, _error: &SubmitError) {}
}

/// A [`ResultObserver`] that does nothing.
pub struct NoopObserver;

impl ResultObserver for NoopObserver {}
