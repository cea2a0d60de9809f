//! Many independent requests at once.
//!
//! Requests share nothing but the read-only calculator, so with the
//! `parallel` feature they are fanned out over Rayon's pool.  Results are
//! always returned in input order.  Batch runs bypass the submission gate:
//! they are not user submissions.

use et_routes::DistanceResolver;

use crate::{CalcResult, CalculationRequest, CalculationResult, Calculator, RawForm, SubmitError};

impl<R: DistanceResolver> Calculator<R> {
    /// [`compute`][Calculator::compute] every request.
    pub fn compute_batch(
        &self,
        requests: &[CalculationRequest],
    ) -> Vec<CalcResult<CalculationResult>> {
        map_in_order(requests, |r| self.compute(r))
    }

    /// [`prepare`][Calculator::prepare] then compute every form.
    pub fn estimate_batch(
        &self,
        forms: &[RawForm],
    ) -> Vec<Result<CalculationResult, SubmitError>> {
        map_in_order(forms, |form| -> Result<CalculationResult, SubmitError> {
            let request = self.prepare(form)?;
            Ok(self.compute(&request)?)
        })
    }
}

#[cfg(not(feature = "parallel"))]
fn map_in_order<T, U>(items: &[T], f: impl Fn(&T) -> U) -> Vec<U> {
    items.iter().map(f).collect()
}

#[cfg(feature = "parallel")]
fn map_in_order<T: Sync, U: Send>(items: &[T], f: impl Fn(&T) -> U + Sync + Send) -> Vec<U> {
    use rayon::prelude::*;

    items.par_iter().map(f).collect()
}
