//! The request orchestrator.

use std::time::Duration;

use log::{debug, warn};

use et_core::TransportMode;
use et_emission::EmissionEngine;
use et_routes::{DistanceResolver, RouteIndex};

use crate::autofill::{AutofillState, autofill};
use crate::{
    CalcResult, CalculationRequest, CalculationResult, RawForm, ResultObserver, SubmissionGate,
    SubmitError,
};

/// Validates requests, runs the [`EmissionEngine`], and assembles
/// [`CalculationResult`]s.
///
/// # Type parameter
///
/// `R` resolves distances for autofill (default: [`RouteIndex`]).
/// [`compute`][Self::compute] never consults it: a request's distance is
/// trusted once validated.
///
/// Build with [`CalculatorBuilder`][crate::CalculatorBuilder].
#[derive(Debug)]
pub struct Calculator<R: DistanceResolver = RouteIndex> {
    pub(crate) engine:            EmissionEngine,
    pub(crate) resolver:          R,
    pub(crate) gate:              SubmissionGate,
    pub(crate) simulated_latency: Duration,
}

impl<R: DistanceResolver> Calculator<R> {
    pub fn engine(&self) -> &EmissionEngine {
        &self.engine
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// `true` while a [`submit`][Self::submit] call is in progress.
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    // ── Core contract ─────────────────────────────────────────────────────

    /// Validate `request` and compute every figure for it.
    ///
    /// Identical requests give identical results; nothing is cached.  On a
    /// validation failure no computation happens at all.
    pub fn compute(&self, request: &CalculationRequest) -> CalcResult<CalculationResult> {
        let mode = request.validate()?;
        let distance_km = request.distance_km;
        let engine = &self.engine;

        let emission     = engine.emission(distance_km, mode);
        let car_baseline = engine.emission(distance_km, TransportMode::BASELINE);
        let savings      = engine.savings(emission, car_baseline);
        let comparison   = engine.all_modes_comparison(distance_km);
        let credits      = engine.carbon_credits(emission);
        let price        = engine.credit_price_estimate(credits);

        debug!(
            "{} -> {}: {distance_km} km by {mode} = {emission} kg CO2 ({credits} credits)",
            request.origin.trim(),
            request.destination.trim(),
        );

        Ok(CalculationResult {
            origin:                   request.origin.trim().to_owned(),
            destination:              request.destination.trim().to_owned(),
            distance_km,
            mode,
            manual_distance_override: request.manual_distance_override,
            emission,
            car_baseline,
            savings,
            comparison,
            credits,
            price,
        })
    }

    // ── Form pipeline ─────────────────────────────────────────────────────

    /// Distance field state for the given names.
    pub fn autofill(&self, origin: &str, destination: &str, manual: bool) -> AutofillState {
        autofill(&self.resolver, origin, destination, manual)
    }

    /// Parse `form` and fill in the distance from the route table unless the
    /// user chose manual entry.
    pub fn prepare(&self, form: &RawForm) -> Result<CalculationRequest, SubmitError> {
        self.prepare_with(form, |_| {})
    }

    fn prepare_with(
        &self,
        form:        &RawForm,
        mut notify:  impl FnMut(&AutofillState),
    ) -> Result<CalculationRequest, SubmitError> {
        let mut request = form.to_request();
        let state = self.autofill(
            &request.origin,
            &request.destination,
            request.manual_distance_override,
        );
        notify(&state);

        match state {
            AutofillState::Resolved(km) => request.distance_km = km,
            AutofillState::NotFound => {
                return Err(SubmitError::RouteNotFound {
                    origin:      request.origin,
                    destination: request.destination,
                });
            }
            // Blank names are reported by validation.
            AutofillState::Manual | AutofillState::Incomplete => {}
        }
        Ok(request)
    }

    /// Run one user submission end to end and report it to `observer`.
    ///
    /// Refused with [`SubmitError::Pending`] if another submission on this
    /// calculator has not finished.  Input is validated before the simulated
    /// latency so bad input is reported immediately.
    pub fn submit<O: ResultObserver + ?Sized>(
        &self,
        form:     &RawForm,
        observer: &mut O,
    ) -> Result<CalculationResult, SubmitError> {
        let outcome = self.submit_gated(form, observer);
        match &outcome {
            Ok(result) => observer.on_result(result),
            Err(e) => {
                warn!("submission rejected: {e}");
                observer.on_rejected(e);
            }
        }
        outcome
    }

    fn submit_gated<O: ResultObserver + ?Sized>(
        &self,
        form:     &RawForm,
        observer: &mut O,
    ) -> Result<CalculationResult, SubmitError> {
        let Some(_guard) = self.gate.try_begin() else {
            return Err(SubmitError::Pending);
        };

        let request = self.prepare_with(form, |state| observer.on_autofill(state))?;
        request.validate()?;

        if !self.simulated_latency.is_zero() {
            std::thread::sleep(self.simulated_latency);
        }

        Ok(self.compute(&request)?)
    }
}
