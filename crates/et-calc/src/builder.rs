//! Fluent builder for constructing a [`Calculator`].

use std::time::Duration;

use et_core::{EstimatorConfig, EtResult};
use et_emission::EmissionEngine;
use et_routes::{DistanceResolver, RouteIndex};

use crate::{Calculator, SubmissionGate};

/// Fluent builder for [`Calculator<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                           |
/// |----------------------------|-----------------------------------|
/// | `.config(c)`               | `EstimatorConfig::default()`      |
/// | `.resolver(r)`             | `RouteIndex::brazil()`            |
/// | `.simulated_latency(d)`    | zero (no delay)                   |
///
/// # Example
///
/// ```rust,ignore
/// let calc = CalculatorBuilder::new()
///     .resolver(my_routes)
///     .simulated_latency(Duration::from_millis(1200))
///     .build()?;
/// ```
pub struct CalculatorBuilder<R: DistanceResolver = RouteIndex> {
    config:            EstimatorConfig,
    resolver:          R,
    simulated_latency: Duration,
}

impl CalculatorBuilder<RouteIndex> {
    /// Default constants and the built-in Brazilian route table.
    pub fn new() -> Self {
        Self {
            config:            EstimatorConfig::default(),
            resolver:          RouteIndex::brazil(),
            simulated_latency: Duration::ZERO,
        }
    }
}

impl Default for CalculatorBuilder<RouteIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DistanceResolver> CalculatorBuilder<R> {
    /// Replace the emission factors and credit policy.
    pub fn config(mut self, config: EstimatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the distance backend used by autofill.
    pub fn resolver<R2: DistanceResolver>(self, resolver: R2) -> CalculatorBuilder<R2> {
        CalculatorBuilder {
            config:            self.config,
            resolver,
            simulated_latency: self.simulated_latency,
        }
    }

    /// Delay every [`Calculator::submit`] by `latency` after validation.
    pub fn simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Validate the configuration and return a ready [`Calculator`].
    pub fn build(self) -> EtResult<Calculator<R>> {
        Ok(Calculator {
            engine:            EmissionEngine::new(self.config)?,
            resolver:          self.resolver,
            gate:              SubmissionGate::new(),
            simulated_latency: self.simulated_latency,
        })
    }
}
