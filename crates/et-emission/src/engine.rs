//! Pure emission and carbon-credit arithmetic.

use et_core::{EstimatorConfig, EtResult, TransportMode, round_to};

use crate::{CreditPrice, ModeComparison, Savings};

/// Computes every emission-derived figure from a validated
/// [`EstimatorConfig`].
///
/// Holds no mutable state: each method is a pure function of its arguments
/// and the configuration, so one engine can be shared freely (it is `Copy`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmissionEngine {
    config: EstimatorConfig,
}

impl EmissionEngine {
    /// Validate `config` and wrap it.
    pub fn new(config: EstimatorConfig) -> EtResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// kg CO₂ for travelling `distance_km` by `mode`, 2 decimals.
    pub fn emission(&self, distance_km: f64, mode: TransportMode) -> f64 {
        round_to(distance_km * self.config.factors.factor(mode), 2)
    }

    /// Like [`emission`][Self::emission] but keyed by a raw mode id.
    ///
    /// An unrecognised id has no emission data and yields `0.0`.
    pub fn emission_by_id(&self, distance_km: f64, mode_id: &str) -> f64 {
        mode_id
            .parse::<TransportMode>()
            .map(|mode| self.emission(distance_km, mode))
            .unwrap_or(0.0)
    }

    /// Emission of every mode for the same trip, cheapest first.
    ///
    /// Each row carries its share of the car emission.  When the car emits
    /// nothing (zero distance or zero car factor) the car row reads 100 % and
    /// every other row 0 %.  Equal emissions keep [`TransportMode::ALL`]
    /// order.
    pub fn all_modes_comparison(&self, distance_km: f64) -> Vec<ModeComparison> {
        let car = self.emission(distance_km, TransportMode::BASELINE);

        let mut rows: Vec<ModeComparison> = TransportMode::ALL
            .into_iter()
            .map(|mode| {
                let emission = self.emission(distance_km, mode);
                let percentage = if car > 0.0 {
                    emission / car * 100.0
                } else if mode == TransportMode::BASELINE {
                    100.0
                } else {
                    0.0
                };
                ModeComparison {
                    mode,
                    emission,
                    percentage_vs_car: round_to(percentage, 1),
                }
            })
            .collect();

        // `sort_by` is stable.
        rows.sort_by(|a, b| a.emission.total_cmp(&b.emission));
        rows
    }

    /// CO₂ avoided by emitting `emission` instead of `baseline`.
    ///
    /// A mode worse than the baseline saves nothing rather than a negative
    /// amount.
    pub fn savings(&self, emission: f64, baseline: f64) -> Savings {
        let saved = (baseline - emission).max(0.0);
        let percentage = if baseline > 0.0 { saved / baseline * 100.0 } else { 0.0 };
        Savings {
            saved_kg:   round_to(saved, 2),
            percentage: round_to(percentage, 1),
        }
    }

    /// Credits needed to offset `emission_kg`, 4 decimals.
    pub fn carbon_credits(&self, emission_kg: f64) -> f64 {
        round_to(emission_kg / self.config.credit_policy.kg_per_credit, 4)
    }

    /// Market cost band for `credits`.
    ///
    /// `average` is the midpoint of the unrounded bounds, rounded on its own.
    pub fn credit_price_estimate(&self, credits: f64) -> CreditPrice {
        let policy = &self.config.credit_policy;
        let min = credits * policy.price_min_per_credit;
        let max = credits * policy.price_max_per_credit;
        CreditPrice {
            min:     round_to(min, 2),
            max:     round_to(max, 2),
            average: round_to((min + max) / 2.0, 2),
        }
    }
}
