//! Plain data row types written by output backends.

use et_calc::CalculationResult;

/// One computed request, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Sequence number assigned by the observer, starting at 0.
    pub id:              u64,
    pub origin:          String,
    pub destination:     String,
    pub distance_km:     f64,
    pub mode:            &'static str,
    pub emission_kg:     f64,
    pub car_baseline_kg: f64,
    pub saved_kg:        f64,
    pub saved_pct:       f64,
    pub credits:         f64,
    pub price_min:       f64,
    pub price_max:       f64,
    pub price_avg:       f64,
}

impl ResultRow {
    pub fn from_result(id: u64, r: &CalculationResult) -> Self {
        Self {
            id,
            origin:          r.origin.clone(),
            destination:     r.destination.clone(),
            distance_km:     r.distance_km,
            mode:            r.mode.as_str(),
            emission_kg:     r.emission,
            car_baseline_kg: r.car_baseline,
            saved_kg:        r.savings.saved_kg,
            saved_pct:       r.savings.percentage,
            credits:         r.credits,
            price_min:       r.price.min,
            price_max:       r.price.max,
            price_avg:       r.price.average,
        }
    }
}

/// One mode of one request's comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// [`ResultRow::id`] of the request this row belongs to.
    pub id:                u64,
    /// Position in the sorted table, 0 = lowest emission.
    pub rank:              u32,
    pub mode:              &'static str,
    pub emission_kg:       f64,
    pub percentage_vs_car: f64,
    pub selected:          bool,
}

impl ComparisonRow {
    /// All comparison rows of `r`, in table order.
    pub fn from_result(id: u64, r: &CalculationResult) -> Vec<Self> {
        r.comparison
            .iter()
            .enumerate()
            .map(|(rank, row)| Self {
                id,
                rank:              rank as u32,
                mode:              row.mode.as_str(),
                emission_kg:       row.emission,
                percentage_vs_car: row.percentage_vs_car,
                selected:          row.mode == r.mode,
            })
            .collect()
    }
}
