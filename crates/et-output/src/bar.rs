//! Comparison bar geometry.
//!
//! Each mode's bar is scaled against the largest emission in the table, so
//! the worst mode always fills the bar.

/// Colour band of a comparison bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Amber,
    Red,
}

impl BarColor {
    /// Band for a bar `width_pct` wide: ≤ 25 green, ≤ 75 amber, else red.
    pub fn for_width(width_pct: f64) -> Self {
        if width_pct <= 25.0 {
            BarColor::Green
        } else if width_pct <= 75.0 {
            BarColor::Amber
        } else {
            BarColor::Red
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            BarColor::Green => "#10b981",
            BarColor::Amber => "#f59e0b",
            BarColor::Red   => "#ef4444",
        }
    }
}

/// Bar width in percent of the widest bar.  `0` when every mode emits
/// nothing.
pub fn bar_width(emission: f64, max_emission: f64) -> f64 {
    if max_emission > 0.0 {
        (emission / max_emission * 100.0).min(100.0)
    } else {
        0.0
    }
}
