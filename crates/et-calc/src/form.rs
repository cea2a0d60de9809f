//! Untyped form fields and their conversion into a [`CalculationRequest`].
//!
//! Everything arrives as text.  Parsing here is lenient; strictness lives in
//! [`CalculationRequest::validate`] so that every rejection carries a
//! specific [`ValidationError`][crate::ValidationError].

use crate::CalculationRequest;

/// Field values exactly as a user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub origin:          String,
    pub destination:     String,
    /// Distance text.  Ignored unless `manual_distance` is set, because the
    /// distance is otherwise filled in from the route table.
    pub distance:        String,
    /// Selected mode id; `None` when nothing was picked.
    pub mode:            Option<String>,
    pub manual_distance: bool,
}

impl RawForm {
    pub fn new(
        origin:      impl Into<String>,
        destination: impl Into<String>,
        distance:    impl Into<String>,
        mode:        Option<&str>,
    ) -> Self {
        Self {
            origin:          origin.into(),
            destination:     destination.into(),
            distance:        distance.into(),
            mode:            mode.map(str::to_owned),
            manual_distance: false,
        }
    }

    /// Use the typed distance instead of the route table.
    pub fn manual(mut self) -> Self {
        self.manual_distance = true;
        self
    }

    /// Trim text fields and parse the distance.
    ///
    /// A blank mode becomes `None`.  Distance text that holds no number
    /// becomes `NaN`.
    pub fn to_request(&self) -> CalculationRequest {
        let mode = self
            .mode
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned);

        CalculationRequest {
            origin:                   self.origin.trim().to_owned(),
            destination:              self.destination.trim().to_owned(),
            distance_km:              parse_distance(&self.distance),
            mode,
            manual_distance_override: self.manual_distance,
        }
    }
}

/// Parse a distance the way a browser number field is read.
///
/// Surrounding whitespace is ignored and `,` is accepted as the decimal
/// separator (`"12,5"` → `12.5`).  If the whole text is not a number, the
/// longest numeric prefix is used (`"430 km"` → `430.0`).  Text with no
/// leading number yields `NaN`.
pub fn parse_distance(text: &str) -> f64 {
    let text = text.trim().replace(',', ".");
    text.parse::<f64>()
        .ok()
        .or_else(|| leading_number(&text))
        .unwrap_or(f64::NAN)
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut seen_digit = false;
    let mut seen_dot   = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9'          => seen_digit = true,
            b'.' if !seen_dot    => seen_dot = true,
            _                    => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}
