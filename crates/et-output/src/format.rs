//! pt-BR number formatting.
//!
//! `.` groups thousands and `,` separates decimals: `1234.5` → `"1.234,50"`.
//! Values reaching these helpers are already rounded by the engine, so the
//! fixed-precision step only pads.

/// Group thousands and use a decimal comma, with exactly `decimals` places.
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Brazilian real, two decimals: `5.16` → `"R$ 5,16"`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_number(value, 2))
}

/// Carbon credits, four decimals, no grouping: `0.0516` → `"0,0516"`.
pub fn format_credits(credits: f64) -> String {
    format!("{credits:.4}").replace('.', ",")
}

/// One-decimal percentage: `25.8` → `"25,8%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value, 1))
}
