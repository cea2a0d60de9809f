//! Place-name normalization.
//!
//! Two names denote the same place iff their normalized forms are equal:
//!
//! ```text
//! NFD decompose → drop U+0300..=U+036F → lowercase → trim
//! ```
//!
//! So `"São Paulo, SP"`, `"sao paulo, sp"` and `"  SÃO PAULO, SP "` all
//! normalize to `"sao paulo, sp"`.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
#[inline]
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Fold accents and case and trim surrounding whitespace.
pub fn normalize(name: &str) -> String {
    let stripped: String = name.nfd().filter(|&c| !is_combining_diacritic(c)).collect();
    stripped.to_lowercase().trim().to_owned()
}

/// Alphabetical ordering for Portuguese place names.
///
/// Primary order ignores accents and case (`Belém` sorts before `Belo
/// Horizonte`); names that fold to the same text fall back to plain string
/// order so the result is total and deterministic.
pub fn collation_key(a: &str, b: &str) -> Ordering {
    normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b))
}
