//! Plain-text report renderer.
//!
//! Three sections, in the order a user reads them:
//!
//! ```text
//! Rota:        São Paulo, SP ➝ Rio de Janeiro, RJ
//! Distância:   430,00 km
//! Emissão:     38,27 kg CO₂
//! Transporte:  🚌 Ônibus
//! 🎉 Ótima escolha! Você economizou 13,33 kg de CO₂ (25,8% a menos que um carro).
//!
//! Comparação
//!   🚲 Bicicleta       0,00 kg     0,0% do carro  [░░░░░░░░░░░░░░░░░░░░]
//! > 🚌 Ônibus         38,27 kg    74,2% do carro  [██░░░░░░░░░░░░░░░░░░]  Selecionado
//!   …
//!
//! Créditos necessários: 0,0383 (Base: 1 crédito = 1 tonelada CO₂)
//! Estimativa de custo:  ~R$ 3,83 (Min: R$ 1,92 | Max: R$ 5,75)
//! ```

use std::fmt::Write;

use et_calc::{AutofillState, CalculationResult, ResultObserver, SubmitError};

use crate::bar::bar_width;
use crate::format::{format_brl, format_credits, format_number, format_percent};
use crate::messages;
use crate::meta::ModeMeta;

/// Renders a [`CalculationResult`] as plain text.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Characters in a full comparison bar.
    pub bar_chars: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { bar_chars: 20 }
    }
}

impl TextRenderer {
    /// All three sections separated by blank lines.
    pub fn render(&self, r: &CalculationResult) -> String {
        format!(
            "{}\n{}\n{}",
            self.render_results(r),
            self.render_comparison(r),
            self.render_credits(r)
        )
    }

    /// Route, distance, emission, mode, and the savings banner.
    pub fn render_results(&self, r: &CalculationResult) -> String {
        let meta = ModeMeta::of(r.mode);
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Rota:        {} ➝ {}", r.origin, r.destination);
        let _ = writeln!(out, "Distância:   {} km", format_number(r.distance_km, 2));
        let _ = writeln!(out, "Emissão:     {} kg CO₂", format_number(r.emission, 2));
        let _ = writeln!(out, "Transporte:  {} {}", meta.icon, meta.label);
        if r.has_savings() {
            let _ = writeln!(
                out,
                "🎉 Ótima escolha! Você economizou {} kg de CO₂ ({} a menos que um carro).",
                format_number(r.savings.saved_kg, 2),
                format_percent(r.savings.percentage),
            );
        }
        out
    }

    /// Every mode with its emission, share of car, and a scaled bar.
    pub fn render_comparison(&self, r: &CalculationResult) -> String {
        let max = r.comparison.iter().map(|c| c.emission).fold(0.0, f64::max);

        let mut out = String::from("Comparação\n");
        for row in &r.comparison {
            let meta = ModeMeta::of(row.mode);
            let selected = row.mode == r.mode;
            let _ = writeln!(
                out,
                "{} {} {:<10} {:>10} kg {:>8} do carro  [{}]{}",
                if selected { ">" } else { " " },
                meta.icon,
                meta.label,
                format_number(row.emission, 2),
                format_percent(row.percentage_vs_car),
                self.bar(bar_width(row.emission, max)),
                if selected { "  Selecionado" } else { "" },
            );
        }
        let _ = writeln!(out, "{}", messages::TIP);
        out
    }

    /// Credits needed and their cost band.
    pub fn render_credits(&self, r: &CalculationResult) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Créditos necessários: {} ({})",
            format_credits(r.credits),
            messages::CREDIT_BASIS
        );
        let _ = writeln!(
            out,
            "Estimativa de custo:  ~{} (Min: {} | Max: {})",
            format_brl(r.price.average),
            format_brl(r.price.min),
            format_brl(r.price.max),
        );
        let _ = writeln!(out, "{}", messages::OFFSET_INFO);
        out
    }

    fn bar(&self, width_pct: f64) -> String {
        let filled = ((width_pct / 100.0) * self.bar_chars as f64).round() as usize;
        let filled = filled.min(self.bar_chars);
        format!("{}{}", "█".repeat(filled), "░".repeat(self.bar_chars - filled))
    }
}

/// A [`ResultObserver`] that collects the rendered report and user messages.
#[derive(Debug, Default)]
pub struct TextObserver {
    pub renderer: TextRenderer,
    /// Rendered reports, one per successful submission.
    pub reports:  Vec<String>,
    /// Autofill hints and error messages, in the order they occurred.
    pub messages: Vec<String>,
}

impl TextObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultObserver for TextObserver {
    fn on_autofill(&mut self, state: &AutofillState) {
        if let Some(hint) = messages::autofill_hint(state) {
            self.messages.push(hint.to_owned());
        }
    }

    fn on_result(&mut self, result: &CalculationResult) {
        self.reports.push(self.renderer.render(result));
    }

    fn on_rejected(&mut self, error: &SubmitError) {
        let msg = messages::submit_message(error);
        // A route miss was already announced by `on_autofill`.
        if self.messages.last().map(String::as_str) != Some(msg) {
            self.messages.push(msg.to_owned());
        }
    }
}
