//! `ecotrip batch`: CSV in, CSV out.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use et_calc::{CalculatorBuilder, RawForm, ResultObserver};
use et_output::messages::submit_message;
use et_output::{CsvWriter, WriterObserver};

/// One input row.  Only `origin`, `destination` and `mode` are required.
#[derive(Debug, Deserialize)]
struct TripRecord {
    origin:      String,
    destination: String,
    #[serde(default)]
    distance:    String,
    mode:        Option<String>,
    #[serde(default)]
    manual:      bool,
}

impl TripRecord {
    fn into_form(self) -> RawForm {
        let form = RawForm::new(self.origin, self.destination, self.distance, self.mode.as_deref());
        if self.manual { form.manual() } else { form }
    }
}

pub fn run(input: &Path, out: &Path) -> Result<()> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("opening {}", input.display()))?;
    let forms = reader
        .deserialize::<TripRecord>()
        .map(|rec| rec.map(TripRecord::into_form))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("reading {}", input.display()))?;
    info!("{} trips read from {}", forms.len(), input.display());

    let calc = CalculatorBuilder::new().build()?;
    let results = calc.estimate_batch(&forms);

    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    let mut obs = WriterObserver::new(CsvWriter::new(out)?);

    let mut failed = 0usize;
    for (line, (form, result)) in forms.iter().zip(&results).enumerate() {
        match result {
            Ok(r) => obs.on_result(r),
            Err(e) => {
                failed += 1;
                // Line 1 is the header.
                warn!("row {}: {e}", line + 2);
                eprintln!(
                    "linha {}: {} ➝ {}: {}",
                    line + 2,
                    form.origin,
                    form.destination,
                    submit_message(e)
                );
            }
        }
    }
    obs.finish().context("writing CSV output")?;

    println!("{} viagens exportadas para {}, {} com erro", obs.written(), out.display(), failed);
    Ok(())
}
