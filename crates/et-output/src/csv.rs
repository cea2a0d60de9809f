//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `results.csv`
//! - `comparison.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ComparisonRow, OutputResult, ResultRow};

/// Writes results and comparison tables to two CSV files.
pub struct CsvWriter {
    results:    Writer<File>,
    comparison: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut results = Writer::from_path(dir.join("results.csv"))?;
        results.write_record([
            "id", "origin", "destination", "distance_km", "mode", "emission_kg",
            "car_baseline_kg", "saved_kg", "saved_pct", "credits", "price_min",
            "price_max", "price_avg",
        ])?;

        let mut comparison = Writer::from_path(dir.join("comparison.csv"))?;
        comparison.write_record(["id", "rank", "mode", "emission_kg", "percentage_vs_car", "selected"])?;

        Ok(Self {
            results,
            comparison,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_result(&mut self, row: &ResultRow) -> OutputResult<()> {
        self.results.write_record(&[
            row.id.to_string(),
            row.origin.clone(),
            row.destination.clone(),
            row.distance_km.to_string(),
            row.mode.to_owned(),
            row.emission_kg.to_string(),
            row.car_baseline_kg.to_string(),
            row.saved_kg.to_string(),
            row.saved_pct.to_string(),
            row.credits.to_string(),
            row.price_min.to_string(),
            row.price_max.to_string(),
            row.price_avg.to_string(),
        ])?;
        Ok(())
    }

    fn write_comparison(&mut self, rows: &[ComparisonRow]) -> OutputResult<()> {
        for row in rows {
            self.comparison.write_record(&[
                row.id.to_string(),
                row.rank.to_string(),
                row.mode.to_owned(),
                row.emission_kg.to_string(),
                row.percentage_vs_car.to_string(),
                (row.selected as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.results.flush()?;
        self.comparison.flush()?;
        Ok(())
    }
}
