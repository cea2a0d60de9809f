//! `et-output` — everything between a [`CalculationResult`] and a reader.
//!
//! The core crates carry no display data.  This crate adds it:
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`meta`]     | `ModeMeta` — label, icon, colour per transport mode        |
//! | [`format`]   | pt-BR number, percentage, credit, and BRL formatting       |
//! | [`bar`]      | Comparison bar width and colour band                       |
//! | [`messages`] | pt-BR user messages for errors, autofill, and the pay stub |
//! | [`text`]     | `TextRenderer`, `TextObserver` — plain-text report         |
//! | [`row`]      | `ResultRow`, `ComparisonRow` — flat export rows            |
//! | [`writer`]   | `OutputWriter` trait                                       |
//! | [`csv`]      | `CsvWriter` — `results.csv`, `comparison.csv`              |
//! | [`observer`] | `WriterObserver` — bridges `ResultObserver` to a writer    |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use et_output::{CsvWriter, WriterObserver};
//!
//! let mut obs = WriterObserver::new(CsvWriter::new(Path::new("./out"))?);
//! calc.submit(&form, &mut obs)?;
//! obs.finish()?;
//! ```
//!
//! [`CalculationResult`]: et_calc::CalculationResult

pub mod bar;
pub mod csv;
pub mod error;
pub mod format;
pub mod messages;
pub mod meta;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use bar::{BarColor, bar_width};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::{format_brl, format_credits, format_number, format_percent};
pub use meta::ModeMeta;
pub use observer::WriterObserver;
pub use row::{ComparisonRow, ResultRow};
pub use text::{TextObserver, TextRenderer};
pub use writer::OutputWriter;
