//! The `OutputWriter` trait implemented by export backends.

use crate::{ComparisonRow, OutputResult, ResultRow};

/// Trait implemented by export backends.
///
/// Errors are returned here but swallowed by [`WriterObserver`], which keeps
/// the first one for [`WriterObserver::take_error`].
///
/// [`WriterObserver`]: crate::WriterObserver
/// [`WriterObserver::take_error`]: crate::WriterObserver::take_error
pub trait OutputWriter {
    /// Write one result summary row.
    fn write_result(&mut self, row: &ResultRow) -> OutputResult<()>;

    /// Write the comparison table of one result.
    fn write_comparison(&mut self, rows: &[ComparisonRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
