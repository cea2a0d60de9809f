//! `WriterObserver<W>` — bridges `ResultObserver` to an `OutputWriter`.

use et_calc::{CalculationResult, ResultObserver};

use crate::row::{ComparisonRow, ResultRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ResultObserver`] that exports every result to any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check them with [`take_error`][Self::take_error]
/// or call [`finish`][Self::finish], which reports them.
pub struct WriterObserver<W: OutputWriter> {
    writer:     W,
    next_id:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> WriterObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_id:    0,
            last_error: None,
        }
    }

    /// Number of results written so far.
    pub fn written(&self) -> u64 {
        self.next_id
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, then report the first stored error, if any.
    pub fn finish(&mut self) -> OutputResult<()> {
        let flushed = self.writer.finish();
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        flushed
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ResultObserver for WriterObserver<W> {
    fn on_result(&mut self, result: &CalculationResult) {
        let id = self.next_id;
        self.next_id += 1;

        let written = self
            .writer
            .write_result(&ResultRow::from_result(id, result))
            .and_then(|()| {
                self.writer
                    .write_comparison(&ComparisonRow::from_result(id, result))
            });
        self.store_err(written);
    }
}
