//! At-most-one pending submission.

use std::sync::atomic::{AtomicBool, Ordering};

/// Refuses a new submission while another one is still running.
///
/// A second submission made while the first is pending (for example during
/// the simulated latency) is rejected rather than queued, so two results can
/// never be rendered interleaved.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    pending: AtomicBool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate.  Returns `None` if a submission is already pending.
    ///
    /// The gate reopens when the returned guard is dropped.
    pub fn try_begin(&self) -> Option<SubmissionGuard<'_>> {
        self.pending
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| SubmissionGuard { gate: self })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Holds a [`SubmissionGate`] closed until dropped.
#[derive(Debug)]
pub struct SubmissionGuard<'a> {
    gate: &'a SubmissionGate,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.gate.pending.store(false, Ordering::Release);
    }
}
