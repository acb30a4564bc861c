//! Monotonic epoch tags for stale-batch suppression.
//!
//! Every fetch batch is tagged with a monotonically increasing epoch when it
//! is initiated. When the batch resolves, its epoch is checked against the
//! most recently issued one; a stale batch resolves to
//! [`UmsatzError::Superseded`] and its results are never applied. This is
//! what guarantees last-write-wins when a slow earlier request resolves
//! after a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};

use umsatz_core::UmsatzError;

/// Tag identifying one initiated fetch batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchEpoch(u64);

impl FetchEpoch {
    /// The raw epoch value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Issues epochs and answers whether a given epoch is still the latest.
///
/// One counter guards one view's batch lifecycle; independent views carry
/// independent counters so refreshing a table cannot supersede an in-flight
/// chart batch.
#[derive(Debug, Default)]
pub(crate) struct EpochCounter {
    issued: AtomicU64,
}

impl EpochCounter {
    pub(crate) const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Initiate a new batch; every previously issued epoch becomes stale.
    pub(crate) fn begin(&self) -> FetchEpoch {
        FetchEpoch(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Fail with `Superseded` if a newer batch has been initiated since
    /// `epoch` was issued.
    pub(crate) fn guard(&self, epoch: FetchEpoch) -> Result<(), UmsatzError> {
        if self.issued.load(Ordering::SeqCst) == epoch.0 {
            Ok(())
        } else {
            Err(UmsatzError::Superseded { epoch: epoch.0 })
        }
    }
}
