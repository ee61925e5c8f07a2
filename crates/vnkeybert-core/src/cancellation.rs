//! Cooperative cancellation for the blocking embedding calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::{ExtractionError, KeyBertResult};

/// Shared cancel flag plus an optional deadline.
///
/// Clones share the flag, so a caller can keep one clone and cancel
/// from another thread while the extraction runs.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// A token that never fires.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::default(),
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail if cancelled or past the deadline.
    pub fn check(&self, stage: &str) -> KeyBertResult<()> {
        if self.is_cancelled() {
            return Err(ExtractionError::Cancelled {
                stage: stage.to_string(),
            }
            .into());
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(ExtractionError::DeadlineExceeded {
                stage: stage.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
