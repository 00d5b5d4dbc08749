//! Application-wide guard allowing a single delete submission at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct DeleteGate {
    busy: Arc<AtomicBool>,
}

/// Held while a delete request is in flight; releases the gate on drop.
#[derive(Debug)]
#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct DeleteGuard {
    busy: Arc<AtomicBool>,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate, or returns `None` when another submission holds it.
    pub fn try_acquire(&self) -> Option<DeleteGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| DeleteGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for DeleteGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
