use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ExportInProgress;

/// Lets one export run at a time.
///
/// The shell hands out an [`ExportPass`] per export; the slot frees up when
/// the pass is dropped, including when the export worker panics.
#[derive(Debug, Default)]
pub struct ExportGate {
    busy: AtomicBool,
}

impl ExportGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_enter(self: &Arc<Self>) -> Result<ExportPass, ExportInProgress> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportInProgress)?;
        Ok(ExportPass {
            gate: Arc::clone(self),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct ExportPass {
    gate: Arc<ExportGate>,
}

impl Drop for ExportPass {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}
