//! Process-wide activation flags derived from the active tip.
//!
//! Both flags are recomputed by the dispatcher on every tip update that
//! connects a block. Readers on other threads observe them with sequentially
//! consistent ordering.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct ActivationFlags {
    dip0001_active_at_tip: AtomicBool,
    autolock_active: AtomicBool,
}

impl ActivationFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the height-gated DIP0001 rules apply at the last seen tip.
    pub fn dip0001_active_at_tip(&self) -> bool {
        self.dip0001_active_at_tip.load(Ordering::SeqCst)
    }

    /// Whether instant-send auto-locking is active at the last seen tip.
    pub fn autolock_active(&self) -> bool {
        self.autolock_active.load(Ordering::SeqCst)
    }

    /// Store the DIP0001 flag, returning the previous value.
    pub fn set_dip0001_active_at_tip(&self, active: bool) -> bool {
        self.dip0001_active_at_tip.swap(active, Ordering::SeqCst)
    }

    /// Store the auto-lock flag, returning the previous value.
    pub fn set_autolock_active(&self, active: bool) -> bool {
        self.autolock_active.swap(active, Ordering::SeqCst)
    }
}
