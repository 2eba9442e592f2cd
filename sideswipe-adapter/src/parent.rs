use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use sideswipe::ParentScroll;

/// A [`ParentScroll`] backed by a shared flag.
///
/// Hand a clone to the enclosing scroll container and have it consult
/// [`SharedParentScroll::is_enabled`] before scrolling.
#[derive(Clone, Debug)]
pub struct SharedParentScroll {
    enabled: Arc<AtomicBool>,
}

impl Default for SharedParentScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedParentScroll {
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn from_flag(enabled: Arc<AtomicBool>) -> Self {
        Self { enabled }
    }

    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl ParentScroll for SharedParentScroll {
    fn is_enabled(&self) -> bool {
        SharedParentScroll::is_enabled(self)
    }

    fn enable(&mut self) {
        self.enabled.store(true, Ordering::Release);
    }

    fn disable(&mut self) {
        self.enabled.store(false, Ordering::Release);
    }
}
