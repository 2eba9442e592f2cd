use crate::ParentScroll;

/// Keeps the ambient scroll container disabled for the span of a gesture.
///
/// The collaborator's own `is_enabled` is the source of truth; `held` only records whether this
/// carousel currently owns the disabled claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParentScrollLock {
    held: bool,
}

impl ParentScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Called on grant and on every move.
    pub fn acquire(&mut self, parent: &mut dyn ParentScroll) {
        if parent.is_enabled() {
            parent.disable();
        }
        self.held = true;
    }

    /// Called once the gesture ends.
    pub fn release(&mut self, parent: &mut dyn ParentScroll) {
        if !parent.is_enabled() {
            parent.enable();
        }
        self.held = false;
    }
}
