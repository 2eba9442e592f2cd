use crate::GestureState;

/// Ownership state of the current touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArbiterState {
    #[default]
    Idle,
    Captured,
}

/// Decides whether a touch belongs to the carousel or to something else.
///
/// The policies themselves are supplied by the caller; the arbiter only tracks the state they
/// drive. A termination request answers synchronously and never leaves an observable
/// intermediate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureArbiter {
    state: ArbiterState,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ArbiterState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.state == ArbiterState::Captured
    }

    /// Runs the capture test for a move event. Returns `true` when the touch is (now) ours.
    pub fn test_capture(
        &mut self,
        should_capture: &dyn Fn(&GestureState) -> bool,
        gesture: &GestureState,
    ) -> bool {
        match self.state {
            ArbiterState::Captured => true,
            ArbiterState::Idle => {
                if should_capture(gesture) {
                    self.state = ArbiterState::Captured;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Confirms ownership. Returns `true` if this started a new session.
    ///
    /// Input systems may grant without a prior capture test; that also captures.
    pub fn grant(&mut self) -> bool {
        let fresh = self.state == ArbiterState::Idle;
        self.state = ArbiterState::Captured;
        fresh
    }

    /// Ends the session. Returns `true` if a session was active.
    pub fn release(&mut self) -> bool {
        let was_captured = self.is_captured();
        self.state = ArbiterState::Idle;
        was_captured
    }

    /// Answers a termination request from the input system.
    ///
    /// Returns `true` (and goes idle) only when `should_release` agrees; otherwise capture is
    /// retained.
    pub fn request_termination(
        &mut self,
        should_release: &dyn Fn(&GestureState) -> bool,
        gesture: &GestureState,
    ) -> bool {
        if !self.is_captured() {
            return true;
        }
        if should_release(gesture) {
            self.state = ArbiterState::Idle;
            true
        } else {
            false
        }
    }
}
