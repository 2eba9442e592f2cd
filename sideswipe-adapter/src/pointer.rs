use sideswipe::GestureState;

/// Default weight of the newest sample in the velocity average.
pub const DEFAULT_SMOOTHING: f64 = 0.3;

/// Samples further apart than this restart the velocity estimate.
pub const MAX_SAMPLE_GAP_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f64,
    y: f64,
    t_ms: u64,
}

/// Turns raw pointer positions into the [`GestureState`] snapshots the carousel consumes.
///
/// `dx`/`dy` are measured from the press point; `vx` is in px/ms, smoothed with an exponential
/// moving average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    origin: Option<Sample>,
    last: Option<Sample>,
    vx: f64,
    seeded: bool,
    smoothing: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::with_smoothing(DEFAULT_SMOOTHING)
    }

    pub fn with_smoothing(smoothing: f64) -> Self {
        Self {
            origin: None,
            last: None,
            vx: 0.0,
            seeded: false,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// The gesture so far, or `None` when no pointer is down.
    pub fn gesture(&self) -> Option<GestureState> {
        let origin = self.origin?;
        let last = self.last.unwrap_or(origin);
        Some(GestureState::new(
            last.x - origin.x,
            last.y - origin.y,
            self.vx,
        ))
    }

    pub fn down(&mut self, x: f64, y: f64, now_ms: u64) -> GestureState {
        let sample = Sample { x, y, t_ms: now_ms };
        self.origin = Some(sample);
        self.last = Some(sample);
        self.vx = 0.0;
        self.seeded = false;
        GestureState::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64, now_ms: u64) -> Option<GestureState> {
        let last = self.last?;
        let dt = now_ms.saturating_sub(last.t_ms);
        if dt > 0 {
            let instant = (x - last.x) / dt as f64;
            if !self.seeded || dt > MAX_SAMPLE_GAP_MS {
                self.vx = instant;
                self.seeded = true;
            } else {
                self.vx = self.vx * (1.0 - self.smoothing) + instant * self.smoothing;
            }
        }
        self.last = Some(Sample {
            x,
            y,
            t_ms: now_ms.max(last.t_ms),
        });
        self.gesture()
    }

    /// Lifts the pointer and returns the final gesture.
    ///
    /// Lifting at the last reported position keeps the current velocity.
    pub fn up(&mut self, x: f64, y: f64, now_ms: u64) -> Option<GestureState> {
        let last = self.last?;
        let gesture = if last.x == x && last.y == y {
            self.gesture()
        } else {
            self.move_to(x, y, now_ms)
        };
        self.reset();
        gesture
    }

    pub fn reset(&mut self) {
        self.origin = None;
        self.last = None;
        self.vx = 0.0;
        self.seeded = false;
    }
}
