/// One animation frame: where the list is, and whether the snap has landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenFrame {
    pub offset: f64,
    pub done: bool,
}

/// A snap animation between two scroll offsets.
///
/// Offsets are signed: boundary compensation can put a target slightly before `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Starts a snap toward `to`, continuing from `in_flight` if one is still running.
    ///
    /// An interrupted snap restarts from wherever it currently is, so the latest target wins
    /// without a visible jump; otherwise the snap starts at `position`.
    pub fn toward(
        in_flight: Option<&Tween>,
        position: f64,
        to: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        let from = match in_flight {
            Some(t) if !t.is_done(now_ms) => t.sample(now_ms),
            _ => position,
        };
        Self::new(from, to, now_ms, duration_ms, easing)
    }

    /// Fraction of the duration elapsed at `now_ms`, in `0.0..=1.0`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            // Land exactly on the target, whatever the easing's rounding.
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.sample(self.progress(now_ms))
    }

    pub fn frame(&self, now_ms: u64) -> TweenFrame {
        TweenFrame {
            offset: self.sample(now_ms),
            done: self.is_done(now_ms),
        }
    }
}

/// Easing curves for snaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Fast start, gentle landing; reads like a released flick.
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}
