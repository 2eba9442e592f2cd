use sideswipe::{ScrollSurface, ScrollToIndex};

use crate::{Easing, Tween};

/// Default snap animation length.
pub const DEFAULT_DURATION_MS: u64 = 250;

/// A [`ScrollSurface`] that keeps the scroll position itself and animates it with a [`Tween`].
///
/// The surface has no clock of its own: call [`TweenSurface::set_now`] before forwarding events
/// so animations start at the right time, and [`TweenSurface::tick`] every frame. The most
/// recent scroll call always wins: an immediate scroll cancels any tween, an animated scroll
/// continues from the running snap's current offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSurface {
    position: f64,
    tween: Option<Tween>,
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl Default for TweenSurface {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl TweenSurface {
    pub fn new(position: f64) -> Self {
        Self {
            position,
            tween: None,
            now_ms: 0,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Advances the animation.
    ///
    /// Returns the new position while a tween is active (including the final frame), `None`
    /// otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        self.set_now(now_ms);
        let frame = self.tween?.frame(self.now_ms);
        self.position = frame.offset;
        if frame.done {
            self.tween = None;
        }
        Some(self.position)
    }
}

impl ScrollSurface for TweenSurface {
    fn scroll_to_offset(&mut self, offset: f64, animated: bool) {
        if !animated {
            self.tween = None;
            self.position = offset;
            return;
        }
        self.tween = Some(Tween::toward(
            self.tween.as_ref(),
            self.position,
            offset,
            self.now_ms,
            self.duration_ms,
            self.easing,
        ));
    }

    fn scroll_to_index(&mut self, request: ScrollToIndex) {
        self.scroll_to_offset(request.target_offset(), request.animated);
    }
}
