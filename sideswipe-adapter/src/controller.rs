use sideswipe::{Carousel, CarouselOptions, ItemKey, NoParentScroll, ParentScroll};

use crate::{Easing, PointerTracker, TweenSurface};

/// A framework-neutral controller that wraps a [`sideswipe::Carousel`] and drives it from raw
/// pointer input and a frame clock.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` when pointer events occur
/// - `tick(now_ms)` each frame, and render from the returned offset
///
/// Snap animations run on an internal [`TweenSurface`]; every frame is fed back into the
/// carousel so `progress()` follows the animation.
#[derive(Clone, Debug)]
pub struct Controller<P = NoParentScroll, K = ItemKey> {
    c: Carousel<TweenSurface, P, K>,
    pointer: PointerTracker,
}

impl<K> Controller<NoParentScroll, K> {
    pub fn standalone(options: CarouselOptions<K>) -> Self {
        Self::new(options, NoParentScroll)
    }
}

impl<P: ParentScroll, K> Controller<P, K> {
    pub fn new(options: CarouselOptions<K>, parent: P) -> Self {
        let position = options.initial_index.min(options.count.saturating_sub(1)) as f64
            * options.item_width;
        Self::from_carousel(Carousel::new(options, TweenSurface::new(position), parent))
    }

    pub fn from_carousel(c: Carousel<TweenSurface, P, K>) -> Self {
        Self {
            c,
            pointer: PointerTracker::new(),
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        let surface = self.c.surface_mut();
        *surface = surface.with_animation(duration_ms, easing);
        self
    }

    pub fn carousel(&self) -> &Carousel<TweenSurface, P, K> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<TweenSurface, P, K> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<TweenSurface, P, K> {
        self.c
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn is_animating(&self) -> bool {
        self.c.surface().is_animating()
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64, now_ms: u64) {
        self.c.surface_mut().set_now(now_ms);
        self.pointer.down(x, y, now_ms);
    }

    /// Forwards a pointer move. Captures the gesture once the capture policy agrees.
    ///
    /// Returns the applied scroll offset while the carousel owns the gesture.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, now_ms: u64) -> Option<f64> {
        self.c.surface_mut().set_now(now_ms);
        let gesture = self.pointer.move_to(x, y, now_ms)?;
        if !self.c.is_dragging() {
            if !self.c.on_capture_test(&gesture) {
                return None;
            }
            adebug!(dx = gesture.dx, dy = gesture.dy, "Controller: gesture captured");
            self.c.on_grant(&gesture);
        }
        self.c.on_move(&gesture)
    }

    /// Lifts the pointer. Returns the settled index if the carousel owned the gesture.
    pub fn on_pointer_up(&mut self, x: f64, y: f64, now_ms: u64) -> Option<usize> {
        self.c.surface_mut().set_now(now_ms);
        let gesture = self.pointer.up(x, y, now_ms)?;
        if !self.c.is_dragging() {
            return None;
        }
        Some(self.c.on_release(&gesture))
    }

    /// Asks the carousel to give up the current gesture (e.g. a parent recognizer wants it).
    ///
    /// Returns `true` when the gesture was handed over (or none was active).
    pub fn request_termination(&mut self, now_ms: u64) -> bool {
        self.c.surface_mut().set_now(now_ms);
        let Some(gesture) = self.pointer.gesture() else {
            return true;
        };
        let released = self.c.on_termination_request(&gesture);
        if released {
            adebug!("Controller: gesture terminated");
            self.pointer.reset();
        }
        released
    }

    /// Imposes an index from outside. Every call counts; during a gesture it is queued until
    /// release.
    pub fn set_index(&mut self, index: usize, now_ms: u64) {
        self.c.surface_mut().set_now(now_ms);
        self.c.scroll_to_index(index);
    }

    /// Forwards the host's `index` prop; only changes from the previous value move the carousel.
    pub fn set_index_prop(&mut self, index: Option<usize>, now_ms: u64) {
        self.c.surface_mut().set_now(now_ms);
        self.c.set_index_prop(index);
    }

    /// Advances the snap animation and feeds the new position back into the carousel.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let offset = self.c.surface_mut().tick(now_ms)?;
        self.c.on_scroll(offset);
        Some(offset)
    }
}
