use alloc::sync::Arc;

use crate::{
    ArbiterState, CarouselItem, CarouselOptions, CarouselState, GestureArbiter, GestureState,
    ItemKey, ItemLayout, NoParentScroll, OffsetMapper, ParentScroll, ParentScrollLock, Phase,
    Progress, ScrollSurface, ScrollToIndex,
};

/// A headless, gesture-driven carousel.
///
/// This type owns the settled index, the live scroll position and the gesture session; it holds
/// no UI objects. Adapters drive it by forwarding input events (`on_capture_test`, `on_grant`,
/// `on_move`, `on_release`, `on_termination_request`), scroll feedback (`on_scroll`) and
/// externally imposed indexes (`set_index_prop`). Scrolling is delegated to the injected
/// [`ScrollSurface`]; the ambient scroll container is toggled through [`ParentScroll`].
///
/// An index imposed while a gesture is captured is queued and applied right after the release
/// settles, so the imposed index wins.
#[derive(Clone, Debug)]
pub struct Carousel<S, P = NoParentScroll, K = ItemKey> {
    options: CarouselOptions<K>,
    surface: S,
    parent: P,

    arbiter: GestureArbiter,
    lock: ParentScrollLock,
    progress: Progress,
    current_index: usize,

    index_prop: Option<usize>,
    pending_index: Option<usize>,
    end_reached_for: Option<f64>,
}

impl<S: ScrollSurface, K> Carousel<S, NoParentScroll, K> {
    /// Creates a carousel that is not nested in another scroll container.
    pub fn standalone(options: CarouselOptions<K>, surface: S) -> Self {
        Self::new(options, surface, NoParentScroll)
    }
}

impl<S: ScrollSurface, P: ParentScroll, K> Carousel<S, P, K> {
    /// Creates a carousel settled on `options.initial_index` (clamped into bounds).
    ///
    /// The initial scroll position is `initial_index * item_width`; the surface is not touched.
    pub fn new(options: CarouselOptions<K>, surface: S, parent: P) -> Self {
        let initial_index = options.initial_index;
        let current_index = initial_index.min(options.count.saturating_sub(1));
        let position = current_index as f64 * options.item_width;
        cdebug!(
            count = options.count,
            item_width = options.item_width,
            current_index,
            "Carousel::new"
        );
        Self {
            progress: Progress::new(position, options.item_width),
            options,
            surface,
            parent,
            arbiter: GestureArbiter::new(),
            lock: ParentScrollLock::new(),
            current_index,
            // The starting index is the first prop value the host rendered with.
            index_prop: Some(initial_index),
            pending_index: None,
            end_reached_for: None,
        }
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    /// Replaces the options, re-deriving whatever depends on them.
    ///
    /// A new item width takes effect in `progress()` immediately. If the collection shrank below
    /// the current index, the carousel settles on the new last item.
    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        let prev_count = self.options.count;
        let prev_initial_index = self.options.initial_index;
        self.options = options;
        self.progress.set_item_width(self.options.item_width);
        cdebug!(
            count = self.options.count,
            item_width = self.options.item_width,
            threshold = self.options.threshold,
            "Carousel::set_options"
        );

        if self.options.count != prev_count {
            if self.options.count == 0 {
                self.current_index = 0;
                self.pending_index = None;
            } else if self.current_index >= self.options.count {
                let last = self.options.count - 1;
                if self.arbiter.is_captured() {
                    self.pending_index = Some(last);
                } else {
                    self.settle_on(last);
                }
            }
        }

        if self.options.initial_index != prev_initial_index {
            self.set_index_prop(Some(self.options.initial_index));
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn parent_mut(&mut self) -> &mut P {
        &mut self.parent
    }

    pub fn into_parts(self) -> (CarouselOptions<K>, S, P) {
        (self.options, self.surface, self.parent)
    }

    pub fn mapper(&self) -> OffsetMapper {
        self.options.mapper()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scroll_position(&self) -> f64 {
        self.progress.position()
    }

    /// `scroll_position / item_width`, exact at every observation.
    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn phase(&self) -> Phase {
        match self.arbiter.state() {
            ArbiterState::Idle => Phase::Settled,
            ArbiterState::Captured => Phase::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.arbiter.is_captured()
    }

    pub fn is_parent_scroll_held(&self) -> bool {
        self.lock.is_held()
    }

    /// The index imposed during the current gesture, if any.
    pub fn pending_index(&self) -> Option<usize> {
        self.pending_index
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            scroll_position: self.progress.position(),
            phase: self.phase(),
        }
    }

    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        (index < self.options.count).then(|| self.mapper().item_layout(index))
    }

    /// Runs the capture test for a move event. Returns whether the carousel wants the touch.
    pub fn on_capture_test(&mut self, gesture: &GestureState) -> bool {
        let should_capture = Arc::clone(&self.options.should_capture);
        self.arbiter.test_capture(&*should_capture, gesture)
    }

    /// The input system handed the touch to the carousel.
    pub fn on_grant(&mut self, _gesture: &GestureState) {
        if self.arbiter.grant() {
            cdebug!(current_index = self.current_index, "Carousel::on_grant");
        }
        self.lock.acquire(&mut self.parent);
    }

    /// Tracks a move by setting the scroll position directly (no snapping).
    ///
    /// Returns the offset applied, or `None` when no gesture is captured or the collection is
    /// empty.
    pub fn on_move(&mut self, gesture: &GestureState) -> Option<f64> {
        if !self.arbiter.is_captured() {
            return None;
        }
        self.lock.acquire(&mut self.parent);
        if self.options.count == 0 {
            return None;
        }

        let offset = self.mapper().drag_offset(self.current_index, gesture.dx);
        ctrace!(dx = gesture.dx, offset, "Carousel::on_move");
        self.surface.scroll_to_offset(offset, false);
        self.apply_position(offset);
        Some(offset)
    }

    /// Ends the gesture: resolves the target index, animates to it, re-enables the parent and
    /// commits.
    ///
    /// Returns the settled index. `on_index_change` fires for every completed gesture, even when
    /// the index is unchanged.
    pub fn on_release(&mut self, gesture: &GestureState) -> usize {
        if !self.arbiter.release() {
            return self.current_index;
        }

        if self.options.count == 0 {
            cwarn!("Carousel::on_release: empty collection");
            self.lock.release(&mut self.parent);
            return self.current_index;
        }

        let origin = self.current_index;
        let mapper = self.mapper();
        let target = self.options.snap_resolver().resolve(origin, gesture);
        self.surface.scroll_to_index(ScrollToIndex {
            index: target,
            layout: mapper.item_layout(target),
            view_offset: mapper.settle_view_offset(target, origin),
            animated: true,
        });
        self.lock.release(&mut self.parent);

        self.current_index = target;
        cdebug!(
            origin,
            target,
            dx = gesture.dx,
            vx = gesture.vx,
            "Carousel::on_release"
        );
        if let Some(on_index_change) = self.options.on_index_change.clone() {
            on_index_change(target);
        }

        if let Some(pending) = self.pending_index.take() {
            self.settle_on(pending);
        }
        self.current_index
    }

    /// Answers the input system's request to hand the touch elsewhere.
    ///
    /// When `should_release` agrees, the gesture is cancelled: the parent is re-enabled and the
    /// carousel animates back to its current index without notifying.
    pub fn on_termination_request(&mut self, gesture: &GestureState) -> bool {
        if !self.arbiter.is_captured() {
            return true;
        }
        let should_release = Arc::clone(&self.options.should_release);
        if !self.arbiter.request_termination(&*should_release, gesture) {
            return false;
        }

        cdebug!(current_index = self.current_index, "Carousel::on_termination_request: released");
        self.lock.release(&mut self.parent);
        let index = self.pending_index.take().unwrap_or(self.current_index);
        self.settle_on(index);
        true
    }

    /// Feeds an externally driven index (the `index` prop).
    ///
    /// Only changes relative to the previous prop value trigger a transition, mirroring prop
    /// diffing; the previous value starts out as `options.initial_index`. While a gesture is captured the change is queued until release.
    pub fn set_index_prop(&mut self, index: Option<usize>) {
        if index == self.index_prop {
            return;
        }
        self.index_prop = index;
        let Some(index) = index else {
            return;
        };
        if self.arbiter.is_captured() {
            cdebug!(index, "Carousel::set_index_prop: queued until release");
            self.pending_index = Some(index);
        } else {
            self.settle_on(index);
        }
    }

    /// Imperatively settles on `index` (clamped), animating without a gesture session.
    ///
    /// Unlike `set_index_prop`, every call counts. While a gesture is captured the request is
    /// queued until release and `false` is returned; `true` means it was applied now.
    pub fn scroll_to_index(&mut self, index: usize) -> bool {
        if self.options.count == 0 {
            return false;
        }
        if self.arbiter.is_captured() {
            cdebug!(index, "Carousel::scroll_to_index: queued until release");
            self.pending_index = Some(index);
            return false;
        }
        self.settle_on(index);
        true
    }

    /// Position update reported by the surface (animation frames, layout corrections, ...).
    pub fn on_scroll(&mut self, offset: f64) {
        self.apply_position(offset);
    }

    /// Emits a render descriptor for every item, in index order.
    pub fn for_each_item(&self, mut f: impl FnMut(CarouselItem<K>)) {
        let mapper = self.mapper();
        let progress = self.progress();
        for index in 0..self.options.count {
            f(CarouselItem {
                index,
                key: (self.options.get_item_key)(index),
                current_index: self.current_index,
                item_count: self.options.count,
                progress,
                layout: mapper.item_layout(index),
            });
        }
    }

    fn settle_on(&mut self, index: usize) {
        if self.options.count == 0 {
            return;
        }
        let mapper = self.mapper();
        let index = index.min(mapper.last_index());
        cdebug!(from = self.current_index, to = index, "Carousel::settle_on");
        self.current_index = index;
        self.surface.scroll_to_index(ScrollToIndex {
            index,
            layout: mapper.item_layout(index),
            view_offset: mapper.view_offset(index),
            animated: true,
        });
    }

    fn apply_position(&mut self, offset: f64) {
        self.progress.set_position(offset);
        self.check_end_reached();
    }

    fn check_end_reached(&mut self) {
        let Some(on_end_reached) = self.options.on_end_reached.clone() else {
            return;
        };
        if self.options.count == 0 {
            return;
        }
        let viewport = self.options.viewport_width;
        let content = self.mapper().content_length();
        let distance = content - (self.progress.position() + viewport);
        if distance < self.options.end_reached_threshold * viewport {
            if self.end_reached_for != Some(content) {
                self.end_reached_for = Some(content);
                cdebug!(distance, content, "Carousel: end reached");
                on_end_reached();
            }
        } else {
            self.end_reached_for = None;
        }
    }
}
