use crate::ItemLayout;

/// An animated (or immediate) scroll-to-index request.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToIndex {
    pub index: usize,
    /// Layout of `index`, so the surface does not need to measure it.
    pub layout: ItemLayout,
    /// Distance from the viewport start at which the item should come to rest.
    pub view_offset: f64,
    pub animated: bool,
}

impl ScrollToIndex {
    /// The scroll position this request lands on.
    pub fn target_offset(&self) -> f64 {
        self.layout.offset - self.view_offset
    }
}

/// The list surface that owns the real scroll position.
///
/// Animated calls are fire-and-forget: the carousel never waits for them, and the most recent
/// call must win over any animation still in flight.
pub trait ScrollSurface {
    fn scroll_to_offset(&mut self, offset: f64, animated: bool);
    fn scroll_to_index(&mut self, request: ScrollToIndex);
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for &mut T {
    fn scroll_to_offset(&mut self, offset: f64, animated: bool) {
        (**self).scroll_to_offset(offset, animated);
    }

    fn scroll_to_index(&mut self, request: ScrollToIndex) {
        (**self).scroll_to_index(request);
    }
}

/// The ambient scroll container the carousel sits in.
pub trait ParentScroll {
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
}

impl<T: ParentScroll + ?Sized> ParentScroll for &mut T {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn enable(&mut self) {
        (**self).enable();
    }

    fn disable(&mut self) {
        (**self).disable();
    }
}

/// A parent that always reports itself enabled and ignores toggles.
///
/// Use this when the carousel is not nested in another scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoParentScroll;

impl ParentScroll for NoParentScroll {
    fn is_enabled(&self) -> bool {
        true
    }

    fn enable(&mut self) {}

    fn disable(&mut self) {}
}
