use alloc::sync::Arc;

use crate::math::abs;
use crate::{Compensation, GestureState, ItemKey, OffsetMapper, SnapResolver};

/// A capture or release policy evaluated against the live gesture.
///
/// Predicates must be pure and total; the carousel does not guard against panics inside them.
pub type GesturePredicate = Arc<dyn Fn(&GestureState) -> bool + Send + Sync>;

/// Fired after a gesture commits a new current index.
pub type OnIndexChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Fired when the viewport end comes within `end_reached_threshold` viewports of the content end.
pub type OnEndReachedCallback = Arc<dyn Fn() + Send + Sync>;

/// Fraction of the viewport width used as the default snap threshold.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.4;

/// Default `end_reached_threshold`, in viewport widths.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.9;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can tweak a few fields and call
/// `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions<K = ItemKey> {
    /// Number of items in the collection.
    pub count: usize,
    /// Width of the visible area.
    pub viewport_width: f64,
    /// Uniform width of every item.
    pub item_width: f64,
    /// Padding applied on both sides of the content.
    pub content_offset: f64,
    /// Drag distance (px) required to change the index on release.
    pub threshold: f64,
    /// Let release velocity skip extra items.
    pub use_velocity_for_index: bool,

    pub should_capture: GesturePredicate,
    pub should_release: GesturePredicate,
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    pub on_index_change: Option<OnIndexChangeCallback>,
    pub on_end_reached: Option<OnEndReachedCallback>,
    /// Distance from the content end, in viewport widths, at which `on_end_reached` fires.
    pub end_reached_threshold: f64,

    /// Index the carousel starts settled on (clamped into bounds).
    ///
    /// This is also the first value of the external index prop: `set_index_prop` with the same
    /// value is not a change, and replacing it via `Carousel::set_options` is one.
    pub initial_index: usize,

    pub compensation: Compensation,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            viewport_width: self.viewport_width,
            item_width: self.item_width,
            content_offset: self.content_offset,
            threshold: self.threshold,
            use_velocity_for_index: self.use_velocity_for_index,
            should_capture: Arc::clone(&self.should_capture),
            should_release: Arc::clone(&self.should_release),
            get_item_key: Arc::clone(&self.get_item_key),
            on_index_change: self.on_index_change.clone(),
            on_end_reached: self.on_end_reached.clone(),
            end_reached_threshold: self.end_reached_threshold,
            initial_index: self.initial_index,
            compensation: self.compensation,
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a collection keyed by index (`ItemKey = u64`).
    ///
    /// Items default to the full viewport width and the snap threshold to 40% of it.
    pub fn new(count: usize, viewport_width: f64) -> Self {
        Self::new_with_key(count, viewport_width, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_item_key(i)` should return a stable identity for the item at index `i`; adapters use
    /// it to recycle rendered items.
    pub fn new_with_key(
        count: usize,
        viewport_width: f64,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            viewport_width,
            item_width: viewport_width,
            content_offset: 0.0,
            threshold: viewport_width * DEFAULT_THRESHOLD_FRACTION,
            use_velocity_for_index: false,
            should_capture: Arc::new(|g: &GestureState| abs(g.dx) > 1.0),
            should_release: Arc::new(|_: &GestureState| false),
            get_item_key: Arc::new(get_item_key),
            on_index_change: None,
            on_end_reached: None,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            initial_index: 0,
            compensation: Compensation::DEFAULT,
        }
    }

    pub fn with_get_item_key<K2>(
        self,
        get_item_key: impl Fn(usize) -> K2 + Send + Sync + 'static,
    ) -> CarouselOptions<K2> {
        CarouselOptions {
            count: self.count,
            viewport_width: self.viewport_width,
            item_width: self.item_width,
            content_offset: self.content_offset,
            threshold: self.threshold,
            use_velocity_for_index: self.use_velocity_for_index,
            should_capture: self.should_capture,
            should_release: self.should_release,
            get_item_key: Arc::new(get_item_key),
            on_index_change: self.on_index_change,
            on_end_reached: self.on_end_reached,
            end_reached_threshold: self.end_reached_threshold,
            initial_index: self.initial_index,
            compensation: self.compensation,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_width(mut self, item_width: f64) -> Self {
        self.item_width = item_width;
        self
    }

    pub fn with_content_offset(mut self, content_offset: f64) -> Self {
        self.content_offset = content_offset;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_use_velocity_for_index(mut self, use_velocity_for_index: bool) -> Self {
        self.use_velocity_for_index = use_velocity_for_index;
        self
    }

    pub fn with_should_capture(
        mut self,
        should_capture: impl Fn(&GestureState) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_capture = Arc::new(should_capture);
        self
    }

    pub fn with_should_release(
        mut self,
        should_release: impl Fn(&GestureState) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_release = Arc::new(should_release);
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_end_reached_threshold(mut self, end_reached_threshold: f64) -> Self {
        self.end_reached_threshold = end_reached_threshold;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_compensation(mut self, compensation: Compensation) -> Self {
        self.compensation = compensation;
        self
    }

    pub fn mapper(&self) -> OffsetMapper {
        OffsetMapper::new(self.count, self.item_width, self.content_offset)
            .with_compensation(self.compensation)
    }

    pub fn snap_resolver(&self) -> SnapResolver {
        SnapResolver::new(self.mapper(), self.threshold, self.use_velocity_for_index)
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("viewport_width", &self.viewport_width)
            .field("item_width", &self.item_width)
            .field("content_offset", &self.content_offset)
            .field("threshold", &self.threshold)
            .field("use_velocity_for_index", &self.use_velocity_for_index)
            .field("on_index_change", &self.on_index_change.is_some())
            .field("on_end_reached", &self.on_end_reached.is_some())
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("initial_index", &self.initial_index)
            .field("compensation", &self.compensation)
            .finish_non_exhaustive()
    }
}
