/// A snapshot of an in-progress touch, as delivered by the input system.
///
/// `dx`/`dy` are the accumulated distance since the touch started, `vx` is the current
/// horizontal velocity in pixels per millisecond.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub dx: f64,
    pub dy: f64,
    pub vx: f64,
}

impl GestureState {
    pub fn new(dx: f64, dy: f64, vx: f64) -> Self {
        Self { dx, dy, vx }
    }
}

/// Position and size of an item along the carousel axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub offset: f64,
    pub length: f64,
    pub index: usize,
}

impl ItemLayout {
    pub fn end(&self) -> f64 {
        self.offset + self.length
    }
}

/// Which way a drag travels across the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Finger moves left (`dx <= 0`), revealing later items.
    Forward,
    /// Finger moves right (`dx > 0`), revealing earlier items.
    Backward,
}

impl SwipeDirection {
    pub fn from_dx(dx: f64) -> Self {
        if dx > 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Interaction phase of a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Settled,
    Dragging,
}

/// A lightweight, serializable snapshot of the carousel state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub current_index: usize,
    pub scroll_position: f64,
    pub phase: Phase,
}

/// Everything an adapter needs to render one item.
#[derive(Clone, Debug)]
pub struct CarouselItem<K> {
    pub index: usize,
    pub key: K,
    /// The settled index at render time.
    pub current_index: usize,
    pub item_count: usize,
    /// Live `scroll_position / item_width`.
    pub progress: f64,
    pub layout: ItemLayout,
}

impl<K> CarouselItem<K> {
    /// Signed distance of this item from the live progress, in items.
    ///
    /// `0.0` means the item sits exactly at the settled position; `-1.0` means one item to the
    /// left. Useful for interpolating per-item transforms.
    pub fn relative_progress(&self) -> f64 {
        self.index as f64 - self.progress
    }
}

pub type ItemKey = u64;
