use crate::ItemLayout;

/// Boundary-compensation policy used by drag and snap math.
///
/// The defaults are empirical: they keep the active item visually centered given asymmetric
/// padding, except at the terminal item, which has no right-hand neighbor to balance against.
/// Changing any of them changes where gestures settle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compensation {
    /// Fraction of the item width applied at the last index.
    pub terminal_fraction: f64,
    /// Fraction of the item width applied at every other index.
    pub inner_fraction: f64,
    /// Per-index pixel nudge (`index * nudge_step + nudge_base`).
    pub nudge_step: f64,
    pub nudge_base: f64,
    /// Multiplier applied to the raw drag distance.
    pub drag_scale: f64,
}

impl Compensation {
    pub const DEFAULT: Self = Self {
        terminal_fraction: 0.333,
        inner_fraction: 0.0666,
        nudge_step: 10.0,
        nudge_base: 5.0,
        drag_scale: 1.5,
    };

    /// No compensation: base offsets are exactly `index * item_width`, drag is 1:1.
    pub const NONE: Self = Self {
        terminal_fraction: 0.0,
        inner_fraction: 0.0,
        nudge_step: 0.0,
        nudge_base: 0.0,
        drag_scale: 1.0,
    };

    pub fn nudge(&self, index: usize) -> f64 {
        index as f64 * self.nudge_step + self.nudge_base
    }
}

impl Default for Compensation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pure arithmetic between discrete indexes and continuous pixel offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetMapper {
    pub count: usize,
    pub item_width: f64,
    pub content_offset: f64,
    pub compensation: Compensation,
}

impl OffsetMapper {
    pub fn new(count: usize, item_width: f64, content_offset: f64) -> Self {
        Self {
            count,
            item_width,
            content_offset,
            compensation: Compensation::DEFAULT,
        }
    }

    pub fn with_compensation(mut self, compensation: Compensation) -> Self {
        self.compensation = compensation;
        self
    }

    /// Layout offset of `index`: `item_width * index + content_offset`.
    pub fn index_to_offset(&self, index: usize) -> f64 {
        self.item_width * index as f64 + self.content_offset
    }

    pub fn item_layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            offset: self.index_to_offset(index),
            length: self.item_width,
            index,
        }
    }

    /// Total scrollable length, including the symmetric content padding.
    pub fn content_length(&self) -> f64 {
        self.item_width * self.count as f64 + self.content_offset * 2.0
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        self.count > 0 && index == self.count - 1
    }

    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    /// Base offset of `index` while a drag is live.
    pub fn drag_base_offset(&self, index: usize) -> f64 {
        let c = &self.compensation;
        let w = self.item_width;
        let start = index as f64 * w;
        if self.is_terminal(index) {
            start + c.nudge(index) - w * c.terminal_fraction
        } else {
            start - w * c.inner_fraction + c.nudge(index)
        }
    }

    /// Base offset of `index` measured from its rest position.
    ///
    /// Mirrors [`Self::drag_base_offset`] with the signs of both corrections flipped.
    pub fn rest_base_offset(&self, index: usize) -> f64 {
        let c = &self.compensation;
        let w = self.item_width;
        let start = index as f64 * w;
        if self.is_terminal(index) {
            start - w * c.terminal_fraction - c.nudge(index)
        } else {
            start + w * c.inner_fraction + c.nudge(index)
        }
    }

    /// Unclamped scroll position for a live drag of `dx` pixels away from `index`.
    pub fn drag_offset(&self, index: usize, dx: f64) -> f64 {
        self.drag_base_offset(index) - dx * self.compensation.drag_scale
    }

    /// View offset used when an index is imposed from outside.
    pub fn view_offset(&self, index: usize) -> f64 {
        let c = &self.compensation;
        let fraction = if self.is_terminal(index) {
            c.terminal_fraction
        } else {
            c.inner_fraction
        };
        self.content_offset + self.item_width * fraction - c.nudge(index)
    }

    /// View offset used when a gesture settles on `target` after starting at `origin`.
    ///
    /// The nudge follows `origin`, and the terminal case carries no content offset.
    pub fn settle_view_offset(&self, target: usize, origin: usize) -> f64 {
        let c = &self.compensation;
        if self.is_terminal(target) {
            self.item_width * c.terminal_fraction - c.nudge(origin)
        } else {
            self.content_offset + self.item_width * c.inner_fraction - c.nudge(origin)
        }
    }
}
