/// Live scroll position and the progress scalar derived from it.
///
/// Progress is a plain quotient (`position / item_width`), recomputed on every read, so it can
/// never drift from the position it was derived from. A non-positive item width yields `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    position: f64,
    item_width: f64,
}

impl Progress {
    pub fn new(position: f64, item_width: f64) -> Self {
        Self {
            position,
            item_width,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    pub fn set_item_width(&mut self, item_width: f64) {
        self.item_width = item_width;
    }

    pub fn value(&self) -> f64 {
        if self.item_width > 0.0 {
            self.position / self.item_width
        } else {
            0.0
        }
    }
}
