use crate::math::{abs, round_half_up};
use crate::{GestureState, OffsetMapper, SwipeDirection};

/// Resolves the index a released gesture settles on.
///
/// The resolver is pure: it reads the mapper's geometry and the release gesture and returns an
/// index in `0..count`. An empty collection is a caller bug; it is debug-asserted and resolves
/// to `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapResolver {
    pub mapper: OffsetMapper,
    /// Pixel distance the drag must cover before the index moves.
    pub threshold: f64,
    /// Whether release velocity may skip additional items.
    pub use_velocity: bool,
}

impl SnapResolver {
    pub fn new(mapper: OffsetMapper, threshold: f64, use_velocity: bool) -> Self {
        Self {
            mapper,
            threshold,
            use_velocity,
        }
    }

    /// Rounded index under the threshold-biased release offset, before any clamping.
    pub fn candidate_index(&self, current_index: usize, dx: f64) -> i64 {
        let m = &self.mapper;
        let resolved = m.rest_base_offset(current_index) - dx * m.compensation.drag_scale;
        let biased = match SwipeDirection::from_dx(dx) {
            SwipeDirection::Backward => resolved - self.threshold,
            SwipeDirection::Forward => resolved + self.threshold,
        };
        round_half_up(biased / m.item_width)
    }

    /// Extra items a release velocity (px/ms) may skip: `max(round(|vx|) - 1, 0)`.
    pub fn velocity_skip(vx: f64) -> i64 {
        (round_half_up(abs(vx)) - 1).max(0)
    }

    pub fn resolve(&self, current_index: usize, gesture: &GestureState) -> usize {
        let count = self.mapper.count;
        debug_assert!(count > 0, "SnapResolver: resolve called on an empty collection");
        if count == 0 {
            cwarn!("SnapResolver: empty collection");
            return 0;
        }
        let last = self.mapper.last_index();
        let current_index = current_index.min(last);
        if !(self.mapper.item_width > 0.0) {
            cwarn!(
                item_width = self.mapper.item_width,
                "SnapResolver: non-positive item width"
            );
            return current_index;
        }

        let candidate = self.candidate_index(current_index, gesture.dx);
        let skip = if self.use_velocity {
            Self::velocity_skip(gesture.vx)
        } else {
            0
        };
        // A drag never settles against its own direction, whatever the compensation does.
        let origin = current_index as i64;
        let target = match SwipeDirection::from_dx(gesture.dx) {
            SwipeDirection::Backward => candidate.saturating_sub(skip).min(origin),
            SwipeDirection::Forward => candidate.saturating_add(skip).max(origin),
        };
        let target = target.clamp(0, last as i64) as usize;
        ctrace!(
            current_index,
            dx = gesture.dx,
            vx = gesture.vx,
            candidate,
            skip,
            target,
            "SnapResolver::resolve"
        );
        target
    }
}
