//! A headless, gesture-driven horizontal carousel.
//!
//! The crate resolves drag gestures into discrete item indexes: it arbitrates touch ownership
//! against an ambient scroll container, converts drag deltas into a live scroll offset, picks
//! the index to settle on when the finger lifts, and exposes a continuous progress value
//! (`scroll_position / item_width`) so item visuals can follow the drag 1:1.
//!
//! For adapter-level utilities (tween-driven scrolling, pointer/velocity tracking), see the
//! `sideswipe-adapter` crate.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - touch events with accumulated `dx`/`dy` and horizontal velocity `vx`
//! - a [`ScrollSurface`] that owns the real scroll position
//! - optionally, a [`ParentScroll`] for the container the carousel is nested in
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod arbiter;
mod carousel;
mod mapper;
mod math;
mod options;
mod parent;
mod progress;
mod snap;
mod surface;
mod types;


pub use arbiter::{ArbiterState, GestureArbiter};
pub use carousel::Carousel;
pub use mapper::{Compensation, OffsetMapper};
pub use options::{
    CarouselOptions, DEFAULT_END_REACHED_THRESHOLD, DEFAULT_THRESHOLD_FRACTION, GesturePredicate,
    OnEndReachedCallback, OnIndexChangeCallback,
};
pub use parent::ParentScrollLock;
pub use progress::Progress;
pub use snap::SnapResolver;
pub use surface::{NoParentScroll, ParentScroll, ScrollSurface, ScrollToIndex};
pub use types::{
    CarouselItem, CarouselState, GestureState, ItemKey, ItemLayout, Phase, SwipeDirection,
};
