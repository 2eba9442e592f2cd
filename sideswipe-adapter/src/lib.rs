//! Adapter utilities for the `sideswipe` crate.
//!
//! The `sideswipe` crate is UI-agnostic and focuses on gesture resolution and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based snap animation behind the `ScrollSurface` trait
//! - Pointer tracking (`dx`/`dy` from the press point, smoothed `vx`)
//! - A shared flag for the enclosing scroll container
//! - A `Controller` wiring all of the above around a `Carousel`
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod parent;
mod pointer;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use parent::SharedParentScroll;
pub use pointer::{DEFAULT_SMOOTHING, MAX_SAMPLE_GAP_MS, PointerTracker};
pub use surface::{DEFAULT_DURATION_MS, TweenSurface};
pub use tween::{Easing, Tween, TweenFrame};
