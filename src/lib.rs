//! A headless infinite carousel engine.
//!
//! For adapter-level utilities (frame clock, click bindings, an owning controller), see the
//! `loop-carousel-adapter` crate.
//!
//! This crate implements the motion state machine behind a horizontally looping carousel:
//! item recycling (wraparound), drag tracking with inertial deceleration, and an eased centering
//! animation for programmatic selection. Content wide enough to need native scrolling is handed
//! to the host's scroll container instead, and only selections are animated.
//!
//! It is UI-agnostic. A TUI/GUI layer implements [`CarouselHost`] to provide:
//! - viewport and container widths, item bounds, spacing
//! - screen to local pointer conversion
//! - commands: set the container offset, toggle native scrolling, reorder items
//!
//! and drives [`Carousel::tick`] once per frame.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod centering;
mod easing;
mod host;
mod inertia;
mod options;
mod ring;
mod state;
mod types;


pub use carousel::Carousel;
pub use easing::{Curve, CurveFn, Easing};
pub use host::CarouselHost;
pub use options::{
    CarouselOptions, DECELERATION_TIME, MAX_VELOCITY, MIN_VELOCITY, TIME_TO_CENTER,
};
pub use ring::RingIndices;
pub use state::CarouselSnapshot;
pub use types::{
    CarouselMode, Edge, ItemBounds, Phase, Point, PointerButton, PointerEvent, RecyclePolicy,
};
