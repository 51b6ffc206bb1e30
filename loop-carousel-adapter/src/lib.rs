//! Adapter utilities for the `loop-carousel` crate.
//!
//! The `loop-carousel` crate is UI-agnostic and focuses on the motion state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A frame clock turning timestamps into per-frame `dt`
//! - An item id to index table for click handling
//! - A controller owning the carousel together with its host
//!
//! This crate is intentionally framework-agnostic (no egui/bevy/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bindings;
mod clock;
mod controller;
mod key;

#[cfg(test)]
mod tests;

pub use bindings::ItemBindings;
pub use clock::FrameClock;
pub use controller::Controller;
pub use key::ItemId;
