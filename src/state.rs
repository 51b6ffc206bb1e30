use crate::{CarouselMode, Phase, RingIndices};

/// A lightweight, serializable snapshot of the carousel's motion state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Position values are pixels in [`CarouselMode::ManualDrag`] and normalized fractions in
/// [`CarouselMode::NativeScroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub mode: CarouselMode,
    pub phase: Phase,
    pub indices: RingIndices,
    pub current_position: f32,
    pub initial_position: f32,
    pub target_position: f32,
    pub drag_velocity: f32,
    pub current_velocity: f32,
    pub selected: Option<usize>,
}
