/// How the carousel positions its content. Chosen once at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselMode {
    /// The host's scroll container owns the offset; positions are normalized `[0, 1]` fractions.
    NativeScroll,
    /// The carousel owns the offset (pixels) and recycles items to loop forever.
    ManualDrag,
}

/// The motion phase driven by [`crate::Carousel::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Decelerating,
    Centering,
}

/// Controls how many wraparounds a single tick may apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecyclePolicy {
    /// Evaluate each edge once per tick. Very fast flicks can leave a gap for a frame.
    SinglePass,
    /// Repeat the edge checks until no item overflows (bounded by the item count).
    ///
    /// The host must reflect a reorder in `item_bounds` immediately.
    #[default]
    UntilSettled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pointer drag event in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    pub const fn primary(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}

/// Geometry of one item inside the carousel container.
///
/// `x_min`/`x_max` are relative to `anchor_x`, so a center-pivoted item of width `w` reports
/// `x_min = -w / 2` and `x_max = w / 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBounds {
    pub anchor_x: f32,
    pub x_min: f32,
    pub x_max: f32,
}

impl ItemBounds {
    pub fn centered(anchor_x: f32, width: f32) -> Self {
        Self {
            anchor_x,
            x_min: -width * 0.5,
            x_max: width * 0.5,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Leading (left) edge in container space.
    pub fn start(&self) -> f32 {
        self.anchor_x + self.x_min
    }

    /// Trailing (right) edge in container space.
    pub fn end(&self) -> f32 {
        self.anchor_x + self.x_max
    }
}
