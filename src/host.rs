use crate::{ItemBounds, Point};

/// The capabilities a UI toolkit must provide to drive a [`crate::Carousel`].
///
/// The carousel never stores the host. Every operation borrows it, so a host can be a thin
/// wrapper over widget handles, or a plain struct in tests.
///
/// Indexes are *nominal* item indexes (the order items were registered in), not draw slots.
pub trait CarouselHost {
    /// Width of the visible viewport rect.
    fn viewport_width(&self) -> f32;

    /// Width of the container that lays out the items.
    fn container_width(&self) -> f32;

    fn item_count(&self) -> usize;

    /// Current layout bounds of an item. Must reflect `move_to_front`/`move_to_back` once the
    /// host has laid out again (immediately, for [`crate::RecyclePolicy::UntilSettled`]).
    fn item_bounds(&self, index: usize) -> ItemBounds;

    /// Uniform spacing between items.
    fn gap(&self) -> f32;

    /// Converts a screen point to viewport-local coordinates.
    ///
    /// Returns `None` when the point cannot be mapped (e.g. degenerate transforms).
    fn screen_to_local(&self, screen: Point) -> Option<Point>;

    /// Applies the manual-mode horizontal offset to the container.
    fn set_offset(&mut self, offset: f32);

    fn set_scroll_enabled(&mut self, enabled: bool);

    /// The native scroll container's horizontal position in `[0, 1]`.
    fn normalized_position(&self) -> f32;

    fn set_normalized_position(&mut self, position: f32);

    /// Moves an item to the front of the draw order (it becomes the leftmost).
    fn move_to_front(&mut self, index: usize);

    /// Moves an item to the back of the draw order (it becomes the rightmost).
    fn move_to_back(&mut self, index: usize);
}
