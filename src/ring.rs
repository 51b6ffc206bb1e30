/// Which nominal items currently occupy the leftmost, rightmost and center draw slots.
///
/// All three indexes rotate together, modulo the item count, whenever an item is recycled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingIndices {
    pub left_most: usize,
    pub right_most: usize,
    pub center: usize,
    pub count: usize,
}

impl RingIndices {
    /// Initial configuration for `count` items laid out in nominal order.
    pub fn new(count: usize) -> Self {
        Self {
            left_most: 0,
            right_most: count.saturating_sub(1),
            center: (count / 2).saturating_sub(1),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The rightmost item was moved to the front.
    pub(crate) fn rotate_right_to_front(&mut self) {
        if self.count == 0 {
            return;
        }
        self.left_most = self.right_most;
        self.right_most = self.prev(self.right_most);
        self.center = self.prev(self.center);
    }

    /// The leftmost item was moved to the back.
    pub(crate) fn rotate_left_to_back(&mut self) {
        if self.count == 0 {
            return;
        }
        self.right_most = self.left_most;
        self.left_most = self.next(self.left_most);
        self.center = self.next(self.center);
    }

    fn next(&self, i: usize) -> usize {
        if i + 1 < self.count { i + 1 } else { 0 }
    }

    fn prev(&self, i: usize) -> usize {
        if i > 0 { i - 1 } else { self.count - 1 }
    }
}
