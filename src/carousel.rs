use crate::centering::Centering;
use crate::inertia::Inertia;
use crate::{
    CarouselHost, CarouselMode, CarouselOptions, CarouselSnapshot, Edge, Phase, Point,
    PointerEvent, RecyclePolicy, RingIndices,
};

/// Upper bound on wraparounds applied in one tick under [`RecyclePolicy::UntilSettled`].
const MAX_RECYCLE_PASSES: usize = 64;

/// A headless looping carousel.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; every call borrows a [`CarouselHost`].
/// - Your adapter drives it with `tick(dt)` once per frame plus pointer and click events.
///
/// In [`CarouselMode::ManualDrag`] the carousel owns the horizontal offset and keeps the row
/// looping by moving off-screen items to the opposite edge. In [`CarouselMode::NativeScroll`] the
/// host's scroll container owns the position and the carousel only animates selections.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    mode: CarouselMode,
    phase: Phase,
    ring: RingIndices,
    item_width: f32,
    gap: f32,

    current_position: f32,
    previous_position: f32,
    last_drag_point: Point,
    last_dt: f32,
    inertia: Inertia,
    centering: Centering,

    selected_index: usize,
    selected: Option<usize>,
}

impl Carousel {
    /// Measures the host and picks the positioning mode.
    ///
    /// Item width is taken from the first item; all items are assumed to share it. Native
    /// scrolling is enabled on the host when the content is at least as wide as the viewport.
    pub fn new(host: &mut impl CarouselHost, options: CarouselOptions) -> Self {
        let options = options.sanitized();
        let count = host.item_count();
        let item_width = if count > 0 {
            host.item_bounds(0).width()
        } else {
            0.0
        };
        let gap = host.gap();
        let content_width = count as f32 * (item_width + gap);
        let mode = if count > 0 && content_width >= host.viewport_width() {
            CarouselMode::NativeScroll
        } else {
            CarouselMode::ManualDrag
        };

        // With an even count there is no middle item, so shift by half an item to center a slot.
        let start = if count % 2 == 0 {
            item_width * 0.5
        } else {
            0.0
        };

        cdebug!(count, item_width, gap, content_width, ?mode, "Carousel::new");

        host.set_scroll_enabled(mode == CarouselMode::NativeScroll);
        if mode == CarouselMode::ManualDrag && count > 0 {
            host.set_offset(start);
        }

        Self {
            options,
            mode,
            phase: Phase::Idle,
            ring: RingIndices::new(count),
            item_width,
            gap,
            current_position: start,
            previous_position: start,
            last_drag_point: Point::default(),
            last_dt: 0.0,
            inertia: Inertia::default(),
            centering: Centering::at_rest(start),
            selected_index: 0,
            selected: None,
        }
    }

    pub fn with_defaults(host: &mut impl CarouselHost) -> Self {
        Self::new(host, CarouselOptions::default())
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn count(&self) -> usize {
        self.ring.count
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_centering(&self) -> bool {
        self.phase == Phase::Centering
    }

    /// `true` while a centering animation or a deceleration is running.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Centering | Phase::Decelerating)
    }

    pub fn indices(&self) -> RingIndices {
        self.ring
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// The manual-mode offset in pixels. Unused in native-scroll mode.
    pub fn current_position(&self) -> f32 {
        self.current_position
    }

    pub fn initial_position(&self) -> f32 {
        self.centering.initial
    }

    pub fn target_position(&self) -> f32 {
        self.centering.target
    }

    /// Units per second while dragging, units per tick after release.
    pub fn drag_velocity(&self) -> f32 {
        self.inertia.drag_velocity
    }

    pub fn current_velocity(&self) -> f32 {
        self.inertia.current_velocity
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            mode: self.mode,
            phase: self.phase,
            indices: self.ring,
            current_position: self.current_position,
            initial_position: self.centering.initial,
            target_position: self.centering.target,
            drag_velocity: self.inertia.drag_velocity,
            current_velocity: self.inertia.current_velocity,
            selected: self.selected,
        }
    }

    /// Advances the carousel by `dt` seconds. Call once per rendered frame.
    ///
    /// A non-finite or non-positive `dt` does not advance timers or sample velocity, but still
    /// runs the recycling checks in manual mode.
    pub fn tick(&mut self, host: &mut impl CarouselHost, dt: f32) {
        if self.ring.is_empty() {
            return;
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        if dt > 0.0 {
            self.last_dt = dt;
        }

        match self.mode {
            CarouselMode::NativeScroll => self.tick_native(host, dt),
            CarouselMode::ManualDrag => self.tick_manual(host, dt),
        }
    }

    fn tick_native(&mut self, host: &mut impl CarouselHost, dt: f32) {
        if self.phase != Phase::Centering || dt <= 0.0 {
            return;
        }
        let (position, done) = self.centering.advance(dt, &self.options.curve);
        host.set_normalized_position(position);
        if done {
            ctrace!(position, "centering finished (native)");
            self.phase = Phase::Idle;
            host.set_scroll_enabled(true);
        }
    }

    fn tick_manual(&mut self, host: &mut impl CarouselHost, dt: f32) {
        if dt > 0.0 {
            match self.phase {
                Phase::Centering => {
                    let (position, done) = self.centering.advance(dt, &self.options.curve);
                    self.current_position = position;
                    if done {
                        ctrace!(position, "centering finished");
                        self.phase = Phase::Idle;
                    }
                }
                Phase::Dragging => {
                    let delta = self.current_position - self.previous_position;
                    self.inertia.track(delta, dt);
                    self.previous_position = self.current_position;
                }
                Phase::Decelerating => {
                    let (displacement, done) = self.inertia.step(
                        dt,
                        self.options.deceleration_time,
                        self.options.min_velocity,
                    );
                    self.current_position += displacement;
                    if done {
                        ctrace!(position = self.current_position, "deceleration finished");
                        self.inertia.stop();
                        self.phase = Phase::Idle;
                    }
                }
                Phase::Idle => {}
            }
        }

        self.recycle(host);
        host.set_offset(self.current_position);
    }

    /// Applies wraparounds for items that have left the container.
    ///
    /// Returns the number of items moved.
    pub fn recycle(&mut self, host: &mut impl CarouselHost) -> usize {
        if self.mode != CarouselMode::ManualDrag
            || self.ring.is_empty()
            || !self.host_in_sync(&*host)
        {
            return 0;
        }
        let passes = match self.options.recycle_policy {
            RecyclePolicy::SinglePass => 1,
            RecyclePolicy::UntilSettled => MAX_RECYCLE_PASSES,
        };

        let mut moved = 0usize;
        for _ in 0..passes {
            let right = self.overflows(&*host, Edge::Right);
            if right {
                self.recycle_edge(host, Edge::Right);
                moved += 1;
            }
            let left = self.overflows(&*host, Edge::Left);
            if left {
                self.recycle_edge(host, Edge::Left);
                moved += 1;
            }
            if !right && !left {
                break;
            }
            if right && left {
                cwarn!(
                    container_width = host.container_width(),
                    item_width = self.item_width,
                    "both edges overflow in one pass; container too narrow to loop"
                );
                break;
            }
        }
        moved
    }

    /// Whether the item at `edge` is fully outside the container at the current offset.
    pub fn overflows(&self, host: &impl CarouselHost, edge: Edge) -> bool {
        if self.ring.is_empty() || !self.host_in_sync(host) {
            return false;
        }
        match edge {
            Edge::Right => {
                let bounds = host.item_bounds(self.ring.right_most);
                self.current_position + bounds.start() > host.container_width() - self.gap
            }
            Edge::Left => {
                let bounds = host.item_bounds(self.ring.left_most);
                self.current_position + bounds.end() < self.gap
            }
        }
    }

    fn recycle_edge(&mut self, host: &mut impl CarouselHost, edge: Edge) {
        let stride = self.item_width + self.gap;
        match edge {
            Edge::Right => {
                let index = self.ring.right_most;
                host.move_to_front(index);
                // Every other item moved one slot right; pull the container back to match.
                self.shift(-stride);
                self.ring.rotate_right_to_front();
                ctrace!(index, position = self.current_position, "recycled right -> front");
            }
            Edge::Left => {
                let index = self.ring.left_most;
                host.move_to_back(index);
                self.shift(stride);
                self.ring.rotate_left_to_back();
                ctrace!(index, position = self.current_position, "recycled left -> back");
            }
        }
        host.set_offset(self.current_position);
    }

    /// Checks that the host still lays out the items this carousel was built over.
    fn host_in_sync(&self, host: &impl CarouselHost) -> bool {
        let host_count = host.item_count();
        if host_count == self.ring.count {
            return true;
        }
        cwarn!(
            host_count,
            count = self.ring.count,
            "Carousel: host item count changed since initialization"
        );
        debug_assert!(
            host_count == self.ring.count,
            "Carousel: host item count changed since initialization (host={host_count}, carousel={})",
            self.ring.count
        );
        false
    }

    fn shift(&mut self, by: f32) {
        self.current_position += by;
        self.previous_position += by;
        self.centering.shift(by);
    }

    /// Starts a drag. Returns `false` when the event is ignored.
    ///
    /// Ignored in native-scroll mode, while centering, for non-primary buttons, and when the
    /// pointer cannot be mapped into the viewport.
    pub fn begin_drag(&mut self, host: &impl CarouselHost, event: PointerEvent) -> bool {
        if self.ring.is_empty()
            || self.mode != CarouselMode::ManualDrag
            || self.phase == Phase::Centering
            || !event.is_primary()
        {
            return false;
        }
        let Some(local) = host.screen_to_local(event.position) else {
            return false;
        };

        self.last_drag_point = local;
        self.previous_position = self.current_position;
        self.inertia.reset();
        self.phase = Phase::Dragging;
        ctrace!(x = local.x, position = self.current_position, "drag begin");
        true
    }

    /// Moves the content by the pointer's horizontal delta, 1:1.
    pub fn drag(&mut self, host: &impl CarouselHost, event: PointerEvent) -> bool {
        if self.mode != CarouselMode::ManualDrag
            || self.phase != Phase::Dragging
            || !event.is_primary()
        {
            return false;
        }
        let Some(local) = host.screen_to_local(event.position) else {
            return false;
        };

        let delta = local.x - self.last_drag_point.x;
        self.last_drag_point = local;
        self.current_position += delta;
        true
    }

    /// Releases the drag and starts decelerating with the last frame's velocity.
    pub fn end_drag(&mut self, event: PointerEvent) -> bool {
        if self.mode != CarouselMode::ManualDrag
            || self.phase != Phase::Dragging
            || !event.is_primary()
        {
            return false;
        }

        self.inertia.release(self.last_dt, self.options.max_velocity);
        self.phase = Phase::Decelerating;
        ctrace!(velocity = self.inertia.drag_velocity, "drag end");
        true
    }

    /// Selects and centers an item. `index` is clamped into range.
    ///
    /// Returns `false` (and changes nothing) when the carousel is empty, the host no longer has
    /// the item count the carousel was built over, or the item is already selected. A new selection replaces any running centering animation and ends a drag.
    pub fn select(&mut self, host: &mut impl CarouselHost, index: usize) -> bool {
        if self.ring.is_empty() || !self.host_in_sync(&*host) {
            return false;
        }
        let index = index.min(self.ring.count - 1);
        if self.selected == Some(index) {
            return false;
        }
        self.start_centering(host, index);
        true
    }

    /// Re-centers the stored selection, e.g. after the host changed its layout.
    ///
    /// Unlike [`Carousel::select`], this runs even though the item is already selected.
    pub fn reselect_current(&mut self, host: &mut impl CarouselHost) -> bool {
        if self.ring.is_empty() || !self.host_in_sync(&*host) {
            return false;
        }
        let index = self.selected_index.min(self.ring.count - 1);
        self.start_centering(host, index);
        true
    }

    /// Click entry point for item `index`.
    pub fn on_item_clicked(&mut self, host: &mut impl CarouselHost, index: usize) -> bool {
        self.select(host, index)
    }

    fn start_centering(&mut self, host: &mut impl CarouselHost, index: usize) {
        self.selected_index = index;
        self.selected = Some(index);

        let (initial, target) = match self.mode {
            CarouselMode::NativeScroll => {
                host.set_scroll_enabled(false);
                let target = if self.ring.count > 1 {
                    index as f32 / (self.ring.count - 1) as f32
                } else {
                    0.0
                };
                (host.normalized_position(), target)
            }
            CarouselMode::ManualDrag => {
                let anchor_x = host.item_bounds(index).anchor_x;
                (
                    self.current_position,
                    host.container_width() * 0.5 - anchor_x,
                )
            }
        };

        cdebug!(index, initial, target, mode = ?self.mode, "select");
        self.centering = Centering::new(initial, target, self.options.time_to_center);
        self.inertia.stop();
        self.phase = Phase::Centering;
    }
}
