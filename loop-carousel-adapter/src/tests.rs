use crate::*;

use alloc::vec::Vec;
use loop_carousel::{CarouselHost, CarouselMode, ItemBounds, Phase, Point, PointerEvent};

/// A row of center-pivoted items laid out in draw order.
#[derive(Clone, Debug)]
struct StripHost {
    order: Vec<usize>,
    width: f32,
    gap: f32,
    viewport: f32,
    offset: f32,
    scroll_enabled: bool,
    normalized: f32,
}

impl StripHost {
    fn new(count: usize, viewport: f32) -> Self {
        Self {
            order: (0..count).collect(),
            width: 100.0,
            gap: 10.0,
            viewport,
            offset: 0.0,
            scroll_enabled: false,
            normalized: 0.0,
        }
    }

    fn slot_of(&self, index: usize) -> usize {
        self.order.iter().position(|&i| i == index).unwrap()
    }
}

impl CarouselHost for StripHost {
    fn viewport_width(&self) -> f32 {
        self.viewport
    }

    fn container_width(&self) -> f32 {
        self.order.len() as f32 * (self.width + self.gap)
    }

    fn item_count(&self) -> usize {
        self.order.len()
    }

    fn item_bounds(&self, index: usize) -> ItemBounds {
        let slot = self.slot_of(index) as f32;
        ItemBounds::centered(slot * (self.width + self.gap) + self.width * 0.5, self.width)
    }

    fn gap(&self) -> f32 {
        self.gap
    }

    fn screen_to_local(&self, screen: Point) -> Option<Point> {
        Some(screen)
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    fn normalized_position(&self) -> f32 {
        self.normalized
    }

    fn set_normalized_position(&mut self, position: f32) {
        self.normalized = position;
    }

    fn move_to_front(&mut self, index: usize) {
        let item = self.order.remove(self.slot_of(index));
        self.order.insert(0, item);
    }

    fn move_to_back(&mut self, index: usize) {
        let item = self.order.remove(self.slot_of(index));
        self.order.push(item);
    }
}

#[test]
fn frame_clock_yields_seconds_between_ticks() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.delta_seconds(1_000), 0.0);
    assert_eq!(clock.delta_seconds(1_250), 0.25);
    assert_eq!(clock.delta_seconds(1_200), 0.0);
    assert_eq!(clock.last_ms(), Some(1_250));
    assert_eq!(clock.delta_seconds(1_500), 0.25);

    clock.reset();
    assert_eq!(clock.delta_seconds(9_000), 0.0);
}

#[test]
fn bindings_map_ids_to_layout_order() {
    let bindings = ItemBindings::new(["cover", "poster", "cover", "still"]);
    assert_eq!(bindings.len(), 4);
    assert_eq!(bindings.index_of(&"cover"), Some(0));
    assert_eq!(bindings.index_of(&"poster"), Some(1));
    assert_eq!(bindings.index_of(&"still"), Some(3));
    assert_eq!(bindings.index_of(&"missing"), None);
    assert_eq!(bindings.key_for(2), Some(&"cover"));
    assert_eq!(bindings.key_for(4), None);

    let empty = ItemBindings::<u32>::new([]);
    assert!(empty.is_empty());
}

#[test]
fn controller_click_centers_bound_item() {
    let mut c = Controller::with_defaults(StripHost::new(5, 800.0));
    assert_eq!(c.carousel().mode(), CarouselMode::ManualDrag);
    let bindings = ItemBindings::new([10u32, 11, 12, 13, 14]);

    assert!(!c.click_item(&bindings, &99));
    assert!(c.click_item(&bindings, &14));
    assert_eq!(c.carousel().selected(), Some(4));
    assert!(!c.click(4));

    let mut now = 0u64;
    while now <= 600 {
        c.tick(now);
        now += 16;
    }
    assert_eq!(c.carousel().phase(), Phase::Idle);

    let host = c.host();
    let center = host.container_width() * 0.5;
    let x = host.offset + host.item_bounds(4).anchor_x;
    assert!((x - center).abs() < 1.0e-3, "item 4 at {x}");
}

#[test]
fn controller_flick_decelerates_then_rests() {
    let mut c = Controller::with_defaults(StripHost::new(5, 800.0));
    c.tick(0);
    assert!(c.pointer_down(PointerEvent::primary(300.0, 10.0)));
    assert!(c.pointer_move(PointerEvent::primary(320.0, 10.0)));
    assert_eq!(c.tick(16), Phase::Dragging);
    assert!(c.pointer_move(PointerEvent::primary(360.0, 10.0)));
    assert_eq!(c.tick(32), Phase::Dragging);
    assert!(c.pointer_up(PointerEvent::primary(360.0, 10.0)));

    // 40px over a 16ms frame, clamped to the per-tick maximum.
    assert_eq!(c.carousel().drag_velocity(), loop_carousel::MAX_VELOCITY);
    assert_eq!(c.carousel().phase(), Phase::Decelerating);

    let mut now = 32u64;
    let mut last = c.carousel().current_position();
    while c.tick(now + 16) == Phase::Decelerating {
        now += 16;
        assert!(now < 32 + 1_100, "deceleration did not settle");
        last = c.carousel().current_position();
    }
    assert_eq!(c.carousel().phase(), Phase::Idle);
    assert!(last.is_finite());
    assert_eq!(c.host().offset, c.carousel().current_position());
}

#[test]
fn controller_native_mode_reselect() {
    let mut c = Controller::with_defaults(StripHost::new(10, 800.0));
    assert_eq!(c.carousel().mode(), CarouselMode::NativeScroll);
    assert!(c.host().scroll_enabled);

    assert!(c.reselect_current());
    assert!(!c.host().scroll_enabled);
    c.tick(0);
    c.tick(250);
    c.tick(500);
    assert_eq!(c.host().normalized, 0.0);
    assert!(c.host().scroll_enabled);

    assert!(c.select(9));
    c.pause_clock();
    c.tick(10_000);
    c.tick(10_600);
    assert_eq!(c.host().normalized, 1.0);

    let (carousel, host) = c.into_parts();
    assert_eq!(carousel.selected(), Some(9));
    assert_eq!(host.order.len(), 10);
}
