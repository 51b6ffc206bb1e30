use loop_carousel::{CarouselHost, ItemBounds, Point, PointerEvent};
use loop_carousel_adapter::{Controller, ItemBindings};

/// A stand-in for a UI toolkit's horizontal layout: items sit in draw order, center-pivoted.
struct Row {
    order: Vec<&'static str>,
    names: Vec<&'static str>,
    offset: f32,
}

impl Row {
    fn slot_of(&self, index: usize) -> usize {
        let name = self.names[index];
        self.order.iter().position(|&n| n == name).unwrap_or(0)
    }

    fn draw(&self) -> String {
        self.order.join(" ")
    }
}

impl CarouselHost for Row {
    fn viewport_width(&self) -> f32 {
        900.0
    }

    fn container_width(&self) -> f32 {
        self.names.len() as f32 * 130.0
    }

    fn item_count(&self) -> usize {
        self.names.len()
    }

    fn item_bounds(&self, index: usize) -> ItemBounds {
        ItemBounds::centered(self.slot_of(index) as f32 * 130.0 + 60.0, 120.0)
    }

    fn gap(&self) -> f32 {
        10.0
    }

    fn screen_to_local(&self, screen: Point) -> Option<Point> {
        Some(screen)
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn set_scroll_enabled(&mut self, _enabled: bool) {}

    fn normalized_position(&self) -> f32 {
        0.0
    }

    fn set_normalized_position(&mut self, _position: f32) {}

    fn move_to_front(&mut self, index: usize) {
        let name = self.order.remove(self.slot_of(index));
        self.order.insert(0, name);
    }

    fn move_to_back(&mut self, index: usize) {
        let name = self.order.remove(self.slot_of(index));
        self.order.push(name);
    }
}

fn main() {
    // Example: an adapter driving a looping carousel from a frame loop.
    //
    // An adapter would:
    // - forward pointer events and clicks
    // - call tick(now_ms) every frame
    // - draw items in the host's current order at the host's offset
    let names = vec!["a", "b", "c", "d", "e", "f"];
    let bindings = ItemBindings::new(names.iter().copied());
    let mut c = Controller::with_defaults(Row {
        order: names.clone(),
        names,
        offset: 0.0,
    });
    println!("mode={:?} order=[{}]", c.carousel().mode(), c.host().draw());

    let mut now_ms = 0u64;
    c.tick(now_ms);

    // A fast flick to the right.
    c.pointer_down(PointerEvent::primary(200.0, 40.0));
    for x in [260.0, 340.0, 430.0] {
        now_ms += 16;
        c.pointer_move(PointerEvent::primary(x, 40.0));
        c.tick(now_ms);
    }
    c.pointer_up(PointerEvent::primary(430.0, 40.0));

    let mut frame = 0u64;
    while c.carousel().is_animating() {
        now_ms += 16;
        frame += 1;
        c.tick(now_ms);
        if frame % 10 == 0 {
            println!(
                "t={now_ms} offset={:.1} v={:.2} order=[{}]",
                c.host().offset,
                c.carousel().current_velocity(),
                c.host().draw()
            );
        }
    }

    // Clicking "b" centers it.
    c.click_item(&bindings, &"b");
    while c.carousel().is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }

    println!(
        "done: selected={:?} offset={:.1} order=[{}]",
        c.carousel().selected(),
        c.host().offset,
        c.host().draw()
    );
}
