use loop_carousel::{Carousel, CarouselHost, CarouselOptions, Phase, PointerEvent};

use crate::{FrameClock, ItemBindings, ItemId};

/// A framework-neutral controller that owns a [`Carousel`] together with its host.
///
/// Adapters drive it by calling:
/// - `tick(now_ms)` each frame (the controller derives `dt` from timestamps)
/// - `pointer_down` / `pointer_move` / `pointer_up` for drag gestures
/// - `click` / `click_item` when an item is activated
#[derive(Clone, Debug)]
pub struct Controller<H> {
    carousel: Carousel,
    host: H,
    clock: FrameClock,
}

impl<H: CarouselHost> Controller<H> {
    pub fn new(mut host: H, options: CarouselOptions) -> Self {
        let carousel = Carousel::new(&mut host, options);
        Self {
            carousel,
            host,
            clock: FrameClock::new(),
        }
    }

    pub fn with_defaults(host: H) -> Self {
        Self::new(host, CarouselOptions::default())
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn into_parts(self) -> (Carousel, H) {
        (self.carousel, self.host)
    }

    /// Advances the carousel to `now_ms` and returns the resulting phase.
    pub fn tick(&mut self, now_ms: u64) -> Phase {
        let dt = self.clock.delta_seconds(now_ms);
        self.carousel.tick(&mut self.host, dt);
        self.carousel.phase()
    }

    /// Forgets the last frame timestamp so the next `tick` does not see a huge `dt`.
    pub fn pause_clock(&mut self) {
        self.clock.reset();
    }

    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        self.carousel.begin_drag(&self.host, event)
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        self.carousel.drag(&self.host, event)
    }

    pub fn pointer_up(&mut self, event: PointerEvent) -> bool {
        self.carousel.end_drag(event)
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.carousel.select(&mut self.host, index)
    }

    pub fn reselect_current(&mut self) -> bool {
        self.carousel.reselect_current(&mut self.host)
    }

    /// Click on the item at nominal `index`.
    pub fn click(&mut self, index: usize) -> bool {
        self.carousel.on_item_clicked(&mut self.host, index)
    }

    /// Click on the item registered as `key`. Unknown keys are ignored.
    pub fn click_item<K: ItemId + Clone>(&mut self, bindings: &ItemBindings<K>, key: &K) -> bool {
        let Some(index) = bindings.index_of(key) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "loop_carousel_adapter", "click on an unregistered item");
            return false;
        };
        self.click(index)
    }
}
