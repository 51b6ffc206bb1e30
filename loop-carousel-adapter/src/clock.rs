/// Converts monotonic millisecond timestamps into the per-frame `dt` (seconds) that
/// [`loop_carousel::Carousel::tick`] expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the seconds elapsed since the previous call.
    ///
    /// The first call yields `0.0`. A timestamp older than the previous one yields `0.0` and is
    /// otherwise ignored.
    pub fn delta_seconds(&mut self, now_ms: u64) -> f32 {
        let Some(prev) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return 0.0;
        };
        self.last_ms = Some(prev.max(now_ms));
        now_ms.saturating_sub(prev) as f32 / 1000.0
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }

    /// Forgets the previous timestamp, e.g. after the widget was hidden for a while.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
