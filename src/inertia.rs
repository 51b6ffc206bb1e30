use crate::easing::lerp;

/// Drag velocity tracking and post-release deceleration.
///
/// While dragging, `drag_velocity` holds the instantaneous frame velocity in units per second.
/// On release it is converted to units per tick (scaled by the last frame time) and clamped,
/// then decays linearly to zero over the deceleration window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Inertia {
    pub(crate) drag_velocity: f32,
    pub(crate) current_velocity: f32,
    pub(crate) timer: f32,
}

impl Inertia {
    pub(crate) fn reset(&mut self) {
        self.drag_velocity = 0.0;
        self.current_velocity = 0.0;
    }

    /// Records the position change of one frame.
    pub(crate) fn track(&mut self, delta: f32, dt: f32) {
        if dt > 0.0 {
            self.drag_velocity = delta / dt;
        }
    }

    /// Converts the tracked velocity into a per-tick release velocity and restarts the timer.
    pub(crate) fn release(&mut self, last_dt: f32, max_velocity: f32) {
        let per_tick = self.drag_velocity * last_dt;
        let per_tick = if per_tick.is_finite() { per_tick } else { 0.0 };
        self.drag_velocity = per_tick.clamp(-max_velocity, max_velocity);
        self.current_velocity = self.drag_velocity;
        self.timer = 0.0;
    }

    /// Advances the deceleration by `dt`.
    ///
    /// Returns the displacement to apply this tick and whether the motion has finished.
    pub(crate) fn step(&mut self, dt: f32, window: f32, min_velocity: f32) -> (f32, bool) {
        self.timer += dt;
        if self.timer >= window {
            self.current_velocity = 0.0;
            return (0.0, true);
        }

        self.current_velocity = lerp(self.drag_velocity, 0.0, self.timer / window);
        let displacement = self.current_velocity;
        if -min_velocity < self.current_velocity && self.current_velocity < min_velocity {
            self.timer = window;
            return (displacement, true);
        }
        (displacement, false)
    }

    pub(crate) fn stop(&mut self) {
        self.current_velocity = 0.0;
    }
}
