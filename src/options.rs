use crate::{Curve, Easing, RecyclePolicy};

/// Release velocity clamp, in units per tick.
pub const MAX_VELOCITY: f32 = 13.0;
/// Deceleration stops once the velocity magnitude drops below this, in units per tick.
pub const MIN_VELOCITY: f32 = 0.8;
/// Duration of the centering animation, in seconds.
pub const TIME_TO_CENTER: f32 = 0.5;
/// Length of the inertia window, in seconds.
pub const DECELERATION_TIME: f32 = 1.0;

const MIN_DURATION: f32 = 1.0e-3;

/// Configuration for [`crate::Carousel`].
///
/// Layout values (item width, gap, viewport) are not configured here: they are measured from the
/// host once, at initialization.
#[derive(Clone, Debug)]
pub struct CarouselOptions {
    pub max_velocity: f32,
    pub min_velocity: f32,
    /// Centering duration in seconds.
    pub time_to_center: f32,
    /// Inertia window in seconds.
    pub deceleration_time: f32,
    /// Easing applied to the centering animation.
    pub curve: Curve,
    pub recycle_policy: RecyclePolicy,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            max_velocity: MAX_VELOCITY,
            min_velocity: MIN_VELOCITY,
            time_to_center: TIME_TO_CENTER,
            deceleration_time: DECELERATION_TIME,
            curve: Curve::Easing(Easing::SmoothStep),
            recycle_policy: RecyclePolicy::UntilSettled,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f32) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    pub fn with_time_to_center(mut self, seconds: f32) -> Self {
        self.time_to_center = seconds;
        self
    }

    pub fn with_deceleration_time(mut self, seconds: f32) -> Self {
        self.deceleration_time = seconds;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.curve = Curve::Easing(easing);
        self
    }

    pub fn with_curve(mut self, curve: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        self.curve = Curve::custom(curve);
        self
    }

    pub fn with_recycle_policy(mut self, recycle_policy: RecyclePolicy) -> Self {
        self.recycle_policy = recycle_policy;
        self
    }

    /// Clamps values into ranges the state machine can run with.
    ///
    /// Durations get a small positive floor, velocity limits become non-negative, and
    /// `min_velocity` never exceeds `max_velocity`.
    pub(crate) fn sanitized(mut self) -> Self {
        self.time_to_center = positive_or(self.time_to_center, TIME_TO_CENTER).max(MIN_DURATION);
        self.deceleration_time =
            positive_or(self.deceleration_time, DECELERATION_TIME).max(MIN_DURATION);
        self.max_velocity = finite_or(self.max_velocity, MAX_VELOCITY).max(0.0);
        self.min_velocity = finite_or(self.min_velocity, MIN_VELOCITY)
            .max(0.0)
            .min(self.max_velocity);
        self
    }
}

fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v } else { fallback }
}

fn positive_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { fallback }
}
