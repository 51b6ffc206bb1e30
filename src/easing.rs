use alloc::sync::Arc;

/// Built-in easing curves. Every curve maps `0 -> 0` and `1 -> 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
    EaseOutCubic,
}

impl Easing {
    /// Samples the curve. `t` is clamped into `[0, 1]`.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// A user supplied easing function (e.g. one baked from an editor curve).
pub type CurveFn = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// The easing curve used by the centering animation.
#[derive(Clone)]
pub enum Curve {
    Easing(Easing),
    /// Called with `t` in `[0, 1]`. Should return `1.0` at `t = 1` for exact landing.
    Custom(CurveFn),
}

impl Curve {
    pub fn custom(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Self::Easing(e) => e.sample(t),
            Self::Custom(f) => f(t.clamp(0.0, 1.0)),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::Easing(Easing::default())
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Self::Easing(easing)
    }
}

impl core::fmt::Debug for Curve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Easing(e) => f.debug_tuple("Easing").field(e).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
