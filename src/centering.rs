use crate::Curve;
use crate::easing::lerp;

/// The centering animation: an eased interpolation from `initial` to `target`.
///
/// Units are whatever the carousel mode uses (pixels or a normalized fraction).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Centering {
    pub(crate) initial: f32,
    pub(crate) target: f32,
    pub(crate) elapsed: f32,
    pub(crate) duration: f32,
}

impl Centering {
    pub(crate) fn new(initial: f32, target: f32, duration: f32) -> Self {
        Self {
            initial,
            target,
            elapsed: 0.0,
            duration,
        }
    }

    /// A finished animation resting at `position`.
    pub(crate) fn at_rest(position: f32) -> Self {
        Self {
            initial: position,
            target: position,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub(crate) fn sample(&self, curve: &Curve) -> f32 {
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        lerp(self.initial, self.target, curve.evaluate(t))
    }

    /// Advances by `dt` and returns the new value and whether the animation finished.
    ///
    /// The finishing tick samples the curve at `t = 1`.
    pub(crate) fn advance(&mut self, dt: f32, curve: &Curve) -> (f32, bool) {
        self.elapsed += dt;
        (self.sample(curve), self.is_done())
    }

    /// Moves both endpoints, used when the content underneath is recycled.
    pub(crate) fn shift(&mut self, by: f32) {
        self.initial += by;
        self.target += by;
    }
}
