/// A monotonic remapping of linear time-progress.
///
/// Every curve maps `[0, 1]` onto `[0, 1]` with `apply(0) == 0` and
/// `apply(1) == 1`; the sequencer relies on these boundary properties to end
/// each keyframe exactly on its target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)³`: fast start, smooth arrival.
    #[default]
    EaseOutCubic,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}
