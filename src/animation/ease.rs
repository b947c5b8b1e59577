/// Easing curves mapping normalized progress `[0, 1]` onto `[0, 1]`.
///
/// Every curve is monotone non-decreasing with `apply(0) == 0` and `apply(1) == 1`, which makes
/// them valid transition timing curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// `t²`.
    InQuad,
    /// Mirror of [`Ease::InQuad`].
    OutQuad,
    /// Quadratic on both halves.
    InOutQuad,
    /// `t³`.
    InCubic,
    /// Mirror of [`Ease::InCubic`].
    OutCubic,
    /// Cubic on both halves.
    InOutCubic,
    /// Half a cosine period; gentler shoulders than the polynomial curves.
    InOutSine,
}

impl Ease {
    /// Apply the curve to `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
            Self::InOutSine => (1.0 - (std::f64::consts::PI * t).cos()) / 2.0,
        }
    }
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - ease_in(1.0 - t, power)
}

/// First half accelerates, second half is the point mirror of the first around `(0.5, 0.5)`.
fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        ease_in(2.0 * t, power) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t, power) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
