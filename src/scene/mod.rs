pub(crate) mod ambient;
pub(crate) mod promo;
pub(crate) mod snapshot;
pub(crate) mod text;

use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{MotifError, MotifResult},
    scene::promo::{CtaScene, FeaturesScene, IntroScene, MagicScene, PromptScene, SpeedScene},
    scene::snapshot::VisualSnapshot,
};

/// Closed set of scene kinds; each maps `(local frame, fps)` to a [`VisualSnapshot`].
///
/// Evaluation is a pure function of its arguments. Local frames past a scene's nominal duration
/// (which happens while it is the outgoing side of a transition) are evaluated like any other
/// frame: values keep extrapolating instead of clipping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scene {
    /// Logo and title.
    Intro(IntroScene),
    /// Typed prompt and generate button.
    Prompt(PromptScene),
    /// Spinning ring.
    Magic(MagicScene),
    /// Counter.
    Speed(SpeedScene),
    /// Staggered feature pills.
    Features(FeaturesScene),
    /// Call to action.
    Cta(CtaScene),
}

impl Scene {
    /// Stable lowercase name, matching the serialized `kind` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Intro(_) => "intro",
            Self::Prompt(_) => "prompt",
            Self::Magic(_) => "magic",
            Self::Speed(_) => "speed",
            Self::Features(_) => "features",
            Self::Cta(_) => "cta",
        }
    }

    /// Snapshot of the scene at `local`.
    pub fn evaluate(&self, local: FrameIndex, fps: Fps) -> MotifResult<VisualSnapshot> {
        let f = local.0 as f64;
        let mut out = VisualSnapshot::new();
        match self {
            Self::Intro(s) => s.evaluate(f, fps, &mut out)?,
            Self::Prompt(s) => s.evaluate(f, fps, &mut out)?,
            Self::Magic(s) => s.evaluate(f, fps, &mut out)?,
            Self::Speed(s) => s.evaluate(f, fps, &mut out)?,
            Self::Features(s) => s.evaluate(f, fps, &mut out)?,
            Self::Cta(s) => s.evaluate(f, fps, &mut out)?,
        }
        Ok(out)
    }

    /// Check every parameter the scene's formulas read, so evaluation never yields NaN.
    pub fn validate(&self) -> MotifResult<()> {
        match self {
            Self::Intro(s) => s.validate(),
            Self::Prompt(s) => s.validate(),
            Self::Magic(s) => s.validate(),
            Self::Speed(s) => s.validate(),
            Self::Features(s) => s.validate(),
            Self::Cta(s) => s.validate(),
        }
    }
}

pub(crate) fn ensure_finite(what: &str, v: f64) -> MotifResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(MotifError::config(format!("{what} must be finite (got {v})")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
