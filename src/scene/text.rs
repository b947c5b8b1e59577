use crate::{
    animation::spring::{Spring, SpringConfig},
    foundation::core::Fps,
    foundation::error::{MotifError, MotifResult},
    scene::{ensure_finite, snapshot::VisualSnapshot},
};

/// Per-character reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum RevealStyle {
    /// Characters rotate up from 90 degrees around the x axis.
    Flip,
    /// Characters drop in and settle with the spring's overshoot.
    Bounce,
    /// Characters sharpen from a blur.
    Blur,
    /// Characters ride a continuous sine wave.
    Wave {
        /// Peak vertical offset in pixels.
        amplitude: f64,
    },
}

const FLIP_ANGLE_DEG: f64 = 90.0;
const BOUNCE_DROP_PX: f64 = 20.0;
const BLUR_MAX_PX: f64 = 10.0;

fn default_stagger_secs() -> f64 {
    0.05
}

fn reveal_spring() -> SpringConfig {
    SpringConfig::new(12.0, 200.0)
}

/// A line of text revealed character by character.
///
/// The text itself is handed to the renderer untouched; only per-character animation values
/// end up in the snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextReveal {
    /// Text to reveal.
    pub text: String,
    /// Reveal animation.
    #[serde(flatten)]
    pub style: RevealStyle,
    /// Local frame at which the first character starts.
    #[serde(default)]
    pub start_frame: f64,
    /// Delay between consecutive characters.
    #[serde(default = "default_stagger_secs")]
    pub stagger_secs: f64,
    /// Spring driving each character.
    #[serde(default = "reveal_spring")]
    pub spring: SpringConfig,
}

impl TextReveal {
    /// Reveal starting at frame 0 with the default stagger and spring.
    pub fn new(text: impl Into<String>, style: RevealStyle) -> Self {
        Self {
            text: text.into(),
            style,
            start_frame: 0.0,
            stagger_secs: default_stagger_secs(),
            spring: reveal_spring(),
        }
    }

    /// Delay the first character to local `frame`.
    pub fn starting_at(mut self, frame: f64) -> Self {
        self.start_frame = frame;
        self
    }

    /// Seconds between consecutive characters.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger_secs = secs;
        self
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Local frame at which character `i` starts moving.
    pub fn char_delay(&self, i: usize, fps: Fps) -> f64 {
        self.start_frame + fps.secs_to_frames(i as f64 * self.stagger_secs)
    }

    /// Rejects non-finite timing, a negative stagger, an invalid spring or a non-finite wave.
    pub fn validate(&self) -> MotifResult<()> {
        ensure_finite("text start_frame", self.start_frame)?;
        ensure_finite("text stagger_secs", self.stagger_secs)?;
        if self.stagger_secs < 0.0 {
            return Err(MotifError::config(format!(
                "text stagger_secs must be >= 0 (got {})",
                self.stagger_secs
            )));
        }
        self.spring.validate()?;
        if let RevealStyle::Wave { amplitude } = self.style {
            ensure_finite("wave amplitude", amplitude)?;
        }
        Ok(())
    }

    /// Writes `<prefix>.char_count` and `<prefix>.char.<ii>.*` keys.
    pub fn evaluate(
        &self,
        prefix: &str,
        frame: f64,
        fps: Fps,
        out: &mut VisualSnapshot,
    ) -> MotifResult<()> {
        let n = self.char_count();
        out.set_scalar(format!("{prefix}.char_count"), n as f64);

        for i in 0..n {
            let key = |field: &str| format!("{prefix}.char.{i:02}.{field}");

            if let RevealStyle::Wave { amplitude } = self.style {
                let y = (frame * 0.2 + i as f64 * 0.5).sin() * amplitude;
                out.set_scalar(key("offset_y"), y);
                out.set_scalar(key("opacity"), 1.0);
                continue;
            }

            let p = Spring::new(self.spring)
                .delay(self.char_delay(i, fps))
                .sample(frame, fps)?;
            let settled = p.clamp(0.0, 1.0);
            out.set_scalar(key("opacity"), settled);
            match self.style {
                RevealStyle::Flip => {
                    out.set_scalar(key("rotate_x_deg"), FLIP_ANGLE_DEG * (1.0 - p));
                }
                RevealStyle::Bounce => {
                    out.set_scalar(key("offset_y"), -BOUNCE_DROP_PX * (1.0 - p));
                    out.set_scalar(key("scale"), p);
                }
                RevealStyle::Blur => {
                    out.set_scalar(key("blur_px"), BLUR_MAX_PX * (1.0 - settled));
                }
                RevealStyle::Wave { .. } => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/text.rs"]
mod tests;
