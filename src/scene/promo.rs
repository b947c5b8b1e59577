//! The six scenes of the product promo.
//!
//! Every scene struct deserializes with `#[serde(default)]`, so `{ "kind": "intro" }` yields the
//! stock scene and individual fields can be overridden from JSON.

use crate::{
    animation::interpolate::{InterpolationSpec, interpolate},
    animation::spring::{Spring, SpringConfig, spring_value},
    foundation::core::{Fps, Rgba8, Vec2},
    foundation::error::{MotifError, MotifResult},
    scene::ambient::{FloatingOrbs, GradientBackdrop, Orb},
    scene::ensure_finite,
    scene::snapshot::VisualSnapshot,
    scene::text::{RevealStyle, TextReveal},
};

/// Brand colors.
pub struct Palette;

impl Palette {
    /// Near-black background.
    pub const BG: Rgba8 = Rgba8::rgb(0x0A, 0x0A, 0x0A);
    /// Primary accent.
    pub const PURPLE: Rgba8 = Rgba8::rgb(0xA8, 0x55, 0xF7);
    /// Secondary accent.
    pub const BLUE: Rgba8 = Rgba8::rgb(0x3B, 0x82, 0xF6);
    /// Text.
    pub const WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
    /// Muted text.
    pub const GRAY: Rgba8 = Rgba8::rgb(0x9C, 0xA3, 0xAF);
}

impl Default for FloatingOrbs {
    fn default() -> Self {
        let orb = |x, y, size, color: Rgba8, speed| Orb {
            anchor: Vec2::new(x, y),
            size,
            color: color.with_alpha(0x30),
            speed,
        };
        Self::new(vec![
            orb(0.2, 0.3, 200.0, Palette::PURPLE, 0.02),
            orb(0.8, 0.6, 150.0, Palette::BLUE, 0.015),
            orb(0.6, 0.2, 100.0, Palette::PURPLE, 0.025),
        ])
    }
}

fn dark_backdrop(mid: Rgba8, angle_deg: f64) -> GradientBackdrop {
    GradientBackdrop::new([Palette::BG, mid, Palette::BG], angle_deg)
}

/// Logo pops in on a spring while the title flips in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroScene {
    /// Background gradient.
    pub backdrop: GradientBackdrop,
    /// Drifting background orbs.
    pub orbs: FloatingOrbs,
    /// Logo scale spring.
    pub logo_spring: SpringConfig,
    /// Local frame to glow opacity.
    pub glow: InterpolationSpec,
    /// Glow tint.
    pub glow_color: Rgba8,
    /// Headline reveal.
    pub title: TextReveal,
    /// Tagline reveal.
    pub subtitle: TextReveal,
}

impl Default for IntroScene {
    fn default() -> Self {
        Self {
            backdrop: dark_backdrop(Rgba8::rgb(0x1A, 0x0A, 0x2E), 45.0).breathing(0.5),
            orbs: FloatingOrbs::default(),
            logo_spring: SpringConfig::new(12.0, 100.0),
            glow: InterpolationSpec::new([0.0, 20.0], [0.0, 0.8]).clamp_right(),
            glow_color: Palette::PURPLE.with_alpha(0x40),
            title: TextReveal::new("typeframes", RevealStyle::Flip),
            subtitle: TextReveal::new("Video Magic from Words", RevealStyle::Blur)
                .starting_at(25.0)
                .stagger(0.03),
        }
    }
}

impl IntroScene {
    /// Backdrop, orbs, springs, glow ramp and both reveals.
    pub fn validate(&self) -> MotifResult<()> {
        self.backdrop.validate()?;
        self.orbs.validate()?;
        self.logo_spring.validate()?;
        self.glow.validate()?;
        self.title.validate()?;
        self.subtitle.validate()
    }

    /// Writes backdrop, orb, `logo.*`, `glow.*`, `title.*` and `subtitle.*` keys.
    pub fn evaluate(&self, f: f64, fps: Fps, out: &mut VisualSnapshot) -> MotifResult<()> {
        self.backdrop.evaluate(f, out);
        self.orbs.evaluate(f, out);
        out.set_scalar("logo.scale", spring_value(f, fps, &self.logo_spring)?);
        out.set_scalar("glow.opacity", interpolate(f, &self.glow)?);
        out.set_color("glow.color", self.glow_color);
        self.title.evaluate("title", f, fps, out)?;
        self.subtitle.evaluate("subtitle", f, fps, out)
    }
}

/// A prompt is typed into a box, then the generate button springs in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PromptScene {
    /// Background gradient.
    pub backdrop: GradientBackdrop,
    /// Drifting background orbs.
    pub orbs: FloatingOrbs,
    /// Headline reveal.
    pub title: TextReveal,
    /// Prompt box scale spring.
    pub box_spring: SpringConfig,
    /// Text typed into the box.
    pub prompt: String,
    /// Frames spent per typed character.
    pub frames_per_char: f64,
    /// Cursor is visible for this many frames, then hidden for as many.
    pub cursor_blink_frames: u64,
    /// Local frame at which the button is released.
    pub button_delay_frames: f64,
    /// Button scale spring.
    pub button_spring: SpringConfig,
}

impl Default for PromptScene {
    fn default() -> Self {
        Self {
            backdrop: dark_backdrop(Rgba8::rgb(0x0F, 0x05, 0x20), 135.0),
            orbs: FloatingOrbs::default(),
            title: TextReveal::new("Just Type a Prompt", RevealStyle::Bounce),
            box_spring: SpringConfig::new(15.0, 80.0),
            prompt: "Create a stunning product demo video...".to_owned(),
            frames_per_char: 1.5,
            cursor_blink_frames: 15,
            button_delay_frames: 30.0,
            button_spring: SpringConfig::new(12.0, 100.0),
        }
    }
}

impl PromptScene {
    /// Also requires a positive `frames_per_char`.
    pub fn validate(&self) -> MotifResult<()> {
        self.backdrop.validate()?;
        self.orbs.validate()?;
        self.title.validate()?;
        self.box_spring.validate()?;
        self.button_spring.validate()?;
        ensure_finite("prompt button_delay_frames", self.button_delay_frames)?;
        if !self.frames_per_char.is_finite() || self.frames_per_char <= 0.0 {
            return Err(MotifError::config(format!(
                "prompt frames_per_char must be finite and > 0 (got {})",
                self.frames_per_char
            )));
        }
        Ok(())
    }

    /// Writes `prompt_box.*`, `prompt.*`, `cursor.visible` and `button.*` besides the background.
    pub fn evaluate(&self, f: f64, fps: Fps, out: &mut VisualSnapshot) -> MotifResult<()> {
        self.backdrop.evaluate(f, out);
        self.orbs.evaluate(f, out);
        self.title.evaluate("title", f, fps, out)?;

        let total = self.prompt.chars().count() as f64;
        let typed = (f / self.frames_per_char).floor().clamp(0.0, total);
        out.set_scalar("prompt_box.scale", spring_value(f, fps, &self.box_spring)?);
        out.set_scalar("prompt.total_chars", total);
        out.set_scalar("prompt.typed_chars", typed);

        let blink = self.cursor_blink_frames.max(1) as f64;
        out.set_flag("cursor.visible", (f / blink).floor() % 2.0 == 0.0);

        let button = Spring::new(self.button_spring).delay(self.button_delay_frames);
        out.set_scalar("button.scale", button.sample(f, fps)?);
        out.set_flag("button.visible", f > self.button_delay_frames);
        Ok(())
    }
}

/// A spinning, pulsing ring with wave text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MagicScene {
    /// Background gradient.
    pub backdrop: GradientBackdrop,
    /// Ring stroke color.
    pub ring_color: Rgba8,
    /// Local frame to ring rotation in degrees (keeps turning past its range).
    pub rotation: InterpolationSpec,
    /// `sin(frame · pulse_rate)` to ring scale.
    pub pulse: InterpolationSpec,
    /// Radians per frame fed to the pulse.
    pub pulse_rate: f64,
    /// Caption reveal.
    pub caption: TextReveal,
}

impl Default for MagicScene {
    fn default() -> Self {
        Self {
            backdrop: GradientBackdrop::new(
                [
                    Palette::PURPLE.with_alpha(0x40),
                    Palette::BG,
                    Palette::BLUE.with_alpha(0x40),
                ],
                0.0,
            ),
            ring_color: Palette::PURPLE,
            rotation: InterpolationSpec::new([0.0, 60.0], [0.0, 360.0]),
            pulse: InterpolationSpec::new([-1.0, 1.0], [0.9, 1.1]),
            pulse_rate: 0.3,
            caption: TextReveal::new("AI Creating...", RevealStyle::Wave { amplitude: 15.0 }),
        }
    }
}

impl MagicScene {
    /// Ramps, pulse rate and caption.
    pub fn validate(&self) -> MotifResult<()> {
        self.backdrop.validate()?;
        self.rotation.validate()?;
        self.pulse.validate()?;
        ensure_finite("magic pulse_rate", self.pulse_rate)?;
        self.caption.validate()
    }

    /// Writes `ring.*` and `caption.*`; the backdrop turns with the ring.
    pub fn evaluate(&self, f: f64, fps: Fps, out: &mut VisualSnapshot) -> MotifResult<()> {
        let rotation = interpolate(f, &self.rotation)?;
        self.backdrop.evaluate_with_angle(rotation, f, out);
        out.set_scalar("ring.rotation_deg", rotation);
        out.set_scalar(
            "ring.scale",
            interpolate((f * self.pulse_rate).sin(), &self.pulse)?,
        );
        out.set_color("ring.color", self.ring_color);
        self.caption.evaluate("caption", f, fps, out)
    }
}

/// A counter races up to the headline number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpeedScene {
    /// Background gradient.
    pub backdrop: GradientBackdrop,
    /// Drifting background orbs.
    pub orbs: FloatingOrbs,
    /// Counter increment per frame.
    pub counter_per_frame: f64,
    /// Value the counter stops at.
    pub counter_max: f64,
    /// Counter scale spring.
    pub spring: SpringConfig,
    /// Caption reveal.
    pub caption: TextReveal,
}

impl Default for SpeedScene {
    fn default() -> Self {
        Self {
            backdrop: dark_backdrop(Rgba8::rgb(0x0A, 0x16, 0x28), 90.0),
            orbs: FloatingOrbs::default(),
            counter_per_frame: 2.0,
            counter_max: 60.0,
            spring: SpringConfig::new(10.0, 100.0),
            caption: TextReveal::new("From prompt to video", RevealStyle::Blur).starting_at(15.0),
        }
    }
}

impl SpeedScene {
    /// Counter rate and cap must be finite.
    pub fn validate(&self) -> MotifResult<()> {
        self.backdrop.validate()?;
        self.orbs.validate()?;
        ensure_finite("speed counter_per_frame", self.counter_per_frame)?;
        ensure_finite("speed counter_max", self.counter_max)?;
        self.spring.validate()?;
        self.caption.validate()
    }

    /// Writes `counter.*` and `caption.*` over the background.
    pub fn evaluate(&self, f: f64, fps: Fps, out: &mut VisualSnapshot) -> MotifResult<()> {
        self.backdrop.evaluate(f, out);
        self.orbs.evaluate(f, out);
        out.set_scalar(
            "counter.value",
            (f * self.counter_per_frame).floor().min(self.counter_max),
        );
        out.set_scalar("counter.scale", spring_value(f, fps, &self.spring)?);
        self.caption.evaluate("caption", f, fps, out)
    }
}

/// Feature pills spring in one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeaturesScene {
    /// Background gradient.
    pub backdrop: GradientBackdrop,
    /// Drifting background orbs.
    pub orbs: FloatingOrbs,
    /// Pill labels, in order.
    pub features: Vec<String>,
    /// Frames between consecutive pills.
    pub stagger_frames: f64,
    /// Spring each pill pops in with.
    pub spring: SpringConfig,
}

impl Default for FeaturesScene {
    fn default() -> Self {
        Self {
            backdrop: dark_backdrop(Rgba8::rgb(0x15, 0x0A, 0x20), 180.0),
            orbs: FloatingOrbs::default(),
            features: ["AI-Powered", "No Editing Skills", "Instant Export"]
                .map(str::to_owned)
                .to_vec(),
            stagger_frames: 12.0,
            spring: SpringConfig::new(12.0, 100.0),
        }
    }
}

impl FeaturesScene {
    /// Stagger and spring.
    pub fn validate(&self) -> MotifResult<()> {
        self.backdrop.validate()?;
        self.orbs.validate()?;
        ensure_finite("features stagger_frames", self.stagger_frames)?;
        self.spring.validate()
    }

    /// Writes `feature.count` and `feature.<i>.*` per pill.
    pub fn evaluate(&self, f: f64, fps: Fps, out: &mut VisualSnapshot) -> MotifResult<()> {
        self.backdrop.evaluate(f, out);
        self.orbs.evaluate(f, out);
        out.set_scalar("feature.count", self.features.len() as f64);
        for i in 0..self.features.len() {
            let delay = i as f64 * self.stagger_frames;
            let pop = Spring::new(self.spring).delay(delay);
            out.set_scalar(format!("feature.{i}.scale"), pop.sample(f, fps)?);
            out.set_flag(format!("feature.{i}.visible"), f > delay);
        }
        Ok(())
    }
}

/// Closing call to action with a pulsing glow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CtaScene {
    /// Background gradient.
    pub backdrop: GradientBackdrop,
    /// Headline block scale spring.
    pub spring: SpringConfig,
    /// `sin(frame · glow_rate)` to glow opacity.
    pub glow: InterpolationSpec,
    /// Radians per frame fed to the glow.
    pub glow_rate: f64,
    /// Glow tint.
    pub glow_color: Rgba8,
    /// Headline reveal.
    pub title: TextReveal,
    /// Link reveal.
    pub url: TextReveal,
}

impl Default for CtaScene {
    fn default() -> Self {
        Self {
            backdrop: GradientBackdrop::new(
                [
                    Palette::PURPLE.with_alpha(0x30),
                    Palette::BG,
                    Palette::BLUE.with_alpha(0x30),
                ],
                135.0,
            )
            .breathing(0.8),
            spring: SpringConfig::new(10.0, 80.0),
            glow: InterpolationSpec::new([-1.0, 1.0], [0.5, 1.0]),
            glow_rate: 0.2,
            glow_color: Palette::PURPLE.with_alpha(0x50),
            title: TextReveal::new("Try It Free", RevealStyle::Bounce),
            url: TextReveal::new("typeframes.com", RevealStyle::Blur).starting_at(20.0),
        }
    }
}

impl CtaScene {
    /// Springs, glow ramp and rate, and both reveals.
    pub fn validate(&self) -> MotifResult<()> {
        self.backdrop.validate()?;
        self.spring.validate()?;
        self.glow.validate()?;
        ensure_finite("cta glow_rate", self.glow_rate)?;
        self.title.validate()?;
        self.url.validate()
    }

    /// Writes `cta.scale`, `glow.*`, `title.*` and `url.*`.
    pub fn evaluate(&self, f: f64, fps: Fps, out: &mut VisualSnapshot) -> MotifResult<()> {
        self.backdrop.evaluate(f, out);
        out.set_scalar("cta.scale", spring_value(f, fps, &self.spring)?);
        out.set_scalar(
            "glow.opacity",
            interpolate((f * self.glow_rate).sin(), &self.glow)?,
        );
        out.set_color("glow.color", self.glow_color);
        self.title.evaluate("title", f, fps, out)?;
        self.url.evaluate("url", f, fps, out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/promo.rs"]
mod tests;
