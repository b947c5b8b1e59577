use crate::{
    foundation::core::Fps,
    foundation::error::{MotifError, MotifResult},
};

/// Deviation from the target below which a spring counts as settled.
pub const DEFAULT_REST_THRESHOLD: f64 = 0.005;

/// Damping ratios within this distance of 1 use the critically damped closed form.
const CRITICAL_EPSILON: f64 = 1e-6;

const MAX_SETTLE_FRAMES: u64 = 1_000_000;

/// Physical parameters of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c` (> 0).
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Spring constant `k` (> 0).
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Mass `m` (> 0).
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_damping() -> f64 {
    10.0
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            stiffness: default_stiffness(),
            mass: default_mass(),
        }
    }
}

/// Closed-form branch selected by the damping ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    /// `ζ < 1`: oscillates around the target with a decaying envelope.
    Under,
    /// `ζ == 1` (within a small tolerance): fastest approach without overshoot.
    Critical,
    /// `ζ > 1`: approaches the target monotonically.
    Over,
}

impl SpringConfig {
    /// Unit-mass config.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Replace the mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Every parameter must be finite and positive.
    pub fn validate(&self) -> MotifResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(MotifError::config(format!(
                    "spring {name} must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// `ζ = c / (2·sqrt(k·m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency `ω0 = sqrt(k/m)` in radians per second.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Closed form used by [`spring_value`].
    pub fn regime(&self) -> DampingRegime {
        let zeta = self.damping_ratio();
        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            DampingRegime::Critical
        } else if zeta < 1.0 {
            DampingRegime::Under
        } else {
            DampingRegime::Over
        }
    }
}

/// Unit step response of the spring (rest at 0, target 1) after `elapsed_frames` frames.
///
/// Negative elapsed frames return the pre-start rest value `0`.
pub fn spring_value(elapsed_frames: f64, fps: Fps, config: &SpringConfig) -> MotifResult<f64> {
    config.validate()?;
    if elapsed_frames.is_nan() {
        return Err(MotifError::domain("spring elapsed_frames must not be NaN"));
    }
    if elapsed_frames <= 0.0 {
        return Ok(0.0);
    }
    let t = fps.frames_to_secs(elapsed_frames);
    if t.is_infinite() {
        return Ok(1.0);
    }
    Ok(step_response(t, config))
}

fn step_response(t: f64, config: &SpringConfig) -> f64 {
    // x(0) = 0, v(0) = 0, target 1.
    let w0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    match config.regime() {
        DampingRegime::Critical => {
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        }
        DampingRegime::Under => {
            let root = (1.0 - zeta * zeta).sqrt();
            let wd = w0 * root;
            let e = (-zeta * w0 * t).exp();
            1.0 - e * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
        }
        DampingRegime::Over => {
            // Both roots are negative, so only decaying exponentials are evaluated.
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c1 = (zeta + z2) / (2.0 * z2);
            let c2 = (zeta - z2) / (2.0 * z2);
            1.0 - (c1 * (r1 * t).exp() - c2 * (r2 * t).exp())
        }
    }
}

/// Upper bound of `|1 - x(t)|` for all times `>= t`.
fn deviation_bound(t: f64, config: &SpringConfig) -> f64 {
    match config.regime() {
        DampingRegime::Under => {
            let zeta = config.damping_ratio();
            let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
            amplitude * (-zeta * config.natural_frequency() * t).exp()
        }
        // Monotone approach: the current deviation bounds every later one.
        DampingRegime::Critical | DampingRegime::Over => 1.0 - step_response(t, config),
    }
}

/// First whole frame after which the unit response stays within `threshold` of the target.
pub fn settle_frames(fps: Fps, config: &SpringConfig, threshold: f64) -> MotifResult<u64> {
    config.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(MotifError::domain("settle threshold must be finite and > 0"));
    }
    (0..=MAX_SETTLE_FRAMES)
        .find(|&f| deviation_bound(fps.frames_to_secs(f as f64), config) < threshold)
        .ok_or_else(|| {
            MotifError::config(format!(
                "spring does not settle within {MAX_SETTLE_FRAMES} frames"
            ))
        })
}

/// Spring-driven animation from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Oscillator parameters.
    #[serde(default)]
    pub config: SpringConfig,
    /// Value before release.
    #[serde(default)]
    pub from: f64,
    /// Value the spring settles on.
    #[serde(default = "default_to")]
    pub to: f64,
    /// Frames before the spring is released.
    #[serde(default)]
    pub delay_frames: f64,
    /// Stretch time so the spring settles exactly at this many frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<f64>,
    /// Never move past `to`.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_to() -> f64 {
    1.0
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl Spring {
    /// Unit spring (0 to 1) released at frame 0.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
            duration_frames: None,
            overshoot_clamping: false,
        }
    }

    /// Animate from `from` to `to`.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Hold `from` for `frames` frames.
    pub fn delay(mut self, frames: f64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Stretch time so the spring settles after `frames` frames.
    pub fn duration(mut self, frames: f64) -> Self {
        self.duration_frames = Some(frames);
        self
    }

    /// Stop at `to` instead of overshooting.
    pub fn overshoot_clamping(mut self, on: bool) -> Self {
        self.overshoot_clamping = on;
        self
    }

    /// Value at `frame` (in the caller's local time).
    pub fn sample(&self, frame: f64, fps: Fps) -> MotifResult<f64> {
        let mut elapsed = frame - self.delay_frames;
        if let Some(duration) = self.duration_frames {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(MotifError::config(
                    "spring duration_frames must be finite and > 0",
                ));
            }
            let natural = settle_frames(fps, &self.config, DEFAULT_REST_THRESHOLD)?;
            elapsed *= natural.max(1) as f64 / duration;
        }

        let mut unit = spring_value(elapsed, fps, &self.config)?;
        if self.overshoot_clamping {
            unit = unit.min(1.0);
        }
        Ok(self.from + (self.to - self.from) * unit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
