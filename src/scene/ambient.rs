use crate::{
    foundation::core::{Rgba8, Vec2},
    foundation::error::MotifResult,
    scene::{ensure_finite, snapshot::VisualSnapshot},
};

/// A soft blurred circle drifting around a fixed anchor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Orb {
    /// Anchor as a fraction of the canvas (`0.2, 0.3` = 20% from left, 30% from top).
    pub anchor: Vec2,
    /// Diameter in pixels.
    pub size: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Radians of drift phase per frame.
    pub speed: f64,
}

/// Background orbs shared by several scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FloatingOrbs {
    /// One entry per orb.
    pub orbs: Vec<Orb>,
}

const ORB_DRIFT_X: f64 = 20.0;
const ORB_DRIFT_Y: f64 = 30.0;

impl FloatingOrbs {
    /// Wrap a list of orbs.
    pub fn new(orbs: Vec<Orb>) -> Self {
        Self { orbs }
    }

    /// Anchor, size and speed must be finite.
    pub fn validate(&self) -> MotifResult<()> {
        for orb in &self.orbs {
            ensure_finite("orb anchor x", orb.anchor.x)?;
            ensure_finite("orb anchor y", orb.anchor.y)?;
            ensure_finite("orb size", orb.size)?;
            ensure_finite("orb speed", orb.speed)?;
        }
        Ok(())
    }

    /// Writes `orb.<i>.*` keys for `frame`.
    pub fn evaluate(&self, frame: f64, out: &mut VisualSnapshot) {
        for (i, orb) in self.orbs.iter().enumerate() {
            let phase = frame * orb.speed + i as f64;
            out.set_scalar(format!("orb.{i}.anchor_x"), orb.anchor.x);
            out.set_scalar(format!("orb.{i}.anchor_y"), orb.anchor.y);
            out.set_scalar(format!("orb.{i}.size"), orb.size);
            out.set_color(format!("orb.{i}.color"), orb.color);
            out.set_scalar(format!("orb.{i}.offset_x"), phase.cos() * ORB_DRIFT_X);
            out.set_scalar(format!("orb.{i}.offset_y"), phase.sin() * ORB_DRIFT_Y);
        }
    }
}

/// Three-stop linear gradient filling the frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientBackdrop {
    /// Colors at 0%, 50% and 100%.
    pub stops: [Rgba8; 3],
    /// Direction in degrees.
    pub angle_deg: f64,
    /// Breathing speed; `None` keeps a constant intensity of 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breathe_speed: Option<f64>,
}

impl GradientBackdrop {
    /// Static gradient.
    pub fn new(stops: [Rgba8; 3], angle_deg: f64) -> Self {
        Self {
            stops,
            angle_deg,
            breathe_speed: None,
        }
    }

    /// Enable breathing at `speed`.
    pub fn breathing(mut self, speed: f64) -> Self {
        self.breathe_speed = Some(speed);
        self
    }

    /// Angle and breathing speed must be finite.
    pub fn validate(&self) -> MotifResult<()> {
        ensure_finite("gradient angle_deg", self.angle_deg)?;
        if let Some(speed) = self.breathe_speed {
            ensure_finite("gradient breathe_speed", speed)?;
        }
        Ok(())
    }

    /// Brightness multiplier at `frame`, within `[0.6, 1.0]`.
    pub fn intensity(&self, frame: f64) -> f64 {
        match self.breathe_speed {
            Some(speed) => 0.8 + 0.2 * (frame * speed * 0.1).sin(),
            None => 1.0,
        }
    }

    /// Writes `gradient.*` keys for `frame`.
    pub fn evaluate(&self, frame: f64, out: &mut VisualSnapshot) {
        self.evaluate_with_angle(self.angle_deg, frame, out);
    }

    /// Same as [`Self::evaluate`] with an animated direction.
    pub fn evaluate_with_angle(&self, angle_deg: f64, frame: f64, out: &mut VisualSnapshot) {
        for (i, c) in self.stops.iter().enumerate() {
            out.set_color(format!("gradient.stop.{i}"), *c);
        }
        out.set_scalar("gradient.angle", angle_deg);
        out.set_scalar("gradient.intensity", self.intensity(frame));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ambient.rs"]
mod tests;
