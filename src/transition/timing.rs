use crate::{
    animation::ease::Ease,
    foundation::error::{MotifError, MotifResult},
};

/// How long two neighboring scenes overlap and how progress advances across the overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionTiming {
    /// Frames during which both scenes are active (> 0).
    pub overlap_frames: u64,
    /// Progress curve; linear unless set.
    #[serde(default)]
    pub curve: Ease,
}

impl TransitionTiming {
    /// Linear progress over `overlap_frames`.
    pub fn linear(overlap_frames: u64) -> Self {
        Self {
            overlap_frames,
            curve: Ease::Linear,
        }
    }

    /// Replace the progress curve.
    pub fn with_curve(mut self, curve: Ease) -> Self {
        self.curve = curve;
        self
    }

    /// Overlap must be at least one frame.
    pub fn validate(&self) -> MotifResult<()> {
        if self.overlap_frames == 0 {
            return Err(MotifError::config("transition overlap_frames must be > 0"));
        }
        Ok(())
    }

    /// Progress in `[0, 1]` after `elapsed_frames` frames of overlap.
    ///
    /// Exactly `0` at `elapsed = 0` and exactly `1` once `elapsed >= overlap_frames`.
    pub fn timing_progress(&self, elapsed_frames: u64) -> f64 {
        if elapsed_frames >= self.overlap_frames {
            return 1.0;
        }
        let t = elapsed_frames as f64 / self.overlap_frames as f64;
        self.curve.apply(t).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/timing.rs"]
mod tests;
