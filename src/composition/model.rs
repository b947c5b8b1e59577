use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{MotifError, MotifResult},
    timeline::model::Timeline,
};

/// Identity and format of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositionDescriptor {
    /// Letters, digits and `-` only.
    pub id: String,
    /// Must equal the timeline's total.
    pub duration_in_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl CompositionDescriptor {
    /// Resolution as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Checks the id charset and that duration, fps and size are non-zero.
    pub fn validate(&self) -> MotifResult<()> {
        if self.id.is_empty() {
            return Err(MotifError::config("composition id must be non-empty"));
        }
        if !self.id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(MotifError::config(format!(
                "composition id '{}' may only contain a-z, A-Z, 0-9 and '-'",
                self.id
            )));
        }
        if self.duration_in_frames == 0 {
            return Err(MotifError::config("duration_in_frames must be > 0"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if self.width == 0 || self.height == 0 {
            return Err(MotifError::config("width/height must be > 0"));
        }
        Ok(())
    }
}

/// Kind of auxiliary output requested from the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactContent {
    /// Still image of the rendered frame.
    Thumbnail,
}

/// Requests an artifact whenever `frame` is rendered.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArtifactHook {
    /// Global frame the hook fires on.
    pub frame: u64,
    /// Output file name, unique per composition.
    pub filename: String,
    /// What to produce.
    pub content: ArtifactContent,
}

impl ArtifactHook {
    /// Thumbnail of `frame` saved as `filename`.
    pub fn thumbnail(frame: u64, filename: impl Into<String>) -> Self {
        Self {
            frame,
            filename: filename.into(),
            content: ArtifactContent::Thumbnail,
        }
    }
}

#[derive(serde::Deserialize)]
struct CompositionFile {
    #[serde(flatten)]
    descriptor: CompositionDescriptor,
    timeline: Timeline,
    #[serde(default)]
    artifacts: Vec<ArtifactHook>,
}

impl TryFrom<CompositionFile> for Composition {
    type Error = MotifError;

    fn try_from(f: CompositionFile) -> MotifResult<Self> {
        Self::new(f.descriptor, f.timeline, f.artifacts)
    }
}

/// A validated composition: descriptor, timeline and artifact hooks.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CompositionFile")]
pub struct Composition {
    #[serde(flatten)]
    descriptor: CompositionDescriptor,
    timeline: Timeline,
    artifacts: Vec<ArtifactHook>,
}

impl Composition {
    /// Validate all parts and their agreement (timeline total, artifact frames and names).
    pub fn new(
        descriptor: CompositionDescriptor,
        timeline: Timeline,
        artifacts: Vec<ArtifactHook>,
    ) -> MotifResult<Self> {
        descriptor.validate()?;
        timeline.validate()?;

        let total = timeline.total_frames();
        if total != descriptor.duration_in_frames {
            return Err(MotifError::config(format!(
                "timeline covers {total} frames but duration_in_frames is {}",
                descriptor.duration_in_frames
            )));
        }

        for (i, hook) in artifacts.iter().enumerate() {
            if hook.frame >= descriptor.duration_in_frames {
                return Err(MotifError::config(format!(
                    "artifact '{}' frame {} is outside the composition",
                    hook.filename, hook.frame
                )));
            }
            if hook.filename.trim().is_empty() {
                return Err(MotifError::config("artifact filename must be non-empty"));
            }
            if artifacts[..i].iter().any(|h| h.filename == hook.filename) {
                return Err(MotifError::config(format!(
                    "duplicate artifact filename '{}'",
                    hook.filename
                )));
            }
        }

        Ok(Self {
            descriptor,
            timeline,
            artifacts,
        })
    }

    /// Parse and validate a composition from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> MotifResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MotifError::serde(format!("parse composition JSON: {e}")))
    }

    /// Parse and validate a composition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotifResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open composition JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON accepted by [`Self::from_reader`].
    pub fn to_json_string(&self) -> MotifResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MotifError::serde(format!("serialize composition: {e}")))
    }

    /// Identity and format.
    pub fn descriptor(&self) -> &CompositionDescriptor {
        &self.descriptor
    }

    /// Composition id.
    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.descriptor.fps
    }

    /// Output resolution.
    pub fn canvas(&self) -> Canvas {
        self.descriptor.canvas()
    }

    /// Total frames; valid frames are `0..duration`.
    pub fn duration_in_frames(&self) -> u64 {
        self.descriptor.duration_in_frames
    }

    /// Scene sequence.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Artifact hooks in declaration order.
    pub fn artifacts(&self) -> &[ArtifactHook] {
        &self.artifacts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
