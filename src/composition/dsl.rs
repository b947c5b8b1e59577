use crate::{
    composition::model::{ArtifactHook, Composition, CompositionDescriptor},
    foundation::core::{Canvas, Fps},
    foundation::error::{MotifError, MotifResult},
    scene::Scene,
    timeline::model::{Timeline, TimelineBuilder},
    transition::presentation::Presentation,
    transition::timing::TransitionTiming,
};

/// Fluent construction of a [`Composition`].
///
/// When no duration is given it is derived from the timeline.
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration_in_frames: Option<u64>,
    timeline: TimelineBuilder,
    artifacts: Vec<ArtifactHook>,
}

impl CompositionBuilder {
    /// Empty builder for a composition called `id`.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            duration_in_frames: None,
            timeline: Timeline::builder(),
            artifacts: Vec::new(),
        }
    }

    /// Declare the expected duration; building fails if the timeline disagrees.
    pub fn duration(mut self, frames: u64) -> Self {
        self.duration_in_frames = Some(frames);
        self
    }

    /// Append a scene.
    pub fn scene(mut self, scene: Scene, duration_in_frames: u64) -> Self {
        self.timeline = self.timeline.scene(scene, duration_in_frames);
        self
    }

    /// Append a transition between the previous scene and the next one.
    pub fn transition(mut self, presentation: Presentation, timing: TransitionTiming) -> Self {
        self.timeline = self.timeline.transition(presentation, timing);
        self
    }

    /// Register an artifact hook; filenames must be unique.
    pub fn artifact(mut self, hook: ArtifactHook) -> MotifResult<Self> {
        if self.artifacts.iter().any(|h| h.filename == hook.filename) {
            return Err(MotifError::config(format!(
                "duplicate artifact filename '{}'",
                hook.filename
            )));
        }
        self.artifacts.push(hook);
        Ok(self)
    }

    /// Validate and assemble the composition.
    pub fn build(self) -> MotifResult<Composition> {
        let timeline = self.timeline.build()?;
        let descriptor = CompositionDescriptor {
            id: self.id,
            duration_in_frames: self
                .duration_in_frames
                .unwrap_or_else(|| timeline.total_frames()),
            fps: self.fps,
            width: self.canvas.width,
            height: self.canvas.height,
        };
        Composition::new(descriptor, timeline, self.artifacts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
