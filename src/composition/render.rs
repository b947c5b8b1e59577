use crate::{
    composition::model::{ArtifactContent, Composition},
    foundation::core::FrameIndex,
    foundation::error::{MotifError, MotifResult},
    scene::snapshot::VisualSnapshot,
    timeline::resolve::{ActiveScene, TimelineFrame},
    transition::presentation::{LayerBlend, Presentation},
};

/// Part a layer plays in the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    /// The only scene on screen.
    Solo,
    /// The scene being transitioned away from (drawn first).
    Outgoing,
    /// The scene being transitioned to (drawn on top).
    Incoming,
}

/// One scene's contribution to a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderedLayer {
    /// Solo, outgoing or incoming.
    pub role: LayerRole,
    /// Position among the timeline's scenes.
    pub scene_index: usize,
    /// [`Scene::kind_name`](crate::Scene::kind_name) of the scene.
    pub scene_kind: &'static str,
    /// Frame relative to the scene's start.
    pub local_frame: FrameIndex,
    /// Evaluated scene parameters.
    pub snapshot: VisualSnapshot,
    /// How to composite the layer.
    pub blend: LayerBlend,
}

/// Transition in effect on an overlapping frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransitionState {
    /// Visual mechanism.
    pub presentation: Presentation,
    /// Frames since the overlap started.
    pub elapsed_frames: u64,
    /// Length of the overlap.
    pub overlap_frames: u64,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
}

/// Auxiliary output the renderer should produce alongside this frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ArtifactRequest {
    /// Output file name.
    pub filename: String,
    /// What to produce.
    pub content: ArtifactContent,
}

/// Everything an external renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Global frame.
    pub frame: FrameIndex,
    /// Bottom to top.
    pub layers: Vec<RenderedLayer>,
    /// Set on overlapping frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionState>,
    /// Hooks firing on this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<ArtifactRequest>,
}

impl Composition {
    /// Compute the full visual state of `frame`.
    ///
    /// Pure: the output depends only on the composition and `frame`.
    #[tracing::instrument(skip(self), fields(id = %self.id()))]
    pub fn render_frame(&self, frame: FrameIndex) -> MotifResult<FrameOutput> {
        if frame.0 >= self.duration_in_frames() {
            return Err(MotifError::range(format!(
                "frame {} is outside composition '{}' [0, {})",
                frame.0,
                self.id(),
                self.duration_in_frames()
            )));
        }

        let fps = self.fps();
        let layer = |role, active: ActiveScene<'_>, blend| -> MotifResult<RenderedLayer> {
            Ok(RenderedLayer {
                role,
                scene_index: active.index,
                scene_kind: active.scene.kind_name(),
                local_frame: active.local_frame,
                snapshot: active.scene.evaluate(active.local_frame, fps)?,
                blend,
            })
        };

        let (layers, transition) = match self.timeline().resolve(frame)? {
            TimelineFrame::Single(active) => (
                vec![layer(LayerRole::Solo, active, LayerBlend::identity())?],
                None,
            ),
            TimelineFrame::Overlap {
                outgoing,
                incoming,
                transition,
                elapsed_overlap_frames,
            } => {
                let progress = transition.timing.timing_progress(elapsed_overlap_frames);
                let pair = transition.presentation.blend(progress, self.canvas());
                (
                    vec![
                        layer(LayerRole::Outgoing, outgoing, pair.outgoing)?,
                        layer(LayerRole::Incoming, incoming, pair.incoming)?,
                    ],
                    Some(TransitionState {
                        presentation: transition.presentation,
                        elapsed_frames: elapsed_overlap_frames,
                        overlap_frames: transition.timing.overlap_frames,
                        progress,
                    }),
                )
            }
        };

        Ok(FrameOutput {
            frame,
            layers,
            transition,
            artifacts: self.artifacts_at(frame),
        })
    }

    /// [`Self::render_frame`] for signed input; negative frames are a range error.
    pub fn render_frame_at(&self, frame: i64) -> MotifResult<FrameOutput> {
        self.render_frame(FrameIndex::try_from_i64(frame)?)
    }

    /// Artifact requests whose hook is bound to exactly `frame`.
    pub fn artifacts_at(&self, frame: FrameIndex) -> Vec<ArtifactRequest> {
        self.artifacts()
            .iter()
            .filter(|hook| hook.frame == frame.0)
            .map(|hook| {
                tracing::debug!(frame = frame.0, filename = %hook.filename, "artifact requested");
                ArtifactRequest {
                    filename: hook.filename.clone(),
                    content: hook.content,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/render.rs"]
mod tests;
