use crate::{
    foundation::core::FrameIndex,
    foundation::error::{MotifError, MotifResult},
    scene::Scene,
    timeline::model::{Timeline, TransitionSlot},
};

/// A scene active on the queried frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveScene<'a> {
    /// Position among the timeline's scenes.
    pub index: usize,
    /// The scene definition.
    pub scene: &'a Scene,
    /// Frame relative to the scene's own start.
    pub local_frame: FrameIndex,
}

/// What the timeline shows on one global frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineFrame<'a> {
    /// Exactly one scene is visible.
    Single(ActiveScene<'a>),
    /// Two neighboring scenes share the frame through a transition.
    Overlap {
        /// Earlier scene, drawn first.
        outgoing: ActiveScene<'a>,
        /// Later scene, drawn on top.
        incoming: ActiveScene<'a>,
        /// The transition between them.
        transition: &'a TransitionSlot,
        /// Frames since the transition window opened; equals `incoming.local_frame`.
        elapsed_overlap_frames: u64,
    },
}

impl<'a> TimelineFrame<'a> {
    /// Active scenes bottom to top.
    pub fn scenes(&self) -> Vec<ActiveScene<'a>> {
        match *self {
            Self::Single(s) => vec![s],
            Self::Overlap {
                outgoing, incoming, ..
            } => vec![outgoing, incoming],
        }
    }
}

impl Timeline {
    /// Map a global frame onto the one or two scenes visible on it.
    ///
    /// Walks the entries on every call; results depend only on `frame`, so frames can be
    /// queried in any order.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, frame: FrameIndex) -> MotifResult<TimelineFrame<'_>> {
        let placements = self.placements();
        let total = placements.last().map_or(0, |p| p.end());
        if frame.0 >= total {
            return Err(MotifError::range(format!(
                "frame {} is outside the timeline [0, {total})",
                frame.0
            )));
        }

        let Some(i) = placements.iter().position(|p| frame.0 < p.end()) else {
            return Err(MotifError::range(format!("frame {} is unresolvable", frame.0)));
        };
        let current = placements[i];
        let outgoing = ActiveScene {
            index: current.index,
            scene: &current.slot.scene,
            local_frame: FrameIndex(frame.0 - current.start),
        };

        match (current.outgoing, placements.get(i + 1)) {
            (Some(transition), Some(next)) if frame.0 >= next.start => {
                let elapsed = frame.0 - next.start;
                Ok(TimelineFrame::Overlap {
                    outgoing,
                    incoming: ActiveScene {
                        index: next.index,
                        scene: &next.slot.scene,
                        local_frame: FrameIndex(elapsed),
                    },
                    transition,
                    elapsed_overlap_frames: elapsed,
                })
            }
            _ => Ok(TimelineFrame::Single(outgoing)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
