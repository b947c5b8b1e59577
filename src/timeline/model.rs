use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{MotifError, MotifResult},
    scene::Scene,
    transition::presentation::Presentation,
    transition::timing::TransitionTiming,
};

/// A scene and the number of frames it plays for.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSlot {
    /// What plays.
    pub scene: Scene,
    /// Nominal length, overlaps included (> 0).
    pub duration_in_frames: u64,
}

/// Overlapping hand-over between the scenes on either side of it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSlot {
    /// Visual mechanism.
    pub presentation: Presentation,
    /// Overlap length and progress curve.
    pub timing: TransitionTiming,
}

/// One element of a timeline sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum TimelineEntry {
    /// A scene.
    Scene(SceneSlot),
    /// A transition; only valid between two scenes.
    Transition(TransitionSlot),
}

/// Placement of one scene on the global timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneSpan {
    /// Position among the timeline's scenes (transitions are not counted).
    pub index: usize,
    /// Global frames the scene is active on.
    pub range: FrameRange,
}

/// Ordered scenes, optionally separated by transitions.
///
/// Always structurally valid: both constructors and deserialization run [`Timeline::validate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<TimelineEntry>", into = "Vec<TimelineEntry>")]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl TryFrom<Vec<TimelineEntry>> for Timeline {
    type Error = MotifError;

    fn try_from(entries: Vec<TimelineEntry>) -> MotifResult<Self> {
        Self::from_entries(entries)
    }
}

impl From<Timeline> for Vec<TimelineEntry> {
    fn from(t: Timeline) -> Self {
        t.entries
    }
}

/// One scene together with its computed start and the transition that follows it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placement<'a> {
    pub(crate) index: usize,
    pub(crate) slot: &'a SceneSlot,
    pub(crate) start: u64,
    pub(crate) outgoing: Option<&'a TransitionSlot>,
}

impl Placement<'_> {
    pub(crate) fn end(&self) -> u64 {
        self.start.saturating_add(self.slot.duration_in_frames)
    }

    pub(crate) fn outgoing_overlap(&self) -> u64 {
        self.outgoing.map_or(0, |t| t.timing.overlap_frames)
    }
}

impl Timeline {
    /// Validated timeline from raw entries.
    pub fn from_entries(entries: Vec<TimelineEntry>) -> MotifResult<Self> {
        let timeline = Self { entries };
        timeline.validate()?;
        Ok(timeline)
    }

    /// Start an empty [`TimelineBuilder`].
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    /// Entries in playback order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Scene entries only.
    pub fn scenes(&self) -> impl Iterator<Item = &SceneSlot> + '_ {
        self.entries.iter().filter_map(|e| match e {
            TimelineEntry::Scene(s) => Some(s),
            TimelineEntry::Transition(_) => None,
        })
    }

    /// Structural rules plus every scene's and transition's own parameters.
    pub fn validate(&self) -> MotifResult<()> {
        let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) else {
            return Err(MotifError::config("timeline must contain at least one scene"));
        };
        if matches!(first, TimelineEntry::Transition(_)) {
            return Err(MotifError::config("timeline must not start with a transition"));
        }
        if matches!(last, TimelineEntry::Transition(_)) {
            return Err(MotifError::config("timeline must not end with a transition"));
        }

        // Every start and end is bounded by the sum of all durations.
        let mut span: u64 = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            match entry {
                TimelineEntry::Scene(slot) => {
                    if slot.duration_in_frames == 0 {
                        return Err(MotifError::config(format!(
                            "entry {i}: scene duration_in_frames must be > 0"
                        )));
                    }
                    slot.scene.validate()?;
                    span = span.checked_add(slot.duration_in_frames).ok_or_else(|| {
                        MotifError::config(format!(
                            "entry {i}: summed scene durations overflow the frame counter"
                        ))
                    })?;
                }
                TimelineEntry::Transition(t) => {
                    t.presentation.validate()?;
                    t.timing.validate()?;
                    let neighbors = (&self.entries[i - 1], &self.entries[i + 1]);
                    let (TimelineEntry::Scene(prev), TimelineEntry::Scene(next)) = neighbors
                    else {
                        return Err(MotifError::config(format!(
                            "entry {i}: transitions must sit between two scenes"
                        )));
                    };
                    let shortest = prev.duration_in_frames.min(next.duration_in_frames);
                    if t.timing.overlap_frames > shortest {
                        return Err(MotifError::config(format!(
                            "entry {i}: overlap of {} frames exceeds neighboring scene duration {shortest}",
                            t.timing.overlap_frames
                        )));
                    }
                }
            }
        }

        // At most two scenes may be active on any frame.
        let mut incoming = 0;
        for p in self.placements() {
            let outgoing = p.outgoing_overlap();
            if incoming + outgoing > p.slot.duration_in_frames {
                return Err(MotifError::config(format!(
                    "scene {}: incoming and outgoing overlaps ({incoming} + {outgoing}) exceed its duration {}",
                    p.index, p.slot.duration_in_frames
                )));
            }
            incoming = outgoing;
        }
        Ok(())
    }

    /// Scenes with their start frames, in playback order.
    ///
    /// Scene `i + 1` starts where scene `i` ends minus the overlap of the transition between
    /// them (zero when they are adjacent).
    pub(crate) fn placements(&self) -> Vec<Placement<'_>> {
        let mut out: Vec<Placement<'_>> = Vec::new();
        let mut pending: Option<&TransitionSlot> = None;

        for entry in &self.entries {
            match entry {
                TimelineEntry::Transition(t) => pending = Some(t),
                TimelineEntry::Scene(slot) => {
                    let start = match out.last_mut() {
                        Some(prev) => {
                            prev.outgoing = pending.take();
                            prev.end().saturating_sub(prev.outgoing_overlap())
                        }
                        None => 0,
                    };
                    out.push(Placement {
                        index: out.len(),
                        slot,
                        start,
                        outgoing: None,
                    });
                }
            }
        }
        out
    }

    /// Sum of scene durations minus the sum of transition overlaps.
    pub fn total_frames(&self) -> u64 {
        self.placements().last().map_or(0, Placement::end)
    }

    /// Number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes().count()
    }

    /// Global `[start, end)` range each scene is active in.
    pub fn scene_spans(&self) -> Vec<SceneSpan> {
        self.placements()
            .iter()
            .map(|p| SceneSpan {
                index: p.index,
                range: FrameRange {
                    start: FrameIndex(p.start),
                    end: FrameIndex(p.end()),
                },
            })
            .collect()
    }
}

/// Incremental construction of a [`Timeline`].
#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    entries: Vec<TimelineEntry>,
}

impl TimelineBuilder {
    /// Append a scene.
    pub fn scene(mut self, scene: Scene, duration_in_frames: u64) -> Self {
        self.entries.push(TimelineEntry::Scene(SceneSlot {
            scene,
            duration_in_frames,
        }));
        self
    }

    /// Append a transition.
    pub fn transition(mut self, presentation: Presentation, timing: TransitionTiming) -> Self {
        self.entries.push(TimelineEntry::Transition(TransitionSlot {
            presentation,
            timing,
        }));
        self
    }

    /// Validate and finish.
    pub fn build(self) -> MotifResult<Timeline> {
        Timeline::from_entries(self.entries)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
