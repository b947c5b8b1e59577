//! Motif is a deterministic, frame-driven animation engine.
//!
//! Every visual value of a composition is a pure function of an integer frame index: there is
//! no playback state, so any frame can be computed in any order, on any thread, and always yields
//! the same result.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Timeline + FrameIndex -> TimelineFrame` (one scene, or two during a transition)
//! 2. **Evaluate**: `Scene + local frame -> VisualSnapshot` (springs, interpolations, staggers)
//! 3. **Blend**: `Presentation + progress -> BlendPair` (slide offsets, fade opacities, wipe masks)
//! 4. **Emit**: `FrameOutput` for an external renderer, plus artifact requests such as thumbnails
//!
//! Pixel rendering, text layout and encoding are out of scope; the output of this crate is the
//! complete description of what to draw.
//!
//! For a walkthrough of the concepts, see [`crate::guide`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod composition;
mod foundation;
mod scene;
mod timeline;
mod transition;

/// High-level, standalone documentation for Motif's concepts and architecture.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolationSpec, interpolate};
pub use animation::spring::{
    DEFAULT_REST_THRESHOLD, DampingRegime, Spring, SpringConfig, settle_frames, spring_value,
};
pub use composition::dsl::CompositionBuilder;
pub use composition::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use composition::model::{
    ArtifactContent, ArtifactHook, Composition, CompositionDescriptor,
};
pub use composition::pipeline::RenderThreading;
pub use composition::reference;
pub use composition::render::{
    ArtifactRequest, FrameOutput, LayerRole, RenderedLayer, TransitionState,
};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8, Vec2};
pub use foundation::error::{MotifError, MotifResult};
pub use scene::Scene;
pub use scene::ambient::{FloatingOrbs, GradientBackdrop, Orb};
pub use scene::promo::{
    CtaScene, FeaturesScene, IntroScene, MagicScene, Palette, PromptScene, SpeedScene,
};
pub use scene::snapshot::{ParamValue, VisualSnapshot};
pub use scene::text::{RevealStyle, TextReveal};
pub use timeline::model::{
    SceneSlot, SceneSpan, Timeline, TimelineBuilder, TimelineEntry, TransitionSlot,
};
pub use timeline::resolve::{ActiveScene, TimelineFrame};
pub use transition::presentation::{
    BlendPair, LayerBlend, Presentation, SlideDirection, WipeDir, WipeMask,
};
pub use transition::timing::TransitionTiming;
