//! # Motif guide
//!
//! A standalone walkthrough of how a frame is computed. For the CLI, run `motif --help`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Composition`](crate::Composition): id, duration, frame rate, resolution, a
//!   [`Timeline`](crate::Timeline) and artifact hooks
//! - [`Timeline`](crate::Timeline): scenes in playback order, optionally separated by transitions
//! - [`Scene`](crate::Scene): a pure function from a local frame to a
//!   [`VisualSnapshot`](crate::VisualSnapshot)
//! - [`Presentation`](crate::Presentation) + [`TransitionTiming`](crate::TransitionTiming): how
//!   two neighboring scenes are blended while they overlap
//! - [`FrameOutput`](crate::FrameOutput): the layers, blend instructions and artifact requests of
//!   one frame
//!
//! ---
//!
//! ## Time
//!
//! Nothing in Motif reads a clock. Every primitive receives the frame and the frame rate
//! explicitly:
//!
//! - [`spring_value`](crate::spring_value) converts elapsed frames to seconds via
//!   [`Fps`](crate::Fps) and evaluates a closed-form damped oscillator
//! - [`interpolate`](crate::interpolate) maps a frame (or any derived value) through piecewise
//!   linear breakpoints with per-side extrapolation
//!
//! Scenes receive *local* frames, counted from their own start.
//!
//! ---
//!
//! ## Timeline arithmetic
//!
//! A transition of `K` frames between scenes `i` and `i + 1` makes them overlap by `K` frames:
//!
//! ```text
//! start(0)     = 0
//! start(i + 1) = start(i) + duration(i) - K(i)
//! total        = sum(duration) - sum(K)
//! ```
//!
//! During the overlap window `[start(i + 1), start(i) + duration(i))` both scenes are evaluated.
//! The incoming scene's local frame equals the elapsed overlap frames, starting at 0; the
//! outgoing scene keeps counting up to `duration(i) - 1`.
//!
//! Transition progress is `curve(elapsed / K)`: exactly 0 on the first overlapping frame and
//! exactly 1 from frame `K` on.
//!
//! ---
//!
//! ## Determinism
//!
//! [`fingerprint_frame`](crate::fingerprint_frame) hashes the bit pattern of every value in a
//! [`FrameOutput`](crate::FrameOutput). Rendering the same frame twice, out of order or on a
//! [`RenderThreading`](crate::RenderThreading) pool always yields the same fingerprint.
//!
//! ---
//!
//! ## Minimal example
//!
//! ```
//! use motif::{
//!     Canvas, CompositionBuilder, Fps, FrameIndex, IntroScene, Presentation, Scene,
//!     SlideDirection, SpeedScene, TransitionTiming,
//! };
//!
//! let comp = CompositionBuilder::new(
//!     "Demo",
//!     Fps::integer(30)?,
//!     Canvas { width: 1280, height: 720 },
//! )
//! .scene(Scene::Intro(IntroScene::default()), 40)
//! .transition(
//!     Presentation::slide(SlideDirection::FromRight),
//!     TransitionTiming::linear(10),
//! )
//! .scene(Scene::Speed(SpeedScene::default()), 40)
//! .build()?;
//!
//! assert_eq!(comp.duration_in_frames(), 70);
//! let out = comp.render_frame(FrameIndex(35))?;
//! assert_eq!(out.layers.len(), 2);
//! # Ok::<(), motif::MotifError>(())
//! ```
