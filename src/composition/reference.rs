//! Built-in reference composition: the 9-second product promo.

use crate::{
    composition::dsl::CompositionBuilder,
    composition::model::{ArtifactHook, Composition},
    foundation::core::{Canvas, Fps},
    foundation::error::MotifResult,
    scene::Scene,
    scene::promo::{CtaScene, FeaturesScene, IntroScene, MagicScene, PromptScene, SpeedScene},
    transition::presentation::{Presentation, SlideDirection},
    transition::timing::TransitionTiming,
};

/// Composition id.
pub const PROMO_ID: &str = "Main";
/// Frames per second.
pub const PROMO_FPS: u32 = 30;
/// Canvas width.
pub const PROMO_WIDTH: u32 = 1280;
/// Canvas height.
pub const PROMO_HEIGHT: u32 = 720;
/// Overlap of every transition.
pub const PROMO_TRANSITION_FRAMES: u64 = 12;
/// Thumbnail requested on frame 0.
pub const PROMO_THUMBNAIL: &str = "thumbnail.jpeg";

/// Six scenes (50, 70, 45, 55, 60 and 50 frames) joined by five 12-frame linear transitions:
/// slide from right, fade, slide from bottom, slide from left, fade. 270 frames in total, with a
/// thumbnail requested on frame 0.
pub fn promo_composition() -> MotifResult<Composition> {
    let fps = Fps::integer(PROMO_FPS)?;
    let canvas = Canvas {
        width: PROMO_WIDTH,
        height: PROMO_HEIGHT,
    };
    let timing = TransitionTiming::linear(PROMO_TRANSITION_FRAMES);
    let slide = Presentation::slide;

    CompositionBuilder::new(PROMO_ID, fps, canvas)
        .duration(270)
        .scene(Scene::Intro(IntroScene::default()), 50)
        .transition(slide(SlideDirection::FromRight), timing)
        .scene(Scene::Prompt(PromptScene::default()), 70)
        .transition(Presentation::Fade, timing)
        .scene(Scene::Magic(MagicScene::default()), 45)
        .transition(slide(SlideDirection::FromBottom), timing)
        .scene(Scene::Speed(SpeedScene::default()), 55)
        .transition(slide(SlideDirection::FromLeft), timing)
        .scene(Scene::Features(FeaturesScene::default()), 60)
        .transition(Presentation::Fade, timing)
        .scene(Scene::Cta(CtaScene::default()), 50)
        .artifact(ArtifactHook::thumbnail(0, PROMO_THUMBNAIL))?
        .build()
}
