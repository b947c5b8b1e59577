use super::*;
use crate::scene::promo::{IntroScene, SpeedScene};
use crate::transition::presentation::SlideDirection;

fn scene() -> Scene {
    Scene::Intro(IntroScene::default())
}

fn promo_like() -> Timeline {
    let slide = |d| Presentation::slide(d);
    let t12 = TransitionTiming::linear(12);
    Timeline::builder()
        .scene(scene(), 50)
        .transition(slide(SlideDirection::FromRight), t12)
        .scene(scene(), 70)
        .transition(Presentation::Fade, t12)
        .scene(scene(), 45)
        .transition(slide(SlideDirection::FromBottom), t12)
        .scene(scene(), 55)
        .transition(slide(SlideDirection::FromLeft), t12)
        .scene(scene(), 60)
        .transition(Presentation::Fade, t12)
        .scene(scene(), 50)
        .build()
        .unwrap()
}

#[test]
fn total_is_durations_minus_overlaps() {
    let t = promo_like();
    assert_eq!(t.total_frames(), 330 - 60);
    assert_eq!(t.scene_count(), 6);
}

#[test]
fn spans_chain_through_overlaps() {
    let starts: Vec<_> = promo_like()
        .scene_spans()
        .iter()
        .map(|s| (s.range.start.0, s.range.end.0))
        .collect();
    assert_eq!(
        starts,
        vec![(0, 50), (38, 108), (96, 141), (129, 184), (172, 232), (220, 270)]
    );
}

#[test]
fn adjacent_scenes_cut_without_overlap() {
    let t = Timeline::builder()
        .scene(scene(), 10)
        .scene(Scene::Speed(SpeedScene::default()), 5)
        .build()
        .unwrap();
    assert_eq!(t.total_frames(), 15);
    assert_eq!(t.scene_spans()[1].range.start, FrameIndex(10));
}

#[test]
fn structural_errors_are_config_errors() {
    let fade = || TransitionTiming::linear(4);
    let cases = [
        Timeline::builder().build(),
        Timeline::builder()
            .transition(Presentation::Fade, fade())
            .scene(scene(), 10)
            .build(),
        Timeline::builder()
            .scene(scene(), 10)
            .transition(Presentation::Fade, fade())
            .build(),
        Timeline::builder()
            .scene(scene(), 10)
            .transition(Presentation::Fade, fade())
            .transition(Presentation::Fade, fade())
            .scene(scene(), 10)
            .build(),
        Timeline::builder().scene(scene(), 0).build(),
        Timeline::builder()
            .scene(scene(), 10)
            .transition(Presentation::Fade, TransitionTiming::linear(0))
            .scene(scene(), 10)
            .build(),
        Timeline::builder()
            .scene(scene(), 10)
            .transition(Presentation::Fade, TransitionTiming::linear(11))
            .scene(scene(), 20)
            .build(),
        // The middle scene would host both windows at once.
        Timeline::builder()
            .scene(scene(), 20)
            .transition(Presentation::Fade, TransitionTiming::linear(6))
            .scene(scene(), 10)
            .transition(Presentation::Fade, TransitionTiming::linear(6))
            .scene(scene(), 20)
            .build(),
    ];
    for (i, case) in cases.into_iter().enumerate() {
        assert!(matches!(case, Err(MotifError::Config(_))), "case {i}");
    }
}

#[test]
fn overlap_equal_to_a_neighbor_is_allowed() {
    let t = Timeline::builder()
        .scene(scene(), 12)
        .transition(Presentation::Fade, TransitionTiming::linear(12))
        .scene(scene(), 30)
        .build()
        .unwrap();
    assert_eq!(t.total_frames(), 30);
}

#[test]
fn deserialization_validates() {
    let ok: Timeline = serde_json::from_str(
        r#"[
            { "entry": "scene", "duration_in_frames": 20, "scene": { "kind": "intro" } },
            { "entry": "transition", "presentation": { "type": "fade" }, "timing": { "overlap_frames": 5 } },
            { "entry": "scene", "duration_in_frames": 20, "scene": { "kind": "cta" } }
        ]"#,
    )
    .unwrap();
    assert_eq!(ok.total_frames(), 35);

    let bad = serde_json::from_str::<Timeline>(
        r#"[{ "entry": "transition", "presentation": { "type": "fade" }, "timing": { "overlap_frames": 5 } }]"#,
    );
    assert!(bad.is_err());
}

#[test]
fn overflowing_durations_are_config_errors() {
    let res = Timeline::builder()
        .scene(scene(), u64::MAX)
        .scene(scene(), u64::MAX)
        .build();
    assert!(matches!(res, Err(MotifError::Config(_))));

    let json = r#"[
        { "entry": "scene", "scene": { "kind": "speed" }, "duration_in_frames": 18446744073709551615 },
        { "entry": "scene", "scene": { "kind": "speed" }, "duration_in_frames": 18446744073709551615 }
    ]"#;
    assert!(serde_json::from_str::<Timeline>(json).is_err());

    let single = Timeline::builder().scene(scene(), u64::MAX).build().unwrap();
    assert_eq!(single.total_frames(), u64::MAX);
}
