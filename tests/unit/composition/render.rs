use super::*;
use crate::composition::reference::promo_composition;
use crate::foundation::core::Vec2;

#[test]
fn frame_zero_requests_the_thumbnail() {
    let comp = promo_composition().unwrap();
    let out = comp.render_frame(FrameIndex(0)).unwrap();
    assert_eq!(
        out.artifacts,
        vec![ArtifactRequest {
            filename: "thumbnail.jpeg".to_owned(),
            content: ArtifactContent::Thumbnail,
        }]
    );
    assert_eq!(out.layers.len(), 1);
    assert_eq!(out.layers[0].role, LayerRole::Solo);
    assert_eq!(out.layers[0].scene_kind, "intro");
    assert!(out.transition.is_none());

    let later = comp.render_frame(FrameIndex(1)).unwrap();
    assert!(later.artifacts.is_empty());
}

#[test]
fn transition_frames_carry_two_blended_layers() {
    let comp = promo_composition().unwrap();
    let out = comp.render_frame(FrameIndex(43)).unwrap();
    assert_eq!(out.layers.len(), 2);

    let (outgoing, incoming) = (&out.layers[0], &out.layers[1]);
    assert_eq!(outgoing.role, LayerRole::Outgoing);
    assert_eq!(outgoing.scene_kind, "intro");
    assert_eq!(outgoing.local_frame, FrameIndex(43));
    assert_eq!(incoming.role, LayerRole::Incoming);
    assert_eq!(incoming.scene_kind, "prompt");
    assert_eq!(incoming.local_frame, FrameIndex(5));

    let t = out.transition.unwrap();
    assert_eq!((t.elapsed_frames, t.overlap_frames), (5, 12));
    assert!((t.progress - 5.0 / 12.0).abs() < 1e-12);
    assert!(incoming.blend.offset.x > 0.0);
    assert!(outgoing.blend.offset.x < 0.0);
    assert_eq!(incoming.blend.offset.y, 0.0);
}

#[test]
fn fade_window_between_prompt_and_magic() {
    let comp = promo_composition().unwrap();
    let out = comp.render_frame(FrameIndex(102)).unwrap();
    let t = out.transition.unwrap();
    assert_eq!(t.presentation, Presentation::Fade);
    assert_eq!(out.layers[0].local_frame, FrameIndex(64));
    assert_eq!(out.layers[1].local_frame, FrameIndex(6));
    assert!((out.layers[1].blend.opacity - 0.5).abs() < 1e-12);
    assert_eq!(out.layers[1].blend.offset, Vec2::ZERO);
}

#[test]
fn boundary_frames() {
    let comp = promo_composition().unwrap();
    assert!(comp.render_frame_at(269).is_ok());
    assert!(matches!(
        comp.render_frame_at(270),
        Err(MotifError::Range(_))
    ));
    assert!(matches!(comp.render_frame_at(-1), Err(MotifError::Range(_))));

    let last = comp.render_frame_at(269).unwrap();
    assert_eq!(last.layers[0].scene_kind, "cta");
    assert_eq!(last.layers[0].local_frame, FrameIndex(49));
}

#[test]
fn rendering_is_repeatable() {
    let comp = promo_composition().unwrap();
    for f in [0, 43, 120, 230, 269] {
        let a = comp.render_frame(FrameIndex(f)).unwrap();
        let b = comp.render_frame(FrameIndex(f)).unwrap();
        assert_eq!(a, b);
    }
}
