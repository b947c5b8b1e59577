use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn negative_frames_are_range_errors() {
    assert_eq!(FrameIndex::try_from_i64(269).unwrap(), FrameIndex(269));
    assert!(matches!(
        FrameIndex::try_from_i64(-1),
        Err(MotifError::Range(_))
    ));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(matches!(Fps::new(0, 1), Err(MotifError::Config(_))));
    assert!(matches!(Fps::new(30, 0), Err(MotifError::Config(_))));
    let fps = Fps::integer(30).unwrap();
    assert!((fps.frames_to_secs(45.0) - 1.5).abs() < 1e-12);
    assert!((fps.secs_to_frames(0.03) - 0.9).abs() < 1e-12);
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::from_hex("#A855F7").unwrap(), Rgba8::rgb(0xA8, 0x55, 0xF7));
    assert_eq!(
        Rgba8::from_hex("a855f740").unwrap(),
        Rgba8::rgba(0xA8, 0x55, 0xF7, 0x40)
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zz0000").is_err());
}

#[test]
fn colors_serialize_as_hex_and_accept_arrays() {
    let c = Rgba8::rgb(10, 10, 10).with_alpha(0x30);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#0A0A0A30\"");
    let parsed: Rgba8 = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(parsed, Rgba8::rgb(1, 2, 3));
    let parsed: Rgba8 = serde_json::from_str("\"#0A0A0A30\"").unwrap();
    assert_eq!(parsed, c);
}
