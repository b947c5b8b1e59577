use super::*;

fn glow() -> InterpolationSpec {
    InterpolationSpec::new([0.0, 20.0], [0.0, 0.8]).clamp_right()
}

#[test]
fn right_clamp_leaves_left_side_extending() {
    let below = interpolate(-5.0, &glow()).unwrap();
    assert!((below - -0.2).abs() < 1e-12);
    assert_eq!(interpolate(25.0, &glow()).unwrap(), 0.8);
    assert!((interpolate(10.0, &glow()).unwrap() - 0.4).abs() < 1e-12);
}

#[test]
fn identity_returns_input_outside_range() {
    let spec = InterpolationSpec::new([0.0, 1.0], [10.0, 20.0])
        .extrapolate(Extrapolate::Identity, Extrapolate::Identity);
    assert_eq!(interpolate(-3.5, &spec).unwrap(), -3.5);
    assert_eq!(interpolate(7.0, &spec).unwrap(), 7.0);
    assert_eq!(interpolate(0.5, &spec).unwrap(), 15.0);
}

#[test]
fn extend_continues_the_outer_segment_slopes() {
    let spec = InterpolationSpec::new([0.0, 10.0, 20.0], [0.0, 100.0, 0.0]);
    assert_eq!(interpolate(-1.0, &spec).unwrap(), -10.0);
    assert_eq!(interpolate(25.0, &spec).unwrap(), -50.0);
}

#[test]
fn multi_segment_brackets_are_located() {
    let spec = InterpolationSpec::new([0.0, 10.0, 20.0], [0.0, 100.0, 0.0]).clamp();
    assert_eq!(interpolate(10.0, &spec).unwrap(), 100.0);
    assert_eq!(interpolate(15.0, &spec).unwrap(), 50.0);
    assert_eq!(interpolate(5.0, &spec).unwrap(), 50.0);
    assert_eq!(interpolate(99.0, &spec).unwrap(), 0.0);
}

#[test]
fn rotation_extends_past_one_turn() {
    let spec = InterpolationSpec::new([0.0, 60.0], [0.0, 360.0]);
    assert_eq!(interpolate(90.0, &spec).unwrap(), 540.0);
}

#[test]
fn ease_shapes_inside_the_bracket_only() {
    let spec = InterpolationSpec::new([0.0, 10.0], [0.0, 1.0]).with_ease(Ease::InQuad);
    assert!((interpolate(5.0, &spec).unwrap() - 0.25).abs() < 1e-12);
    assert!((interpolate(20.0, &spec).unwrap() - 2.0).abs() < 1e-12);
}

#[test]
fn flat_segments_never_produce_nan() {
    let spec = InterpolationSpec::new([0.0, 1.0], [3.0, 3.0]);
    assert_eq!(interpolate(f64::INFINITY, &spec).unwrap(), 3.0);
}

#[test]
fn malformed_specs_are_domain_errors() {
    let not_increasing = InterpolationSpec::new([0.0, 0.0], [0.0, 1.0]);
    assert!(matches!(
        interpolate(0.0, &not_increasing),
        Err(MotifError::Domain(_))
    ));
    let descending = InterpolationSpec::new([1.0, 0.0], [0.0, 1.0]);
    assert!(matches!(
        interpolate(0.0, &descending),
        Err(MotifError::Domain(_))
    ));
    let mismatched = InterpolationSpec::new([0.0, 1.0, 2.0], [0.0, 1.0]);
    assert!(matches!(
        interpolate(0.0, &mismatched),
        Err(MotifError::Domain(_))
    ));
    let single = InterpolationSpec::new([0.0], [0.0]);
    assert!(matches!(
        interpolate(0.0, &single),
        Err(MotifError::Domain(_))
    ));
    assert!(matches!(
        interpolate(f64::NAN, &glow()),
        Err(MotifError::Domain(_))
    ));
}

#[test]
fn spec_deserializes_with_default_policies() {
    let spec: InterpolationSpec = serde_json::from_str(
        r#"{ "input_range": [0, 20], "output_range": [0, 0.8], "extrapolate_right": "clamp" }"#,
    )
    .unwrap();
    assert_eq!(spec, glow());
}
