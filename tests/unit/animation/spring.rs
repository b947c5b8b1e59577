use super::*;

fn fps30() -> Fps {
    Fps::integer(30).unwrap()
}

fn under() -> SpringConfig {
    SpringConfig::new(10.0, 100.0)
}

fn critical() -> SpringConfig {
    SpringConfig::new(20.0, 100.0)
}

fn over() -> SpringConfig {
    SpringConfig::new(40.0, 100.0)
}

#[test]
fn regimes_follow_damping_ratio() {
    assert_eq!(under().regime(), DampingRegime::Under);
    assert_eq!(critical().regime(), DampingRegime::Critical);
    assert_eq!(over().regime(), DampingRegime::Over);
    assert_eq!(SpringConfig::default(), under());
}

#[test]
fn starts_at_rest_and_ignores_negative_time() {
    for cfg in [under(), critical(), over()] {
        assert_eq!(spring_value(0.0, fps30(), &cfg).unwrap(), 0.0);
        assert_eq!(spring_value(-12.0, fps30(), &cfg).unwrap(), 0.0);
        assert!(spring_value(1.0, fps30(), &cfg).unwrap() > 0.0);
    }
}

#[test]
fn converges_to_target_in_every_regime() {
    for cfg in [under(), critical(), over()] {
        let v = spring_value(1000.0, fps30(), &cfg).unwrap();
        assert!((v - 1.0).abs() < 1e-6, "{cfg:?} -> {v}");
        assert_eq!(spring_value(f64::INFINITY, fps30(), &cfg).unwrap(), 1.0);
    }
}

#[test]
fn under_damped_overshoots_and_over_damped_does_not() {
    let peak = (0..120)
        .map(|f| spring_value(f as f64, fps30(), &under()).unwrap())
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    let mut prev = 0.0;
    for f in 0..240 {
        let v = spring_value(f as f64, fps30(), &over()).unwrap();
        assert!(v >= prev && v <= 1.0, "frame {f}: {v}");
        prev = v;
    }
}

#[test]
fn branches_agree_near_critical_damping() {
    let below = SpringConfig::new(20.0 - 1e-4, 100.0);
    let above = SpringConfig::new(20.0 + 1e-4, 100.0);
    assert_eq!(below.regime(), DampingRegime::Under);
    assert_eq!(above.regime(), DampingRegime::Over);
    for f in [1.0, 3.5, 10.0, 30.0, 90.0] {
        let c = spring_value(f, fps30(), &critical()).unwrap();
        let b = spring_value(f, fps30(), &below).unwrap();
        let a = spring_value(f, fps30(), &above).unwrap();
        assert!((c - b).abs() < 1e-3, "frame {f}: {c} vs {b}");
        assert!((c - a).abs() < 1e-3, "frame {f}: {c} vs {a}");
    }
}

#[test]
fn invalid_configs_are_config_errors() {
    for cfg in [
        SpringConfig::new(0.0, 100.0),
        SpringConfig::new(10.0, -1.0),
        SpringConfig::new(10.0, 100.0).with_mass(f64::NAN),
    ] {
        assert!(matches!(
            spring_value(5.0, fps30(), &cfg),
            Err(MotifError::Config(_))
        ));
    }
}

#[test]
fn config_fields_default_when_omitted() {
    let cfg: SpringConfig = serde_json::from_str(r#"{ "damping": 12 }"#).unwrap();
    assert_eq!(cfg, SpringConfig::new(12.0, 100.0));
}

#[test]
fn settle_frames_is_first_frame_inside_threshold() {
    let cfg = critical();
    let f = settle_frames(fps30(), &cfg, DEFAULT_REST_THRESHOLD).unwrap();
    assert!(f > 0);
    let at = spring_value(f as f64, fps30(), &cfg).unwrap();
    let before = spring_value(f as f64 - 1.0, fps30(), &cfg).unwrap();
    assert!(1.0 - at < DEFAULT_REST_THRESHOLD);
    assert!(1.0 - before >= DEFAULT_REST_THRESHOLD);
}

#[test]
fn spring_animation_maps_range_and_delay() {
    let s = Spring::new(under()).range(10.0, 20.0).delay(30.0);
    assert_eq!(s.sample(0.0, fps30()).unwrap(), 10.0);
    assert_eq!(s.sample(30.0, fps30()).unwrap(), 10.0);
    let late = s.sample(2000.0, fps30()).unwrap();
    assert!((late - 20.0).abs() < 1e-6);
}

#[test]
fn overshoot_clamping_never_passes_target() {
    let s = Spring::new(under()).overshoot_clamping(true);
    for f in 0..120 {
        assert!(s.sample(f as f64, fps30()).unwrap() <= 1.0);
    }
}

#[test]
fn duration_stretches_settling_to_requested_frame() {
    let s = Spring::new(critical()).duration(90.0);
    let v = s.sample(90.0, fps30()).unwrap();
    assert!(1.0 - v < DEFAULT_REST_THRESHOLD);
    let early = s.sample(45.0, fps30()).unwrap();
    assert!(1.0 - early >= DEFAULT_REST_THRESHOLD);

    let bad = Spring::new(critical()).duration(0.0);
    assert!(matches!(
        bad.sample(1.0, fps30()),
        Err(MotifError::Config(_))
    ));
}
