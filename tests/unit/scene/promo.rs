use super::*;

fn fps30() -> Fps {
    Fps::integer(30).unwrap()
}

fn eval<F>(f: f64, run: F) -> VisualSnapshot
where
    F: FnOnce(f64, &mut VisualSnapshot) -> MotifResult<()>,
{
    let mut out = VisualSnapshot::new();
    run(f, &mut out).unwrap();
    out
}

#[test]
fn intro_logo_springs_and_glow_clamps() {
    let intro = IntroScene::default();
    let s0 = eval(0.0, |f, o| intro.evaluate(f, fps30(), o));
    assert_eq!(s0.scalar("logo.scale"), Some(0.0));
    assert_eq!(s0.scalar("glow.opacity"), Some(0.0));
    assert_eq!(s0.scalar("title.char_count"), Some(10.0));
    assert_eq!(s0.color("glow.color"), Some(Rgba8::rgba(0xA8, 0x55, 0xF7, 0x40)));

    let s10 = eval(10.0, |f, o| intro.evaluate(f, fps30(), o));
    assert!((s10.scalar("glow.opacity").unwrap() - 0.4).abs() < 1e-12);
    let s45 = eval(45.0, |f, o| intro.evaluate(f, fps30(), o));
    assert_eq!(s45.scalar("glow.opacity"), Some(0.8));
}

#[test]
fn prompt_types_blinks_and_reveals_button() {
    let p = PromptScene::default();
    let s = eval(15.0, |f, o| p.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("prompt.typed_chars"), Some(10.0));
    assert_eq!(s.scalar("cursor.visible"), Some(0.0));
    assert_eq!(s.scalar("button.visible"), Some(0.0));
    assert_eq!(s.scalar("button.scale"), Some(0.0));

    let s = eval(31.0, |f, o| p.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("cursor.visible"), Some(1.0));
    assert_eq!(s.scalar("button.visible"), Some(1.0));
    assert!(s.scalar("button.scale").unwrap() > 0.0);

    // Typing saturates at the prompt length, even on extrapolated frames.
    let s = eval(500.0, |f, o| p.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("prompt.typed_chars"), s.scalar("prompt.total_chars"));
}

#[test]
fn magic_rotation_extends_and_drives_the_gradient() {
    let m = MagicScene::default();
    let s = eval(90.0, |f, o| m.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("ring.rotation_deg"), Some(540.0));
    assert_eq!(s.scalar("gradient.angle"), Some(540.0));

    let s = eval(0.0, |f, o| m.evaluate(f, fps30(), o));
    assert!((s.scalar("ring.scale").unwrap() - 1.0).abs() < 1e-12);
    for f in 0..100 {
        let s = eval(f as f64, |f, o| m.evaluate(f, fps30(), o));
        let scale = s.scalar("ring.scale").unwrap();
        assert!((0.9 - 1e-12..=1.1 + 1e-12).contains(&scale));
    }
}

#[test]
fn speed_counter_saturates() {
    let sp = SpeedScene::default();
    let s = eval(12.0, |f, o| sp.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("counter.value"), Some(24.0));
    let s = eval(54.0, |f, o| sp.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("counter.value"), Some(60.0));
}

#[test]
fn features_are_staggered_by_twelve_frames() {
    let fe = FeaturesScene::default();
    let s = eval(12.0, |f, o| fe.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("feature.count"), Some(3.0));
    assert_eq!(s.scalar("feature.0.visible"), Some(1.0));
    assert_eq!(s.scalar("feature.1.visible"), Some(0.0));
    assert_eq!(s.scalar("feature.1.scale"), Some(0.0));
    assert_eq!(s.scalar("feature.2.scale"), Some(0.0));
    assert!(s.scalar("feature.0.scale").unwrap() > 0.0);
}

#[test]
fn cta_glow_pulses_between_half_and_full() {
    let c = CtaScene::default();
    let s = eval(0.0, |f, o| c.evaluate(f, fps30(), o));
    assert_eq!(s.scalar("glow.opacity"), Some(0.75));
    assert_eq!(s.scalar("gradient.intensity"), Some(0.8));
    assert_eq!(s.scalar("url.char_count"), Some(14.0));
}

#[test]
fn stock_scenes_validate() {
    IntroScene::default().validate().unwrap();
    PromptScene::default().validate().unwrap();
    MagicScene::default().validate().unwrap();
    SpeedScene::default().validate().unwrap();
    FeaturesScene::default().validate().unwrap();
    CtaScene::default().validate().unwrap();
}

#[test]
fn settings_that_would_produce_nan_are_config_errors() {
    let config_err = |r: MotifResult<()>| matches!(r, Err(MotifError::Config(_)));

    for frames_per_char in [0.0, -1.5, f64::NAN] {
        let prompt = PromptScene {
            frames_per_char,
            ..PromptScene::default()
        };
        assert!(config_err(prompt.validate()), "{frames_per_char}");
    }

    let speed = SpeedScene {
        counter_per_frame: f64::INFINITY,
        ..SpeedScene::default()
    };
    assert!(config_err(speed.validate()));

    let magic = MagicScene {
        pulse_rate: f64::NAN,
        ..MagicScene::default()
    };
    assert!(config_err(magic.validate()));

    let cta = CtaScene {
        glow_rate: f64::NEG_INFINITY,
        ..CtaScene::default()
    };
    assert!(config_err(cta.validate()));

    let mut orbs = FloatingOrbs::default();
    orbs.orbs[1].speed = f64::NAN;
    let features = FeaturesScene {
        orbs,
        ..FeaturesScene::default()
    };
    assert!(config_err(features.validate()));

    let intro = IntroScene {
        backdrop: IntroScene::default().backdrop.breathing(f64::INFINITY),
        ..IntroScene::default()
    };
    assert!(config_err(intro.validate()));

    let magic = MagicScene {
        caption: TextReveal::new("x", RevealStyle::Wave { amplitude: f64::NAN }),
        ..MagicScene::default()
    };
    assert!(config_err(magic.validate()));
}

#[test]
fn delayed_springs_rest_until_released() {
    let prompt = PromptScene::default();
    let at = |f| eval(f, |f, o| prompt.evaluate(f, fps30(), o));
    assert_eq!(at(30.0).scalar("button.scale"), Some(0.0));
    let direct = spring_value(10.0, fps30(), &prompt.button_spring).unwrap();
    assert_eq!(at(40.0).scalar("button.scale"), Some(direct));

    let features = FeaturesScene::default();
    let s = eval(30.0, |f, o| features.evaluate(f, fps30(), o));
    let third = spring_value(6.0, fps30(), &features.spring).unwrap();
    assert_eq!(s.scalar("feature.2.scale"), Some(third));
}
