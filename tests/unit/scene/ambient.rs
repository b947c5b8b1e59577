use super::*;

fn orbs() -> FloatingOrbs {
    FloatingOrbs::new(vec![
        Orb {
            anchor: Vec2::new(0.2, 0.3),
            size: 200.0,
            color: Rgba8::rgb(168, 85, 247),
            speed: 0.02,
        },
        Orb {
            anchor: Vec2::new(0.8, 0.6),
            size: 150.0,
            color: Rgba8::rgb(59, 130, 246),
            speed: 0.015,
        },
    ])
}

#[test]
fn orbs_drift_on_phase_shifted_ellipses() {
    let mut s = VisualSnapshot::new();
    orbs().evaluate(0.0, &mut s);
    assert_eq!(s.scalar("orb.0.offset_x"), Some(20.0));
    assert_eq!(s.scalar("orb.0.offset_y"), Some(0.0));
    assert_eq!(s.scalar("orb.1.offset_x"), Some(1f64.cos() * 20.0));
    assert_eq!(s.scalar("orb.1.offset_y"), Some(1f64.sin() * 30.0));

    let mut later = VisualSnapshot::new();
    orbs().evaluate(100.0, &mut later);
    let y = later.scalar("orb.0.offset_y").unwrap();
    assert!((y - 2f64.sin() * 30.0).abs() < 1e-9);
    assert_eq!(later.scalar("orb.1.size"), Some(150.0));
}

#[test]
fn breathing_gradient_oscillates_around_point_eight() {
    let g = GradientBackdrop::new([Rgba8::rgb(0, 0, 0); 3], 45.0).breathing(0.5);
    assert_eq!(g.intensity(0.0), 0.8);
    for f in 0..500 {
        let v = g.intensity(f as f64);
        assert!((0.6..=1.0).contains(&v));
    }

    let still = GradientBackdrop::new([Rgba8::rgb(0, 0, 0); 3], 90.0);
    let mut s = VisualSnapshot::new();
    still.evaluate_with_angle(270.0, 33.0, &mut s);
    assert_eq!(s.scalar("gradient.angle"), Some(270.0));
    assert_eq!(s.scalar("gradient.intensity"), Some(1.0));
    assert_eq!(s.color("gradient.stop.2"), Some(Rgba8::rgb(0, 0, 0)));
}
