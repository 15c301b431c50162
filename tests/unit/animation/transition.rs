use super::*;

fn scale(s: f64) -> Mat4 {
    Mat4::from_rows3([s, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 1.0])
}

#[test]
fn starts_settled_at_identity() {
    let anim = TransformAnimation::default();
    assert_eq!(anim.phase(), AnimationPhase::Settled);
    assert_eq!(anim.current_transform(), Mat4::IDENTITY);
    assert_eq!(anim.rate(), ANIMATION_RATE);
}

#[test]
fn clock_is_monotonic_and_bounded() {
    let mut anim = TransformAnimation::default();
    anim.retarget(scale(2.0));
    let mut prev = anim.clock();
    for dt in [0.0, 0.016, 0.5, 0.0, 1.2, 0.033, 4.0, 0.1] {
        anim.advance(dt);
        let c = anim.clock();
        assert!(c >= prev);
        assert!((0.0..=1.0).contains(&c));
        prev = c;
    }
    assert_eq!(anim.clock(), 1.0);
}

#[test]
fn negative_and_nan_elapsed_do_not_move_clock() {
    let mut anim = TransformAnimation::default();
    anim.retarget(scale(2.0));
    anim.advance(1.0);
    let before = anim.clock();
    anim.advance(-5.0);
    anim.advance(f64::NAN);
    anim.advance(f64::INFINITY);
    assert_eq!(anim.clock(), before);
}

#[test]
fn converges_exactly_after_full_duration() {
    let mut anim = TransformAnimation::default();
    anim.retarget(Mat4::from_rows3([
        0.5, -0.8, 1.0, 0.8, 0.5, 2.0, 0.0, 0.0, 1.0,
    ]));
    for _ in 0..34 {
        anim.advance(0.1);
    }
    assert_eq!(anim.phase(), AnimationPhase::Settled);
    assert_eq!(anim.current_transform(), *anim.target());
}

#[test]
fn still_animating_before_full_duration() {
    let mut anim = TransformAnimation::default();
    anim.retarget(scale(3.0));
    anim.advance(3.0);
    assert_eq!(anim.phase(), AnimationPhase::Animating);
    assert!((anim.clock() - 0.9).abs() < 1e-12);
}

#[test]
fn retarget_starts_from_previous_target() {
    let mut anim = TransformAnimation::default();
    anim.retarget(scale(3.0));
    anim.advance(1.0);
    anim.retarget(Mat4::IDENTITY);
    assert_eq!(*anim.source(), scale(3.0));
    assert_eq!(*anim.target(), Mat4::IDENTITY);
    assert_eq!(anim.clock(), 0.0);
    assert_eq!(anim.current_transform(), scale(3.0));
}

#[test]
fn blends_follow_smoothstep_at_samples() {
    let mut anim = TransformAnimation::default();
    anim.retarget(scale(3.0));
    anim.advance(1.0e9);
    anim.retarget(Mat4::IDENTITY);

    // clock 0
    assert_eq!(anim.current_transform().get(0, 0), 3.0);

    // clock 0.5: smoothstep(0.5) = 0.5
    anim.advance(0.5 / ANIMATION_RATE);
    assert!((anim.clock() - 0.5).abs() < 1e-12);
    let mid = anim.current_transform();
    let blend = anim.clock() * anim.clock() * (3.0 - 2.0 * anim.clock());
    let want = blend * 1.0 + (1.0 - blend) * 3.0;
    assert!((mid.get(0, 0) - want).abs() < 1e-12);
    assert!((mid.get(0, 0) - 2.0).abs() < 1e-9);
    assert_eq!(mid.get(2, 2), 1.0);

    // clock 1
    anim.advance(10.0);
    assert_eq!(anim.current_transform(), Mat4::IDENTITY);
}

#[test]
fn large_elapsed_settles_in_one_frame() {
    let mut anim = TransformAnimation::default();
    anim.retarget(scale(2.0));
    anim.advance(100.0);
    assert_eq!(anim.phase(), AnimationPhase::Settled);
}

#[test]
fn linear_ease_blends_proportionally() {
    let mut anim = TransformAnimation::new(1.0, Ease::Linear);
    anim.retarget(scale(5.0));
    anim.advance(0.25);
    assert!((anim.current_transform().get(0, 0) - 2.0).abs() < 1e-12);
}
