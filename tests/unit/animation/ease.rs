use super::*;

const ALL: [Ease; 2] = [Ease::Linear, Ease::SmoothStep];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(0.5), 0.5);
    }
}

#[test]
fn smoothstep_matches_hermite_formula() {
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        let want = t * t * (3.0 - 2.0 * t);
        assert!((Ease::SmoothStep.apply(t) - want).abs() < 1e-12);
    }
}

#[test]
fn monotonic_on_unit_interval() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=1000 {
            let v = ease.apply(f64::from(i) / 1000.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::SmoothStep.apply(-3.0), 0.0);
    assert_eq!(Ease::SmoothStep.apply(7.0), 1.0);
}

#[test]
fn default_is_smoothstep() {
    assert_eq!(Ease::default(), Ease::SmoothStep);
}
