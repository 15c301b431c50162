use super::*;

#[test]
fn identity_rows_pack_to_identity() {
    let m = Mat4::from_rows3([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(m, Mat4::IDENTITY);
    assert_eq!(Mat4::default(), Mat4::IDENTITY);
}

#[test]
fn packing_places_linear_translation_and_projective_cells() {
    let m = Mat4::from_rows3([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(0, 3), 3.0);
    assert_eq!(m.get(1, 0), 4.0);
    assert_eq!(m.get(1, 1), 5.0);
    assert_eq!(m.get(1, 3), 6.0);
    assert_eq!(m.get(3, 0), 7.0);
    assert_eq!(m.get(3, 1), 8.0);
    assert_eq!(m.get(3, 3), 9.0);
    assert_eq!(m.get(2, 2), 1.0);
    assert_eq!(m.to_rows3(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn linear_application_ignores_translation() {
    let m = Mat4::from_rows3([0.0, -1.0, 10.0, 1.0, 0.0, 20.0, 0.0, 0.0, 1.0]);
    let p = m.apply_linear(Point::new(2.0, 3.0));
    assert_eq!(p, Point::new(-3.0, 2.0));

    let full = m.to_affine() * Point::new(2.0, 3.0);
    assert_eq!(full, Point::new(7.0, 22.0));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Mat4::IDENTITY;
    let b = Mat4::from_rows3([3.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(Mat4::lerp(&a, &b, 0.0), a);
    assert_eq!(Mat4::lerp(&a, &b, 1.0), b);
    let mid = Mat4::lerp(&a, &b, 0.5);
    assert_eq!(mid.get(0, 0), 2.0);
    assert_eq!(mid.get(1, 1), 2.0);
    assert_eq!(mid.get(2, 2), 1.0);
}

#[test]
fn rgb_quantizes_and_clamps() {
    assert_eq!(Rgb::new(1.0, 0.0, 0.5).to_rgba8(), [255, 0, 128, 255]);
    assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_rgba8(), [255, 0, 0, 255]);
}

#[test]
fn viewport_rejects_empty_and_reports_aspect() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    let v = Viewport::new(1600, 800).unwrap();
    assert_eq!(v.aspect(), 2.0);
}
