use super::*;
use crate::foundation::core::Point;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn height_is_fixed_and_width_follows_aspect() {
    let p = Projection::ortho(Viewport::new(1600, 800).unwrap(), 20.0);
    assert_eq!(p.world.height(), 20.0);
    assert_eq!(p.world.width(), 40.0);
    assert_eq!(p.world.center(), Point::ORIGIN);

    let tall = Projection::ortho(Viewport::new(400, 800).unwrap(), 20.0);
    assert_eq!(tall.world.width(), 10.0);
}

#[test]
fn world_corners_map_to_pixel_corners() {
    let p = Projection::ortho(Viewport::new(200, 100).unwrap(), 20.0);
    let m = p.world_to_pixel();
    assert!(approx(m * Point::new(-20.0, 10.0), Point::new(0.0, 0.0)));
    assert!(approx(m * Point::new(20.0, -10.0), Point::new(200.0, 100.0)));
    assert!(approx(m * Point::ORIGIN, Point::new(100.0, 50.0)));
    assert_eq!(p.pixels_per_unit(), 5.0);
}

#[test]
fn zero_height_viewport_does_not_divide_by_zero() {
    let p = Projection::ortho(
        Viewport {
            width: 64,
            height: 0,
        },
        20.0,
    );
    assert!(p.world.width().is_finite());
    assert!(p.pixels_per_unit().is_finite());
}
