use crate::geometry::{Point2, Vec2};
use assert_approx_eq::assert_approx_eq;

#[test]
fn point2_zero_constructor() {
    let p = Point2::zero();
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn point2_coordinates_constructor() {
    let p = Point2::new(1.0, -1.0);
    assert_eq!(p.x, 1.0);
    assert_eq!(p.y, -1.0);
}

#[test]
fn point2_sum_vector() {
    let p = Point2::new(1.0, 2.0);
    let v = Vec2::new(4.0, 5.5);
    let res = p + v;
    assert_approx_eq!(res.x, 5.0);
    assert_approx_eq!(res.y, 7.5);
}

#[test]
fn point2_sum_vector_this() {
    let mut p = Point2::new(1.0, 2.0);
    p += Vec2::new(4.0, 5.5);
    assert_approx_eq!(p.x, 5.0);
    assert_approx_eq!(p.y, 7.5);
}

#[test]
fn point2_sub_point() {
    let p1 = Point2::new(1.0, 2.0);
    let p2 = Point2::new(4.0, 5.5);
    let res: Vec2 = p2 - p1;
    assert_approx_eq!(res.x, 3.0);
    assert_approx_eq!(res.y, 3.5);
}

#[test]
fn point2_sub_vector() {
    let p = Point2::new(4.0, 5.5);
    let res: Point2 = p - Vec2::new(1.0, 2.0);
    assert_approx_eq!(res.x, 3.0);
    assert_approx_eq!(res.y, 3.5);
}

#[test]
fn point2_sub_vector_this() {
    let mut p = Point2::new(1.0, 2.0);
    p -= &Vec2::new(4.0, 5.5);
    assert_approx_eq!(p.x, -3.0);
    assert_approx_eq!(p.y, -3.5);
}

#[test]
fn point2_display() {
    let p = Point2::new(0.1, 1.2);
    let str = format!("{}", p);
    assert_eq!(str, "Point2[0.1, 1.2]");
}
