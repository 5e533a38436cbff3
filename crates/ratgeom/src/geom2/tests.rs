use super::*;
use crate::rational::{Rational, RoundingMode};
use nalgebra::{Point2, Vector2 as NVector2};

#[test]
fn affine_rules_hold() {
    let a = Vertex2::new(1, 2);
    let b = Vertex2::new(4, -2);
    let d = &b - &a;
    assert_eq!(d, Vector2::new(3, -4));
    assert_eq!(&a + &d, b);
    assert_eq!(&b - &d, a);
    assert_eq!(&d + &a, b);
    assert_eq!(d.length_squared(), Rational::from(25));
}

#[test]
fn cross_is_z_component_and_r90_is_clockwise() {
    let x = Vector2::new(1, 0);
    let y = Vector2::new(0, 1);
    assert_eq!(x.cross(&y), Rational::from(1));
    assert_eq!(y.cross(&x), Rational::from(-1));
    assert_eq!(y.r90(), x);
    assert!(x.is_perpendicular_to(&y));
    assert!(Vector2::new(2, 4).is_parallel_to(&Vector2::new(-1, -2)));
}

#[test]
fn decomposition_sums_back() {
    let v = Vector2::new(3, 7);
    let axis = Vector2::new(2, 1);
    let along = v.component_along(&axis).unwrap();
    let ortho = v.component_ortho(&axis).unwrap();
    assert!(along.is_parallel_to(&axis));
    assert!(ortho.is_perpendicular_to(&axis));
    assert_eq!(&along + &ortho, v);
    assert!(v.scaled_length_along(&Vector2::zero()).is_err());
}

#[test]
fn nalgebra_boundary() {
    let p = Vertex2::try_from_point(&Point2::new(0.25, -3.0)).unwrap();
    assert_eq!(p, Vertex2::new(Rational::new(1, 4).unwrap(), -3));
    assert_eq!(p.to_point(RoundingMode::Round), Point2::new(0.25, -3.0));
    let v = Vector2::try_from_nalgebra(&NVector2::new(f64::NAN, 0.0));
    assert!(v.is_err());
}
