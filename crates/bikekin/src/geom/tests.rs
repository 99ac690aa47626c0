use super::*;
use crate::error::{GeometryError, Step, Triangle};
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

#[test]
fn polar_rotate_and_direction_agree() {
    let p = polar(2.0, FRAC_PI_3);
    assert!((p.norm() - 2.0).abs() < 1e-12);
    assert!((direction_angle(Point2::zeros(), p) - FRAC_PI_3).abs() < 1e-12);
    let q = rotate(vector![1.0, 0.0], FRAC_PI_2);
    assert!((q - vector![0.0, 1.0]).norm() < 1e-12);
    assert!((distance(vector![1.0, 1.0], vector![4.0, 5.0]) - 5.0).abs() < 1e-12);
}

#[test]
fn wrap_angle_range() {
    assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(-PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(0.25) - 0.25).abs() < 1e-12);
    assert!((angular_distance(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-12);
}

#[test]
fn law_of_cosines_right_triangle() {
    // 3-4-5: angle opposite 5 is 90°.
    let ang = law_of_cosines_angle(3.0, 4.0, 5.0, Triangle::Leg).unwrap();
    assert!((ang - FRAC_PI_2).abs() < 1e-12);
    let side = law_of_cosines_side(3.0, 4.0, FRAC_PI_2);
    assert!((side - 5.0).abs() < 1e-12);
}

#[test]
fn law_of_cosines_reports_open_triangle() {
    let err = law_of_cosines_angle(1.0, 1.0, 3.0, Triangle::SeatStay).unwrap_err();
    match err {
        GeometryError::Infeasible { triangle, argument } => {
            assert_eq!(triangle, Triangle::SeatStay);
            assert!(argument < -1.0);
        }
        other => panic!("expected Infeasible, got {other:?}"),
    }
    assert_eq!(
        law_of_cosines_angle(0.0, 1.0, 1.0, Triangle::Leg).unwrap_err(),
        GeometryError::degenerate(Step::Triangle(Triangle::Leg))
    );
    assert!(checked_asin(1.5, Triangle::HubElevation).is_err());
    assert!((checked_asin(1.0, Triangle::HubElevation).unwrap() - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn ground_frame_maps_pivots_and_inverts() {
    let o2 = vector![1.0, 2.0];
    let o4 = vector![4.0, 6.0];
    let f = Rigid2::ground_frame(o2, o4, GeomCfg::default()).unwrap();
    assert!(f.apply(o2).norm() < 1e-12);
    let o4n = f.apply(o4);
    assert!((o4n - vector![5.0, 0.0]).norm() < 1e-12);
    let inv = f.inverse();
    assert!((inv.apply(o4n) - o4).norm() < 1e-12);
    let id = inv.compose(&f);
    assert!((id.m - Rigid2::identity().m).norm() < 1e-12);
    assert!(id.t.norm() < 1e-12);
    assert!((inv.rotation_angle() - 4.0f64.atan2(3.0)).abs() < 1e-12);
}

#[test]
fn ground_frame_rejects_coincident_pivots() {
    let p = vector![3.0, 3.0];
    assert_eq!(
        Rigid2::ground_frame(p, p, GeomCfg::default()).unwrap_err(),
        GeometryError::degenerate(Step::GroundLink)
    );
}
