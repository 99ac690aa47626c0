use super::*;
use crate::error::{GeometryError, Triangle};
use crate::geom::{distance, Point2};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn rear_hub_from_chain_stay_and_drop() {
    let cfg = FrameConfig {
        chain_stay: 450.0,
        bottom_bracket_drop: 70.0,
        ..FrameConfig::road_default()
    };
    let g = solve_frame(&cfg).unwrap();
    assert!(close(g.rear_hub.x, -444.5, 0.05), "x = {}", g.rear_hub.x);
    assert!(close(g.rear_hub.y, 70.0, 1e-12));
    assert!(close(g.front_hub.x - g.rear_hub.x, cfg.wheel_base, 1e-9));
    assert!(close(g.front_hub.y, g.rear_hub.y, 1e-12));
}

#[test]
fn every_tube_length_is_reproduced() {
    let cfg = FrameConfig::road_default();
    let g = cfg.solve().unwrap();
    let tol = 1e-6;
    assert!(close(distance(Point2::zeros(), g.rear_hub), cfg.chain_stay, tol));
    assert!(close(distance(Point2::zeros(), g.seat_tube_top), cfg.seat_tube, tol));
    assert!(close(distance(g.rear_hub, g.seat_tube_top), cfg.seat_stay, tol));
    assert!(close(distance(Point2::zeros(), g.fork_top), cfg.down_tube, tol));
    assert!(close(distance(g.front_hub, g.fork_top), cfg.fork_length, tol));
    assert!(close(distance(g.seat_tube_top, g.front_bar), cfg.top_tube, tol));
    assert!(close(distance(g.front_bar, g.fork_top), cfg.head_tube, tol));
    assert!(close(distance(g.front_bar, g.handlebar_post), cfg.handlebar_post, tol));
    assert!(close(distance(g.handlebar_post, g.hands), cfg.handlebar_length, tol));
    assert!(close(distance(g.front_hub, g.hands), cfg.hands_to_front_wheel, tol));
}

#[test]
fn road_default_has_plausible_shape() {
    let g = solve_frame(&FrameConfig::road_default()).unwrap();
    // Seat tube leans back at roughly 76°, down tube rises at roughly 45°.
    assert!(close(g.seat_tube_angle.to_degrees(), 76.01, 0.05));
    assert!(close(g.down_tube_angle.to_degrees(), 45.31, 0.05));
    assert!(g.seat_tube_top.x < 0.0 && g.seat_tube_top.y > 0.0);
    assert!(g.fork_top.x > 0.0 && g.fork_top.y > 0.0);
    // Post continues the head tube upward, past the front bar.
    assert!(g.handlebar_post.y > g.front_bar.y && g.front_bar.y > g.fork_top.y);
    assert!(close(g.wheel_radius, 340.0, 1e-12));
}

#[test]
fn lever_hangs_perpendicular_to_handlebar() {
    let cfg = FrameConfig::road_default();
    let g = solve_frame(&cfg).unwrap();
    let lever = g.lever.expect("lever configured");
    let bar = g.hands - g.handlebar_post;
    let hang = lever.end - g.hands;
    assert!(close(hang.norm(), 80.0, 1e-9));
    assert!(bar.dot(&hang).abs() < 1e-6);
    assert!(((lever.grip - g.hands).norm() - 40.0).abs() < 1e-9);

    let no_lever = FrameConfig {
        lever_length: None,
        ..cfg
    };
    assert!(solve_frame(&no_lever).unwrap().lever.is_none());
}

#[test]
fn repeated_solves_are_bit_identical() {
    let cfg = FrameConfig::road_default();
    let a = solve_frame(&cfg).unwrap();
    let b = solve_frame(&cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.hands.x.to_bits(), b.hands.x.to_bits());
}

#[test]
fn infeasible_triangles_are_named() {
    let cases = [
        (
            FrameConfig {
                bottom_bracket_drop: 500.0,
                ..FrameConfig::road_default()
            },
            Triangle::ChainStayDrop,
        ),
        (
            FrameConfig {
                seat_stay: 1200.0,
                ..FrameConfig::road_default()
            },
            Triangle::SeatStay,
        ),
        (
            FrameConfig {
                fork_length: 2000.0,
                ..FrameConfig::road_default()
            },
            Triangle::DownTubeFork,
        ),
        (
            FrameConfig {
                head_tube: 5.0,
                ..FrameConfig::road_default()
            },
            Triangle::TopTubeHeadTube,
        ),
        (
            FrameConfig {
                hands_to_front_wheel: 2000.0,
                ..FrameConfig::road_default()
            },
            Triangle::Handlebar,
        ),
    ];
    for (cfg, expected) in cases {
        match solve_frame(&cfg) {
            Err(GeometryError::Infeasible { triangle, argument }) => {
                assert_eq!(triangle, expected);
                assert!(argument.abs() > 1.0);
            }
            other => panic!("expected Infeasible({expected:?}), got {other:?}"),
        }
    }
}

#[test]
fn non_positive_lengths_rejected_before_solving() {
    let cfg = FrameConfig {
        top_tube: 0.0,
        ..FrameConfig::road_default()
    };
    assert_eq!(
        solve_frame(&cfg).unwrap_err(),
        GeometryError::InvalidLength {
            name: "top_tube",
            value: 0.0
        }
    );
    let cfg = FrameConfig {
        lever_length: Some(-1.0),
        ..FrameConfig::road_default()
    };
    assert!(matches!(
        solve_frame(&cfg),
        Err(GeometryError::InvalidLength {
            name: "lever_length",
            ..
        })
    ));
}

#[test]
fn crank_pins_and_seat() {
    let g = solve_frame(&FrameConfig::road_default()).unwrap();
    let [p1, p2] = g.crank_pins(90.0);
    assert!(p1.x.abs() < 1e-9 && close(p1.y, 172.5, 1e-9));
    assert!((p1 + p2).norm() < 1e-9);

    let seat = g.seat_position(120.0);
    assert!(close(distance(seat, g.seat_tube_top), 120.0, 1e-9));
    // Collinear with the seat tube through the origin.
    let cross = seat.x * g.seat_tube_top.y - seat.y * g.seat_tube_top.x;
    assert!(cross.abs() < 1e-6);
    assert!(seat.norm() > g.seat_tube_top.norm());
}
