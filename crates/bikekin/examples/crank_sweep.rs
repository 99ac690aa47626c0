//! Knee and hip angle extremes over one crank revolution.
//!
//! Purpose
//! - Reproducible data point for "what knee/hip range does the reference rider
//!   see on the default road frame?", with timing of the full sweep.
//!
//! Code: crates/bikekin/src/rider/kinematics.rs::RiderKinematics::sweep

use std::time::Instant;

use bikekin::frame::FrameConfig;
use bikekin::rider::{crank_angles, RiderConfig, RiderKinematics};

fn main() {
    let frame = FrameConfig::road_default()
        .solve()
        .expect("default frame closes");
    println!(
        "seat_tube_angle={:.3} head_tube_angle={:.3} hands=({:.1}, {:.1})",
        frame.seat_tube_angle.to_degrees(),
        frame.head_tube_angle.to_degrees(),
        frame.hands.x,
        frame.hands.y
    );

    let mut rider =
        RiderKinematics::new(RiderConfig::reference(), &frame).expect("reference rider is valid");
    let angles = crank_angles(0.0, 360.0, 1.0).expect("positive step");

    let start = Instant::now();
    let states = rider.sweep(angles).expect("reference rider pedals the full turn");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    let (knee_lo, knee_hi) = rider.history().knee_range().expect("non-empty sweep");
    let (hip_lo, hip_hi) = rider.history().hip_range().expect("non-empty sweep");
    println!("frames={} sweep_time_ms={elapsed:.3}", states.len());
    println!("knee_deg=[{knee_lo:.2}, {knee_hi:.2}] hip_deg=[{hip_lo:.2}, {hip_hi:.2}]");
    println!("elbow_deg={:.2}", states[0].arm.elbow_angle_deg);
}
