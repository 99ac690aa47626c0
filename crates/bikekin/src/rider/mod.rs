//! Rider kinematics: legs and arm as four-bars driven by the crank.
//!
//! Purpose
//! - For each crank angle, place crank pin, pedal and foot, solve the leg
//!   four-bar (crank pin, ankle, knee, hip) for both legs and the arm four-bar
//!   (hip, shoulder, elbow, hands), and report knee/hip angles.
//!
//! Model
//! - Leg: `O2` = crank pin, `O4` = hip, links (ankle contact, shin, thigh),
//!   driving angle `π − foot angle`.
//! - Arm: `O2` = hip, `O4` = hands, links (torso, upper arm, forearm), driving
//!   angle = fixed torso elevation.
//! - Foot angle comes from a replaceable `FootAngleModel`.
//!
//! Code cross-refs: `frame::FrameGeometry`, `fourbar::{solve_fourbar, BranchTracker}`

mod config;
mod foot;
mod history;
mod kinematics;

pub use config::RiderConfig;
pub use foot::{EmpiricalFootAngle, FootAngleModel};
pub use history::{AngleHistory, AngleSample};
pub use kinematics::{
    crank_angles, ArmState, LegState, RiderFrameState, RiderKinematics, Saddle, LEG_PHASES_DEG,
    MAX_CRANK_SAMPLES,
};
