//! Curated surface for the binary and experiments (UNSTABLE).
//!
//! Not a stable API; re-exports move with the modules they come from.

// Primitives
pub use crate::geom::{
    angular_distance, checked_asin, direction_angle, distance, law_of_cosines_angle,
    law_of_cosines_side, polar, rotate, wrap_angle, GeomCfg, Point2, Rigid2,
};
// Frame
pub use crate::frame::{solve_frame, solve_frame_with, FrameConfig, FrameGeometry, Lever};
// Four-bar
pub use crate::fourbar::{
    solve_fourbar, solve_fourbar_with, Branch, BranchSeed, BranchTracker, FourBarSolution,
    FourBarSpec, LinkageClass,
};
// Rider
pub use crate::rider::{
    crank_angles, AngleHistory, AngleSample, ArmState, EmpiricalFootAngle, FootAngleModel,
    LegState, RiderConfig, RiderFrameState, RiderKinematics, Saddle,
};

use crate::error::GeomResult;

/// Solve the frame, then run one rider over `angles`, returning the rider
/// (with its angle history) and every frame state.
pub fn simulate(
    frame: &FrameConfig,
    rider: RiderConfig,
    angles: impl IntoIterator<Item = f64>,
) -> GeomResult<(RiderKinematics, Vec<RiderFrameState>)> {
    let geometry = solve_frame(frame)?;
    let mut kin = RiderKinematics::new(rider, &geometry)?;
    let states = kin.sweep(angles)?;
    Ok((kin, states))
}
