//! Pin-jointed four-bar linkage solved by Freudenstein's equation.
//!
//! Purpose
//! - For two ground pivots in any orientation, three link lengths and a
//!   driving angle, return the coupler point A and both candidate follower
//!   points B (open/crossed assemblies).
//!
//! Why this design
//! - The solve is a pure function; cross-frame branch memory lives in an
//!   explicit `BranchTracker` owned by the caller.
//! - General orientation is handled by a rigid move into the ground frame
//!   (O2 at origin, O4 on +x) and an exact inverse on output. Angles in and out
//!   are in the caller's frame.
//!
//! Code cross-refs: `geom::Rigid2`, `rider::RiderKinematics` (leg and arm).

mod branch;
mod solve;
mod types;

pub use branch::{BranchSeed, BranchTracker};
pub use solve::{solve_fourbar, solve_fourbar_with};
pub use types::{Branch, FourBarSolution, FourBarSpec, LinkageClass};
