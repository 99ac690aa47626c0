//! Planar kinematics of a bicycle and its rider.
//!
//! Layers (leaves first)
//! - `geom`: points, rigid transforms, checked triangle solves.
//! - `frame`: tube lengths → frame joints (closed-form, acyclic).
//! - `fourbar`: Freudenstein solve of a four-bar in any orientation.
//! - `rider`: legs and arm as four-bars driven by the crank angle.
//!
//! Everything here is pure and single-threaded; the only cross-frame state is
//! the explicit `BranchTracker` each rider owns. Reading configuration files,
//! drawing and animation timing belong to callers (see the `cli` crate).

pub mod api;
pub mod error;
pub mod fourbar;
pub mod frame;
pub mod geom;
pub mod rider;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomResult, GeometryError};
pub use geom::Point2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomResult, GeometryError, Step, Triangle};
    pub use crate::fourbar::{
        solve_fourbar, Branch, BranchSeed, BranchTracker, FourBarSolution, FourBarSpec,
    };
    pub use crate::frame::{solve_frame, FrameConfig, FrameGeometry};
    pub use crate::geom::Point2;
    pub use crate::rider::{
        crank_angles, AngleHistory, AngleSample, FootAngleModel, RiderConfig, RiderFrameState,
        RiderKinematics,
    };
}
