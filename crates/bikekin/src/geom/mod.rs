//! Planar primitives shared by the frame and four-bar solvers.
//!
//! Purpose
//! - One point type (`Point2 = Vector2<f64>`), a rigid transform (`Rigid2`) and
//!   checked triangle solves that fail loudly instead of clamping.
//!
//! Conventions
//! - Millimetres, radians. The bottom bracket is the origin of every bicycle
//!   coordinate; x points forward, y points up.
//! - Angles are measured counterclockwise from +x.
//!
//! Code cross-refs: `crate::error::{GeometryError, Triangle, Step}`

mod types;
mod util;

pub use types::{GeomCfg, Rigid2};
pub use util::{
    angular_distance, checked_asin, direction_angle, distance, law_of_cosines_angle,
    law_of_cosines_side, polar, rotate, wrap_angle,
};

/// Planar point or displacement in millimetres.
pub type Point2 = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;
