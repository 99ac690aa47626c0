//! Bicycle frame solver: tube lengths → joint positions.
//!
//! Purpose
//! - Position every frame joint (hubs, seat-tube top, fork top, front bar,
//!   handlebar post, hands, optional lever) as a fixed chain of closed-form
//!   triangle solves. No iteration; no clamping of trig arguments.
//!
//! Conventions
//! - Origin at the bottom bracket, x forward, y up, millimetres.
//! - Wheels are level: both hubs sit `bottom_bracket_drop` above the origin.
//!
//! Code cross-refs: `geom::{law_of_cosines_angle, checked_asin}`,
//! `rider::RiderKinematics` (consumes `FrameGeometry`).

mod solve;
mod types;

pub use solve::{solve_frame, solve_frame_with};
pub use types::{FrameConfig, FrameGeometry, Lever};

#[cfg(test)]
mod tests;
