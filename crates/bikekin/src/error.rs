//! Typed failures of the geometric solvers.
//!
//! Every error is a property of the input lengths/pivots, never transient: the
//! same input reproduces the same failure, so callers should report, not retry.

use std::fmt;

use thiserror::Error;

/// Result alias used across the crate.
pub type GeomResult<T> = Result<T, GeometryError>;

/// Triangles solved by law of cosines / arc-sine anywhere in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Triangle {
    /// Right triangle chain stay / bottom-bracket drop.
    ChainStayDrop,
    /// Chain stay / seat tube / seat stay.
    SeatStay,
    /// Right triangle drop / rear hub to front hub span.
    HubElevation,
    /// Down tube / hub-to-front-wheel / fork length.
    DownTubeFork,
    /// Elevation of the seat-tube-top to fork-top line.
    SeatToForkElevation,
    /// Top tube / seat-tube-to-fork distance / head tube.
    TopTubeHeadTube,
    /// Hands-to-front-wheel / post-to-wheel distance / handlebar length.
    Handlebar,
    /// Hip / knee / ankle triangle of a leg.
    Leg,
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Triangle::ChainStayDrop => "chain stay / bottom-bracket drop",
            Triangle::SeatStay => "chain stay / seat tube / seat stay",
            Triangle::HubElevation => "bottom-bracket drop / hub-to-front-wheel",
            Triangle::DownTubeFork => "down tube / hub-to-front-wheel / fork",
            Triangle::SeatToForkElevation => "seat-tube top / fork top elevation",
            Triangle::TopTubeHeadTube => "top tube / seat-tube-to-fork / head tube",
            Triangle::Handlebar => "hands-to-front-wheel / post-to-wheel / handlebar",
            Triangle::Leg => "hip / knee / ankle",
        };
        f.write_str(name)
    }
}

/// Geometric steps that divide by a computed distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Four-bar ground link: `O2` and `O4` coincide.
    GroundLink,
    /// Head-tube direction: fork top and front-bar junction coincide.
    HeadTube,
    /// Front hub and handlebar post coincide.
    HandsToFrontWheel,
    /// Handlebar direction: post and hands coincide.
    HandlebarDirection,
    /// A law-of-cosines solve with a zero adjacent side.
    Triangle(Triangle),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::GroundLink => f.write_str("four-bar ground link O2-O4"),
            Step::HeadTube => f.write_str("head tube direction"),
            Step::HandsToFrontWheel => f.write_str("front hub to handlebar post distance"),
            Step::HandlebarDirection => f.write_str("handlebar direction"),
            Step::Triangle(t) => write!(f, "{t} triangle"),
        }
    }
}

/// Failures of the frame, four-bar and rider solvers.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The configured lengths cannot form the named triangle.
    #[error("{triangle} triangle cannot close (trig argument {argument:.6} outside [-1, 1])")]
    Infeasible { triangle: Triangle, argument: f64 },

    /// No real four-bar assembly exists at this driving angle.
    #[error("four-bar cannot close at theta2 = {theta2:.6} rad (discriminant {discriminant:.6e})")]
    Unreachable { theta2: f64, discriminant: f64 },

    /// A computed denominator vanished (coincident points).
    #[error("degenerate geometry: {step} has zero length")]
    DegenerateDivision { step: Step },

    /// A configured length is not strictly positive and finite.
    #[error("invalid length `{name}` = {value}")]
    InvalidLength { name: &'static str, value: f64 },

    /// A crank-angle grid would exceed the sample cap.
    #[error("crank angle grid of {requested:.0} samples exceeds the limit of {max}")]
    TooManySamples { requested: f64, max: usize },
}

impl GeometryError {
    #[must_use]
    pub const fn infeasible(triangle: Triangle, argument: f64) -> Self {
        Self::Infeasible { triangle, argument }
    }

    #[must_use]
    pub const fn degenerate(step: Step) -> Self {
        Self::DegenerateDivision { step }
    }
}

/// Reject non-positive or non-finite lengths.
pub(crate) fn check_length(name: &'static str, value: f64) -> GeomResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidLength { name, value })
    }
}
