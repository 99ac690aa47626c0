//! Tolerances and the rigid transform used to normalize mechanisms.
//!
//! - `GeomCfg`: the single "is this denominator zero" tolerance.
//! - `Rigid2`: `x ↦ M x + t` with `M ∈ SO(2)`.

use nalgebra::{Matrix2, Vector2};

use crate::error::{GeomResult, GeometryError, Step};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Distances at or below this are treated as coincident points.
    pub eps_zero: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_zero: 1e-12 }
    }
}

/// 2D rigid map: `x ↦ M x + t`, `M` a rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rigid2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Rigid2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Rotation by `angle` about the origin followed by translation `t`.
    #[inline]
    pub fn from_angle_translation(angle: f64, t: Vector2<f64>) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t,
        }
    }

    /// Frame in which `o2` is the origin and `o4` lies on the positive x-axis.
    ///
    /// Fails when the pivots coincide (the ground direction is undefined).
    pub fn ground_frame(o2: Vector2<f64>, o4: Vector2<f64>, cfg: GeomCfg) -> GeomResult<Self> {
        let g = o4 - o2;
        if g.norm() <= cfg.eps_zero {
            return Err(GeometryError::degenerate(Step::GroundLink));
        }
        let rot = Self::from_angle_translation(-g.y.atan2(g.x), Vector2::zeros());
        Ok(Self {
            m: rot.m,
            t: -(rot.m * o2),
        })
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// Exact inverse: `M^T`, `-M^T t`.
    #[inline]
    pub fn inverse(&self) -> Self {
        let mt = self.m.transpose();
        Self {
            m: mt,
            t: -(mt * self.t),
        }
    }

    /// Counterclockwise rotation angle of `M` in `(-π, π]`.
    #[inline]
    pub fn rotation_angle(&self) -> f64 {
        self.m[(1, 0)].atan2(self.m[(0, 0)])
    }

    /// `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Rigid2) -> Rigid2 {
        Rigid2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
}
