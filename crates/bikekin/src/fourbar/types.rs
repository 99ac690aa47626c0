//! Four-bar inputs, outputs and assembly-branch labels.

use crate::error::{check_length, GeomResult, GeometryError, Step};
use crate::geom::{direction_angle, distance, GeomCfg, Point2};

/// Pin-jointed four-bar: ground pivots `o2`, `o4` and three moving links.
///
/// Links: `o2a` (driver, O2→A), `ab` (coupler), `bo4` (follower, B→O4).
/// The ground length `d = |O4 - O2|` is derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourBarSpec {
    pub o2: Point2,
    pub o4: Point2,
    pub o2a: f64,
    pub ab: f64,
    pub bo4: f64,
}

/// Grashof classification of a four-bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkageClass {
    /// Driver fully rotates, follower rocks.
    CrankRocker,
    /// Follower fully rotates, driver rocks.
    RockerCrank,
    /// Both ground-adjacent links fully rotate.
    DoubleCrank,
    /// Grashof with the coupler shortest: neither ground link fully rotates.
    DoubleRocker,
    /// `s + l = p + q`: passes through a flattened configuration.
    ChangePoint,
    /// `s + l > p + q`: triple rocker.
    NonGrashof,
}

impl FourBarSpec {
    /// Validated constructor: positive finite links, distinct pivots.
    pub fn new(o2: Point2, o4: Point2, o2a: f64, ab: f64, bo4: f64) -> GeomResult<Self> {
        let spec = Self {
            o2,
            o4,
            o2a,
            ab,
            bo4,
        };
        spec.validate(GeomCfg::default())?;
        Ok(spec)
    }

    pub fn validate(&self, cfg: GeomCfg) -> GeomResult<()> {
        check_length("o2a", self.o2a)?;
        check_length("ab", self.ab)?;
        check_length("bo4", self.bo4)?;
        if self.ground_length() <= cfg.eps_zero {
            return Err(GeometryError::degenerate(Step::GroundLink));
        }
        Ok(())
    }

    #[inline]
    pub fn ground_length(&self) -> f64 {
        distance(self.o2, self.o4)
    }

    /// Direction O2 → O4 in the caller's frame.
    #[inline]
    pub fn ground_angle(&self) -> f64 {
        direction_angle(self.o2, self.o4)
    }

    fn sorted_links(&self) -> [f64; 4] {
        let mut l = [self.ground_length(), self.o2a, self.ab, self.bo4];
        l.sort_by(f64::total_cmp);
        l
    }

    /// Grashof condition `s + l <= p + q`.
    pub fn is_grashof(&self) -> bool {
        let [s, p, q, l] = self.sorted_links();
        s + l <= p + q
    }

    pub fn classify(&self) -> LinkageClass {
        let [s, p, q, l] = self.sorted_links();
        let lhs = s + l;
        let rhs = p + q;
        let tol = 1e-9 * rhs.max(1.0);
        if (lhs - rhs).abs() <= tol {
            return LinkageClass::ChangePoint;
        }
        if lhs > rhs {
            return LinkageClass::NonGrashof;
        }
        if s == self.ground_length() {
            LinkageClass::DoubleCrank
        } else if s == self.o2a {
            LinkageClass::CrankRocker
        } else if s == self.bo4 {
            LinkageClass::RockerCrank
        } else {
            LinkageClass::DoubleRocker
        }
    }
}

/// One of the two assembly modes for a given driving angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// `+√disc` root.
    First,
    /// `-√disc` root.
    Second,
}

impl Branch {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Branch::First => 0,
            Branch::Second => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Branch {
        match self {
            Branch::First => Branch::Second,
            Branch::Second => Branch::First,
        }
    }

    pub const BOTH: [Branch; 2] = [Branch::First, Branch::Second];
}

/// Both assemblies of a four-bar at one driving angle, in the caller's frame.
///
/// Invariants:
/// - `a_pos` is single-valued; `b_pos[i]`, `theta4[i]`, `theta3[i]` share branch `i`.
/// - Angles are in `(-π, π]`, measured from the caller's +x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourBarSolution {
    pub theta2: f64,
    pub theta4: [f64; 2],
    /// Coupler direction A → B per branch.
    pub theta3: [f64; 2],
    pub a_pos: Point2,
    pub b_pos: [Point2; 2],
    pub discriminant: f64,
}

impl FourBarSolution {
    #[inline]
    pub fn b(&self, branch: Branch) -> Point2 {
        self.b_pos[branch.index()]
    }

    #[inline]
    pub fn theta4_of(&self, branch: Branch) -> f64 {
        self.theta4[branch.index()]
    }

    #[inline]
    pub fn theta3_of(&self, branch: Branch) -> f64 {
        self.theta3[branch.index()]
    }

    /// Worst absolute link-length residual over both branches.
    pub fn check_closure(&self, spec: &FourBarSpec) -> f64 {
        let mut worst = (distance(spec.o2, self.a_pos) - spec.o2a).abs();
        for b in self.b_pos {
            worst = worst
                .max((distance(self.a_pos, b) - spec.ab).abs())
                .max((distance(b, spec.o4) - spec.bo4).abs());
        }
        worst
    }
}
