//! Freudenstein solve of the follower angle.
//!
//! Steps
//! 1. Move to the ground frame: O2 at the origin, O4 on +x.
//! 2. Freudenstein coefficients; quadratic in `tan(θ4/2)`.
//! 3. Place A and both B candidates, map back to the caller's frame.

use nalgebra::Vector2;

use super::types::{FourBarSolution, FourBarSpec};
use crate::error::{GeomResult, GeometryError};
use crate::geom::{direction_angle, polar, wrap_angle, GeomCfg, Rigid2};

/// Freudenstein coefficients for the follower (θ4) family.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Freudenstein {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Freudenstein {
    /// `a = O2A`, `b = AB`, `c = BO4`, `d = |O2O4|`, `t` driving angle in the ground frame.
    pub fn new(a: f64, b: f64, c: f64, d: f64, t: f64) -> Self {
        let k1 = d / a;
        let k2 = d / c;
        let k3 = (a * a + c * c + d * d - b * b) / (2.0 * a * c);
        let (s, ct) = t.sin_cos();
        Self {
            a: ct - k1 - k2 * ct + k3,
            b: -2.0 * s,
            c: k1 - (k2 + 1.0) * ct + k3,
        }
    }

    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Both roots `θ4 = 2·atan2(-B ± √disc, 2A)`; `None` if no real root.
    pub fn roots(&self) -> Option<[f64; 2]> {
        let disc = self.discriminant();
        if disc.is_nan() || disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        Some([self.half_angle_root(s), self.half_angle_root(-s)])
    }

    /// `tan(θ4/2) = (-B + s)/(2A) = 2C/(-B - s)`; use whichever pair carries more digits.
    fn half_angle_root(&self, s: f64) -> f64 {
        let (num, den) = (-self.b + s, 2.0 * self.a);
        let (alt_num, alt_den) = (2.0 * self.c, -self.b - s);
        if num.abs() + den.abs() >= alt_num.abs() + alt_den.abs() {
            2.0 * num.atan2(den)
        } else {
            2.0 * alt_num.atan2(alt_den)
        }
    }
}

/// Solve with default tolerances.
pub fn solve_fourbar(spec: &FourBarSpec, theta2: f64) -> GeomResult<FourBarSolution> {
    solve_fourbar_with(spec, theta2, GeomCfg::default())
}

/// Solve both assembly branches at driving angle `theta2` (caller's frame).
///
/// Errors
/// - `InvalidLength` / `DegenerateDivision` for a malformed spec.
/// - `Unreachable` when the discriminant is negative (the loop cannot close).
pub fn solve_fourbar_with(
    spec: &FourBarSpec,
    theta2: f64,
    cfg: GeomCfg,
) -> GeomResult<FourBarSolution> {
    spec.validate(cfg)?;
    let to_ground = Rigid2::ground_frame(spec.o2, spec.o4, cfg)?;
    let from_ground = to_ground.inverse();
    let ground = from_ground.rotation_angle();
    let d = spec.ground_length();
    let t = theta2 - ground;

    let fr = Freudenstein::new(spec.o2a, spec.ab, spec.bo4, d, t);
    let discriminant = fr.discriminant();
    let Some(local_theta4) = fr.roots() else {
        return Err(GeometryError::Unreachable {
            theta2,
            discriminant,
        });
    };

    let a_pos = from_ground.apply(polar(spec.o2a, t));
    let o4_local = Vector2::new(d, 0.0);
    let b_pos = local_theta4.map(|t4| from_ground.apply(o4_local + polar(spec.bo4, t4)));
    let theta4 = local_theta4.map(|t4| wrap_angle(t4 + ground));
    let theta3 = b_pos.map(|b| direction_angle(a_pos, b));

    Ok(FourBarSolution {
        theta2,
        theta4,
        theta3,
        a_pos,
        b_pos,
        discriminant,
    })
}

impl FourBarSpec {
    /// Shorthand for [`solve_fourbar`].
    pub fn solve(&self, theta2: f64) -> GeomResult<FourBarSolution> {
        solve_fourbar(self, theta2)
    }
}
