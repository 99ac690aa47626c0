use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::error::{GeomResult, GeometryError, Step, Triangle};

#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p - q).norm()
}

/// Point at `len` along direction `angle` from the origin.
#[inline]
pub fn polar(len: f64, angle: f64) -> Vector2<f64> {
    let (s, c) = angle.sin_cos();
    Vector2::new(len * c, len * s)
}

/// Direction of `to - from`, in `(-π, π]`.
#[inline]
pub fn direction_angle(from: Vector2<f64>, to: Vector2<f64>) -> f64 {
    let v = to - from;
    v.y.atan2(v.x)
}

/// Rotate `p` counterclockwise about the origin.
#[inline]
pub fn rotate(p: Vector2<f64>, angle: f64) -> Vector2<f64> {
    let (s, c) = angle.sin_cos();
    Vector2::new(c * p.x - s * p.y, s * p.x + c * p.y)
}

/// Wrap to `(-π, π]`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let w = angle.rem_euclid(TAU);
    if w > PI {
        w - TAU
    } else {
        w
    }
}

/// Shortest unsigned angular distance between two directions, in `[0, π]`.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    wrap_angle(a - b).abs()
}

/// Angle opposite `opposite` in the triangle with sides `adj1`, `adj2`, `opposite`.
///
/// Errors
/// - `DegenerateDivision` if an adjacent side is zero.
/// - `Infeasible` if the arc-cosine argument leaves `[-1, 1]` (triangle inequality fails).
pub fn law_of_cosines_angle(
    adj1: f64,
    adj2: f64,
    opposite: f64,
    triangle: Triangle,
) -> GeomResult<f64> {
    let denom = 2.0 * adj1 * adj2;
    if denom == 0.0 || !denom.is_finite() {
        return Err(GeometryError::degenerate(Step::Triangle(triangle)));
    }
    let arg = (adj1 * adj1 + adj2 * adj2 - opposite * opposite) / denom;
    if !(-1.0..=1.0).contains(&arg) {
        return Err(GeometryError::infeasible(triangle, arg));
    }
    Ok(arg.acos())
}

/// Side opposite `included` between sides `adj1` and `adj2`.
#[inline]
pub fn law_of_cosines_side(adj1: f64, adj2: f64, included: f64) -> f64 {
    // round-off can push an exactly-degenerate triangle slightly below zero
    (adj1 * adj1 + adj2 * adj2 - 2.0 * adj1 * adj2 * included.cos())
        .max(0.0)
        .sqrt()
}

/// `asin(x)` that reports the triangle instead of returning NaN.
pub fn checked_asin(x: f64, triangle: Triangle) -> GeomResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(GeometryError::infeasible(triangle, x));
    }
    Ok(x.asin())
}
