//! Sequential triangle solves from tube lengths to joint positions.
//!
//! Order (each step reads only earlier results):
//! rear hub → front hub → seat-tube top → fork top → front bar → post → hands → lever.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector2;

use super::types::{FrameConfig, FrameGeometry, Lever};
use crate::error::{GeomResult, GeometryError, Step, Triangle};
use crate::geom::{
    checked_asin, direction_angle, distance, law_of_cosines_angle, law_of_cosines_side, polar,
    GeomCfg, Point2,
};

/// Solve every frame joint with default tolerances.
pub fn solve_frame(cfg: &FrameConfig) -> GeomResult<FrameGeometry> {
    solve_frame_with(cfg, GeomCfg::default())
}

/// Solve every frame joint. Pure; identical input gives bit-identical output.
pub fn solve_frame_with(cfg: &FrameConfig, geom: GeomCfg) -> GeomResult<FrameGeometry> {
    cfg.validate()?;
    let drop = cfg.bottom_bracket_drop;

    // Rear hub: right triangle chain stay / drop.
    let chain_stay_angle = checked_asin(drop / cfg.chain_stay, Triangle::ChainStayDrop)?;
    let xcs = (cfg.chain_stay * cfg.chain_stay - drop * drop).sqrt();
    let rear_hub = Vector2::new(-xcs, drop);
    let front_hub = Vector2::new(rear_hub.x + cfg.wheel_base, drop);

    // Seat-tube top.
    let seat_to_chain =
        law_of_cosines_angle(cfg.chain_stay, cfg.seat_tube, cfg.seat_stay, Triangle::SeatStay)?;
    let seat_tube_angle = chain_stay_angle + seat_to_chain;
    let seat_tube_top = Vector2::new(
        -cfg.seat_tube * seat_tube_angle.cos(),
        cfg.seat_tube * seat_tube_angle.sin(),
    );

    // Fork top.
    let hub_to_front = drop.hypot(cfg.wheel_base - xcs);
    if hub_to_front <= geom.eps_zero {
        return Err(GeometryError::degenerate(Step::Triangle(Triangle::HubElevation)));
    }
    let hub_elevation = checked_asin(drop / hub_to_front, Triangle::HubElevation)?;
    let down_to_hub =
        law_of_cosines_angle(cfg.down_tube, hub_to_front, cfg.fork_length, Triangle::DownTubeFork)?;
    let down_tube_angle = down_to_hub + hub_elevation;
    let fork_top = polar(cfg.down_tube, down_tube_angle);

    // Front bar: seat-tube top → fork top distance, then the top-tube triangle.
    let seat_to_down = PI - seat_tube_angle - down_tube_angle;
    let seat_to_fork = law_of_cosines_side(cfg.seat_tube, cfg.down_tube, seat_to_down);
    if seat_to_fork <= geom.eps_zero {
        return Err(GeometryError::degenerate(Step::Triangle(Triangle::TopTubeHeadTube)));
    }
    // Additive acos + asin, no quadrant normalization: valid while the fork top
    // sits ahead of the seat-tube top.
    let seat_to_fork_elevation = checked_asin(
        (fork_top.y - seat_tube_top.y) / seat_to_fork,
        Triangle::SeatToForkElevation,
    )?;
    let top_tube_angle = law_of_cosines_angle(
        cfg.top_tube,
        seat_to_fork,
        cfg.head_tube,
        Triangle::TopTubeHeadTube,
    )? + seat_to_fork_elevation;
    let front_bar = seat_tube_top + polar(cfg.top_tube, top_tube_angle);

    // Handlebar post continues the head-tube line upward.
    if distance(front_bar, fork_top) <= geom.eps_zero {
        return Err(GeometryError::degenerate(Step::HeadTube));
    }
    let head_tube_angle = direction_angle(fork_top, front_bar);
    let handlebar_post = front_bar + polar(cfg.handlebar_post, head_tube_angle);

    let hands = solve_hands(cfg, front_hub, handlebar_post, geom)?;
    let lever = match cfg.lever_length {
        Some(len) => Some(solve_lever(len, handlebar_post, hands, geom)?),
        None => None,
    };

    Ok(FrameGeometry {
        rear_hub,
        front_hub,
        seat_tube_top,
        fork_top,
        front_bar,
        handlebar_post,
        hands,
        lever,
        seat_tube_angle,
        down_tube_angle,
        top_tube_angle,
        head_tube_angle,
        wheel_radius: cfg.wheel_diameter / 2.0,
        crank_length: cfg.crank_length,
        pedal_length: cfg.pedal_length,
    })
}

/// Triangulate the hands from the front hub; always the rearward-rotated root.
fn solve_hands(
    cfg: &FrameConfig,
    front_hub: Point2,
    post: Point2,
    geom: GeomCfg,
) -> GeomResult<Point2> {
    let wheel_to_post = distance(front_hub, post);
    if wheel_to_post <= geom.eps_zero {
        return Err(GeometryError::degenerate(Step::HandsToFrontWheel));
    }
    // Elevation of the post seen from the hub, measured from -x.
    let post_elevation = (post.y - front_hub.y).atan2(front_hub.x - post.x);
    let spread = law_of_cosines_angle(
        cfg.hands_to_front_wheel,
        wheel_to_post,
        cfg.handlebar_length,
        Triangle::Handlebar,
    )?;
    Ok(front_hub + polar(cfg.hands_to_front_wheel, PI - (post_elevation + spread)))
}

fn solve_lever(len: f64, post: Point2, hands: Point2, geom: GeomCfg) -> GeomResult<Lever> {
    if distance(post, hands) <= geom.eps_zero {
        return Err(GeometryError::degenerate(Step::HandlebarDirection));
    }
    let angle = direction_angle(post, hands) - FRAC_PI_2;
    Ok(Lever {
        end: hands + polar(len, angle),
        grip: hands + polar(len / 2.0, angle),
    })
}

impl FrameConfig {
    /// Shorthand for [`solve_frame`].
    pub fn solve(&self) -> GeomResult<FrameGeometry> {
        solve_frame(self)
    }
}
