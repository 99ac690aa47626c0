//! Frame configuration (tube lengths) and the solved joint positions.

use std::f64::consts::PI;

use crate::error::{check_length, GeomResult};
use crate::geom::{polar, Point2};

/// Fixed bicycle dimensions in millimetres.
///
/// Invariants (checked by `validate`):
/// - Every length is finite and strictly positive.
/// - The solved origin is the bottom bracket; the frame is described in the
///   drive-side plane with the front wheel toward +x.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameConfig {
    pub chain_stay: f64,
    pub seat_tube: f64,
    pub top_tube: f64,
    pub down_tube: f64,
    pub head_tube: f64,
    pub seat_stay: f64,
    pub fork_length: f64,
    pub wheel_diameter: f64,
    pub wheel_base: f64,
    /// Vertical offset of the hub line above the bottom bracket.
    pub bottom_bracket_drop: f64,
    /// Stem: extension of the head-tube line above the front-bar junction.
    pub handlebar_post: f64,
    /// Post to hands distance.
    pub handlebar_length: f64,
    /// Front hub to hands distance.
    pub hands_to_front_wheel: f64,
    /// Brake lever, hanging perpendicular to the handlebar. Optional.
    pub lever_length: Option<f64>,
    pub crank_length: f64,
    pub pedal_length: f64,
}

impl FrameConfig {
    /// A 54-56 cm road frame with 700c wheels; every triangle closes.
    pub fn road_default() -> Self {
        Self {
            chain_stay: 410.0,
            seat_tube: 540.0,
            top_tube: 550.0,
            down_tube: 620.0,
            head_tube: 150.0,
            seat_stay: 530.0,
            fork_length: 400.0,
            wheel_diameter: 680.0,
            wheel_base: 990.0,
            bottom_bracket_drop: 70.0,
            handlebar_post: 100.0,
            handlebar_length: 80.0,
            hands_to_front_wheel: 690.0,
            lever_length: Some(80.0),
            crank_length: 172.5,
            pedal_length: 100.0,
        }
    }

    pub fn validate(&self) -> GeomResult<()> {
        check_length("chain_stay", self.chain_stay)?;
        check_length("seat_tube", self.seat_tube)?;
        check_length("top_tube", self.top_tube)?;
        check_length("down_tube", self.down_tube)?;
        check_length("head_tube", self.head_tube)?;
        check_length("seat_stay", self.seat_stay)?;
        check_length("fork_length", self.fork_length)?;
        check_length("wheel_diameter", self.wheel_diameter)?;
        check_length("wheel_base", self.wheel_base)?;
        check_length("bottom_bracket_drop", self.bottom_bracket_drop)?;
        check_length("handlebar_post", self.handlebar_post)?;
        check_length("handlebar_length", self.handlebar_length)?;
        check_length("hands_to_front_wheel", self.hands_to_front_wheel)?;
        if let Some(lever) = self.lever_length {
            check_length("lever_length", lever)?;
        }
        check_length("crank_length", self.crank_length)?;
        check_length("pedal_length", self.pedal_length)?;
        Ok(())
    }
}

/// Brake lever hanging from the hands point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lever {
    pub end: Point2,
    /// Mid point of the lever, where fingers wrap.
    pub grip: Point2,
}

/// Solved frame joints. Read-only output of `solve_frame`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    pub rear_hub: Point2,
    pub front_hub: Point2,
    pub seat_tube_top: Point2,
    pub fork_top: Point2,
    /// Top tube / head tube junction.
    pub front_bar: Point2,
    pub handlebar_post: Point2,
    pub hands: Point2,
    pub lever: Option<Lever>,
    /// Seat tube to horizontal (rad); the tube leans back toward -x.
    pub seat_tube_angle: f64,
    /// Down tube to horizontal (rad).
    pub down_tube_angle: f64,
    /// Top tube to horizontal (rad).
    pub top_tube_angle: f64,
    /// Direction fork top → front bar (rad).
    pub head_tube_angle: f64,
    pub wheel_radius: f64,
    pub crank_length: f64,
    pub pedal_length: f64,
}

impl FrameGeometry {
    /// Crank-pin positions for crank angle `theta_deg`; the second crank trails by 180°.
    pub fn crank_pins(&self, theta_deg: f64) -> [Point2; 2] {
        let t = theta_deg.to_radians();
        [polar(self.crank_length, t), polar(self.crank_length, t + PI)]
    }

    /// Seat-post top: the seat tube extended `seat_height` beyond its top.
    pub fn seat_position(&self, seat_height: f64) -> Point2 {
        let a = self.seat_tube_angle;
        self.seat_tube_top + Point2::new(-seat_height * a.cos(), seat_height * a.sin())
    }
}
