//! Per-frame rider solve: crank angle → foot → leg four-bar, plus the arm four-bar.

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::config::RiderConfig;
use super::foot::{EmpiricalFootAngle, FootAngleModel};
use super::history::{AngleHistory, AngleSample};
use crate::error::{check_length, GeomResult, GeometryError, Triangle};
use crate::fourbar::{
    solve_fourbar, Branch, BranchSeed, BranchTracker, FourBarSolution, FourBarSpec,
};
use crate::frame::FrameGeometry;
use crate::geom::{angular_distance, direction_angle, distance, law_of_cosines_angle, polar, Point2};

/// Phase of each leg relative to the crank angle.
pub const LEG_PHASES_DEG: [f64; 2] = [0.0, 180.0];

/// Flat saddle on top of the seat post.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Saddle {
    pub top: Point2,
    pub aft: Point2,
    pub fwd: Point2,
}

/// Solved leg for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegState {
    pub crank_pin: Point2,
    /// Pedal segment endpoints (rear, front), centred on the crank pin.
    pub pedal: [Point2; 2],
    pub foot_angle_deg: f64,
    pub ankle: Point2,
    /// Toe end of the foot.
    pub foot_end: Point2,
    pub knee: Point2,
    pub branch: Branch,
    pub solution: FourBarSolution,
    /// Interior angle at the knee.
    pub knee_angle_deg: f64,
    /// `90° − (hip corner of the hip/knee/ankle triangle) + hip_to_horizontal`.
    pub hip_angle_deg: f64,
}

/// Solved arm for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmState {
    pub shoulder: Point2,
    pub elbow: Point2,
    pub wrist: Point2,
    pub branch: Branch,
    pub solution: FourBarSolution,
    /// Interior angle at the elbow.
    pub elbow_angle_deg: f64,
}

/// Everything a renderer needs for one rider at one crank angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiderFrameState {
    pub crank_deg: f64,
    pub saddle: Saddle,
    pub hip: Point2,
    pub legs: [LegState; 2],
    pub arm: ArmState,
}

/// One rider on one frame, with the branch memory of its three mechanisms.
///
/// Invariants:
/// - `hip`, `hands` and crank geometry are fixed at construction.
/// - A failed `step` leaves trackers and history unchanged.
#[derive(Clone, Debug)]
pub struct RiderKinematics<M = EmpiricalFootAngle> {
    config: RiderConfig,
    model: M,
    saddle: Saddle,
    hip: Point2,
    hands: Point2,
    crank_length: f64,
    pedal_length: f64,
    leg_trackers: [BranchTracker; 2],
    arm_tracker: BranchTracker,
    history: AngleHistory,
}

impl RiderKinematics<EmpiricalFootAngle> {
    pub fn new(config: RiderConfig, frame: &FrameGeometry) -> GeomResult<Self> {
        Self::with_model(config, frame, EmpiricalFootAngle::default())
    }
}

impl<M: FootAngleModel> RiderKinematics<M> {
    pub fn with_model(config: RiderConfig, frame: &FrameGeometry, model: M) -> GeomResult<Self> {
        config.validate()?;
        let top = frame.seat_position(config.seat_height);
        let saddle = Saddle {
            top,
            aft: top - Vector2::new(config.seat_length_aft, 0.0),
            fwd: top + Vector2::new(config.seat_length_fwd, 0.0),
        };
        let hip = top + config.seat_offset;
        Ok(Self {
            config,
            model,
            saddle,
            hip,
            hands: frame.hands,
            crank_length: frame.crank_length,
            pedal_length: frame.pedal_length,
            leg_trackers: [
                BranchTracker::new(BranchSeed::MaxX),
                BranchTracker::new(BranchSeed::MaxX),
            ],
            arm_tracker: BranchTracker::new(BranchSeed::MinY),
            history: AngleHistory::default(),
        })
    }

    pub fn config(&self) -> &RiderConfig {
        &self.config
    }

    pub fn hip(&self) -> Point2 {
        self.hip
    }

    pub fn saddle(&self) -> Saddle {
        self.saddle
    }

    pub fn history(&self) -> &AngleHistory {
        &self.history
    }

    /// Forget branch memory and history, e.g. before replaying from a new angle.
    pub fn reset(&mut self) {
        for t in &mut self.leg_trackers {
            t.reset();
        }
        self.arm_tracker.reset();
        self.history.clear();
    }

    /// Solve both legs and the arm at `crank_deg`.
    pub fn step(&mut self, crank_deg: f64) -> GeomResult<RiderFrameState> {
        let mut leg_trackers = self.leg_trackers.clone();
        let mut arm_tracker = self.arm_tracker.clone();

        let [t0, t1] = &mut leg_trackers;
        let legs = [
            self.solve_leg(t0, crank_deg + LEG_PHASES_DEG[0])?,
            self.solve_leg(t1, crank_deg + LEG_PHASES_DEG[1])?,
        ];
        let arm = self.solve_arm(&mut arm_tracker)?;

        self.leg_trackers = leg_trackers;
        self.arm_tracker = arm_tracker;
        self.history.record(AngleSample {
            crank_deg,
            knee_deg: legs[0].knee_angle_deg,
            hip_deg: legs[0].hip_angle_deg,
        });
        Ok(RiderFrameState {
            crank_deg,
            saddle: self.saddle,
            hip: self.hip,
            legs,
            arm,
        })
    }

    /// Step through `angles` in order, stopping at the first failure.
    pub fn sweep<I>(&mut self, angles: I) -> GeomResult<Vec<RiderFrameState>>
    where
        I: IntoIterator<Item = f64>,
    {
        angles.into_iter().map(|a| self.step(a)).collect()
    }

    fn solve_leg(&self, tracker: &mut BranchTracker, theta_deg: f64) -> GeomResult<LegState> {
        let cfg = &self.config;
        let crank_pin = polar(self.crank_length, theta_deg.to_radians());
        let foot_angle_deg = self.model.foot_angle_deg(theta_deg);
        let phi = foot_angle_deg.to_radians();
        let toe = Vector2::new(phi.cos(), -phi.sin());

        let half_pedal = self.pedal_length / 2.0;
        let pedal = [crank_pin - toe * half_pedal, crank_pin + toe * half_pedal];
        let contact = cfg.ankle_contact_length();
        let ankle = crank_pin - toe * contact;
        let foot_end = ankle + toe * cfg.foot_length;

        // Driver link crank pin → ankle points along π − φ.
        let spec = FourBarSpec {
            o2: crank_pin,
            o4: self.hip,
            o2a: contact,
            ab: cfg.knee_to_ankle,
            bo4: cfg.hip_to_knee,
        };
        let solution = solve_fourbar(&spec, PI - phi)?;
        let branch = tracker.select(&solution);
        let knee = solution.b(branch);

        let hip_to_ankle = distance(self.hip, solution.a_pos);
        let knee_angle =
            law_of_cosines_angle(cfg.hip_to_knee, cfg.knee_to_ankle, hip_to_ankle, Triangle::Leg)?;
        // Hip corner of the same triangle, referenced to the torso elevation.
        let hip_corner =
            law_of_cosines_angle(cfg.hip_to_knee, hip_to_ankle, cfg.knee_to_ankle, Triangle::Leg)?;
        let hip_angle_deg = 90.0 - hip_corner.to_degrees() + cfg.hip_to_horizontal_deg;

        Ok(LegState {
            crank_pin,
            pedal,
            foot_angle_deg,
            ankle: solution.a_pos,
            foot_end,
            knee,
            branch,
            solution,
            knee_angle_deg: knee_angle.to_degrees(),
            hip_angle_deg,
        })
    }

    fn solve_arm(&self, tracker: &mut BranchTracker) -> GeomResult<ArmState> {
        let cfg = &self.config;
        let spec = FourBarSpec {
            o2: self.hip,
            o4: self.hands,
            o2a: cfg.hip_to_shoulder,
            ab: cfg.shoulder_to_elbow,
            bo4: cfg.elbow_to_wrist,
        };
        let solution = solve_fourbar(&spec, cfg.hip_to_horizontal_deg.to_radians())?;
        let branch = tracker.select(&solution);
        let elbow = solution.b(branch);
        let elbow_angle = angular_distance(
            direction_angle(elbow, solution.a_pos),
            direction_angle(elbow, self.hands),
        );
        Ok(ArmState {
            shoulder: solution.a_pos,
            elbow,
            wrist: self.hands,
            branch,
            solution,
            elbow_angle_deg: elbow_angle.to_degrees(),
        })
    }
}

/// Largest grid `crank_angles` will build.
pub const MAX_CRANK_SAMPLES: usize = 1_000_000;

/// Inclusive crank-angle grid `start, start + step, …, ≤ stop`.
///
/// Fails with `TooManySamples` above `MAX_CRANK_SAMPLES` points.
pub fn crank_angles(start_deg: f64, stop_deg: f64, step_deg: f64) -> GeomResult<Vec<f64>> {
    check_length("step_deg", step_deg)?;
    let n = ((stop_deg - start_deg) / step_deg + 1e-9).floor();
    if n.is_nan() || n < 0.0 {
        return Ok(Vec::new());
    }
    if n >= MAX_CRANK_SAMPLES as f64 {
        return Err(GeometryError::TooManySamples {
            requested: n + 1.0,
            max: MAX_CRANK_SAMPLES,
        });
    }
    Ok((0..=n as usize)
        .map(|k| start_deg + k as f64 * step_deg)
        .collect())
}
