//! Foot angle as a function of crank angle.
//!
//! The default is a curve fit, not a derivation; anything implementing
//! `FootAngleModel` can replace it without touching the leg solve.

/// Foot angle below horizontal (toes down positive), degrees.
pub trait FootAngleModel {
    fn foot_angle_deg(&self, crank_deg: f64) -> f64;
}

/// `amplitude · sin(θ + phase) + mean`, all in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmpiricalFootAngle {
    pub amplitude_deg: f64,
    pub phase_deg: f64,
    pub mean_deg: f64,
}

impl Default for EmpiricalFootAngle {
    fn default() -> Self {
        Self {
            amplitude_deg: 22.0,
            phase_deg: 190.0,
            mean_deg: 20.76,
        }
    }
}

impl FootAngleModel for EmpiricalFootAngle {
    fn foot_angle_deg(&self, crank_deg: f64) -> f64 {
        self.amplitude_deg * (crank_deg + self.phase_deg).to_radians().sin() + self.mean_deg
    }
}

impl<F> FootAngleModel for F
where
    F: Fn(f64) -> f64,
{
    fn foot_angle_deg(&self, crank_deg: f64) -> f64 {
        self(crank_deg)
    }
}
