use crate::error::{check_length, GeomResult, GeometryError};
use crate::geom::Point2;

/// Anthropometric lengths of one rider, millimetres and degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct RiderConfig {
    pub hip_to_knee: f64,
    pub knee_to_ankle: f64,
    pub foot_length: f64,
    /// Fraction of the foot behind the pedal contact, in `(0, 1]`.
    pub foot_contact_proportion: f64,
    pub hip_to_shoulder: f64,
    pub shoulder_to_elbow: f64,
    /// Elbow to the wrist's contact with the bar.
    pub elbow_to_wrist: f64,
    /// Wrist to finger hold point; carried for renderers only.
    pub wrist_to_grip: f64,
    /// Seat post extension beyond the seat-tube top.
    pub seat_height: f64,
    pub seat_length_aft: f64,
    pub seat_length_fwd: f64,
    /// Hip joint relative to the saddle top.
    pub seat_offset: Point2,
    /// Torso (hip → shoulder) elevation; drives the arm mechanism.
    pub hip_to_horizontal_deg: f64,
}

impl RiderConfig {
    /// Average adult rider; fits `FrameConfig::road_default`.
    pub fn reference() -> Self {
        Self {
            hip_to_knee: 440.0,
            knee_to_ankle: 410.0,
            foot_length: 210.0,
            foot_contact_proportion: 0.75,
            hip_to_shoulder: 430.0,
            shoulder_to_elbow: 290.0,
            elbow_to_wrist: 230.0,
            wrist_to_grip: 135.0,
            seat_height: 70.0,
            seat_length_aft: 120.0,
            seat_length_fwd: 150.0,
            seat_offset: Point2::new(25.0, 110.0),
            hip_to_horizontal_deg: 60.0,
        }
    }

    pub fn validate(&self) -> GeomResult<()> {
        check_length("hip_to_knee", self.hip_to_knee)?;
        check_length("knee_to_ankle", self.knee_to_ankle)?;
        check_length("foot_length", self.foot_length)?;
        check_length("foot_contact_proportion", self.foot_contact_proportion)?;
        if self.foot_contact_proportion > 1.0 {
            return Err(GeometryError::InvalidLength {
                name: "foot_contact_proportion",
                value: self.foot_contact_proportion,
            });
        }
        check_length("hip_to_shoulder", self.hip_to_shoulder)?;
        check_length("shoulder_to_elbow", self.shoulder_to_elbow)?;
        check_length("elbow_to_wrist", self.elbow_to_wrist)?;
        check_length("wrist_to_grip", self.wrist_to_grip)?;
        check_length("seat_height", self.seat_height)?;
        check_length("seat_length_aft", self.seat_length_aft)?;
        check_length("seat_length_fwd", self.seat_length_fwd)?;
        if !(self.seat_offset.x.is_finite() && self.seat_offset.y.is_finite()) {
            return Err(GeometryError::InvalidLength {
                name: "seat_offset",
                value: f64::NAN,
            });
        }
        if !self.hip_to_horizontal_deg.is_finite() {
            return Err(GeometryError::InvalidLength {
                name: "hip_to_horizontal_deg",
                value: self.hip_to_horizontal_deg,
            });
        }
        Ok(())
    }

    /// Pedal contact to ankle, along the foot.
    #[inline]
    pub fn ankle_contact_length(&self) -> f64 {
        self.foot_contact_proportion * self.foot_length
    }
}
