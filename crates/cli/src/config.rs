//! `bike.json` / `rider.json` loading.
//!
//! Keys are camelCase. Every key is optional: missing values fall back to
//! `FrameConfig::road_default()` and `RiderConfig::reference()`, so a file only
//! needs the dimensions that differ. Saddle keys (`seatHeight`,
//! `seatLengthAft`, `seatLengthFwd`) are accepted in either file; the rider
//! file wins.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bikekin::frame::FrameConfig;
use bikekin::rider::RiderConfig;
use bikekin::Point2;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BikeFile {
    pub chain_stay: Option<f64>,
    pub bottom_bracket_drop: Option<f64>,
    pub seat_tube: Option<f64>,
    pub top_tube: Option<f64>,
    pub down_tube: Option<f64>,
    pub head_tube: Option<f64>,
    pub seat_stay: Option<f64>,
    pub fork_length: Option<f64>,
    pub wheel_diameter: Option<f64>,
    pub wheel_base: Option<f64>,
    pub handle_bar_post: Option<f64>,
    pub handle_bar_length: Option<f64>,
    #[serde(rename = "hands2FrontWheel", alias = "handleBar2FrontWheel")]
    pub hands_to_front_wheel: Option<f64>,
    pub lever_length: Option<f64>,
    pub crank_length: Option<f64>,
    pub pedal_length: Option<f64>,
    pub seat_height: Option<f64>,
    pub seat_length_aft: Option<f64>,
    pub seat_length_fwd: Option<f64>,
}

/// Saddle keys a bike file may carry for the rider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaddleKeys {
    pub seat_height: Option<f64>,
    pub seat_length_aft: Option<f64>,
    pub seat_length_fwd: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RiderFile {
    pub hip_to_knee: Option<f64>,
    pub knee_to_ankle: Option<f64>,
    pub foot_length: Option<f64>,
    pub foot_contact_proportion: Option<f64>,
    pub hip_to_shoulder: Option<f64>,
    pub shoulder_to_elbow: Option<f64>,
    pub elbow_to_wrist: Option<f64>,
    pub wrist_to_grip: Option<f64>,
    /// Hip relative to the saddle top, `[x, y]`.
    pub seat_offset: Option<[f64; 2]>,
    #[serde(rename = "hipToHorizontal")]
    pub hip_to_horizontal_deg: Option<f64>,
    pub seat_height: Option<f64>,
    pub seat_length_aft: Option<f64>,
    pub seat_length_fwd: Option<f64>,
}

impl BikeFile {
    pub fn saddle(&self) -> SaddleKeys {
        SaddleKeys {
            seat_height: self.seat_height,
            seat_length_aft: self.seat_length_aft,
            seat_length_fwd: self.seat_length_fwd,
        }
    }

    pub fn into_frame_config(self) -> FrameConfig {
        let d = FrameConfig::road_default();
        FrameConfig {
            chain_stay: self.chain_stay.unwrap_or(d.chain_stay),
            seat_tube: self.seat_tube.unwrap_or(d.seat_tube),
            top_tube: self.top_tube.unwrap_or(d.top_tube),
            down_tube: self.down_tube.unwrap_or(d.down_tube),
            head_tube: self.head_tube.unwrap_or(d.head_tube),
            seat_stay: self.seat_stay.unwrap_or(d.seat_stay),
            fork_length: self.fork_length.unwrap_or(d.fork_length),
            wheel_diameter: self.wheel_diameter.unwrap_or(d.wheel_diameter),
            wheel_base: self.wheel_base.unwrap_or(d.wheel_base),
            bottom_bracket_drop: self.bottom_bracket_drop.unwrap_or(d.bottom_bracket_drop),
            handlebar_post: self.handle_bar_post.unwrap_or(d.handlebar_post),
            handlebar_length: self.handle_bar_length.unwrap_or(d.handlebar_length),
            hands_to_front_wheel: self.hands_to_front_wheel.unwrap_or(d.hands_to_front_wheel),
            lever_length: self.lever_length.or(d.lever_length),
            crank_length: self.crank_length.unwrap_or(d.crank_length),
            pedal_length: self.pedal_length.unwrap_or(d.pedal_length),
        }
    }
}

impl RiderFile {
    /// Layer this file over the reference rider, then over `bike_saddle`.
    pub fn into_rider_config(self, bike_saddle: SaddleKeys) -> RiderConfig {
        let d = RiderConfig::reference();
        let seat_height = self.seat_height.or(bike_saddle.seat_height);
        let seat_length_aft = self.seat_length_aft.or(bike_saddle.seat_length_aft);
        let seat_length_fwd = self.seat_length_fwd.or(bike_saddle.seat_length_fwd);
        RiderConfig {
            hip_to_knee: self.hip_to_knee.unwrap_or(d.hip_to_knee),
            knee_to_ankle: self.knee_to_ankle.unwrap_or(d.knee_to_ankle),
            foot_length: self.foot_length.unwrap_or(d.foot_length),
            foot_contact_proportion: self
                .foot_contact_proportion
                .unwrap_or(d.foot_contact_proportion),
            hip_to_shoulder: self.hip_to_shoulder.unwrap_or(d.hip_to_shoulder),
            shoulder_to_elbow: self.shoulder_to_elbow.unwrap_or(d.shoulder_to_elbow),
            elbow_to_wrist: self.elbow_to_wrist.unwrap_or(d.elbow_to_wrist),
            wrist_to_grip: self.wrist_to_grip.unwrap_or(d.wrist_to_grip),
            seat_height: seat_height.unwrap_or(d.seat_height),
            seat_length_aft: seat_length_aft.unwrap_or(d.seat_length_aft),
            seat_length_fwd: seat_length_fwd.unwrap_or(d.seat_length_fwd),
            seat_offset: self
                .seat_offset
                .map(|[x, y]| Point2::new(x, y))
                .unwrap_or(d.seat_offset),
            hip_to_horizontal_deg: self.hip_to_horizontal_deg.unwrap_or(d.hip_to_horizontal_deg),
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Resolve frame and rider configuration; `None` paths mean built-in defaults.
pub fn load(bike: Option<&Path>, rider: Option<&Path>) -> Result<(FrameConfig, RiderConfig)> {
    let bike_file: BikeFile = match bike {
        Some(p) => read_json(p)?,
        None => BikeFile::default(),
    };
    let rider_file: RiderFile = match rider {
        Some(p) => read_json(p)?,
        None => RiderFile::default(),
    };
    let saddle = bike_file.saddle();
    let frame = bike_file.into_frame_config();
    let rider = rider_file.into_rider_config(saddle);
    frame.validate().context("invalid bike configuration")?;
    rider.validate().context("invalid rider configuration")?;
    Ok((frame, rider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_files() {
        let (frame, rider) = load(None, None).unwrap();
        assert_eq!(frame, FrameConfig::road_default());
        assert_eq!(rider, RiderConfig::reference());
    }

    #[test]
    fn bike_file_overrides_and_saddle_keys() {
        let dir = tempdir().unwrap();
        let bike = dir.path().join("bike.json");
        fs::write(
            &bike,
            r#"{"chainStay": 420, "handleBar2FrontWheel": 700, "seatHeight": 80}"#,
        )
        .unwrap();
        let (frame, rider) = load(Some(&bike), None).unwrap();
        assert_eq!(frame.chain_stay, 420.0);
        assert_eq!(frame.hands_to_front_wheel, 700.0);
        assert_eq!(frame.seat_tube, FrameConfig::road_default().seat_tube);
        assert_eq!(rider.seat_height, 80.0);
    }

    #[test]
    fn rider_file_wins_over_bike_saddle() {
        let dir = tempdir().unwrap();
        let bike = dir.path().join("bike.json");
        let rider = dir.path().join("rider.json");
        fs::write(&bike, r#"{"seatHeight": 80, "seatLengthAft": 100}"#).unwrap();
        fs::write(
            &rider,
            r#"{"seatHeight": 60, "seatOffset": [20, 100], "hipToHorizontal": 55}"#,
        )
        .unwrap();
        let (_, cfg) = load(Some(&bike), Some(&rider)).unwrap();
        assert_eq!(cfg.seat_height, 60.0);
        assert_eq!(cfg.seat_length_aft, 100.0);
        assert_eq!(cfg.seat_offset, Point2::new(20.0, 100.0));
        assert_eq!(cfg.hip_to_horizontal_deg, 55.0);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_lengths() {
        let dir = tempdir().unwrap();
        let typo = dir.path().join("typo.json");
        fs::write(&typo, r#"{"chainStays": 420}"#).unwrap();
        assert!(load(Some(&typo), None).is_err());

        let negative = dir.path().join("neg.json");
        fs::write(&negative, r#"{"topTube": -5}"#).unwrap();
        let err = load(Some(&negative), None).unwrap_err();
        assert!(format!("{err:#}").contains("top_tube"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load(Some(Path::new("/nonexistent/bike.json")), None).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/bike.json"));
    }
}
