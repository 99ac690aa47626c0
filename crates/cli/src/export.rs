//! Tabular and JSON outputs: angle series as CSV (polars), frame joints as JSON.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use bikekin::frame::FrameGeometry;
use bikekin::rider::AngleSample;
use bikekin::Point2;
use polars::prelude::*;
use serde_json::{json, Value};

/// Columns: `crank_deg`, `knee_deg`, `hip_deg` from a rider's angle history.
pub fn angle_frame(samples: &[AngleSample]) -> PolarsResult<DataFrame> {
    let crank: Vec<f64> = samples.iter().map(|s| s.crank_deg).collect();
    let knee: Vec<f64> = samples.iter().map(|s| s.knee_deg).collect();
    let hip: Vec<f64> = samples.iter().map(|s| s.hip_deg).collect();
    df!(
        "crank_deg" => crank,
        "knee_deg" => knee,
        "hip_deg" => hip
    )
}

pub fn write_csv(df: &mut DataFrame, out: &Path) -> Result<()> {
    ensure_parent(out)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

pub fn write_json(value: &Value, out: &Path) -> Result<()> {
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn pt(p: Point2) -> Value {
    json!([p.x, p.y])
}

/// Joint positions in mm (`[x, y]`, origin at the bottom bracket) and tube
/// angles in degrees.
pub fn frame_json(g: &FrameGeometry) -> Value {
    json!({
        "joints": {
            "rearHub": pt(g.rear_hub),
            "frontHub": pt(g.front_hub),
            "seatTubeTop": pt(g.seat_tube_top),
            "forkTop": pt(g.fork_top),
            "frontBar": pt(g.front_bar),
            "handleBarPost": pt(g.handlebar_post),
            "hands": pt(g.hands),
            "leverEnd": g.lever.map(|l| pt(l.end)),
            "leverGrip": g.lever.map(|l| pt(l.grip)),
        },
        "anglesDeg": {
            "seatTube": g.seat_tube_angle.to_degrees(),
            "downTube": g.down_tube_angle.to_degrees(),
            "topTube": g.top_tube_angle.to_degrees(),
            "headTube": g.head_tube_angle.to_degrees(),
        },
        "wheelRadius": g.wheel_radius,
        "crankLength": g.crank_length,
        "pedalLength": g.pedal_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikekin::frame::FrameConfig;
    use bikekin::rider::{crank_angles, RiderConfig, RiderKinematics};
    use tempfile::tempdir;

    fn samples() -> Vec<AngleSample> {
        let g = FrameConfig::road_default().solve().unwrap();
        let mut rider = RiderKinematics::new(RiderConfig::reference(), &g).unwrap();
        rider.sweep(crank_angles(0.0, 360.0, 30.0).unwrap()).unwrap();
        rider.history().samples().to_vec()
    }

    #[test]
    fn csv_round_trips_through_polars() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/angles.csv");
        let samples = samples();
        let mut df = angle_frame(&samples).unwrap();
        assert_eq!(df.shape(), (13, 3));
        write_csv(&mut df, &out).unwrap();

        let back = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
        assert_eq!(back.shape(), (13, 3));
        let knee = back.column("knee_deg").unwrap().f64().unwrap().get(0).unwrap();
        assert!((knee - samples[0].knee_deg).abs() < 1e-9);
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("crank_deg,knee_deg,hip_deg"));
    }

    #[test]
    fn frame_json_has_joints_and_optional_lever() {
        let g = FrameConfig::road_default().solve().unwrap();
        let v = frame_json(&g);
        assert_eq!(v["joints"]["hands"][0].as_f64().unwrap(), g.hands.x);
        assert!(v["joints"]["leverEnd"].is_array());

        let no_lever = FrameConfig {
            lever_length: None,
            ..FrameConfig::road_default()
        };
        let v = frame_json(&no_lever.solve().unwrap());
        assert!(v["joints"]["leverEnd"].is_null());
    }
}
