mod config;
mod export;
mod provenance;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bikekin::frame::solve_frame;
use bikekin::rider::{crank_angles, RiderFrameState, RiderKinematics};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "bikekin")]
#[command(about = "Bicycle frame and rider kinematics")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the frame and print (or write) its joints as JSON
    Frame {
        /// bike.json; built-in road frame when absent
        #[arg(long)]
        bike: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Pedal the rider over a crank-angle range and write knee/hip angles as CSV.
    /// Only crank angles within [0, 360] become rows.
    Sweep {
        #[arg(long)]
        bike: Option<PathBuf>,
        /// rider.json; reference rider when absent
        #[arg(long)]
        rider: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, default_value_t = 360.0, allow_negative_numbers = true)]
        stop: f64,
        #[arg(long, default_value_t = 5.0)]
        step: f64,
        /// Skip crank angles that fail to solve instead of aborting
        #[arg(long)]
        lenient: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Frame { bike, out } => frame(bike, out, cmd.tag),
        Action::Sweep {
            bike,
            rider,
            out,
            start,
            stop,
            step,
            lenient,
        } => sweep(
            SweepArgs {
                bike,
                rider,
                out,
                start,
                stop,
                step,
                lenient,
            },
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn frame(bike: Option<PathBuf>, out: Option<PathBuf>, tag: Option<String>) -> Result<()> {
    tracing::info!(bike = ?bike, out = ?out, tag = ?tag, "frame");
    let (frame_cfg, _) = config::load(bike.as_deref(), None)?;
    let geometry = solve_frame(&frame_cfg).context("solving frame")?;
    let doc = export::frame_json(&geometry);
    match out {
        Some(out) => {
            export::write_json(&doc, &out)?;
            let payload = Payload::new(json!({}))
                .with_inputs(bike)
                .with_tag(tag);
            let prov = provenance::write_sidecar(&out, payload)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "frame written");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

struct SweepArgs {
    bike: Option<PathBuf>,
    rider: Option<PathBuf>,
    out: PathBuf,
    start: f64,
    stop: f64,
    step: f64,
    lenient: bool,
}

fn sweep(args: SweepArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(
        bike = ?args.bike,
        rider = ?args.rider,
        out = %args.out.display(),
        start = args.start,
        stop = args.stop,
        step = args.step,
        lenient = args.lenient,
        tag = ?tag,
        "sweep"
    );
    let (frame_cfg, rider_cfg) = config::load(args.bike.as_deref(), args.rider.as_deref())?;
    let geometry = solve_frame(&frame_cfg).context("solving frame")?;
    let mut rider = RiderKinematics::new(rider_cfg, &geometry).context("placing rider")?;
    let angles = crank_angles(args.start, args.stop, args.step).context("crank angle grid")?;

    let (states, skipped) = run_sweep(&mut rider, &angles, args.lenient)?;
    tracing::info!(
        solved = states.len(),
        skipped,
        history = rider.history().len(),
        "sweep solved"
    );

    let mut df = export::angle_frame(rider.history().samples())?;
    export::write_csv(&mut df, &args.out)?;
    let payload = Payload::new(json!({
        "start_deg": args.start,
        "stop_deg": args.stop,
        "step_deg": args.step,
        "lenient": args.lenient,
        "solved": states.len(),
        "skipped": skipped,
    }))
    .with_inputs(args.bike.into_iter().chain(args.rider))
    .with_tag(tag);
    let prov = provenance::write_sidecar(&args.out, payload)?;
    tracing::info!(
        out = %args.out.display(),
        rows = df.height(),
        provenance = %prov.display(),
        "sweep written"
    );
    Ok(())
}

/// Step through `angles`; lenient mode logs and skips unsolvable angles.
fn run_sweep(
    rider: &mut RiderKinematics,
    angles: &[f64],
    lenient: bool,
) -> Result<(Vec<RiderFrameState>, usize)> {
    let mut states = Vec::with_capacity(angles.len());
    let mut skipped = 0usize;
    for &crank_deg in angles {
        match rider.step(crank_deg) {
            Ok(state) => states.push(state),
            Err(err) if lenient => {
                tracing::warn!(crank_deg, error = %err, "skipping crank angle");
                skipped += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("solving rider at crank {crank_deg} deg"))
            }
        }
    }
    Ok((states, skipped))
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(json!({})).with_tag(tag);
    let outputs: [&Path; 0] = [];
    let obj = provenance::document(&payload, &outputs);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikekin::frame::FrameConfig;
    use bikekin::rider::RiderConfig;

    fn tall_rider() -> RiderKinematics {
        let g = FrameConfig::road_default().solve().unwrap();
        let cfg = RiderConfig {
            seat_height: 600.0,
            ..RiderConfig::reference()
        };
        RiderKinematics::new(cfg, &g).unwrap()
    }

    #[test]
    fn strict_sweep_stops_at_first_failure() {
        let mut rider = tall_rider();
        let err = run_sweep(&mut rider, &[270.0], false).unwrap_err();
        assert!(format!("{err:#}").contains("crank 270"));
    }

    #[test]
    fn lenient_sweep_skips_failures() {
        let mut rider = tall_rider();
        let angles = crank_angles(0.0, 360.0, 10.0).unwrap();
        let (states, skipped) = run_sweep(&mut rider, &angles, true).unwrap();
        assert!(skipped > 0);
        assert_eq!(states.len() + skipped, angles.len());
        assert_eq!(rider.history().len(), states.len());
    }

    #[test]
    fn sweep_writes_csv_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("angles.csv");
        let args = SweepArgs {
            bike: None,
            rider: None,
            out: out.clone(),
            start: 0.0,
            stop: 90.0,
            step: 15.0,
            lenient: false,
        };
        sweep(args, Some("t".into())).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 1 + 7);
        assert!(dir.path().join("angles.provenance.json").exists());
    }

    #[test]
    fn sweep_csv_keeps_one_revolution() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("wide.csv");
        let args = SweepArgs {
            bike: None,
            rider: None,
            out: out.clone(),
            start: -90.0,
            stop: 450.0,
            step: 30.0,
            lenient: false,
        };
        sweep(args, None).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let crank: Vec<f64> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(crank.len(), 13);
        assert_eq!(crank.first(), Some(&0.0));
        assert_eq!(crank.last(), Some(&360.0));
        assert!(crank.iter().all(|c| (0.0..=360.0).contains(c)));
    }
}
