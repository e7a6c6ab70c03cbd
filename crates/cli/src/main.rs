use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use csf::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod stats;

use provenance::{write_sidecar, Payload};
use stats::FrameLog;

#[derive(Parser)]
#[command(name = "csf-cli")]
#[command(about = "Headless driver for the curve-shortening flow")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evolve curves on a virtual canvas and write the survivors
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Debug, Clone)]
struct RunArgs {
    /// Canvas width; also the right edge of the culling box
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Canvas height; also the bottom edge of the culling box
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Maximum number of frames (stops early once every curve is gone)
    #[arg(long, default_value_t = 2000)]
    frames: u64,
    #[arg(long, default_value_t = 1.0)]
    dt: f64,
    /// Target vertex spacing
    #[arg(long, default_value_t = csf::cfg::DEFAULT_SPACING)]
    spacing: f64,
    /// Seed random blobs instead of the demo curve
    #[arg(long)]
    seed: Option<u64>,
    /// Number of blobs to draw when `--seed` is given
    #[arg(long, default_value_t = 1)]
    blobs: u64,
    /// Log a progress line every this many frames
    #[arg(long, default_value_t = 100)]
    log_every: u64,
    /// JSON file receiving the surviving curves
    #[arg(long)]
    out: PathBuf,
    /// Optional CSV of per-frame statistics
    #[arg(long)]
    stats: Option<PathBuf>,
}

#[derive(Serialize)]
struct CurveOut {
    vertices: usize,
    area: f64,
    points: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct RunOut {
    frames: u64,
    curves: Vec<CurveOut>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args),
        Action::Report => report(),
    }
}

fn initial_curves(args: &RunArgs) -> Result<Vec<Curve>> {
    let Some(seed) = args.seed else {
        return Ok(vec![demo_curve(args.width, args.height)?]);
    };
    let radius = 0.2 * args.width.min(args.height);
    (0..args.blobs)
        .map(|k| {
            let cfg = BlobCfg {
                vertices: ((std::f64::consts::TAU * radius / args.spacing).ceil() as usize).max(8),
                center: point(args.width / 2.0, args.height / 2.0),
                radius,
                radial_jitter: 0.3,
            };
            draw_blob(cfg, seed.wrapping_add(k)).map_err(Into::into)
        })
        .collect()
}

fn run(args: &RunArgs) -> Result<()> {
    if !(args.dt.is_finite() && args.dt > 0.0) {
        bail!("--dt must be finite and > 0, got {}", args.dt);
    }
    let cfg = StepCfg::default()
        .with_spacing(args.spacing)
        .with_bounds(Bounds2::from_extent(args.width, args.height));
    let mut sim = Simulation::new(cfg).context("building simulation")?;
    for curve in initial_curves(args)? {
        sim.push_curve(curve);
    }
    tracing::info!(
        curves = sim.curves().len(),
        width = args.width,
        height = args.height,
        spacing = args.spacing,
        "run"
    );

    let mut log = FrameLog::default();
    while sim.frame() < args.frames && !sim.curves().is_empty() {
        let report = sim.tick(args.dt);
        log.record(&report, sim.curves());
        if report.discarded > 0 || (args.log_every > 0 && report.frame % args.log_every == 0) {
            tracing::info!(
                frame = report.frame,
                survivors = report.survivors,
                discarded = report.discarded,
                vertices = report.vertices,
                "tick"
            );
        }
    }

    let out = RunOut {
        frames: sim.frame(),
        curves: sim
            .curves()
            .iter()
            .map(|c| CurveOut {
                vertices: c.len(),
                area: c.area(),
                points: c.iter().map(|p| [p.x, p.y]).collect(),
            })
            .collect(),
    };
    write_json(&args.out, &out)?;
    let mut outputs = vec![args.out.display().to_string()];
    if let Some(path) = &args.stats {
        log.write_csv(path)?;
        outputs.push(path.display().to_string());
    }

    let params = json!({
        "width": args.width,
        "height": args.height,
        "frames": args.frames,
        "dt": args.dt,
        "spacing": args.spacing,
        "seed": args.seed,
        "blobs": args.blobs,
    });
    let summary = json!({
        "frames_run": sim.frame(),
        "survivors": sim.curves().len(),
        "outputs": outputs,
    });
    let prov = write_sidecar(&args.out, Payload::new(params).with_summary(summary))?;
    tracing::info!(
        frames = sim.frame(),
        survivors = sim.curves().len(),
        out = %args.out.display(),
        provenance = %prov.display(),
        "done"
    );
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::report_block())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(out: PathBuf) -> RunArgs {
        RunArgs {
            width: 400.0,
            height: 300.0,
            frames: 20,
            dt: 1.0,
            spacing: 5.0,
            seed: None,
            blobs: 1,
            log_every: 0,
            out,
            stats: None,
        }
    }

    #[test]
    fn cli_parses_run_flags() {
        let cmd = Cmd::try_parse_from([
            "csf-cli", "run", "--out", "x.json", "--seed", "3", "--blobs", "2", "--frames", "5",
        ])
        .unwrap();
        match cmd.action {
            Action::Run(a) => {
                assert_eq!(a.seed, Some(3));
                assert_eq!(a.blobs, 2);
                assert_eq!(a.frames, 5);
                assert_eq!(a.width, 800.0);
                assert_eq!(a.spacing, 5.0);
            }
            Action::Report => panic!("expected run"),
        }
    }

    #[test]
    fn run_writes_curves_stats_and_provenance() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().join("out/curves.json"));
        a.stats = Some(dir.path().join("out/stats.csv"));
        run(&a).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&a.out).unwrap()).unwrap();
        assert!(parsed["frames"].as_u64().unwrap() <= 20);
        let csv = std::fs::read_to_string(a.stats.as_ref().unwrap()).unwrap();
        assert!(csv.starts_with("frame,curves,vertices,area,max_curvature"));
        assert!(dir.path().join("out/curves.provenance.json").exists());
    }

    #[test]
    fn run_with_blobs_seeds_several_curves() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().join("blobs.json"));
        a.seed = Some(11);
        a.blobs = 3;
        a.frames = 0;
        run(&a).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&a.out).unwrap()).unwrap();
        assert_eq!(parsed["curves"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn run_rejects_bad_parameters() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().join("bad.json"));
        a.dt = 0.0;
        assert!(run(&a).is_err());
        let mut b = args(dir.path().join("bad.json"));
        b.spacing = -1.0;
        assert!(run(&b).is_err());
    }
}
