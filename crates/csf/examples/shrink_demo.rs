//! Run the flow on a starting curve and print vertex counts until it vanishes.
//!
//! Usage:
//!   cargo run -p csf --example shrink_demo -- demo
//!   cargo run -p csf --example shrink_demo -- blob
//!
//! - demo mode: the 200-point demo loop on an 800x600 canvas
//! - blob mode: a seeded random blob centred on the same canvas

use csf::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "demo".to_string());
    let curve = match mode.as_str() {
        "demo" => demo_curve(800.0, 600.0),
        "blob" => draw_blob(
            BlobCfg {
                center: point(400.0, 300.0),
                ..BlobCfg::default()
            },
            2025,
        ),
        _ => {
            eprintln!("usage: shrink_demo [demo|blob]");
            return;
        }
    };
    let curve = match curve {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let cfg = StepCfg::default().with_bounds(Bounds2::from_extent(800.0, 600.0));
    let mut sim = match Simulation::new(cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    sim.push_curve(curve);
    while !sim.curves().is_empty() && sim.frame() < 100_000 {
        let report = sim.tick(1.0);
        if report.frame % 100 == 0 || report.survivors == 0 {
            println!(
                "frame {}: curves={}, vertices={}",
                report.frame, report.survivors, report.vertices
            );
        }
    }
}
