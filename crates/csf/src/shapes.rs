//! Initial curves: the demo loop, regular polygons and seeded random blobs.
//!
//! Model (blobs)
//! - `n` equally spaced angles on [0, 2π) with a random global phase; each radius
//!   is `radius * (1 + u)` with `u` uniform in `[-radial_jitter, radial_jitter]`.
//! - Same `(cfg, seed)` always gives the same curve.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::DEMO_VERTICES;
use crate::curve::Curve;
use crate::error::{CsfError, Result};
use crate::geometry::{point, Point};

/// Perturbed near-circle with two long spikes and a wavy rim, sized to a canvas.
///
/// Vertex `i` of 200, with `θ = 2πi/200` and `x = w/2 + 0.05·w·cos θ`, sits at
/// `(x + 0.2·w·cos¹⁰¹θ, h·(0.15 + 0.05·sin θ + 0.05·sin(x/5) + 0.7·sin¹⁵⁰θ))`.
pub fn demo_curve(width: f64, height: f64) -> Result<Curve> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(CsfError::params(format!(
            "canvas extent must be finite and positive, got {width}x{height}"
        )));
    }
    let n = DEMO_VERTICES;
    Ok((0..n)
        .map(|i| {
            let th = TAU * i as f64 / n as f64;
            let x = width / 2.0 + width * (0.05 * th.cos());
            point(
                x + 0.2 * width * th.cos().powi(101),
                height
                    * (0.15 + 0.05 * th.sin() + 0.05 * (x / 5.0).sin() + 0.7 * th.sin().powi(150)),
            )
        })
        .collect())
}

/// Counterclockwise regular `n`-gon of circumradius `r`, first vertex on the +x axis.
pub fn regular_polygon(n: usize, r: f64, center: Point) -> Curve {
    (0..n)
        .map(|k| {
            let th = TAU * k as f64 / n as f64;
            center + point(th.cos(), th.sin()) * r
        })
        .collect()
}

/// Random star-shaped blob parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobCfg {
    pub vertices: usize,
    pub center: Point,
    pub radius: f64,
    /// Relative radial amplitude, in `[0, 1)`.
    pub radial_jitter: f64,
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            vertices: 120,
            center: Point::zeros(),
            radius: 100.0,
            radial_jitter: 0.3,
        }
    }
}

impl BlobCfg {
    fn validate(&self) -> Result<()> {
        if self.vertices < 3 {
            return Err(CsfError::params("need at least 3 vertices"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(CsfError::params("radius must be finite and > 0"));
        }
        if !(0.0..1.0).contains(&self.radial_jitter) {
            return Err(CsfError::params("radial_jitter must lie in [0, 1)"));
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(CsfError::params("center must be finite"));
        }
        Ok(())
    }
}

/// Draw a blob; deterministic in `seed`.
pub fn draw_blob(cfg: BlobCfg, seed: u64) -> Result<Curve> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertices;
    let phase = rng.gen::<f64>() * TAU;
    let delta = TAU / n as f64;
    Ok((0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.radial_jitter;
            cfg.center + point(th.cos(), th.sin()) * (cfg.radius * (1.0 + u))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_curve_has_200_points_on_canvas() {
        let cu = demo_curve(800.0, 600.0).unwrap();
        assert_eq!(cu.len(), 200);
        for p in cu.iter() {
            assert!(p.x >= 0.0 && p.x <= 800.0, "{p:?}");
            assert!(p.y >= 0.0 && p.y <= 600.0, "{p:?}");
        }
        // i = 0: θ = 0, x = 440, plus the full right spike
        let first = *cu.get(0);
        assert!((first.x - 600.0).abs() < 1e-9);
        assert!((first.y - 600.0 * (0.15 + 0.05 * (88.0f64).sin())).abs() < 1e-9);
        // i = 50: θ = π/2 is the top of the upward spike
        assert!(cu.get(50).y > 0.8 * 600.0);
    }

    #[test]
    fn demo_curve_rejects_empty_canvas() {
        assert!(demo_curve(0.0, 600.0).is_err());
        assert!(demo_curve(800.0, f64::NAN).is_err());
    }

    #[test]
    fn blob_is_reproducible_and_within_jitter() {
        let cfg = BlobCfg {
            vertices: 50,
            center: point(10.0, 20.0),
            radius: 40.0,
            radial_jitter: 0.25,
        };
        let a = draw_blob(cfg, 7).unwrap();
        let b = draw_blob(cfg, 7).unwrap();
        let c = draw_blob(cfg, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 50);
        for p in a.iter() {
            let r = (*p - cfg.center).norm();
            assert!((30.0 - 1e-9..=50.0 + 1e-9).contains(&r));
        }
        assert!(a.signed_area() > 0.0);
    }

    #[test]
    fn blob_params_are_checked() {
        let bad = BlobCfg {
            vertices: 2,
            ..BlobCfg::default()
        };
        assert!(matches!(
            draw_blob(bad, 0),
            Err(CsfError::InvalidParams { .. })
        ));
        let bad = BlobCfg {
            radial_jitter: 1.0,
            ..BlobCfg::default()
        };
        assert!(draw_blob(bad, 0).is_err());
    }
}
