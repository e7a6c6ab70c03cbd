//! Forward-Euler flow step and the per-frame orchestrator.

use tracing::trace;

use super::remesh::{clean, remesh};
use super::types::{Degeneracy, StepCfg, StepOutcome};
use crate::curve::Curve;
use crate::geometry::{add, scale, squared_length, subtract};

/// Forward-Euler step of the flow with tangential reparametrization.
///
/// Every vertex `b` with neighbours `a`, `c` moves to
/// `b + (c + a - 2b) * dt / (|c - a|² / 4)`, computed from the pre-step curve.
/// `dt` is the already scaled step (see `full_step`). Vertices whose neighbours
/// coincide come out non-finite.
pub fn flow_step(curve: &Curve, dt: f64) -> Curve {
    curve.map(|_, _, x| {
        let (a, b, c) = x.triple();
        let laplacian = add(&[c, a, scale(b, -2.0)]);
        let dr2 = squared_length(subtract(c, a)) * 0.25;
        add(&[b, scale(laplacian, dt / dr2)])
    })
}

/// Advance `curve` by one frame, or report that it should be discarded.
///
/// No retries: a degenerate curve is simply reported; the caller drops it.
pub fn full_step(curve: Curve, dt: f64, cfg: &StepCfg) -> StepOutcome {
    let curve = match cfg.bounds {
        Some(bounds) => curve.filter(|p, _, _| bounds.contains(*p)),
        None => curve,
    };

    if curve.len() < cfg.min_vertices {
        return StepOutcome::Degenerate(Degeneracy::TooFewVertices {
            vertices: curve.len(),
        });
    }

    let max_kappa = curve.curvature().max();
    // also rejects NaN, +inf and a flat (zero-curvature) loop
    if !(max_kappa > 0.0 && max_kappa <= cfg.instability_ceiling) {
        return StepOutcome::Degenerate(Degeneracy::Unstable {
            max_curvature: max_kappa,
        });
    }

    let stepped = flow_step(&curve, dt / max_kappa);
    let mut next = stepped.filter(|p, _, _| p.x.is_finite() && p.y.is_finite());
    let dropped = stepped.len() - next.len();
    remesh(&mut next, cfg.spacing);
    clean(&mut next);
    trace!(
        before = curve.len(),
        after = next.len(),
        dropped,
        max_kappa,
        "full_step"
    );
    StepOutcome::Evolved(next)
}
