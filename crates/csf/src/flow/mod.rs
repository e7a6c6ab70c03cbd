//! Curve-shortening flow: per-frame evolution of a closed curve.
//!
//! Purpose
//! - Advance a curve by one forward-Euler step of the discrete flow, keep its
//!   vertex spacing within a band, and drop doubled-back vertices.
//! - Report curves that are too small or numerically blown up so the caller can
//!   discard them.
//!
//! Pipeline (`full_step`), fixed order:
//! 1. bounds filter (optional): drop individual vertices outside the box;
//! 2. curvature field, `max_kappa = max |kappa_i|`;
//! 3. degeneracy check: too few vertices, or `max_kappa` above the ceiling;
//! 4. flow step with `dt / max_kappa`;
//! 5. `remesh`, then `clean`.
//!
//! Scaling the step by the maximum curvature keeps the sharpest part of the
//! curve from moving much more than one unit per frame at any absolute scale,
//! which is what makes an explicit scheme usable here.
//!
//! Layout: `types.rs` (config and outcomes), `step.rs` (flow step and
//! orchestrator), `remesh.rs` (in-place spacing and cleanup scans).

mod remesh;
mod step;
mod types;

pub use remesh::{clean, remesh};
pub use step::{flow_step, full_step};
pub use types::{Degeneracy, StepCfg, StepOutcome};
