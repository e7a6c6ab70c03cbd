//! Tunable defaults for the flow pipeline.
//!
//! Policy
//! - These are starting values, not invariants; `StepCfg` carries the live copy.
//!   The order of the pipeline stages is fixed regardless of the values here.

/// Curvature magnitude above which a curve is considered blown up.
pub const INSTABILITY_CEILING: f64 = 5000.0;
/// Curves with fewer vertices are discarded.
pub const MIN_VERTICES: usize = 5;
/// Target distance between consecutive vertices, in canvas pixels.
pub const DEFAULT_SPACING: f64 = 5.0;
/// Vertex count of the demo curve.
pub const DEMO_VERTICES: usize = 200;
/// Curvature magnitude mapped to full red by `shade::curvature_shade`.
pub const SHADE_SATURATION: f64 = 0.01;
