//! Discrete curve-shortening flow on closed polygonal loops.
//!
//! A curve is a cyclic sequence of 2D points. Once per frame the caller hands
//! each curve to [`flow::full_step`], which either returns the evolved curve or
//! reports that it degenerated and should be dropped. [`sim::Simulation`] does
//! that bookkeeping for a whole collection.
//!
//! Layout
//! - `geometry`: point type and vector/polygon primitives.
//! - `circular`: wrap-around sequence container with neighbourhood views.
//! - `curve`: curves, scalar fields, discrete curvature.
//! - `flow`: flow step, remeshing, cleanup and the per-frame orchestrator.
//! - `stroke`, `shapes`, `shade`, `sim`: input capture, initial curves,
//!   colouring and the frame loop around the core.

pub mod cfg;
pub mod circular;
pub mod curve;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod shade;
pub mod shapes;
pub mod sim;
pub mod stroke;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circular::{CircularSeq, Neighborhood};
pub use curve::{Curve, ScalarField};
pub use error::CsfError;
pub use flow::{full_step, Degeneracy, StepCfg, StepOutcome};
pub use geometry::{Bounds2, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circular::{CircularSeq, Neighborhood};
    pub use crate::curve::{Curve, ScalarField};
    pub use crate::flow::{clean, flow_step, full_step, remesh, Degeneracy, StepCfg, StepOutcome};
    pub use crate::geometry::{point, Bounds2, Point};
    pub use crate::shapes::{demo_curve, draw_blob, regular_polygon, BlobCfg};
    pub use crate::sim::{Simulation, TickReport};
    pub use crate::stroke::Stroke;
}
