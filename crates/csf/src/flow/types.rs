//! Step configuration and per-step outcomes.

use crate::cfg::{DEFAULT_SPACING, INSTABILITY_CEILING, MIN_VERTICES};
use crate::curve::Curve;
use crate::error::{check_spacing, CsfError, Result};
use crate::geometry::Bounds2;

/// Parameters of one `full_step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepCfg {
    /// Target distance between consecutive vertices.
    pub spacing: f64,
    /// Vertices outside this box are dropped before the step.
    pub bounds: Option<Bounds2>,
    /// Curvature magnitude above which the curve is discarded.
    pub instability_ceiling: f64,
    /// Curves with fewer vertices are discarded.
    pub min_vertices: usize,
}

impl Default for StepCfg {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            bounds: None,
            instability_ceiling: INSTABILITY_CEILING,
            min_vertices: MIN_VERTICES,
        }
    }
}

impl StepCfg {
    #[inline]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    #[inline]
    pub fn with_bounds(mut self, bounds: Bounds2) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_spacing(self.spacing)?;
        if let Some(b) = self.bounds {
            if !b.is_valid() {
                return Err(CsfError::config(format!(
                    "bounds must be finite with min <= max, got {b:?}"
                )));
            }
        }
        if self.instability_ceiling.is_nan() || self.instability_ceiling <= 0.0 {
            return Err(CsfError::config("instability_ceiling must be > 0"));
        }
        // remesh never thins a curve below 4 vertices
        if self.min_vertices < 3 {
            return Err(CsfError::config("min_vertices must be >= 3"));
        }
        Ok(())
    }
}

/// Why a curve was discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Degeneracy {
    /// Fewer vertices than `StepCfg::min_vertices` (after bounds filtering).
    TooFewVertices { vertices: usize },
    /// Maximum curvature above the ceiling, non-finite, or zero.
    Unstable { max_curvature: f64 },
}

/// Result of one `full_step`.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Evolved(Curve),
    Degenerate(Degeneracy),
}

impl StepOutcome {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, StepOutcome::Degenerate(_))
    }

    /// The evolved curve, if any.
    #[inline]
    pub fn into_curve(self) -> Option<Curve> {
        match self {
            StepOutcome::Evolved(cu) => Some(cu),
            StepOutcome::Degenerate(_) => None,
        }
    }
}
