//! A collection of curves advanced together, once per frame.
//!
//! Curves are independent; each tick runs every curve through `full_step` in
//! order, keeps the evolved ones and drops the degenerate ones.

use tracing::debug;

use crate::curve::Curve;
use crate::error::{check_spacing, Result};
use crate::flow::{full_step, StepCfg, StepOutcome};
use crate::geometry::Bounds2;
use crate::stroke::Stroke;

/// Summary of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// 1-based frame number.
    pub frame: u64,
    pub survivors: usize,
    pub discarded: usize,
    /// Total vertex count over the survivors.
    pub vertices: usize,
}

#[derive(Clone, Debug)]
pub struct Simulation {
    cfg: StepCfg,
    curves: Vec<Curve>,
    frame: u64,
}

impl Simulation {
    pub fn new(cfg: StepCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            curves: Vec::new(),
            frame: 0,
        })
    }

    #[inline]
    pub fn cfg(&self) -> &StepCfg {
        &self.cfg
    }

    #[inline]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn push_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    /// Close a finished stroke and add it.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.curves.push(stroke.close());
    }

    pub fn clear(&mut self) {
        self.curves.clear();
    }

    /// New target spacing, e.g. after the canvas pixel ratio changed.
    pub fn set_spacing(&mut self, spacing: f64) -> Result<()> {
        check_spacing(spacing)?;
        self.cfg.spacing = spacing;
        Ok(())
    }

    /// New culling box (`None` disables culling).
    pub fn set_bounds(&mut self, bounds: Option<Bounds2>) -> Result<()> {
        let cfg = StepCfg { bounds, ..self.cfg };
        cfg.validate()?;
        self.cfg = cfg;
        Ok(())
    }

    /// Advance every curve by one frame.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        self.frame += 1;
        let before = self.curves.len();
        let mut survivors = Vec::with_capacity(before);
        for (index, curve) in std::mem::take(&mut self.curves).into_iter().enumerate() {
            match full_step(curve, dt, &self.cfg) {
                StepOutcome::Evolved(next) => survivors.push(next),
                StepOutcome::Degenerate(reason) => {
                    debug!(frame = self.frame, index, ?reason, "curve discarded");
                }
            }
        }
        self.curves = survivors;
        TickReport {
            frame: self.frame,
            survivors: self.curves.len(),
            discarded: before - self.curves.len(),
            vertices: self.curves.iter().map(Curve::len).sum(),
        }
    }
}
