//! Per-frame statistics, written as a CSV table through polars.

use anyhow::{Context, Result};
use csf::prelude::{Curve, TickReport};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Column buffers, one row per tick.
#[derive(Default, Debug)]
pub struct FrameLog {
    frame: Vec<u64>,
    curves: Vec<u64>,
    vertices: Vec<u64>,
    area: Vec<f64>,
    max_curvature: Vec<f64>,
}

impl FrameLog {
    pub fn record(&mut self, report: &TickReport, curves: &[Curve]) {
        self.frame.push(report.frame);
        self.curves.push(report.survivors as u64);
        self.vertices.push(report.vertices as u64);
        self.area.push(curves.iter().map(Curve::area).sum());
        self.max_curvature.push(
            curves
                .iter()
                .map(|c| c.curvature().max())
                .fold(0.0, f64::max),
        );
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        df!(
            "frame" => &self.frame,
            "curves" => &self.curves,
            "vertices" => &self.vertices,
            "area" => &self.area,
            "max_curvature" => &self.max_curvature
        )
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut df = self.to_frame()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let mut file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(rows = self.len(), path = %path.display(), "stats_csv");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csf::prelude::{point, regular_polygon};

    #[test]
    fn rows_follow_ticks() {
        let mut log = FrameLog::default();
        let curves = vec![regular_polygon(40, 20.0, point(0.0, 0.0))];
        let report = TickReport {
            frame: 1,
            survivors: 1,
            discarded: 0,
            vertices: 40,
        };
        log.record(&report, &curves);
        log.record(&TickReport { frame: 2, ..TickReport::default() }, &[]);
        let df = log.to_frame().unwrap();
        assert_eq!(df.shape(), (2, 5));
        assert_eq!(log.max_curvature[1], 0.0);
        assert!((log.max_curvature[0] - 0.05).abs() < 1e-3);
    }

    #[test]
    fn counts_are_not_truncated() {
        let mut log = FrameLog::default();
        let big = u32::MAX as usize + 7;
        let report = TickReport {
            frame: 1,
            survivors: big,
            discarded: 0,
            vertices: big,
        };
        log.record(&report, &[]);
        assert_eq!(log.curves[0], big as u64);
        assert_eq!(log.vertices[0], big as u64);
        assert_eq!(log.to_frame().unwrap().shape(), (1, 5));
    }
}
