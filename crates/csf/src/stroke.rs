//! Turning a sampled input stroke into a closed curve.

use crate::curve::Curve;
use crate::error::{check_spacing, Result};
use crate::geometry::{equals, squared_length, Point};

/// Polyline accumulated from pointer samples, thinned to roughly `spacing`.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Point>,
    spacing: f64,
}

impl Stroke {
    pub fn new(spacing: f64) -> Result<Self> {
        check_spacing(spacing)?;
        Ok(Self {
            points: Vec::new(),
            spacing,
        })
    }

    /// Record a sample. Kept only if it is the first one or lies more than
    /// `spacing` from the last kept sample; returns whether it was kept.
    pub fn push(&mut self, p: Point) -> bool {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return false;
        }
        let keep = match self.points.last() {
            None => true,
            Some(&last) => squared_length(p - last) > self.spacing * self.spacing,
        };
        if keep {
            self.points.push(p);
        }
        keep
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Close the stroke: walk from the last sample back to the first in steps of
    /// `spacing` until the gap is at most `spacing`, then wrap into a `Curve`.
    pub fn close(mut self) -> Curve {
        let s2 = self.spacing * self.spacing;
        if let Some(&first) = self.points.first() {
            let mut last = self.points[self.points.len() - 1];
            while squared_length(first - last) > s2 {
                let d = first - last;
                let next = last + d * (self.spacing / squared_length(d).sqrt());
                // no representable progress towards `first`
                if !(next.x.is_finite() && next.y.is_finite()) || equals(next, last) {
                    break;
                }
                last = next;
                self.points.push(last);
            }
        }
        Curve::from_vec(self.points)
    }
}
