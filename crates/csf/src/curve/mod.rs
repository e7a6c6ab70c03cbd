//! Closed polygonal curves and per-vertex scalar fields.
//!
//! A `Curve` is a `CircularSeq<Point>`: vertex `i` connects to `i + 1` and the
//! last vertex connects back to the first. A `ScalarField` is a
//! `CircularSeq<f64>` aligned index-for-index with some curve.
//!
//! Discrete curvature at a vertex `b` with neighbours `a` (offset -1) and `c`
//! (offset +1):
//!
//! ```text
//! kappa = 0.5 * cross(c - a, c + a - 2b) * (|c - a|² / 4)^(-3/2)
//! ```
//!
//! This tends to `1/r` on a circle of radius `r` and is positive on
//! counterclockwise arcs.

use crate::circular::{CircularSeq, Neighborhood};
use crate::geometry::{
    add, cross, polygon_area, polygon_centroid, scale, squared_length, subtract, Point,
};

pub type Curve = CircularSeq<Point>;
pub type ScalarField = CircularSeq<f64>;

/// Signed discrete curvature at the anchor of `x`.
///
/// Not sanitized: coincident neighbours give a non-finite value.
#[inline]
pub fn vertex_curvature(x: Neighborhood<'_, Point>) -> f64 {
    let (a, b, c) = x.triple();
    let twice_displacement = subtract(c, a);
    let laplacian = add(&[c, a, scale(b, -2.0)]);
    let dr2 = squared_length(twice_displacement) * 0.25;
    0.5 * cross(twice_displacement, laplacian) * dr2.powf(-1.5)
}

/// Curvature magnitude at the anchor of `x`; non-finite estimates become
/// `f64::INFINITY` so thresholds treat them as maximally unstable.
#[inline]
pub fn curvature_magnitude(x: Neighborhood<'_, Point>) -> f64 {
    let k = vertex_curvature(x).abs();
    if k.is_finite() {
        k
    } else {
        f64::INFINITY
    }
}

impl CircularSeq<f64> {
    /// Largest sample; `-inf` when empty. NaN samples are ignored.
    pub fn max(&self) -> f64 {
        self.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sample; `+inf` when empty. NaN samples are ignored.
    pub fn min(&self) -> f64 {
        self.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

impl CircularSeq<Point> {
    /// Per-vertex curvature magnitude (see [`curvature_magnitude`]).
    pub fn curvature(&self) -> ScalarField {
        self.map(|_, _, x| curvature_magnitude(x))
    }

    /// Per-vertex signed curvature, unsanitized.
    pub fn signed_curvature(&self) -> ScalarField {
        self.map(|_, _, x| vertex_curvature(x))
    }

    /// Shoelace area, positive for counterclockwise loops.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        polygon_area(self.as_slice())
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn centroid(&self) -> Option<Point> {
        polygon_centroid(self.as_slice())
    }

    /// Total edge length of the closed loop.
    pub fn perimeter(&self) -> f64 {
        self.neighborhoods()
            .map(|x| (*x.at(1) - *x.at(0)).norm())
            .sum()
    }

    /// True if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }
}
