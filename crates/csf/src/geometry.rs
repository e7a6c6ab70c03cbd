//! Vector primitives on 2D points.
//!
//! Points are plain `nalgebra::Vector2<f64>` values; every helper here returns
//! a fresh value and never mutates its inputs. For example `|2u + v + w|²` is
//! `squared_length(add(&[scale(u, 2.0), v, w]))`.

use nalgebra::Vector2;

/// A point (or displacement) in the plane.
pub type Point = Vector2<f64>;

/// Shorthand constructor.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Component-wise sum of one or more points.
///
/// Pre: `points` is non-empty (an empty slice sums to the origin).
#[inline]
pub fn add(points: &[Point]) -> Point {
    points.iter().fold(Point::zeros(), |acc, p| acc + p)
}

#[inline]
pub fn subtract(a: Point, b: Point) -> Point {
    a - b
}

#[inline]
pub fn scale(p: Point, c: f64) -> Point {
    p * c
}

#[inline]
pub fn squared_length(p: Point) -> f64 {
    p.x * p.x + p.y * p.y
}

#[inline]
pub fn dot(a: Point, b: Point) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Exact component-wise equality (no tolerance).
#[inline]
#[allow(clippy::float_cmp)]
pub fn equals(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Signed area of the closed polygon through `points` (shoelace formula).
/// Positive for counterclockwise loops; fewer than three points give zero.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..n {
        twice += cross(points[k], points[(k + 1) % n]);
    }
    0.5 * twice
}

/// Area centroid of the closed polygon through `points`.
///
/// Returns `None` when the enclosed area vanishes.
pub fn polygon_centroid(points: &[Point]) -> Option<Point> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let mut a2 = 0.0;
    let mut c = Point::zeros();
    for k in 0..n {
        let p = points[k];
        let q = points[(k + 1) % n];
        let w = cross(p, q);
        a2 += w;
        c += (p + q) * w;
    }
    if a2.abs() <= f64::EPSILON || !a2.is_finite() {
        return None;
    }
    Some(c / (3.0 * a2))
}

/// Closed axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box spanning the origin to `(width, height)`, i.e. a canvas extent.
    #[inline]
    pub fn from_extent(width: f64, height: f64) -> Self {
        Self::new(Point::zeros(), Point::new(width, height))
    }

    /// Inclusive membership. Non-finite points are never contained.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn add_is_variadic() {
        let u = point(1.0, 2.0);
        let v = point(-3.0, 0.5);
        let w = point(0.25, 0.25);
        let s = add(&[scale(u, 2.0), v, w]);
        assert_eq!(s, point(-0.75, 4.75));
        assert!((squared_length(s) - (0.5625 + 22.5625)).abs() < 1e-12);
    }

    #[test]
    fn cross_and_dot_axis_aligned() {
        let a = point(1.0, 0.0);
        let b = point(0.0, 2.5);
        assert!((cross(a, b) - 2.5).abs() < 1e-12);
        assert!((cross(b, a) + 2.5).abs() < 1e-12);
        assert_eq!(dot(a, b), 0.0);
        assert_eq!(subtract(b, a), point(-1.0, 2.5));
    }

    #[test]
    fn cross_matches_determinant_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            let a = point(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = point(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let det = nalgebra::Matrix2::from_columns(&[a, b]).determinant();
            assert!((cross(a, b) - det).abs() < 1e-12);
            assert!((dot(a, b) - a.dot(&b)).abs() < 1e-12);
        }
    }

    #[test]
    fn equals_is_exact() {
        assert!(equals(point(0.1 + 0.2, 1.0), point(0.1 + 0.2, 1.0)));
        assert!(!equals(point(0.1 + 0.2, 1.0), point(0.3, 1.0)));
    }

    #[test]
    fn unit_square_area_and_centroid() {
        let sq = [
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ];
        assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert!((polygon_area(&rev) + 1.0).abs() < 1e-12);
        let c = polygon_centroid(&sq).unwrap();
        assert!((c - point(0.5, 0.5)).norm() < 1e-12);
        assert!(polygon_centroid(&sq[..2]).is_none());
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds2::from_extent(10.0, 5.0);
        assert!(b.is_valid());
        assert!(b.contains(point(0.0, 0.0)));
        assert!(b.contains(point(10.0, 5.0)));
        assert!(!b.contains(point(10.000001, 1.0)));
        assert!(!b.contains(point(f64::NAN, 1.0)));
        assert!(!Bounds2::new(point(1.0, 0.0), point(0.0, 1.0)).is_valid());
    }
}
