//! Curvature colouring for renderers: black on flat parts, red on sharp ones.

use crate::cfg::SHADE_SATURATION;
use crate::curve::{curvature_magnitude, Curve};

/// RGB for curvature `k`: linear black → red on `t = clamp(|k| / saturation, 0, 1)`.
/// Non-finite curvature is full red.
pub fn curvature_shade(k: f64) -> [u8; 3] {
    let t = if k.is_finite() {
        (k.abs() / SHADE_SATURATION).clamp(0.0, 1.0)
    } else {
        1.0
    };
    [(255.0 * t).round() as u8, 0, 0]
}

/// One colour per vertex, for the edge leaving that vertex.
pub fn shade_curve(curve: &Curve) -> Vec<[u8; 3]> {
    curve
        .neighborhoods()
        .map(|x| curvature_shade(curvature_magnitude(x)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;
    use crate::shapes::regular_polygon;

    #[test]
    fn shade_ramps_and_saturates() {
        assert_eq!(curvature_shade(0.0), [0, 0, 0]);
        assert_eq!(curvature_shade(0.0025), [64, 0, 0]);
        assert_eq!(curvature_shade(-0.0025), [64, 0, 0]);
        assert_eq!(curvature_shade(0.5), [255, 0, 0]);
        assert_eq!(curvature_shade(f64::NAN), [255, 0, 0]);
    }

    #[test]
    fn shade_curve_is_uniform_on_circle() {
        // radius 200 -> curvature ~0.005
        let cu = regular_polygon(90, 200.0, point(0.0, 0.0));
        let shades = shade_curve(&cu);
        assert_eq!(shades.len(), 90);
        assert!(shades.iter().all(|c| *c == shades[0]));
        assert!(shades[0][0] > 100 && shades[0][0] < 160);
    }
}
