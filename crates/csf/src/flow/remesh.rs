//! In-place scans that keep a curve well sampled.
//!
//! Both scans use an explicit cursor: after a deletion the cursor stays put
//! (later vertices shifted down into it), otherwise it advances. An insertion
//! lands right after the cursor, so advancing examines the new vertex next.

use crate::curve::Curve;
use crate::geometry::{equals, squared_length};

/// Keep consecutive vertex distances within `(spacing/2, 2·spacing]`.
///
/// - Pair farther apart than `2·spacing`: insert a vertex `spacing` along the
///   segment from the first one.
/// - Pair closer than `spacing/2` (and more than 4 vertices): delete the first.
///
/// An insertion that would not produce a new finite point (coordinates too
/// coarse for `spacing`, or `|b - a|²` overflowing) is skipped.
pub fn remesh(curve: &mut Curve, spacing: f64) {
    let s2 = spacing * spacing;
    let mut i = 0usize;
    while i < curve.len() {
        let a = *curve.get(i as isize);
        let b = *curve.get(i as isize + 1);
        let displacement = b - a;
        let dr2 = squared_length(displacement);

        if dr2 > 4.0 * s2 {
            let inserted = a + displacement * (spacing / dr2.sqrt());
            let fresh = inserted.x.is_finite()
                && inserted.y.is_finite()
                && !equals(inserted, a)
                && !equals(inserted, b);
            if fresh {
                curve.splice(i as isize + 1, 0, [inserted]);
            }
        } else if curve.len() > 4 && 4.0 * dr2 < s2 {
            curve.splice(i as isize, 1, []);
            continue;
        }
        i += 1;
    }
}

/// Remove doubled-back spikes: whenever `get(i + 2) == get(i)` exactly, delete
/// vertices `i` and `i + 1`, then look at `i` again.
pub fn clean(curve: &mut Curve) {
    let mut i = 0usize;
    while i < curve.len() {
        if equals(*curve.get(i as isize), *curve.get(i as isize + 2)) {
            curve.splice(i as isize, 2, []);
            continue;
        }
        i += 1;
    }
}
