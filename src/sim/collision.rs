//! Pairwise overlap separation and painter's-algorithm ordering
//!
//! The only spatial interaction in the field: circle-circle overlap
//! between every unordered bubble pair, corrected positionally, then a
//! stable depth sort so the renderer draws back to front.

use std::cmp::Ordering;

use crate::consts::DISTANCE_FLOOR;

use super::state::Bubble;

/// Push overlapping bubbles apart along the line between their centers
///
/// Single pass over all unordered pairs, O(n²). Each bubble in an
/// overlapping pair moves half the overlap, so the pair separates by the
/// full amount and the correction is symmetric. Position only; no
/// velocity exchange. The pass is not iterated to convergence, so
/// crowded neighborhoods can keep residual overlap for a few ticks.
///
/// Coincident centers hit the distance floor: the separation direction
/// degenerates to zero and the pair stays put until some other force
/// nudges them apart. No division by zero either way.
pub fn resolve_collisions(bubbles: &mut [Bubble]) {
    let len = bubbles.len();

    for i in 0..len {
        let r_a = bubbles[i].visual_radius();

        for j in (i + 1)..len {
            let r_b = bubbles[j].visual_radius();

            let delta = bubbles[j].pos - bubbles[i].pos;
            let dist = delta.length().max(DISTANCE_FLOOR);
            let min_dist = r_a + r_b;

            if dist < min_dist {
                let push = (min_dist - dist) * 0.5;
                let normal = delta / dist;

                bubbles[i].pos -= normal * push;
                bubbles[j].pos += normal * push;
            }
        }
    }
}

/// Stable ascending depth order for back-to-front drawing
///
/// Shallow (small, far) bubbles paint first; deep (large, near) bubbles
/// paint over them.
pub fn sort_by_depth(bubbles: &mut [Bubble]) {
    bubbles.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));
}
