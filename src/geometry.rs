// src/geometry.rs

//! Planar distance primitives for the two-segment arm geometry.

use glam::DVec2;

/// Minimum distance from `point` to the closed segment `start`–`end`.
///
/// The point is expressed in a frame where the segment lies on the +x axis,
/// which splits the plane into three regions: behind the start point, over
/// the segment, and past the end point.
pub fn distance_to_segment(point: DVec2, start: DVec2, end: DVec2) -> f64 {
    let span = end - start;
    let length = span.length();

    // Degenerate segment: both endpoints coincide.
    if length == 0.0 {
        return (point - start).length();
    }

    let axis = span / length;
    let rel = point - start;
    let x = rel.dot(axis);

    if x <= 0.0 {
        rel.length()
    } else if x >= length {
        (point - end).length()
    } else {
        axis.perp_dot(rel).abs()
    }
}

/// Minimum distance between the closed segments `a1`–`b1` and `a2`–`b2`.
///
/// Computed as the minimum of the four endpoint-to-opposite-segment
/// distances, which attains the true minimum for planar segments.
pub fn distance_between_segments(a1: DVec2, b1: DVec2, a2: DVec2, b2: DVec2) -> f64 {
    let d1 = distance_to_segment(a1, a2, b2);
    let d2 = distance_to_segment(b1, a2, b2);
    let d3 = distance_to_segment(a2, a1, b1);
    let d4 = distance_to_segment(b2, a1, b1);

    d1.min(d2).min(d3).min(d4)
}
