// src/collision/detector.rs

//! Link proximity tests over the bench neighbor graph.
//!
//! Only the outer (elbow-to-tip) link takes part in the test: two cobras
//! collide when their outer links come closer than the mean of their
//! effective link widths. The comparison is a strict `<` with no epsilon.

use glam::DVec2;

use crate::bench::Bench;
use crate::geometry::distance_between_segments;
use crate::kinematics::elbow_position;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One colliding neighbor pair, `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionPair {
    pub first: u32,
    pub second: u32,
}

/// Tests every neighbor pair once and returns the colliding ones in
/// ascending order.
pub fn detect_collisions(fiber_positions: &[DVec2], bench: &Bench) -> Vec<CollisionPair> {
    // Elbow joints for the whole bench; every pair test reuses them.
    let elbows = all_elbows(fiber_positions, bench);
    let pairs = bench.neighbors.pairs();

    #[cfg(feature = "parallel")]
    let hits: Vec<bool> = pairs
        .par_iter()
        .map(|&(a, b)| links_collide(a as usize, b as usize, fiber_positions, &elbows, bench))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let hits: Vec<bool> = pairs
        .iter()
        .map(|&(a, b)| links_collide(a as usize, b as usize, fiber_positions, &elbows, bench))
        .collect();

    pairs
        .iter()
        .zip(hits)
        .filter(|(_, hit)| *hit)
        .map(|(&(a, b), _)| CollisionPair { first: a, second: b })
        .collect()
}

/// Counts the collisions between cobra `i` and each of its neighbors.
///
/// Every neighbor contributes independently, so a single pair collision
/// counts once for each member. This is the local score used while
/// repairing.
pub fn collisions_for_cobra(i: usize, fiber_positions: &[DVec2], bench: &Bench) -> usize {
    let elbow = elbow_position(fiber_positions[i], bench.centers[i], bench.link1[i], bench.link2[i]);

    bench
        .neighbors
        .neighbors_of(i)
        .iter()
        .filter(|&&neighbor| {
            let j = neighbor as usize;
            let other = elbow_position(
                fiber_positions[j],
                bench.centers[j],
                bench.link1[j],
                bench.link2[j],
            );
            let distance = distance_between_segments(fiber_positions[i], elbow, fiber_positions[j], other);
            distance < collision_threshold(i, j, bench)
        })
        .count()
}

fn links_collide(a: usize, b: usize, fiber_positions: &[DVec2], elbows: &[DVec2], bench: &Bench) -> bool {
    let distance =
        distance_between_segments(fiber_positions[a], elbows[a], fiber_positions[b], elbows[b]);
    distance < collision_threshold(a, b, bench)
}

#[inline]
fn collision_threshold(a: usize, b: usize, bench: &Bench) -> f64 {
    (bench.min_dist[a] + bench.min_dist[b]) / 2.0
}

fn all_elbows(fiber_positions: &[DVec2], bench: &Bench) -> Vec<DVec2> {
    (0..bench.cobra_count())
        .map(|i| elbow_position(fiber_positions[i], bench.centers[i], bench.link1[i], bench.link2[i]))
        .collect()
}
