// src/collision/resolver.rs

//! One-pass collision repair.
//!
//! Each colliding neighbor pair is repaired at most once: an unassigned
//! member is rotated around its center until its link clears, while two
//! assigned members are re-pointed at the best alternative target pair
//! from their reachable sets. Residual collisions are left for the caller
//! to observe through the detector; there is no second pass.

use std::f64::consts::TAU;

use glam::DVec2;
use log::trace;

use crate::bench::Bench;
use crate::engine::config::EngineConfig;
use crate::engine::state::AssignmentState;
use crate::targets::{NO_TARGET, ReachabilityMap};

use super::detector::{collisions_for_cobra, detect_collisions};

pub struct CollisionResolver {
    home_rotation_steps: usize,
    swap_min_gain: usize,
}

impl CollisionResolver {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            home_rotation_steps: config.home_rotation_steps,
            swap_min_gain: config.swap_min_gain,
        }
    }

    /// Runs the repair pass over every currently colliding neighbor pair,
    /// in ascending pair order.
    ///
    /// The scan list is fixed up front; a repair can create a new collision
    /// with a third cobra, which stays for the caller to observe.
    pub fn solve(
        &self,
        state: &mut AssignmentState,
        reach: &ReachabilityMap,
        target_positions: &[DVec2],
        bench: &Bench,
    ) {
        let pairs = detect_collisions(&state.fiber_positions, bench);
        trace!("collision repair over {} pairs", pairs.len());

        for pair in &pairs {
            let c = pair.first as usize;
            let nc = pair.second as usize;

            if state.assigned_targets[c] == NO_TARGET || state.assigned_targets[nc] == NO_TARGET {
                let unused = if state.assigned_targets[c] == NO_TARGET { c } else { nc };
                self.rotate_home_fiber(unused, state, bench);
            } else {
                self.swap_targets(c, nc, state, reach, target_positions, bench);
            }
        }
    }

    /// Spins an unassigned cobra's fiber around its center, keeping the
    /// first orientation with no collisions. Reverts when the sweep finds
    /// none.
    fn rotate_home_fiber(&self, cobra: usize, state: &mut AssignmentState, bench: &Bench) {
        let center = bench.centers[cobra];
        let initial = state.fiber_positions[cobra];
        let mut best = initial;

        for step in 1..self.home_rotation_steps {
            let angle = step as f64 * TAU / self.home_rotation_steps as f64;
            state.fiber_positions[cobra] = DVec2::from_angle(angle).rotate(initial - center) + center;

            if collisions_for_cobra(cobra, &state.fiber_positions, bench) == 0 {
                best = state.fiber_positions[cobra];
                break;
            }
        }

        state.fiber_positions[cobra] = best;
    }

    /// Scans alternative `(t1, t2)` target pairs from both cobras'
    /// reachable sets in matrix order, keeping the first pair that drops
    /// the combined collision count by at least `swap_min_gain`. A drop of
    /// one only moves the collision onto a third cobra, so it is rejected.
    /// Stops early once a kept pair scores zero; commits the best pair
    /// found, which may be the original one.
    fn swap_targets(
        &self,
        c: usize,
        nc: usize,
        state: &mut AssignmentState,
        reach: &ReachabilityMap,
        target_positions: &[DVec2],
        bench: &Bench,
    ) {
        let mut score = collisions_for_cobra(c, &state.fiber_positions, bench)
            + collisions_for_cobra(nc, &state.fiber_positions, bench);

        let initial = (state.assigned_targets[c], state.assigned_targets[nc]);
        state.free_targets[initial.0 as usize] = true;
        state.free_targets[initial.1 as usize] = true;

        let options_c = free_options(reach, c, &state.free_targets);
        let options_nc = free_options(reach, nc, &state.free_targets);

        let mut best = initial;

        'scan: for &t1 in &options_c {
            for &t2 in &options_nc {
                if t1 == t2 || (t1, t2) == initial {
                    continue;
                }

                state.fiber_positions[c] = target_positions[t1 as usize];
                state.fiber_positions[nc] = target_positions[t2 as usize];

                let candidate = collisions_for_cobra(c, &state.fiber_positions, bench)
                    + collisions_for_cobra(nc, &state.fiber_positions, bench);

                if candidate + self.swap_min_gain <= score {
                    best = (t1, t2);
                    score = candidate;
                }
                if score == 0 {
                    break 'scan;
                }
            }
        }

        state.assigned_targets[c] = best.0;
        state.assigned_targets[nc] = best.1;
        state.fiber_positions[c] = target_positions[best.0 as usize];
        state.fiber_positions[nc] = target_positions[best.1 as usize];
        state.free_targets[best.0 as usize] = false;
        state.free_targets[best.1 as usize] = false;
    }
}

/// The still-free targets a cobra can reach, in distance order.
fn free_options(reach: &ReachabilityMap, cobra: usize, free_targets: &[bool]) -> Vec<i32> {
    reach
        .row(cobra)
        .iter()
        .copied()
        .filter(|&t| t != NO_TARGET && free_targets[t as usize])
        .collect()
}
