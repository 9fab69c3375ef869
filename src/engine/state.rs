// src/engine/state.rs

use glam::DVec2;

use crate::bench::Bench;
use crate::targets::NO_TARGET;

/// Working arrays for one assignment call.
///
/// Fibers start at their home positions; assigned cobras are overwritten
/// with their target position and the target free-list is rebuilt, which is
/// the configuration collision repair starts from.
pub struct AssignmentState {
    /// Target index per cobra, `NO_TARGET` where unassigned.
    pub assigned_targets: Vec<i32>,
    /// Current fiber tip per cobra.
    pub fiber_positions: Vec<DVec2>,
    /// Targets not claimed by any cobra.
    pub free_targets: Vec<bool>,
}

impl AssignmentState {
    pub fn new(bench: &Bench, target_positions: &[DVec2], assigned_targets: Vec<i32>) -> Self {
        let mut fiber_positions = bench.home.clone();
        let mut free_targets = vec![true; target_positions.len()];

        for (i, &target) in assigned_targets.iter().enumerate() {
            if target != NO_TARGET {
                fiber_positions[i] = target_positions[target as usize];
                free_targets[target as usize] = false;
            }
        }

        Self { assigned_targets, fiber_positions, free_targets }
    }
}
