// src/engine/pipeline.rs

//! The full pipeline: reachability, greedy assignment, collision repair.

use glam::DVec2;
use log::debug;

use crate::bench::Bench;
use crate::collision::CollisionResolver;
use crate::engine::config::EngineConfig;
use crate::engine::state::AssignmentState;
use crate::targets::{NO_TARGET, ReachabilityMap, greedy};

/// Final per-cobra result of one assignment call.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// Target index per cobra, `NO_TARGET` where none was assigned.
    pub targets: Vec<i32>,
    /// Final fiber tip per cobra: the target position when assigned, the
    /// (possibly rotated) home position otherwise.
    pub fiber_positions: Vec<DVec2>,
}

/// Runs assignment calls against a bench.
///
/// Holds nothing but the configuration; every call owns its working arrays,
/// so one engine can serve any number of benches and target sets.
pub struct AssignmentEngine {
    pub config: EngineConfig,
}

impl AssignmentEngine {
    pub fn new() -> Self {
        Self { config: EngineConfig::default() }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Decides which target every cobra observes and where its fiber tip
    /// ends up, maximizing assignments while repairing link collisions
    /// between neighboring arms.
    pub fn assign(&self, target_positions: &[DVec2], bench: &Bench) -> Assignment {
        let reach = ReachabilityMap::build(target_positions, bench);
        debug!(
            "reachability: {} cobras x {} slots over {} targets",
            bench.cobra_count(),
            reach.width(),
            target_positions.len()
        );

        let assigned = greedy::assign_by_distance(&reach, target_positions.len());
        debug!(
            "greedy assignment: {} of {} cobras matched",
            assigned.iter().filter(|&&t| t != NO_TARGET).count(),
            bench.cobra_count()
        );

        let mut state = AssignmentState::new(bench, target_positions, assigned);
        CollisionResolver::new(&self.config).solve(&mut state, &reach, target_positions, bench);

        Assignment {
            targets: state.assigned_targets,
            fiber_positions: state.fiber_positions,
        }
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
