// src/lib.rs

//! Target assignment and collision resolution for a bench of "cobra"
//! fiber positioners.
//!
//! Given the fixed bench geometry and a set of science target positions,
//! the engine decides which target each two-link positioner observes and
//! where its fiber tip ends up: reachable targets are enumerated by
//! distance, assigned greedily, and link-to-link collisions between
//! neighboring arms are repaired by rotating idle fibers or swapping the
//! targets of an assigned pair.

pub mod bench;
pub mod collision;
pub mod engine;
pub mod geometry;
pub mod kinematics;
pub mod targets;

pub use bench::{Bench, BenchError, NeighborMap};
pub use collision::{CollisionPair, collisions_for_cobra, detect_collisions};
pub use engine::{Assignment, AssignmentEngine, EngineConfig};
pub use targets::{NO_TARGET, ReachabilityMap};

use glam::DVec2;

/// Runs the full assignment pipeline with the default configuration.
pub fn assign_targets(target_positions: &[DVec2], bench: &Bench) -> Assignment {
    AssignmentEngine::new().assign(target_positions, bench)
}
