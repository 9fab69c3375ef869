// src/targets/mod.rs

pub mod greedy;
pub mod reachability;

pub use reachability::ReachabilityMap;

/// Sentinel target index meaning "no target assigned".
pub const NO_TARGET: i32 = -1;
