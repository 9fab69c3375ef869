// src/engine/config.rs

/// Tuning knobs for the assignment pipeline.
///
/// The defaults reproduce the reference repair behavior; the knobs exist so
/// tests can exercise degenerate settings, not to change the algorithm.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Rotation repair divides the full turn into this many steps and tries
    /// every non-zero multiple (`k·2π/steps` for `k = 1..steps−1`).
    pub home_rotation_steps: usize,

    /// Minimum drop in a colliding pair's combined collision count before a
    /// target swap is accepted. A drop of one just moves the collision onto
    /// a third cobra.
    pub swap_min_gain: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            home_rotation_steps: 6,
            swap_min_gain: 2,
        }
    }
}
