// src/kinematics.rs

//! Two-link arm kinematics for cobra positioners.

use glam::DVec2;

/// Shoulder and elbow rotation angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmAngles {
    pub shoulder: f64,
    pub elbow: f64,
}

/// Solves the inverse kinematics for a fiber tip at `delta` relative to the
/// cobra center.
///
/// Returns angles `(θ, φ)` such that `tip = center + L1·e^{iθ} +
/// L2·e^{i(θ+φ)}`. Every cobra uses the negative-elbow branch (`φ ≤ 0`);
/// the neighbor collision tests require a single arm convention across the
/// whole bench. The result is undefined when `|delta|` lies outside
/// `[|L1 − L2|, L1 + L2]`; callers guarantee reachability beforehand.
pub fn rotation_angles(delta: DVec2, link1: f64, link2: f64) -> ArmAngles {
    let distance = delta.length();
    let distance_sq = distance * distance;
    let link1_sq = link1 * link1;
    let link2_sq = link2 * link2;

    // Law of cosines on the center-elbow-tip triangle. Operands are clamped
    // so roundoff at the annulus boundary cannot leave the acos domain.
    let cos_elbow = (distance_sq - link1_sq - link2_sq) / (2.0 * link1 * link2);
    let cos_shoulder = (distance_sq + link1_sq - link2_sq) / (2.0 * link1 * distance);

    ArmAngles {
        shoulder: delta.y.atan2(delta.x) + cos_shoulder.clamp(-1.0, 1.0).acos(),
        elbow: -cos_elbow.clamp(-1.0, 1.0).acos(),
    }
}

/// Elbow joint position for a fiber tip at `tip`.
pub fn elbow_position(tip: DVec2, center: DVec2, link1: f64, link2: f64) -> DVec2 {
    let angles = rotation_angles(tip - center, link1, link2);
    center + link1 * DVec2::from_angle(angles.shoulder)
}
