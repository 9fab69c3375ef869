// tests/common/mod.rs

use cobra_assign::Bench;
use glam::DVec2;

/// Bench of identical cobras with both link lengths `link`, patrol annulus
/// `(r_min, r_max)` and homes at `center + home_offset`.
pub fn uniform_bench(
    centers: &[DVec2],
    link: f64,
    r_min: f64,
    r_max: f64,
    min_dist: f64,
    home_offset: DVec2,
    links: &[(u32, u32)],
) -> Bench {
    let n = centers.len();
    Bench::new(
        centers.to_vec(),
        vec![link; n],
        vec![link; n],
        vec![r_min; n],
        vec![r_max; n],
        centers.iter().map(|&c| c + home_offset).collect(),
        vec![min_dist; n],
        links,
    )
    .expect("test bench must validate")
}
