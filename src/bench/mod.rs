// src/bench/mod.rs

//! Read-only bench geometry consumed by the assignment engine.

mod neighbors;

pub use neighbors::NeighborMap;

use glam::DVec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BenchError {
    #[error("field `{field}` has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        found: usize,
        expected: usize,
    },
    #[error("cobra {0} has a non-positive link length")]
    InvalidLink(usize),
    #[error("cobra {0} has an invalid patrol annulus (rMin {1}, rMax {2})")]
    InvalidAnnulus(usize, f64, f64),
    #[error("cobra {0} has a non-positive collision distance")]
    InvalidMinDist(usize),
    #[error("neighbor pair ({0}, {1}) references a cobra outside the bench")]
    NeighborOutOfRange(u32, u32),
}

/// Fixed geometric description of every cobra on the bench.
///
/// The engine never mutates a bench; one validated instance can serve any
/// number of assignment calls.
pub struct Bench {
    /// Rotation centers.
    pub centers: Vec<DVec2>,
    /// Shoulder link lengths.
    pub link1: Vec<f64>,
    /// Elbow link lengths.
    pub link2: Vec<f64>,
    /// Inner patrol radii.
    pub r_min: Vec<f64>,
    /// Outer patrol radii.
    pub r_max: Vec<f64>,
    /// Default fiber positions for unassigned cobras.
    pub home: Vec<DVec2>,
    /// Effective link half-widths entering the collision threshold.
    pub min_dist: Vec<f64>,
    /// Cobras whose patrol areas may overlap.
    pub neighbors: NeighborMap,
}

impl Bench {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        centers: Vec<DVec2>,
        link1: Vec<f64>,
        link2: Vec<f64>,
        r_min: Vec<f64>,
        r_max: Vec<f64>,
        home: Vec<DVec2>,
        min_dist: Vec<f64>,
        neighbor_links: &[(u32, u32)],
    ) -> Result<Self, BenchError> {
        let n = centers.len();
        check_len("link1", link1.len(), n)?;
        check_len("link2", link2.len(), n)?;
        check_len("r_min", r_min.len(), n)?;
        check_len("r_max", r_max.len(), n)?;
        check_len("home", home.len(), n)?;
        check_len("min_dist", min_dist.len(), n)?;

        for i in 0..n {
            if link1[i] <= 0.0 || link2[i] <= 0.0 {
                return Err(BenchError::InvalidLink(i));
            }
            if r_min[i] < 0.0 || r_max[i] <= r_min[i] {
                return Err(BenchError::InvalidAnnulus(i, r_min[i], r_max[i]));
            }
            if min_dist[i] <= 0.0 {
                return Err(BenchError::InvalidMinDist(i));
            }
        }

        for &(a, b) in neighbor_links {
            if a as usize >= n || b as usize >= n {
                return Err(BenchError::NeighborOutOfRange(a, b));
            }
        }

        Ok(Self {
            centers,
            link1,
            link2,
            r_min,
            r_max,
            home,
            min_dist,
            neighbors: NeighborMap::new(n, neighbor_links),
        })
    }

    pub fn cobra_count(&self) -> usize {
        self.centers.len()
    }
}

fn check_len(field: &'static str, found: usize, expected: usize) -> Result<(), BenchError> {
    if found != expected {
        return Err(BenchError::LengthMismatch { field, found, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_bench() -> Result<Bench, BenchError> {
        Bench::new(
            vec![DVec2::ZERO, DVec2::new(2.0, 0.0)],
            vec![0.6; 2],
            vec![0.5; 2],
            vec![0.1; 2],
            vec![1.1; 2],
            vec![DVec2::new(0.5, 0.0), DVec2::new(2.5, 0.0)],
            vec![0.1; 2],
            &[(0, 1)],
        )
    }

    #[test]
    fn valid_bench_passes() {
        assert!(valid_bench().is_ok());
    }

    #[test]
    fn mismatched_field_lengths_are_rejected() {
        let result = Bench::new(
            vec![DVec2::ZERO],
            vec![0.6, 0.6],
            vec![0.5],
            vec![0.1],
            vec![1.1],
            vec![DVec2::ZERO],
            vec![0.1],
            &[],
        );
        assert_eq!(
            result.err(),
            Some(BenchError::LengthMismatch { field: "link1", found: 2, expected: 1 })
        );
    }

    #[test]
    fn inverted_annulus_is_rejected() {
        let result = Bench::new(
            vec![DVec2::ZERO],
            vec![0.6],
            vec![0.5],
            vec![1.1],
            vec![0.1],
            vec![DVec2::ZERO],
            vec![0.1],
            &[],
        );
        assert_eq!(result.err(), Some(BenchError::InvalidAnnulus(0, 1.1, 0.1)));
    }

    #[test]
    fn neighbor_out_of_range_is_rejected() {
        let result = Bench::new(
            vec![DVec2::ZERO],
            vec![0.6],
            vec![0.5],
            vec![0.1],
            vec![1.1],
            vec![DVec2::ZERO],
            vec![0.1],
            &[(0, 7)],
        );
        assert_eq!(result.err(), Some(BenchError::NeighborOutOfRange(0, 7)));
    }
}
