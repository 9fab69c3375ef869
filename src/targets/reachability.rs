// src/targets/reachability.rs

//! Per-cobra enumeration of reachable targets, ordered by distance.

use glam::DVec2;
use smallvec::SmallVec;

use crate::bench::Bench;

use super::NO_TARGET;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

type Candidates = SmallVec<[(i32, f64); 8]>;

/// Rectangular N×K matrix of the targets each cobra can reach.
///
/// Row `i` holds cobra `i`'s reachable targets sorted by distance from its
/// center (ties broken by target index), padded to the bench-wide maximum
/// count with `NO_TARGET` / 0.0. The assigner walks the matrix column by
/// column, so padding distances are never read.
pub struct ReachabilityMap {
    cobra_count: usize,
    width: usize,
    target_idx: Vec<i32>,
    target_dist: Vec<f64>,
}

impl ReachabilityMap {
    pub fn build(target_positions: &[DVec2], bench: &Bench) -> Self {
        let n = bench.cobra_count();

        #[cfg(feature = "parallel")]
        let rows: Vec<Candidates> = (0..n)
            .into_par_iter()
            .map(|i| scan_cobra(i, target_positions, bench))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Candidates> = (0..n)
            .map(|i| scan_cobra(i, target_positions, bench))
            .collect();

        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut target_idx = vec![NO_TARGET; n * width];
        let mut target_dist = vec![0.0; n * width];

        for (i, mut row) in rows.into_iter().enumerate() {
            row.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
            for (k, &(target, distance)) in row.iter().enumerate() {
                target_idx[i * width + k] = target;
                target_dist[i * width + k] = distance;
            }
        }

        Self { cobra_count: n, width, target_idx, target_dist }
    }

    pub fn cobra_count(&self) -> usize {
        self.cobra_count
    }

    /// Number of matrix columns: the bench-wide maximum reachable count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The k-th nearest reachable target of cobra `i`, or `NO_TARGET`.
    #[inline]
    pub fn target_at(&self, i: usize, k: usize) -> i32 {
        self.target_idx[i * self.width + k]
    }

    /// Distance matching `target_at(i, k)`; 0.0 on padding slots.
    #[inline]
    pub fn distance_at(&self, i: usize, k: usize) -> f64 {
        self.target_dist[i * self.width + k]
    }

    /// Cobra `i`'s full row of target indices, padding included.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.target_idx[i * self.width..(i + 1) * self.width]
    }
}

/// Collects the targets inside cobra `i`'s patrol annulus.
fn scan_cobra(i: usize, target_positions: &[DVec2], bench: &Bench) -> Candidates {
    let center = bench.centers[i];
    let r_min = bench.r_min[i];
    let r_max = bench.r_max[i];

    let mut found = Candidates::new();
    for (t, &position) in target_positions.iter().enumerate() {
        let offset = position - center;

        // Cheap box pre-filter before paying for the square root.
        if offset.x.abs() >= r_max || offset.y.abs() >= r_max {
            continue;
        }

        let distance = offset.length();
        if distance > r_min && distance < r_max {
            found.push((t as i32, distance));
        }
    }
    found
}
