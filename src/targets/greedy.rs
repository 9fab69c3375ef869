// src/targets/greedy.rs

//! Distance-greedy target assignment over the reachability matrix.

use smallvec::SmallVec;

use super::{NO_TARGET, ReachabilityMap};

/// Assigns at most one target per cobra, sweeping the reachability matrix
/// column by column so that closer associations are settled first.
///
/// Within a column, a contested target goes to the cobra that would
/// otherwise run out of options, then to the closest contender, then to
/// the lowest cobra index. Returns the target index per cobra, `NO_TARGET`
/// where nothing reachable was left.
pub fn assign_by_distance(reach: &ReachabilityMap, target_count: usize) -> Vec<i32> {
    let n = reach.cobra_count();
    let mut assigned = vec![NO_TARGET; n];
    let mut free_cobras = vec![true; n];
    let mut free_targets = vec![true; target_count];

    for column in 0..reach.width() {
        // Distinct targets contested in this column, snapshot at column
        // entry. Assignments below only ever consume targets on this list,
        // so the snapshot stays valid for the whole column.
        let mut column_targets: Vec<i32> = (0..n)
            .filter(|&i| free_cobras[i])
            .map(|i| reach.target_at(i, column))
            .filter(|&t| t != NO_TARGET && free_targets[t as usize])
            .collect();
        column_targets.sort_unstable();
        column_targets.dedup();

        for &target in &column_targets {
            // Free cobras whose choice in this column is the target.
            let contenders: SmallVec<[usize; 4]> = (0..n)
                .filter(|&i| free_cobras[i] && reach.target_at(i, column) == target)
                .collect();

            let winner = if contenders.len() == 1 {
                contenders[0]
            } else {
                pick_contender(reach, &contenders, column, &free_targets)
            };

            assigned[winner] = target;
            free_cobras[winner] = false;
            free_targets[target as usize] = false;
        }
    }

    assigned
}

/// Chooses among several free cobras contesting the same target.
fn pick_contender(
    reach: &ReachabilityMap,
    contenders: &[usize],
    column: usize,
    free_targets: &[bool],
) -> usize {
    // Cobras that lose their last remaining option unless they take the
    // target now.
    let last_chance: SmallVec<[usize; 4]> = contenders
        .iter()
        .copied()
        .filter(|&i| remaining_options(reach, i, column, free_targets) == 1)
        .collect();

    match last_chance.len() {
        0 => closest(reach, contenders, column),
        1 => last_chance[0],
        _ => closest(reach, &last_chance, column),
    }
}

/// Still-available targets in cobra `i`'s row from `column` onward.
fn remaining_options(
    reach: &ReachabilityMap,
    i: usize,
    column: usize,
    free_targets: &[bool],
) -> usize {
    (column..reach.width())
        .map(|k| reach.target_at(i, k))
        .filter(|&t| t != NO_TARGET && free_targets[t as usize])
        .count()
}

/// The cobra closest to its choice in this column; ties resolve to the
/// lowest index.
fn closest(reach: &ReachabilityMap, cobras: &[usize], column: usize) -> usize {
    let mut best = cobras[0];
    let mut best_distance = reach.distance_at(best, column);

    for &i in &cobras[1..] {
        let distance = reach.distance_at(i, column);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}
