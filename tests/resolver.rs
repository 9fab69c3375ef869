mod common;

use std::f64::consts::TAU;

use cobra_assign::targets::{ReachabilityMap, greedy};
use cobra_assign::{Bench, CollisionPair, NO_TARGET, assign_targets, collisions_for_cobra, detect_collisions};
use common::uniform_bench;
use glam::DVec2;

/// Two cobras facing each other across targets placed symmetrically off
/// the center line. Greedy pairing crosses the arms; the swapped pairing
/// keeps each arm on its own side.
fn crossing_bench() -> (Bench, Vec<DVec2>) {
    let centers = [DVec2::ZERO, DVec2::new(1.0, 0.0)];
    let bench = uniform_bench(&centers, 0.5, 0.05, 1.0, 0.1, DVec2::new(0.3, 0.3), &[(0, 1)]);
    let targets = vec![DVec2::new(0.5, -0.25), DVec2::new(0.5, 0.25)];
    (bench, targets)
}

#[test]
fn crossed_arms_are_repaired_by_a_target_swap() {
    let (bench, targets) = crossing_bench();

    let result = assign_targets(&targets, &bench);

    // Greedy alone pairs cobra 0 with target 0 and collides; the resolver
    // must commit the swapped pairing and clear every collision.
    assert_eq!(result.targets, vec![1, 0]);
    assert_eq!(result.fiber_positions, vec![targets[1], targets[0]]);
    assert!(detect_collisions(&result.fiber_positions, &bench).is_empty());
}

#[test]
fn detector_reports_the_crossed_pairing() {
    let (bench, targets) = crossing_bench();

    // The pairing the greedy stage would produce, before any repair.
    let fibers = vec![targets[0], targets[1]];

    assert_eq!(
        detect_collisions(&fibers, &bench),
        vec![CollisionPair { first: 0, second: 1 }]
    );
    assert_eq!(collisions_for_cobra(0, &fibers, &bench), 1);
    assert_eq!(collisions_for_cobra(1, &fibers, &bench), 1);
}

#[test]
fn without_neighbors_the_resolver_is_a_no_op() {
    let (_, targets) = crossing_bench();
    let centers = [DVec2::ZERO, DVec2::new(1.0, 0.0)];
    let bench = uniform_bench(&centers, 0.5, 0.05, 1.0, 0.1, DVec2::new(0.3, 0.3), &[]);

    let result = assign_targets(&targets, &bench);

    // The crossed greedy pairing survives untouched.
    let reach = ReachabilityMap::build(&targets, &bench);
    let expected = greedy::assign_by_distance(&reach, targets.len());
    assert_eq!(result.targets, expected);
    assert_eq!(result.fiber_positions, vec![targets[0], targets[1]]);
}

#[test]
fn idle_neighbor_rotates_out_of_the_way() {
    // Cobra 1 cannot reach the lone target (inside its inner radius) and
    // idles with its home fiber under cobra 0's outer link.
    let centers = vec![DVec2::ZERO, DVec2::new(1.0, 0.0)];
    let homes = vec![DVec2::new(0.3, 0.0), DVec2::new(0.65, 0.0)];
    let bench = Bench::new(
        centers,
        vec![0.5; 2],
        vec![0.5; 2],
        vec![0.05, 0.3],
        vec![1.0; 2],
        homes,
        vec![0.1; 2],
        &[(0, 1)],
    )
    .unwrap();
    let targets = vec![DVec2::new(0.8, 0.0)];

    let result = assign_targets(&targets, &bench);

    assert_eq!(result.targets, vec![0, NO_TARGET]);
    assert_eq!(result.fiber_positions[0], targets[0]);

    // The first rotation step already clears the collision.
    let center = DVec2::new(1.0, 0.0);
    let expected = DVec2::from_angle(TAU / 6.0).rotate(DVec2::new(0.65, 0.0) - center) + center;
    assert_eq!(result.fiber_positions[1], expected);
    assert!(detect_collisions(&result.fiber_positions, &bench).is_empty());
}

#[test]
fn pair_without_alternatives_keeps_its_targets_and_stays_reported() {
    // Each cobra reaches exactly one target; the inflated link widths make
    // the pair collide with no repair available.
    let centers = [DVec2::ZERO, DVec2::new(1.0, 0.0)];
    let bench = uniform_bench(&centers, 0.5, 0.05, 1.0, 1.5, DVec2::new(0.0, 0.3), &[(0, 1)]);
    let targets = vec![DVec2::new(-0.2, 0.0), DVec2::new(1.2, 0.0)];

    let result = assign_targets(&targets, &bench);

    // Commitment to the original targets, residual still observable.
    assert_eq!(result.targets, vec![0, 1]);
    assert_eq!(result.fiber_positions, targets);
    assert_eq!(
        detect_collisions(&result.fiber_positions, &bench),
        vec![CollisionPair { first: 0, second: 1 }]
    );
}
