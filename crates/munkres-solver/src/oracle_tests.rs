//! Cross-checks of the Hungarian solver against the brute force oracle.

use munkres_core::{Cost, CostMatrix};
use munkres_test::{scenarios, MatrixGenerator};

use crate::{AssignmentSolver, BruteForceSolver, HungarianSolver};

fn hungarian_cost(matrix: &CostMatrix) -> Cost {
    HungarianSolver::new(matrix.clone()).solve().unwrap().total_cost
}

fn brute_force_cost(matrix: &CostMatrix) -> Cost {
    BruteForceSolver::new(matrix.clone()).solve().unwrap().total_cost
}

#[test]
fn test_hungarian_matches_oracle_on_random_matrices() {
    let mut generator = MatrixGenerator::new(7);
    for n in 1..=7 {
        for _ in 0..40 {
            let matrix = generator.matrix(n, 20);
            assert_eq!(
                hungarian_cost(&matrix),
                brute_force_cost(&matrix),
                "cost mismatch for {matrix:?}"
            );
        }
    }
}

#[test]
fn test_hungarian_matches_oracle_at_size_eight() {
    let mut generator = MatrixGenerator::new(8);
    for _ in 0..3 {
        let matrix = generator.matrix(8, 1000);
        assert_eq!(hungarian_cost(&matrix), brute_force_cost(&matrix));
    }
}

#[test]
fn test_hungarian_matches_oracle_with_many_ties() {
    let mut generator = MatrixGenerator::new(11);
    for n in 2..=6 {
        for _ in 0..40 {
            let matrix = generator.matrix(n, 2);
            assert_eq!(hungarian_cost(&matrix), brute_force_cost(&matrix));
        }
    }
}

#[test]
fn test_result_is_always_a_permutation() {
    let mut generator = MatrixGenerator::new(21);
    for n in 1..=30 {
        let matrix = generator.matrix(n, 100);
        let solution = HungarianSolver::new(matrix.clone()).solve().unwrap();
        assert_eq!(solution.assignment.len(), n);
        assert!(solution.assignment.is_permutation());
        assert_eq!(
            matrix.assignment_cost(solution.assignment.columns()),
            Some(solution.total_cost)
        );
    }
}

#[test]
fn test_adding_constant_to_row_shifts_cost_only() {
    let mut generator = MatrixGenerator::new(5);
    for n in 2..=8 {
        let matrix = generator.matrix(n, 50);
        let base = HungarianSolver::new(matrix.clone()).solve().unwrap();

        let row = n / 2;
        let k: Cost = 37;
        let shifted = scenarios::with_row_offset(&matrix, row, k);
        let moved = HungarianSolver::new(shifted.clone()).solve().unwrap();

        assert_eq!(moved.total_cost, base.total_cost + k);
        // The original optimum is still optimal after the shift
        assert_eq!(
            shifted.assignment_cost(base.assignment.columns()),
            Some(moved.total_cost)
        );
    }
}

#[test]
fn test_step_count_within_cubic_bound() {
    let mut generator = MatrixGenerator::new(50);
    for n in (1..=50).step_by(7).chain([50]) {
        let matrix = generator.matrix(n, 1000);
        let solution = HungarianSolver::new(matrix).solve().unwrap();
        let n = n as u64;
        assert!(
            solution.stats.step_count <= 4 * n * n * n + 4,
            "n = {n}: {} steps",
            solution.stats.step_count
        );
        assert!(solution.stats.augmentations <= n);
    }
}

#[test]
fn test_uniform_matrix_any_permutation_is_optimal() {
    for n in 1..=6 {
        let matrix = scenarios::uniform(n, 5);
        let solution = HungarianSolver::new(matrix).solve().unwrap();
        assert_eq!(solution.total_cost, 5 * n as Cost);
        assert!(solution.assignment.is_permutation());
    }
}
