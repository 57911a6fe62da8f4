//! End-to-end tests of the public surface.

use munkres::prelude::*;
use munkres::{optimal_assignments, run_solver_with_config, MunkresError};
use munkres_test::{scenarios, MatrixGenerator};

#[test]
fn test_three_by_three_text() {
    let text = optimal_assignments(&["(1,2,1)", "(4,1,5)", "(5,2,1)"]).unwrap();
    assert_eq!(text, "(1-1)(2-2)(3-3)");
}

#[test]
fn test_single_cell_text() {
    assert_eq!(optimal_assignments(&["(7)"]).unwrap(), "(1-1)");
}

#[test]
fn test_text_rejects_non_square() {
    let err = optimal_assignments(&["(1,2)", "(3,4)", "(5,6)"]).unwrap_err();
    assert_eq!(
        err,
        MunkresError::NotSquare {
            row: 0,
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_strategies_agree_on_cost() {
    let mut generator = MatrixGenerator::new(99);
    let hungarian = SolverConfig::new();
    let brute = SolverConfig::new().with_strategy(Strategy::BruteForce);
    for n in 1..=6 {
        let matrix = generator.matrix(n, 500);
        let a = run_solver_with_config(matrix.clone(), &hungarian).unwrap();
        let b = run_solver_with_config(matrix, &brute).unwrap();
        assert_eq!(a.total_cost, b.total_cost);
    }
}

#[test]
fn test_uniform_cost_only() {
    let solution = HungarianSolver::new(scenarios::uniform(3, 5)).solve().unwrap();
    assert_eq!(solution.total_cost, 15);
}

#[test]
fn test_run_solver_without_config_file() {
    let solution = munkres::run_solver(scenarios::small_four()).unwrap();
    assert_eq!(solution.total_cost, 11);
}
