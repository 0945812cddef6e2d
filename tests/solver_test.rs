use std::time::Duration;

use verdict::solvers::TimeLimitedSolver;
use verdict::{check_valuation, CDCLSolver, LoadError, SATSolution, Solver, CNF};

/// Unsatisfiable pigeonhole instance: `pigeons` pigeons into `holes`
/// holes, one pigeon per hole. Variable `p * holes + h + 1` places
/// pigeon `p` into hole `h`.
fn pigeonhole(pigeons: usize, holes: usize) -> CNF {
    let var = |p: usize, h: usize| (p * holes + h + 1) as i32;
    let mut clauses = Vec::new();
    for p in 0..pigeons {
        clauses.push((0..holes).map(|h| var(p, h)).collect::<Vec<_>>());
    }
    for h in 0..holes {
        for p in 0..pigeons {
            for q in p + 1..pigeons {
                clauses.push(vec![-var(p, h), -var(q, h)]);
            }
        }
    }
    CNF::load(&clauses).unwrap()
}

#[test]
fn decides_satisfiable_formula_with_a_valid_model() {
    let formula = CNF::load(&[vec![1, 2], vec![-1, -2]]).unwrap();
    let solution = CDCLSolver::default().solve(&formula);
    let valuation = solution.valuation().expect("formula is satisfiable");
    assert!(check_valuation(&formula, valuation));
}

#[test]
fn refutes_formula_by_propagation_alone() {
    let formula = CNF::load(&[vec![1, 2], vec![-1, 2], vec![-2]]).unwrap();
    assert!(CDCLSolver::default().solve(&formula).is_unsat());
}

#[test]
fn formula_without_clauses_assigns_every_variable() {
    let formula = CNF::new(vec![], 5);
    let solution = CDCLSolver::default().solve(&formula);
    assert_eq!(solution.valuation().map(Vec::len), Some(5));
}

#[test]
fn refutes_pigeonhole_instances() {
    assert!(CDCLSolver::default().solve(&pigeonhole(4, 3)).is_unsat());
}

#[test]
fn reports_search_counters() {
    let (solution, stats) = CDCLSolver::default().solve_with_stats(&pigeonhole(4, 3));
    assert!(solution.is_unsat());
    assert!(stats.conflicts > 0);
    assert!(stats.decisions > 0);
    assert!(stats.learned > 0);
}

#[test]
fn time_limit_interrupts_long_searches() {
    let solver = TimeLimitedSolver::new(CDCLSolver::default(), Duration::from_millis(1));
    // large enough that the deadline fires first
    let solution = solver.solve(&pigeonhole(10, 9));
    assert_eq!(solution, SATSolution::Interrupted);
}

#[test]
fn generous_time_limit_leaves_the_verdict_alone() {
    let solver = TimeLimitedSolver::new(CDCLSolver::default(), Duration::from_secs(60));
    assert!(solver.solve(&pigeonhole(3, 2)).is_unsat());
}

#[test]
fn malformed_input_is_rejected_before_solving() {
    assert_eq!(CNF::load(&[vec![1], vec![]]).unwrap_err(), LoadError::EmptyClause);
    assert_eq!(
        CNF::load_with_variables(&[vec![1, 5]], 3).unwrap_err(),
        LoadError::MalformedLiteral(5)
    );
}
