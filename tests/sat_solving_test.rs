use proptest::test_runner::TestCaseError;
use proptest::{bool::weighted, collection::vec, prelude::*};

use verdict::cdcl::branching_strategies::Naive;
use verdict::cdcl::deletion_strategies::{ActivityDeletion, NoDeletion};
use verdict::cdcl::learning_schemes::FirstUIP;
use verdict::cdcl::restart_policies::{RestartFixed, RestartGeom, RestartLuby, RestartNever};
use verdict::{check_valuation, Bruteforce, CDCLSolver, CNFClause, CNFVar, Solver, CNF};

const MAX_NUM_VARIABLES: usize = 6;
const MAX_NUM_LITERALS: usize = 3;
const MAX_NUM_CLAUSES: usize = 12;

/// Checks a solver against the brute-force oracle on one formula:
/// same satisfiability verdict, and any reported model must actually
/// satisfy the formula.
fn check_against_oracle(solver: &impl Solver, formula: &CNF) -> Result<(), TestCaseError> {
    let solution = solver.solve(formula);
    let reference = Bruteforce.solve(formula);

    prop_assert_eq!(solution.is_sat(), reference.is_sat());
    if let Some(valuation) = solution.valuation() {
        prop_assert!(check_valuation(formula, valuation));
    }
    Ok(())
}

fn arbitrary_formula() -> impl Strategy<Value = CNF> {
    vec(
        vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS),
        1..=MAX_NUM_CLAUSES,
    )
    .prop_map(|clauses| {
        clauses
            .iter()
            .map(|clause| {
                clause
                    .iter()
                    .map(|&(variable, sign)| CNFVar::new(variable, sign))
                    .collect::<CNFClause>()
            })
            .collect()
    })
}

/// Resolvent of the first complementary clause pair, if any. Resolvents
/// are entailed by the formula, so adding one must not change the
/// verdict.
fn first_resolvent(formula: &CNF) -> Option<CNFClause> {
    for (i, left) in formula.clauses.iter().enumerate() {
        for right in formula.clauses.iter().skip(i + 1) {
            let pivot = match left.vars.iter().find(|lit| right.vars.contains(&lit.negated())) {
                Some(&pivot) => pivot,
                None => continue,
            };
            // drop the pivot from the left side and its negation from
            // the right side only; a tautological parent keeps its
            // other occurrence of the pivot variable
            let combined: CNFClause = left
                .vars
                .iter()
                .filter(|lit| **lit != pivot)
                .chain(right.vars.iter().filter(|lit| **lit != pivot.negated()))
                .cloned()
                .collect();
            if !combined.is_empty() {
                return Some(combined);
            }
        }
    }
    None
}

/// Resolving `(5 ∨ ¬5)` with `(¬3 ∨ ¬5)` on pivot `5` must yield
/// `(¬5 ∨ ¬3)`, not `(¬3)`: only the pivot polarity facing the other
/// clause leaves the resolvent.
#[test]
fn resolving_a_tautology_keeps_the_opposite_polarity() {
    let formula = CNF::load(&[vec![5, -5], vec![-3, -5], vec![3]]).unwrap();
    let resolvent = first_resolvent(&formula).expect("the first two clauses share variable 5");
    assert!(resolvent.vars.contains(&CNFVar::neg(5)));

    // the formula is satisfiable (3 true, 5 false) and must stay so
    // with the resolvent added
    let mut extended = formula;
    extended.push(resolvent);
    assert!(CDCLSolver::default().solve(&extended).is_sat());
}

proptest! {
    #[test]
    fn only_positive_unit_clauses(num_variables in 1..=MAX_NUM_VARIABLES) {
        let formula = (1..=num_variables)
            .map(|variable| CNFClause::single(CNFVar::pos(variable)))
            .collect();
        check_against_oracle(&CDCLSolver::default(), &formula)?;
    }

    #[test]
    fn only_negative_unit_clauses(num_variables in 1..=MAX_NUM_VARIABLES) {
        let formula = (1..=num_variables)
            .map(|variable| CNFClause::single(CNFVar::neg(variable)))
            .collect();
        check_against_oracle(&CDCLSolver::default(), &formula)?;
    }

    #[test]
    fn only_unit_clauses(signs in vec(weighted(0.5), 1..=MAX_NUM_VARIABLES)) {
        let formula = signs
            .iter()
            .enumerate()
            .map(|(variable, &sign)| CNFClause::single(CNFVar::new(variable + 1, sign)))
            .collect();
        check_against_oracle(&CDCLSolver::default(), &formula)?;
    }

    #[test]
    fn arbitrary_cnf_formula(formula in arbitrary_formula()) {
        check_against_oracle(&CDCLSolver::default(), &formula)?;
    }

    #[test]
    fn naive_branching_agrees_with_oracle(formula in arbitrary_formula()) {
        let solver = CDCLSolver::new(Naive, FirstUIP, NoDeletion, RestartNever);
        check_against_oracle(&solver, &formula)?;
    }

    /// Restarts must never change the verdict, only the search order.
    #[test]
    fn restart_policies_preserve_the_verdict(formula in arbitrary_formula()) {
        check_against_oracle(
            &CDCLSolver::new(Naive, FirstUIP, NoDeletion, RestartFixed::default()),
            &formula,
        )?;
        check_against_oracle(
            &CDCLSolver::new(Naive, FirstUIP, NoDeletion, RestartGeom::default()),
            &formula,
        )?;
        check_against_oracle(
            &CDCLSolver::new(Naive, FirstUIP, NoDeletion, RestartLuby::default()),
            &formula,
        )?;
    }

    /// Adding an entailed clause never flips the verdict.
    #[test]
    fn resolvents_preserve_the_verdict(formula in arbitrary_formula()) {
        let solver = CDCLSolver::default();
        let before = solver.solve(&formula).is_sat();

        let mut extended = formula.clone();
        if let Some(resolvent) = first_resolvent(&formula) {
            extended.push(resolvent);
        }

        prop_assert_eq!(solver.solve(&extended).is_sat(), before);
    }

    /// Clause deletion keeps the database bounded but must not lose
    /// completeness.
    #[test]
    fn clause_deletion_preserves_the_verdict(formula in arbitrary_formula()) {
        let solver = CDCLSolver::new(
            Naive,
            FirstUIP,
            ActivityDeletion::default(),
            RestartFixed::default(),
        );
        check_against_oracle(&solver, &formula)?;
    }
}
