use crate::solver::check_valuation;
use crate::{SATSolution, Solver, Valuation, CNF};

/// A simple CNF solver that naively checks all possible
/// valuations in order to decide satisfiability.
///
/// Only suitable for formulae with few variables; used as the
/// reference oracle in tests.
pub struct Bruteforce;

impl Solver for Bruteforce {
    fn solve(&self, formula: &CNF) -> SATSolution {
        // initial valuation sets all to false
        let mut valuation = vec![false; formula.num_variables];
        if guess(formula, 0, &mut valuation) {
            SATSolution::Satisfiable(valuation)
        } else {
            SATSolution::Unsatisfiable
        }
    }
}

fn guess(formula: &CNF, change: usize, valuation: &mut Valuation) -> bool {
    if change == valuation.len() {
        check_valuation(formula, valuation)
    } else if guess(formula, change + 1, valuation) {
        true
    } else {
        valuation[change] = true;
        let res = guess(formula, change + 1, valuation);
        if !res {
            valuation[change] = false;
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CNF;

    #[test]
    fn decides_simple_formulae() {
        assert!(Bruteforce.solve(&CNF::load(&[vec![1, 2], vec![-1, -2]]).unwrap()).is_sat());
        assert!(Bruteforce.solve(&CNF::load(&[vec![1], vec![-1]]).unwrap()).is_unsat());
    }
}
