use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use stable_vec::StableVec;

use crate::{CNFClause, CNFVar};

pub type ClauseId = usize;

/// A clause in solver-internal form: 0-based literals plus the two
/// watched positions (both positions coincide for unit clauses).
#[derive(Debug)]
pub struct Clause {
    pub literals: Vec<CNFVar>,
    pub watched_literals: [usize; 2],
}

impl Clause {
    /// Converts an input clause to internal form, shifting the 1-based
    /// variable identifiers down to vector indices.
    pub fn new(cnf_clause: &CNFClause) -> Clause {
        let mut literals = cnf_clause.vars.clone();
        literals.iter_mut().for_each(|var| var.id -= 1);
        Clause::from_internal(literals)
    }

    /// Builds a clause whose literals are already 0-based. Watches the
    /// first and the last literal.
    pub fn from_internal(literals: Vec<CNFVar>) -> Clause {
        assert!(!literals.is_empty(), "clauses must contain at least one literal");
        let watched_literals = [0, literals.len() - 1];
        Clause { literals, watched_literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn get_watched_lits(&self) -> (CNFVar, CNFVar) {
        (
            self.literals[self.watched_literals[0]],
            self.literals[self.watched_literals[1]],
        )
    }

    pub fn get_first_watched(&self) -> CNFVar {
        self.literals[self.watched_literals[0]]
    }
}

/// The clause database: the immutable input formula followed by the
/// learned clauses. Learned clause slots are reused after deletion so
/// identifiers stay small and stable.
pub struct Clauses {
    formula: Vec<Clause>,
    additional_clauses: StableVec<Clause>,
    used_indices: BinaryHeap<Reverse<usize>>,
}

impl Clauses {
    pub fn new(formula: Vec<Clause>) -> Clauses {
        Clauses {
            formula,
            additional_clauses: StableVec::new(),
            used_indices: BinaryHeap::new(),
        }
    }

    /// Appends a learned clause and returns its identifier. Expects
    /// the asserting literal at position 0.
    pub fn push(&mut self, clause: CNFClause) -> ClauseId {
        let clause = Clause::from_internal(clause.vars);

        self.formula.len()
            + if let Some(Reverse(index)) = self.used_indices.pop() {
                self.additional_clauses.insert(index, clause);
                index
            } else {
                self.additional_clauses.push(clause)
            }
    }

    pub fn len(&self) -> usize {
        self.formula.len() + self.additional_clauses.num_elements()
    }

    /// Number of clauses in the original formula
    pub fn len_formula(&self) -> usize {
        self.formula.len()
    }

    pub fn is_learned(&self, index: ClauseId) -> bool {
        index >= self.formula.len()
    }

    /// Removes a learned clause, returning its watched literals so the
    /// caller can unhook the watch lists. Original clauses are never
    /// removable.
    pub fn remove(&mut self, index: ClauseId) -> (CNFVar, CNFVar) {
        let index = index
            .checked_sub(self.formula.len())
            .expect("cannot remove clauses from the original formula");

        self.used_indices.push(Reverse(index));

        self.additional_clauses
            .remove(index)
            .expect("clause to delete was already deleted")
            .get_watched_lits()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.formula.iter().chain(self.additional_clauses.values())
    }
}

impl Index<ClauseId> for Clauses {
    type Output = Clause;
    fn index(&self, index: ClauseId) -> &Self::Output {
        if index < self.formula.len() {
            &self.formula[index]
        } else {
            &self.additional_clauses[index - self.formula.len()]
        }
    }
}

impl IndexMut<ClauseId> for Clauses {
    fn index_mut(&mut self, index: ClauseId) -> &mut Self::Output {
        if index < self.formula.len() {
            &mut self.formula[index]
        } else {
            let offset = self.formula.len();
            &mut self.additional_clauses[index - offset]
        }
    }
}

impl FromIterator<Clause> for Clauses {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        Clauses::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.literals
                .iter()
                .map(|lit| format!("{}{}", if lit.sign { ' ' } else { '-' }, lit.id + 1))
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(lits: &[(usize, bool)]) -> CNFClause {
        lits.iter().map(|&(id, sign)| CNFVar::new(id, sign)).collect()
    }

    #[test]
    fn learned_slots_are_reused() {
        let mut clauses = Clauses::new(vec![Clause::from_internal(vec![
            CNFVar::pos(0),
            CNFVar::neg(1),
        ])]);

        let first = clauses.push(internal(&[(0, false), (1, true)]));
        let second = clauses.push(internal(&[(1, false), (2, true)]));
        assert_eq!((first, second), (1, 2));
        assert_eq!(clauses.len(), 3);

        clauses.remove(first);
        assert_eq!(clauses.len(), 2);

        // freed identifier comes back first
        assert_eq!(clauses.push(internal(&[(2, false)])), first);
        assert_eq!(clauses.len(), 3);
    }

    #[test]
    #[should_panic(expected = "original formula")]
    fn original_clauses_are_not_removable() {
        let mut clauses =
            Clauses::new(vec![Clause::from_internal(vec![CNFVar::pos(0)])]);
        clauses.remove(0);
    }

    #[test]
    fn unit_clause_watches_coincide() {
        let clause = Clause::new(&CNFClause::single(crate::CNFVar::pos(3)));
        assert_eq!(clause.watched_literals, [0, 0]);
        assert_eq!(clause.get_first_watched(), CNFVar::pos(2));
    }
}
