use auto_impl::auto_impl;

use super::super::clause::{ClauseId, Clauses};
use super::super::trail::Trail;
use super::super::update::Update;
use super::super::variable::Variables;
use crate::{CNFClause, CNFVar};

/// Derives a learned clause from a conflict.
pub trait LearningScheme: Update {
    /// Cuts the implication graph behind `conflict_clause` and returns
    /// the learned clause, its asserting literal and the backjump
    /// level at which the clause becomes unit. `None` reports a root
    /// conflict: the conflict does not depend on any decision and the
    /// formula is unsatisfiable.
    ///
    /// The asserting literal is placed first in the clause and a
    /// literal from the backjump level last, so the initial watch
    /// positions stay sound after the jump.
    fn find_asserting_clause(
        &mut self,
        conflict_clause: ClauseId,
        trail: &Trail,
        clauses: &Clauses,
        variables: &Variables,
    ) -> Option<(CNFClause, CNFVar, usize)>;
}

#[auto_impl(Box, Arc)]
pub trait LearningSchemeFactory: Send + Sync {
    fn create(&self, clauses: &Clauses, variables: &Variables) -> Box<dyn LearningScheme>;
}
