use auto_impl::auto_impl;

use super::super::clause::Clauses;
use super::super::update::Update;
use super::super::variable::Variables;
use crate::CNFVar;

/// Chooses the next decision literal; `None` means every variable is
/// assigned and the search is complete.
pub trait BranchingStrategy: Update {
    fn pick_literal(&mut self, clauses: &Clauses, variables: &Variables) -> Option<CNFVar>;
}

#[auto_impl(Box, Arc)]
pub trait BranchingStrategyFactory: Send + Sync {
    fn create(&self, clauses: &Clauses, variables: &Variables) -> Box<dyn BranchingStrategy>;
}
