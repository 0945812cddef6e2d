use auto_impl::auto_impl;

use super::super::clause::{ClauseId, Clauses};
use super::super::update::Update;
use super::super::variable::Variables;

/// Bounds the learned-clause database. Called at every `Deciding`
/// entry; returns the learned clauses to delete. Implementations must
/// never return original clauses or clauses that are the reason of a
/// current assignment.
pub trait ClauseDeletionStrategy: Update {
    fn delete_clauses(&mut self, clauses: &Clauses, variables: &Variables) -> Vec<ClauseId>;
}

#[auto_impl(Box, Arc)]
pub trait ClauseDeletionStrategyFactory: Send + Sync {
    fn create(&self, clauses: &Clauses, variables: &Variables) -> Box<dyn ClauseDeletionStrategy>;
}
