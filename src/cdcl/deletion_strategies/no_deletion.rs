use super::super::clause::{ClauseId, Clauses};
use super::super::update::Update;
use super::super::variable::Variables;
use super::{ClauseDeletionStrategy, ClauseDeletionStrategyFactory};

/// Keeps every learned clause.
pub struct NoDeletion;

impl Update for NoDeletion {}

impl ClauseDeletionStrategy for NoDeletion {
    fn delete_clauses(&mut self, _clauses: &Clauses, _variables: &Variables) -> Vec<ClauseId> {
        Vec::new()
    }
}

impl ClauseDeletionStrategyFactory for NoDeletion {
    fn create(&self, _clauses: &Clauses, _variables: &Variables) -> Box<dyn ClauseDeletionStrategy> {
        Box::new(NoDeletion)
    }
}
