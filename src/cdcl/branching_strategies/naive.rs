use super::super::clause::Clauses;
use super::super::update::Update;
use super::super::variable::Variables;
use super::{BranchingStrategy, BranchingStrategyFactory};
use crate::CNFVar;

/// Branches on the first unassigned variable, positively.
pub struct NaiveInstance;

impl Update for NaiveInstance {}

impl BranchingStrategy for NaiveInstance {
    fn pick_literal(&mut self, _clauses: &Clauses, variables: &Variables) -> Option<CNFVar> {
        variables.iter().enumerate().find_map(|(id, var)| {
            if var.assignment.is_none() {
                Some(CNFVar::new(id, true))
            } else {
                None
            }
        })
    }
}

pub struct Naive;

impl BranchingStrategyFactory for Naive {
    fn create(&self, _clauses: &Clauses, _variables: &Variables) -> Box<dyn BranchingStrategy> {
        Box::new(NaiveInstance)
    }
}
