use super::clause::{ClauseId, Clauses};
use super::variable::Variables;
use crate::CNFVar;

/// Search events broadcast to every strategy. All hooks default to
/// no-ops so strategies only implement what they track.
pub trait Update {
    fn on_conflict(&mut self, _conflict_clause: ClauseId, _clauses: &Clauses, _variables: &Variables) {}
    fn on_learn(&mut self, _learned_clause: ClauseId, _clauses: &Clauses, _variables: &Variables) {}
    fn on_unassign(&mut self, _literal: CNFVar, _clauses: &Clauses, _variables: &Variables) {}
}
