use itertools::Itertools;

use super::super::clause::{ClauseId, Clauses};
use super::super::update::Update;
use super::super::util::{HashMap, HashSet};
use super::super::variable::{AssignmentType, Variables};
use super::{ClauseDeletionStrategy, ClauseDeletionStrategyFactory};

/// Activity-driven database reduction.
///
/// Every learned clause carries a conflict-participation counter. Once
/// the database outgrows a threshold, the less active half is deleted
/// and the threshold grows, keeping memory bounded while busy clauses
/// survive. Binary clauses and clauses currently acting as a reason
/// are always kept.
pub struct ActivityDeletionInstance {
    activity: HashMap<ClauseId, usize>,
    insertion_order: Vec<ClauseId>,
    threshold: usize,
    threshold_growth: usize,
}

impl ActivityDeletionInstance {
    fn is_reason(clause: ClauseId, clauses: &Clauses, variables: &Variables) -> bool {
        clauses[clause].literals.iter().any(|lit| {
            matches!(
                variables[lit.id].assignment,
                Some(assignment) if assignment.reason == AssignmentType::Forced(clause)
            )
        })
    }
}

impl Update for ActivityDeletionInstance {
    fn on_learn(&mut self, learned_clause: ClauseId, _clauses: &Clauses, _variables: &Variables) {
        self.insertion_order.push(learned_clause);
        self.activity.insert(learned_clause, 0);
    }

    fn on_conflict(&mut self, conflict_clause: ClauseId, _clauses: &Clauses, _variables: &Variables) {
        // original clauses are not tracked
        if let Some(counter) = self.activity.get_mut(&conflict_clause) {
            *counter += 1;
        }
    }
}

impl ClauseDeletionStrategy for ActivityDeletionInstance {
    fn delete_clauses(&mut self, clauses: &Clauses, variables: &Variables) -> Vec<ClauseId> {
        if self.insertion_order.len() <= self.threshold {
            return Vec::new();
        }

        let keep_binary = |id: &ClauseId| clauses[*id].len() > 2;
        let activity = &self.activity;

        let to_delete: Vec<ClauseId> = self
            .insertion_order
            .iter()
            .cloned()
            .filter(keep_binary)
            .filter(|id| !ActivityDeletionInstance::is_reason(*id, clauses, variables))
            .sorted_by_key(|id| activity[id])
            .take(self.insertion_order.len() / 2)
            .collect();

        for id in &to_delete {
            self.activity.remove(id);
        }
        let deleted: HashSet<ClauseId> = to_delete.iter().cloned().collect();
        self.insertion_order.retain(|id| !deleted.contains(id));

        self.threshold += self.threshold_growth;
        to_delete
    }
}

/// Factory carrying the initial threshold and its growth per
/// reduction.
pub struct ActivityDeletion {
    threshold: usize,
    threshold_growth: usize,
}

impl Default for ActivityDeletion {
    fn default() -> Self {
        ActivityDeletion { threshold: 2000, threshold_growth: 500 }
    }
}

impl ClauseDeletionStrategyFactory for ActivityDeletion {
    fn create(&self, _clauses: &Clauses, _variables: &Variables) -> Box<dyn ClauseDeletionStrategy> {
        Box::new(ActivityDeletionInstance {
            activity: HashMap::default(),
            insertion_order: Vec::new(),
            threshold: self.threshold,
            threshold_growth: self.threshold_growth,
        })
    }
}
