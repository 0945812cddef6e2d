use std::sync::atomic::{AtomicBool, Ordering};

use super::branching_strategies::{BranchingStrategy, BranchingStrategyFactory};
use super::clause::{Clause, ClauseId, Clauses};
use super::deletion_strategies::{ClauseDeletionStrategy, ClauseDeletionStrategyFactory};
use super::learning_schemes::{LearningScheme, LearningSchemeFactory};
use super::restart_policies::{RestartPolicy, RestartPolicyFactory};
use super::stats::Stats;
use super::trail::Trail;
use super::variable::{value_of, Variable, Variables};
use crate::{CNFClause, CNFVar, SATSolution, CNF};

/// The explicit search state machine. Conflicts and root conflicts are
/// transitions here, never errors.
enum SearchState {
    Propagating,
    Conflict(ClauseId),
    Backjumping {
        clause: CNFClause,
        assertion: CNFVar,
        level: usize,
    },
    Deciding,
}

/// All mutable state of one solve invocation: the clause database, the
/// variable assignments with their watch lists, the trail, and the
/// four strategies. Instances are independent; nothing is shared
/// between solves.
pub struct ExecutionState {
    clauses: Clauses,
    variables: Variables,
    trail: Trail,
    branching: Box<dyn BranchingStrategy>,
    learning: Box<dyn LearningScheme>,
    deletion: Box<dyn ClauseDeletionStrategy>,
    restart: Box<dyn RestartPolicy>,
    stats: Stats,
}

/// Normalises clauses: sorted literals without duplicates.
fn order_formula(cnf: CNF) -> CNF {
    let num_variables = cnf.num_variables;
    let clauses = cnf
        .clauses
        .into_iter()
        .map(|mut clause| {
            clause.vars.sort();
            clause.vars.dedup();
            clause
        })
        .collect();
    CNF::new(clauses, num_variables)
}

impl ExecutionState {
    /// Builds the execution state for one formula. `None` reports a
    /// formula containing an empty clause, which is trivially
    /// unsatisfiable.
    pub fn new(
        formula: CNF,
        branching: &dyn BranchingStrategyFactory,
        learning: &dyn LearningSchemeFactory,
        deletion: &dyn ClauseDeletionStrategyFactory,
        restart: &dyn RestartPolicyFactory,
    ) -> Option<ExecutionState> {
        if formula.clauses.iter().any(|clause| clause.is_empty()) {
            return None;
        }

        let formula = order_formula(formula);
        let variables: Variables = (1..=formula.num_variables)
            .map(|var_num| Variable::new(&formula, var_num))
            .collect();
        let clauses: Clauses = formula.clauses.iter().map(Clause::new).collect();
        let trail = Trail::new(&variables);

        Some(ExecutionState {
            branching: branching.create(&clauses, &variables),
            learning: learning.create(&clauses, &variables),
            deletion: deletion.create(&clauses, &variables),
            restart: restart.create(),
            clauses,
            variables,
            trail,
            stats: Stats::default(),
        })
    }

    /// Runs the search to a terminal outcome. The cancellation flag is
    /// polled at every `Deciding` entry; a raised flag terminates with
    /// `Interrupted` and no partial assignment.
    pub fn search(mut self, flag: Option<&AtomicBool>) -> (SATSolution, Stats) {
        let mut state = match self.assert_unit_clauses() {
            Some(conflict) => SearchState::Conflict(conflict),
            None => SearchState::Propagating,
        };

        loop {
            state = match state {
                SearchState::Propagating => match self.propagate_all() {
                    Some(conflict) => SearchState::Conflict(conflict),
                    None if self.trail.all_assigned(&self.variables) => {
                        let stats = self.stats;
                        return (self.into_solution(), stats);
                    }
                    None => SearchState::Deciding,
                },

                SearchState::Conflict(conflict) => {
                    self.stats.conflicts += 1;
                    self.notify_conflict(conflict);
                    match self.learning.find_asserting_clause(
                        conflict,
                        &self.trail,
                        &self.clauses,
                        &self.variables,
                    ) {
                        // a conflict without any decision: unsatisfiable
                        None => return (SATSolution::Unsatisfiable, self.stats),
                        Some((clause, assertion, level)) => {
                            SearchState::Backjumping { clause, assertion, level }
                        }
                    }
                }

                SearchState::Backjumping { clause, assertion, level } => {
                    let learned = self.add_clause(clause);
                    self.stats.learned += 1;
                    self.notify_learn(learned);

                    self.backjump(level);

                    // the learned clause is asserting: unit at the
                    // backjump level
                    self.stats.propagations += 1;
                    self.trail
                        .propagate(assertion, learned, &mut self.variables)
                        .unwrap_or_else(|_| {
                            unreachable!("asserting literal is unassigned after the backjump")
                        });
                    SearchState::Propagating
                }

                SearchState::Deciding => {
                    if flag.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
                        return (SATSolution::Interrupted, self.stats);
                    }

                    if self.restart.restart() {
                        self.stats.restarts += 1;
                        self.backjump(0);
                        SearchState::Propagating
                    } else {
                        self.reduce_database();

                        match self.branching.pick_literal(&self.clauses, &self.variables) {
                            None => {
                                let stats = self.stats;
                                return (self.into_solution(), stats);
                            }
                            Some(literal) => {
                                self.stats.decisions += 1;
                                self.trail.decide(literal, &mut self.variables);
                                SearchState::Propagating
                            }
                        }
                    }
                }
            };
        }
    }

    /// Propagates the unit clauses of the input formula at level 0.
    fn assert_unit_clauses(&mut self) -> Option<ClauseId> {
        for id in 0..self.clauses.len_formula() {
            if self.clauses[id].len() == 1 {
                let literal = self.clauses[id].get_first_watched();
                match value_of(&self.variables, literal) {
                    Some(true) => {}
                    Some(false) => return Some(id),
                    None => {
                        self.stats.propagations += 1;
                        if self
                            .trail
                            .propagate(literal, id, &mut self.variables)
                            .is_err()
                        {
                            return Some(id);
                        }
                    }
                }
            }
        }
        None
    }

    /// Processes pending trail entries in assignment order until the
    /// queue drains or a clause is fully falsified.
    fn propagate_all(&mut self) -> Option<ClauseId> {
        while let Some(variable) = self.trail.next_unpropagated() {
            let sign = self.variables[variable]
                .assignment
                .map(|assignment| assignment.sign)
                .unwrap_or_else(|| unreachable!("trail entries are assigned"));

            if let Some(conflict) = self.visit_watchers(CNFVar::new(variable, !sign)) {
                return Some(conflict);
            }
        }
        None
    }

    /// Visits every clause watching the newly falsified literal,
    /// moving watches away where possible and propagating or reporting
    /// a conflict where not.
    fn visit_watchers(&mut self, falsified: CNFVar) -> Option<ClauseId> {
        // the snapshot is needed because watch moves mutate the list
        let watchers: Vec<ClauseId> = self.variables[falsified.id]
            .watched(falsified.sign)
            .iter()
            .cloned()
            .collect();

        for clause_id in watchers {
            let (slot, other) = {
                let clause = &self.clauses[clause_id];
                let [w0, w1] = clause.watched_literals;
                if clause.literals[w0] == falsified {
                    (0, clause.literals[w1])
                } else {
                    (1, clause.literals[w0])
                }
            };

            // a unit clause has no other watch to fall back to
            if other == falsified {
                return Some(clause_id);
            }

            if value_of(&self.variables, other) == Some(true) {
                continue;
            }

            let replacement = {
                let clause = &self.clauses[clause_id];
                let [w0, w1] = clause.watched_literals;
                (0..clause.literals.len()).find(|&index| {
                    index != w0
                        && index != w1
                        && value_of(&self.variables, clause.literals[index]) != Some(false)
                })
            };

            match replacement {
                Some(index) => {
                    let new_watch = self.clauses[clause_id].literals[index];
                    self.clauses[clause_id].watched_literals[slot] = index;
                    self.variables[new_watch.id].add_watch(new_watch.sign, clause_id);
                    self.variables[falsified.id].remove_watch(falsified.sign, clause_id);
                }
                // all other literals are false: the clause forces the
                // remaining watch or is falsified outright
                None => match value_of(&self.variables, other) {
                    None => {
                        self.stats.propagations += 1;
                        if self
                            .trail
                            .propagate(other, clause_id, &mut self.variables)
                            .is_err()
                        {
                            return Some(clause_id);
                        }
                    }
                    Some(false) => return Some(clause_id),
                    Some(true) => unreachable!("satisfied clauses are skipped above"),
                },
            }
        }
        None
    }

    /// Registers a learned clause and hooks up its watches. Expects
    /// the asserting literal first and a backjump-level literal last.
    fn add_clause(&mut self, clause: CNFClause) -> ClauseId {
        let id = self.clauses.push(clause);
        let (first, last) = self.clauses[id].get_watched_lits();
        self.variables[first.id].add_watch(first.sign, id);
        self.variables[last.id].add_watch(last.sign, id);
        id
    }

    fn backjump(&mut self, level: usize) {
        let unassigned = self.trail.backjump_to(level, &mut self.variables);
        for literal in unassigned {
            self.notify_unassign(literal);
        }
    }

    /// Lets the deletion strategy bound the learned database and
    /// unhooks the watches of everything it discards.
    fn reduce_database(&mut self) {
        let to_delete = self.deletion.delete_clauses(&self.clauses, &self.variables);
        for clause_id in to_delete {
            debug_assert!(self.clauses.is_learned(clause_id));
            let (first, last) = self.clauses.remove(clause_id);
            self.variables[first.id].remove_watch(first.sign, clause_id);
            self.variables[last.id].remove_watch(last.sign, clause_id);
            self.stats.deleted += 1;
        }
    }

    fn notify_conflict(&mut self, conflict: ClauseId) {
        let ExecutionState { clauses, variables, branching, learning, deletion, restart, .. } =
            self;
        branching.on_conflict(conflict, clauses, variables);
        learning.on_conflict(conflict, clauses, variables);
        deletion.on_conflict(conflict, clauses, variables);
        restart.on_conflict(conflict, clauses, variables);
    }

    fn notify_learn(&mut self, learned: ClauseId) {
        let ExecutionState { clauses, variables, branching, learning, deletion, restart, .. } =
            self;
        branching.on_learn(learned, clauses, variables);
        learning.on_learn(learned, clauses, variables);
        deletion.on_learn(learned, clauses, variables);
        restart.on_learn(learned, clauses, variables);
    }

    fn notify_unassign(&mut self, literal: CNFVar) {
        let ExecutionState { clauses, variables, branching, learning, deletion, restart, .. } =
            self;
        branching.on_unassign(literal, clauses, variables);
        learning.on_unassign(literal, clauses, variables);
        deletion.on_unassign(literal, clauses, variables);
        restart.on_unassign(literal, clauses, variables);
    }

    fn into_solution(self) -> SATSolution {
        self.variables
            .into_iter()
            .map(|var| var.assignment.map(|assignment| assignment.sign).unwrap_or(false))
            .collect()
    }
}
