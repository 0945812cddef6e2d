use itertools::Itertools;

use super::super::clause::{ClauseId, Clauses};
use super::super::update::Update;
use super::super::util::PriorityQueue;
use super::super::variable::Variables;
use super::{BranchingStrategy, BranchingStrategyFactory};
use crate::CNFVar;

/// Variable State Independent Decaying Sum branching.
///
/// Literals carry activity scores, bumped whenever they take part in a
/// conflict or appear in a learned clause, and halved periodically so
/// recent conflicts dominate the ordering.
pub struct VSIDSInstance {
    resort_period: usize,
    branchings: usize,
    priority_queue: PriorityQueue<usize, usize>,
    scores: Vec<usize>,
    counters: Vec<usize>,
}

impl VSIDSInstance {
    #[inline]
    fn literal_to_index(literal: &CNFVar) -> usize {
        2 * literal.id + literal.sign as usize
    }

    fn index_to_literal(index: usize) -> CNFVar {
        CNFVar {
            id: index / 2,
            sign: index % 2 == 1,
        }
    }

    fn bump_clause(&mut self, clause: ClauseId, clauses: &Clauses) {
        for lit in clauses[clause].literals.iter() {
            self.counters[VSIDSInstance::literal_to_index(lit)] += 1;
        }
    }
}

impl Update for VSIDSInstance {
    fn on_conflict(&mut self, conflict_clause: ClauseId, clauses: &Clauses, _variables: &Variables) {
        self.bump_clause(conflict_clause, clauses);
    }

    fn on_learn(&mut self, learned_clause: ClauseId, clauses: &Clauses, _variables: &Variables) {
        self.bump_clause(learned_clause, clauses);
    }

    fn on_unassign(&mut self, literal: CNFVar, _clauses: &Clauses, _variables: &Variables) {
        // both polarities become pickable again
        for index in &[
            VSIDSInstance::literal_to_index(&literal),
            VSIDSInstance::literal_to_index(&literal.negated()),
        ] {
            self.priority_queue.push(*index, self.scores[*index]);
        }
    }
}

impl BranchingStrategy for VSIDSInstance {
    fn pick_literal(&mut self, _clauses: &Clauses, variables: &Variables) -> Option<CNFVar> {
        self.branchings += 1;

        if self.branchings >= self.resort_period {
            self.branchings = 0;
            self.scores
                .iter_mut()
                .zip(self.counters.iter_mut())
                .for_each(|(score, counter)| {
                    *score = *score / 2 + *counter;
                    *counter = 0;
                });

            let scores = &self.scores;

            take_mut::take(&mut self.priority_queue, |pq| {
                pq.into_iter().map(|(id, _)| (id, scores[id])).collect()
            });
        }

        while let Some((index, _)) = self.priority_queue.pop() {
            let lit = VSIDSInstance::index_to_literal(index);
            if variables[lit.id].assignment.is_none() {
                return Some(lit);
            }
        }
        None
    }
}

pub struct VSIDS;

impl BranchingStrategyFactory for VSIDS {
    fn create(&self, clauses: &Clauses, variables: &Variables) -> Box<dyn BranchingStrategy> {
        let mut scores = std::iter::repeat(0).take(2 * variables.len()).collect_vec();
        let counters = scores.clone();

        for clause in clauses.iter() {
            for lit in clause.literals.iter() {
                scores[VSIDSInstance::literal_to_index(lit)] += 1;
            }
        }

        let priority_queue: PriorityQueue<usize, usize> = scores
            .iter()
            .enumerate()
            .map(|(id, priority)| (id, *priority))
            .collect();

        Box::new(VSIDSInstance {
            resort_period: 255,
            branchings: 0,
            priority_queue,
            scores,
            counters,
        })
    }
}
