use tinyset::SetUsize;

use super::super::clause::{ClauseId, Clauses};
use super::super::trail::Trail;
use super::super::update::Update;
use super::super::variable::{AssignmentType, Variables};
use super::{LearningScheme, LearningSchemeFactory};
use crate::{CNFClause, CNFVar};

/// First unique implication point learning.
///
/// Resolves the conflict clause against the reasons of the
/// current-level literals, walking the trail backwards, until a single
/// current-level literal remains. The learned clause is asserting: it
/// becomes unit right after backjumping to its second-highest level.
pub struct FirstUIPInstance;

impl Update for FirstUIPInstance {}

impl LearningScheme for FirstUIPInstance {
    fn find_asserting_clause(
        &mut self,
        conflict_clause: ClauseId,
        trail: &Trail,
        clauses: &Clauses,
        variables: &Variables,
    ) -> Option<(CNFClause, CNFVar, usize)> {
        let depth = trail.depth();
        if depth == 0 {
            return None;
        }

        let mut seen = SetUsize::new();
        // literals below the current level that enter the resolvent
        let mut lower_literals: Vec<CNFVar> = Vec::new();
        let mut assertion_level = 0;
        // current-level literals seen but not yet resolved away
        let mut pending = 0usize;

        let mut resolvent: Vec<CNFVar> = clauses[conflict_clause].literals.clone();
        let mut index = trail.len();

        let assertion_literal = loop {
            for lit in &resolvent {
                if !seen.insert(lit.id) {
                    continue;
                }
                let assignment = variables[lit.id]
                    .assignment
                    .expect("conflict clause literal is unassigned");
                if assignment.branching_level == depth {
                    pending += 1;
                } else if assignment.branching_level > 0 {
                    assertion_level = assertion_level.max(assignment.branching_level);
                    lower_literals.push(CNFVar::new(lit.id, !assignment.sign));
                }
                // level-0 facts stay false forever and drop out of the clause
            }

            assert!(pending > 0, "conflict clause has no literal at the current level");

            // next unresolved current-level variable on the trail;
            // everything behind the current decision is current-level
            let variable = loop {
                index -= 1;
                let variable = trail.assignments()[index];
                if seen.contains(variable) {
                    break variable;
                }
            };

            pending -= 1;
            let assignment = variables[variable].assignment.unwrap();
            if pending == 0 {
                // the first unique implication point
                break CNFVar::new(variable, !assignment.sign);
            }

            match assignment.reason {
                AssignmentType::Forced(reason) => {
                    resolvent = clauses[reason]
                        .literals
                        .iter()
                        .filter(|lit| lit.id != variable)
                        .cloned()
                        .collect();
                }
                _ => unreachable!("every current-level literal before the UIP has a reason"),
            }
        };

        // asserting literal first; one backjump-level literal last so
        // both watches are sound after the jump
        if let Some(position) = lower_literals.iter().position(|lit| {
            variables[lit.id].assignment.map(|a| a.branching_level) == Some(assertion_level)
        }) {
            let last = lower_literals.len() - 1;
            lower_literals.swap(position, last);
        }

        let mut learned = CNFClause::with_capacity(lower_literals.len() + 1);
        learned.push(assertion_literal);
        learned.vars.extend(lower_literals);

        Some((learned, assertion_literal, assertion_level))
    }
}

pub struct FirstUIP;

impl LearningSchemeFactory for FirstUIP {
    fn create(&self, _clauses: &Clauses, _variables: &Variables) -> Box<dyn LearningScheme> {
        Box::new(FirstUIPInstance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdcl::clause::Clause;
    use crate::cdcl::variable::Variable;
    use crate::CNF;

    /// Classic implication-graph example: deciding -1 and -2 forces a
    /// chain through clauses 2..4 that falsifies clause 4.
    #[test]
    fn derives_the_uip_clause() {
        let input = CNF::load(&[
            vec![1, 2, 3],  // 0
            vec![1, 2, -3], // unused filler to keep ids stable
            vec![-3, 4],    // 2
            vec![-4, 5],    // 3
            vec![-3, -5],   // 4 conflict
        ])
        .unwrap();
        let mut variables: Variables = (1..=5).map(|i| Variable::new(&input, i)).collect();
        let clauses: Clauses = input.clauses.iter().map(Clause::new).collect();

        let mut trail = Trail::new(&variables);
        // level 1: decide -1; level 2: decide -2, forcing 3, 4, 5
        trail.decide(CNFVar::neg(0), &mut variables);
        trail.decide(CNFVar::neg(1), &mut variables);
        trail.propagate(CNFVar::pos(2), 0, &mut variables).unwrap();
        trail.propagate(CNFVar::pos(3), 2, &mut variables).unwrap();
        trail.propagate(CNFVar::pos(4), 3, &mut variables).unwrap();

        let mut scheme = FirstUIP.create(&clauses, &variables);
        let (learned, assertion, level) = scheme
            .find_asserting_clause(4, &trail, &clauses, &variables)
            .expect("conflict depends on decisions");

        // variable 3 (internal id 2) is the unique implication point
        assert_eq!(assertion, CNFVar::neg(2));
        assert_eq!(learned.vars[0], assertion);
        assert_eq!(learned.len(), 1);
        assert_eq!(level, 0);
    }

    #[test]
    fn root_conflicts_have_no_asserting_clause() {
        let input = CNF::load(&[vec![1], vec![-1]]).unwrap();
        let mut variables: Variables = vec![Variable::new(&input, 1)];
        let clauses: Clauses = input.clauses.iter().map(Clause::new).collect();

        let mut trail = Trail::new(&variables);
        trail.propagate(CNFVar::pos(0), 0, &mut variables).unwrap();

        let mut scheme = FirstUIP.create(&clauses, &variables);
        assert!(scheme.find_asserting_clause(1, &trail, &clauses, &variables).is_none());
    }
}
