use std::fmt;

use super::clause::ClauseId;
use super::variable::{Assignment, AssignmentType, VariableId, Variables};
use crate::CNFVar;

/// Signals that a propagation tried to assign a variable that already
/// holds the opposite polarity. This is an expected conflict signal
/// for the caller to handle, not a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyAssigned {
    pub variable: VariableId,
}

impl fmt::Display for AlreadyAssigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "variable {} is already assigned with the opposite polarity",
            self.variable + 1
        )
    }
}

impl std::error::Error for AlreadyAssigned {}

/// The chronological assignment history: every assigned variable in
/// assignment order, the current decision level and the propagation
/// cursor separating processed from pending assignments.
pub struct Trail {
    stack: Vec<VariableId>,
    head: usize,
    depth: usize,
    num_assigned: usize,
}

impl Trail {
    pub fn new(variables: &Variables) -> Trail {
        Trail {
            stack: Vec::with_capacity(variables.len()),
            head: 0,
            depth: 0,
            // variables absent from every clause are pre-assigned
            num_assigned: variables.iter().filter(|var| var.assignment.is_some()).count(),
        }
    }

    /// Current decision level; level 0 holds only facts.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Assigned variables in assignment order
    pub fn assignments(&self) -> &[VariableId] {
        &self.stack
    }

    pub fn all_assigned(&self, variables: &Variables) -> bool {
        self.num_assigned == variables.len()
    }

    /// Opens a new decision level and assigns the literal with no
    /// reason clause. The branching strategy guarantees the variable
    /// is unassigned.
    pub fn decide(&mut self, literal: CNFVar, variables: &mut Variables) {
        assert!(
            variables[literal.id].assignment.is_none(),
            "decision on an already assigned variable"
        );
        self.depth += 1;
        self.assign(literal, AssignmentType::Branching, variables);
    }

    /// Assigns a literal forced by `reason` at the current decision
    /// level. Re-assigning the same polarity is a no-op; the opposite
    /// polarity reports `AlreadyAssigned`.
    pub fn propagate(
        &mut self,
        literal: CNFVar,
        reason: ClauseId,
        variables: &mut Variables,
    ) -> Result<(), AlreadyAssigned> {
        match variables[literal.id].assignment {
            Some(assignment) if assignment.sign != literal.sign => {
                Err(AlreadyAssigned { variable: literal.id })
            }
            Some(_) => Ok(()),
            None => {
                self.assign(literal, AssignmentType::Forced(reason), variables);
                Ok(())
            }
        }
    }

    fn assign(&mut self, literal: CNFVar, reason: AssignmentType, variables: &mut Variables) {
        variables[literal.id].assignment = Some(Assignment {
            sign: literal.sign,
            branching_level: self.depth,
            reason,
        });
        self.stack.push(literal.id);
        self.num_assigned += 1;
    }

    /// Next assignment the propagation engine has not processed yet.
    pub fn next_unpropagated(&mut self) -> Option<VariableId> {
        if self.head < self.stack.len() {
            let variable = self.stack[self.head];
            self.head += 1;
            Some(variable)
        } else {
            None
        }
    }

    /// Truncates the trail to the end of `level`, unassigning all
    /// later variables, and rewinds the propagation cursor so no stale
    /// propagation state survives. Returns the unassigned literals in
    /// unassignment order for strategy notification.
    pub fn backjump_to(&mut self, level: usize, variables: &mut Variables) -> Vec<CNFVar> {
        assert!(
            level <= self.depth,
            "backjump to level {} above the current level {}",
            level,
            self.depth
        );

        let mut unassigned = Vec::new();
        while let Some(&variable) = self.stack.last() {
            match variables[variable].assignment {
                Some(assignment) if assignment.branching_level > level => {
                    variables[variable].assignment = None;
                    self.stack.pop();
                    self.num_assigned -= 1;
                    unassigned.push(CNFVar::new(variable, assignment.sign));
                }
                _ => break,
            }
        }

        self.depth = level;
        self.head = self.head.min(self.stack.len());
        unassigned
    }
}
