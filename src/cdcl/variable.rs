use super::clause::ClauseId;
use super::util::IndexSet;
use crate::{CNFVar, CNF};

pub type VariableId = usize;

/// Why a variable holds its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentType {
    /// Unit propagation forced the value; the clause is the reason
    Forced(ClauseId),
    /// A free decision of the branching strategy
    Branching,
    /// The variable occurs in no clause and was fixed up front
    Known,
}

#[derive(Debug, Clone, Copy)]
pub struct Assignment {
    pub sign: bool,
    pub branching_level: usize,
    pub reason: AssignmentType,
}

/// Solver-internal state of a single variable: its current assignment
/// and, per polarity, the clauses watching that literal.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Watch lists indexed by literal polarity (`watched[1]` holds the
    /// clauses watching the positive literal). Insertion-ordered so
    /// propagation visits watchers deterministically.
    watched: [IndexSet<ClauseId>; 2],
    pub assignment: Option<Assignment>,
}

impl Variable {
    /// Builds the variable numbered `var_num` (1-based) for a formula.
    /// Watch list entries mirror the initial watch positions of
    /// `Clause::new`: the first and last literal of each clause.
    pub fn new(cnf: &CNF, var_num: usize) -> Variable {
        let mut watched = [IndexSet::default(), IndexSet::default()];
        let mut occurs = false;

        for (index, clause) in cnf.clauses.iter().enumerate() {
            if clause.vars.iter().any(|var| var.id == var_num) {
                occurs = true;
            }
            for lit in [clause.vars.first(), clause.vars.last()].iter().flatten() {
                if lit.id == var_num {
                    watched[lit.sign as usize].insert(index);
                }
            }
        }

        // variables outside every clause hold an arbitrary fixed value
        let assignment = if occurs {
            None
        } else {
            Some(Assignment {
                sign: false,
                branching_level: 0,
                reason: AssignmentType::Known,
            })
        };

        Variable { watched, assignment }
    }

    pub fn watched(&self, sign: bool) -> &IndexSet<ClauseId> {
        &self.watched[sign as usize]
    }

    pub fn add_watch(&mut self, sign: bool, index: ClauseId) {
        self.watched[sign as usize].insert(index);
    }

    pub fn remove_watch(&mut self, sign: bool, index: ClauseId) {
        self.watched[sign as usize].swap_remove(&index);
    }
}

pub type Variables = Vec<Variable>;

/// Three-valued lookup of a literal under the current partial
/// assignment (`None` = unassigned).
pub fn value_of(variables: &Variables, literal: CNFVar) -> Option<bool> {
    variables[literal.id]
        .assignment
        .map(|assignment| assignment.sign == literal.sign)
}

/// Decision level of an assigned variable.
pub fn level_of(variables: &Variables, id: VariableId) -> Option<usize> {
    variables[id].assignment.map(|assignment| assignment.branching_level)
}
