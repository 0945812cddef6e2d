use std::collections::HashSet;
use std::fmt;
use std::iter::FromIterator;

use itertools::Itertools;

/// Type used for referencing logical variables
pub type VarId = usize;

/// Representation of logical formulae in CNF form
/// (conjunction of clauses)
#[derive(Clone, Debug)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses: Vec<CNFClause>,
    /// Number of distinct variables the formula ranges over
    pub num_variables: usize,
}

/// Representation of a clause (disjunction of literals)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CNFClause {
    /// Vector of inner literals
    pub vars: Vec<CNFVar>,
}

/// A literal: a logical variable together with its polarity
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct CNFVar {
    /// Identifier of the variable, numbered from 1
    pub id: VarId,
    /// Literal is negated iff `sign == false`
    pub sign: bool,
}

/// Errors reported while bulk-loading a formula.
///
/// A failed load leaves no partially built formula behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// An input clause contained no literals, which denotes
    /// a trivial contradiction
    EmptyClause,
    /// A literal was zero, had no representable magnitude
    /// (`i32::MIN`), or referenced a variable above the declared bound
    MalformedLiteral(i32),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::EmptyClause => write!(f, "formula contains an empty clause"),
            LoadError::MalformedLiteral(lit) => write!(f, "malformed literal: {}", lit),
        }
    }
}

impl std::error::Error for LoadError {}

impl CNF {
    /// Creates an empty CNF formula over zero variables
    pub fn empty() -> CNF {
        CNF { clauses: Vec::new(), num_variables: 0 }
    }

    /// Creates a formula out of already built clauses
    pub fn new(clauses: Vec<CNFClause>, num_variables: usize) -> CNF {
        CNF { clauses, num_variables }
    }

    /// Bulk-loads a formula from signed-integer literals: a positive
    /// integer asserts the variable, a negative one its negation, the
    /// magnitude is the variable identifier.
    ///
    /// The variable count is inferred as the largest magnitude seen.
    pub fn load(clauses: &[Vec<i32>]) -> Result<CNF, LoadError> {
        let num_variables = clauses
            .iter()
            .flat_map(|clause| {
                clause
                    .iter()
                    .map(|lit| lit.checked_abs().unwrap_or(0) as usize)
            })
            .max()
            .unwrap_or(0);
        CNF::load_with_variables(clauses, num_variables)
    }

    /// Bulk-loads a formula over an explicitly declared number of
    /// variables; literals referencing variables above the bound are
    /// rejected.
    pub fn load_with_variables(
        clauses: &[Vec<i32>],
        num_variables: usize,
    ) -> Result<CNF, LoadError> {
        let clauses = clauses
            .iter()
            .map(|clause| {
                if clause.is_empty() {
                    return Err(LoadError::EmptyClause);
                }
                clause
                    .iter()
                    .map(|&lit| match lit.checked_abs() {
                        // i32::MIN has no absolute value and could not
                        // round-trip through `to_i32` anyway
                        Some(id) if lit != 0 && id as usize <= num_variables => {
                            Ok(CNFVar::new(id as usize, lit > 0))
                        }
                        _ => Err(LoadError::MalformedLiteral(lit)),
                    })
                    .collect()
            })
            .collect::<Result<Vec<CNFClause>, LoadError>>()?;

        Ok(CNF { clauses, num_variables })
    }

    /// Inserts a new clause into the formula
    pub fn push(&mut self, c: CNFClause) {
        for var in &c.vars {
            self.num_variables = self.num_variables.max(var.id);
        }
        self.clauses.push(c)
    }

    /// Returns number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Collects all variable identifiers that appear in the formula
    pub fn vars(&self) -> HashSet<VarId> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.vars.iter().map(|v| v.id))
            .unique()
            .collect()
    }
}

impl FromIterator<CNFClause> for CNF {
    fn from_iter<I: IntoIterator<Item = CNFClause>>(iter: I) -> Self {
        let mut cnf = CNF::empty();
        for clause in iter {
            cnf.push(clause);
        }
        cnf
    }
}

impl IntoIterator for CNF {
    type Item = CNFClause;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl CNFClause {
    /// Creates an empty clause
    pub fn new() -> CNFClause {
        CNFClause { vars: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> CNFClause {
        CNFClause { vars: Vec::with_capacity(capacity) }
    }

    /// Creates a clause containing a single literal
    pub fn single(var: CNFVar) -> CNFClause {
        CNFClause { vars: vec![var] }
    }

    /// Adds a single literal to the clause
    pub fn push(&mut self, v: CNFVar) {
        self.vars.push(v)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for CNFClause {
    fn default() -> Self {
        CNFClause::new()
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item = CNFVar>>(iter: I) -> Self {
        CNFClause { vars: iter.into_iter().collect() }
    }
}

impl IntoIterator for CNFClause {
    type Item = CNFVar;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl CNFVar {
    /// Creates a literal with given identifier and polarity
    pub fn new(id: VarId, sign: bool) -> CNFVar {
        CNFVar { id, sign }
    }

    /// Creates a positive literal with given identifier
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar { id, sign: true }
    }

    /// Creates a negative literal with given identifier
    pub fn neg(id: VarId) -> CNFVar {
        CNFVar { id, sign: false }
    }

    /// Returns the same variable with flipped polarity
    pub fn negated(&self) -> CNFVar {
        CNFVar { id: self.id, sign: !self.sign }
    }

    /// Converts to a signed integer. The absolute value indicates
    /// the identifier and the sign states the polarity.
    pub fn to_i32(&self) -> i32 {
        if self.sign {
            self.id as i32
        } else {
            -(self.id as i32)
        }
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.vars {
            write!(f, "({})  ", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_infers_variable_count() {
        let cnf = CNF::load(&[vec![1, -3], vec![2]]).unwrap();
        assert_eq!(cnf.num_variables, 3);
        assert_eq!(cnf.len(), 2);
        assert_eq!(cnf.clauses[0].vars, vec![CNFVar::pos(1), CNFVar::neg(3)]);
    }

    #[test]
    fn load_rejects_empty_clause() {
        assert_eq!(CNF::load(&[vec![1], vec![]]).unwrap_err(), LoadError::EmptyClause);
    }

    #[test]
    fn load_rejects_zero_literal() {
        assert_eq!(CNF::load(&[vec![1, 0]]).unwrap_err(), LoadError::MalformedLiteral(0));
    }

    #[test]
    fn load_rejects_extreme_literal() {
        assert_eq!(
            CNF::load(&[vec![i32::MIN]]).unwrap_err(),
            LoadError::MalformedLiteral(i32::MIN)
        );
        assert_eq!(
            CNF::load_with_variables(&[vec![1, i32::MIN]], 2).unwrap_err(),
            LoadError::MalformedLiteral(i32::MIN)
        );
    }

    #[test]
    fn load_rejects_out_of_range_literal() {
        assert_eq!(
            CNF::load_with_variables(&[vec![1, -4]], 3).unwrap_err(),
            LoadError::MalformedLiteral(-4)
        );
    }

    #[test]
    fn negation_flips_sign_only() {
        let lit = CNFVar::pos(7);
        assert_eq!(lit.negated(), CNFVar::neg(7));
        assert_eq!(lit.negated().negated(), lit);
    }
}
