use std::iter::FromIterator;

/// A total assignment; index `i` holds the value of variable `i + 1`.
pub type Valuation = Vec<bool>;

const MAX_LITERALS_PER_LINE: usize = 8;

/// Terminal outcome of a solve invocation.
///
/// Cancellation is reported as `Interrupted` and is never conflated
/// with unsatisfiability.
#[derive(Clone, PartialEq, Eq)]
pub enum SATSolution {
    Satisfiable(Valuation),
    Unsatisfiable,
    Interrupted,
}

impl FromIterator<bool> for SATSolution {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        SATSolution::Satisfiable(iter.into_iter().collect())
    }
}

impl SATSolution {
    pub fn is_sat(&self) -> bool {
        matches!(self, SATSolution::Satisfiable(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SATSolution::Unsatisfiable)
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, SATSolution::Interrupted)
    }

    /// Returns the satisfying valuation, if any
    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            SATSolution::Satisfiable(valuation) => Some(valuation),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self)
    }
}

impl std::fmt::Display for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SATSolution::Unsatisfiable => write!(f, "Unsatisfiable"),
            SATSolution::Interrupted => write!(f, "Interrupted"),
            SATSolution::Satisfiable(variables) => {
                writeln!(f, "Satisfiable:")?;
                let mut iter = variables.iter().enumerate().peekable();
                while iter.peek().is_some() {
                    for (id, sign) in iter.by_ref().take(MAX_LITERALS_PER_LINE) {
                        write!(f, "{}{} ", if *sign { " " } else { "-" }, id + 1)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}
