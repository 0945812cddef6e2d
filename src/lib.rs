/// The CNF representation of a formula
pub mod cnf;
/// The Solver trait which has to be implemented by each solver
pub mod solver;
/// Module that specifies the output of a solver
mod solution;
/// A naive reference solver used as a testing oracle
pub mod bruteforce;
/// The conflict-driven clause-learning solver
pub mod cdcl;
/// A module which offers some additional solvers,
/// for one that can be interrupted or timed.
pub mod solvers;

pub use bruteforce::Bruteforce;
pub use cdcl::{CDCLSolver, Stats};
pub use cnf::{CNFClause, CNFVar, LoadError, VarId, CNF};
pub use solution::{SATSolution, Valuation};
pub use solver::{check_valuation, Solver};
