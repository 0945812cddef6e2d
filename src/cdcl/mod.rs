//! A conflict-driven clause-learning solver.
//!
//! The solver is assembled from four pluggable strategies: branching,
//! clause learning, clause deletion and restarts. Each strategy
//! observes the search through the [`Update`] hooks and
//! is created fresh per solve, so a single [`CDCLSolver`] can serve
//! many formulas, even concurrently.

pub mod branching_strategies;
pub mod clause;
pub mod deletion_strategies;
mod execution;
pub mod learning_schemes;
pub mod restart_policies;
mod stats;
mod trail;
mod update;
mod util;
pub mod variable;

use std::sync::Arc;

use async_trait::async_trait;

use crate::solvers::{FlagWaiter, InterruptibleSolver};
use crate::{SATSolution, Solver, CNF};
use branching_strategies::{BranchingStrategyFactory, VSIDS};
use deletion_strategies::{ActivityDeletion, ClauseDeletionStrategyFactory};
use execution::ExecutionState;
use learning_schemes::{FirstUIP, LearningSchemeFactory};
use restart_policies::{RestartLuby, RestartPolicyFactory};

pub use stats::Stats;
pub use update::Update;

/// A CDCL solver parameterised over its strategies. [`Default`] wires
/// up the standard combination: VSIDS branching, first-UIP learning,
/// activity-based deletion and Luby restarts.
pub struct CDCLSolver {
    branching: Arc<dyn BranchingStrategyFactory>,
    learning: Arc<dyn LearningSchemeFactory>,
    deletion: Arc<dyn ClauseDeletionStrategyFactory>,
    restart: Arc<dyn RestartPolicyFactory>,
}

impl CDCLSolver {
    pub fn new(
        branching: impl BranchingStrategyFactory + 'static,
        learning: impl LearningSchemeFactory + 'static,
        deletion: impl ClauseDeletionStrategyFactory + 'static,
        restart: impl RestartPolicyFactory + 'static,
    ) -> CDCLSolver {
        CDCLSolver {
            branching: Arc::new(branching),
            learning: Arc::new(learning),
            deletion: Arc::new(deletion),
            restart: Arc::new(restart),
        }
    }

    /// Solves a formula and additionally reports the search counters
    /// accumulated along the way.
    pub fn solve_with_stats(&self, formula: &CNF) -> (SATSolution, Stats) {
        match ExecutionState::new(
            formula.clone(),
            &*self.branching,
            &*self.learning,
            &*self.deletion,
            &*self.restart,
        ) {
            None => (SATSolution::Unsatisfiable, Stats::default()),
            Some(state) => state.search(None),
        }
    }
}

impl Default for CDCLSolver {
    fn default() -> Self {
        CDCLSolver::new(VSIDS, FirstUIP, ActivityDeletion::default(), RestartLuby::default())
    }
}

impl Solver for CDCLSolver {
    fn solve(&self, formula: &CNF) -> SATSolution {
        self.solve_with_stats(formula).0
    }
}

#[async_trait]
impl InterruptibleSolver for CDCLSolver {
    async fn solve_interruptible(&self, formula: &CNF) -> SATSolution {
        let formula = formula.clone();
        let branching = self.branching.clone();
        let learning = self.learning.clone();
        let deletion = self.deletion.clone();
        let restart = self.restart.clone();

        FlagWaiter::start(move |flag| {
            match ExecutionState::new(formula, &*branching, &*learning, &*deletion, &*restart) {
                None => SATSolution::Unsatisfiable,
                Some(state) => {
                    let (solution, _) = state.search(Some(&*flag));
                    solution
                }
            }
        })
        .await
    }
}
