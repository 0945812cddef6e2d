use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use async_std::task::block_on;
use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::{SATSolution, Solver, CNF};

/// A solver that polls a cancellation flag and terminates with
/// `SATSolution::Interrupted` when the surrounding future is dropped.
#[async_trait]
#[auto_impl(Box)]
pub trait InterruptibleSolver: Send + Sync {
    async fn solve_interruptible(&self, formula: &CNF) -> SATSolution;
}

/// Runs a blocking search on a worker thread and completes when the
/// search does. Dropping the future raises the shared flag, so a
/// cancelled search winds down at its next flag poll.
pub struct FlagWaiter {
    flag: Arc<AtomicBool>,
    result: Pin<Box<dyn Future<Output = SATSolution> + Send>>,
}

impl FlagWaiter {
    pub fn start(func: impl FnOnce(Arc<AtomicBool>) -> SATSolution + Send + 'static) -> FlagWaiter {
        let (sender, receiver) = async_std::channel::bounded(1);
        let flag = Arc::new(AtomicBool::new(false));
        let worker_flag = flag.clone();

        std::thread::spawn(move || {
            let _ = sender.try_send(func(worker_flag));
        });

        FlagWaiter {
            flag,
            result: Box::pin(async move {
                receiver.recv().await.unwrap_or(SATSolution::Interrupted)
            }),
        }
    }
}

impl Future for FlagWaiter {
    type Output = SATSolution;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.result.as_mut().poll(cx)
    }
}

impl Drop for FlagWaiter {
    fn drop(&mut self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

/// Exposes any interruptible solver through the blocking `Solver` trait.
pub struct InterruptibleSolverWrapper<S: InterruptibleSolver> {
    solver: S,
}

impl<S: InterruptibleSolver> From<S> for InterruptibleSolverWrapper<S> {
    fn from(solver: S) -> Self {
        InterruptibleSolverWrapper { solver }
    }
}

impl<S: InterruptibleSolver> Solver for InterruptibleSolverWrapper<S> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        block_on(self.solver.solve_interruptible(formula))
    }
}
