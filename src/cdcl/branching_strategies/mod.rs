mod branching_strategy;
mod naive;
mod vsids;

pub use branching_strategy::{BranchingStrategy, BranchingStrategyFactory};
pub use naive::Naive;
pub use vsids::VSIDS;
