mod activity;
mod deletion_strategy;
mod no_deletion;

pub use activity::ActivityDeletion;
pub use deletion_strategy::{ClauseDeletionStrategy, ClauseDeletionStrategyFactory};
pub use no_deletion::NoDeletion;
