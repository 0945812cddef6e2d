use auto_impl::auto_impl;

use super::super::update::Update;

/// Decides at every `Deciding` entry whether to abandon the current
/// decision levels and restart the search (learned clauses are kept).
#[auto_impl(Box)]
pub trait RestartPolicy: Update {
    fn restart(&mut self) -> bool;
}

#[auto_impl(Box, Arc)]
pub trait RestartPolicyFactory: Send + Sync {
    fn create(&self) -> Box<dyn RestartPolicy>;
}
