use super::super::update::Update;
use super::{RestartPolicy, RestartPolicyFactory};

/// Plain backjumping search without restarts.
pub struct RestartNever;

impl Update for RestartNever {}

impl RestartPolicy for RestartNever {
    fn restart(&mut self) -> bool {
        false
    }
}

impl RestartPolicyFactory for RestartNever {
    fn create(&self) -> Box<dyn RestartPolicy> {
        Box::new(RestartNever)
    }
}
