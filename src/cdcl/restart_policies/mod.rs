mod fixed;
mod geometric;
mod luby;
mod never;
mod restart_policy;

pub use fixed::RestartFixed;
pub use geometric::RestartGeom;
pub use luby::RestartLuby;
pub use never::RestartNever;
pub use restart_policy::{RestartPolicy, RestartPolicyFactory};
