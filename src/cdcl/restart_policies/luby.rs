use super::super::clause::{ClauseId, Clauses};
use super::super::update::Update;
use super::super::variable::Variables;
use super::{RestartPolicy, RestartPolicyFactory};

const LUBY_UNIT: u64 = 32;

pub struct RestartLubyInstance {
    conflicts: u64,
    rate: u64,
    luby_state: (u64, u64),
}

impl RestartLubyInstance {
    /// Reluctant-doubling generator of the Luby series
    /// 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, ...
    fn next_luby(&mut self) -> u64 {
        let (u, v) = self.luby_state;
        self.luby_state = if u & u.wrapping_neg() == v {
            (u + 1, 1)
        } else {
            (u, 2 * v)
        };
        v
    }
}

impl Update for RestartLubyInstance {
    fn on_conflict(&mut self, _conflict_clause: ClauseId, _clauses: &Clauses, _variables: &Variables) {
        self.conflicts += 1;
    }
}

impl RestartPolicy for RestartLubyInstance {
    fn restart(&mut self) -> bool {
        if self.conflicts > self.rate {
            self.rate = LUBY_UNIT * self.next_luby();
            self.conflicts = 0;
            return true;
        }
        false
    }
}

/// Restart intervals following the Luby series, scaled by a constant
/// conflict unit.
pub struct RestartLuby(u64);

impl RestartPolicyFactory for RestartLuby {
    fn create(&self) -> Box<dyn RestartPolicy> {
        Box::new(RestartLubyInstance {
            conflicts: 0,
            rate: self.0,
            luby_state: (1, 1),
        })
    }
}

impl Default for RestartLuby {
    fn default() -> Self {
        RestartLuby(LUBY_UNIT)
    }
}
