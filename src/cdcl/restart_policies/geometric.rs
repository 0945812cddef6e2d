use super::super::clause::{ClauseId, Clauses};
use super::super::update::Update;
use super::super::variable::Variables;
use super::{RestartPolicy, RestartPolicyFactory};

pub struct RestartGeomInstance {
    conflicts: u64,
    rate: u64,
    factor_percent: u64,
}

impl Update for RestartGeomInstance {
    fn on_conflict(&mut self, _conflict_clause: ClauseId, _clauses: &Clauses, _variables: &Variables) {
        self.conflicts += 1;
    }
}

impl RestartPolicy for RestartGeomInstance {
    fn restart(&mut self) -> bool {
        if self.conflicts > self.rate {
            self.rate = self.rate * self.factor_percent / 100;
            self.conflicts = 0;
            return true;
        }
        false
    }
}

/// Restart intervals growing by a constant percentage.
pub struct RestartGeom {
    rate: u64,
    factor_percent: u64,
}

impl RestartPolicyFactory for RestartGeom {
    fn create(&self) -> Box<dyn RestartPolicy> {
        Box::new(RestartGeomInstance {
            conflicts: 0,
            rate: self.rate,
            factor_percent: self.factor_percent,
        })
    }
}

impl Default for RestartGeom {
    fn default() -> Self {
        RestartGeom { rate: 100, factor_percent: 150 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_grow_geometrically() {
        let mut policy = RestartGeom { rate: 2, factor_percent: 200 }.create();
        let mut intervals = Vec::new();
        let mut since_restart = 0u64;

        for _ in 0..50 {
            policy.on_conflict(0, &Clauses::new(vec![]), &vec![]);
            since_restart += 1;
            if policy.restart() {
                intervals.push(since_restart);
                since_restart = 0;
            }
        }

        assert_eq!(intervals, vec![3, 5, 9, 17]);
    }
}
