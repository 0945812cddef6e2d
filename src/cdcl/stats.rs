/// Counters accumulated over one solve invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Conflicts hit during propagation
    pub conflicts: u64,
    /// Free decisions made by the branching strategy
    pub decisions: u64,
    /// Literals assigned by unit propagation
    pub propagations: u64,
    /// Restarts triggered by the restart policy
    pub restarts: u64,
    /// Clauses learned from conflicts
    pub learned: u64,
    /// Learned clauses removed by database reduction
    pub deleted: u64,
}
