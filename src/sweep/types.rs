/// Reachability of one host during a single metrics sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReachability {
    pub host: String,
    pub alive: bool,
}

/// Transient result of one 254-host subnet sweep.
///
/// This is scratch state for the metrics flow only; it carries no history and
/// is never merged into the aggregation store.
#[derive(Debug, Clone, Default)]
pub struct SubnetSweep {
    /// One entry per probed host suffix, ascending.
    pub hosts: Vec<HostReachability>,
}

impl SubnetSweep {
    pub fn active_count(&self) -> usize {
        self.hosts.iter().filter(|h| h.alive).count()
    }

    pub fn inactive_count(&self) -> usize {
        self.hosts.len() - self.active_count()
    }
}
