use crate::probe::{Probe, ProbeOutcome};
use crate::store::{HostRecord, PingStore};
use crate::subnet;
use crate::sweep::types::{HostReachability, SubnetSweep};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

/// Fans probes out over sets of hosts and funnels the results back.
///
/// Two flows share the fan-out machinery but not their state: the ping flow
/// merges every completion into the aggregation store, the metrics flow
/// collects a transient reachability list and leaves the store alone. Both
/// join on all probes before returning; a sweep's latency is bounded by its
/// slowest probe, not by a batch deadline.
#[derive(Clone)]
pub struct SweepCoordinator {
    store: Arc<PingStore>,
    prober: Arc<dyn Probe>,
}

impl SweepCoordinator {
    pub fn new(store: PingStore, prober: Arc<dyn Probe>) -> Self {
        Self {
            store: Arc::new(store),
            prober,
        }
    }

    /// Probe every host the given specs expand to and merge each outcome
    /// into the store. Returns the post-probe record of every touched host,
    /// in expansion order.
    pub async fn ping_sweep(&self, specs: &[String]) -> Vec<HostRecord> {
        let hosts: Vec<String> = specs.iter().flat_map(|spec| subnet::expand_spec(spec)).collect();
        tracing::info!("ping sweep over {} hosts", hosts.len());

        let mut tasks = Vec::with_capacity(hosts.len());
        for host in &hosts {
            let prober = self.prober.clone();
            let store = self.store.clone();
            let host = host.clone();
            tasks.push(tokio::spawn(async move {
                let outcome = prober.probe(&host).await;
                store.apply(&host, &outcome)
            }));
        }

        let mut records = Vec::with_capacity(hosts.len());
        for (host, joined) in hosts.iter().zip(join_all(tasks).await) {
            match joined {
                Ok(record) => records.push(record),
                Err(e) => {
                    // A dead probe task degrades to an error outcome for its
                    // host; the sweep itself never aborts.
                    tracing::warn!("probe task for {host} died: {e}");
                    records.push(self.store.apply(host, &ProbeOutcome::Error));
                }
            }
        }
        records
    }

    /// Probe all 254 hosts of a /24 from scratch, without reading or writing
    /// accumulated statistics.
    pub async fn subnet_sweep(&self, prefix: &str) -> SubnetSweep {
        let mut tasks = Vec::with_capacity(subnet::SUBNET_HOST_COUNT);
        for host in subnet::subnet_hosts(prefix) {
            let prober = self.prober.clone();
            tasks.push(tokio::spawn(async move {
                let alive = prober.probe(&host).await.is_alive();
                HostReachability { host, alive }
            }));
        }

        let mut hosts = Vec::with_capacity(subnet::SUBNET_HOST_COUNT);
        for (i, joined) in join_all(tasks).await.into_iter().enumerate() {
            hosts.push(joined.unwrap_or_else(|e| {
                let host = format!("{prefix}.{}", i + 1);
                tracing::warn!("probe task for {host} died: {e}");
                HostReachability { host, alive: false }
            }));
        }

        let sweep = SubnetSweep { hosts };
        tracing::info!(
            "subnet sweep of {prefix}.0/24: {} active, {} inactive",
            sweep.active_count(),
            sweep.inactive_count()
        );
        sweep
    }

    /// Current full state of the aggregation store.
    pub fn snapshot(&self) -> HashMap<String, HostRecord> {
        self.store.snapshot()
    }

    /// Delete accumulated records matching the given specs (see
    /// [`PingStore::reset`]).
    pub fn reset(&self, specs: &[String]) {
        self.store.reset(specs);
    }

    pub fn store(&self) -> &PingStore {
        &self.store
    }
}
