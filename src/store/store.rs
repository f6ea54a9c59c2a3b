use crate::probe::ProbeOutcome;
use crate::store::types::HostRecord;
use crate::subnet;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashMap;

/// Process-wide mapping from host address to its running statistics.
///
/// The store is the only mutable shared state in the engine. Each
/// [`apply`](PingStore::apply) runs as an atomic unit per host key: the
/// read-modify-write happens while the entry's shard lock is held, so
/// concurrent completions for the same host serialize and no counter
/// increment is lost. Updates to different keys need no coordination.
#[derive(Debug, Default)]
pub struct PingStore {
    records: DashMap<String, HostRecord>,
}

impl PingStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Apply one completed probe outcome to a host's record, creating the
    /// record on first contact. Returns the record state after application.
    pub fn apply(&self, host: &str, outcome: &ProbeOutcome) -> HostRecord {
        let now = Utc::now();
        match self.records.entry(host.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().observe(outcome, now);
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry.insert(HostRecord::first_probe(host, outcome, now)).clone(),
        }
    }

    /// Full-state clone of every record, keyed by host.
    pub fn snapshot(&self) -> HashMap<String, HostRecord> {
        self.records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Delete records matching the given address specifications.
    ///
    /// Each spec deletes its exact-match record if one exists; otherwise a
    /// subnet spec deletes every record in its expansion. Specs matching
    /// neither are no-ops.
    pub fn reset(&self, specs: &[String]) {
        for spec in specs {
            if self.records.remove(spec).is_some() {
                continue;
            }
            if subnet::is_subnet_spec(spec) {
                for host in subnet::expand_spec(spec) {
                    self.records.remove(&host);
                }
            }
        }
    }

    pub fn get(&self, host: &str) -> Option<HostRecord> {
        self.records.get(host).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
