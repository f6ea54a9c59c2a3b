use crate::probe::ProbeOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the most recent probe of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostStatus {
    Available,
    Unavailable,
    Error,
}

/// Running availability statistics for one probed host.
///
/// Serialized with camelCase field names; timestamps render as RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    /// Dotted-quad address, immutable once the record exists.
    pub host: String,

    /// Last observed round-trip time in milliseconds; `None` when the host
    /// was unreachable, the probe errored, or no time could be read.
    pub latency: Option<f64>,

    pub status: HostStatus,

    /// Time of the most recent successful probe.
    pub last_available: Option<DateTime<Utc>>,

    /// Time of the most recent failed (or errored) probe.
    pub last_unavailable: Option<DateTime<Utc>>,

    pub success_count: u64,
    pub failure_count: u64,
}

impl HostRecord {
    /// Record created by the first completed probe of a host.
    pub fn first_probe(host: &str, outcome: &ProbeOutcome, now: DateTime<Utc>) -> Self {
        let alive = outcome.is_alive();
        Self {
            host: host.to_string(),
            latency: outcome.latency(),
            status: status_of(outcome),
            last_available: alive.then_some(now),
            last_unavailable: (!alive).then_some(now),
            success_count: u64::from(alive),
            failure_count: u64::from(!alive),
        }
    }

    /// Apply one probe outcome to an existing record.
    ///
    /// Sets `latency` and `status` from the outcome, refreshes exactly one of
    /// the two timestamps, and increments exactly one counter. An `Error`
    /// outcome counts as a failure.
    pub fn observe(&mut self, outcome: &ProbeOutcome, now: DateTime<Utc>) {
        self.latency = outcome.latency();
        self.status = status_of(outcome);

        if outcome.is_alive() {
            self.last_available = Some(now);
            self.success_count += 1;
        } else {
            self.last_unavailable = Some(now);
            self.failure_count += 1;
        }
    }

    /// Total number of probe applications this record has absorbed.
    pub fn probe_count(&self) -> u64 {
        self.success_count + self.failure_count
    }
}

fn status_of(outcome: &ProbeOutcome) -> HostStatus {
    match outcome {
        ProbeOutcome::Alive { .. } => HostStatus::Available,
        ProbeOutcome::Unreachable => HostStatus::Unavailable,
        ProbeOutcome::Error => HostStatus::Error,
    }
}
