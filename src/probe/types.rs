use async_trait::async_trait;

/// Result of a single reachability probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The host answered within the timeout. The round-trip time is reported
    /// when it could be read from the probe output.
    Alive { latency: Option<f64> },

    /// The probe completed but the host did not answer.
    Unreachable,

    /// The probe itself could not be carried out (spawn failure, OS error).
    /// Distinct from [`ProbeOutcome::Unreachable`] so callers can record an
    /// error status.
    Error,
}

impl ProbeOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, ProbeOutcome::Alive { .. })
    }

    /// Round-trip time in milliseconds, when one was observed.
    pub fn latency(&self) -> Option<f64> {
        match self {
            ProbeOutcome::Alive { latency } => *latency,
            _ => None,
        }
    }
}

/// A single-attempt reachability check against one host.
///
/// Implementations must not return errors or panic on network failure; the
/// failure modes are the [`ProbeOutcome`] variants.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, host: &str) -> ProbeOutcome;
}
