//! Reachability probing
//!
//! One probe is one timed attempt against one host. Probes never propagate
//! network failures to their caller; every failure mode is folded into a
//! [`ProbeOutcome`].

mod pinger;
mod types;

pub use pinger::PingProber;
pub use types::{Probe, ProbeOutcome};
