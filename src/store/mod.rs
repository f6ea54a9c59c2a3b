//! Aggregation store
//!
//! Long-lived per-host availability statistics, merged from concurrent probe
//! completions. Created empty at startup, mutated for the life of the
//! process, shrunk only by explicit resets.

mod store;
mod types;

pub use store::PingStore;
pub use types::{HostRecord, HostStatus};
