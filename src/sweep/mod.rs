//! Sweep coordination
//!
//! Launches one probe per host concurrently and joins on all of them before
//! producing a result; individual failures are outcomes, never aborts.

mod coordinator;
mod types;

pub use coordinator::SweepCoordinator;
pub use types::{HostReachability, SubnetSweep};
