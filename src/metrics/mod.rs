//! Prometheus snapshot rendering
//!
//! Formats a transient subnet sweep into exposition text. Independent of the
//! aggregation store by design: every scrape re-probes the subnet from
//! scratch.

mod render;

pub use render::{render_subnet_metrics, MetricsError};
