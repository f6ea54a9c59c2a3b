use crate::sweep::SubnetSweep;
use prometheus::{Encoder, IntGaugeVec, Opts, Registry, TextEncoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Rendered metrics are not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render one subnet sweep as Prometheus exposition text.
///
/// Every invocation builds a fresh registry: the sweep is a point-in-time
/// snapshot of exactly 254 hosts, and nothing may persist between renders.
/// The `subnet` label carries the request's path parameter verbatim.
pub fn render_subnet_metrics(subnet: &str, sweep: &SubnetSweep) -> Result<String, MetricsError> {
    let registry = Registry::new();

    let active = IntGaugeVec::new(
        Opts::new(
            "active_hosts_count",
            "Hosts in the subnet that answered the current sweep",
        ),
        &["subnet"],
    )?;
    registry.register(Box::new(active.clone()))?;

    let inactive = IntGaugeVec::new(
        Opts::new(
            "inactive_hosts_count",
            "Hosts in the subnet that did not answer the current sweep",
        ),
        &["subnet"],
    )?;
    registry.register(Box::new(inactive.clone()))?;

    let status = IntGaugeVec::new(
        Opts::new(
            "status_hosts_list",
            "Per-host reachability in the current sweep (1 = reachable)",
        ),
        &["host", "subnet"],
    )?;
    registry.register(Box::new(status.clone()))?;

    active
        .with_label_values(&[subnet])
        .set(sweep.active_count() as i64);
    inactive
        .with_label_values(&[subnet])
        .set(sweep.inactive_count() as i64);
    for reachability in &sweep.hosts {
        status
            .with_label_values(&[reachability.host.as_str(), subnet])
            .set(i64::from(reachability.alive));
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
