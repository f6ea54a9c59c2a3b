/// Number of usable host addresses in an expanded /24 (`.1` through `.254`).
pub const SUBNET_HOST_COUNT: usize = 254;

/// A specification whose last octet is exactly `0` is treated as a /24 subnet.
pub fn is_subnet_spec(spec: &str) -> bool {
    spec.ends_with(".0")
}

/// First three dot-separated octets of a specification.
///
/// Returns `None` unless exactly three octets are present before the cut,
/// which is the only validation subnet expansion performs.
pub fn subnet_prefix(spec: &str) -> Option<String> {
    let octets: Vec<&str> = spec.split('.').take(3).collect();
    if octets.len() == 3 {
        Some(octets.join("."))
    } else {
        None
    }
}

/// The 254 host addresses of a /24, in ascending order.
pub fn subnet_hosts(prefix: &str) -> impl Iterator<Item = String> + '_ {
    (1..=SUBNET_HOST_COUNT).map(move |i| format!("{prefix}.{i}"))
}

/// Expand one address specification into concrete host addresses.
///
/// Subnet specs expand to `{prefix}.1..254`; a subnet spec whose prefix does
/// not yield three octets expands to nothing (the malformed input is dropped,
/// not surfaced). Anything else is taken as a single literal host, without
/// syntax validation.
pub fn expand_spec(spec: &str) -> Vec<String> {
    if !is_subnet_spec(spec) {
        return vec![spec.to_string()];
    }

    match subnet_prefix(spec) {
        Some(prefix) => subnet_hosts(&prefix).collect(),
        None => {
            tracing::debug!("dropping malformed subnet spec: {spec}");
            Vec::new()
        }
    }
}

/// Validation for the `/metrics/:subnet` path parameter: four dot-separated
/// runs of ASCII digits, nothing more.
pub fn is_dotted_quad(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}
