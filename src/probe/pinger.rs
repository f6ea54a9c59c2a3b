use crate::probe::types::{Probe, ProbeOutcome};
use async_trait::async_trait;
use tokio::process::Command;

/// Probes a host with one invocation of the system ping binary.
///
/// The fixed 1-second timeout is carried by the binary itself (`-W` on Unix,
/// `-w` in milliseconds on Windows), so a probe resolves within roughly the
/// timeout without extra supervision.
#[derive(Debug, Clone, Default)]
pub struct PingProber;

impl PingProber {
    pub fn new() -> Self {
        Self
    }

    fn command(host: &str) -> Command {
        let mut cmd = Command::new("ping");

        #[cfg(target_os = "windows")]
        cmd.args(["-n", "1", "-w", "1000", host]);

        #[cfg(not(target_os = "windows"))]
        cmd.args(["-c", "1", "-W", "1", host]);

        cmd
    }
}

#[async_trait]
impl Probe for PingProber {
    async fn probe(&self, host: &str) -> ProbeOutcome {
        match Self::command(host).output().await {
            Ok(output) if output.status.success() => ProbeOutcome::Alive {
                latency: parse_latency(&String::from_utf8_lossy(&output.stdout)),
            },
            Ok(_) => ProbeOutcome::Unreachable,
            Err(e) => {
                tracing::debug!("ping invocation for {host} failed: {e}");
                ProbeOutcome::Error
            }
        }
    }
}

/// Round-trip time in milliseconds from ping output (`time=0.045 ms`,
/// `time=5ms`). `None` when the field is missing or unparseable.
fn parse_latency(output: &str) -> Option<f64> {
    let start = output.find("time=")? + "time=".len();
    let value: String = output[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latency_unix_output() {
        let stdout = "PING 127.0.0.1 (127.0.0.1) 56(84) bytes of data.\n\
                      64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=0.045 ms\n\
                      \n\
                      --- 127.0.0.1 ping statistics ---\n\
                      1 packets transmitted, 1 received, 0% packet loss, time 0ms\n";
        assert_eq!(parse_latency(stdout), Some(0.045));
    }

    #[test]
    fn test_parse_latency_windows_output() {
        let stdout = "Reply from 192.168.1.1: bytes=32 time=5ms TTL=64";
        assert_eq!(parse_latency(stdout), Some(5.0));
    }

    #[test]
    fn test_parse_latency_missing_field() {
        assert_eq!(parse_latency("Request timed out."), None);
        assert_eq!(parse_latency(""), None);
    }

    #[test]
    fn test_parse_latency_garbage_value() {
        assert_eq!(parse_latency("time=<1ms"), None);
    }

    #[tokio::test]
    async fn test_probe_never_panics_on_bad_host() {
        // Whatever the environment does with this, the outcome is a value,
        // not a panic or an Err.
        let prober = PingProber::new();
        let outcome = prober.probe("definitely-not-a-resolvable-host.invalid").await;
        assert!(!outcome.is_alive());
    }
}
