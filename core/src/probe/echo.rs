use std::future::Future;
use std::io::{self, ErrorKind};
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;
use tracing::debug;

use super::Probe;
use crate::error::ProbeError;

/// TCP echo service port.
pub const ECHO_PORT: u16 = 7;

/// Unprivileged echo probe.
///
/// Sending ICMP echo requests needs raw sockets, so this probe knocks on
/// the TCP echo port instead. Any answer, a refusal included, proves the
/// host is up; silence until the timeout means it is not.
#[derive(Debug, Clone, Copy)]
pub struct EchoProbe {
    port: u16,
}

impl Default for EchoProbe {
    fn default() -> Self {
        Self { port: ECHO_PORT }
    }
}

impl EchoProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Knock on a different port. Only useful for testing against local listeners.
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Probe for EchoProbe {
    async fn is_reachable(&self, host: &str, probe_timeout: Duration) -> Result<bool, ProbeError> {
        within(host, probe_timeout, knock(host, self.port)).await
    }
}

async fn knock(host: &str, port: u16) -> Result<bool, ProbeError> {
    let socket_addr: SocketAddr = resolve_ipv4(host, port).await?;
    match TcpStream::connect(socket_addr).await {
        Ok(_) => Ok(true),
        Err(err) => classify(host, err),
    }
}

/// Bounds resolution and connect together; running out of time is silence.
async fn within<F>(host: &str, probe_timeout: Duration, attempt: F) -> Result<bool, ProbeError>
where
    F: Future<Output = Result<bool, ProbeError>>,
{
    match timeout(probe_timeout, attempt).await {
        Ok(answer) => answer,
        Err(_elapsed) => {
            debug!("{host} did not answer within {probe_timeout:?}");
            Ok(false)
        }
    }
}

async fn resolve_ipv4(host: &str, port: u16) -> Result<SocketAddr, ProbeError> {
    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|source| ProbeError::Resolution {
            host: host.to_string(),
            source,
        })?;
    addrs
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| ProbeError::NoIpv4 {
            host: host.to_string(),
        })
}

fn classify(host: &str, err: io::Error) -> Result<bool, ProbeError> {
    match err.kind() {
        ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset => Ok(true),
        ErrorKind::TimedOut | ErrorKind::HostUnreachable | ErrorKind::NetworkUnreachable => {
            debug!("{host} is unreachable: {err}");
            Ok(false)
        }
        _ => Err(ProbeError::Network {
            host: host.to_string(),
            source: err,
        }),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
