//! Resolution of this machine's own identity.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use tokio::net::lookup_host;
use tracing::debug;

use crate::error::ProbeError;

/// Name and primary address of the machine running the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalHost {
    pub host_name: String,
    pub address: IpAddr,
}

impl fmt::Display for LocalHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host_name, self.address)
    }
}

/// Looks up the OS host name and resolves it, preferring an IPv4 address.
pub async fn resolve_local_host() -> Result<LocalHost, ProbeError> {
    let host_name = sys_info::hostname()
        .map_err(|err| ProbeError::LocalHost(format!("cannot read host name: {err}")))?;

    let addrs: Vec<SocketAddr> = lookup_host((host_name.as_str(), 0))
        .await
        .map_err(|err| ProbeError::LocalHost(format!("{host_name}: {err}")))?
        .collect();
    debug!("{host_name} resolves to {addrs:?}");

    let address = pick_address(&addrs)
        .ok_or_else(|| ProbeError::LocalHost(format!("{host_name}: no address")))?;

    Ok(LocalHost { host_name, address })
}

fn pick_address(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
