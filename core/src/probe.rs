//! The reachability check behind every scanned host.
//!
//! The scanner only depends on the [`Probe`] trait, so the concrete
//! mechanism can be swapped (the tests use scripted doubles).

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ProbeError;
use crate::local::{self, LocalHost};

mod echo;

pub use echo::{ECHO_PORT, EchoProbe};

#[async_trait]
pub trait Probe: Send + Sync {
    /// Returns whether `host` answered within `timeout`.
    ///
    /// Implementations must not block longer than `timeout`, name
    /// resolution included. `Ok(false)` means silence (running out of time
    /// counts as silence); `Err` is reserved for failures worth recording
    /// (unresolvable host, network-layer errors).
    async fn is_reachable(&self, host: &str, timeout: Duration) -> Result<bool, ProbeError>;

    /// Resolves this machine's host name and primary address.
    async fn local_host(&self) -> Result<LocalHost, ProbeError> {
        local::resolve_local_host().await
    }
}
