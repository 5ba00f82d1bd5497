//! The subnet sweep.
//!
//! Hosts are probed strictly one after another. A failing probe is
//! recorded in the [`EventLogger`] and the sweep moves on; only a failure
//! of the log sink itself stops it.

use std::fmt;

use netsweep_common::config::ScanConfig;
use netsweep_common::error::LogError;
use netsweep_common::event_log::EventLogger;
use tracing::{debug, warn};

use crate::local::LocalHost;
use crate::probe::{EchoProbe, Probe};

mod target;

pub use target::ScanTarget;

pub const OUT_OF_RANGE: &str = "Target address does not belong to the network's range";
pub const LOCAL_UNRESOLVED: &str = "The IP address of this host could not be determined";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
    /// The probe raised an error, which has been logged.
    Failed,
}

/// Classification of a single probed host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOutcome {
    pub host: String,
    pub status: Reachability,
}

impl HostOutcome {
    pub fn is_reachable(&self) -> bool {
        self.status == Reachability::Reachable
    }
}

impl fmt::Display for HostOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{} is reachable", self.host)
        } else {
            write!(f, "Couldn't reach {}", self.host)
        }
    }
}

/// Sweeps a subnet prefix, logging probe failures to the owned logger.
pub struct SubnetScanner<P: Probe = EchoProbe> {
    logger: EventLogger,
    probe: P,
    config: ScanConfig,
}

impl<P: Probe> SubnetScanner<P> {
    pub fn new(logger: EventLogger, probe: P, config: ScanConfig) -> Self {
        Self {
            logger,
            probe,
            config,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn logger(&self) -> &EventLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut EventLogger {
        &mut self.logger
    }

    pub fn into_logger(self) -> EventLogger {
        self.logger
    }

    /// Probes `prefix.1` up to (excluding) the configured upper bound.
    pub async fn scan(&mut self, prefix: &str) -> Result<Vec<HostOutcome>, LogError> {
        self.scan_with(prefix, |_| {}).await
    }

    /// Like [`scan`](Self::scan), handing every outcome to `on_outcome` as
    /// soon as the host has been classified.
    pub async fn scan_with<F>(
        &mut self,
        prefix: &str,
        mut on_outcome: F,
    ) -> Result<Vec<HostOutcome>, LogError>
    where
        F: FnMut(&HostOutcome),
    {
        let mut outcomes = Vec::with_capacity(self.config.host_count());

        for suffix in self.config.suffixes() {
            let host = ScanTarget::new(prefix, suffix).host();
            let status = match self.probe.is_reachable(&host, self.config.probe_timeout).await {
                Ok(true) => Reachability::Reachable,
                Ok(false) => Reachability::Unreachable,
                Err(err) => {
                    warn!("probe of {host} failed: {err}");
                    self.logger.log_exception(&err, OUT_OF_RANGE)?;
                    Reachability::Failed
                }
            };
            debug!("{host}: {status:?}");

            let outcome = HostOutcome { host, status };
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Resolves this machine. A resolution failure is logged and yields `None`.
    pub async fn report_local(&mut self) -> Result<Option<LocalHost>, LogError> {
        match self.probe.local_host().await {
            Ok(local) => Ok(Some(local)),
            Err(err) => {
                warn!("{err}");
                self.logger.log_exception(&err, LOCAL_UNRESOLVED)?;
                Ok(None)
            }
        }
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
