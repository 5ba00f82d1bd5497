use std::time::Duration;

/// Historical probe timeout.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1_000);

/// Exclusive upper bound on host suffixes, i.e. `.1` through `.254`.
pub const DEFAULT_UPPER_BOUND: u16 = 255;

/// Parameters of a single subnet sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Host suffixes `1..upper_bound` are probed.
    pub upper_bound: u16,
    /// Maximum time a single probe may block.
    pub probe_timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            upper_bound: DEFAULT_UPPER_BOUND,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("upper bound must be between 2 and 256, got {0}")]
    UpperBound(u16),
    #[error("probe timeout must be greater than zero")]
    ZeroTimeout,
}

impl ScanConfig {
    pub fn new(upper_bound: u16, probe_timeout: Duration) -> Result<Self, ConfigError> {
        if !(2..=256).contains(&upper_bound) {
            return Err(ConfigError::UpperBound(upper_bound));
        }
        if probe_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            upper_bound,
            probe_timeout,
        })
    }

    /// Number of probes a sweep issues.
    pub fn host_count(&self) -> usize {
        usize::from(self.upper_bound.saturating_sub(1))
    }

    /// Host suffixes in probing order.
    pub fn suffixes(&self) -> impl Iterator<Item = u16> {
        1..self.upper_bound
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
