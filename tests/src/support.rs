use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use netsweep_core::{LocalHost, Probe, ProbeError};

/// Probe double: listed hosts answer, hosts listed as broken raise a
/// resolution error, everything else stays silent.
#[derive(Default)]
pub struct FakeNetwork {
    pub up: HashSet<String>,
    pub broken: HashSet<String>,
    pub probed: Mutex<Vec<String>>,
}

impl FakeNetwork {
    pub fn up(mut self, host: &str) -> Self {
        self.up.insert(host.to_string());
        self
    }

    pub fn broken(mut self, host: &str) -> Self {
        self.broken.insert(host.to_string());
        self
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Probe for FakeNetwork {
    async fn is_reachable(&self, host: &str, _timeout: Duration) -> Result<bool, ProbeError> {
        self.probed.lock().unwrap().push(host.to_string());
        if self.broken.contains(host) {
            return Err(ProbeError::Resolution {
                host: host.to_string(),
                source: std::io::Error::other("name or service not known"),
            });
        }
        Ok(self.up.contains(host))
    }

    async fn local_host(&self) -> Result<LocalHost, ProbeError> {
        Err(ProbeError::LocalHost("no host name configured".into()))
    }
}

/// Rendered rows of a log file as `(class, line)` pairs, in file order.
pub fn rows(path: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let contents = fs::read_to_string(path)?;
    let rows = contents
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("<tr class=\"")?;
            let (class, _) = rest.split_once('"')?;
            Some((class.to_string(), line.to_string()))
        })
        .collect();
    Ok(rows)
}
