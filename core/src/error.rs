use std::io;

/// Failures raised while probing a host or resolving this machine.
///
/// The scanner contains these: they are logged and the affected host is
/// reported as unreachable.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("unknown host {host}: {source}")]
    Resolution {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown host {host}: no IPv4 address")]
    NoIpv4 { host: String },

    #[error("network error while probing {host}: {source}")]
    Network {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("local host could not be resolved: {0}")]
    LocalHost(String),
}
