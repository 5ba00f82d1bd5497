//! # Subnet reachability scanning
//!
//! * [`scanner`]: walks a host suffix range under a subnet prefix and
//!   classifies every host.
//! * [`probe`]: the bounded-time reachability check the scanner relies on.
//! * [`local`]: resolution of this machine's own name and address.

pub mod error;
pub mod local;
pub mod probe;
pub mod scanner;

pub use error::ProbeError;
pub use local::LocalHost;
pub use probe::{EchoProbe, Probe};
pub use scanner::{HostOutcome, Reachability, ScanTarget, SubnetScanner};
