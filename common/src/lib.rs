//! Shared building blocks for `netsweep`.
//!
//! * [`event_log`]: the append-only HTML audit trail.
//! * [`config`]: scan parameters shared by the scanner and the CLI.
//! * [`error`]: errors raised by the log sink.

pub mod config;
pub mod error;
pub mod event_log;
