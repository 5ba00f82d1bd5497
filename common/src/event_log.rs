//! # Event Log
//!
//! An append-only audit trail rendered as a single HTML table.
//!
//! The file is opened in append mode for every session; the document shell
//! and table header are written only when the file is created (or after an
//! explicit [`EventLogger::clear_log`]). Closing tags are never written, so
//! a later session keeps appending rows to the same table.

mod event;
mod logger;

pub use event::{EventKind, LogEvent, HEADER};
pub use logger::{
    EventLogger, DEFAULT_DESTINATION, DEFAULT_TIMESTAMP_FORMAT, EXTENSION, SESSION_STARTED,
    SESSION_STOPPED,
};
