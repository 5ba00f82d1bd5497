use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use tracing::{debug, info};

use super::event::{EventKind, HEADER, LogEvent};
use crate::error::{LogError, Result};

pub const DEFAULT_DESTINATION: &str = "logfile";
pub const EXTENSION: &str = ".html";
/// `2024.01.31 at 17:05:09`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y.%m.%d at %H:%M:%S";

pub const SESSION_STARTED: &str = "Program execution started";
pub const SESSION_STOPPED: &str = "Program execution stopped";

/// Owner of a single HTML log destination.
///
/// The logger is *ready* while it holds an append handle. Every `log_*`
/// call on a logger that is not ready opens a session first (see
/// [`EventLogger::start`]) and then writes exactly one row.
#[derive(Debug)]
pub struct EventLogger {
    destination: PathBuf,
    timestamp_format: String,
    writer: Option<File>,
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLogger {
    pub fn new() -> Self {
        Self {
            destination: html_path(Path::new(DEFAULT_DESTINATION)),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            writer: None,
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    pub fn is_ready(&self) -> bool {
        self.writer.is_some()
    }

    /// Points the logger at a new file, appending `.html` when missing.
    ///
    /// A session on the previous destination is abandoned without a
    /// "stopped" row; the next write starts a session on the new file.
    pub fn set_destination(&mut self, name: impl AsRef<Path>) {
        self.destination = html_path(name.as_ref());
        if self.writer.take().is_some() {
            debug!("abandoned open log session, now writing to {}", self.destination.display());
        }
    }

    /// Replaces the chrono `strftime` pattern used for row timestamps.
    pub fn set_timestamp_format(&mut self, pattern: impl Into<String>) -> Result<()> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LogError::InvalidFormat(pattern));
        }
        self.timestamp_format = pattern;
        Ok(())
    }

    /// Opens a session: creates the file with its header if needed and
    /// appends a "started" row.
    ///
    /// Calling it on a ready logger replaces the handle and appends another
    /// "started" row.
    pub fn start(&mut self) -> Result<()> {
        let file = self.open_session()?;
        self.writer = Some(file);
        Ok(())
    }

    /// Records an error value, using its display form as the subject.
    pub fn log_exception(&mut self, error: &dyn Display, description: &str) -> Result<()> {
        self.record(EventKind::Error, &error.to_string(), description)
    }

    pub fn log_error(&mut self, subject: &str, description: &str) -> Result<()> {
        self.record(EventKind::Error, subject, description)
    }

    pub fn log_message(&mut self, description: &str) -> Result<()> {
        self.record(EventKind::Info, &EventKind::Info.to_string(), description)
    }

    /// Truncates the destination down to the bare header.
    ///
    /// Does nothing if the file does not exist. Afterwards the logger is
    /// not ready, so the next write opens a fresh session.
    pub fn clear_log(&mut self) -> Result<()> {
        if !self.destination.exists() {
            return Ok(());
        }
        self.writer = None;

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.destination)
            .map_err(|source| LogError::Truncate {
                path: self.destination.clone(),
                source,
            })?;
        write_text(&mut file, &self.destination, HEADER)?;
        info!("cleared log {}", self.destination.display());
        Ok(())
    }

    /// Appends a "stopped" row and releases the handle. No-op when not ready.
    pub fn close(&mut self) -> Result<()> {
        let Some(mut file) = self.writer.take() else {
            return Ok(());
        };
        let row = self.status_event(SESSION_STOPPED).to_row();
        write_text(&mut file, &self.destination, &row)?;
        file.flush().map_err(|source| LogError::Write {
            path: self.destination.clone(),
            source,
        })?;
        info!("closed log session on {}", self.destination.display());
        Ok(())
    }

    fn record(&mut self, kind: EventKind, subject: &str, description: &str) -> Result<()> {
        let mut file = match self.writer.take() {
            Some(file) => file,
            None => self.open_session()?,
        };
        let row = self.event(kind, subject, description).to_row();
        let written = write_text(&mut file, &self.destination, &row);
        self.writer = Some(file);
        written
    }

    fn open_session(&self) -> Result<File> {
        let open_error = |source| LogError::Open {
            path: self.destination.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.destination)
            .map_err(open_error)?;

        // An empty file gets the header too, so a failed first write is repaired.
        if file.metadata().map_err(open_error)?.len() == 0 {
            write_text(&mut file, &self.destination, HEADER)?;
        }
        let row = self.status_event(SESSION_STARTED).to_row();
        write_text(&mut file, &self.destination, &row)?;

        info!("started log session on {}", self.destination.display());
        Ok(file)
    }

    fn status_event(&self, description: &str) -> LogEvent {
        self.event(EventKind::Status, &EventKind::Status.to_string(), description)
    }

    fn event(&self, kind: EventKind, subject: &str, description: &str) -> LogEvent {
        let timestamp = Local::now().format(&self.timestamp_format).to_string();
        LogEvent::new(timestamp, kind, subject, description)
    }
}

fn html_path(name: &Path) -> PathBuf {
    if name.as_os_str().to_string_lossy().ends_with(EXTENSION) {
        return name.to_path_buf();
    }
    let mut path = name.as_os_str().to_os_string();
    path.push(EXTENSION);
    PathBuf::from(path)
}

fn write_text(file: &mut File, path: &Path, text: &str) -> Result<()> {
    file.write_all(text.as_bytes())
        .map_err(|source| LogError::Write {
            path: path.to_path_buf(),
            source,
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
