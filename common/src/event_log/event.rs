use std::borrow::Cow;
use std::fmt;

/// Document shell and open table written once per fresh log file.
pub const HEADER: &str = concat!(
    "<!DOCTYPE html> <html lang=\"en\"> <head> <meta charset=\"utf-8\"> <title>Log</title> ",
    "<style> table { width: 80%; margin-left: auto; margin-right: auto; } ",
    "table,th,td { border: 1px solid black; border-collapse: collapse; } ",
    "th,td { padding: 15px; } .center { text-align: center; } ",
    ".status { background-color: #eef3fb; } .info { background-color: #ffffff; } ",
    ".error { background-color: #fbeaea; } </style> ",
    "</head> <body> <table> <tr> <th>Date</th> <th>Type</th> <th>Description</th> </tr>\n",
);

/// Category of a log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Session boundaries.
    Status,
    /// Free-form messages.
    Info,
    /// Exceptions and errors.
    Error,
}

impl EventKind {
    /// Style class attached to the rendered row.
    pub fn css_class(self) -> &'static str {
        match self {
            EventKind::Status => "status",
            EventKind::Info => "info",
            EventKind::Error => "error",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Status => write!(f, "Status"),
            EventKind::Info => write!(f, "Info"),
            EventKind::Error => write!(f, "Error"),
        }
    }
}

/// One row of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: String,
    pub kind: EventKind,
    pub subject: String,
    pub description: String,
}

impl LogEvent {
    pub fn new(
        timestamp: String,
        kind: EventKind,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            kind,
            subject: subject.into(),
            description: description.into(),
        }
    }

    /// Renders the event as a single newline-terminated table row.
    ///
    /// Column order is fixed: timestamp, subject, description.
    pub fn to_row(&self) -> String {
        format!(
            "<tr class=\"{}\"> <td class=\"center\">{}</td> <td class=\"center\">{}</td> <td>{}</td> </tr>\n",
            self.kind.css_class(),
            escape_html(&self.timestamp),
            escape_html(&self.subject),
            escape_html(&self.description),
        )
    }
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
