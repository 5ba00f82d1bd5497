pub mod clear;
pub mod local;
pub mod scan;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use netsweep_common::config::{DEFAULT_PROBE_TIMEOUT, DEFAULT_UPPER_BOUND};
use netsweep_common::event_log::EventLogger;

/// Timestamp pattern of the log rows written by the CLI, e.g. `31/01/2024 at 17:05:09`.
pub const CLI_TIMESTAMP_FORMAT: &str = "%d/%m/%Y at %H:%M:%S";

#[derive(Parser)]
#[command(name = "netsweep")]
#[command(about = "Sweep a subnet for reachable hosts and keep an HTML audit log.")]
#[command(args_conflicts_with_subcommands = true, flatten_help = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Used when no subcommand is given, so `netsweep 192.168.1` runs a sweep
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every host of a subnet (the default)
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Show the name and address of this machine
    #[command(alias = "l")]
    Local,
    /// Truncate the log file down to its header
    #[command(alias = "c")]
    Clear,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Subnet prefix without the trailing dot, e.g. 192.168.1 (prompted for when omitted)
    pub subnet: Option<String>,

    /// Host suffixes 1 up to, but excluding, this value are probed
    #[arg(short, long, default_value_t = DEFAULT_UPPER_BOUND)]
    pub upper_bound: u16,

    /// How long to wait for a single host, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Skip the report about this machine
    #[arg(long)]
    pub no_local: bool,
}

#[derive(Args)]
pub struct LogArgs {
    /// Log file name; ".html" is appended when missing
    #[arg(short, long, global = true, default_value = "log")]
    pub log: String,

    /// chrono strftime pattern for row timestamps
    #[arg(long, global = true, default_value = CLI_TIMESTAMP_FORMAT)]
    pub date_format: String,

    /// Truncate the log before this session's rows are written
    #[arg(long, global = true)]
    pub clear_log: bool,

    /// Extra Info row recorded at the start of the session
    #[arg(short, long, global = true)]
    pub message: Option<String>,
}

impl LogArgs {
    /// Configures and starts a logger the way every command expects it.
    pub fn open_logger(&self) -> anyhow::Result<EventLogger> {
        let mut logger = EventLogger::new();
        logger.set_destination(&self.log);
        logger.set_timestamp_format(self.date_format.as_str())?;
        logger
            .start()
            .with_context(|| format!("starting log session on {}", logger.destination().display()))?;

        if self.clear_log {
            logger.clear_log()?;
        }
        if let Some(message) = &self.message {
            logger.log_message(message)?;
        }
        Ok(logger)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand to run, falling back to a sweep with the top-level arguments.
    pub fn into_command(self) -> (Commands, LogArgs, u8) {
        let command = self.command.unwrap_or(Commands::Scan(self.scan));
        (command, self.log, self.verbose)
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
