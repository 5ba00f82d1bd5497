use colored::*;
use netsweep_core::{HostOutcome, Reachability};
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    println!("{}", line);
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    println!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
}

/// One console line per probed host.
pub fn outcome_line(outcome: &HostOutcome) -> String {
    let color = match outcome.status {
        Reachability::Reachable => colors::REACHABLE,
        Reachability::Unreachable => colors::UNREACHABLE,
        Reachability::Failed => colors::FAILED,
    };
    format!("{}", outcome.to_string().color(color))
}

pub fn summary(reachable: usize, total: usize, failed: usize) {
    let count: ColoredString = reachable.to_string().color(colors::PRIMARY).bold();
    print_status(format!("{count} of {total} hosts answered"));
    if failed > 0 {
        print_status(format!(
            "{} probes failed, see the log for details",
            failed.to_string().color(colors::FAILED)
        ));
    }
}

pub fn end_of_program() {
    println!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
}
