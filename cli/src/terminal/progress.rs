use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_progressbar(len: u64, prefix: String) -> ProgressBar {
    let progress_bar = ProgressBar::new(len);
    progress_bar.set_prefix(prefix);
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template(
        "[{prefix}] {elapsed_precise} {bar:36.cyan/blue} {pos:>4}/{len:4} {msg}",
    ) {
        progress_bar.set_style(style.progress_chars("■■□"));
    }
    progress_bar
}

/// Prints a line above the bar without tearing it.
///
/// `ProgressBar::println` is silent when the bar is hidden (stdout piped),
/// so the bar is suspended and the line goes to stdout instead.
pub fn println(bar: &ProgressBar, line: String) {
    bar.suspend(|| println!("{line}"));
}
