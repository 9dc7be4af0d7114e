//! Progress spinner helpers using indicatif

use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Tick interval of the conversion spinner
pub const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{msg} {spinner:.cyan}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("|/-\\ "),
    );
    pb.set_message(message.to_string());
    pb
}

/// Show a spinner for a fixed `duration`, then clear it.
///
/// Purely cosmetic: it runs before the work, not alongside it.
pub fn run_spinner(message: &str, duration: Duration) {
    if duration.is_zero() {
        return;
    }

    let pb = create_spinner(message);
    let ticks = (duration.as_millis() / SPINNER_TICK.as_millis()).max(1);
    for _ in 0..ticks {
        thread::sleep(SPINNER_TICK);
        pb.tick();
    }
    pb.finish_and_clear();
}

/// Hold a status message on screen before the next redraw
pub fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
