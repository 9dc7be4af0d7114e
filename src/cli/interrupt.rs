//! Ctrl-C handling
//!
//! An interrupt can arrive two ways: as SIGINT while no prompt is active, or as
//! an `Interrupted` I/O error from a prompt that has the terminal in raw mode.
//! Both end the program with exit code 0.
//!
//! While a conversion is writing its output, SIGINT is held back until the
//! write has finished or been rolled back, so no temporary file is left in
//! the export directory.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use console::{style, Term};

static DEFERRING: AtomicBool = AtomicBool::new(false);
static PENDING: AtomicBool = AtomicBool::new(false);

/// Exit cleanly on SIGINT, immediately unless inside [`defer_interrupt`]
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        if DEFERRING.load(Ordering::SeqCst) {
            PENDING.store(true, Ordering::SeqCst);
            // The deferred section may have ended between the load and the store
            if DEFERRING.load(Ordering::SeqCst) || !PENDING.swap(false, Ordering::SeqCst) {
                return;
            }
        }
        exit_interrupted();
    })
    .context("Failed to install Ctrl-C handler")
}

/// Run `f` with SIGINT held back, then exit if one arrived meanwhile
pub fn defer_interrupt<T>(f: impl FnOnce() -> T) -> T {
    DEFERRING.store(true, Ordering::SeqCst);
    let out = f();
    DEFERRING.store(false, Ordering::SeqCst);

    if PENDING.swap(false, Ordering::SeqCst) {
        exit_interrupted();
    }
    out
}

fn exit_interrupted() -> ! {
    // dialoguer hides the cursor while a prompt is active
    let _ = Term::stdout().show_cursor();
    print_interrupted();
    std::process::exit(0);
}

/// Whether `err` was caused by the user pressing Ctrl-C inside a prompt
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return io_err.kind() == io::ErrorKind::Interrupted;
        }
        matches!(
            cause.downcast_ref::<dialoguer::Error>(),
            Some(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted
        )
    })
}

pub fn print_interrupted() {
    println!();
    println!("{}", style("Program interrupted by user.").yellow());
}
