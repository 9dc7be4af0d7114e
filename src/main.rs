//! folder2pdf: Image Folder to PDF CLI Tool
//!
//! An interactive console tool that merges a folder of images into a single
//! PDF and optionally deletes the source folder afterwards.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use folder2pdf::cli::{
    install_interrupt_handler, is_interrupted, print_interrupted, App, Cli, TerminalPrompter,
};
use folder2pdf::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {:#}", style("Warning:").yellow(), e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_interrupted(&e) => {
            print_interrupted();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "fatal error");
            eprintln!("\n{} {:#}", style("Fatal error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    install_interrupt_handler()?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let settings = cli.settings(&cwd);

    let mut app = App::new(TerminalPrompter::new(), settings)?;
    app.run()
}
