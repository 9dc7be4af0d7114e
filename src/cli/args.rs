//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::convert::{ConvertOptions, DEFAULT_EXPORT_DIR, MAX_QUALITY};

/// folder2pdf - Merge a folder of JPG/PNG images into a single PDF
#[derive(Parser, Debug)]
#[command(name = "folder2pdf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the PDFs are written to, relative to the current directory.
    /// Created at startup if it does not exist.
    #[arg(long, default_value = DEFAULT_EXPORT_DIR)]
    pub export_dir: PathBuf,

    /// JPEG quality used for every page (1-100)
    #[arg(long, default_value = "100", value_parser = validate_quality)]
    pub quality: u8,

    /// Skip the conversion spinner and status pauses
    #[arg(long, default_value = "false")]
    pub no_animation: bool,

    /// Keep previous output on screen instead of clearing between actions
    #[arg(long, default_value = "false")]
    pub no_clear: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Runtime settings of the interactive loop
#[derive(Debug, Clone)]
pub struct Settings {
    pub export_dir: PathBuf,
    pub convert: ConvertOptions,
    /// Length of the cosmetic spinner shown before each conversion
    pub spinner: Duration,
    /// How long the outcome of a conversion stays on screen
    pub result_pause: Duration,
    /// How long short error and info messages stay on screen
    pub message_pause: Duration,
    /// Pause after an unrecognized menu choice
    pub invalid_choice_pause: Duration,
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            convert: ConvertOptions {
                quality: MAX_QUALITY,
            },
            spinner: Duration::from_millis(1500),
            result_pause: Duration::from_millis(1500),
            message_pause: Duration::from_millis(1000),
            invalid_choice_pause: Duration::from_millis(500),
            clear_screen: true,
        }
    }
}

impl Settings {
    /// Settings with every delay removed and no screen clearing
    pub fn instant(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            spinner: Duration::ZERO,
            result_pause: Duration::ZERO,
            message_pause: Duration::ZERO,
            invalid_choice_pause: Duration::ZERO,
            clear_screen: false,
            ..Self::default()
        }
    }
}

impl Cli {
    /// Resolve the parsed arguments into loop settings.
    /// A relative export directory is anchored at `cwd`.
    pub fn settings(&self, cwd: &std::path::Path) -> Settings {
        let mut settings = Settings {
            export_dir: cwd.join(&self.export_dir),
            convert: ConvertOptions {
                quality: self.quality,
            },
            clear_screen: !self.no_clear,
            ..Settings::default()
        };

        if self.no_animation {
            settings.spinner = Duration::ZERO;
            settings.result_pause = Duration::ZERO;
            settings.message_pause = Duration::ZERO;
            settings.invalid_choice_pause = Duration::ZERO;
        }

        settings
    }
}

/// Validator for quality parameter
fn validate_quality(s: &str) -> Result<u8, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid quality", s))?;

    if !(1..=MAX_QUALITY).contains(&value) {
        Err(format!("quality must be between 1 and {}, got {}", MAX_QUALITY, value))
    } else {
        Ok(value)
    }
}
