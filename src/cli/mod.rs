//! CLI module - argument parsing, interactive prompts and the main menu loop

pub mod args;
pub mod interrupt;
pub mod menu;
pub mod prompts;

pub use args::{Cli, Settings};
pub use interrupt::*;
pub use menu::*;
pub use prompts::*;
