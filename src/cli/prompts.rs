//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Source of every answer the control loop needs from the user.
///
/// The terminal implementation is [`TerminalPrompter`]; tests drive the loop
/// with scripted answers instead.
pub trait Prompter {
    /// Read the raw main-menu selection.
    fn menu_choice(&mut self) -> Result<String>;

    /// Read the path of the folder to convert.
    fn folder_path(&mut self) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Prompter reading from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn menu_choice(&mut self) -> Result<String> {
        let choice: String = Input::new()
            .with_prompt("Enter your choice (1-3)")
            .allow_empty(true)
            .interact_text()?;
        Ok(choice)
    }

    fn folder_path(&mut self) -> Result<String> {
        let path: String = Input::new()
            .with_prompt("Enter folder path containing images")
            .allow_empty(true)
            .interact_text()?;
        Ok(path)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        // No default: the user has to answer y or n explicitly
        let confirmed = Confirm::new().with_prompt(message).interact()?;
        Ok(confirmed)
    }
}

/// Ask whether the source folder should be kept after a successful conversion
pub fn confirm_keep_folder(prompter: &mut dyn Prompter) -> Result<bool> {
    prompter.confirm("Keep original image folder?")
}

/// Ask whether to leave the program
pub fn confirm_exit(prompter: &mut dyn Prompter) -> Result<bool> {
    prompter.confirm("Exit program?")
}

/// Ask once before removing every remembered folder
pub fn confirm_cleanup(prompter: &mut dyn Prompter, folder_count: usize) -> Result<bool> {
    let message = if folder_count == 1 {
        "Proceed with deletion of the listed folder?".to_string()
    } else {
        format!("Proceed with deletion of all {} listed folders?", folder_count)
    };
    prompter.confirm(&message)
}
