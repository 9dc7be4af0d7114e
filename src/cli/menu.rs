//! Interactive main menu state machine
//!
//! The loop has four states:
//!
//! - `Menu`: show the menu and read a choice
//! - `Convert`: ask for a folder, convert it, offer to delete it
//! - `Cleanup`: delete every folder kept after earlier conversions
//! - `Exit`: terminal
//!
//! Each non-terminal state has a handler that talks to the user and returns a
//! [`MenuEvent`]; [`transition`] maps the current state and that event to the
//! next state. The transition table is pure, so it can be checked without any
//! I/O, and the handlers can be driven by a scripted [`Prompter`].

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use super::args::Settings;
use super::interrupt::defer_interrupt;
use super::prompts::{confirm_cleanup, confirm_exit, confirm_keep_folder, Prompter};
use crate::cleanup::{delete_with_confirmation, remove_folder, ProcessedFolders};
use crate::convert::{convert_folder, ensure_export_folder, ConversionOutcome};
use crate::report::display_outcome;
use crate::utils::{
    clear_console, pause, print_error, print_folder_list, print_goodbye, print_info, print_menu,
    print_section_header, print_warning, run_spinner, BROOM, PAGE,
};

// ============================================================================
// States, choices and events
// ============================================================================

/// Where the control loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    Convert,
    Cleanup,
    Exit,
}

/// A valid main-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Cleanup,
    Exit,
}

impl MenuChoice {
    /// Parse the raw menu input ("1", "2" or "3", surrounding whitespace ignored)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Convert),
            "2" => Some(MenuChoice::Cleanup),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What a state handler observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Menu choice 1
    Convert,
    /// Menu choice 2
    Cleanup,
    /// Menu choice 3, with the answer to the exit confirmation
    Exit { confirmed: bool },
    /// Unrecognized menu input
    Invalid,
    /// A conversion or cleanup action finished, whatever its outcome
    Done,
}

/// Next state for `state` after `event`.
///
/// `Exit` is terminal. Events that make no sense in a state leave it unchanged.
pub fn transition(state: MenuState, event: MenuEvent) -> MenuState {
    match (state, event) {
        (MenuState::Menu, MenuEvent::Convert) => MenuState::Convert,
        (MenuState::Menu, MenuEvent::Cleanup) => MenuState::Cleanup,
        (MenuState::Menu, MenuEvent::Exit { confirmed: true }) => MenuState::Exit,
        (MenuState::Menu, MenuEvent::Exit { confirmed: false }) => MenuState::Menu,
        (MenuState::Menu, MenuEvent::Invalid) => MenuState::Menu,
        (MenuState::Convert, MenuEvent::Done) => MenuState::Menu,
        (MenuState::Cleanup, MenuEvent::Done) => MenuState::Menu,
        (MenuState::Exit, _) => MenuState::Exit,
        (state, event) => {
            warn!(?state, ?event, "ignoring unexpected menu event");
            state
        }
    }
}

/// Strip whitespace and one pair of surrounding quotes, as left by
/// drag-and-drop into most terminals.
pub fn clean_path_input(input: &str) -> &str {
    let trimmed = input.trim();
    ['"', '\'']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed)
}

// ============================================================================
// Control loop
// ============================================================================

type Handler<P> = fn(&mut App<P>) -> Result<MenuEvent>;

/// The interactive control loop and everything it owns
pub struct App<P: Prompter> {
    prompter: P,
    settings: Settings,
    processed: ProcessedFolders,
    state: MenuState,
}

impl<P: Prompter> App<P> {
    /// Create the loop, making sure the export directory exists
    pub fn new(prompter: P, settings: Settings) -> Result<Self> {
        ensure_export_folder(&settings.export_dir)?;
        Ok(Self {
            prompter,
            settings,
            processed: ProcessedFolders::new(),
            state: MenuState::Menu,
        })
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Folders kept after conversion and not yet cleaned up
    pub fn processed(&self) -> &ProcessedFolders {
        &self.processed
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run until the user exits
    pub fn run(&mut self) -> Result<()> {
        self.clear();
        while self.state != MenuState::Exit {
            self.step()?;
        }
        print_goodbye();
        Ok(())
    }

    /// Handle the current state once and advance to the next one
    pub fn step(&mut self) -> Result<MenuState> {
        let Some(handler) = Self::handler(self.state) else {
            return Ok(self.state);
        };

        let event = handler(self)?;
        let next = transition(self.state, event);
        debug!(from = ?self.state, ?event, to = ?next, "menu transition");
        self.state = next;
        Ok(next)
    }

    fn handler(state: MenuState) -> Option<Handler<P>> {
        match state {
            MenuState::Menu => Some(Self::handle_menu as Handler<P>),
            MenuState::Convert => Some(Self::handle_convert as Handler<P>),
            MenuState::Cleanup => Some(Self::handle_cleanup as Handler<P>),
            MenuState::Exit => None,
        }
    }

    fn clear(&self) {
        if self.settings.clear_screen {
            clear_console();
        }
    }

    fn handle_menu(&mut self) -> Result<MenuEvent> {
        print_menu();
        let input = self.prompter.menu_choice()?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Convert) => Ok(MenuEvent::Convert),
            Some(MenuChoice::Cleanup) => Ok(MenuEvent::Cleanup),
            Some(MenuChoice::Exit) => Ok(MenuEvent::Exit {
                confirmed: confirm_exit(&mut self.prompter)?,
            }),
            None => {
                print_error("Invalid choice. Please try again.");
                pause(self.settings.invalid_choice_pause);
                Ok(MenuEvent::Invalid)
            }
        }
    }

    fn handle_convert(&mut self) -> Result<MenuEvent> {
        self.clear();
        print_section_header(&PAGE, "IMAGE TO PDF CONVERSION");

        let input = self.prompter.folder_path()?;
        let cleaned = clean_path_input(&input);
        let folder = PathBuf::from(cleaned);
        if cleaned.is_empty() || !folder.is_dir() {
            print_error("Error: Invalid directory path");
            pause(self.settings.message_pause);
            return Ok(MenuEvent::Done);
        }
        let folder = folder.canonicalize().unwrap_or(folder);

        run_spinner("Processing...", self.settings.spinner);
        let result = defer_interrupt(|| {
            convert_folder(&folder, &self.settings.export_dir, &self.settings.convert)
        });
        if let Err(e) = &result {
            warn!(folder = %folder.display(), error = %e, "conversion failed");
        }

        self.clear();
        display_outcome(&result);
        pause(self.settings.result_pause);

        if !matches!(result, Ok(ConversionOutcome::Created(_))) {
            return Ok(MenuEvent::Done);
        }

        if confirm_keep_folder(&mut self.prompter)? {
            if self.processed.remember(&folder) {
                print_info("Folder kept. Use 'Delete processed folders' to remove it later.");
            }
        } else {
            let outcome = delete_with_confirmation(&mut self.prompter, &folder)?;
            if outcome.is_gone() {
                self.processed.forget(&folder);
            }
        }

        Ok(MenuEvent::Done)
    }

    fn handle_cleanup(&mut self) -> Result<MenuEvent> {
        self.clear();

        if self.processed.is_empty() {
            print_warning("No folders marked for deletion");
            pause(self.settings.message_pause);
            return Ok(MenuEvent::Done);
        }

        print_section_header(&BROOM, "FOLDER CLEANUP");
        println!("Folders pending deletion:");
        print_folder_list(self.processed.iter());

        if confirm_cleanup(&mut self.prompter, self.processed.len())? {
            for folder in self.processed.to_vec() {
                if remove_folder(&folder).is_gone() {
                    self.processed.forget(&folder);
                }
            }
        }

        Ok(MenuEvent::Done)
    }
}
