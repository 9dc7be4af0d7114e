//! Terminal styling utilities for the interactive menu

use console::{style, Emoji, Term};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static PAGE: Emoji<'_, '_> = Emoji("📄 ", "");
pub static BROOM: Emoji<'_, '_> = Emoji("🧹 ", "");

const MENU_WIDTH: usize = 50;

/// Clear the terminal, ignoring terminals that cannot be cleared
pub fn clear_console() {
    let _ = Term::stdout().clear_screen();
}

/// Print the main menu
pub fn print_menu() {
    let rule = "═".repeat(MENU_WIDTH);
    println!();
    println!("{}", style(&rule).cyan());
    println!("{}{}", " ".repeat(20), style("MAIN MENU").white().bold());
    println!("{}", style(&rule).cyan());
    println!("1. Convert images to PDF");
    println!("2. Delete processed folders");
    println!("3. Exit program");
    println!("{}", style(&rule).cyan());
}

/// Print a section header, e.g. "IMAGE TO PDF CONVERSION"
pub fn print_section_header(icon: &Emoji<'_, '_>, title: &str) {
    println!();
    println!("{}{}", icon, style(format!("=== {} ===", title)).cyan().bold());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("{} {}", style("✗").red().bold(), style(message).red());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}{}", INFO, message);
}

/// Print a labelled path line, e.g. "Location: /abs/path.pdf"
pub fn print_path(label: &str, path: &Path) {
    println!("{}: {}", label, style(absolute_display(path)).dim());
}

/// Print a numbered list of folders starting at 1
pub fn print_folder_list<'a>(folders: impl IntoIterator<Item = &'a std::path::PathBuf>) {
    for (idx, folder) in folders.into_iter().enumerate() {
        println!("  {}. {}{}", style(idx + 1).yellow(), FOLDER, folder.display());
    }
}

/// Print the farewell line
pub fn print_goodbye() {
    println!();
    println!("{}", style("Goodbye!").cyan().bold());
}

// Helper functions

/// Absolute form of `path` for display, falling back to the path as given
pub fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.2} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_absolute_display_of_relative_path() {
        let shown = absolute_display(Path::new("export/a.pdf"));
        assert!(Path::new(&shown).is_absolute());
        assert!(shown.ends_with("a.pdf"));
    }
}
