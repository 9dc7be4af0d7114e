//! Conversion outcome and summary reporting

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::convert::{ConversionOutcome, ConversionReport, ConvertError};
use crate::utils::{format_bytes, print_error, print_path, print_success, print_warning};

/// Build the summary table for a finished conversion
pub fn summary_table(report: &ConversionReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("📄 Pages"),
        Cell::new(report.pages)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("💾 Size"),
        Cell::new(format_bytes(report.bytes)).fg(Color::Cyan),
    ]);

    if let (Some(first), Some(last)) = (report.sources.first(), report.sources.last()) {
        let name = |p: &std::path::Path| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };
        table.add_row(vec![
            Cell::new("🔢 Page order"),
            Cell::new(format!("{} … {}", name(first.as_path()), name(last.as_path()))),
        ]);
    }

    table
}

/// Print the result of a conversion attempt
pub fn display_outcome(result: &Result<ConversionOutcome, ConvertError>) {
    println!();
    match result {
        Ok(ConversionOutcome::Created(report)) => {
            print_success("Conversion completed successfully!");
            let file_name = report
                .output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("PDF created: {}", style(file_name).bold());
            print_path("Location", &report.output);
            println!();
            for line in summary_table(report).to_string().lines() {
                println!("  {}", line);
            }
        }
        Ok(ConversionOutcome::AlreadyExists(existing)) => {
            print_warning("PDF already exists! Operation canceled.");
            print_path("Existing file", existing);
        }
        Ok(ConversionOutcome::NoImages) => {
            print_warning("No JPG or PNG images found in this folder. Nothing was converted.");
        }
        Err(e) => {
            print_error("Conversion failed");
            println!("{}", style(e).red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_table_lists_page_range() {
        let report = ConversionReport {
            output: PathBuf::from("export/album.pdf"),
            pages: 3,
            sources: vec![
                PathBuf::from("album/a.jpg"),
                PathBuf::from("album/b.png"),
                PathBuf::from("album/c.jpeg"),
            ],
            bytes: 2048,
        };

        let rendered = summary_table(&report).to_string();
        assert!(rendered.contains("Pages"));
        assert!(rendered.contains('3'));
        assert!(rendered.contains("2.0 KB"));
        assert!(rendered.contains("a.jpg … c.jpeg"));
    }
}
