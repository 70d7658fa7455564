//! Display functions for session state

use super::OutputFormat;
use super::formatters::render_board;
use crate::catalog::{self, Configuration};
use crate::puzzle::SessionSnapshot;
use colored::Colorize;
use std::fmt::Write;

/// Render a snapshot in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_snapshot(
    snapshot: &SessionSnapshot,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_board(snapshot)),
        OutputFormat::Json => serde_json::to_string_pretty(snapshot),
    }
}

/// Print a snapshot to stdout
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_snapshot(snapshot: &SessionSnapshot, format: OutputFormat) -> serde_json::Result<()> {
    println!("{}", render_snapshot(snapshot, format)?);
    Ok(())
}

fn render_configuration(config: &Configuration) -> String {
    let words: Vec<String> = config
        .words()
        .iter()
        .map(|word| {
            word.syllables()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("·")
        })
        .collect();

    format!(
        "  {}  {}\n      {}",
        config.id().to_string().bright_yellow().bold(),
        config.name(),
        words.join("  ").bright_black()
    )
}

/// Render the list of catalog configurations
#[must_use]
pub fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Available configurations:".bright_cyan().bold());
    for config in catalog::all() {
        let _ = writeln!(out, "{}", render_configuration(config));
    }
    out
}

/// Print the list of catalog configurations
pub fn print_catalog() {
    print!("{}", render_catalog());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConfigId;
    use crate::puzzle::Session;

    #[test]
    fn json_snapshot_has_all_fields() {
        let session = Session::from_catalog(ConfigId::new(2)).unwrap();
        let json = render_snapshot(&session.snapshot(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config_id"], 2);
        assert_eq!(value["grid"][0][0], "force");
        assert_eq!(value["swaps"], 0);
        assert_eq!(value["score"], 0);
        assert_eq!(value["max_score"], 16);
        assert_eq!(value["completed"], false);
    }

    #[test]
    fn catalog_lists_every_configuration() {
        colored::control::set_override(false);
        let text = render_catalog();
        assert!(text.contains("affiliate / immaculate / invisible / underwater"));
        assert!(text.contains("examining / reinforcement / informative / material"));
        assert!(text.contains("mechanical / calculating / immediate / diagonal"));
        assert!(text.contains("me·chan·i·cal"));
    }
}
