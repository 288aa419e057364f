//! Plain-text rendering for the CLI.

use std::fmt::Write;

use crate::catalog::INTENTS;
use crate::ui::output::OutputView;

pub fn render_output(view: &OutputView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Generated Prompt");
    let _ = writeln!(out, "[{} {}]", view.intent.icon(), view.intent.label());
    let _ = writeln!(out);
    let _ = writeln!(out, "Original Prompt:");
    let _ = writeln!(out, "  \"{}\"", view.original_prompt);
    let _ = writeln!(out);
    let _ = writeln!(out, "Refined Prompt:{}", if view.copied { " (Copied!)" } else { "" });
    let _ = writeln!(out, "{}", view.refined_prompt);
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Original Length: {} chars | Refined Length: {} chars",
        view.stats.original_length, view.stats.refined_length
    );
    out
}

pub fn render_error(message: &str) -> String {
    format!("Error: {}", message)
}

/// One line per intent: `<icon> <id>  <label>`.
pub fn render_intents() -> String {
    INTENTS
        .iter()
        .map(|option| format!("{} {:<18} {}", option.icon, option.id.as_str(), option.label))
        .collect::<Vec<_>>()
        .join("\n")
}
