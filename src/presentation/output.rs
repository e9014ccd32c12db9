//! Output Rendering
//!
//! Renders the terminal outcome of a run. Progress is logged through
//! `tracing` on stderr; only the final outcome goes to stdout.

use crate::application::CheckOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    skip: &'static str,
    dry: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            skip: "○",
            dry: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            skip: "[SKIP]",
            dry: "[DRY]",
        }
    }
}

/// Render an outcome as a single output string (no trailing newline).
pub fn render(outcome: &CheckOutcome, format: OutputFormat, unicode: bool) -> String {
    match format {
        OutputFormat::Json => outcome.to_json().to_string(),
        OutputFormat::Text => {
            let icons = if unicode {
                Icons::unicode()
            } else {
                Icons::ascii()
            };
            let icon = match outcome {
                CheckOutcome::Deployed { .. } => icons.check,
                CheckOutcome::WouldDeploy { .. } => icons.dry,
                CheckOutcome::Skipped { .. } => icons.skip,
            };
            format!("{} {}", icon, outcome.message())
        }
    }
}
