//! Config artifact codec
//!
//! An artifact is a TypeScript module that imports the `AppConfig` type and
//! default-exports an object literal. The literal is always written as JSON,
//! which is also what `parse_artifact` reads back.

use crate::domain::entities::AppConfig;

const IMPORT_LINE: &str = r#"import { AppConfig } from ".";"#;

/// Render a self-contained, directly loadable artifact for `config`.
pub fn render_artifact(config: &AppConfig) -> serde_json::Result<String> {
    let body = serde_json::to_string_pretty(config)?;
    Ok(format!(
        "{IMPORT_LINE}\n\nconst config: AppConfig = {body};\n\nexport default config;\n"
    ))
}

/// The object literal assigned in an artifact, if there is one.
///
/// Spans from the first `{` after the first `=` to the last `}` in the file.
pub fn extract_object_literal(text: &str) -> Option<&str> {
    let assigned = &text[text.find('=')? + 1..];
    let open = assigned.find('{')?;
    let close = assigned.rfind('}')?;
    (close > open).then(|| &assigned[open..=close])
}

/// Parse an artifact back into an `AppConfig`.
pub fn parse_artifact(text: &str) -> Result<AppConfig, String> {
    let literal = extract_object_literal(text)
        .ok_or_else(|| "no object literal assigned in config module".to_string())?;
    serde_json::from_str(literal).map_err(|e| e.to_string())
}
