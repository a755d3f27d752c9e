use serde::Serialize;
use telerx_validate::{StateSnapshot, ValidationOutcome};

/// Render a decoded snapshot as JSON, compact or indented.
///
/// Field names are the schema's original names — the serde model carries
/// them verbatim, no display aliases.
pub fn render_snapshot(snapshot: &StateSnapshot, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(snapshot)
    } else {
        serde_json::to_string_pretty(snapshot)
    };
    rendered.unwrap_or_else(|err| render_error(&format!("failed to render snapshot: {err}"), compact))
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Projection output when no snapshot exists: an error object carrying
/// the decode failure message.
pub fn render_error(message: &str, compact: bool) -> String {
    let body = ErrorBody { error: message };
    let rendered = if compact {
        serde_json::to_string(&body)
    } else {
        serde_json::to_string_pretty(&body)
    };
    rendered.unwrap_or_else(|_| format!("{{\"error\": \"{message}\"}}"))
}

/// Print a validation outcome to stdout.
pub fn print_outcome(outcome: &ValidationOutcome) {
    if outcome.is_valid {
        println!("Validation: PASSED");
    } else {
        println!("Validation: FAILED");
        for error in &outcome.errors {
            println!("  Error: {error}");
        }
    }

    if !outcome.warnings.is_empty() {
        println!("Warnings:");
        for warning in &outcome.warnings {
            println!("  - {warning}");
        }
    }
}
