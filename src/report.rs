//! Readout formatting.
//!
//! Pure functions — (Readout, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, Readout};

/// Format a readout for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_readout(readout: &Readout, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(readout),
        OutputFormat::Json => format_json(readout),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(readout: &Readout) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", readout.display));

    if let Some(op) = readout.pending_operator {
        out.push_str(&format!("pending: {}\n", op));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(readout: &Readout) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(readout).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize readout to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
