//! Generate error code documentation from the source of truth (the error enum).
//!
//! Reads codes, descriptions, details and help text directly from
//! `PlacementError` via its `code()`, `description()`, `details()` and `help()`
//! methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::PlacementError;
use wordsearch::placement::Direction;

/// One example of every `PlacementError` variant
fn all_placement_error_variants() -> Vec<PlacementError> {
    vec![
        PlacementError::CoordinateNotFound { x: 3, y: 10, size: 10 },
        PlacementError::GridExhausted { word: "encyclopedia".to_string(), direction: Direction::Up },
        PlacementError::UnsupportedDirection { direction: Direction::Left },
        PlacementError::InvalidDirection { input: "diagonal".to_string() },
        PlacementError::EmptyWord,
        PlacementError::InvalidGridSize,
    ]
}

fn render_error_docs(errors: &[PlacementError]) -> String {
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!("### {}: {}\n\n", error.code(), error.description()));
        out.push_str(&format!("**Details:** {}\n\n", error.details()));

        if let Some(help_text) = error.help() {
            out.push_str(&format!("**How to fix:**\n```\n{help_text}\n```\n\n"));
        }

        out.push_str(&format!("**Example error message:**\n```\n{error}\n```\n\n"));
        out.push_str(&format!("**Detailed format:**\n```\n{}\n```\n\n", error.display_detailed()));
        out.push_str("---\n\n");
    }
    out
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Placement Errors (W001–W006)\n");
    println!("Errors from building a grid and placing words into it.\n");
    print!("{}", render_error_docs(&all_placement_error_variants()));

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```");
}
