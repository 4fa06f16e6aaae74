//! Terminal rendering of edit scripts
//!
//! Maps each operation variant to styling and nothing more: deletions are
//! red and struck through, insertions green, common elements unstyled. The
//! mapping is a pure function of the variant; the engine knows nothing
//! about it.
//!
//! Two shapes are supported:
//!
//! - `stream`: the edited text inline, every token in script order
//! - `listing`: one operation per line with its 1-based positions

use crate::engine::Diff;
use colored::Colorize;
use std::fmt::Display;

/// Paints one operation for the stream shape.
pub fn paint<T: Display>(op: &Diff<T>) -> String {
    match op {
        Diff::Delete { value, .. } => value.to_string().red().strikethrough().to_string(),
        Diff::Insert { value, .. } => value.to_string().green().to_string(),
        Diff::Same { value, .. } => value.to_string(),
    }
}

/// Inline reconstruction of the edited text, tokens joined by `separator`.
pub fn render_stream<T: Display>(script: &[Diff<T>], separator: &str) -> String {
    script.iter().map(paint).collect::<Vec<_>>().join(separator)
}

/// Positional listing, one operation per line.
pub fn render_listing<T: Display>(script: &[Diff<T>]) -> String {
    script
        .iter()
        .map(Diff::as_string)
        .collect::<Vec<_>>()
        .join("\n")
}
