//! worddiff - minimal edit scripts between two texts
//!
//! The core is a Myers shortest-edit-distance engine (`engine`) producing an
//! ordered list of insert/delete/same operations with 1-based positions.
//! Everything else is presentation: tokenizers feeding the engine (`text`),
//! color-coded rendering of its output (`render`), and the command layer
//! wiring them to files and a pager (`commands`, `pager`).

use clap::ValueEnum;

pub mod commands;
pub mod engine;
pub mod pager;
pub mod render;
pub mod text;

pub use engine::{Diff, Myers, diff};

/// Granularity the input texts are tokenized at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    Words,
    Lines,
    Graphemes,
}

/// Shape of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The edited text inline, deletions struck through, insertions green
    Stream,
    /// One operation per line with its 1-based positions
    Listing,
}
