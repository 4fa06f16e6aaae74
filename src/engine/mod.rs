//! Myers shortest-edit-script engine
//!
//! This module implements the diff core:
//!
//! - `edit`: the tagged operation type describing one diff step
//! - `frontier`: the per-depth farthest-x store over diagonals
//! - `myers`: the forward search and the backtrace reconstruction
//!
//! The engine is purely synchronous and has no error surface: any two
//! finite sequences produce a valid script, empty inputs included.

pub mod edit;
pub mod frontier;
pub mod myers;

pub use edit::Diff;
pub use myers::Myers;

/// Minimal edit script transforming `a` into `b`.
///
/// Deterministic for identical inputs: ties between equally short paths are
/// always broken toward the insertion branch.
pub fn diff<T: Eq + Clone>(a: &[T], b: &[T]) -> Vec<Diff<T>> {
    Myers::new(a, b).diff()
}
