//! Tokenization of input texts into the sequences the engine compares
//!
//! The engine places no constraint on how elements are produced, only that
//! equality between them is well-defined; these helpers cover the three
//! granularities the CLI exposes.

pub mod tokenize;
