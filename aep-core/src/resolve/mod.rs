//! Derivations over the parsed project graph.
//!
//! Models stay plain data; anything computed across several of them
//! lives here.

pub mod output;

pub use output::{resolve_output_file, ResolvedTimeSpan};
