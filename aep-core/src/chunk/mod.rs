//! RIFX container decoding: the envelope, the chunk tree, and the typed
//! per-tag body layouts.

pub mod bodies;
pub mod tag;
pub mod tree;
