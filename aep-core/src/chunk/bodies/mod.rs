//! Typed decoders for the recognised leaf-chunk layouts.
//!
//! Each body decodes a fixed big-endian layout; bit-packed attribute
//! fields stay raw on the record and are read through mask accessors.

pub mod comp;
pub mod footage;
pub mod layer;
pub mod meta;
pub mod prop;
pub mod render_queue;
