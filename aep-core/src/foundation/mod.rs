//! Shared plumbing: the byte cursor and the crate-wide error type.

pub mod cursor;
pub mod error;
