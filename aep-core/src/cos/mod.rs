//! Parser for the COS object syntax embedded in text stream data.
//!
//! Text layer styling is stored as a `btdk` blob whose payload uses a
//! PDF-like object syntax (Carousel Object Structure): `/name` keys,
//! `(string)` and `<hex>` literals, `<< >>` dictionaries, `[ ]` arrays,
//! `N G obj` definitions, and `stream` payloads. [`parse`] turns a blob
//! into a [`CosValue`] tree.

mod lexer;
mod parser;
mod value;

pub use parser::parse;
pub use value::{CosDict, CosValue};

#[cfg(test)]
#[path = "../../tests/unit/cos/parser.rs"]
mod tests;
