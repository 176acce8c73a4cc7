//! Error taxonomy for every stage of the parse.

/// Convenience result type used across the crate.
pub type AepResult<T> = Result<T, AepError>;

/// Top-level error taxonomy for project-file decoding.
///
/// Fatal kinds abort the parse; [`AepError::Decode`] values are recoverable
/// and are collected as warnings on the parsed project instead.
#[derive(thiserror::Error, Debug)]
pub enum AepError {
    /// The file does not start with the expected `RIFX` / `Egg!` magic.
    #[error("invalid magic at offset {offset}: expected {expected:?}, found {found:?}")]
    InvalidMagic {
        /// Absolute byte offset of the magic field.
        offset: u64,
        /// The four bytes the format requires.
        expected: [u8; 4],
        /// The four bytes actually present.
        found: [u8; 4],
    },

    /// A declared length exceeds the remaining input.
    #[error("truncated data in `{path}` at offset {offset}: need {need} bytes, have {have}")]
    Truncated {
        /// Chunk path from the root, e.g. `LIST:Fold/LIST:Item/cdta`.
        path: String,
        /// Absolute byte offset where the shortfall was detected.
        offset: u64,
        /// Bytes required by the declared layout.
        need: usize,
        /// Bytes actually available.
        have: usize,
    },

    /// A mandatory chunk is missing from its container.
    #[error("required chunk `{tag}` not found under `{path}`")]
    ChunkNotFound {
        /// Tag of the missing chunk.
        tag: String,
        /// Chunk path of the container that was searched.
        path: String,
    },

    /// A chunk is structurally out of place, e.g. a `LIST` whose declared
    /// list type is not printable ASCII.
    #[error("unexpected chunk in `{path}` at offset {offset}: {reason}")]
    UnexpectedChunk {
        /// Chunk path of the offending chunk.
        path: String,
        /// Absolute byte offset of the offending bytes.
        offset: u64,
        /// Human-readable description of the mismatch.
        reason: String,
    },

    /// A `tdb4` flag / dimension combination outside the inference table.
    #[error("unsupported property value type in `{path}`: {reason}")]
    UnsupportedValueType {
        /// Chunk path of the property whose type could not be inferred.
        path: String,
        /// Description of the unmatched flag combination.
        reason: String,
    },

    /// The COS tokenizer or parser rejected a `btdk` payload.
    #[error("malformed COS data at offset {offset}: {reason}")]
    MalformedCos {
        /// Byte offset within the COS payload.
        offset: u64,
        /// Description of the syntax error.
        reason: String,
    },

    /// A non-fatal field-level decode problem. The parse continues; these
    /// are collected on the parsed project as warnings.
    #[error("decode error in `{path}` at offset {offset}: {reason}")]
    Decode {
        /// Chunk path of the field that failed to decode.
        path: String,
        /// Absolute byte offset of the field.
        offset: u64,
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AepError {
    /// Build an [`AepError::Truncated`] value.
    pub fn truncated(path: impl Into<String>, offset: u64, need: usize, have: usize) -> Self {
        Self::Truncated {
            path: path.into(),
            offset,
            need,
            have,
        }
    }

    /// Build an [`AepError::ChunkNotFound`] value.
    pub fn chunk_not_found(tag: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ChunkNotFound {
            tag: tag.into(),
            path: path.into(),
        }
    }

    /// Build an [`AepError::UnexpectedChunk`] value.
    pub fn unexpected_chunk(
        path: impl Into<String>,
        offset: u64,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnexpectedChunk {
            path: path.into(),
            offset,
            reason: reason.into(),
        }
    }

    /// Build an [`AepError::UnsupportedValueType`] value.
    pub fn unsupported_value_type(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedValueType {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`AepError::MalformedCos`] value.
    pub fn malformed_cos(offset: u64, reason: impl Into<String>) -> Self {
        Self::MalformedCos {
            offset,
            reason: reason.into(),
        }
    }

    /// Build an [`AepError::Decode`] value.
    pub fn decode(path: impl Into<String>, offset: u64, reason: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            offset,
            reason: reason.into(),
        }
    }

    /// Whether this error aborts the whole parse (everything except
    /// [`AepError::Decode`]).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
