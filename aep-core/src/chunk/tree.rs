//! The parsed chunk tree and the RIFX envelope around it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chunk::tag::{Tag, tags};
use crate::foundation::error::{AepError, AepResult};

/// Payload of a parsed chunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChunkData {
    /// Container chunk: a list type plus nested child chunks.
    List {
        /// The 4-byte list type following the `LIST` tag.
        kind: Tag,
        /// Child chunks in file order.
        children: Vec<Chunk>,
    },
    /// Container whose payload is deliberately not recursed into
    /// (`LIST:btdk` carries an opaque COS document).
    Blob {
        /// The 4-byte list type.
        kind: Tag,
        /// The raw payload after the list type.
        bytes: Vec<u8>,
    },
    /// Leaf chunk payload.
    Bytes(Vec<u8>),
}

/// One chunk of the RIFX tree. Owns its payload; children are owned by
/// their container, so the tree is acyclic by construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The 4-byte chunk tag.
    pub tag: Tag,
    /// Absolute file offset of the tag bytes.
    pub offset: u64,
    /// Payload.
    pub data: ChunkData,
}

impl Chunk {
    /// A short label for error paths: `cdta` for leaves, `LIST:Fold` for
    /// containers.
    pub fn label(&self) -> String {
        match &self.data {
            ChunkData::List { kind, .. } | ChunkData::Blob { kind, .. } if *kind != self.tag => {
                format!("{}:{kind}", self.tag)
            }
            _ => self.tag.to_string(),
        }
    }

    /// The list type, when this is a container.
    pub fn list_kind(&self) -> Option<Tag> {
        match &self.data {
            ChunkData::List { kind, .. } | ChunkData::Blob { kind, .. } => Some(*kind),
            ChunkData::Bytes(_) => None,
        }
    }

    /// Children of a container, or an empty slice for leaves and blobs.
    pub fn children(&self) -> &[Chunk] {
        match &self.data {
            ChunkData::List { children, .. } => children,
            _ => &[],
        }
    }

    /// Leaf payload bytes, or an error naming the chunk when it is a
    /// container.
    pub fn bytes(&self, path: &str) -> AepResult<&[u8]> {
        match &self.data {
            ChunkData::Bytes(b) => Ok(b),
            ChunkData::Blob { bytes, .. } => Ok(bytes),
            ChunkData::List { .. } => Err(AepError::unexpected_chunk(
                path,
                self.offset,
                format!("expected leaf payload, `{}` is a container", self.label()),
            )),
        }
    }

    /// Leaf payload decoded as UTF-8 (lossy).
    pub fn utf8(&self, path: &str) -> AepResult<String> {
        Ok(String::from_utf8_lossy(self.bytes(path)?).into_owned())
    }

    /// First child with the given tag.
    pub fn child(&self, tag: Tag) -> Option<&Chunk> {
        self.children().iter().find(|c| c.tag == tag)
    }

    /// First child with the given tag, or [`AepError::ChunkNotFound`].
    pub fn require_child(&self, tag: Tag, path: &str) -> AepResult<&Chunk> {
        self.child(tag)
            .ok_or_else(|| AepError::chunk_not_found(tag.as_display_string(), path))
    }

    /// All children with the given tag, in file order.
    pub fn children_tagged(&self, tag: Tag) -> impl Iterator<Item = &Chunk> {
        self.children().iter().filter(move |c| c.tag == tag)
    }

    /// First child container with the given list type.
    pub fn list(&self, kind: Tag) -> Option<&Chunk> {
        self.children().iter().find(|c| c.list_kind() == Some(kind))
    }

    /// First child container with the given list type, or
    /// [`AepError::ChunkNotFound`].
    pub fn require_list(&self, kind: Tag, path: &str) -> AepResult<&Chunk> {
        self.list(kind)
            .ok_or_else(|| AepError::chunk_not_found(format!("LIST:{kind}"), path))
    }

    /// All child containers with the given list type, in file order.
    pub fn lists(&self, kind: Tag) -> impl Iterator<Item = &Chunk> {
        self.children()
            .iter()
            .filter(move |c| c.list_kind() == Some(kind))
    }
}

/// The decoded RIFX envelope: the root container plus the XMP tail.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rifx {
    /// Top-level chunks of the `Egg!` payload, in file order.
    pub chunks: Vec<Chunk>,
    /// The UTF-8 XMP packet trailing the container, when present.
    pub xmp: Option<String>,
}

impl Rifx {
    /// First top-level container with the given list type.
    pub fn list(&self, kind: Tag) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.list_kind() == Some(kind))
    }

    /// First top-level container with the given list type, or
    /// [`AepError::ChunkNotFound`].
    pub fn require_list(&self, kind: Tag) -> AepResult<&Chunk> {
        self.list(kind).ok_or_else(|| {
            AepError::chunk_not_found(format!("LIST:{}", kind.as_display_string()), "root")
        })
    }

    /// First top-level leaf with the given tag.
    pub fn child(&self, tag: Tag) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.tag == tag)
    }

    /// First top-level leaf with the given tag, or
    /// [`AepError::ChunkNotFound`].
    pub fn require_child(&self, tag: Tag) -> AepResult<&Chunk> {
        self.child(tag)
            .ok_or_else(|| AepError::chunk_not_found(tag.as_display_string(), "root"))
    }

    /// Parse a whole project file image.
    pub fn parse(data: &[u8]) -> AepResult<Self> {
        if data.len() < 12 {
            return Err(AepError::truncated("root", 0, 12, data.len()));
        }
        let magic = [data[0], data[1], data[2], data[3]];
        if Tag(magic) != tags::RIFX {
            return Err(AepError::InvalidMagic {
                offset: 0,
                expected: tags::RIFX.0,
                found: magic,
            });
        }
        let declared = u32::from_be_bytes([data[4], data[5], data[6], data[7]]) as usize;
        let format = [data[8], data[9], data[10], data[11]];
        if Tag(format) != tags::EGG {
            return Err(AepError::InvalidMagic {
                offset: 8,
                expected: tags::EGG.0,
                found: format,
            });
        }
        if declared < 4 || data.len() < 8 + declared {
            return Err(AepError::truncated("root", 4, declared, data.len() - 8));
        }

        let payload = &data[12..8 + declared];
        let chunks = parse_children(payload, 12, "root")?;

        let tail = &data[8 + declared..];
        let xmp = if tail.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(tail).into_owned())
        };
        debug!(
            chunks = chunks.len(),
            xmp = xmp.is_some(),
            "parsed RIFX envelope"
        );
        Ok(Self { chunks, xmp })
    }
}

/// Walk a contiguous sequence of chunks filling `payload`.
///
/// `base` is the absolute file offset of `payload[0]`; `path` is the chunk
/// path of the enclosing container for error reporting.
fn parse_children(payload: &[u8], base: u64, path: &str) -> AepResult<Vec<Chunk>> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while pos < payload.len() {
        // A lone trailing pad byte after the last child is tolerated.
        if payload.len() - pos < 8 {
            if payload[pos..].iter().all(|&b| b == 0) {
                break;
            }
            return Err(AepError::truncated(
                path,
                base + pos as u64,
                8,
                payload.len() - pos,
            ));
        }
        let tag = Tag([
            payload[pos],
            payload[pos + 1],
            payload[pos + 2],
            payload[pos + 3],
        ]);
        if !tag.is_printable_ascii() {
            return Err(AepError::unexpected_chunk(
                path,
                base + pos as u64,
                format!("non-ASCII chunk tag `{tag}`"),
            ));
        }
        let len = u32::from_be_bytes([
            payload[pos + 4],
            payload[pos + 5],
            payload[pos + 6],
            payload[pos + 7],
        ]) as usize;
        let body_start = pos + 8;
        if payload.len() - body_start < len {
            return Err(AepError::truncated(
                format!("{path}/{tag}"),
                base + body_start as u64,
                len,
                payload.len() - body_start,
            ));
        }
        let body = &payload[body_start..body_start + len];
        let offset = base + pos as u64;

        let data = if tag == tags::LIST {
            parse_list_body(body, offset, base + body_start as u64, path)?
        } else if is_wrapper(tag) {
            // tdsn, fnam, pdnm and RCom embed a nested chunk (usually
            // `Utf8`) as their whole payload.
            let child_path = format!("{path}/{tag}");
            ChunkData::List {
                kind: tag,
                children: parse_children(body, base + body_start as u64, &child_path)?,
            }
        } else {
            ChunkData::Bytes(body.to_vec())
        };
        out.push(Chunk { tag, offset, data });

        pos = body_start + len;
        if len % 2 == 1 {
            pos += 1; // odd-length pad byte
        }
    }
    Ok(out)
}

/// Leaf-tagged chunks whose payload is itself a chunk.
fn is_wrapper(tag: Tag) -> bool {
    tag == tags::TDSN || tag == tags::FNAM || tag == tags::PDNM || tag == tags::RCOM
}

fn parse_list_body(
    body: &[u8],
    chunk_offset: u64,
    body_base: u64,
    path: &str,
) -> AepResult<ChunkData> {
    if body.len() < 4 {
        return Err(AepError::truncated(
            format!("{path}/LIST"),
            body_base,
            4,
            body.len(),
        ));
    }
    let kind = Tag([body[0], body[1], body[2], body[3]]);
    if !kind.is_printable_ascii() {
        return Err(AepError::unexpected_chunk(
            path,
            chunk_offset,
            format!("list type `{kind}` is not printable ASCII"),
        ));
    }
    if kind == tags::BTDK {
        return Ok(ChunkData::Blob {
            kind,
            bytes: body[4..].to_vec(),
        });
    }
    let child_path = format!("{path}/LIST:{kind}");
    let children = parse_children(&body[4..], body_base + 4, &child_path)?;
    Ok(ChunkData::List { kind, children })
}

#[cfg(test)]
#[path = "../../tests/unit/chunk/tree.rs"]
mod tests;
