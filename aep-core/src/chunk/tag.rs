//! Four-byte chunk identifiers and the tags the crate recognises.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-character chunk tag or list type.
///
/// Tags are raw bytes on the wire; recognised ones are ASCII. `Display`
/// renders printable bytes directly and escapes the rest, so tags are safe
/// to embed in error paths.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    /// Construct a tag from a 4-byte string literal.
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }

    /// Whether every byte is printable ASCII (space through `~`).
    pub fn is_printable_ascii(self) -> bool {
        self.0.iter().all(|&b| (0x20..=0x7e).contains(&b))
    }

    /// The tag as a string, with non-printable bytes escaped as `\xNN`.
    pub fn as_display_string(self) -> String {
        let mut out = String::with_capacity(4);
        for &b in &self.0 {
            if (0x20..=0x7e).contains(&b) {
                out.push(b as char);
            } else {
                out.push_str(&format!("\\x{b:02x}"));
            }
        }
        out
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_display_string())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.as_display_string())
    }
}

impl PartialEq<&[u8; 4]> for Tag {
    fn eq(&self, other: &&[u8; 4]) -> bool {
        &self.0 == *other
    }
}

/// Well-known tags used by the decoder and assemblers.
pub mod tags {
    use super::Tag;

    /// Outer container magic.
    pub const RIFX: Tag = Tag::new(b"RIFX");
    /// Format identifier following the RIFX header.
    pub const EGG: Tag = Tag::new(b"Egg!");
    /// Container chunk.
    pub const LIST: Tag = Tag::new(b"LIST");

    /// File header (AE version, revision).
    pub const HEAD: Tag = Tag::new(b"head");
    /// Project depth header.
    pub const NHED: Tag = Tag::new(b"nhed");
    /// Project display globals.
    pub const NNHD: Tag = Tag::new(b"nnhd");
    /// Item header.
    pub const IDTA: Tag = Tag::new(b"idta");
    /// Composition body.
    pub const CDTA: Tag = Tag::new(b"cdta");
    /// Layer body.
    pub const LDTA: Tag = Tag::new(b"ldta");
    /// Footage geometry body.
    pub const SSPC: Tag = Tag::new(b"sspc");
    /// Footage source kind body.
    pub const OPTI: Tag = Tag::new(b"opti");
    /// Property stream header.
    pub const TDB4: Tag = Tag::new(b"tdb4");
    /// Property switches bit-field.
    pub const TDSB: Tag = Tag::new(b"tdsb");
    /// Property user-defined name.
    pub const TDSN: Tag = Tag::new(b"tdsn");
    /// Property match name.
    pub const TDMN: Tag = Tag::new(b"tdmn");
    /// Constant property value data.
    pub const CDAT: Tag = Tag::new(b"cdat");
    /// Effect parameter definition.
    pub const PARD: Tag = Tag::new(b"pard");
    /// Effect parameter display name.
    pub const PDNM: Tag = Tag::new(b"pdnm");
    /// Keyframe list header.
    pub const LHD3: Tag = Tag::new(b"lhd3");
    /// Keyframe / record list data.
    pub const LDAT: Tag = Tag::new(b"ldat");
    /// Marker header.
    pub const NMHD: Tag = Tag::new(b"NmHd");
    /// UTF-8 string leaf.
    pub const UTF8: Tag = Tag::new(b"Utf8");
    /// Comment string.
    pub const CMTA: Tag = Tag::new(b"cmta");
    /// File-path alias JSON.
    pub const ALAS: Tag = Tag::new(b"alas");
    /// Installed-effect name entry.
    pub const PJEF: Tag = Tag::new(b"pjef");
    /// Effect display name.
    pub const FNAM: Tag = Tag::new(b"fnam");
    /// Output-module header record.
    pub const ROOU: Tag = Tag::new(b"Roou");
    /// Render-queue per-item flags.
    pub const ROUT: Tag = Tag::new(b"Rout");
    /// Render-queue item comment.
    pub const RCOM: Tag = Tag::new(b"RCom");
    /// Expression-engine identifier (child of `LIST:ExEn`).
    pub const EXAS: Tag = Tag::new(b"exas");
    /// Effect version record, skipped during grouping.
    pub const ENGV: Tag = Tag::new(b"engv");
    /// Stream housekeeping record, skipped during grouping.
    pub const ARBS: Tag = Tag::new(b"aRbs");

    /// List type: project item folder.
    pub const FOLD: Tag = Tag::new(b"Fold");
    /// List type: project item.
    pub const ITEM: Tag = Tag::new(b"Item");
    /// List type: sub-folder contents.
    pub const SFDR: Tag = Tag::new(b"Sfdr");
    /// List type: layer.
    pub const LAYR: Tag = Tag::new(b"Layr");
    /// List type: composition marker layer.
    pub const SECL: Tag = Tag::new(b"SecL");
    /// List type: footage descriptor.
    pub const PIN: Tag = Tag::new(b"Pin ");
    /// List type: property group.
    pub const TDGP: Tag = Tag::new(b"tdgp");
    /// List type: property stream.
    pub const TDBS: Tag = Tag::new(b"tdbs");
    /// List type: generic record list.
    pub const GLST: Tag = Tag::new(b"list");
    /// List type: effect parameter definitions.
    pub const PART: Tag = Tag::new(b"parT");
    /// List type: orientation-keyed stream.
    pub const OTST: Tag = Tag::new(b"otst");
    /// List type: text-document stream.
    pub const BTDS: Tag = Tag::new(b"btds");
    /// List type: opaque COS text-document payload.
    pub const BTDK: Tag = Tag::new(b"btdk");
    /// List type: marker keyframe list.
    pub const MRKY: Tag = Tag::new(b"mrky");
    /// List type: single marker record.
    pub const NMRD: Tag = Tag::new(b"Nmrd");
    /// List type: render queue.
    pub const LRDR: Tag = Tag::new(b"LRdr");
    /// List type: render-queue item list.
    pub const LITM: Tag = Tag::new(b"LItm");
    /// List type: output-module list.
    pub const LOM: Tag = Tag::new(b"LOm ");
    /// List type: output destination alias.
    pub const ALS2: Tag = Tag::new(b"Als2");
    /// List type: footage sequence file list.
    pub const STVC: Tag = Tag::new(b"StVc");
    /// List type: expression engine.
    pub const EXEN: Tag = Tag::new(b"ExEn");
    /// List type: installed-effect list.
    pub const PEFL: Tag = Tag::new(b"Pefl");
}

#[cfg(test)]
#[path = "../../tests/unit/chunk/tag.rs"]
mod tests;
