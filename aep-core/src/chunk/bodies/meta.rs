//! Project-level and item-level header records.

use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::AepResult;

/// `head`: file header.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadBody {
    /// Six raw version bytes.
    pub ae_version: [u8; 6],
    /// File revision counter.
    pub file_revision: u16,
}

impl HeadBody {
    /// Decode a `head` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let v = cur.take(6)?;
        let ae_version = [v[0], v[1], v[2], v[3], v[4], v[5]];
        cur.skip(12)?;
        let file_revision = cur.read_u16()?;
        Ok(Self {
            ae_version,
            file_revision,
        })
    }
}

/// `nhed`: project color depth header.
#[derive(Clone, Debug, PartialEq)]
pub struct NhedBody {
    /// 0 = 8 bpc, 1 = 16 bpc, 2 = 32 bpc.
    pub bits_per_channel_raw: u8,
}

impl NhedBody {
    /// Decode an `nhed` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(15)?;
        let bits_per_channel_raw = cur.read_u8()?;
        Ok(Self {
            bits_per_channel_raw,
        })
    }
}

/// `nnhd`: project display globals.
#[derive(Clone, Debug, PartialEq)]
pub struct NnhdBody {
    /// Raw time display type (0 = timecode, 1 = frames).
    pub time_display_type_raw: u8,
    /// Raw footage timecode start mode (0 = use source media, 1 = zero).
    pub footage_timecode_display_start_raw: u8,
    /// Project frame rate used for timecode display.
    pub frame_rate: u16,
    /// Raw frames-count mode (0 = start at 0, 1 = start at 1, 2 = timecode
    /// conversion).
    pub frames_count_type_raw: u8,
    /// Raw color depth code (0 = 8-bit, 1 = 16-bit, 2 = 32-bit).
    pub bits_per_channel_raw: u8,
}

impl NnhdBody {
    /// Decode an `nnhd` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(8)?;
        let time_display_type_raw = cur.read_u8()?;
        let footage_timecode_display_start_raw = cur.read_u8()?;
        cur.skip(4)?;
        let frame_rate = cur.read_u16()?;
        cur.skip(4)?;
        let frames_count_type_raw = cur.read_u8()?;
        cur.skip(3)?;
        let bits_per_channel_raw = cur.read_u8()?;
        cur.skip(15)?;
        Ok(Self {
            time_display_type_raw,
            footage_timecode_display_start_raw,
            frame_rate,
            frames_count_type_raw,
            bits_per_channel_raw,
        })
    }
}

/// `idta`: item header.
#[derive(Clone, Debug, PartialEq)]
pub struct IdtaBody {
    /// Raw item type: 1 = folder, 4 = composition, 7 = footage.
    pub item_type_raw: u16,
    /// Project-unique item id.
    pub item_id: u32,
    /// Raw label color index.
    pub label_raw: u8,
}

impl IdtaBody {
    /// Decode an `idta` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let item_type_raw = cur.read_u16()?;
        cur.skip(14)?;
        let item_id = cur.read_u32()?;
        cur.skip(38)?;
        let label_raw = cur.read_u8()?;
        Ok(Self {
            item_type_raw,
            item_id,
            label_raw,
        })
    }
}

/// `NmHd`: marker header.
#[derive(Clone, Debug, PartialEq)]
pub struct NmhdBody {
    /// Raw flags byte; see the accessor methods.
    pub flags: u8,
    /// Marker duration in frames.
    pub frame_duration: u32,
    /// Raw label color index.
    pub label_raw: u8,
}

impl NmhdBody {
    /// Decode an `NmHd` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(3)?;
        let flags = cur.read_u8()?;
        cur.skip(4)?;
        let frame_duration = cur.read_u32()?;
        cur.skip(4)?;
        let label_raw = cur.read_u8()?;
        Ok(Self {
            flags,
            frame_duration,
            label_raw,
        })
    }

    /// Whether the marker guards a protected region.
    pub fn protected_region(&self) -> bool {
        self.flags & 0x02 != 0
    }

    /// Whether the marker is a navigation (chapter) cue point.
    pub fn navigation(&self) -> bool {
        self.flags & 0x01 != 0
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/chunk/meta.rs"]
mod tests;
