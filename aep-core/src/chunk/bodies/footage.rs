//! Footage source records: media parameters and file options.

use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::AepResult;

/// Raw start/end frame sentinel meaning "infer from the file list".
pub const FRAME_UNSET: u32 = 0xffff_ffff;

/// `sspc`: footage (and effect) descriptor header.
#[derive(Clone, Debug, PartialEq)]
pub struct SspcBody {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Duration numerator (seconds = dividend / divisor).
    pub duration_dividend: u32,
    /// Duration denominator.
    pub duration_divisor: u32,
    /// Whole part of the frame rate.
    pub frame_rate_base: u32,
    /// Fractional part of the frame rate in 1/65536 units.
    pub frame_rate_fractional: u16,
    /// Raw alpha flags byte; see the accessors.
    pub alpha_flags: u8,
    /// Premultiplication matte color, 8-bit RGB.
    pub premul_color: [u8; 3],
    /// Raw alpha interpretation (0 = ignore, 1 = straight, 2 =
    /// premultiplied).
    pub alpha_mode_raw: u8,
    /// Raw field separation (0 = off, 1 = upper first, 2 = lower first).
    pub field_separation_type_raw: u8,
    /// Raw field order.
    pub field_order_raw: u8,
    /// Loop count.
    pub loop_count: u8,
    /// Pixel aspect numerator.
    pub pixel_ratio_width: u32,
    /// Pixel aspect denominator.
    pub pixel_ratio_height: u32,
    /// Conform frame-rate flag byte.
    pub conform_frame_rate: u8,
    /// Preserve-edges flag byte for separated fields.
    pub high_quality_field_separation: u8,
    /// First frame number of a sequence; [`FRAME_UNSET`] when inferred.
    pub start_frame: u32,
    /// Last frame number of a sequence; [`FRAME_UNSET`] when inferred.
    pub end_frame: u32,
}

impl SspcBody {
    /// Decode an `sspc` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(32)?;
        let width = cur.read_u16()?;
        cur.skip(2)?;
        let height = cur.read_u16()?;
        let duration_dividend = cur.read_u32()?;
        let duration_divisor = cur.read_u32()?;
        cur.skip(10)?;
        let frame_rate_base = cur.read_u32()?;
        let frame_rate_fractional = cur.read_u16()?;
        cur.skip(7)?;
        let alpha_flags = cur.read_u8()?;
        let pm = cur.take(3)?;
        let premul_color = [pm[0], pm[1], pm[2]];
        let alpha_mode_raw = cur.read_u8()?;
        cur.skip(9)?;
        let field_separation_type_raw = cur.read_u8()?;
        cur.skip(3)?;
        let field_order_raw = cur.read_u8()?;
        cur.skip(41)?;
        let loop_count = cur.read_u8()?;
        cur.skip(6)?;
        let pixel_ratio_width = cur.read_u32()?;
        let pixel_ratio_height = cur.read_u32()?;
        cur.skip(5)?;
        let conform_frame_rate = cur.read_u8()?;
        cur.skip(9)?;
        let high_quality_field_separation = cur.read_u8()?;
        cur.skip(12)?;
        let start_frame = cur.read_u32()?;
        let end_frame = cur.read_u32()?;
        Ok(Self {
            width,
            height,
            duration_dividend,
            duration_divisor,
            frame_rate_base,
            frame_rate_fractional,
            alpha_flags,
            premul_color,
            alpha_mode_raw,
            field_separation_type_raw,
            field_order_raw,
            loop_count,
            pixel_ratio_width,
            pixel_ratio_height,
            conform_frame_rate,
            high_quality_field_separation,
            start_frame,
            end_frame,
        })
    }

    /// Invert-alpha flag.
    pub fn invert_alpha(&self) -> bool {
        self.alpha_flags & 0x02 != 0
    }

    /// Alpha-is-premultiplied flag.
    pub fn premultiplied(&self) -> bool {
        self.alpha_flags & 0x01 != 0
    }

    /// Whether the footage carries an alpha channel (raw mode 3 means no
    /// alpha).
    pub fn has_alpha(&self) -> bool {
        self.alpha_mode_raw != 3
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        f64::from(self.duration_dividend) / f64::from(self.duration_divisor.max(1))
    }

    /// Frames per second.
    pub fn frame_rate(&self) -> f64 {
        f64::from(self.frame_rate_base) + f64::from(self.frame_rate_fractional) / 65536.0
    }

    /// Duration in frames.
    pub fn frame_duration(&self) -> f64 {
        self.duration() * self.frame_rate()
    }

    /// Pixel aspect ratio.
    pub fn pixel_aspect(&self) -> f64 {
        f64::from(self.pixel_ratio_width) / f64::from(self.pixel_ratio_height.max(1))
    }
}

/// PSD-specific metadata carried by an `opti` body whose source is a
/// Photoshop file.
#[derive(Clone, Debug, PartialEq)]
pub struct PsdInfo {
    /// Zero-based layer index; `0xffff` means the merged image.
    pub layer_index: u16,
    /// Total layer count in the source file.
    pub layer_count: u16,
    /// Full canvas width in pixels.
    pub canvas_width: u32,
    /// Full canvas height in pixels.
    pub canvas_height: u32,
    /// Bit depth per channel.
    pub bit_depth: u16,
    /// Color channel count.
    pub channels: u16,
    /// Layer bounding box `(top, left, bottom, right)`.
    pub bounds: (i32, i32, i32, i32),
    /// Group (folder) containing the layer.
    pub group_name: String,
}

/// `opti`: footage source descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum OptiBody {
    /// Solid color source.
    Solid {
        /// ARGB color as stored (alpha first).
        color: [f32; 4],
        /// Solid name.
        name: String,
    },
    /// Placeholder source.
    Placeholder {
        /// Placeholder name.
        name: String,
    },
    /// File source.
    File {
        /// Source-kind four-cc, e.g. `8BPS` for Photoshop.
        asset_type: String,
        /// PSD metadata, present when `asset_type` is `8BPS`.
        psd: Option<PsdInfo>,
    },
}

impl OptiBody {
    /// Decode an `opti` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let raw_type = cur.read_four()?;
        let end = raw_type.iter().position(|&b| b == 0).unwrap_or(4);
        let asset_type = String::from_utf8_lossy(&raw_type[..end]).into_owned();
        let asset_type_int = cur.read_u16()?;

        if asset_type == "Soli" {
            cur.skip(4)?;
            let color = [
                cur.read_f32()?,
                cur.read_f32()?,
                cur.read_f32()?,
                cur.read_f32()?,
            ];
            let name = cur.read_cp1250(256)?;
            return Ok(Self::Solid { color, name });
        }
        if asset_type_int == 2 {
            cur.skip(4)?;
            let name = cur.read_cp1250_to_nul()?;
            return Ok(Self::Placeholder { name });
        }
        let psd = if asset_type == "8BPS" {
            Self::parse_psd(&mut cur).ok()
        } else {
            None
        };
        Ok(Self::File { asset_type, psd })
    }

    fn parse_psd(cur: &mut Cursor<'_>) -> AepResult<PsdInfo> {
        cur.skip(4)?;
        let layer_index = cur.read_u16()?;
        let layer_count = cur.read_u16()?;
        let canvas_width = cur.read_u32()?;
        let canvas_height = cur.read_u32()?;
        let bit_depth = cur.read_u16()?;
        let channels = cur.read_u16()?;
        let bounds = (
            cur.read_i32()?,
            cur.read_i32()?,
            cur.read_i32()?,
            cur.read_i32()?,
        );
        let group_name = cur.read_cp1250_to_nul()?;
        Ok(PsdInfo {
            layer_index,
            layer_count,
            canvas_width,
            canvas_height,
            bit_depth,
            channels,
            bounds,
            group_name,
        })
    }

    /// RGBA color of a solid, normalised from the stored ARGB order.
    pub fn solid_rgba(&self) -> Option<[f64; 4]> {
        match self {
            Self::Solid { color, .. } => Some([
                f64::from(color[1]),
                f64::from(color[2]),
                f64::from(color[3]),
                f64::from(color[0]),
            ]),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/chunk/footage.rs"]
mod tests;
