//! Layer attribute records.

use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::AepResult;

/// `ldta`: layer record.
///
/// The three `attributes` bytes are kept raw; the accessor methods apply
/// the documented bit masks.
#[derive(Clone, Debug, PartialEq)]
pub struct LdtaBody {
    /// Composition-unique layer id.
    pub layer_id: u32,
    /// Raw render quality (0 = wireframe, 1 = draft, 2 = best).
    pub quality_raw: u16,
    /// Time-stretch numerator.
    pub stretch_dividend: i16,
    /// Time-stretch denominator.
    pub stretch_divisor: u16,
    /// Start time numerator / denominator (seconds).
    pub start_time: (u32, u32),
    /// In point numerator / denominator (seconds).
    pub in_point: (u32, u32),
    /// Out point numerator / denominator (seconds).
    pub out_point: (u32, u32),
    /// The three bit-packed attribute bytes.
    pub attributes: [u8; 3],
    /// Item id of the layer source, 0 when none.
    pub source_id: u32,
    /// Raw label color index.
    pub label_raw: u8,
    /// Fixed-width layer name (empty when unset).
    pub layer_name: String,
    /// Raw blending mode.
    pub blending_mode_raw: u8,
    /// Preserve-underlying-transparency flag byte. Position unconfirmed
    /// across AE versions; exposed raw.
    pub preserve_transparency_raw: u8,
    /// Raw track-matte type.
    pub track_matte_type_raw: u8,
    /// Raw layer type (0 = footage, 1 = light, 2 = camera, 3 = text,
    /// 4 = shape).
    pub layer_type_raw: u8,
    /// Layer id of the parent layer, 0 when none.
    pub parent_id: u32,
    /// Raw light type for light layers.
    pub light_type_raw: u8,
}

impl LdtaBody {
    /// Decode an `ldta` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let layer_id = cur.read_u32()?;
        let quality_raw = cur.read_u16()?;
        cur.skip(4)?;
        let stretch_dividend = cur.read_i16()?;
        let start_time = (cur.read_u32()?, cur.read_u32()?);
        let in_point = (cur.read_u32()?, cur.read_u32()?);
        let out_point = (cur.read_u32()?, cur.read_u32()?);
        cur.skip(1)?;
        let a = cur.take(3)?;
        let attributes = [a[0], a[1], a[2]];
        let source_id = cur.read_u32()?;
        cur.skip(17)?;
        let label_raw = cur.read_u8()?;
        cur.skip(2)?;
        let layer_name = cur.read_cp1250(32)?;
        cur.skip(3)?;
        let blending_mode_raw = cur.read_u8()?;
        cur.skip(3)?;
        let preserve_transparency_raw = cur.read_u8()?;
        cur.skip(3)?;
        let track_matte_type_raw = cur.read_u8()?;
        cur.skip(2)?;
        let stretch_divisor = cur.read_u16()?;
        cur.skip(19)?;
        let layer_type_raw = cur.read_u8()?;
        let parent_id = cur.read_u32()?;
        cur.skip(3)?;
        let light_type_raw = cur.read_u8()?;
        Ok(Self {
            layer_id,
            quality_raw,
            stretch_dividend,
            stretch_divisor,
            start_time,
            in_point,
            out_point,
            attributes,
            source_id,
            label_raw,
            layer_name,
            blending_mode_raw,
            preserve_transparency_raw,
            track_matte_type_raw,
            layer_type_raw,
            parent_id,
            light_type_raw,
        })
    }

    /// Start time in seconds.
    pub fn start_time_sec(&self) -> f64 {
        ratio(self.start_time)
    }

    /// In point in seconds.
    pub fn in_point_sec(&self) -> f64 {
        ratio(self.in_point)
    }

    /// Out point in seconds.
    pub fn out_point_sec(&self) -> f64 {
        ratio(self.out_point)
    }

    /// Time stretch factor, `None` when the denominator is zero.
    pub fn stretch(&self) -> Option<f64> {
        if self.stretch_divisor == 0 {
            None
        } else {
            Some(f64::from(self.stretch_dividend) / f64::from(self.stretch_divisor))
        }
    }

    // attribute byte 0
    /// Guide layer flag.
    pub fn guide_layer(&self) -> bool {
        self.attributes[0] & 0x02 != 0
    }
    /// Raw per-layer frame blending mode bit (0 = frame mix, 1 = pixel
    /// motion).
    pub fn frame_blending_type_raw(&self) -> u8 {
        (self.attributes[0] >> 2) & 0x01
    }
    /// Environment layer flag.
    pub fn environment_layer(&self) -> bool {
        self.attributes[0] & 0x20 != 0
    }
    /// Raw sampling quality bit (0 = bilinear, 1 = bicubic).
    pub fn sampling_quality_raw(&self) -> u8 {
        (self.attributes[0] >> 6) & 0x01
    }

    // attribute byte 1
    /// Auto-orient flag.
    pub fn auto_orient(&self) -> bool {
        self.attributes[1] & 0x01 != 0
    }
    /// Adjustment layer flag.
    pub fn adjustment_layer(&self) -> bool {
        self.attributes[1] & 0x02 != 0
    }
    /// 3D layer flag.
    pub fn three_d_layer(&self) -> bool {
        self.attributes[1] & 0x04 != 0
    }
    /// Solo flag.
    pub fn solo(&self) -> bool {
        self.attributes[1] & 0x08 != 0
    }
    /// Markers-locked flag.
    pub fn markers_locked(&self) -> bool {
        self.attributes[1] & 0x10 != 0
    }
    /// Per-character-3D flag for text layers.
    pub fn three_d_per_char(&self) -> bool {
        self.attributes[1] & 0x20 != 0
    }
    /// Null layer flag.
    pub fn null_layer(&self) -> bool {
        self.attributes[1] & 0x80 != 0
    }

    // attribute byte 2
    /// Video switch.
    pub fn enabled(&self) -> bool {
        self.attributes[2] & 0x01 != 0
    }
    /// Audio switch.
    pub fn audio_enabled(&self) -> bool {
        self.attributes[2] & 0x02 != 0
    }
    /// Effects switch.
    pub fn effects_active(&self) -> bool {
        self.attributes[2] & 0x04 != 0
    }
    /// Motion-blur switch.
    pub fn motion_blur(&self) -> bool {
        self.attributes[2] & 0x08 != 0
    }
    /// Frame-blending switch.
    pub fn frame_blending(&self) -> bool {
        self.attributes[2] & 0x10 != 0
    }
    /// Locked flag.
    pub fn locked(&self) -> bool {
        self.attributes[2] & 0x20 != 0
    }
    /// Shy flag.
    pub fn shy(&self) -> bool {
        self.attributes[2] & 0x40 != 0
    }
    /// Collapse-transformation / continuous-rasterization flag.
    pub fn collapse_transformation(&self) -> bool {
        self.attributes[2] & 0x80 != 0
    }
}

fn ratio((dividend, divisor): (u32, u32)) -> f64 {
    f64::from(dividend) / f64::from(divisor.max(1))
}

#[cfg(test)]
#[path = "../../../tests/unit/chunk/layer.rs"]
mod tests;
