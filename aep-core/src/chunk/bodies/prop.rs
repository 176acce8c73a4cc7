//! Property stream records: stream headers, effect parameter
//! definitions, keyframe headers, and marker payloads.

use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::AepResult;

/// `tdb4`: property stream header.
///
/// Only a handful of fields in this 124-byte record are understood; the
/// flag bytes are kept raw behind mask accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct Tdb4Body {
    /// Component count of the property value (1-4).
    pub dimensions: u16,
    /// Flag byte holding `is_spatial` / `static`.
    pub spatial_flags: u8,
    /// Flag byte holding `no_value`.
    pub no_value_flags: u8,
    /// Flag byte holding `vector` / `integer` / `color`.
    pub kind_flags: u8,
    /// Non-zero when the property carries keyframes.
    pub animated: u8,
    /// Flag byte holding `expression_disabled`.
    pub expression_flags: u8,
}

impl Tdb4Body {
    /// Decode a `tdb4` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(2)?;
        let dimensions = cur.read_u16()?;
        cur.skip(1)?;
        let spatial_flags = cur.read_u8()?;
        cur.skip(10)?;
        cur.skip(40)?; // five unread f64 fields
        cur.skip(1)?;
        let no_value_flags = cur.read_u8()?;
        cur.skip(1)?;
        let kind_flags = cur.read_u8()?;
        cur.skip(1)?;
        cur.skip(7)?;
        let animated = cur.read_u8()?;
        cur.skip(7)?;
        cur.skip(8)?;
        cur.skip(32)?; // four unread f64 fields
        cur.skip(3)?;
        let expression_flags = cur.read_u8()?;
        cur.skip(4)?;
        Ok(Self {
            dimensions,
            spatial_flags,
            no_value_flags,
            kind_flags,
            animated,
            expression_flags,
        })
    }

    /// Spatial (position-like) property.
    pub fn is_spatial(&self) -> bool {
        self.spatial_flags & 0x08 != 0
    }

    /// Static stream flag.
    pub fn is_static(&self) -> bool {
        self.spatial_flags & 0x01 != 0
    }

    /// Value-less property (group markers, custom values).
    pub fn no_value(&self) -> bool {
        self.no_value_flags & 0x01 != 0
    }

    /// Vector-valued property.
    pub fn vector(&self) -> bool {
        self.kind_flags & 0x08 != 0
    }

    /// Integer-valued property.
    pub fn integer(&self) -> bool {
        self.kind_flags & 0x04 != 0
    }

    /// Color-valued property.
    pub fn color(&self) -> bool {
        self.kind_flags & 0x01 != 0
    }

    /// Whether the stream carries keyframes.
    pub fn animated(&self) -> bool {
        self.animated != 0
    }

    /// Whether the expression toggle is on.
    pub fn expression_enabled(&self) -> bool {
        self.expression_flags & 0x01 == 0
    }
}

/// `tdsb`: property switches.
#[derive(Clone, Debug, PartialEq)]
pub struct TdsbBody {
    /// Flag byte holding `locked_ratio`.
    pub ratio_flags: u8,
    /// Flag byte holding `dimensions_separated` / `enabled`.
    pub state_flags: u8,
}

impl TdsbBody {
    /// Decode a `tdsb` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(2)?;
        let ratio_flags = cur.read_u8()?;
        let state_flags = cur.read_u8()?;
        Ok(Self {
            ratio_flags,
            state_flags,
        })
    }

    /// Constrain-proportions flag (scale properties).
    pub fn locked_ratio(&self) -> bool {
        self.ratio_flags & 0x10 != 0
    }

    /// Separate-dimensions flag (position properties).
    pub fn dimensions_separated(&self) -> bool {
        self.state_flags & 0x02 != 0
    }

    /// Property (or effect) enabled flag.
    pub fn enabled(&self) -> bool {
        self.state_flags & 0x01 != 0
    }
}

/// `lhd3`: record-list header preceding an `ldat` stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Lhd3Body {
    /// Number of records in the sibling `ldat`.
    pub record_count: u16,
    /// Size of one record in bytes.
    pub record_size: u16,
    /// Raw record type selector.
    pub record_type_raw: u8,
}

impl Lhd3Body {
    /// Decode an `lhd3` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(10)?;
        let record_count = cur.read_u16()?;
        cur.skip(6)?;
        let record_size = cur.read_u16()?;
        cur.skip(3)?;
        let record_type_raw = cur.read_u8()?;
        Ok(Self {
            record_count,
            record_size,
            record_type_raw,
        })
    }
}

/// `cdat`: constant property value: a packed array of big-endian doubles.
#[derive(Clone, Debug, PartialEq)]
pub struct CdatBody {
    /// The stored components; callers truncate to the property dimensions.
    pub values: Vec<f64>,
}

impl CdatBody {
    /// Decode a `cdat` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let values = cur.read_f64s(bytes.len() / 8)?;
        Ok(Self { values })
    }
}

/// Per-control-type payload of a `pard` record.
#[derive(Clone, Debug, PartialEq)]
pub enum PardValue {
    /// No trailing fields for this control type.
    None,
    /// Angle: signed last value.
    Angle {
        /// Last value in degrees.
        last_value: i32,
    },
    /// Checkbox.
    Boolean {
        /// Last value.
        last_value: u32,
        /// Default state.
        default: u8,
    },
    /// Color swatch.
    Color {
        /// Last RGBA color.
        last_color: [u8; 4],
        /// Default RGBA color.
        default_color: [u8; 4],
        /// Maximum RGBA color.
        max_color: [u8; 4],
    },
    /// Dropdown.
    Enum {
        /// Last selected option (1-based).
        last_value: u32,
        /// Number of options.
        nb_options: i32,
        /// Default option (1-based).
        default: i32,
    },
    /// Integer scalar with a min/max range.
    Scalar {
        /// Last value.
        last_value: i32,
        /// Lower bound.
        min_value: i16,
        /// Upper bound.
        max_value: i16,
    },
    /// Floating-point slider.
    Slider {
        /// Last value.
        last_value: f64,
        /// Upper bound.
        max_value: f32,
    },
    /// Point control.
    TwoD {
        /// Last X in 1/128 pixel units.
        x: i32,
        /// Last Y in 1/128 pixel units.
        y: i32,
    },
    /// 3D point control.
    ThreeD {
        /// Last X in 1/512 units.
        x: f64,
        /// Last Y in 1/512 units.
        y: f64,
        /// Last Z in 1/512 units.
        z: f64,
    },
}

/// `pard`: effect parameter definition.
#[derive(Clone, Debug, PartialEq)]
pub struct PardBody {
    /// Raw property control type selector.
    pub control_type_raw: u8,
    /// Parameter display name (fixed 32-byte field).
    pub name: String,
    /// Control-type-specific trailing fields.
    pub value: PardValue,
}

impl PardBody {
    /// Decode a `pard` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        cur.skip(15)?;
        let control_type_raw = cur.read_u8()?;
        let name = cur.read_cp1250(32)?;
        cur.skip(8)?;
        let value = match control_type_raw {
            3 => PardValue::Angle {
                last_value: cur.read_i32()?,
            },
            4 => {
                let last_value = cur.read_u32()?;
                let default = cur.read_u8()?;
                PardValue::Boolean {
                    last_value,
                    default,
                }
            }
            5 => {
                let lc = cur.read_four()?;
                let dc = cur.read_four()?;
                cur.skip(64)?;
                let mc = cur.read_four()?;
                PardValue::Color {
                    last_color: lc,
                    default_color: dc,
                    max_color: mc,
                }
            }
            7 => {
                let last_value = cur.read_u32()?;
                let nb_options = cur.read_i32()?;
                let default = cur.read_i32()?;
                PardValue::Enum {
                    last_value,
                    nb_options,
                    default,
                }
            }
            2 => {
                let last_value = cur.read_i32()?;
                cur.skip(72)?;
                let min_value = cur.read_i16()?;
                cur.skip(2)?;
                let max_value = cur.read_i16()?;
                PardValue::Scalar {
                    last_value,
                    min_value,
                    max_value,
                }
            }
            10 => {
                let last_value = cur.read_f64()?;
                cur.skip(52)?;
                let max_value = cur.read_f32()?;
                PardValue::Slider {
                    last_value,
                    max_value,
                }
            }
            6 => PardValue::TwoD {
                x: cur.read_i32()?,
                y: cur.read_i32()?,
            },
            18 => PardValue::ThreeD {
                x: cur.read_f64()?,
                y: cur.read_f64()?,
                z: cur.read_f64()?,
            },
            _ => PardValue::None,
        };
        Ok(Self {
            control_type_raw,
            name,
            value,
        })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/chunk/prop.rs"]
mod tests;
