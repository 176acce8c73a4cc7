//! Keyframe records attached to animated properties.

use serde::{Deserialize, Serialize};

use crate::model::enums::{KeyframeInterpolationType, Label};

/// A single keyframe on an animated property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// One-based position within the property's keyframe list.
    pub index: u32,
    /// Keyframe time in composition frames.
    pub frame: f64,
    /// Interpolation mode into and out of this keyframe.
    pub interpolation: KeyframeInterpolationType,
    /// Label color index.
    pub label: Label,
    /// Whether the keyframe roves across time.
    pub roving: bool,
    /// Whether the keyframe uses automatic bezier tangents.
    pub auto_bezier: bool,
    /// Whether the keyframe uses continuous bezier tangents.
    pub continuous_bezier: bool,
    /// Decoded value payload.
    pub value: KeyframeValue,
}

/// Decoded keyframe payload, shaped by the stored record type and size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum KeyframeValue {
    /// Non-spatial multi-dimensional value with per-dimension easing.
    MultiDimensional {
        /// Value per dimension.
        value: Vec<f64>,
        /// Incoming ease speed per dimension.
        in_speed: Vec<f64>,
        /// Incoming ease influence per dimension.
        in_influence: Vec<f64>,
        /// Outgoing ease speed per dimension.
        out_speed: Vec<f64>,
        /// Outgoing ease influence per dimension.
        out_influence: Vec<f64>,
    },
    /// Spatial value with motion-path tangents and scalar easing.
    Spatial {
        /// Value per dimension.
        value: Vec<f64>,
        /// Incoming path tangent per dimension.
        tangent_in: Vec<f64>,
        /// Outgoing path tangent per dimension.
        tangent_out: Vec<f64>,
        /// Incoming ease speed.
        in_speed: f64,
        /// Incoming ease influence.
        in_influence: f64,
        /// Outgoing ease speed.
        out_speed: f64,
        /// Outgoing ease influence.
        out_influence: f64,
    },
    /// RGBA color value with scalar easing.
    Color {
        /// Color components in the 0-255 range.
        value: [f64; 4],
        /// Incoming ease speed.
        in_speed: f64,
        /// Incoming ease influence.
        in_influence: f64,
        /// Outgoing ease speed.
        out_speed: f64,
        /// Outgoing ease influence.
        out_influence: f64,
    },
    /// Quaternion-style orientation value with scalar easing.
    Orientation {
        /// Rotation components in degrees.
        value: [f64; 3],
        /// Incoming ease speed.
        in_speed: f64,
        /// Incoming ease influence.
        in_influence: f64,
        /// Outgoing ease speed.
        out_speed: f64,
        /// Outgoing ease influence.
        out_influence: f64,
    },
    /// Easing-only record for properties without a numeric value.
    NoValue {
        /// Incoming ease speed.
        in_speed: f64,
        /// Incoming ease influence.
        in_influence: f64,
        /// Outgoing ease speed.
        out_speed: f64,
        /// Outgoing ease influence.
        out_influence: f64,
    },
    /// Record types without a decoded layout keep their raw payload.
    Opaque(Vec<u8>),
}

impl KeyframeValue {
    /// The decoded value components, if this payload carries any.
    pub fn components(&self) -> Option<&[f64]> {
        match self {
            Self::MultiDimensional { value, .. } | Self::Spatial { value, .. } => Some(value),
            Self::Color { value, .. } => Some(value),
            Self::Orientation { value, .. } => Some(value),
            Self::NoValue { .. } | Self::Opaque(_) => None,
        }
    }
}
