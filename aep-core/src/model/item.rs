//! Project items: folders, compositions, and footage.

use serde::{Deserialize, Serialize};

use crate::model::enums::{AlphaMode, FieldSeparationType, Label};
use crate::model::layer::Layer;
use crate::model::marker::Marker;

/// A project item addressed by its id in the item graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Persistent item identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Label color index.
    pub label: Label,
    /// Comment attached in the project panel.
    pub comment: Option<String>,
    /// Id of the containing folder; absent for the root folder itself.
    pub parent_folder_id: Option<u32>,
    /// Kind-specific payload.
    pub data: ItemData,
}

impl Item {
    /// Whether this item is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.data, ItemData::Folder)
    }

    /// The composition payload, if this item is a composition.
    pub fn as_composition(&self) -> Option<&Composition> {
        match &self.data {
            ItemData::Composition(comp) => Some(comp),
            _ => None,
        }
    }

    /// The footage payload, if this item is footage.
    pub fn as_footage(&self) -> Option<&Footage> {
        match &self.data {
            ItemData::Footage(footage) => Some(footage),
            _ => None,
        }
    }
}

/// Kind-specific item payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemData {
    /// A folder; its contents reference it through `parent_folder_id`.
    Folder,
    /// A composition.
    Composition(Box<Composition>),
    /// A footage item.
    Footage(Box<Footage>),
}

/// A composition item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel aspect ratio.
    pub pixel_aspect: f64,
    /// Frame rate in frames per second.
    pub frame_rate: f64,
    /// Duration in frames.
    pub frame_duration: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Background color as `[r, g, b]`.
    pub bg_color: [u8; 3],
    /// Timeline display start in seconds.
    pub display_start_time: f64,
    /// Timeline display start in frames.
    pub display_start_frame: f64,
    /// Hide-shy-layers toggle.
    pub hide_shy_layers: bool,
    /// Composition motion blur toggle.
    pub motion_blur: bool,
    /// Composition frame blending toggle.
    pub frame_blending: bool,
    /// Preserve frame rate when nested.
    pub preserve_nested_frame_rate: bool,
    /// Preserve resolution when nested.
    pub preserve_nested_resolution: bool,
    /// Motion blur samples per frame.
    pub motion_blur_samples_per_frame: u16,
    /// Motion blur adaptive sample limit.
    pub motion_blur_adaptive_sample_limit: u16,
    /// Shutter angle in degrees.
    pub shutter_angle: u16,
    /// Shutter phase in degrees.
    pub shutter_phase: i32,
    /// Downsample factors as `[x, y]`.
    pub resolution_factor: [u16; 2],
    /// Time units per second used by stored frame times.
    pub time_scale: u32,
    /// Work area start in seconds.
    pub in_point: f64,
    /// Work area end in seconds.
    pub out_point: f64,
    /// Work area start in frames.
    pub frame_in_point: f64,
    /// Work area end in frames.
    pub frame_out_point: f64,
    /// Current time of the playhead in seconds.
    pub time: f64,
    /// Current time of the playhead in frames.
    pub frame_time: f64,
    /// Layers in stacking order.
    pub layers: Vec<Layer>,
    /// Composition markers in time order.
    pub markers: Vec<Marker>,
}

impl Composition {
    /// Work area duration in seconds.
    pub fn work_area_duration(&self) -> f64 {
        self.out_point - self.in_point
    }

    /// Find a layer by name.
    pub fn layer_named(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Find a layer by its one-based index.
    pub fn layer_at(&self, index: u32) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.index == index)
    }
}

/// A footage item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Footage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Native frame rate in frames per second.
    pub frame_rate: f64,
    /// Duration in frames.
    pub frame_duration: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Pixel aspect ratio.
    pub pixel_aspect: f64,
    /// First frame number for sequences.
    pub start_frame: Option<u32>,
    /// Last frame number for sequences.
    pub end_frame: Option<u32>,
    /// Alpha interpretation.
    pub alpha_mode: AlphaMode,
    /// Whether the alpha channel is inverted.
    pub invert_alpha: bool,
    /// Color the alpha was premultiplied with, as `[r, g, b]`.
    pub premul_color: [u8; 3],
    /// Field separation mode.
    pub field_separation: FieldSeparationType,
    /// Times the footage repeats when its layer outlasts it.
    pub loop_count: u8,
    /// Raw conformed-frame-rate code; zero when not conformed.
    pub conform_frame_rate: u8,
    /// Where the pixels come from.
    pub source: FootageSource,
}

/// The source backing a footage item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FootageSource {
    /// A solid color generated in the project.
    Solid {
        /// Fill color as RGBA in the 0-1 range.
        color: [f32; 4],
        /// Solid name.
        name: String,
    },
    /// A placeholder with no backing media.
    Placeholder,
    /// Footage loaded from a file or image sequence.
    File {
        /// Full path as stored in the project.
        path: String,
        /// File names when the footage is an image sequence.
        file_names: Vec<String>,
        /// Whether the stored path points at a folder.
        target_is_folder: bool,
        /// Layer metadata for Photoshop sources.
        psd: Option<PsdMetadata>,
    },
}

impl Default for FootageSource {
    fn default() -> Self {
        Self::Placeholder
    }
}

impl FootageSource {
    /// Whether this is a solid source.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid { .. })
    }
}

/// Metadata recorded for a layer imported from a Photoshop document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsdMetadata {
    /// Zero-based layer index; `0xffff` means the merged document.
    pub layer_index: u16,
    /// Total number of layers in the source document.
    pub layer_count: u16,
    /// Full canvas width in pixels.
    pub canvas_width: u32,
    /// Full canvas height in pixels.
    pub canvas_height: u32,
    /// Bit depth per channel.
    pub bit_depth: u16,
    /// Number of color channels.
    pub channels: u16,
    /// Layer bounding box as `[top, left, bottom, right]`; edges can be
    /// negative when the layer extends past the canvas.
    pub bounds: [i32; 4],
    /// Group that contains the layer, empty for top-level layers.
    pub group_name: String,
}
