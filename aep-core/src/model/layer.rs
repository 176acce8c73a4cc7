//! Layer model covering AV, light, camera, text, and shape layers.

use serde::{Deserialize, Serialize};

use crate::model::enums::{
    AutoOrientType, BlendingMode, FrameBlendingType, Label, LayerKind, LayerQuality, LightType,
    SamplingQuality, TrackMatteType,
};
use crate::model::marker::Marker;
use crate::model::property::PropertyGroup;

/// A layer within a composition.
///
/// A single struct covers every layer kind; switches that only apply to
/// AV layers are `false` on cameras and lights, and `light_type` is only
/// present on light layers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Persistent layer identifier, unique across the project.
    pub layer_id: u32,
    /// One-based stacking position within the composition.
    pub index: u32,
    /// Display name. Falls back to the source item name when unset.
    pub name: String,
    /// Whether the name was set expressly rather than copied from the
    /// source item.
    pub is_name_set: bool,
    /// Kind of layer.
    pub kind: LayerKind,
    /// Source item id, absent for cameras, lights, and text layers.
    pub source_id: Option<u32>,
    /// Parent layer id for transform inheritance.
    pub parent_id: Option<u32>,
    /// Id of the composition containing this layer.
    pub containing_comp_id: u32,
    /// Label color index.
    pub label: Label,
    /// Render quality.
    pub quality: LayerQuality,
    /// Sampling method.
    pub sampling_quality: SamplingQuality,
    /// Blending mode.
    pub blending_mode: BlendingMode,
    /// Track matte mode.
    pub track_matte_type: TrackMatteType,
    /// Frame blending mode.
    pub frame_blending_type: FrameBlendingType,
    /// Auto-orientation mode.
    pub auto_orient: AutoOrientType,
    /// Light kind, present on light layers only.
    pub light_type: Option<LightType>,
    /// Layer width in pixels, copied from the source item.
    pub width: u32,
    /// Layer height in pixels, copied from the source item.
    pub height: u32,
    /// Start time in composition seconds.
    pub start_time: f64,
    /// In point in composition seconds.
    pub in_point: f64,
    /// Out point in composition seconds.
    pub out_point: f64,
    /// Start time in composition frames.
    pub frame_start_time: f64,
    /// In point in composition frames.
    pub frame_in_point: f64,
    /// Out point in composition frames.
    pub frame_out_point: f64,
    /// Time stretch as a percentage; 100 means no stretch. Absent when the
    /// stored divisor is zero.
    pub stretch: Option<f64>,
    /// Video switch state.
    pub enabled: bool,
    /// Solo switch.
    pub solo: bool,
    /// Lock toggle.
    pub locked: bool,
    /// Shy switch.
    pub shy: bool,
    /// Whether this is a guide layer.
    pub guide_layer: bool,
    /// Whether the layer was created as a null object.
    pub null_layer: bool,
    /// Whether this is an adjustment layer.
    pub adjustment_layer: bool,
    /// 3D switch.
    pub three_d_layer: bool,
    /// Per-character 3D switch on text layers.
    pub three_d_per_char: bool,
    /// Whether this is an environment layer.
    pub environment_layer: bool,
    /// Audio switch.
    pub audio_enabled: bool,
    /// Whether effects are active.
    pub effects_active: bool,
    /// Motion blur switch.
    pub motion_blur: bool,
    /// Frame blending switch.
    pub frame_blending: bool,
    /// Collapse transformation / continuous rasterization switch.
    pub collapse_transformation: bool,
    /// Preserve transparency switch.
    pub preserve_transparency: bool,
    /// Whether time remapping is enabled.
    pub time_remap_enabled: bool,
    /// Whether the layer's markers are locked.
    pub markers_locked: bool,
    /// Comment attached in the timeline.
    pub comment: Option<String>,
    /// Transform property group.
    pub transform: Option<PropertyGroup>,
    /// Effects property group, present when the layer carries effects.
    pub effects: Option<PropertyGroup>,
    /// Text property group, present on text layers.
    pub text: Option<PropertyGroup>,
    /// Layer markers in time order.
    pub markers: Vec<Marker>,
}

impl Layer {
    /// Whether the layer has no expressly set name but takes it from a
    /// named source item.
    pub fn is_name_from_source(&self) -> bool {
        self.source_id.is_some() && !self.is_name_set
    }

    /// Whether the layer's video is active at the given composition time.
    pub fn active_at_time(&self, time: f64) -> bool {
        self.enabled && self.in_point <= time && time <= self.out_point
    }
}
