//! Assembly of `LIST:Layr` containers into layers.

use crate::chunk::bodies::layer::LdtaBody;
use crate::chunk::tag::tags;
use crate::chunk::tree::Chunk;
use crate::foundation::error::AepResult;
use crate::model::enums::{
    AutoOrientType, BlendingMode, FrameBlendingType, Label, LayerKind, LayerQuality, LightType,
    SamplingQuality, TrackMatteType,
};
use crate::model::layer::Layer;

use super::property::{chunk_text, group_by_match_name, parse_markers, parse_property_group};

/// Match names of the layer-level streams hung off the root `tdgp`.
const TRANSFORM_GROUP: &str = "ADBE Transform Group";
const EFFECTS_GROUP: &str = "ADBE Effect Parade";
const TEXT_GROUP: &str = "ADBE Text Properties";
const MARKER_STREAM: &str = "ADBE Marker";
const TIME_REMAP_STREAM: &str = "ADBE Time Remapping";

/// Assemble one layer from its `LIST:Layr` (or `LIST:SecL`) container.
///
/// Frame positions are stored as second ratios; the frame fields are
/// derived with the owning composition's frame rate.
pub fn parse_layer(layer_chunk: &Chunk, time_scale: f64, frame_rate: f64, path: &str) -> AepResult<Layer> {
    let path = format!("{path}/{}", layer_chunk.label());

    let ldta = LdtaBody::parse(layer_chunk.require_child(tags::LDTA, &path)?, &path)?;
    let name = match layer_chunk.child(tags::UTF8) {
        Some(chunk) => chunk_text(chunk, &path)?,
        None => String::new(),
    };
    let comment = match layer_chunk.child(tags::CMTA) {
        Some(chunk) => Some(chunk_text(chunk, &path)?),
        None => None,
    };

    let kind = LayerKind::from_binary(ldta.layer_type_raw);
    let three_d = ldta.three_d_layer();
    let three_d_per_char = ldta.three_d_per_char();
    let auto_orient = if ldta.auto_orient() {
        if three_d {
            AutoOrientType::CameraOrPointOfInterest
        } else {
            AutoOrientType::AlongPath
        }
    } else if three_d_per_char {
        AutoOrientType::CharactersTowardCamera
    } else {
        AutoOrientType::NoAutoOrient
    };

    let start_time = ldta.start_time_sec();
    let in_point = ldta.in_point_sec();
    let out_point = ldta.out_point_sec();

    let mut layer = Layer {
        layer_id: ldta.layer_id,
        index: 0,
        is_name_set: !name.is_empty(),
        name,
        kind,
        source_id: (ldta.source_id != 0).then_some(ldta.source_id),
        parent_id: (ldta.parent_id != 0).then_some(ldta.parent_id),
        containing_comp_id: 0,
        label: Label::from_binary(ldta.label_raw),
        quality: LayerQuality::from_binary(ldta.quality_raw),
        sampling_quality: SamplingQuality::from_binary(ldta.sampling_quality_raw()),
        blending_mode: BlendingMode::from_binary(ldta.blending_mode_raw),
        track_matte_type: TrackMatteType::from_binary(ldta.track_matte_type_raw),
        frame_blending_type: FrameBlendingType::from_binary(
            ldta.frame_blending_type_raw(),
            ldta.frame_blending(),
        ),
        auto_orient,
        light_type: (kind == LayerKind::Light).then(|| LightType::from_binary(ldta.light_type_raw)),
        width: 0,
        height: 0,
        start_time,
        in_point,
        out_point,
        frame_start_time: start_time * frame_rate,
        frame_in_point: in_point * frame_rate,
        frame_out_point: out_point * frame_rate,
        stretch: ldta.stretch(),
        enabled: ldta.enabled(),
        solo: ldta.solo(),
        locked: ldta.locked(),
        shy: ldta.shy(),
        guide_layer: ldta.guide_layer(),
        null_layer: ldta.null_layer(),
        adjustment_layer: ldta.adjustment_layer(),
        three_d_layer: three_d,
        three_d_per_char,
        environment_layer: ldta.environment_layer(),
        audio_enabled: ldta.audio_enabled(),
        effects_active: ldta.effects_active(),
        motion_blur: ldta.motion_blur(),
        frame_blending: ldta.frame_blending(),
        collapse_transformation: ldta.collapse_transformation(),
        preserve_transparency: ldta.preserve_transparency_raw != 0,
        time_remap_enabled: false,
        markers_locked: ldta.markers_locked(),
        comment,
        transform: None,
        effects: None,
        text: None,
        markers: Vec::new(),
    };

    if let Some(root_tdgp) = layer_chunk.list(tags::TDGP) {
        for (match_name, chunks) in group_by_match_name(root_tdgp, &path)? {
            let first = chunks[0];
            match match_name.as_str() {
                TRANSFORM_GROUP => {
                    layer.transform =
                        Some(parse_property_group(first, &match_name, time_scale, &path)?);
                }
                EFFECTS_GROUP => {
                    layer.effects =
                        Some(parse_property_group(first, &match_name, time_scale, &path)?);
                }
                TEXT_GROUP => {
                    layer.text =
                        Some(parse_property_group(first, &match_name, time_scale, &path)?);
                }
                MARKER_STREAM => {
                    layer.markers = parse_markers(first, &match_name, time_scale, &path)?;
                }
                TIME_REMAP_STREAM => {
                    layer.time_remap_enabled = true;
                }
                _ => {}
            }
        }
    }

    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/layer.rs"]
mod tests;
