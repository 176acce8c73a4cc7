//! Assembly of the project item graph out of the root `LIST:Fold`.

use serde_json::Value;
use tracing::debug;

use crate::chunk::bodies::comp::CdtaBody;
use crate::chunk::bodies::footage::{FRAME_UNSET, OptiBody, SspcBody};
use crate::chunk::bodies::meta::IdtaBody;
use crate::chunk::tag::tags;
use crate::chunk::tree::Chunk;
use crate::foundation::error::{AepError, AepResult};
use crate::model::enums::{AlphaMode, FieldSeparationType, Label};
use crate::model::item::{
    Composition, Footage, FootageSource, Item, ItemData, PsdMetadata,
};
use crate::model::project::{Project, ROOT_FOLDER_ID};

use super::layer::parse_layer;
use super::property::chunk_text;
use super::recover;

/// Walk the root `LIST:Fold` and append every item to the project in
/// traversal order (children before their folder).
pub fn parse_item_tree(root: &Chunk, project: &mut Project) -> AepResult<()> {
    parse_item(root, project, None, "root")
}

fn parse_item(
    item_chunk: &Chunk,
    project: &mut Project,
    parent_folder_id: Option<u32>,
    path: &str,
) -> AepResult<()> {
    let path = format!("{path}/{}", item_chunk.label());
    let is_root = item_chunk.list_kind() == Some(tags::FOLD);

    let (id, mut name, label, item_type) = if is_root {
        (ROOT_FOLDER_ID, "root".to_owned(), Label::from_binary(0), 1)
    } else {
        let name = match item_chunk.child(tags::UTF8) {
            Some(chunk) => chunk_text(chunk, &path)?,
            None => String::new(),
        };
        let idta = IdtaBody::parse(item_chunk.require_child(tags::IDTA, &path)?, &path)?;
        (
            idta.item_id,
            name,
            Label::from_binary(idta.label_raw),
            idta.item_type_raw,
        )
    };
    let comment = match item_chunk.child(tags::CMTA) {
        Some(chunk) => Some(chunk_text(chunk, &path)?),
        None => None,
    };

    let data = match item_type {
        1 => {
            // Folder contents live directly under the root, or inside a
            // Sfdr container for every other folder.
            let container = if is_root {
                Some(item_chunk)
            } else {
                item_chunk.list(tags::SFDR)
            };
            if let Some(container) = container {
                for child in container.lists(tags::ITEM) {
                    parse_item(child, project, Some(id), &path)?;
                }
            }
            ItemData::Folder
        }
        4 => {
            let comp = parse_composition(item_chunk, id, &path)?;
            ItemData::Composition(Box::new(comp))
        }
        7 => {
            let (footage, source_name) = parse_footage(item_chunk, &mut project.warnings, &path)?;
            if name.is_empty() {
                name = source_name;
            }
            ItemData::Footage(Box::new(footage))
        }
        other => {
            // Unrecognised item types are skipped, not fatal.
            let err = AepError::decode(
                &path,
                item_chunk.offset,
                format!("unknown item type {other}"),
            );
            project.warnings.push(err.to_string());
            debug!(item_id = id, "skipping unrecognised item");
            return Ok(());
        }
    };

    project.items.push(Item {
        id,
        name,
        label,
        comment,
        parent_folder_id,
        data,
    });
    Ok(())
}

fn parse_composition(item_chunk: &Chunk, item_id: u32, path: &str) -> AepResult<Composition> {
    let cdta = CdtaBody::parse(item_chunk.require_child(tags::CDTA, path)?, path)?;
    let time_scale = f64::from(cdta.time_scale.max(1));
    let frame_rate = cdta.frame_rate();

    let mut layers = Vec::new();
    for (index, layer_chunk) in item_chunk.lists(tags::LAYR).enumerate() {
        let mut layer = parse_layer(layer_chunk, time_scale, frame_rate, path)?;
        layer.index = index as u32 + 1;
        layer.containing_comp_id = item_id;
        layers.push(layer);
    }

    // Composition markers ride on a synthetic layer of their own.
    let markers = match item_chunk.list(tags::SECL) {
        Some(marker_layer) => parse_layer(marker_layer, time_scale, frame_rate, path)?.markers,
        None => Vec::new(),
    };

    Ok(Composition {
        width: u32::from(cdta.width),
        height: u32::from(cdta.height),
        pixel_aspect: cdta.pixel_aspect(),
        frame_rate,
        frame_duration: cdta.frame_duration(),
        duration: cdta.duration(),
        bg_color: cdta.bg_color,
        display_start_time: cdta.display_start_time(),
        display_start_frame: cdta.display_start_frame(),
        hide_shy_layers: cdta.hide_shy_layers(),
        motion_blur: cdta.motion_blur(),
        frame_blending: cdta.frame_blending(),
        preserve_nested_frame_rate: cdta.preserve_nested_frame_rate(),
        preserve_nested_resolution: cdta.preserve_nested_resolution(),
        motion_blur_samples_per_frame: cdta.motion_blur_samples_per_frame.max(0) as u16,
        motion_blur_adaptive_sample_limit: cdta.motion_blur_adaptive_sample_limit.max(0) as u16,
        shutter_angle: cdta.shutter_angle,
        shutter_phase: cdta.shutter_phase,
        resolution_factor: cdta.resolution_factor,
        time_scale: u32::from(cdta.time_scale),
        in_point: cdta.in_point(),
        out_point: cdta.out_point(),
        frame_in_point: cdta.frame_in_point(),
        frame_out_point: cdta.frame_out_point(),
        time: cdta.time(),
        frame_time: cdta.frame_time(),
        layers,
        markers,
    })
}

fn parse_footage(
    item_chunk: &Chunk,
    warnings: &mut Vec<String>,
    path: &str,
) -> AepResult<(Footage, String)> {
    let pin = item_chunk.require_list(tags::PIN, path)?;
    let path = format!("{path}/{}", pin.label());
    let sspc = SspcBody::parse(pin.require_child(tags::SSPC, &path)?, &path)?;
    let opti = OptiBody::parse(pin.require_child(tags::OPTI, &path)?, &path)?;

    let mut footage = Footage {
        width: u32::from(sspc.width),
        height: u32::from(sspc.height),
        frame_rate: sspc.frame_rate(),
        frame_duration: sspc.frame_duration(),
        duration: sspc.duration(),
        pixel_aspect: sspc.pixel_aspect(),
        start_frame: (sspc.start_frame != FRAME_UNSET).then_some(sspc.start_frame),
        end_frame: (sspc.end_frame != FRAME_UNSET).then_some(sspc.end_frame),
        alpha_mode: AlphaMode::from_binary(sspc.alpha_mode_raw, sspc.has_alpha()),
        invert_alpha: sspc.invert_alpha(),
        premul_color: sspc.premul_color,
        field_separation: FieldSeparationType::from_binary(
            sspc.field_separation_type_raw,
            sspc.field_order_raw,
        ),
        loop_count: sspc.loop_count,
        conform_frame_rate: sspc.conform_frame_rate,
        source: FootageSource::Placeholder,
    };

    let source_name = match opti {
        OptiBody::Solid { color, name } => {
            // Stored alpha-first; the model keeps RGBA.
            footage.source = FootageSource::Solid {
                color: [color[1], color[2], color[3], color[0]],
                name: name.clone(),
            };
            name
        }
        OptiBody::Placeholder { name } => name,
        OptiBody::File { asset_type, psd } => {
            // A broken alas payload leaves the path empty but keeps the item.
            let (fullpath, target_is_folder) =
                recover(alas_target(pin, &path), warnings)?.unwrap_or_default();
            let file_names = sequence_file_names(pin, &path)?;
            if sspc.start_frame == FRAME_UNSET {
                footage.start_frame = file_names.first().and_then(|n| trailing_number(n));
            }
            if sspc.end_frame == FRAME_UNSET {
                footage.end_frame = file_names.last().and_then(|n| trailing_number(n));
            }
            let display_name = base_name(&fullpath).to_owned();
            debug!(%asset_type, path = %fullpath, "file footage");
            footage.source = FootageSource::File {
                path: fullpath,
                file_names,
                target_is_folder,
                psd: psd.map(|info| PsdMetadata {
                    layer_index: info.layer_index,
                    layer_count: info.layer_count,
                    canvas_width: info.canvas_width,
                    canvas_height: info.canvas_height,
                    bit_depth: info.bit_depth,
                    channels: info.channels,
                    bounds: [info.bounds.0, info.bounds.1, info.bounds.2, info.bounds.3],
                    group_name: info.group_name,
                }),
            };
            display_name
        }
    };
    Ok((footage, source_name))
}

/// Read the stored destination of a file source from its `alas` JSON.
fn alas_target(pin: &Chunk, path: &str) -> AepResult<(String, bool)> {
    let Some(als2) = pin.list(tags::ALS2) else {
        return Ok((String::new(), false));
    };
    let alas = als2.require_child(tags::ALAS, path)?;
    let text = chunk_text(alas, path)?;
    if text.is_empty() {
        return Ok((String::new(), false));
    }
    let value: Value = serde_json::from_str(&text)
        .map_err(|err| AepError::decode(path, alas.offset, format!("alas JSON: {err}")))?;
    let fullpath = value
        .get("fullpath")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let target_is_folder = value
        .get("target_is_folder")
        .map(|v| v.as_bool().unwrap_or(v.as_i64().unwrap_or(0) != 0))
        .unwrap_or(false);
    Ok((fullpath, target_is_folder))
}

/// File names of an image sequence, one `Utf8` child per frame.
fn sequence_file_names(pin: &Chunk, path: &str) -> AepResult<Vec<String>> {
    let Some(stvc) = pin.list(tags::STVC) else {
        return Ok(Vec::new());
    };
    let mut names = Vec::new();
    for utf8 in stvc.children_tagged(tags::UTF8) {
        names.push(chunk_text(utf8, path)?);
    }
    Ok(names)
}

/// The final run of decimal digits before the file extension.
fn trailing_number(file_name: &str) -> Option<u32> {
    let stem = file_name.rsplit_once('.').map_or(file_name, |(s, _)| s);
    let digits: String = stem
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/item.rs"]
mod tests;
