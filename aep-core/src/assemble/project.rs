//! Top-level project assembly.

use std::collections::HashMap;

use tracing::debug;

use crate::chunk::bodies::meta::{HeadBody, NhedBody, NnhdBody};
use crate::chunk::tag::tags;
use crate::chunk::tree::Rifx;
use crate::foundation::error::AepResult;
use crate::model::enums::{
    BitsPerChannel, FootageTimecodeDisplayStartType, FramesCountType, TimeDisplayType,
};
use crate::model::item::ItemData;
use crate::model::project::Project;

use super::item::parse_item_tree;
use super::property::chunk_text;
use super::render_queue::parse_render_queue;

/// Parse a complete `.aep` file into a [`Project`].
#[tracing::instrument(skip_all, fields(len = data.len()))]
pub fn parse_project(data: &[u8]) -> AepResult<Project> {
    let rifx = Rifx::parse(data)?;
    let path = "root";

    let nnhd = NnhdBody::parse(rifx.require_child(tags::NNHD)?, path)?;
    let head = match rifx.child(tags::HEAD) {
        Some(chunk) => Some(HeadBody::parse(chunk, path)?),
        None => None,
    };
    // Newer writers store the color depth in nhed; nnhd carries it too.
    let nhed = match rifx.child(tags::NHED) {
        Some(chunk) => Some(NhedBody::parse(chunk, path)?),
        None => None,
    };
    let bits_per_channel_raw = nhed
        .map(|nhed| nhed.bits_per_channel_raw)
        .unwrap_or(nnhd.bits_per_channel_raw);

    let mut project = Project {
        ae_version: rifx.xmp.as_deref().and_then(software_agent),
        file_revision: head.map(|head| head.file_revision),
        bits_per_channel: BitsPerChannel::from_binary(bits_per_channel_raw),
        time_display_type: TimeDisplayType::from_binary(nnhd.time_display_type_raw),
        frames_count_type: FramesCountType::from_binary(nnhd.frames_count_type_raw),
        footage_timecode_display_start_type: FootageTimecodeDisplayStartType::from_binary(
            nnhd.footage_timecode_display_start_raw,
        ),
        frame_rate: f64::from(nnhd.frame_rate),
        expression_engine: expression_engine(&rifx)?,
        effect_names: effect_names(&rifx)?,
        items: Vec::new(),
        render_queue: Default::default(),
        xmp_packet: rifx.xmp.clone().unwrap_or_default(),
        warnings: Vec::new(),
    };

    let fold = rifx.require_list(tags::FOLD)?;
    parse_item_tree(fold, &mut project)?;

    link_layer_sources(&mut project);

    let mut queue_warnings = Vec::new();
    project.render_queue = parse_render_queue(&rifx, &project, &mut queue_warnings)?;
    project.warnings.append(&mut queue_warnings);

    Ok(project)
}

/// Expression engine identifier, stored in `LIST:ExEn` since CC 2019.
fn expression_engine(rifx: &Rifx) -> AepResult<Option<String>> {
    let Some(exen) = rifx.list(tags::EXEN) else {
        return Ok(None);
    };
    for child in exen.children() {
        let text = chunk_text(child, "root/LIST:ExEn")?;
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Names of effects used in the project, one `pjef` per effect.
fn effect_names(rifx: &Rifx) -> AepResult<Vec<String>> {
    let Some(pefl) = rifx.list(tags::PEFL) else {
        return Ok(Vec::new());
    };
    let mut names = Vec::new();
    for chunk in pefl.children_tagged(tags::PJEF) {
        names.push(chunk_text(chunk, "root/LIST:Pefl")?);
    }
    Ok(names)
}

/// Writing application recorded in the XMP history, for example
/// "Adobe After Effects 22.6 (Windows)".
fn software_agent(xmp: &str) -> Option<String> {
    let at = xmp.find("softwareAgent")?;
    let rest = &xmp[at..];
    let open = rest.find('>')?;
    let rest = &rest[open + 1..];
    let close = rest.find('<')?;
    let text = rest[..close].trim();
    (!text.is_empty()).then(|| text.to_owned())
}

struct SourceInfo {
    name: String,
    width: u32,
    height: u32,
    frame_rate: f64,
    duration: f64,
    is_footage: bool,
}

/// Resolve layer source references once the whole item graph exists.
///
/// Layers without an explicit name take their source item's name and
/// geometry, and their time fields are rederived against the source
/// frame rate. Footage layers get their out point clamped to the
/// source duration.
fn link_layer_sources(project: &mut Project) {
    let mut sources: HashMap<u32, SourceInfo> = HashMap::new();
    for item in &project.items {
        let info = match &item.data {
            ItemData::Composition(comp) => SourceInfo {
                name: item.name.clone(),
                width: comp.width,
                height: comp.height,
                frame_rate: comp.frame_rate,
                duration: comp.duration,
                is_footage: false,
            },
            ItemData::Footage(footage) => SourceInfo {
                name: item.name.clone(),
                width: footage.width,
                height: footage.height,
                frame_rate: footage.frame_rate,
                duration: footage.duration,
                is_footage: true,
            },
            ItemData::Folder => continue,
        };
        sources.insert(item.id, info);
    }

    let mut warnings = Vec::new();
    for item in &mut project.items {
        let ItemData::Composition(comp) = &mut item.data else {
            continue;
        };
        let comp_frame_rate = comp.frame_rate;
        for layer in &mut comp.layers {
            let Some(source_id) = layer.source_id else {
                continue;
            };
            let Some(source) = sources.get(&source_id) else {
                debug!(source_id, layer_id = layer.layer_id, "layer source not found");
                warnings.push(format!(
                    "layer {} references missing source item {source_id}",
                    layer.layer_id
                ));
                continue;
            };

            if layer.name.is_empty() {
                layer.name = source.name.clone();
                layer.width = source.width;
                layer.height = source.height;
                if source.frame_rate != 0.0 {
                    layer.in_point = layer.frame_in_point / source.frame_rate;
                    layer.out_point = layer.frame_out_point / source.frame_rate;
                    layer.start_time = layer.frame_start_time / source.frame_rate;
                }
            }

            let stretched_backwards = layer.stretch.is_some_and(|s| s <= 0.0);
            if source.is_footage && !layer.time_remap_enabled && !stretched_backwards {
                let max_out = layer.start_time + source.duration;
                if layer.out_point > max_out {
                    layer.out_point = max_out;
                    layer.frame_out_point = layer.out_point * comp_frame_rate;
                }
            }
        }
    }
    project.warnings.extend(warnings);
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/project.rs"]
mod tests;
