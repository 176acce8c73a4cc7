//! Assembly of the render queue out of the top-level `LIST:LRdr`.

use tracing::debug;

use crate::chunk::bodies::prop::Lhd3Body;
use crate::chunk::bodies::render_queue::{
    OutputModuleRecord, RenderSettingsRecord, RoouBody, RoutBody,
};
use crate::chunk::tag::tags;
use crate::chunk::tree::{Chunk, Rifx};
use crate::foundation::error::{AepError, AepResult};
use crate::model::enums::{
    AudioBitDepth, AudioChannels, LogType, OutputAudio, OutputChannels, OutputColorMode,
    OutputFormat, PostRenderAction, RqItemStatus, TimeSpanSource,
};
use crate::model::project::Project;
use crate::model::render_queue::{
    OutputModule, OutputModuleSettings, RenderQueue, RenderQueueItem, RenderSettings,
};

use super::property::chunk_text;
use super::recover;

/// Assemble the render queue, resolving comp references against the
/// already-built item graph. Malformed records are dropped and reported
/// through `warnings`.
pub fn parse_render_queue(
    rifx: &Rifx,
    project: &Project,
    warnings: &mut Vec<String>,
) -> AepResult<RenderQueue> {
    let Some(lrdr) = rifx.list(tags::LRDR) else {
        return Ok(RenderQueue::default());
    };
    let path = format!("root/{}", lrdr.label());

    let settings_records =
        recover(parse_settings_records(lrdr, &path), warnings)?.unwrap_or_default();
    if settings_records.is_empty() {
        return Ok(RenderQueue::default());
    }

    let rout = RoutBody::parse(lrdr.require_child(tags::ROUT, &path)?, &path)?;
    let litm = lrdr.require_list(tags::LITM, &path)?;

    // LItm children alternate [RCom] + LIST:list + LIST:LOm per item.
    let mut items = Vec::new();
    let mut item_index = 0usize;
    let mut comment = String::new();
    let mut om_list: Option<&Chunk> = None;
    for chunk in litm.children() {
        if chunk.tag == tags::RCOM {
            comment = chunk_text(chunk.require_child(tags::UTF8, &path)?, &path)?;
        } else if chunk.list_kind() == Some(tags::GLST) {
            om_list = Some(chunk);
        } else if chunk.list_kind() == Some(tags::LOM) {
            let Some(om_settings_list) = om_list else {
                continue;
            };
            let Some(record) = settings_records.get(item_index) else {
                break;
            };
            let item = parse_render_queue_item(
                record,
                rout.render.get(item_index).copied().unwrap_or(false),
                std::mem::take(&mut comment),
                om_settings_list,
                chunk,
                project,
                warnings,
                &path,
            )?;
            items.push(item);
            item_index += 1;
            om_list = None;
        }
    }

    Ok(RenderQueue { items })
}

/// Decode the per-item settings array under `LRdr`'s own `LIST:list`.
fn parse_settings_records(lrdr: &Chunk, path: &str) -> AepResult<Vec<RenderSettingsRecord>> {
    let Some(list) = lrdr.list(tags::GLST) else {
        return Ok(Vec::new());
    };
    let lhd3 = Lhd3Body::parse(list.require_child(tags::LHD3, path)?, path)?;
    if lhd3.record_count == 0 {
        return Ok(Vec::new());
    }
    let ldat = list.require_child(tags::LDAT, path)?;
    let bytes = ldat.bytes(path)?;
    let size = lhd3.record_size as usize;
    if size < RenderSettingsRecord::MIN_SIZE {
        return Err(AepError::decode(
            path,
            ldat.offset,
            format!("render settings record size {size} is too small"),
        ));
    }
    let mut records = Vec::with_capacity(lhd3.record_count as usize);
    for index in 0..lhd3.record_count as usize {
        let start = index * size;
        let end = start + size;
        if bytes.len() < end {
            return Err(AepError::truncated(path, ldat.offset + 8, end, bytes.len()));
        }
        records.push(RenderSettingsRecord::parse(
            &bytes[start..end],
            ldat.offset + 8 + start as u64,
            path,
        )?);
    }
    Ok(records)
}

/// Decode the per-output-module records under an item's `LIST:list`.
fn parse_output_module_records(
    list: &Chunk,
    path: &str,
) -> AepResult<Vec<OutputModuleRecord>> {
    let lhd3 = Lhd3Body::parse(list.require_child(tags::LHD3, path)?, path)?;
    if lhd3.record_count == 0 {
        return Ok(Vec::new());
    }
    let ldat = list.require_child(tags::LDAT, path)?;
    let bytes = ldat.bytes(path)?;
    let size = lhd3.record_size as usize;
    if size < OutputModuleRecord::MIN_SIZE {
        return Err(AepError::decode(
            path,
            ldat.offset,
            format!("output module record size {size} is too small"),
        ));
    }
    let mut records = Vec::with_capacity(lhd3.record_count as usize);
    for index in 0..lhd3.record_count as usize {
        let start = index * size;
        let end = start + size;
        if bytes.len() < end {
            return Err(AepError::truncated(path, ldat.offset + 8, end, bytes.len()));
        }
        records.push(OutputModuleRecord::parse(
            &bytes[start..end],
            ldat.offset + 8 + start as u64,
            path,
        )?);
    }
    Ok(records)
}

#[allow(clippy::too_many_arguments)]
fn parse_render_queue_item(
    record: &RenderSettingsRecord,
    render_enabled: bool,
    comment: String,
    om_settings_list: &Chunk,
    lom: &Chunk,
    project: &Project,
    warnings: &mut Vec<String>,
    path: &str,
) -> AepResult<RenderQueueItem> {
    let comp = project
        .item_by_id(record.comp_id)
        .and_then(|item| item.as_composition());
    if comp.is_none() {
        debug!(comp_id = record.comp_id, "queue item points at a missing comp");
    }

    let settings = RenderSettings {
        quality_raw: record.quality,
        color_depth_raw: record.color_depth,
        motion_blur_raw: record.motion_blur,
        frame_blending_raw: record.frame_blending,
        effects_raw: record.effects,
        proxy_use_raw: record.proxy_use,
        solo_switches_raw: record.solo_switches,
        guide_layers_raw: record.guide_layers,
        disk_cache_raw: record.disk_cache,
        resolution: record.resolution,
        time_span: TimeSpanSource::from_binary(i16::from(record.time_span_source as i8)),
        field_render: record.field_render,
        pulldown_phase: record.pulldown,
        skip_existing_files: record.skip_existing_files != 0,
        use_custom_frame_rate: record.use_this_frame_rate != 0,
        custom_frame_rate: record.frame_rate,
        comp_frame_rate: comp.map_or(0.0, |c| c.frame_rate),
        time_span_start: record.time_span_start,
        time_span_duration: record.time_span_duration,
    };

    let mut item = RenderQueueItem {
        comp_id: record.comp_id,
        comment,
        render: render_enabled,
        status: RqItemStatus::from_binary(record.status),
        log_type: LogType::from_binary(record.log_type),
        queue_item_notify: record.queue_item_notify != 0,
        template_name: record.template_name.trim_end_matches('\0').to_owned(),
        skip_frames: 0,
        elapsed_seconds: (record.elapsed_seconds != 0).then_some(record.elapsed_seconds),
        started_at: (record.start_time != 0).then_some(record.start_time),
        time_span_start_frames: record.time_span_start_frames,
        time_span_duration_frames: record.time_span_duration_frames,
        settings,
        output_modules: Vec::new(),
    };

    let om_records =
        recover(parse_output_module_records(om_settings_list, path), warnings)?.unwrap_or_default();

    // Each Roou opens a new output module; trailing chunks belong to it.
    let mut groups: Vec<Vec<&Chunk>> = Vec::new();
    for chunk in lom.children() {
        if chunk.tag == tags::ROOU {
            groups.push(vec![chunk]);
        } else if let Some(group) = groups.last_mut() {
            group.push(chunk);
        }
    }

    let mut output_modules = Vec::new();
    for (om_index, group) in groups.iter().enumerate() {
        let om_record = om_records.get(om_index);
        output_modules.push(parse_output_module(
            group,
            om_record,
            record.comp_id,
            warnings,
            path,
        )?);
    }

    // Downsampled outputs skip frames: a 24 fps comp rendered at 6 fps
    // renders every 4th frame.
    if let Some(first) = output_modules.first() {
        if first.frame_rate > 0.0 && item.settings.comp_frame_rate > 0.0 {
            let ratio = (item.settings.comp_frame_rate / first.frame_rate).round() as i64;
            item.skip_frames = ratio.saturating_sub(1).max(0) as u32;
        }
    }

    item.output_modules = output_modules;
    Ok(item)
}

fn parse_output_module(
    chunks: &[&Chunk],
    record: Option<&OutputModuleRecord>,
    item_comp_id: u32,
    warnings: &mut Vec<String>,
    path: &str,
) -> AepResult<OutputModule> {
    let roou_chunk = chunks
        .iter()
        .find(|c| c.tag == tags::ROOU)
        .ok_or_else(|| AepError::chunk_not_found("Roou", path))?;
    let roou = RoouBody::parse(roou_chunk, path)?;

    let post_render_action = record
        .map(|r| PostRenderAction::from_binary(r.post_render_action))
        .unwrap_or_default();
    let raw_target = record
        .map(|r| r.post_render_target_comp_id)
        .filter(|&id| id != 0);
    // Import-only actions target the rendered comp itself.
    let post_render_target_comp_id = match (post_render_action, raw_target) {
        (PostRenderAction::None | PostRenderAction::Import, _) | (_, None) => Some(item_comp_id),
        (_, Some(id)) => Some(id),
    };

    let settings = OutputModuleSettings {
        format: OutputFormat::from_format_id(&roou.format_id),
        video_output: roou.video_output != 0,
        channels: record.map_or_else(OutputChannels::default, |r| {
            OutputChannels::from_binary(r.channels)
        }),
        depth: roou.depth,
        color: OutputColorMode::from_binary(roou.color_premultiplied),
        output_audio: OutputAudio::from_binary(roou.output_audio),
        audio_bit_depth: AudioBitDepth::from_binary(roou.audio_bit_depth),
        audio_channels: AudioChannels::from_binary(roou.audio_channels),
        audio_sample_rate: roou.audio_sample_rate.max(0.0) as u32,
        crop: record.is_some_and(|r| r.crop != 0),
        crop_rect: record.map_or([0; 4], |r| {
            [r.crop_rect.0, r.crop_rect.1, r.crop_rect.2, r.crop_rect.3]
        }),
        resize: record.is_some_and(|r| r.resize != 0),
        resize_quality: record.map_or(0, |r| r.resize_quality),
        lock_aspect_ratio: record.is_some_and(|r| r.lock_aspect_ratio != 0),
        starting_number: roou.starting_number,
        use_comp_frame_number: record.is_some_and(|r| r.use_comp_frame_number != 0),
        use_region_of_interest: record.is_some_and(|r| r.use_region_of_interest != 0),
        include_project_link: record.is_some_and(|r| r.include_project_link != 0),
    };

    // Utf8[0] carries template settings JSON, [1] the template display
    // name, [2] the file name template.
    let mut texts = Vec::new();
    for utf8 in chunks.iter().filter(|c| c.tag == tags::UTF8) {
        texts.push(chunk_text(utf8, path)?);
    }
    let template_name = texts.get(1).cloned().unwrap_or_default();
    let file_name_template = texts.get(2).cloned();

    // A broken alas payload drops the destination, not the module.
    let (folder_path, target_is_folder) =
        recover(output_destination(chunks, path), warnings)?.unwrap_or_default();
    let file_template = build_file_template(
        folder_path.as_deref(),
        file_name_template.as_deref(),
        target_is_folder,
    );

    Ok(OutputModule {
        name: template_name,
        file_template,
        width: roou.width,
        height: roou.height,
        frame_rate: f64::from(roou.frame_rate),
        video_codec: {
            let codec = roou.video_codec.trim_end_matches('\0');
            (!codec.is_empty()).then(|| codec.to_owned())
        },
        include_source_xmp: record.is_some_and(|r| r.include_source_xmp != 0),
        post_render_action,
        post_render_target_comp_id,
        settings,
    })
}

/// Destination folder of an output module from its `Als2`/`alas` JSON.
fn output_destination(chunks: &[&Chunk], path: &str) -> AepResult<(Option<String>, bool)> {
    let Some(als2) = chunks.iter().find(|c| c.list_kind() == Some(tags::ALS2)) else {
        return Ok((None, false));
    };
    let alas = als2.require_child(tags::ALAS, path)?;
    let text = chunk_text(alas, path)?;
    if text.is_empty() {
        return Ok((None, false));
    }
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|err| AepError::decode(path, alas.offset, format!("alas JSON: {err}")))?;
    let fullpath = value
        .get("fullpath")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    let target_is_folder = value
        .get("target_is_folder")
        .map(|v| v.as_bool().unwrap_or(v.as_i64().unwrap_or(0) != 0))
        .unwrap_or(false);
    Ok((fullpath, target_is_folder))
}

/// Join the destination folder with the file-name template, using the
/// separator style already present in the stored path.
fn build_file_template(
    folder_path: Option<&str>,
    file_name_template: Option<&str>,
    is_folder: bool,
) -> Option<String> {
    let folder_path = folder_path?;
    if folder_path.is_empty() {
        return None;
    }
    let Some(file_name_template) = file_name_template else {
        return Some(folder_path.to_owned());
    };
    if is_folder {
        let sep = if folder_path.contains('\\') { '\\' } else { '/' };
        let cleaned = folder_path.trim_end_matches(sep);
        Some(format!("{cleaned}{sep}{file_name_template}"))
    } else {
        Some(folder_path.to_owned())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/render_queue.rs"]
mod tests;
