//! Output-filename template resolution.
//!
//! Output modules store their destination as a template such as
//! `C:/renders/[compName].[fileExtension]`. The resolver substitutes
//! every known placeholder from the composition, the queue item's
//! render settings and the output module itself.

use crate::model::enums::{output_color_depth_template_label, OutputChannels, TimeSpanSource};
use crate::model::item::Composition;
use crate::model::project::Project;
use crate::model::render_queue::{OutputModule, RenderQueueItem, RenderSettings};

/// Template-name to file-extension mapping for the stock output-module
/// templates.
pub const TEMPLATE_EXTENSIONS: &[(&str, &str)] = &[
    ("H.264", "mp4"),
    ("H.264 - Match Render Settings - 15 Mbps", "mp4"),
    ("H.264 - Match Render Settings - 40 Mbps", "mp4"),
    ("H.264 - Match Render Settings - 50 Mbps", "mp4"),
    ("Lossless", "avi"),
    ("Lossless with Alpha", "avi"),
    ("AIFF 48kHz", "aif"),
    ("Apple ProRes 422", "mov"),
    ("Apple ProRes 422 HQ", "mov"),
    ("Apple ProRes 422 LT", "mov"),
    ("Apple ProRes 422 Proxy", "mov"),
    ("Apple ProRes 4444", "mov"),
    ("Multi-Machine Sequence", "psd"),
];

/// Friendly names for video codec four-cc codes.
pub const VIDEO_CODEC_NAMES: &[(&str, &str)] = &[
    ("CTXF", "H.264"),
    ("FXTC", "H.264"),
    ("avc1", "H.264"),
    ("ap4h", "ProRes 4444"),
    ("apch", "ProRes 422 HQ"),
    ("apcn", "ProRes 422"),
    ("apcs", "ProRes 422 LT"),
    ("apco", "ProRes 422 Proxy"),
];

/// File extension implied by a stock template name.
pub fn template_extension(template_name: &str) -> Option<&'static str> {
    TEMPLATE_EXTENSIONS
        .iter()
        .find(|(name, _)| *name == template_name)
        .map(|(_, ext)| *ext)
}

/// Friendly name for a codec four-cc, falling back to the code itself.
pub fn video_codec_name(fourcc: &str) -> &str {
    VIDEO_CODEC_NAMES
        .iter()
        .find(|(code, _)| *code == fourcc)
        .map_or(fourcc, |(_, name)| *name)
}

fn field_order_name(field_render: u8) -> &'static str {
    match field_render {
        0 => "Both",
        1 => "UFF",
        2 => "LFF",
        _ => "Off",
    }
}

fn pulldown_phase_name(phase: u8) -> &'static str {
    match phase {
        0 => "",
        1 => "WSSWW",
        2 => "SSWWW",
        3 => "SWWWS",
        4 => "WWWSS",
        5 => "WWSSW",
        _ => "Off",
    }
}

/// Simplified aspect-ratio string such as `16x9`.
pub fn calculate_aspect_ratio(width: u32, height: u32) -> String {
    let d = gcd(width.max(1), height.max(1));
    format!("{}x{}", width / d, height / d)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.max(1)
}

/// Frame number in feet+frames notation (16 frames per foot, as for
/// 35mm film), e.g. `0045+03`.
pub fn format_frame_number(frame: i64) -> String {
    const FRAMES_PER_FOOT: i64 = 16;
    let feet = frame.div_euclid(FRAMES_PER_FOOT);
    let frames = frame.rem_euclid(FRAMES_PER_FOOT);
    format!("{feet:04}+{frames:02}")
}

/// Dash-separated timecode, e.g. `0-00-12-05`. Durations round frames
/// up, absolute times truncate.
pub fn format_timecode(seconds: f64, fps: f64, is_duration: bool) -> String {
    let fps_int = (fps as i64).max(1);
    let total_frames = if is_duration {
        (seconds * fps_int as f64).ceil() as i64
    } else {
        (seconds * fps_int as f64) as i64
    };

    let frames = total_frames % fps_int;
    let total_seconds = total_frames / fps_int;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let mins = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{hours}-{mins:02}-{secs:02}-{frames:02}")
}

/// Render dimensions after applying the resolution downsample factors,
/// rounded up.
pub fn resolve_effective_dimensions(comp: &Composition, settings: &RenderSettings) -> (u32, u32) {
    let x_factor = u32::from(settings.resolution[0]).max(1);
    let y_factor = u32::from(settings.resolution[1]).max(1);
    (comp.width.div_ceil(x_factor), comp.height.div_ceil(y_factor))
}

/// Frame rate the item renders at, honouring the custom-rate override.
pub fn resolve_effective_frame_rate(comp: &Composition, settings: &RenderSettings) -> f64 {
    if settings.use_custom_frame_rate {
        settings.custom_frame_rate
    } else {
        comp.frame_rate
    }
}

/// Time span an item renders, in frames and in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTimeSpan {
    /// First rendered frame number.
    pub start_frame: i64,
    /// One past the last rendered frame number.
    pub end_frame: i64,
    /// Rendered length in frames.
    pub duration_frames: i64,
    /// Start in seconds, including the display start offset.
    pub start_time: f64,
    /// End in seconds, including the display start offset.
    pub end_time: f64,
    /// Rendered length in seconds.
    pub duration_time: f64,
}

/// Compute the rendered time span from the item's render settings.
pub fn resolve_time_span(
    comp: &Composition,
    settings: &RenderSettings,
    effective_frame_rate: f64,
) -> ResolvedTimeSpan {
    let (span_start, span_end, duration_time, first_rendered_frame) =
        if settings.time_span == TimeSpanSource::LengthOfComp {
            let first = (comp.display_start_time * effective_frame_rate) as i64;
            (0.0, comp.duration, comp.duration, first)
        } else {
            let start = settings.time_span_start;
            let duration = settings.time_span_duration;
            let first = (comp.display_start_time * effective_frame_rate) as i64
                + (start * effective_frame_rate) as i64;
            (start, start + duration, duration, first)
        };
    let duration_frames = (duration_time * effective_frame_rate).round() as i64;

    ResolvedTimeSpan {
        start_frame: first_rendered_frame,
        end_frame: first_rendered_frame + duration_frames,
        duration_frames,
        start_time: comp.display_start_time + span_start,
        end_time: comp.display_start_time + span_end,
        duration_time,
    }
}

/// Replace every `[key]` in `template`, matching the key case
/// insensitively.
fn substitute(template: &str, key: &str, value: &str) -> String {
    let needle = format!("[{key}]").to_ascii_lowercase();
    let haystack = template.to_ascii_lowercase();
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(&needle) {
        let at = pos + found;
        out.push_str(&template[pos..at]);
        out.push_str(value);
        pos = at + needle.len();
    }
    out.push_str(&template[pos..]);
    out
}

/// Resolve an output module's file template to the path it would
/// render to.
///
/// Unknown placeholders are left in place; placeholders whose value is
/// not available (for example `[compressor]` on a format with no video
/// codec) are also left untouched.
pub fn resolve_output_file(
    project: &Project,
    project_name: Option<&str>,
    item: &RenderQueueItem,
    module: &OutputModule,
) -> Option<String> {
    let template = module.file_template.as_deref()?;
    let comp_item = project.item_by_id(item.comp_id)?;
    let comp = comp_item.as_composition()?;

    let (width, height) = resolve_effective_dimensions(comp, &item.settings);
    let frame_rate = resolve_effective_frame_rate(comp, &item.settings);
    let span = resolve_time_span(comp, &item.settings, frame_rate);

    let frame_rate_str = if frame_rate == frame_rate.trunc() {
        format!("{}", frame_rate as i64)
    } else {
        format!("{frame_rate}")
    };
    let channels = match module.settings.channels {
        OutputChannels::Rgb => "RGB",
        OutputChannels::Rgba => "RGBA",
        OutputChannels::Alpha => "Alpha",
    };
    let compressor = module.video_codec.as_deref().map(video_codec_name);
    let extension = template_extension(&module.name);

    let substitutions: [(&str, Option<String>); 19] = [
        ("projectName", project_name.map(str::to_owned)),
        ("compName", Some(comp_item.name.clone())),
        ("renderSettingsName", Some(item.template_name.clone())),
        ("outputModuleName", Some(module.name.clone())),
        ("width", Some(width.to_string())),
        ("height", Some(height.to_string())),
        ("frameRate", Some(frame_rate_str)),
        ("aspectRatio", Some(calculate_aspect_ratio(width, height))),
        ("startFrame", Some(format_frame_number(span.start_frame))),
        ("endFrame", Some(format_frame_number(span.end_frame))),
        ("durationFrames", Some(format_frame_number(span.duration_frames))),
        ("startTimecode", Some(format_timecode(span.start_time, frame_rate, false))),
        ("endTimecode", Some(format_timecode(span.end_time, frame_rate, false))),
        ("durationTimecode", Some(format_timecode(span.duration_time, frame_rate, true))),
        ("channels", Some(channels.to_owned())),
        (
            "projectColorDepth",
            Some(project.bits_per_channel.template_label().to_owned()),
        ),
        (
            "outputColorDepth",
            Some(output_color_depth_template_label(module.settings.depth).to_owned()),
        ),
        ("compressor", compressor.map(str::to_owned)),
        ("fieldOrder", Some(field_order_name(item.settings.field_render).to_owned())),
    ];

    let mut result = template.to_owned();
    for (key, value) in &substitutions {
        if let Some(value) = value {
            result = substitute(&result, key, value);
        }
    }
    result = substitute(
        &result,
        "pulldownPhase",
        pulldown_phase_name(item.settings.pulldown_phase),
    );
    result = substitute(&result, "projectFolder", "");
    if let Some(extension) = extension {
        result = substitute(&result, "fileExtension", extension);
    }

    Some(result)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/output.rs"]
mod tests;
