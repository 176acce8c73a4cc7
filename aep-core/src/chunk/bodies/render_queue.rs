//! Render queue records: render settings and output module layouts.

use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::AepResult;

/// One render-settings record from the `ldat` stream directly under
/// `LIST:LRdr` (one record per render-queue item, record size declared by
/// the sibling `lhd3`).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettingsRecord {
    /// Item id of the composition this queue item renders.
    pub comp_id: u32,
    /// Raw render quality; `-1` means "current settings".
    pub quality: i16,
    /// Raw color depth; `-1` means "current settings".
    pub color_depth: i16,
    /// Raw motion-blur setting.
    pub motion_blur: i16,
    /// Raw frame-blending setting.
    pub frame_blending: i16,
    /// Raw effects setting.
    pub effects: i16,
    /// Raw proxy-use setting.
    pub proxy_use: i16,
    /// Raw solo-switches setting.
    pub solo_switches: i16,
    /// Raw guide-layers setting.
    pub guide_layers: i16,
    /// Raw disk-cache setting.
    pub disk_cache: i16,
    /// Resolution divider `[x, y]`.
    pub resolution: [u16; 2],
    /// Raw time-span source (0 = length of comp, 1 = work area, 2 =
    /// custom).
    pub time_span_source: u8,
    /// Field-render flag.
    pub field_render: u8,
    /// 3:2 pulldown flag.
    pub pulldown: u8,
    /// Skip-existing-files flag.
    pub skip_existing_files: u8,
    /// Whether the explicit frame rate below is used.
    pub use_this_frame_rate: u8,
    /// Raw log type.
    pub log_type: u8,
    /// Notify-when-done flag.
    pub queue_item_notify: u8,
    /// Raw queue-item status.
    pub status: u8,
    /// Custom time-span start in seconds.
    pub time_span_start: f64,
    /// Custom time-span duration in seconds.
    pub time_span_duration: f64,
    /// Explicit output frame rate.
    pub frame_rate: f64,
    /// Custom time-span start in frames.
    pub time_span_start_frames: u32,
    /// Custom time-span duration in frames.
    pub time_span_duration_frames: u32,
    /// Render-settings template name (fixed 32-byte field).
    pub template_name: String,
    /// Render start time as seconds since 1904-01-01, 0 when never run.
    pub start_time: u32,
    /// Render elapsed seconds, 0 when never run.
    pub elapsed_seconds: u32,
}

impl RenderSettingsRecord {
    /// Minimum record size this decoder understands.
    pub const MIN_SIZE: usize = 106;

    /// Decode one record.
    pub fn parse(record: &[u8], base: u64, path: &str) -> AepResult<Self> {
        let mut cur = Cursor::new(record, base, path);
        let comp_id = cur.read_u32()?;
        let quality = cur.read_i16()?;
        let color_depth = cur.read_i16()?;
        let motion_blur = cur.read_i16()?;
        let frame_blending = cur.read_i16()?;
        let effects = cur.read_i16()?;
        let proxy_use = cur.read_i16()?;
        let solo_switches = cur.read_i16()?;
        let guide_layers = cur.read_i16()?;
        let disk_cache = cur.read_i16()?;
        let resolution = [cur.read_u16()?, cur.read_u16()?];
        let time_span_source = cur.read_u8()?;
        let field_render = cur.read_u8()?;
        let pulldown = cur.read_u8()?;
        let skip_existing_files = cur.read_u8()?;
        let use_this_frame_rate = cur.read_u8()?;
        let log_type = cur.read_u8()?;
        let queue_item_notify = cur.read_u8()?;
        let status = cur.read_u8()?;
        let time_span_start = cur.read_f64()?;
        let time_span_duration = cur.read_f64()?;
        let frame_rate = cur.read_f64()?;
        let time_span_start_frames = cur.read_u32()?;
        let time_span_duration_frames = cur.read_u32()?;
        let template_name = cur.read_cp1250(32)?;
        let start_time = cur.read_u32()?;
        let elapsed_seconds = cur.read_u32()?;
        Ok(Self {
            comp_id,
            quality,
            color_depth,
            motion_blur,
            frame_blending,
            effects,
            proxy_use,
            solo_switches,
            guide_layers,
            disk_cache,
            resolution,
            time_span_source,
            field_render,
            pulldown,
            skip_existing_files,
            use_this_frame_rate,
            log_type,
            queue_item_notify,
            status,
            time_span_start,
            time_span_duration,
            frame_rate,
            time_span_start_frames,
            time_span_duration_frames,
            template_name,
            start_time,
            elapsed_seconds,
        })
    }

    /// Custom time-span end in seconds.
    pub fn time_span_end(&self) -> f64 {
        self.time_span_start + self.time_span_duration
    }
}

/// One output-module record from the `ldat` stream inside a render-queue
/// item's `LIST:list` (128 bytes per output module).
#[derive(Clone, Debug, PartialEq)]
pub struct OutputModuleRecord {
    /// Crop switch.
    pub crop: u8,
    /// Raw output channels (0 = RGB, 1 = RGBA, 2 = Alpha).
    pub channels: u8,
    /// Include-project-link flag.
    pub include_project_link: u8,
    /// Include-source-XMP flag.
    pub include_source_xmp: u8,
    /// Lock-aspect-ratio flag.
    pub lock_aspect_ratio: u8,
    /// Resize switch.
    pub resize: u8,
    /// Raw resize quality.
    pub resize_quality: u8,
    /// Use-comp-frame-number flag.
    pub use_comp_frame_number: u8,
    /// Use-region-of-interest flag.
    pub use_region_of_interest: u8,
    /// Raw post-render action.
    pub post_render_action: u8,
    /// Crop rectangle `(top, left, bottom, right)` in pixels.
    pub crop_rect: (i32, i32, i32, i32),
    /// Item id of the post-render target comp, 0 when none.
    pub post_render_target_comp_id: u32,
}

impl OutputModuleRecord {
    /// Minimum record size this decoder understands.
    pub const MIN_SIZE: usize = 32;

    /// Decode one record.
    pub fn parse(record: &[u8], base: u64, path: &str) -> AepResult<Self> {
        let mut cur = Cursor::new(record, base, path);
        let crop = cur.read_u8()?;
        let channels = cur.read_u8()?;
        let include_project_link = cur.read_u8()?;
        let include_source_xmp = cur.read_u8()?;
        let lock_aspect_ratio = cur.read_u8()?;
        let resize = cur.read_u8()?;
        let resize_quality = cur.read_u8()?;
        let use_comp_frame_number = cur.read_u8()?;
        let use_region_of_interest = cur.read_u8()?;
        let post_render_action = cur.read_u8()?;
        cur.skip(2)?;
        let crop_rect = (
            cur.read_i32()?,
            cur.read_i32()?,
            cur.read_i32()?,
            cur.read_i32()?,
        );
        let post_render_target_comp_id = cur.read_u32()?;
        Ok(Self {
            crop,
            channels,
            include_project_link,
            include_source_xmp,
            lock_aspect_ratio,
            resize,
            resize_quality,
            use_comp_frame_number,
            use_region_of_interest,
            post_render_action,
            crop_rect,
            post_render_target_comp_id,
        })
    }
}

/// `Roou`: output-module header (codec, format, audio, geometry).
#[derive(Clone, Debug, PartialEq)]
pub struct RoouBody {
    /// Video codec four-cc, empty when unset.
    pub video_codec: String,
    /// Container format four-cc.
    pub format_id: String,
    /// Video output switch.
    pub video_output: u8,
    /// Raw output-audio setting (1 = off, 2 = on, 3 = auto).
    pub output_audio: u8,
    /// Raw audio bit depth (1 = 8-bit .. 4 = 32-bit float).
    pub audio_bit_depth: u8,
    /// Raw audio channels (1 = mono, 2 = stereo).
    pub audio_channels: u8,
    /// Audio sample rate in Hz.
    pub audio_sample_rate: f32,
    /// Output bit depth code.
    pub depth: i16,
    /// Output width in pixels.
    pub width: u16,
    /// Output height in pixels.
    pub height: u16,
    /// Output frame rate; 0 means "same as render settings".
    pub frame_rate: f32,
    /// Raw premultiplication mode (0 = straight, 1 = premultiplied).
    pub color_premultiplied: u8,
    /// Starting frame number for sequence output.
    pub starting_number: u32,
}

impl RoouBody {
    /// Decode a `Roou` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let video_codec = four_cc(cur.read_four()?);
        let format_id = four_cc(cur.read_four()?);
        let video_output = cur.read_u8()?;
        let output_audio = cur.read_u8()?;
        let audio_bit_depth = cur.read_u8()?;
        let audio_channels = cur.read_u8()?;
        let audio_sample_rate = cur.read_f32()?;
        let depth = cur.read_i16()?;
        let width = cur.read_u16()?;
        let height = cur.read_u16()?;
        let frame_rate = cur.read_f32()?;
        let color_premultiplied = cur.read_u8()?;
        cur.skip(3)?;
        let starting_number = cur.read_u32()?;
        Ok(Self {
            video_codec,
            format_id,
            video_output,
            output_audio,
            audio_bit_depth,
            audio_channels,
            audio_sample_rate,
            depth,
            width,
            height,
            frame_rate,
            color_premultiplied,
            starting_number,
        })
    }
}

/// `Rout`: per-render-queue-item flags, one 4-byte sub-record per item.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutBody {
    /// The "render" checkbox state per queue item.
    pub render: Vec<bool>,
}

impl RoutBody {
    /// Decode a `Rout` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let render = bytes.chunks_exact(4).map(|rec| rec[0] != 0).collect();
        Ok(Self { render })
    }
}

fn four_cc(raw: [u8; 4]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(4);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

#[cfg(test)]
#[path = "../../../tests/unit/chunk/render_queue.rs"]
mod tests;
