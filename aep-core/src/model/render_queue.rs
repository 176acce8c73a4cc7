//! Render queue, queue items, and output modules.

use serde::{Deserialize, Serialize};

use crate::model::enums::{
    AudioBitDepth, AudioChannels, LogType, OutputAudio, OutputChannels, OutputColorMode,
    OutputFormat, PostRenderAction, RqItemStatus, TimeSpanSource,
};

/// Seconds between the project epoch (1904-01-01) and the Unix epoch.
pub const EPOCH_TO_UNIX_SECONDS: i64 = 2_082_844_800;

/// The project's render queue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderQueue {
    /// Queue items in stored order.
    pub items: Vec<RenderQueueItem>,
}

/// A single item in the render queue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderQueueItem {
    /// Id of the composition to render.
    pub comp_id: u32,
    /// Comment shown in the queue panel.
    pub comment: String,
    /// Whether the item renders when the queue starts.
    pub render: bool,
    /// Render status.
    pub status: RqItemStatus,
    /// Log detail setting.
    pub log_type: LogType,
    /// Whether the user is notified when rendering completes.
    pub queue_item_notify: bool,
    /// Name of the render settings template.
    pub template_name: String,
    /// Frames skipped between rendered frames; zero renders every frame.
    pub skip_frames: u32,
    /// Seconds spent rendering, absent if rendering never started.
    pub elapsed_seconds: Option<u32>,
    /// Render start time in seconds since the 1904 epoch, absent if
    /// rendering never started.
    pub started_at: Option<u32>,
    /// Time span start in frames.
    pub time_span_start_frames: u32,
    /// Time span duration in frames.
    pub time_span_duration_frames: u32,
    /// Render settings for this item.
    pub settings: RenderSettings,
    /// Output modules attached to this item.
    pub output_modules: Vec<OutputModule>,
}

impl RenderQueueItem {
    /// Time span end in seconds.
    pub fn time_span_end(&self) -> f64 {
        self.settings.time_span_start + self.settings.time_span_duration
    }

    /// Render start time as a Unix timestamp.
    pub fn started_at_unix(&self) -> Option<i64> {
        self.started_at
            .map(|secs| i64::from(secs) - EPOCH_TO_UNIX_SECONDS)
    }
}

/// Render settings of a queue item.
///
/// Tri-state fields keep their stored raw value, where `-1` means
/// "use current settings"; UI labels for them live in
/// [`crate::model::enums`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Quality override.
    pub quality_raw: i16,
    /// Color depth override.
    pub color_depth_raw: i16,
    /// Motion blur override.
    pub motion_blur_raw: i16,
    /// Frame blending override.
    pub frame_blending_raw: i16,
    /// Effects override.
    pub effects_raw: i16,
    /// Proxy use mode.
    pub proxy_use_raw: i16,
    /// Solo switches override.
    pub solo_switches_raw: i16,
    /// Guide layers override.
    pub guide_layers_raw: i16,
    /// Disk cache mode.
    pub disk_cache_raw: i16,
    /// Downsample factors as `[x, y]`.
    pub resolution: [u16; 2],
    /// Which range of the comp is rendered.
    pub time_span: TimeSpanSource,
    /// Field render mode (0 off, 1 upper first, 2 lower first).
    pub field_render: u8,
    /// 3:2 pulldown phase (0 off, 1-5 phase, 6-10 advanced phase).
    pub pulldown_phase: u8,
    /// Skip frames that already exist on disk.
    pub skip_existing_files: bool,
    /// Whether the custom frame rate below is used instead of the comp's.
    pub use_custom_frame_rate: bool,
    /// Custom output frame rate.
    pub custom_frame_rate: f64,
    /// The composition's own frame rate.
    pub comp_frame_rate: f64,
    /// Time span start in seconds.
    pub time_span_start: f64,
    /// Time span duration in seconds.
    pub time_span_duration: f64,
}

impl RenderSettings {
    /// The frame rate rendering actually uses.
    pub fn effective_frame_rate(&self) -> f64 {
        if self.use_custom_frame_rate {
            self.custom_frame_rate
        } else {
            self.comp_frame_rate
        }
    }
}

/// An output module of a queue item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputModule {
    /// Output module template name shown in the UI.
    pub name: String,
    /// Output path template; may contain placeholders like `[compName]`.
    pub file_template: Option<String>,
    /// Output width in pixels.
    pub width: u16,
    /// Output height in pixels.
    pub height: u16,
    /// Output frame rate.
    pub frame_rate: f64,
    /// Video codec four-cc, absent when not recorded.
    pub video_codec: Option<String>,
    /// Whether source XMP metadata is written to the output.
    pub include_source_xmp: bool,
    /// Action performed after the render completes.
    pub post_render_action: PostRenderAction,
    /// Target comp for post-render actions that need one; falls back to the
    /// rendered comp for actions that do not.
    pub post_render_target_comp_id: Option<u32>,
    /// Format and channel settings.
    pub settings: OutputModuleSettings,
}

/// Format, channel, and audio settings of an output module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputModuleSettings {
    /// Container format.
    pub format: OutputFormat,
    /// Whether video is written.
    pub video_output: bool,
    /// Pixel channels written to the output.
    pub channels: OutputChannels,
    /// Total bits per pixel; negative values mark gray float formats.
    pub depth: i16,
    /// Color premultiplication of the output.
    pub color: OutputColorMode,
    /// Audio switch.
    pub output_audio: OutputAudio,
    /// Audio bit depth.
    pub audio_bit_depth: AudioBitDepth,
    /// Audio channel layout.
    pub audio_channels: AudioChannels,
    /// Audio sample rate in Hz.
    pub audio_sample_rate: u32,
    /// Crop switch.
    pub crop: bool,
    /// Crop edges as `[top, left, bottom, right]`.
    pub crop_rect: [i32; 4],
    /// Resize switch.
    pub resize: bool,
    /// Resize quality (0 low, 1 high).
    pub resize_quality: u8,
    /// Aspect ratio lock for resizing.
    pub lock_aspect_ratio: bool,
    /// First number used for sequence file names.
    pub starting_number: u32,
    /// Use the comp frame number instead of the starting number.
    pub use_comp_frame_number: bool,
    /// Render only the region of interest.
    pub use_region_of_interest: bool,
    /// Whether a link back to the project is embedded.
    pub include_project_link: bool,
}
