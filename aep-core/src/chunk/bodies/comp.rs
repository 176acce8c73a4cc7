//! Composition settings records.

use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::AepResult;

/// Raw `out_point` sentinel meaning "runs to the end of the composition".
pub const OUT_POINT_FULL: u16 = 0xffff;

/// `cdta`: composition timing and geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct CdtaBody {
    /// Downsample factor `[x, y]` of the comp viewer.
    pub resolution_factor: [u16; 2],
    /// Ticks per frame for the raw `u16` time fields.
    pub time_scale: u16,
    /// Raw current-time indicator position.
    pub time_raw: u16,
    /// Raw work-area in point (ticks).
    pub in_point_raw: u16,
    /// Raw work-area out point (ticks); [`OUT_POINT_FULL`] means the whole
    /// duration.
    pub out_point_raw: u16,
    /// Duration numerator (seconds = dividend / divisor).
    pub duration_dividend: u32,
    /// Duration denominator.
    pub duration_divisor: u32,
    /// Background color, 8-bit RGB.
    pub bg_color: [u8; 3],
    /// Raw attribute bits; see the accessor methods.
    pub attributes: u8,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Pixel aspect numerator.
    pub pixel_ratio_width: u32,
    /// Pixel aspect denominator.
    pub pixel_ratio_height: u32,
    /// Whole part of the frame rate.
    pub frame_rate_integer: u16,
    /// Fractional part of the frame rate in 1/65536 units.
    pub frame_rate_fractional: u16,
    /// Display start time numerator.
    pub display_start_time_dividend: u32,
    /// Display start time denominator.
    pub display_start_time_divisor: u32,
    /// Motion-blur shutter angle in degrees.
    pub shutter_angle: u16,
    /// Motion-blur shutter phase in degrees.
    pub shutter_phase: i32,
    /// Adaptive sample limit for motion blur.
    pub motion_blur_adaptive_sample_limit: i32,
    /// Samples per frame for motion blur.
    pub motion_blur_samples_per_frame: i32,
}

impl CdtaBody {
    /// Decode a `cdta` payload.
    pub fn parse(chunk: &Chunk, path: &str) -> AepResult<Self> {
        let bytes = chunk.bytes(path)?;
        let mut cur = Cursor::new(bytes, chunk.offset + 8, path);
        let resolution_factor = [cur.read_u16()?, cur.read_u16()?];
        cur.skip(1)?;
        let time_scale = cur.read_u16()?;
        cur.skip(14)?;
        let time_raw = cur.read_u16()?;
        cur.skip(6)?;
        let in_point_raw = cur.read_u16()?;
        cur.skip(6)?;
        let out_point_raw = cur.read_u16()?;
        cur.skip(5)?;
        let duration_dividend = cur.read_u32()?;
        let duration_divisor = cur.read_u32()?;
        let bg = cur.take(3)?;
        let bg_color = [bg[0], bg[1], bg[2]];
        cur.skip(84)?;
        let attributes = cur.read_u8()?;
        let width = cur.read_u16()?;
        let height = cur.read_u16()?;
        let pixel_ratio_width = cur.read_u32()?;
        let pixel_ratio_height = cur.read_u32()?;
        cur.skip(4)?;
        let frame_rate_integer = cur.read_u16()?;
        let frame_rate_fractional = cur.read_u16()?;
        cur.skip(4)?;
        let display_start_time_dividend = cur.read_u32()?;
        let display_start_time_divisor = cur.read_u32()?;
        cur.skip(2)?;
        let shutter_angle = cur.read_u16()?;
        cur.skip(4)?;
        let shutter_phase = cur.read_i32()?;
        cur.skip(12)?;
        let motion_blur_adaptive_sample_limit = cur.read_i32()?;
        let motion_blur_samples_per_frame = cur.read_i32()?;
        Ok(Self {
            resolution_factor,
            time_scale,
            time_raw,
            in_point_raw,
            out_point_raw,
            duration_dividend,
            duration_divisor,
            bg_color,
            attributes,
            width,
            height,
            pixel_ratio_width,
            pixel_ratio_height,
            frame_rate_integer,
            frame_rate_fractional,
            display_start_time_dividend,
            display_start_time_divisor,
            shutter_angle,
            shutter_phase,
            motion_blur_adaptive_sample_limit,
            motion_blur_samples_per_frame,
        })
    }

    /// Shy layers hidden in the timeline.
    pub fn hide_shy_layers(&self) -> bool {
        self.attributes & 0x01 != 0
    }

    /// Motion blur master switch.
    pub fn motion_blur(&self) -> bool {
        self.attributes & 0x08 != 0
    }

    /// Frame blending master switch.
    pub fn frame_blending(&self) -> bool {
        self.attributes & 0x10 != 0
    }

    /// Preserve frame rate when nested.
    pub fn preserve_nested_frame_rate(&self) -> bool {
        self.attributes & 0x20 != 0
    }

    /// Preserve resolution when nested.
    pub fn preserve_nested_resolution(&self) -> bool {
        self.attributes & 0x80 != 0
    }

    /// Frames per second.
    pub fn frame_rate(&self) -> f64 {
        f64::from(self.frame_rate_integer) + f64::from(self.frame_rate_fractional) / 65536.0
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        f64::from(self.duration_dividend) / f64::from(self.duration_divisor.max(1))
    }

    /// Duration in frames.
    pub fn frame_duration(&self) -> f64 {
        self.duration() * self.frame_rate()
    }

    /// Display start time in seconds.
    pub fn display_start_time(&self) -> f64 {
        f64::from(self.display_start_time_dividend)
            / f64::from(self.display_start_time_divisor.max(1))
    }

    /// First displayed frame number.
    pub fn display_start_frame(&self) -> f64 {
        self.display_start_time() * self.frame_rate()
    }

    fn ticks_to_frames(&self, ticks: u16) -> f64 {
        (f64::from(ticks) / f64::from(self.time_scale.max(1))).floor()
    }

    /// Work-area in point in frames.
    pub fn frame_in_point(&self) -> f64 {
        self.display_start_frame() + self.ticks_to_frames(self.in_point_raw)
    }

    /// Work-area out point in frames; the raw sentinel resolves to the full
    /// duration.
    pub fn frame_out_point(&self) -> f64 {
        if self.out_point_raw == OUT_POINT_FULL {
            self.display_start_frame() + self.frame_duration()
        } else {
            self.display_start_frame() + self.ticks_to_frames(self.out_point_raw)
        }
    }

    /// Playhead position in frames.
    pub fn frame_time(&self) -> f64 {
        self.display_start_frame() + self.ticks_to_frames(self.time_raw)
    }

    /// Playhead position in seconds.
    pub fn time(&self) -> f64 {
        self.frame_time() / self.frame_rate()
    }

    /// Work-area in point in seconds.
    pub fn in_point(&self) -> f64 {
        self.frame_in_point() / self.frame_rate()
    }

    /// Work-area out point in seconds.
    pub fn out_point(&self) -> f64 {
        self.frame_out_point() / self.frame_rate()
    }

    /// Pixel aspect ratio.
    pub fn pixel_aspect(&self) -> f64 {
        f64::from(self.pixel_ratio_width) / f64::from(self.pixel_ratio_height.max(1))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/chunk/comp.rs"]
mod tests;
