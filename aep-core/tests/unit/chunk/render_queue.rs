use super::*;

use crate::chunk::tag::tags;
use crate::chunk::tree::ChunkData;
use crate::foundation::error::AepError;

fn settings_record_bytes(
    comp_id: u32,
    time_span_source: u8,
    span: (f64, f64),
    frame_rate: f64,
    template_name: &[u8],
    start_time: u32,
    elapsed_seconds: u32,
) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&comp_id.to_be_bytes());
    for v in [2i16, -1, 1, 0, 1, 0, 0, 0, 0] {
        b.extend_from_slice(&v.to_be_bytes());
    }
    b.extend_from_slice(&1u16.to_be_bytes()); // resolution x
    b.extend_from_slice(&1u16.to_be_bytes()); // resolution y
    b.push(time_span_source);
    b.push(0); // field render
    b.push(0); // pulldown
    b.push(0); // skip existing
    b.push(1); // use this frame rate
    b.push(1); // log type
    b.push(0); // notify
    b.push(0); // status
    b.extend_from_slice(&span.0.to_be_bytes());
    b.extend_from_slice(&span.1.to_be_bytes());
    b.extend_from_slice(&frame_rate.to_be_bytes());
    b.extend_from_slice(&((span.0 * frame_rate) as u32).to_be_bytes());
    b.extend_from_slice(&((span.1 * frame_rate) as u32).to_be_bytes());
    let mut name = [0u8; 32];
    name[..template_name.len()].copy_from_slice(template_name);
    b.extend_from_slice(&name);
    b.extend_from_slice(&start_time.to_be_bytes());
    b.extend_from_slice(&elapsed_seconds.to_be_bytes());
    b
}

fn output_module_record_bytes(
    channels: u8,
    post_render_action: u8,
    crop_rect: (i32, i32, i32, i32),
    target_comp_id: u32,
) -> Vec<u8> {
    let mut b = Vec::new();
    b.push(1); // crop
    b.push(channels);
    b.push(1); // include project link
    b.push(0); // include source xmp
    b.push(1); // lock aspect ratio
    b.push(0); // resize
    b.push(2); // resize quality
    b.push(0); // use comp frame number
    b.push(0); // use region of interest
    b.push(post_render_action);
    b.extend_from_slice(&[0u8; 2]);
    for v in [crop_rect.0, crop_rect.1, crop_rect.2, crop_rect.3] {
        b.extend_from_slice(&v.to_be_bytes());
    }
    b.extend_from_slice(&target_comp_id.to_be_bytes());
    b
}

fn roou_bytes(
    video_codec: &[u8; 4],
    format_id: &[u8; 4],
    depth: i16,
    width: u16,
    height: u16,
    frame_rate: f32,
) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(video_codec);
    b.extend_from_slice(format_id);
    b.push(1); // video output
    b.push(3); // output audio (auto)
    b.push(3); // audio bit depth
    b.push(2); // audio channels
    b.extend_from_slice(&48000.0f32.to_be_bytes());
    b.extend_from_slice(&depth.to_be_bytes());
    b.extend_from_slice(&width.to_be_bytes());
    b.extend_from_slice(&height.to_be_bytes());
    b.extend_from_slice(&frame_rate.to_be_bytes());
    b.push(1); // premultiplied
    b.extend_from_slice(&[0u8; 3]);
    b.extend_from_slice(&1u32.to_be_bytes()); // starting number
    b
}

#[test]
fn settings_record_decodes_all_fields() {
    let bytes = settings_record_bytes(42, 2, (1.0, 4.0), 24.0, b"Best Settings", 100, 7);
    let rec = RenderSettingsRecord::parse(&bytes, 0, "ldat").unwrap();
    assert_eq!(rec.comp_id, 42);
    assert_eq!(rec.quality, 2);
    assert_eq!(rec.color_depth, -1);
    assert_eq!(rec.motion_blur, 1);
    assert_eq!(rec.effects, 1);
    assert_eq!(rec.resolution, [1, 1]);
    assert_eq!(rec.time_span_source, 2);
    assert_eq!(rec.use_this_frame_rate, 1);
    assert_eq!(rec.log_type, 1);
    assert_eq!(rec.time_span_start, 1.0);
    assert_eq!(rec.time_span_duration, 4.0);
    assert_eq!(rec.time_span_end(), 5.0);
    assert_eq!(rec.frame_rate, 24.0);
    assert_eq!(rec.time_span_start_frames, 24);
    assert_eq!(rec.time_span_duration_frames, 96);
    assert_eq!(rec.template_name, "Best Settings");
    assert_eq!(rec.start_time, 100);
    assert_eq!(rec.elapsed_seconds, 7);
}

#[test]
fn settings_record_min_size_is_exact() {
    let bytes = settings_record_bytes(1, 0, (0.0, 1.0), 24.0, b"", 0, 0);
    assert_eq!(bytes.len(), RenderSettingsRecord::MIN_SIZE);
}

#[test]
fn settings_record_shorter_than_min_size_is_truncated() {
    let bytes = settings_record_bytes(1, 0, (0.0, 1.0), 24.0, b"", 0, 0);
    let err = RenderSettingsRecord::parse(&bytes[..60], 0, "ldat").unwrap_err();
    assert!(matches!(err, AepError::Truncated { .. }));
}

#[test]
fn output_module_record_decodes() {
    let bytes = output_module_record_bytes(1, 2, (10, 20, 30, 40), 9);
    assert_eq!(bytes.len(), OutputModuleRecord::MIN_SIZE);
    let rec = OutputModuleRecord::parse(&bytes, 0, "ldat").unwrap();
    assert_eq!(rec.crop, 1);
    assert_eq!(rec.channels, 1);
    assert_eq!(rec.include_project_link, 1);
    assert_eq!(rec.lock_aspect_ratio, 1);
    assert_eq!(rec.resize_quality, 2);
    assert_eq!(rec.post_render_action, 2);
    assert_eq!(rec.crop_rect, (10, 20, 30, 40));
    assert_eq!(rec.post_render_target_comp_id, 9);
}

#[test]
fn roou_decodes_codec_and_geometry() {
    let chunk = Chunk {
        tag: tags::ROOU,
        offset: 0,
        data: ChunkData::Bytes(roou_bytes(b"avc1", b"H264", 24, 1920, 1080, 29.97)),
    };
    let body = RoouBody::parse(&chunk, "Roou").unwrap();
    assert_eq!(body.video_codec, "avc1");
    assert_eq!(body.format_id, "H264");
    assert_eq!(body.video_output, 1);
    assert_eq!(body.output_audio, 3);
    assert_eq!(body.audio_bit_depth, 3);
    assert_eq!(body.audio_channels, 2);
    assert_eq!(body.audio_sample_rate, 48000.0);
    assert_eq!(body.depth, 24);
    assert_eq!(body.width, 1920);
    assert_eq!(body.height, 1080);
    assert_eq!(body.frame_rate, 29.97);
    assert_eq!(body.color_premultiplied, 1);
    assert_eq!(body.starting_number, 1);
}

#[test]
fn roou_nul_padded_four_cc_trims() {
    let chunk = Chunk {
        tag: tags::ROOU,
        offset: 0,
        data: ChunkData::Bytes(roou_bytes(b"\0\0\0\0", b"png!", -32, 16, 16, 0.0)),
    };
    let body = RoouBody::parse(&chunk, "Roou").unwrap();
    assert_eq!(body.video_codec, "");
    assert_eq!(body.format_id, "png!");
    assert_eq!(body.frame_rate, 0.0);
}

#[test]
fn rout_reads_one_flag_per_four_bytes() {
    let chunk = Chunk {
        tag: tags::ROUT,
        offset: 0,
        data: ChunkData::Bytes(vec![1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1]),
    };
    let body = RoutBody::parse(&chunk, "Rout").unwrap();
    // the trailing partial record is dropped
    assert_eq!(body.render, vec![true, false, true]);
}
