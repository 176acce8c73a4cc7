use super::*;

use crate::chunk::tag::tags;
use crate::chunk::tree::ChunkData;

fn sspc_chunk(
    width: u16,
    height: u16,
    duration: (u32, u32),
    frame_rate: (u32, u16),
    alpha_flags: u8,
    alpha_mode: u8,
    frames: (u32, u32),
) -> Chunk {
    let mut b = Vec::new();
    b.extend_from_slice(&[0u8; 32]);
    b.extend_from_slice(&width.to_be_bytes());
    b.extend_from_slice(&[0u8; 2]);
    b.extend_from_slice(&height.to_be_bytes());
    b.extend_from_slice(&duration.0.to_be_bytes());
    b.extend_from_slice(&duration.1.to_be_bytes());
    b.extend_from_slice(&[0u8; 10]);
    b.extend_from_slice(&frame_rate.0.to_be_bytes());
    b.extend_from_slice(&frame_rate.1.to_be_bytes());
    b.extend_from_slice(&[0u8; 7]);
    b.push(alpha_flags);
    b.extend_from_slice(&[255, 0, 0]); // premul color
    b.push(alpha_mode);
    b.extend_from_slice(&[0u8; 9]);
    b.push(2); // field separation
    b.extend_from_slice(&[0u8; 3]);
    b.push(1); // field order
    b.extend_from_slice(&[0u8; 41]);
    b.push(3); // loop count
    b.extend_from_slice(&[0u8; 6]);
    b.extend_from_slice(&2u32.to_be_bytes()); // pixel ratio w
    b.extend_from_slice(&1u32.to_be_bytes()); // pixel ratio h
    b.extend_from_slice(&[0u8; 5]);
    b.push(1); // conform frame rate
    b.extend_from_slice(&[0u8; 9]);
    b.push(1); // high quality field separation
    b.extend_from_slice(&[0u8; 12]);
    b.extend_from_slice(&frames.0.to_be_bytes());
    b.extend_from_slice(&frames.1.to_be_bytes());
    Chunk {
        tag: tags::SSPC,
        offset: 0,
        data: ChunkData::Bytes(b),
    }
}

fn opti_chunk(body: Vec<u8>) -> Chunk {
    Chunk {
        tag: tags::OPTI,
        offset: 0,
        data: ChunkData::Bytes(body),
    }
}

#[test]
fn sspc_fields_decode() {
    let body = SspcBody::parse(
        &sspc_chunk(640, 480, (8, 2), (29, 0xfd70), 0x03, 2, (1, 100)),
        "sspc",
    )
    .unwrap();
    assert_eq!(body.width, 640);
    assert_eq!(body.height, 480);
    assert_eq!(body.duration(), 4.0);
    assert!((body.frame_rate() - 29.99).abs() < 0.001);
    assert!(body.premultiplied());
    assert!(body.invert_alpha());
    assert_eq!(body.premul_color, [255, 0, 0]);
    assert_eq!(body.field_separation_type_raw, 2);
    assert_eq!(body.field_order_raw, 1);
    assert_eq!(body.loop_count, 3);
    assert_eq!(body.pixel_aspect(), 2.0);
    assert_eq!(body.conform_frame_rate, 1);
    assert_eq!(body.start_frame, 1);
    assert_eq!(body.end_frame, 100);
}

#[test]
fn alpha_mode_three_means_no_alpha() {
    let opaque = SspcBody::parse(&sspc_chunk(1, 1, (1, 1), (24, 0), 0, 3, (0, 0)), "sspc").unwrap();
    assert!(!opaque.has_alpha());
    let straight =
        SspcBody::parse(&sspc_chunk(1, 1, (1, 1), (24, 0), 0, 1, (0, 0)), "sspc").unwrap();
    assert!(straight.has_alpha());
}

#[test]
fn frame_range_sentinel_survives() {
    let body = SspcBody::parse(
        &sspc_chunk(1, 1, (1, 1), (24, 0), 0, 3, (FRAME_UNSET, FRAME_UNSET)),
        "sspc",
    )
    .unwrap();
    assert_eq!(body.start_frame, FRAME_UNSET);
    assert_eq!(body.end_frame, FRAME_UNSET);
}

#[test]
fn opti_solid_decodes_argb_and_name() {
    let mut b = Vec::new();
    b.extend_from_slice(b"Soli");
    b.extend_from_slice(&0u16.to_be_bytes());
    b.extend_from_slice(&[0u8; 4]);
    for v in [1.0f32, 0.25, 0.5, 0.75] {
        b.extend_from_slice(&v.to_be_bytes());
    }
    let mut name = [0u8; 256];
    name[..9].copy_from_slice(b"Deep Blue");
    b.extend_from_slice(&name);
    let body = OptiBody::parse(&opti_chunk(b), "opti").unwrap();
    match &body {
        OptiBody::Solid { color, name } => {
            assert_eq!(*color, [1.0, 0.25, 0.5, 0.75]);
            assert_eq!(name, "Deep Blue");
        }
        other => panic!("expected solid, got {other:?}"),
    }
    // alpha moves from first to last
    assert_eq!(body.solid_rgba(), Some([0.25, 0.5, 0.75, 1.0]));
}

#[test]
fn opti_placeholder_reads_nul_terminated_name() {
    let mut b = Vec::new();
    b.extend_from_slice(b"\0\0\0\0");
    b.extend_from_slice(&2u16.to_be_bytes());
    b.extend_from_slice(&[0u8; 4]);
    b.extend_from_slice(b"Missing Clip\0");
    let body = OptiBody::parse(&opti_chunk(b), "opti").unwrap();
    assert_eq!(
        body,
        OptiBody::Placeholder {
            name: "Missing Clip".into()
        }
    );
}

#[test]
fn opti_psd_carries_layer_metadata() {
    let mut b = Vec::new();
    b.extend_from_slice(b"8BPS");
    b.extend_from_slice(&0u16.to_be_bytes());
    b.extend_from_slice(&[0u8; 4]);
    b.extend_from_slice(&2u16.to_be_bytes()); // layer index
    b.extend_from_slice(&5u16.to_be_bytes()); // layer count
    b.extend_from_slice(&800u32.to_be_bytes());
    b.extend_from_slice(&600u32.to_be_bytes());
    b.extend_from_slice(&16u16.to_be_bytes());
    b.extend_from_slice(&4u16.to_be_bytes());
    for v in [10i32, 20, 110, 220] {
        b.extend_from_slice(&v.to_be_bytes());
    }
    b.extend_from_slice(b"Group A\0");
    let body = OptiBody::parse(&opti_chunk(b), "opti").unwrap();
    match body {
        OptiBody::File { asset_type, psd } => {
            assert_eq!(asset_type, "8BPS");
            let psd = psd.unwrap();
            assert_eq!(psd.layer_index, 2);
            assert_eq!(psd.layer_count, 5);
            assert_eq!(psd.canvas_width, 800);
            assert_eq!(psd.canvas_height, 600);
            assert_eq!(psd.bit_depth, 16);
            assert_eq!(psd.channels, 4);
            assert_eq!(psd.bounds, (10, 20, 110, 220));
            assert_eq!(psd.group_name, "Group A");
        }
        other => panic!("expected file, got {other:?}"),
    }
}

#[test]
fn opti_truncated_psd_degrades_to_plain_file() {
    let mut b = Vec::new();
    b.extend_from_slice(b"8BPS");
    b.extend_from_slice(&0u16.to_be_bytes());
    // no PSD payload follows
    let body = OptiBody::parse(&opti_chunk(b), "opti").unwrap();
    assert_eq!(
        body,
        OptiBody::File {
            asset_type: "8BPS".into(),
            psd: None,
        }
    );
}

#[test]
fn opti_generic_file_keeps_asset_type() {
    let mut b = Vec::new();
    b.extend_from_slice(b"ffmp");
    b.extend_from_slice(&0u16.to_be_bytes());
    let body = OptiBody::parse(&opti_chunk(b), "opti").unwrap();
    assert_eq!(
        body,
        OptiBody::File {
            asset_type: "ffmp".into(),
            psd: None,
        }
    );
}
