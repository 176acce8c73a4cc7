use super::*;

use crate::chunk::tag::Tag;
use crate::chunk::tree::ChunkData;

fn leaf(tag: Tag, bytes: Vec<u8>) -> Chunk {
    Chunk {
        tag,
        offset: 0,
        data: ChunkData::Bytes(bytes),
    }
}

fn tdb4_bytes(
    dimensions: u16,
    spatial_flags: u8,
    no_value_flags: u8,
    kind_flags: u8,
    animated: u8,
    expression_flags: u8,
) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&[0u8; 2]);
    b.extend_from_slice(&dimensions.to_be_bytes());
    b.push(0);
    b.push(spatial_flags);
    b.extend_from_slice(&[0u8; 50]);
    b.push(0);
    b.push(no_value_flags);
    b.push(0);
    b.push(kind_flags);
    b.extend_from_slice(&[0u8; 8]);
    b.push(animated);
    b.extend_from_slice(&[0u8; 47]);
    b.extend_from_slice(&[0u8; 3]);
    b.push(expression_flags);
    b.extend_from_slice(&[0u8; 4]);
    b
}

#[test]
fn tdb4_flag_accessors() {
    let body = Tdb4Body::parse(
        &leaf(Tag::new(b"tdb4"), tdb4_bytes(2, 0x08, 0x00, 0x08, 1, 0x00)),
        "tdb4",
    )
    .unwrap();
    assert_eq!(body.dimensions, 2);
    assert!(body.is_spatial());
    assert!(!body.is_static());
    assert!(!body.no_value());
    assert!(body.vector());
    assert!(!body.integer());
    assert!(!body.color());
    assert!(body.animated());
    assert!(body.expression_enabled());
}

#[test]
fn tdb4_expression_flag_is_inverted() {
    let body = Tdb4Body::parse(
        &leaf(Tag::new(b"tdb4"), tdb4_bytes(1, 0x01, 0x01, 0x05, 0, 0x01)),
        "tdb4",
    )
    .unwrap();
    assert!(body.is_static());
    assert!(body.no_value());
    assert!(body.integer());
    assert!(body.color());
    assert!(!body.animated());
    assert!(!body.expression_enabled());
}

#[test]
fn tdsb_switch_bits() {
    let body = TdsbBody::parse(&leaf(Tag::new(b"tdsb"), vec![0, 0, 0x10, 0x03]), "tdsb").unwrap();
    assert!(body.locked_ratio());
    assert!(body.dimensions_separated());
    assert!(body.enabled());

    let off = TdsbBody::parse(&leaf(Tag::new(b"tdsb"), vec![0, 0, 0x00, 0x00]), "tdsb").unwrap();
    assert!(!off.locked_ratio());
    assert!(!off.dimensions_separated());
    assert!(!off.enabled());
}

#[test]
fn lhd3_record_header() {
    let mut b = Vec::new();
    b.extend_from_slice(&[0u8; 10]);
    b.extend_from_slice(&12u16.to_be_bytes());
    b.extend_from_slice(&[0u8; 6]);
    b.extend_from_slice(&48u16.to_be_bytes());
    b.extend_from_slice(&[0u8; 3]);
    b.push(4);
    let body = Lhd3Body::parse(&leaf(Tag::new(b"lhd3"), b), "lhd3").unwrap();
    assert_eq!(body.record_count, 12);
    assert_eq!(body.record_size, 48);
    assert_eq!(body.record_type_raw, 4);
}

#[test]
fn cdat_reads_packed_doubles() {
    let mut b = Vec::new();
    for v in [1.5f64, -2.0, 0.0] {
        b.extend_from_slice(&v.to_be_bytes());
    }
    // trailing bytes short of a full double are ignored
    b.extend_from_slice(&[0xff; 5]);
    let body = CdatBody::parse(&leaf(Tag::new(b"cdat"), b), "cdat").unwrap();
    assert_eq!(body.values, vec![1.5, -2.0, 0.0]);
}

fn pard_bytes(control_type: u8, name: &[u8], tail: &[u8]) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&[0u8; 15]);
    b.push(control_type);
    let mut fixed = [0u8; 32];
    fixed[..name.len()].copy_from_slice(name);
    b.extend_from_slice(&fixed);
    b.extend_from_slice(&[0u8; 8]);
    b.extend_from_slice(tail);
    b
}

#[test]
fn pard_angle() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&(-45i32).to_be_bytes());
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(3, b"Rotation", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(body.name, "Rotation");
    assert_eq!(body.value, PardValue::Angle { last_value: -45 });
}

#[test]
fn pard_boolean() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&1u32.to_be_bytes());
    tail.push(1);
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(4, b"Invert", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        body.value,
        PardValue::Boolean {
            last_value: 1,
            default: 1,
        }
    );
}

#[test]
fn pard_color() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&[255, 10, 20, 30]);
    tail.extend_from_slice(&[255, 0, 0, 0]);
    tail.extend_from_slice(&[0u8; 64]);
    tail.extend_from_slice(&[255, 255, 255, 255]);
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(5, b"Color", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        body.value,
        PardValue::Color {
            last_color: [255, 10, 20, 30],
            default_color: [255, 0, 0, 0],
            max_color: [255, 255, 255, 255],
        }
    );
}

#[test]
fn pard_enum() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&2u32.to_be_bytes());
    tail.extend_from_slice(&5i32.to_be_bytes());
    tail.extend_from_slice(&1i32.to_be_bytes());
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(7, b"Mode", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        body.value,
        PardValue::Enum {
            last_value: 2,
            nb_options: 5,
            default: 1,
        }
    );
}

#[test]
fn pard_scalar() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&50i32.to_be_bytes());
    tail.extend_from_slice(&[0u8; 72]);
    tail.extend_from_slice(&(-100i16).to_be_bytes());
    tail.extend_from_slice(&[0u8; 2]);
    tail.extend_from_slice(&100i16.to_be_bytes());
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(2, b"Amount", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        body.value,
        PardValue::Scalar {
            last_value: 50,
            min_value: -100,
            max_value: 100,
        }
    );
}

#[test]
fn pard_slider() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&12.5f64.to_be_bytes());
    tail.extend_from_slice(&[0u8; 52]);
    tail.extend_from_slice(&1000.0f32.to_be_bytes());
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(10, b"Slider", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        body.value,
        PardValue::Slider {
            last_value: 12.5,
            max_value: 1000.0,
        }
    );
}

#[test]
fn pard_point_controls() {
    let mut tail = Vec::new();
    tail.extend_from_slice(&(640 * 128i32).to_be_bytes());
    tail.extend_from_slice(&(360 * 128i32).to_be_bytes());
    let two_d = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(6, b"Center", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        two_d.value,
        PardValue::TwoD {
            x: 640 * 128,
            y: 360 * 128,
        }
    );

    let mut tail = Vec::new();
    for v in [512.0f64, 1024.0, 0.0] {
        tail.extend_from_slice(&v.to_be_bytes());
    }
    let three_d = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(18, b"Point", &tail)),
        "pard",
    )
    .unwrap();
    assert_eq!(
        three_d.value,
        PardValue::ThreeD {
            x: 512.0,
            y: 1024.0,
            z: 0.0,
        }
    );
}

#[test]
fn pard_unknown_control_type_has_no_value() {
    let body = PardBody::parse(
        &leaf(Tag::new(b"pard"), pard_bytes(42, b"Layer", &[])),
        "pard",
    )
    .unwrap();
    assert_eq!(body.control_type_raw, 42);
    assert_eq!(body.value, PardValue::None);
}
