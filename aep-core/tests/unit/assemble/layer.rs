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

fn container(kind: Tag, children: Vec<Chunk>) -> Chunk {
    Chunk {
        tag: tags::LIST,
        offset: 0,
        data: ChunkData::List { kind, children },
    }
}

fn utf8(text: &str) -> Chunk {
    leaf(tags::UTF8, text.as_bytes().to_vec())
}

fn tdmn(name: &str) -> Chunk {
    let mut bytes = name.as_bytes().to_vec();
    bytes.resize(40, 0);
    leaf(tags::TDMN, bytes)
}

fn tdb4_leaf(dimensions: u16, spatial_flags: u8, no_value_flags: u8, kind_flags: u8) -> Chunk {
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
    b.extend_from_slice(&[0u8; 9]);
    b.extend_from_slice(&[0u8; 50]);
    b.push(0);
    b.extend_from_slice(&[0u8; 4]);
    leaf(tags::TDB4, b)
}

fn tdbs(children: Vec<Chunk>) -> Chunk {
    let mut all = vec![leaf(tags::TDSB, vec![0, 0, 0, 0x01])];
    all.extend(children);
    container(tags::TDBS, all)
}

struct LdtaSpec {
    layer_id: u32,
    quality: u16,
    stretch: (i16, u16),
    start_time: (u32, u32),
    in_point: (u32, u32),
    out_point: (u32, u32),
    attributes: [u8; 3],
    source_id: u32,
    label: u8,
    name: &'static str,
    blending_mode: u8,
    track_matte: u8,
    layer_type: u8,
    parent_id: u32,
    light_type: u8,
}

impl Default for LdtaSpec {
    fn default() -> Self {
        Self {
            layer_id: 1,
            quality: 2,
            stretch: (1, 1),
            start_time: (0, 1),
            in_point: (0, 1),
            out_point: (10, 1),
            attributes: [0, 0, 0x05],
            source_id: 0,
            label: 0,
            name: "",
            blending_mode: 0,
            track_matte: 0,
            layer_type: 0,
            parent_id: 0,
            light_type: 0,
        }
    }
}

fn ldta_chunk(spec: &LdtaSpec) -> Chunk {
    let mut b = Vec::new();
    b.extend_from_slice(&spec.layer_id.to_be_bytes());
    b.extend_from_slice(&spec.quality.to_be_bytes());
    b.extend_from_slice(&[0u8; 4]);
    b.extend_from_slice(&spec.stretch.0.to_be_bytes());
    for (dividend, divisor) in [spec.start_time, spec.in_point, spec.out_point] {
        b.extend_from_slice(&dividend.to_be_bytes());
        b.extend_from_slice(&divisor.to_be_bytes());
    }
    b.push(0);
    b.extend_from_slice(&spec.attributes);
    b.extend_from_slice(&spec.source_id.to_be_bytes());
    b.extend_from_slice(&[0u8; 17]);
    b.push(spec.label);
    b.extend_from_slice(&[0u8; 2]);
    let mut name = [0u8; 32];
    name[..spec.name.len()].copy_from_slice(spec.name.as_bytes());
    b.extend_from_slice(&name);
    b.extend_from_slice(&[0u8; 3]);
    b.push(spec.blending_mode);
    b.extend_from_slice(&[0u8; 3]);
    b.push(0); // preserve transparency
    b.extend_from_slice(&[0u8; 3]);
    b.push(spec.track_matte);
    b.extend_from_slice(&[0u8; 2]);
    b.extend_from_slice(&spec.stretch.1.to_be_bytes());
    b.extend_from_slice(&[0u8; 19]);
    b.push(spec.layer_type);
    b.extend_from_slice(&spec.parent_id.to_be_bytes());
    b.extend_from_slice(&[0u8; 3]);
    b.push(spec.light_type);
    leaf(tags::LDTA, b)
}

fn layer_chunk(spec: &LdtaSpec, extra: Vec<Chunk>) -> Chunk {
    let mut children = vec![ldta_chunk(spec)];
    children.extend(extra);
    container(Tag::new(b"Layr"), children)
}

#[test]
fn identity_and_switches_decode() {
    let spec = LdtaSpec {
        layer_id: 7,
        source_id: 12,
        parent_id: 3,
        label: 9,
        attributes: [0x02, 0x08, 0x45],
        ..LdtaSpec::default()
    };
    let chunk = layer_chunk(&spec, vec![utf8("Hero"), leaf(tags::CMTA, b"wip".to_vec())]);
    let layer = parse_layer(&chunk, 600.0, 24.0, "root").unwrap();

    assert_eq!(layer.layer_id, 7);
    assert_eq!(layer.name, "Hero");
    assert!(layer.is_name_set);
    assert_eq!(layer.comment.as_deref(), Some("wip"));
    assert_eq!(layer.source_id, Some(12));
    assert_eq!(layer.parent_id, Some(3));
    assert_eq!(layer.label, Label(9));
    assert_eq!(layer.quality, LayerQuality::Best);
    assert_eq!(layer.kind, LayerKind::Av);
    assert!(layer.guide_layer);
    assert!(layer.solo);
    assert!(layer.enabled);
    assert!(layer.effects_active);
    assert!(layer.shy);
    assert!(!layer.locked);
    assert!(!layer.motion_blur);
    assert_eq!(layer.light_type, None);
    assert!(layer.transform.is_none());
    assert!(layer.markers.is_empty());
}

#[test]
fn unnamed_layer_keeps_empty_name() {
    let layer = parse_layer(&layer_chunk(&LdtaSpec::default(), vec![]), 600.0, 24.0, "root")
        .unwrap();
    assert_eq!(layer.name, "");
    assert!(!layer.is_name_set);
    assert_eq!(layer.comment, None);
}

#[test]
fn zero_ids_mean_no_source_and_no_parent() {
    let layer = parse_layer(&layer_chunk(&LdtaSpec::default(), vec![]), 600.0, 24.0, "root")
        .unwrap();
    assert_eq!(layer.source_id, None);
    assert_eq!(layer.parent_id, None);
}

#[test]
fn frame_positions_derive_from_the_comp_frame_rate() {
    let spec = LdtaSpec {
        start_time: (1, 2),
        in_point: (1, 1),
        out_point: (5, 1),
        ..LdtaSpec::default()
    };
    let layer = parse_layer(&layer_chunk(&spec, vec![]), 600.0, 24.0, "root").unwrap();
    assert_eq!(layer.start_time, 0.5);
    assert_eq!(layer.in_point, 1.0);
    assert_eq!(layer.out_point, 5.0);
    assert_eq!(layer.frame_start_time, 12.0);
    assert_eq!(layer.frame_in_point, 24.0);
    assert_eq!(layer.frame_out_point, 120.0);
}

#[test]
fn auto_orient_depends_on_dimensionality() {
    let flat = LdtaSpec {
        attributes: [0, 0x01, 0x01],
        ..LdtaSpec::default()
    };
    let layer = parse_layer(&layer_chunk(&flat, vec![]), 600.0, 24.0, "root").unwrap();
    assert_eq!(layer.auto_orient, AutoOrientType::AlongPath);

    let three_d = LdtaSpec {
        attributes: [0, 0x05, 0x01],
        ..LdtaSpec::default()
    };
    let layer = parse_layer(&layer_chunk(&three_d, vec![]), 600.0, 24.0, "root").unwrap();
    assert!(layer.three_d_layer);
    assert_eq!(layer.auto_orient, AutoOrientType::CameraOrPointOfInterest);

    let per_char = LdtaSpec {
        attributes: [0, 0x20, 0x01],
        ..LdtaSpec::default()
    };
    let layer = parse_layer(&layer_chunk(&per_char, vec![]), 600.0, 24.0, "root").unwrap();
    assert!(layer.three_d_per_char);
    assert_eq!(layer.auto_orient, AutoOrientType::CharactersTowardCamera);

    let plain = parse_layer(&layer_chunk(&LdtaSpec::default(), vec![]), 600.0, 24.0, "root")
        .unwrap();
    assert_eq!(plain.auto_orient, AutoOrientType::NoAutoOrient);
}

#[test]
fn light_type_is_kept_for_light_layers_only() {
    let light = LdtaSpec {
        layer_type: 1,
        light_type: 1,
        ..LdtaSpec::default()
    };
    let layer = parse_layer(&layer_chunk(&light, vec![]), 600.0, 24.0, "root").unwrap();
    assert_eq!(layer.kind, LayerKind::Light);
    assert!(layer.light_type.is_some());
}

#[test]
fn root_group_streams_route_to_their_slots() {
    let transform = container(
        tags::TDGP,
        vec![
            tdmn("ADBE Position"),
            tdbs(vec![tdb4_leaf(2, 0x08, 0, 0x08), {
                let mut b = Vec::new();
                b.extend_from_slice(&960.0f64.to_be_bytes());
                b.extend_from_slice(&540.0f64.to_be_bytes());
                leaf(tags::CDAT, b)
            }]),
        ],
    );
    let markers = container(
        Tag::new(b"mrst"),
        vec![
            tdbs(vec![tdb4_leaf(1, 0x01, 0x01, 0)]),
            container(
                tags::MRKY,
                vec![container(
                    tags::NMRD,
                    vec![
                        {
                            let mut b = vec![0u8; 8];
                            b.extend_from_slice(&12u32.to_be_bytes());
                            b.extend_from_slice(&[0u8; 4]);
                            b.push(0);
                            leaf(tags::NMHD, b)
                        },
                        utf8("note"),
                    ],
                )],
            ),
        ],
    );
    let root = container(
        tags::TDGP,
        vec![
            tdmn("ADBE Transform Group"),
            transform,
            tdmn("ADBE Time Remapping"),
            tdbs(vec![tdb4_leaf(1, 0x01, 0, 0x08)]),
            tdmn("ADBE Marker"),
            markers,
        ],
    );
    let chunk = layer_chunk(&LdtaSpec::default(), vec![root]);
    let layer = parse_layer(&chunk, 600.0, 24.0, "root").unwrap();

    let transform = layer.transform.unwrap();
    assert_eq!(transform.name, "Transform");
    let position = transform.property("ADBE Position").unwrap();
    assert_eq!(
        position.value,
        Some(crate::model::property::PropertyValue::TwoD([960.0, 540.0]))
    );
    assert!(layer.time_remap_enabled);
    assert_eq!(layer.markers.len(), 1);
    assert_eq!(layer.markers[0].comment, "note");
    assert_eq!(layer.markers[0].frame_duration, 12.0);
    assert!(layer.effects.is_none());
    assert!(layer.text.is_none());
}

#[test]
fn missing_ldta_record_is_an_error() {
    let chunk = container(Tag::new(b"Layr"), vec![utf8("Orphan")]);
    assert!(parse_layer(&chunk, 600.0, 24.0, "root").is_err());
}
