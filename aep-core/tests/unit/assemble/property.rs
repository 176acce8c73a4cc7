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

/// A `tdsn`/`fnam`/`pdnm` wrapper around an embedded `Utf8` chunk.
fn wrapper(tag: Tag, text: &str) -> Chunk {
    Chunk {
        tag,
        offset: 0,
        data: ChunkData::List {
            kind: tag,
            children: vec![utf8(text)],
        },
    }
}

fn tdmn(name: &str) -> Chunk {
    let mut bytes = name.as_bytes().to_vec();
    bytes.resize(40, 0);
    leaf(tags::TDMN, bytes)
}

fn tdsb_leaf(ratio_flags: u8, state_flags: u8) -> Chunk {
    leaf(tags::TDSB, vec![0, 0, ratio_flags, state_flags])
}

fn tdb4_leaf(
    dimensions: u16,
    spatial_flags: u8,
    no_value_flags: u8,
    kind_flags: u8,
    animated: u8,
) -> Chunk {
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
    b.push(0); // expression enabled
    b.extend_from_slice(&[0u8; 4]);
    leaf(tags::TDB4, b)
}

fn cdat_leaf(values: &[f64]) -> Chunk {
    let mut b = Vec::new();
    for v in values {
        b.extend_from_slice(&v.to_be_bytes());
    }
    leaf(tags::CDAT, b)
}

fn f64s(values: &[f64]) -> Vec<u8> {
    let mut b = Vec::new();
    for v in values {
        b.extend_from_slice(&v.to_be_bytes());
    }
    b
}

fn kf_header(time_raw: u16, interpolation: u8, label: u8, attributes: u8) -> Vec<u8> {
    let mut b = vec![0u8];
    b.extend_from_slice(&time_raw.to_be_bytes());
    b.extend_from_slice(&[0, 0]);
    b.push(interpolation);
    b.push(label);
    b.push(attributes);
    b
}

fn lhd3_leaf(record_count: u16, record_size: u16, record_type: u8) -> Chunk {
    let mut b = Vec::new();
    b.extend_from_slice(&[0u8; 10]);
    b.extend_from_slice(&record_count.to_be_bytes());
    b.extend_from_slice(&[0u8; 6]);
    b.extend_from_slice(&record_size.to_be_bytes());
    b.extend_from_slice(&[0u8; 3]);
    b.push(record_type);
    leaf(tags::LHD3, b)
}

fn keyframe_list(record_count: u16, record_size: u16, record_type: u8, records: Vec<u8>) -> Chunk {
    container(
        tags::GLST,
        vec![
            lhd3_leaf(record_count, record_size, record_type),
            leaf(tags::LDAT, records),
        ],
    )
}

#[test]
fn display_name_table_lookup() {
    assert_eq!(display_name("ADBE Position"), "Position");
    assert_eq!(display_name("ADBE Transform Group"), "Transform");
    assert_eq!(display_name("ADBE Custom Thing"), "ADBE Custom Thing");
}

#[test]
fn chunk_text_strips_trailing_nuls() {
    let chunk = leaf(tags::UTF8, b"hello\0\0\0".to_vec());
    assert_eq!(chunk_text(&chunk, "root").unwrap(), "hello");
}

#[test]
fn grouping_follows_match_names() {
    let root = container(
        tags::TDGP,
        vec![
            // payload before the first tdmn is dropped
            leaf(tags::CDAT, vec![]),
            tdmn("ADBE Position"),
            leaf(tags::TDB4, vec![1]),
            leaf(tags::ENGV, vec![2]), // housekeeping, dropped
            leaf(tags::CDAT, vec![3]),
            tdmn("ADBE Group End"),
            leaf(tags::CDAT, vec![4]), // after a sentinel, dropped
            tdmn("ADBE Scale"),
            leaf(tags::TDB4, vec![5]),
            tdmn("ADBE Position"),
            leaf(tags::TDSB, vec![6]),
        ],
    );
    let groups = group_by_match_name(&root, "root").unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "ADBE Position");
    assert_eq!(groups[0].1.len(), 3);
    assert_eq!(groups[1].0, "ADBE Scale");
    assert_eq!(groups[1].1.len(), 1);
}

#[test]
fn static_scalar_property_decodes() {
    let tdbs = container(
        tags::TDBS,
        vec![
            tdsb_leaf(0x10, 0x03),
            tdb4_leaf(1, 0x01, 0x00, 0x08, 0),
            cdat_leaf(&[50.0, 7.0]),
            utf8("transform.scale[0]"),
        ],
    );
    let prop = parse_property(&tdbs, "ADBE Opacity", 600.0, "root", None).unwrap();
    assert_eq!(prop.name, "Opacity");
    assert_eq!(prop.control_type, PropertyControlType::Scalar);
    assert_eq!(prop.value_type, PropertyValueType::OneD);
    // the stored array is truncated to the declared dimensions
    assert_eq!(prop.value, Some(PropertyValue::OneD(50.0)));
    assert!(prop.enabled);
    assert!(prop.locked_ratio);
    assert!(prop.dimensions_separated);
    assert!(!prop.animated);
    assert!(prop.expression_enabled);
    assert_eq!(prop.expression.as_deref(), Some("transform.scale[0]"));
    // no keyframes, but the enabled expression makes it time varying
    assert!(!prop.is_animated());
    assert!(prop.is_time_varying());
    assert!(prop.keyframes.is_empty());
}

#[test]
fn custom_stream_name_overrides_display_name() {
    let named = container(
        tags::TDBS,
        vec![
            tdsb_leaf(0, 0x01),
            wrapper(tags::TDSN, "My Slider"),
            tdb4_leaf(1, 0x01, 0, 0x08, 0),
        ],
    );
    let prop = parse_property(&named, "ADBE Opacity", 600.0, "root", None).unwrap();
    assert_eq!(prop.name, "My Slider");

    let unnamed = container(
        tags::TDBS,
        vec![
            tdsb_leaf(0, 0x01),
            wrapper(tags::TDSN, "-_0_/-"),
            tdb4_leaf(1, 0x01, 0, 0x08, 0),
        ],
    );
    let prop = parse_property(&unnamed, "ADBE Opacity", 600.0, "root", None).unwrap();
    assert_eq!(prop.name, "Opacity");
}

#[test]
fn color_property_keeps_four_components() {
    let tdbs = container(
        tags::TDBS,
        vec![
            tdsb_leaf(0, 0x01),
            tdb4_leaf(4, 0x01, 0, 0x01, 0),
            cdat_leaf(&[255.0, 128.0, 64.0, 32.0]),
        ],
    );
    let prop = parse_property(&tdbs, "ADBE Fill Color", 600.0, "root", None).unwrap();
    assert_eq!(prop.control_type, PropertyControlType::Color);
    assert_eq!(prop.value_type, PropertyValueType::Color);
    assert_eq!(
        prop.value,
        Some(PropertyValue::Color([255.0, 128.0, 64.0, 32.0]))
    );
}

#[test]
fn valueless_stream_has_no_control_type() {
    let tdbs = container(
        tags::TDBS,
        vec![tdsb_leaf(0, 0x01), tdb4_leaf(1, 0x01, 0x01, 0, 0)],
    );
    let prop = parse_property(&tdbs, "ADBE Marker", 600.0, "root", None).unwrap();
    assert_eq!(prop.value_type, PropertyValueType::NoValue);
    assert_eq!(prop.control_type, PropertyControlType::Unknown);
    assert_eq!(prop.value, None);
}

#[test]
fn multi_dimensional_keyframes_decode() {
    let mut records = Vec::new();
    let mut first = kf_header(600, 2, 3, 0x20 | 0x10);
    first.extend_from_slice(&f64s(&[10.0, 0.1, 0.2, 0.3, 0.4]));
    records.extend_from_slice(&first);
    let mut second = kf_header(1200, 3, 0, 0x08);
    second.extend_from_slice(&f64s(&[20.0, 0.0, 0.0, 0.0, 0.0]));
    records.extend_from_slice(&second);

    let tdbs = container(
        tags::TDBS,
        vec![
            tdsb_leaf(0, 0x01),
            tdb4_leaf(1, 0x00, 0, 0x08, 1),
            keyframe_list(2, 48, 4, records),
        ],
    );
    let prop = parse_property(&tdbs, "ADBE Opacity", 600.0, "root", None).unwrap();
    assert!(prop.animated);
    assert!(prop.is_animated());
    assert_eq!(prop.keyframes.len(), 2);

    let first = &prop.keyframes[0];
    assert_eq!(first.index, 1);
    assert_eq!(first.frame, 1.0);
    assert_eq!(first.interpolation, KeyframeInterpolationType::Bezier);
    assert_eq!(first.label, Label(3));
    assert!(first.roving);
    assert!(first.auto_bezier);
    assert!(!first.continuous_bezier);
    match &first.value {
        KeyframeValue::MultiDimensional {
            value,
            in_speed,
            out_influence,
            ..
        } => {
            assert_eq!(value, &[10.0]);
            assert_eq!(in_speed, &[0.1]);
            assert_eq!(out_influence, &[0.4]);
        }
        other => panic!("expected a multi-dimensional keyframe, got {other:?}"),
    }

    let second = &prop.keyframes[1];
    assert_eq!(second.frame, 2.0);
    assert_eq!(second.interpolation, KeyframeInterpolationType::Hold);
    assert!(second.continuous_bezier);
}

#[test]
fn spatial_keyframes_carry_path_tangents() {
    let mut record = kf_header(0, 1, 0, 0);
    record.extend_from_slice(&[0u8; 16]);
    record.extend_from_slice(&f64s(&[1.0, 2.0, 3.0, 4.0])); // eases
    record.extend_from_slice(&f64s(&[320.0, 240.0])); // value
    record.extend_from_slice(&f64s(&[-5.0, 0.0])); // tangent in
    record.extend_from_slice(&f64s(&[5.0, 0.0])); // tangent out

    let tdbs = container(
        tags::TDBS,
        vec![
            tdsb_leaf(0, 0x01),
            tdb4_leaf(2, 0x08, 0, 0x08, 1),
            keyframe_list(1, 104, 4, record),
        ],
    );
    let prop = parse_property(&tdbs, "ADBE Position", 600.0, "root", None).unwrap();
    assert_eq!(prop.value_type, PropertyValueType::TwoDSpatial);
    assert!(prop.is_spatial);
    match &prop.keyframes[0].value {
        KeyframeValue::Spatial {
            value,
            tangent_in,
            tangent_out,
            in_speed,
            out_influence,
            ..
        } => {
            assert_eq!(value, &[320.0, 240.0]);
            assert_eq!(tangent_in, &[-5.0, 0.0]);
            assert_eq!(tangent_out, &[5.0, 0.0]);
            assert_eq!(*in_speed, 1.0);
            assert_eq!(*out_influence, 4.0);
        }
        other => panic!("expected a spatial keyframe, got {other:?}"),
    }
}

#[test]
fn orientation_keyframes_decode() {
    let mut record = kf_header(0, 1, 0, 0);
    record.extend_from_slice(&[0u8; 16]);
    record.extend_from_slice(&f64s(&[0.0, 0.0, 0.0, 0.0]));
    record.extend_from_slice(&f64s(&[0.0, 90.0, 180.0]));
    let list = keyframe_list(1, 80, 4, record);
    let keyframes = decode_keyframes(&list, false, 600.0, "root").unwrap();
    match &keyframes[0].value {
        KeyframeValue::Orientation { value, .. } => {
            assert_eq!(*value, [0.0, 90.0, 180.0]);
        }
        other => panic!("expected an orientation keyframe, got {other:?}"),
    }
}

#[test]
fn short_keyframe_stream_is_truncated() {
    let list = keyframe_list(3, 48, 4, vec![0u8; 48]);
    let err = decode_keyframes(&list, false, 600.0, "root").unwrap_err();
    match err {
        AepError::Truncated { need, have, .. } => {
            assert_eq!(need, 144);
            assert_eq!(have, 48);
        }
        other => panic!("expected a truncation error, got {other:?}"),
    }
}

#[test]
fn effect_parameters_merge_stored_values() {
    let sspc = container(
        tags::SSPC,
        vec![
            wrapper(tags::FNAM, "Gaussian Blur"),
            container(
                tags::PART,
                vec![
                    tdmn("ADBE Gaussian Blur 2"),
                    leaf(tags::PARD, pard_bytes(0, b"", &[])),
                    tdmn("ADBE Gaussian Blur 2-0001"),
                    leaf(tags::PARD, pard_bytes(10, b"Blurriness", &slider_tail(4.0, 1000.0))),
                    tdmn("ADBE Gaussian Blur 2-0002"),
                    leaf(tags::PARD, pard_bytes(7, b"Dimensions", &enum_tail(1, 3, 1))),
                    wrapper(tags::PDNM, "Horizontal and Vertical|Horizontal|Vertical"),
                ],
            ),
            container(
                tags::TDGP,
                vec![
                    tdmn("ADBE Gaussian Blur 2-0001"),
                    container(
                        tags::TDBS,
                        vec![
                            tdsb_leaf(0, 0x01),
                            tdb4_leaf(1, 0x01, 0, 0x08, 0),
                            cdat_leaf(&[25.0]),
                        ],
                    ),
                ],
            ),
        ],
    );

    let effect = parse_effect(&sspc, "ADBE Gaussian Blur 2", 600.0, "root").unwrap();
    assert_eq!(effect.name, "Gaussian Blur");
    assert!(effect.is_effect);
    assert_eq!(effect.children.len(), 2);

    let blurriness = effect.property("ADBE Gaussian Blur 2-0001").unwrap();
    assert_eq!(blurriness.name, "Blurriness");
    assert_eq!(blurriness.index, 1);
    assert_eq!(blurriness.control_type, PropertyControlType::Slider);
    assert_eq!(blurriness.last_value, Some(PropertyValue::OneD(4.0)));
    assert_eq!(blurriness.max_value, Some(1000.0));
    // merged from the stored stream
    assert_eq!(blurriness.value, Some(PropertyValue::OneD(25.0)));
    assert!(blurriness.enabled);

    let dimensions = effect.property("ADBE Gaussian Blur 2-0002").unwrap();
    assert_eq!(dimensions.index, 2);
    assert_eq!(dimensions.control_type, PropertyControlType::Enum);
    assert_eq!(
        dimensions.enum_options,
        vec!["Horizontal and Vertical", "Horizontal", "Vertical"]
    );
    assert_eq!(dimensions.min_value, Some(1.0));
    assert_eq!(dimensions.max_value, Some(3.0));
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

fn slider_tail(last_value: f64, max_value: f32) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&last_value.to_be_bytes());
    b.extend_from_slice(&[0u8; 52]);
    b.extend_from_slice(&max_value.to_be_bytes());
    b
}

fn enum_tail(last_value: u32, nb_options: i32, default: i32) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&last_value.to_be_bytes());
    b.extend_from_slice(&nb_options.to_be_bytes());
    b.extend_from_slice(&default.to_be_bytes());
    b
}

#[test]
fn property_group_nests_and_indexes_children() {
    let tdgp = container(
        tags::TDGP,
        vec![
            tdmn("ADBE Transform Group"),
            container(
                tags::TDGP,
                vec![
                    tdmn("ADBE Position"),
                    container(
                        tags::TDBS,
                        vec![
                            tdsb_leaf(0, 0x01),
                            tdb4_leaf(2, 0x08, 0, 0x08, 0),
                            cdat_leaf(&[960.0, 540.0]),
                        ],
                    ),
                    tdmn("ADBE Opacity"),
                    container(
                        tags::TDBS,
                        vec![
                            tdsb_leaf(0, 0x01),
                            tdb4_leaf(1, 0x01, 0, 0x08, 0),
                            cdat_leaf(&[100.0]),
                        ],
                    ),
                ],
            ),
        ],
    );

    let group = parse_property_group(&tdgp, "ADBE Root Group", 600.0, "root").unwrap();
    assert_eq!(group.match_name, "ADBE Root Group");
    let transform = group.group("ADBE Transform Group").unwrap();
    assert_eq!(transform.name, "Transform");
    assert_eq!(transform.index, 1);
    let position = transform.property("ADBE Position").unwrap();
    assert_eq!(position.name, "Position");
    assert_eq!(position.index, 1);
    assert_eq!(position.value, Some(PropertyValue::TwoD([960.0, 540.0])));
    let opacity = transform.property("ADBE Opacity").unwrap();
    assert_eq!(opacity.index, 2);
}

fn nmhd_leaf(flags: u8, frame_duration: u32, label: u8) -> Chunk {
    let mut b = vec![0u8; 3];
    b.push(flags);
    b.extend_from_slice(&[0u8; 4]);
    b.extend_from_slice(&frame_duration.to_be_bytes());
    b.extend_from_slice(&[0u8; 4]);
    b.push(label);
    leaf(tags::NMHD, b)
}

#[test]
fn markers_pair_records_with_keyframe_times() {
    let mut record = kf_header(1200, 1, 0, 0);
    record.extend_from_slice(&[0u8; 16]);
    record.extend_from_slice(&f64s(&[0.0, 0.0, 0.0, 0.0]));
    record.resize(64, 0);

    let mrst = container(
        Tag::new(b"mrst"),
        vec![
            container(
                tags::TDBS,
                vec![
                    tdsb_leaf(0, 0x01),
                    tdb4_leaf(1, 0x01, 0x01, 0, 1),
                    keyframe_list(1, 64, 4, record),
                ],
            ),
            container(
                tags::MRKY,
                vec![container(
                    tags::NMRD,
                    vec![
                        nmhd_leaf(0x02 | 0x01, 24, 9),
                        utf8("Scene start"),
                        utf8("Chapter 1"),
                        utf8("https://example.com"),
                        utf8("_blank"),
                        utf8("cue"),
                        utf8("speaker"),
                        utf8("alice"),
                    ],
                )],
            ),
        ],
    );

    let markers = parse_markers(&mrst, "ADBE Marker", 600.0, "root").unwrap();
    assert_eq!(markers.len(), 1);
    let marker = &markers[0];
    assert_eq!(marker.frame, 2.0);
    assert_eq!(marker.frame_duration, 24.0);
    assert_eq!(marker.comment, "Scene start");
    assert_eq!(marker.chapter, "Chapter 1");
    assert_eq!(marker.url, "https://example.com");
    assert_eq!(marker.frame_target, "_blank");
    assert_eq!(marker.cue_point_name, "cue");
    assert_eq!(
        marker.params,
        vec![("speaker".to_owned(), "alice".to_owned())]
    );
    assert_eq!(marker.label, Label(9));
    assert!(marker.protected_region);
    assert!(marker.navigation);
    assert!(!marker.event_cue_point());
}

#[test]
fn text_stream_decodes_documents() {
    let blob = "/1 << /1 [ << /0 << /0 (Title Card) >> >> ] >>";
    let btds = container(
        tags::BTDS,
        vec![
            container(
                tags::TDBS,
                vec![tdsb_leaf(0, 0x01), tdb4_leaf(1, 0x01, 0x01, 0, 0)],
            ),
            Chunk {
                tag: tags::LIST,
                offset: 0,
                data: ChunkData::Blob {
                    kind: tags::BTDK,
                    bytes: blob.as_bytes().to_vec(),
                },
            },
        ],
    );
    let tdgp = container(
        tags::TDGP,
        vec![tdmn("ADBE Text Document"), btds],
    );
    let group = parse_property_group(&tdgp, "ADBE Text Properties", 600.0, "root").unwrap();
    let source_text = group.property("ADBE Text Document").unwrap();
    assert_eq!(source_text.value_type, PropertyValueType::TextDocument);
    assert_eq!(source_text.text_documents.len(), 1);
    assert_eq!(source_text.text_documents[0].text, "Title Card");
    assert_eq!(source_text.text_documents[0].justification, None);
}
