//! Assembly of property trees, effects, keyframes, and markers out of
//! `LIST:tdgp` containers.

use tracing::debug;

use crate::chunk::bodies::meta::NmhdBody;
use crate::chunk::bodies::prop::{CdatBody, Lhd3Body, PardBody, PardValue, Tdb4Body, TdsbBody};
use crate::chunk::tag::tags;
use crate::chunk::tree::Chunk;
use crate::foundation::cursor::Cursor;
use crate::foundation::error::{AepError, AepResult};
use crate::model::enums::{
    KeyframeInterpolationType, Label, PropertyControlType, PropertyValueType,
};
use crate::model::keyframe::{Keyframe, KeyframeValue};
use crate::model::marker::Marker;
use crate::model::property::{Property, PropertyGroup, PropertyNode, PropertyValue};

use super::text::decode_text_blob;

/// Display names of the built-in property groups and streams, keyed by
/// match name. Anything not listed falls back to its match name.
const MATCH_NAME_TO_DISPLAY_NAME: &[(&str, &str)] = &[
    ("ADBE Marker", "Marker"),
    ("ADBE Time Remapping", "Time Remap"),
    ("ADBE MTrackers", "Motion Trackers"),
    ("ADBE Mask Parade", "Masks"),
    ("ADBE Effect Parade", "Effects"),
    ("ADBE Layer Overrides", "Essential Properties"),
    ("ADBE Transform Group", "Transform"),
    ("ADBE Anchor Point", "Anchor Point"),
    ("ADBE Position", "Position"),
    ("ADBE Position_0", "X Position"),
    ("ADBE Position_1", "Y Position"),
    ("ADBE Position_2", "Z Position"),
    ("ADBE Scale", "Scale"),
    ("ADBE Orientation", "Orientation"),
    ("ADBE Rotate X", "X Rotation"),
    ("ADBE Rotate Y", "Y Rotation"),
    ("ADBE Rotate Z", "Z Rotation"),
    ("ADBE Opacity", "Opacity"),
    ("ADBE Audio Group", "Audio"),
    ("ADBE Audio Levels", "Audio Levels"),
];

/// A `tdmn` naming one of these strings closes the group that carries it.
const GROUP_END_SENTINELS: &[&str] = &["ADBE Group End", "ADBE Effect Built In Params"];

/// A `tdsn` naming this string means "no custom name".
const DEFAULT_STREAM_NAME: &str = "-_0_/-";

/// The display name of a built-in stream, or the match name itself.
pub fn display_name(match_name: &str) -> &str {
    MATCH_NAME_TO_DISPLAY_NAME
        .iter()
        .find(|(key, _)| *key == match_name)
        .map_or(match_name, |(_, name)| name)
}

/// The NUL-stripped text of a leaf chunk.
pub(crate) fn chunk_text(chunk: &Chunk, path: &str) -> AepResult<String> {
    Ok(chunk.utf8(path)?.trim_end_matches('\0').to_owned())
}

/// Group the children of a container by the `tdmn` match name preceding
/// them, preserving encounter order.
///
/// Children arrive as an interleaved sequence of `tdmn` name chunks and
/// payload chunks. A `tdmn` naming a group-end sentinel switches the walk
/// into skip mode until the next `tdmn`; `engv` and `aRbs` housekeeping
/// chunks are always dropped.
pub(crate) fn group_by_match_name<'a>(
    root: &'a Chunk,
    path: &str,
) -> AepResult<Vec<(String, Vec<&'a Chunk>)>> {
    let mut groups: Vec<(String, Vec<&Chunk>)> = Vec::new();
    let mut skip_to_next_tdmn = true;
    let mut match_name = String::new();
    for chunk in root.children() {
        if chunk.tag == tags::TDMN {
            match_name = chunk_text(chunk, path)?;
            skip_to_next_tdmn = GROUP_END_SENTINELS.contains(&match_name.as_str());
        } else if !skip_to_next_tdmn && chunk.tag != tags::ENGV && chunk.tag != tags::ARBS {
            match groups.iter_mut().find(|(name, _)| *name == match_name) {
                Some((_, chunks)) => chunks.push(chunk),
                None => groups.push((match_name.clone(), vec![chunk])),
            }
        }
    }
    Ok(groups)
}

/// The custom display name from a `tdsn` child, if one was set.
pub(crate) fn user_defined_name(root: &Chunk, path: &str) -> AepResult<Option<String>> {
    let Some(tdsn) = root.child(tags::TDSN) else {
        return Ok(None);
    };
    let utf8 = tdsn.require_child(tags::UTF8, path)?;
    let name = chunk_text(utf8, path)?;
    Ok((name != DEFAULT_STREAM_NAME).then_some(name))
}

/// Assemble a `LIST:tdgp` container into a property group.
pub fn parse_property_group(
    tdgp: &Chunk,
    group_match_name: &str,
    time_scale: f64,
    path: &str,
) -> AepResult<PropertyGroup> {
    let path = format!("{path}/{}", tdgp.label());
    let mut group = PropertyGroup::named(group_match_name, display_name(group_match_name));

    let mut index = 0u32;
    for (match_name, chunks) in group_by_match_name(tdgp, &path)? {
        let first = chunks[0];
        let node = match first.list_kind() {
            Some(tags::TDGP) => {
                let sub = parse_property_group(first, &match_name, time_scale, &path)?;
                Some(PropertyNode::Group(Box::new(sub)))
            }
            Some(tags::SSPC) => {
                let effect = parse_effect(first, &match_name, time_scale, &path)?;
                Some(PropertyNode::Group(Box::new(effect)))
            }
            Some(tags::TDBS) => {
                let prop = parse_property(first, &match_name, time_scale, &path, None)?;
                Some(PropertyNode::Property(Box::new(prop)))
            }
            Some(tags::OTST) => {
                let prop = parse_orientation(first, &match_name, time_scale, &path)?;
                Some(PropertyNode::Property(Box::new(prop)))
            }
            Some(tags::BTDS) => {
                let prop = parse_text_stream(first, &match_name, time_scale, &path)?;
                Some(PropertyNode::Property(Box::new(prop)))
            }
            other => {
                // om-s, GCst, mrst, OvG2 and friends are not modelled.
                debug!(%match_name, kind = ?other, "skipping unmodelled stream");
                None
            }
        };
        if let Some(mut node) = node {
            index += 1;
            match &mut node {
                PropertyNode::Property(p) => p.index = index,
                PropertyNode::Group(g) => g.index = index,
            }
            group.children.push(node);
        }
    }
    Ok(group)
}

/// Assemble a single property stream out of a `LIST:tdbs` container.
///
/// When `existing` is given (effect parameters, orientation streams) the
/// decoded stream data is merged into it instead of a fresh record.
pub(crate) fn parse_property(
    tdbs: &Chunk,
    match_name: &str,
    time_scale: f64,
    path: &str,
    existing: Option<Property>,
) -> AepResult<Property> {
    let path = format!("{path}/{}", tdbs.label());
    let mut prop =
        existing.unwrap_or_else(|| Property::named(match_name, display_name(match_name)));

    let tdsb = TdsbBody::parse(tdbs.require_child(tags::TDSB, &path)?, &path)?;
    prop.locked_ratio = tdsb.locked_ratio();
    prop.enabled = tdsb.enabled();
    prop.dimensions_separated = tdsb.dimensions_separated();

    if let Some(name) = user_defined_name(tdbs, &path)? {
        prop.name = name;
    }

    let tdb4 = Tdb4Body::parse(tdbs.require_child(tags::TDB4, &path)?, &path)?;
    prop.dimensions = tdb4.dimensions;
    prop.animated = tdb4.animated();
    prop.is_spatial = tdb4.is_spatial();
    prop.expression_enabled = tdb4.expression_enabled();

    if prop.control_type == PropertyControlType::Unknown {
        infer_types(&mut prop, &tdb4, match_name);
    } else if prop.value_type == PropertyValueType::Unknown {
        prop.value_type = value_type_for(&tdb4);
    }

    if let Some(cdat) = tdbs.child(tags::CDAT) {
        let body = CdatBody::parse(cdat, &path)?;
        let components = &body.values[..body.values.len().min(tdb4.dimensions as usize)];
        prop.value = PropertyValue::from_components(prop.value_type, components);
    }

    if let Some(utf8) = tdbs.child(tags::UTF8) {
        prop.expression = Some(chunk_text(utf8, &path)?);
    }

    if let Some(list) = tdbs.list(tags::GLST) {
        prop.keyframes = decode_keyframes(list, tdb4.is_spatial(), time_scale, &path)?;
    }

    Ok(prop)
}

/// Pick control and value type from the `tdb4` flags and dimensions.
fn infer_types(prop: &mut Property, tdb4: &Tdb4Body, match_name: &str) {
    prop.value_type = value_type_for(tdb4);
    if tdb4.no_value() {
        return;
    }
    prop.control_type = if tdb4.color() {
        PropertyControlType::Color
    } else if tdb4.integer() {
        PropertyControlType::Boolean
    } else if tdb4.vector() {
        match tdb4.dimensions {
            1 => PropertyControlType::Scalar,
            2 => PropertyControlType::TwoD,
            3 => PropertyControlType::ThreeD,
            _ => {
                debug!(
                    %match_name,
                    dimensions = tdb4.dimensions,
                    "could not infer a control type"
                );
                PropertyControlType::Unknown
            }
        }
    } else {
        debug!(%match_name, "could not infer a control type");
        PropertyControlType::Unknown
    };
}

fn value_type_for(tdb4: &Tdb4Body) -> PropertyValueType {
    if tdb4.no_value() {
        return PropertyValueType::NoValue;
    }
    if tdb4.color() {
        return PropertyValueType::Color;
    }
    if tdb4.integer() {
        return PropertyValueType::OneD;
    }
    if tdb4.vector() {
        return match (tdb4.dimensions, tdb4.is_spatial()) {
            (1, _) => PropertyValueType::OneD,
            (2, true) => PropertyValueType::TwoDSpatial,
            (2, false) => PropertyValueType::TwoD,
            (3, true) => PropertyValueType::ThreeDSpatial,
            (3, false) => PropertyValueType::ThreeD,
            _ => PropertyValueType::Unknown,
        };
    }
    PropertyValueType::Unknown
}

/// An orientation stream: an angle control wrapping an inner `tdbs`.
fn parse_orientation(
    otst: &Chunk,
    match_name: &str,
    time_scale: f64,
    path: &str,
) -> AepResult<Property> {
    let path = format!("{path}/{}", otst.label());
    let tdbs = otst.require_list(tags::TDBS, &path)?;
    let mut prop = Property::named(match_name, display_name(match_name));
    prop.control_type = PropertyControlType::Angle;
    prop.value_type = PropertyValueType::Orientation;
    parse_property(tdbs, match_name, time_scale, &path, Some(prop))
}

/// A source-text stream: an inner `tdbs` plus a COS blob holding the
/// styled documents.
fn parse_text_stream(
    btds: &Chunk,
    match_name: &str,
    time_scale: f64,
    path: &str,
) -> AepResult<Property> {
    let path = format!("{path}/{}", btds.label());
    let tdbs = btds.require_list(tags::TDBS, &path)?;
    let mut prop = parse_property(tdbs, match_name, time_scale, &path, None)?;
    prop.value_type = PropertyValueType::TextDocument;

    let btdk = btds.require_list(tags::BTDK, &path)?;
    let blob = btdk.bytes(&path)?;
    let (documents, fonts) = decode_text_blob(blob, btdk.offset + 12)?;
    prop.text_documents = documents;
    prop.fonts = fonts;
    Ok(prop)
}

/// Assemble an effect instance out of a `LIST:sspc` container.
///
/// Parameter definitions come from the `parT` list; the sibling `tdgp`
/// carries the stored values, merged into the matching definitions.
pub(crate) fn parse_effect(
    sspc: &Chunk,
    group_match_name: &str,
    time_scale: f64,
    path: &str,
) -> AepResult<PropertyGroup> {
    let path = format!("{path}/{}", sspc.label());

    let fnam = sspc.require_child(tags::FNAM, &path)?;
    let name_chunk = fnam.require_child(tags::UTF8, &path)?;
    let mut effect = PropertyGroup::named(group_match_name, &chunk_text(name_chunk, &path)?);
    effect.is_effect = true;

    let mut parameters: Vec<Property> = Vec::new();
    if let Some(part) = sspc.list(tags::PART) {
        for (index, (match_name, chunks)) in group_by_match_name(part, &path)?.iter().enumerate() {
            // The first entry describes the effect itself.
            if index == 0 {
                continue;
            }
            let mut parameter = parse_effect_parameter(chunks, match_name, &path)?;
            parameter.index = index as u32;
            parameters.push(parameter);
        }
    }

    if let Some(tdgp) = sspc.list(tags::TDGP) {
        if let Some(name) = user_defined_name(tdgp, &path)? {
            effect.name = name;
        }
        for (match_name, chunks) in group_by_match_name(tdgp, &path)? {
            let first = chunks[0];
            match first.list_kind() {
                Some(tags::TDBS) => {
                    if let Some(slot) =
                        parameters.iter().position(|p| p.match_name == match_name)
                    {
                        let merged = parse_property(
                            first,
                            &match_name,
                            time_scale,
                            &path,
                            Some(parameters[slot].clone()),
                        )?;
                        parameters[slot] = merged;
                    }
                }
                other => {
                    // Deformation pins and other nested stores are not modelled.
                    debug!(%match_name, kind = ?other, "skipping unmodelled parameter value");
                }
            }
        }
    }

    effect.children = parameters
        .into_iter()
        .map(|p| PropertyNode::Property(Box::new(p)))
        .collect();
    Ok(effect)
}

/// Decode a `pard` definition (plus optional `pdnm` rename) into a
/// parameter record.
fn parse_effect_parameter(
    chunks: &[&Chunk],
    match_name: &str,
    path: &str,
) -> AepResult<Property> {
    let pard_chunk = chunks
        .iter()
        .find(|c| c.tag == tags::PARD)
        .ok_or_else(|| AepError::chunk_not_found("pard", path))?;
    let pard = PardBody::parse(pard_chunk, path)?;

    let mut parameter = Property::named(match_name, pard.name.trim_end_matches('\0'));
    parameter.control_type = PropertyControlType::from_binary(pard.control_type_raw);
    parameter.value_type = match parameter.control_type {
        PropertyControlType::Angle => PropertyValueType::Orientation,
        PropertyControlType::Color => PropertyValueType::Color,
        PropertyControlType::TwoD => PropertyValueType::TwoD,
        PropertyControlType::ThreeD => PropertyValueType::ThreeD,
        PropertyControlType::Boolean
        | PropertyControlType::Enum
        | PropertyControlType::Scalar
        | PropertyControlType::Slider => PropertyValueType::OneD,
        _ => PropertyValueType::Unknown,
    };

    match pard.value {
        PardValue::Angle { last_value } => {
            parameter.last_value = Some(PropertyValue::OneD(f64::from(last_value)));
        }
        PardValue::Boolean {
            last_value,
            default,
        } => {
            parameter.last_value = Some(PropertyValue::OneD(f64::from(last_value)));
            parameter.default_value = Some(PropertyValue::OneD(f64::from(default)));
        }
        PardValue::Color {
            last_color,
            default_color,
            ..
        } => {
            parameter.last_value = Some(PropertyValue::Color(last_color.map(f64::from)));
            parameter.default_value = Some(PropertyValue::Color(default_color.map(f64::from)));
        }
        PardValue::Enum {
            last_value,
            nb_options,
            default,
        } => {
            parameter.last_value = Some(PropertyValue::OneD(f64::from(last_value)));
            parameter.default_value = Some(PropertyValue::OneD(f64::from(default)));
            parameter.min_value = Some(1.0);
            parameter.max_value = Some(f64::from(nb_options));
        }
        PardValue::Scalar {
            last_value,
            min_value,
            max_value,
        } => {
            parameter.last_value = Some(PropertyValue::OneD(f64::from(last_value)));
            parameter.min_value = Some(f64::from(min_value));
            parameter.max_value = Some(f64::from(max_value));
        }
        PardValue::Slider {
            last_value,
            max_value,
        } => {
            parameter.last_value = Some(PropertyValue::OneD(last_value));
            parameter.max_value = Some(f64::from(max_value));
        }
        PardValue::TwoD { x, y } => {
            // Stored in 1/128 pixel units.
            parameter.last_value = Some(PropertyValue::TwoD([
                f64::from(x) / 128.0,
                f64::from(y) / 128.0,
            ]));
        }
        PardValue::ThreeD { x, y, z } => {
            // Stored in 1/512 units.
            parameter.last_value =
                Some(PropertyValue::ThreeD([x * 512.0, y * 512.0, z * 512.0]));
        }
        PardValue::None => {}
    }

    if let Some(pdnm_chunk) = chunks.iter().find(|c| c.tag == tags::PDNM) {
        let utf8 = pdnm_chunk.require_child(tags::UTF8, path)?;
        let text = chunk_text(utf8, path)?;
        if parameter.control_type == PropertyControlType::Enum {
            parameter.enum_options = text.split('|').map(str::to_owned).collect();
        } else if !text.is_empty() {
            parameter.name = text;
        }
    }

    Ok(parameter)
}

/// Assemble markers out of a marker stream container.
///
/// The inner `tdbs` supplies the keyframe times; the `mrky` list carries
/// one `Nmrd` record per marker in the same order.
pub fn parse_markers(
    mrst: &Chunk,
    group_match_name: &str,
    time_scale: f64,
    path: &str,
) -> AepResult<Vec<Marker>> {
    let path = format!("{path}/{}", mrst.label());
    let tdbs = mrst.require_list(tags::TDBS, &path)?;
    let timing = parse_property(tdbs, group_match_name, time_scale, &path, None)?;

    let mrky = mrst.require_list(tags::MRKY, &path)?;
    let mut markers = Vec::new();
    for (index, nmrd) in mrky.lists(tags::NMRD).enumerate() {
        let mut marker = parse_marker(nmrd, &path)?;
        if let Some(keyframe) = timing.keyframes.get(index) {
            marker.frame = keyframe.frame;
        }
        markers.push(marker);
    }
    Ok(markers)
}

/// Decode one `LIST:Nmrd` marker record.
fn parse_marker(nmrd: &Chunk, path: &str) -> AepResult<Marker> {
    let path = format!("{path}/{}", nmrd.label());
    let nmhd = NmhdBody::parse(nmrd.require_child(tags::NMHD, &path)?, &path)?;

    let mut strings = Vec::new();
    for utf8 in nmrd.children_tagged(tags::UTF8) {
        strings.push(chunk_text(utf8, &path)?);
    }
    let slot = |index: usize| strings.get(index).cloned().unwrap_or_default();

    let mut marker = Marker {
        frame: 0.0,
        frame_duration: f64::from(nmhd.frame_duration),
        comment: slot(0),
        chapter: slot(1),
        url: slot(2),
        frame_target: slot(3),
        cue_point_name: slot(4),
        params: Vec::new(),
        label: Label::from_binary(nmhd.label_raw),
        protected_region: nmhd.protected_region(),
        navigation: nmhd.navigation(),
    };
    for pair in strings[5.min(strings.len())..].chunks(2) {
        if let [name, value] = pair {
            marker.params.push((name.clone(), value.clone()));
        }
    }
    Ok(marker)
}

/// The keyframe record variant selected by an `lhd3` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyframeVariant {
    Color,
    MultiDimensional(usize),
    Position(usize),
    Orientation,
    NoValue,
    Opaque,
}

impl KeyframeVariant {
    /// Dispatch on the raw type code and the per-record size. Spatial
    /// streams reinterpret the 3-dimension scalar layout as a position
    /// record of the same size.
    fn select(lhd3: &Lhd3Body, is_spatial: bool) -> Self {
        match (lhd3.record_type_raw, lhd3.record_size) {
            (1, 2246) | (1, 128) | (2, 1) | (4, 16) => Self::Opaque,
            (4, 152) => Self::Color,
            (4, 128) if is_spatial => Self::Position(3),
            (4, 128) => Self::MultiDimensional(3),
            (4, 104) => Self::Position(2),
            (4, 88) => Self::MultiDimensional(2),
            (4, 80) => Self::Orientation,
            (4, 64) => Self::NoValue,
            (4, 48) => Self::MultiDimensional(1),
            _ => Self::Opaque,
        }
    }
}

/// Decode the keyframes of a `LIST:list` container.
pub(crate) fn decode_keyframes(
    list: &Chunk,
    is_spatial: bool,
    time_scale: f64,
    path: &str,
) -> AepResult<Vec<Keyframe>> {
    let path = format!("{path}/{}", list.label());
    let lhd3 = Lhd3Body::parse(list.require_child(tags::LHD3, &path)?, &path)?;
    if lhd3.record_count == 0 {
        return Ok(Vec::new());
    }
    let variant = KeyframeVariant::select(&lhd3, is_spatial);

    let ldat = list.require_child(tags::LDAT, &path)?;
    let bytes = ldat.bytes(&path)?;
    let record_size = lhd3.record_size as usize;
    let need = record_size * lhd3.record_count as usize;
    if record_size == 0 || bytes.len() < need {
        return Err(AepError::truncated(&path, ldat.offset, need, bytes.len()));
    }

    let scale = if time_scale > 0.0 { time_scale } else { 1.0 };
    let mut keyframes = Vec::with_capacity(lhd3.record_count as usize);
    for index in 0..lhd3.record_count as usize {
        let record = &bytes[index * record_size..(index + 1) * record_size];
        let base = ldat.offset + 8 + (index * record_size) as u64;
        keyframes.push(decode_keyframe(
            record,
            base,
            index as u32 + 1,
            variant,
            scale,
            &path,
        )?);
    }
    Ok(keyframes)
}

fn decode_keyframe(
    record: &[u8],
    base: u64,
    index: u32,
    variant: KeyframeVariant,
    time_scale: f64,
    path: &str,
) -> AepResult<Keyframe> {
    let mut cur = Cursor::new(record, base, path);
    cur.skip(1)?;
    let time_raw = cur.read_u16()?;
    cur.skip(2)?;
    let interpolation = KeyframeInterpolationType::from_binary(cur.read_u8()?);
    let label = Label::from_binary(cur.read_u8()?);
    let attributes = cur.read_u8()?;

    let value = match variant {
        KeyframeVariant::MultiDimensional(dims) => {
            let value = cur.read_f64s(dims)?;
            let in_speed = cur.read_f64s(dims)?;
            let in_influence = cur.read_f64s(dims)?;
            let out_speed = cur.read_f64s(dims)?;
            let out_influence = cur.read_f64s(dims)?;
            KeyframeValue::MultiDimensional {
                value,
                in_speed,
                in_influence,
                out_speed,
                out_influence,
            }
        }
        KeyframeVariant::Position(dims) => {
            cur.skip(16)?;
            let in_speed = cur.read_f64()?;
            let in_influence = cur.read_f64()?;
            let out_speed = cur.read_f64()?;
            let out_influence = cur.read_f64()?;
            let value = cur.read_f64s(dims)?;
            let tangent_in = cur.read_f64s(dims)?;
            let tangent_out = cur.read_f64s(dims)?;
            KeyframeValue::Spatial {
                value,
                tangent_in,
                tangent_out,
                in_speed,
                in_influence,
                out_speed,
                out_influence,
            }
        }
        KeyframeVariant::Color => {
            cur.skip(16)?;
            let in_speed = cur.read_f64()?;
            let in_influence = cur.read_f64()?;
            let out_speed = cur.read_f64()?;
            let out_influence = cur.read_f64()?;
            let components = cur.read_f64s(4)?;
            KeyframeValue::Color {
                value: [components[0], components[1], components[2], components[3]],
                in_speed,
                in_influence,
                out_speed,
                out_influence,
            }
        }
        KeyframeVariant::Orientation => {
            cur.skip(16)?;
            let in_speed = cur.read_f64()?;
            let in_influence = cur.read_f64()?;
            let out_speed = cur.read_f64()?;
            let out_influence = cur.read_f64()?;
            let components = cur.read_f64s(3)?;
            KeyframeValue::Orientation {
                value: [components[0], components[1], components[2]],
                in_speed,
                in_influence,
                out_speed,
                out_influence,
            }
        }
        KeyframeVariant::NoValue => {
            cur.skip(16)?;
            KeyframeValue::NoValue {
                in_speed: cur.read_f64()?,
                in_influence: cur.read_f64()?,
                out_speed: cur.read_f64()?,
                out_influence: cur.read_f64()?,
            }
        }
        KeyframeVariant::Opaque => KeyframeValue::Opaque(record[8.min(record.len())..].to_vec()),
    };

    Ok(Keyframe {
        index,
        frame: f64::from(time_raw) / time_scale,
        interpolation,
        label,
        roving: attributes & 0x20 != 0,
        auto_bezier: attributes & 0x10 != 0,
        continuous_bezier: attributes & 0x08 != 0,
        value,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/property.rs"]
mod tests;
