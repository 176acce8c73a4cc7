//! Decoding of `LIST:btdk` COS payloads into text documents.
//!
//! The blob stores a font list and a per-keyframe document list inside a
//! deeply nested tree keyed by numeric strings. Only the first character
//! run and first paragraph run of each document are surfaced.

use crate::cos::{self, CosValue};
use crate::foundation::error::AepResult;
use crate::model::enums::{AutoKernType, LeadingType, ParagraphJustification};
use crate::model::text::{FontInfo, TextDocument};

/// Decode a text-stream blob into its documents and the fonts they use.
pub fn decode_text_blob(bytes: &[u8], base: u64) -> AepResult<(Vec<TextDocument>, Vec<FontInfo>)> {
    let root = cos::parse(bytes, base)?;
    let fonts = decode_fonts(&root);
    let documents = decode_documents(&root, &fonts);
    Ok((documents, fonts))
}

fn decode_fonts(root: &CosValue) -> Vec<FontInfo> {
    let mut fonts = Vec::new();
    let Some(entries) = root.traverse(&["0", "1", "0"]).and_then(CosValue::as_array) else {
        return fonts;
    };
    for entry in entries {
        let Some(ps_name) = entry.traverse(&["0", "0", "0"]).and_then(CosValue::as_str) else {
            continue;
        };
        let version = entry
            .traverse(&["0", "0", "5"])
            .and_then(CosValue::as_str)
            .map(str::to_owned);
        fonts.push(FontInfo {
            post_script_name: strip_bom(ps_name).to_owned(),
            version,
        });
    }
    fonts
}

fn decode_documents(root: &CosValue, fonts: &[FontInfo]) -> Vec<TextDocument> {
    let mut documents = Vec::new();
    let Some(entries) = root.traverse(&["1", "1"]).and_then(CosValue::as_array) else {
        return documents;
    };
    for entry in entries {
        let mut doc = TextDocument::default();
        if let Some(text) = entry.traverse(&["0", "0"]).and_then(CosValue::as_str) {
            doc.text = strip_bom(text).to_owned();
        }
        if let Some(runs) = entry.traverse(&["0", "5", "0"]).and_then(CosValue::as_array) {
            doc.paragraph_count = Some(runs.len());
        }
        if let Some(style) = entry.traverse(&["0", "5", "0", "0", "0", "0", "5"]) {
            apply_paragraph_style(&mut doc, style);
        }
        if let Some(style) = entry.traverse(&["0", "6", "0", "0", "0", "0", "6"]) {
            apply_character_style(&mut doc, style, fonts);
        }
        documents.push(doc);
    }
    documents
}

fn apply_paragraph_style(doc: &mut TextDocument, style: &CosValue) {
    if let Some(raw) = style.get("0").and_then(CosValue::as_i64) {
        doc.justification = ParagraphJustification::from_binary(raw);
    }
    doc.first_line_indent = style.get("1").and_then(CosValue::as_f64);
    doc.start_indent = style.get("2").and_then(CosValue::as_f64);
    doc.end_indent = style.get("3").and_then(CosValue::as_f64);
    doc.space_before = style.get("4").and_then(CosValue::as_f64);
    doc.space_after = style.get("5").and_then(CosValue::as_f64);
    doc.auto_leading = style.get("6").and_then(CosValue::as_bool);
    if let Some(leading) = style
        .get("8")
        .and_then(CosValue::as_i64)
        .and_then(LeadingType::from_binary)
    {
        doc.leading_type = Some(leading);
    }
    doc.auto_hyphenate = style.get("9").and_then(CosValue::as_bool);
    doc.every_line_composer = style.get("15").and_then(CosValue::as_bool);
    doc.hanging_roman = style.get("21").and_then(CosValue::as_bool);
}

fn apply_character_style(doc: &mut TextDocument, style: &CosValue, fonts: &[FontInfo]) {
    if let Some(index) = style.get("0").and_then(CosValue::as_i64) {
        doc.font = usize::try_from(index)
            .ok()
            .and_then(|i| fonts.get(i))
            .map(|font| font.post_script_name.clone());
    }
    doc.font_size = style.get("1").and_then(CosValue::as_f64);
    doc.faux_bold = style.get("2").and_then(CosValue::as_bool);
    doc.faux_italic = style.get("3").and_then(CosValue::as_bool);
    doc.tracking = style.get("5").and_then(CosValue::as_f64);
    doc.horizontal_scale = style.get("6").and_then(CosValue::as_f64);
    doc.vertical_scale = style.get("7").and_then(CosValue::as_f64);
    if let Some(kern) = style
        .get("8")
        .and_then(CosValue::as_i64)
        .and_then(AutoKernType::from_binary)
    {
        doc.auto_kern_type = Some(kern);
    }
    doc.baseline_shift = style.get("9").and_then(CosValue::as_f64);
    doc.leading = style.get("10").and_then(CosValue::as_f64);
    if let Some(leading) = style
        .get("11")
        .and_then(CosValue::as_i64)
        .and_then(LeadingType::from_binary)
    {
        doc.leading_type = Some(leading);
    }
    if let Some(caps) = style.get("12").and_then(CosValue::as_i64) {
        doc.small_caps = Some(caps == 1);
        doc.all_caps = Some(caps == 2);
    }
    if let Some(baseline) = style.get("13").and_then(CosValue::as_i64) {
        doc.superscript = Some(baseline == 1);
        doc.subscript = Some(baseline == 2);
    }
    doc.tsume = style.get("17").and_then(CosValue::as_f64);
    doc.fill_color = style.get("53").and_then(paint_rgb);
    doc.stroke_color = style.get("54").and_then(paint_rgb);
    // Stored in two slots; 56 wins when both are present.
    doc.apply_fill = style
        .get("56")
        .or_else(|| style.get("4"))
        .and_then(CosValue::as_bool);
    doc.apply_stroke = style.get("57").and_then(CosValue::as_bool);
    doc.stroke_over_fill = style.get("58").and_then(CosValue::as_bool);
    doc.stroke_width = style.get("63").and_then(CosValue::as_f64);
}

/// A `SimplePaint` stores `[a, r, g, b]`; the alpha channel is dropped.
fn paint_rgb(paint: &CosValue) -> Option<[f64; 3]> {
    match paint.traverse(&["0", "1"]).and_then(CosValue::as_array)? {
        [_, r, g, b, ..] => Some([r.as_f64()?, g.as_f64()?, b.as_f64()?]),
        _ => None,
    }
}

/// String values in the blob often carry a leading byte-order mark.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/text.rs"]
mod tests;
