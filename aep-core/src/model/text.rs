//! Text document and font models decoded from text stream data.

use serde::{Deserialize, Serialize};

use crate::model::enums::{AutoKernType, LeadingType, ParagraphJustification};

/// A font referenced by a text document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// PostScript name, e.g. `Helvetica-Bold`.
    pub post_script_name: String,
    /// Font version string, if recorded.
    pub version: Option<String>,
}

/// The styled text value of a source-text keyframe.
///
/// Character-level fields reflect the first character run; paragraph-level
/// fields reflect the first paragraph run. Fields absent from the stored
/// style read as `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    /// The text content.
    pub text: String,
    /// PostScript name of the first character's font.
    pub font: Option<String>,
    /// Font size in pixels.
    pub font_size: Option<f64>,
    /// Faux bold switch.
    pub faux_bold: Option<bool>,
    /// Faux italic switch.
    pub faux_italic: Option<bool>,
    /// Whether a fill is drawn.
    pub apply_fill: Option<bool>,
    /// Whether a stroke is drawn.
    pub apply_stroke: Option<bool>,
    /// Fill color as `[r, g, b]` in the 0-1 range.
    pub fill_color: Option<[f64; 3]>,
    /// Stroke color as `[r, g, b]` in the 0-1 range.
    pub stroke_color: Option<[f64; 3]>,
    /// Whether the stroke is drawn over the fill.
    pub stroke_over_fill: Option<bool>,
    /// Stroke width in pixels.
    pub stroke_width: Option<f64>,
    /// Tracking amount.
    pub tracking: Option<f64>,
    /// Horizontal scale factor.
    pub horizontal_scale: Option<f64>,
    /// Vertical scale factor.
    pub vertical_scale: Option<f64>,
    /// Baseline shift in pixels.
    pub baseline_shift: Option<f64>,
    /// Auto-kerning mode of the first character run.
    pub auto_kern_type: Option<AutoKernType>,
    /// Line spacing.
    pub leading: Option<f64>,
    /// Leading model used for line spacing.
    pub leading_type: Option<LeadingType>,
    /// Tsume amount for CJK text.
    pub tsume: Option<f64>,
    /// All-caps switch.
    pub all_caps: Option<bool>,
    /// Small-caps switch.
    pub small_caps: Option<bool>,
    /// Superscript switch.
    pub superscript: Option<bool>,
    /// Subscript switch.
    pub subscript: Option<bool>,
    /// Paragraph justification.
    pub justification: Option<ParagraphJustification>,
    /// First line indent.
    pub first_line_indent: Option<f64>,
    /// Paragraph start indent.
    pub start_indent: Option<f64>,
    /// Paragraph end indent.
    pub end_indent: Option<f64>,
    /// Space before the paragraph.
    pub space_before: Option<f64>,
    /// Space after the paragraph.
    pub space_after: Option<f64>,
    /// Auto leading switch.
    pub auto_leading: Option<bool>,
    /// Auto hyphenation switch.
    pub auto_hyphenate: Option<bool>,
    /// Every-line composer switch.
    pub every_line_composer: Option<bool>,
    /// Hanging roman punctuation switch.
    pub hanging_roman: Option<bool>,
    /// Number of paragraph style runs.
    pub paragraph_count: Option<usize>,
}
