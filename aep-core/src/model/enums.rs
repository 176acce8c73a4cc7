//! Raw-value to API-enum translation tables.
//!
//! Values stored on disk rarely match the scripting API's published
//! constants; every enum here owns its translation via `from_binary` and
//! falls back to a documented default on out-of-range input.

use serde::{Deserialize, Serialize};

/// How times are displayed project-wide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeDisplayType {
    /// SMPTE timecode.
    #[default]
    Timecode,
    /// Plain frame numbers.
    Frames,
}

impl TimeDisplayType {
    /// Translate the raw `nnhd` value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Frames,
            _ => Self::Timecode,
        }
    }
}

/// Frame numbering origin when displaying frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FramesCountType {
    /// Count from 0.
    #[default]
    Start0,
    /// Count from 1.
    Start1,
    /// Convert from timecode.
    TimecodeConversion,
}

impl FramesCountType {
    /// Translate the raw `nnhd` value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Start1,
            2 => Self::TimecodeConversion,
            _ => Self::Start0,
        }
    }
}

/// Where footage timecode display starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootageTimecodeDisplayStartType {
    /// Start at zero.
    #[default]
    Start0,
    /// Use the source media's embedded timecode.
    UseSourceMedia,
}

impl FootageTimecodeDisplayStartType {
    /// Translate the raw `nnhd` value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::UseSourceMedia,
            _ => Self::Start0,
        }
    }
}

/// Project color depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitsPerChannel {
    /// 8 bits per channel.
    #[default]
    Eight,
    /// 16 bits per channel.
    Sixteen,
    /// 32 bits per channel (float).
    ThirtyTwo,
}

impl BitsPerChannel {
    /// Translate the raw `nhed`/`nnhd` code (0 / 1 / 2).
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Sixteen,
            2 => Self::ThirtyTwo,
            _ => Self::Eight,
        }
    }

    /// The depth in bits.
    pub fn bits(self) -> u8 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::ThirtyTwo => 32,
        }
    }

    /// Display label used by output-filename templates.
    pub fn template_label(self) -> &'static str {
        match self {
            Self::Eight => "8bit",
            Self::Sixteen => "16bit",
            Self::ThirtyTwo => "32bit",
        }
    }
}

/// Label color index (0 = none, 1-16 = palette entries).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label(pub u8);

impl Label {
    /// Translate the raw value, clamping out-of-palette indices to none.
    pub fn from_binary(raw: u8) -> Self {
        if raw <= 16 { Self(raw) } else { Self(0) }
    }
}

/// Track-matte mode of a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackMatteType {
    /// No track matte.
    #[default]
    NoTrackMatte,
    /// Alpha matte.
    Alpha,
    /// Inverted alpha matte.
    AlphaInverted,
    /// Luma matte.
    Luma,
    /// Inverted luma matte.
    LumaInverted,
}

impl TrackMatteType {
    /// Translate the raw `ldta` value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Alpha,
            2 => Self::AlphaInverted,
            3 => Self::Luma,
            4 => Self::LumaInverted,
            _ => Self::NoTrackMatte,
        }
    }
}

/// Layer blending mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum BlendingMode {
    #[default]
    Normal,
    Dissolve,
    Add,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
    HardLight,
    Darken,
    Lighten,
    ClassicDifference,
    Hue,
    Saturation,
    Color,
    Luminosity,
    StencilAlpha,
    StencilLuma,
    SilhouetteAlpha,
    SilhouetteLuma,
    LuminescentPremul,
    AlphaAdd,
    ClassicColorDodge,
    ClassicColorBurn,
    Exclusion,
    Difference,
    ColorDodge,
    ColorBurn,
    LinearDodge,
    LinearBurn,
    LinearLight,
    VividLight,
    PinLight,
    HardMix,
    LighterColor,
    DarkerColor,
    Subtract,
    Divide,
}

impl BlendingMode {
    /// Translate the raw `ldta` value (stored range 2-38).
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            3 => Self::Dissolve,
            4 => Self::Add,
            5 => Self::Multiply,
            6 => Self::Screen,
            7 => Self::Overlay,
            8 => Self::SoftLight,
            9 => Self::HardLight,
            10 => Self::Darken,
            11 => Self::Lighten,
            12 => Self::ClassicDifference,
            13 => Self::Hue,
            14 => Self::Saturation,
            15 => Self::Color,
            16 => Self::Luminosity,
            17 => Self::StencilAlpha,
            18 => Self::StencilLuma,
            19 => Self::SilhouetteAlpha,
            20 => Self::SilhouetteLuma,
            21 => Self::LuminescentPremul,
            22 => Self::AlphaAdd,
            23 => Self::ClassicColorDodge,
            24 => Self::ClassicColorBurn,
            25 => Self::Exclusion,
            26 => Self::Difference,
            27 => Self::ColorDodge,
            28 => Self::ColorBurn,
            29 => Self::LinearDodge,
            30 => Self::LinearBurn,
            31 => Self::LinearLight,
            32 => Self::VividLight,
            33 => Self::PinLight,
            34 => Self::HardMix,
            35 => Self::LighterColor,
            36 => Self::DarkerColor,
            37 => Self::Subtract,
            38 => Self::Divide,
            _ => Self::Normal,
        }
    }
}

/// Layer render quality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerQuality {
    /// Wireframe preview.
    Wireframe,
    /// Draft quality.
    Draft,
    /// Best quality.
    #[default]
    Best,
}

impl LayerQuality {
    /// Translate the raw `ldta` value.
    pub fn from_binary(raw: u16) -> Self {
        match raw {
            0 => Self::Wireframe,
            1 => Self::Draft,
            _ => Self::Best,
        }
    }
}

/// Layer sampling quality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingQuality {
    /// Bilinear sampling.
    #[default]
    Bilinear,
    /// Bicubic sampling.
    Bicubic,
}

impl SamplingQuality {
    /// Translate the raw `ldta` bit.
    pub fn from_binary(raw: u8) -> Self {
        if raw == 1 { Self::Bicubic } else { Self::Bilinear }
    }
}

/// Per-layer frame blending mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameBlendingType {
    /// Frame blending disabled on the layer.
    #[default]
    NoFrameBlend,
    /// Frame mix.
    FrameMix,
    /// Pixel motion.
    PixelMotion,
}

impl FrameBlendingType {
    /// Translate the raw `ldta` bit; a disabled frame-blending switch
    /// always reads as [`FrameBlendingType::NoFrameBlend`].
    pub fn from_binary(raw: u8, frame_blending_enabled: bool) -> Self {
        if !frame_blending_enabled {
            Self::NoFrameBlend
        } else if raw == 1 {
            Self::PixelMotion
        } else {
            Self::FrameMix
        }
    }
}

/// Layer auto-orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoOrientType {
    /// No auto-orientation.
    #[default]
    NoAutoOrient,
    /// Orient along the motion path.
    AlongPath,
    /// Orient toward the camera or point of interest (3D layers).
    CameraOrPointOfInterest,
    /// Orient characters toward the camera (per-character 3D text).
    CharactersTowardCamera,
}

/// Kind of layer, before source-item refinement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// Footage-backed (AV) layer.
    #[default]
    Av,
    /// Light layer.
    Light,
    /// Camera layer.
    Camera,
    /// Text layer.
    Text,
    /// Shape layer.
    Shape,
}

impl LayerKind {
    /// Translate the raw `ldta` layer type.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Light,
            2 => Self::Camera,
            3 => Self::Text,
            4 => Self::Shape,
            _ => Self::Av,
        }
    }
}

/// Kind of light on a light layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    /// Parallel light.
    #[default]
    Parallel,
    /// Spot light.
    Spot,
    /// Point light.
    Point,
    /// Ambient light.
    Ambient,
}

impl LightType {
    /// Translate the raw `ldta` value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Spot,
            2 => Self::Point,
            3 => Self::Ambient,
            _ => Self::Parallel,
        }
    }
}

/// Footage alpha interpretation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphaMode {
    /// Straight (unmatted) alpha.
    #[default]
    Straight,
    /// Premultiplied (matted) alpha.
    Premultiplied,
    /// Alpha channel ignored.
    Ignore,
}

impl AlphaMode {
    /// Translate the raw `sspc` value; alpha-less footage always reads as
    /// [`AlphaMode::Ignore`].
    pub fn from_binary(raw: u8, has_alpha: bool) -> Self {
        if !has_alpha {
            return Self::Ignore;
        }
        match raw {
            1 => Self::Premultiplied,
            2 | 3 => Self::Ignore,
            _ => Self::Straight,
        }
    }
}

/// Footage field separation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSeparationType {
    /// No field separation.
    #[default]
    Off,
    /// Upper field first.
    UpperFieldFirst,
    /// Lower field first.
    LowerFieldFirst,
}

impl FieldSeparationType {
    /// Combine the `sspc` separation flag with the field order.
    pub fn from_binary(separation_raw: u8, field_order_raw: u8) -> Self {
        if separation_raw == 0 {
            Self::Off
        } else if field_order_raw == 0 {
            Self::UpperFieldFirst
        } else {
            Self::LowerFieldFirst
        }
    }
}

/// Keyframe interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyframeInterpolationType {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Bezier interpolation.
    Bezier,
    /// Hold.
    Hold,
}

impl KeyframeInterpolationType {
    /// Translate the raw keyframe value (1 / 2 / 3).
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            2 => Self::Bezier,
            3 => Self::Hold,
            _ => Self::Linear,
        }
    }
}

/// Kind of UI control a property exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PropertyControlType {
    Layer,
    Scalar,
    Angle,
    Boolean,
    Color,
    TwoD,
    Enum,
    PaintGroup,
    Slider,
    Curve,
    Group,
    #[default]
    Unknown,
    ThreeD,
}

impl PropertyControlType {
    /// Translate the raw `pard`/`tdb4`-derived value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            0 => Self::Layer,
            2 => Self::Scalar,
            3 => Self::Angle,
            4 => Self::Boolean,
            5 => Self::Color,
            6 => Self::TwoD,
            7 => Self::Enum,
            9 => Self::PaintGroup,
            10 => Self::Slider,
            11 => Self::Curve,
            13 => Self::Group,
            18 => Self::ThreeD,
            _ => Self::Unknown,
        }
    }
}

/// Shape of a property's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PropertyValueType {
    #[default]
    Unknown,
    NoValue,
    ThreeDSpatial,
    ThreeD,
    TwoDSpatial,
    TwoD,
    OneD,
    Color,
    CustomValue,
    Marker,
    LayerIndex,
    MaskIndex,
    Shape,
    TextDocument,
    Lrdr,
    Litm,
    Gide,
    Orientation,
}

/// Auto-kerning mode for text characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum AutoKernType {
    #[default]
    NoAutoKern,
    MetricKern,
    OpticalKern,
}

impl AutoKernType {
    /// Translate the raw character-style value; out-of-range values read
    /// as `None`.
    pub fn from_binary(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::NoAutoKern),
            1 => Some(Self::MetricKern),
            2 => Some(Self::OpticalKern),
            _ => None,
        }
    }
}

/// Leading model applied to text line spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum LeadingType {
    #[default]
    Roman,
    Japanese,
}

impl LeadingType {
    /// Translate the raw style value; out-of-range values read as `None`.
    pub fn from_binary(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Roman),
            1 => Some(Self::Japanese),
            _ => None,
        }
    }
}

/// Paragraph justification for text layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ParagraphJustification {
    #[default]
    LeftJustify,
    RightJustify,
    CenterJustify,
    FullJustifyLastLineLeft,
    FullJustifyLastLineRight,
    FullJustifyLastLineCenter,
    FullJustifyLastLineFull,
}

impl ParagraphJustification {
    /// Translate the raw paragraph-style value; out-of-range values read
    /// as `None`.
    pub fn from_binary(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::LeftJustify),
            1 => Some(Self::RightJustify),
            2 => Some(Self::CenterJustify),
            3 => Some(Self::FullJustifyLastLineLeft),
            4 => Some(Self::FullJustifyLastLineRight),
            5 => Some(Self::FullJustifyLastLineCenter),
            6 => Some(Self::FullJustifyLastLineFull),
            _ => None,
        }
    }
}

/// Render-queue item status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum RqItemStatus {
    WillContinue,
    NeedsOutput,
    #[default]
    Unqueued,
    Queued,
    Rendering,
    UserStopped,
    ErrStopped,
    Done,
}

impl RqItemStatus {
    /// Translate the raw settings value (offset by one from needs-output).
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            0 => Self::NeedsOutput,
            1 => Self::Unqueued,
            2 => Self::Queued,
            3 => Self::Rendering,
            4 => Self::UserStopped,
            5 => Self::ErrStopped,
            6 => Self::Done,
            0xff => Self::WillContinue,
            _ => Self::Unqueued,
        }
    }
}

/// Render log detail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum LogType {
    #[default]
    ErrorsOnly,
    ErrorsAndSettings,
    ErrorsAndPerFrameInfo,
}

impl LogType {
    /// Translate the raw settings value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::ErrorsAndSettings,
            2 => Self::ErrorsAndPerFrameInfo,
            _ => Self::ErrorsOnly,
        }
    }
}

/// What happens to the rendered file after the render finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PostRenderAction {
    #[default]
    None,
    Import,
    ImportAndReplaceUsage,
    SetProxy,
}

impl PostRenderAction {
    /// Translate the raw settings value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Import,
            2 => Self::ImportAndReplaceUsage,
            3 => Self::SetProxy,
            _ => Self::None,
        }
    }

    /// Display label matching the application UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Import => "Import",
            Self::ImportAndReplaceUsage => "Import & Replace Usage",
            Self::SetProxy => "Set Proxy",
        }
    }
}

/// Which range of the comp a render-queue item covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum TimeSpanSource {
    #[default]
    LengthOfComp,
    WorkAreaOnly,
    Custom,
}

impl TimeSpanSource {
    /// Translate the raw settings value (`0xffff` reads as custom).
    pub fn from_binary(raw: i16) -> Self {
        match raw {
            1 => Self::WorkAreaOnly,
            2 | -1 => Self::Custom,
            _ => Self::LengthOfComp,
        }
    }

    /// Display label matching the application UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::LengthOfComp => "Length of Comp",
            Self::WorkAreaOnly => "Work Area Only",
            Self::Custom => "Custom",
        }
    }
}

/// Translate a `-1`-as-current-settings tri-state render setting to its UI
/// label; `labels` covers the non-negative raws.
fn tri_state_label(raw: i16, labels: &'static [&'static str], current: &'static str) -> &'static str {
    if raw < 0 {
        return current;
    }
    labels.get(raw as usize).copied().unwrap_or(current)
}

/// UI label for the render-settings "Quality" field.
pub fn render_quality_label(raw: i16) -> &'static str {
    tri_state_label(raw, &["Wireframe", "Draft", "Best"], "Current Settings")
}

/// UI label for the render-settings "Color Depth" field.
pub fn color_depth_label(raw: i16) -> &'static str {
    tri_state_label(
        raw,
        &[
            "8 bits per channel",
            "16 bits per channel",
            "32 bits per channel",
        ],
        "Current Settings",
    )
}

/// UI label for the render-settings "Motion Blur" field.
pub fn motion_blur_label(raw: i16) -> &'static str {
    tri_state_label(
        raw,
        &[
            "Off for All Layers",
            "On for Checked Layers",
            "Current Settings",
        ],
        "Current Settings",
    )
}

/// UI label for the render-settings "Frame Blending" field.
pub fn frame_blending_label(raw: i16) -> &'static str {
    motion_blur_label(raw)
}

/// UI label for the render-settings "Effects" field.
pub fn effects_label(raw: i16) -> &'static str {
    tri_state_label(raw, &["All Off", "All On", "Current Settings"], "Current Settings")
}

/// UI label for the render-settings "Proxy Use" field.
pub fn proxy_use_label(raw: i16) -> &'static str {
    tri_state_label(
        raw,
        &[
            "Use No Proxies",
            "Use All Proxies",
            "Current Settings",
            "Use Comp Proxies Only",
        ],
        "Current Settings",
    )
}

/// UI label for the render-settings "Solo Switches" field.
pub fn solo_switches_label(raw: i16) -> &'static str {
    tri_state_label(raw, &["All Off", "", "Current Settings"], "Current Settings")
}

/// UI label for the render-settings "Guide Layers" field.
pub fn guide_layers_label(raw: i16) -> &'static str {
    solo_switches_label(raw)
}

/// UI label for the render-settings "Disk Cache" field.
pub fn disk_cache_label(raw: i16) -> &'static str {
    tri_state_label(raw, &["Read Only", "", "Current Settings"], "Current Settings")
}

/// Output-module pixel channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum OutputChannels {
    #[default]
    Rgb,
    Rgba,
    Alpha,
}

impl OutputChannels {
    /// Translate the raw settings value.
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::Rgba,
            2 => Self::Alpha,
            _ => Self::Rgb,
        }
    }

    /// Display label used by output-filename templates.
    pub fn template_label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Alpha => "Alpha",
        }
    }
}

/// Output color premultiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum OutputColorMode {
    #[default]
    StraightUnmatted,
    Premultiplied,
}

impl OutputColorMode {
    /// Translate the raw `Roou` value.
    pub fn from_binary(raw: u8) -> Self {
        if raw == 1 {
            Self::Premultiplied
        } else {
            Self::StraightUnmatted
        }
    }

    /// Display label matching the application UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::StraightUnmatted => "Straight (Unmatted)",
            Self::Premultiplied => "Premultiplied (Matted)",
        }
    }
}

/// Output audio switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum OutputAudio {
    #[default]
    Off,
    On,
    Auto,
}

impl OutputAudio {
    /// Translate the raw `Roou` value (1 / 2 / 3).
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            2 => Self::On,
            3 => Self::Auto,
            _ => Self::Off,
        }
    }
}

/// Output audio bit depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum AudioBitDepth {
    EightBit,
    #[default]
    SixteenBit,
    TwentyFourBit,
    ThirtyTwoBit,
}

impl AudioBitDepth {
    /// Translate the raw `Roou` value (1-4).
    pub fn from_binary(raw: u8) -> Self {
        match raw {
            1 => Self::EightBit,
            3 => Self::TwentyFourBit,
            4 => Self::ThirtyTwoBit,
            _ => Self::SixteenBit,
        }
    }
}

/// Output audio channel layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum AudioChannels {
    Mono,
    #[default]
    Stereo,
}

impl AudioChannels {
    /// Translate the raw `Roou` value.
    pub fn from_binary(raw: u8) -> Self {
        if raw == 1 { Self::Mono } else { Self::Stereo }
    }
}

/// Output container format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum OutputFormat {
    Aiff,
    Avi,
    DpxCineonSequence,
    H264,
    IffSequence,
    JpegSequence,
    Mp3,
    OpenExrSequence,
    PngSequence,
    PhotoshopSequence,
    #[default]
    QuickTime,
    RadianceSequence,
    SgiSequence,
    TiffSequence,
    TargaSequence,
    Wav,
}

impl OutputFormat {
    /// Translate the `Roou` format four-cc; unrecognised codes read as
    /// QuickTime.
    pub fn from_format_id(format_id: &str) -> Self {
        match format_id {
            "AIFF" => Self::Aiff,
            ".AVI" => Self::Avi,
            "sDPX" => Self::DpxCineonSequence,
            "H264" => Self::H264,
            "IFF " => Self::IffSequence,
            "JPEG" => Self::JpegSequence,
            "Mp3 " => Self::Mp3,
            "oEXR" => Self::OpenExrSequence,
            "png!" => Self::PngSequence,
            "8BPS" => Self::PhotoshopSequence,
            "RHDR" => Self::RadianceSequence,
            "SGI " => Self::SgiSequence,
            "TIF " => Self::TiffSequence,
            "TPIC" => Self::TargaSequence,
            "wao_" => Self::Wav,
            _ => Self::QuickTime,
        }
    }

    /// Display label matching the application UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Aiff => "AIFF",
            Self::Avi => "AVI",
            Self::DpxCineonSequence => "DPX/Cineon Sequence",
            Self::H264 => "H.264",
            Self::IffSequence => "IFF Sequence",
            Self::JpegSequence => "JPEG Sequence",
            Self::Mp3 => "MP3",
            Self::OpenExrSequence => "OpenEXR Sequence",
            Self::PngSequence => "PNG Sequence",
            Self::PhotoshopSequence => "Photoshop Sequence",
            Self::QuickTime => "QuickTime",
            Self::RadianceSequence => "Radiance Sequence",
            Self::SgiSequence => "SGI Sequence",
            Self::TiffSequence => "TIFF Sequence",
            Self::TargaSequence => "Targa Sequence",
            Self::Wav => "WAV",
        }
    }
}

/// UI label for an output-module depth value (total bits per pixel).
pub fn output_color_depth_label(depth: i16) -> &'static str {
    match depth {
        -32 => "Floating Point Gray",
        8 => "256 Colors",
        24 => "Millions of Colors",
        32 => "Millions of Colors+",
        40 => "256 Grays",
        48 => "Trillions of Colors",
        64 => "Trillions of Colors+",
        96 => "Floating Point",
        128 => "Floating Point+",
        _ => "Millions of Colors",
    }
}

/// Short depth family label for output-filename templates.
pub fn output_color_depth_template_label(depth: i16) -> &'static str {
    match depth {
        48 | 64 => "Trillions",
        -32 | 96 | 128 => "Float",
        _ => "Millions",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/enums.rs"]
mod tests;
