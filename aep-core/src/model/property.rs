//! Property and property-group models making up a layer's parameter tree.

use serde::{Deserialize, Serialize};

use crate::model::enums::{PropertyControlType, PropertyValueType};
use crate::model::keyframe::Keyframe;
use crate::model::text::{FontInfo, TextDocument};

/// A static property value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// One-dimensional scalar.
    OneD(f64),
    /// Two-dimensional vector.
    TwoD([f64; 2]),
    /// Three-dimensional vector.
    ThreeD([f64; 3]),
    /// RGBA color in the 0-255 range.
    Color([f64; 4]),
    /// Component list for dimensions without a dedicated shape.
    Components(Vec<f64>),
}

impl PropertyValue {
    /// Build a value from raw components, shaped by the value type.
    pub fn from_components(value_type: PropertyValueType, components: &[f64]) -> Option<Self> {
        match (value_type, components) {
            (PropertyValueType::OneD, [x, ..]) => Some(Self::OneD(*x)),
            (PropertyValueType::TwoD | PropertyValueType::TwoDSpatial, [x, y, ..]) => {
                Some(Self::TwoD([*x, *y]))
            }
            (
                PropertyValueType::ThreeD
                | PropertyValueType::ThreeDSpatial
                | PropertyValueType::Orientation,
                [x, y, z, ..],
            ) => Some(Self::ThreeD([*x, *y, *z])),
            (PropertyValueType::Color, [a, r, g, b, ..]) => Some(Self::Color([*a, *r, *g, *b])),
            (_, []) => None,
            (_, rest) => Some(Self::Components(rest.to_vec())),
        }
    }
}

/// A leaf property of a layer or effect.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique scripting identifier, e.g. `ADBE Position`.
    pub match_name: String,
    /// Display name shown in the timeline.
    pub name: String,
    /// One-based position within the parent group.
    pub index: u32,
    /// Kind of UI control.
    pub control_type: PropertyControlType,
    /// Shape of the value.
    pub value_type: PropertyValueType,
    /// Static value, absent for animated or valueless properties.
    pub value: Option<PropertyValue>,
    /// Keyframes, empty for static properties.
    pub keyframes: Vec<Keyframe>,
    /// Expression source, if one is attached.
    pub expression: Option<String>,
    /// Whether the attached expression is active.
    pub expression_enabled: bool,
    /// Eyeball switch state.
    pub enabled: bool,
    /// Whether the stored stream is flagged animated.
    pub animated: bool,
    /// Whether the value is interpolated spatially.
    pub is_spatial: bool,
    /// Whether a multi-dimensional value has its dimensions split into
    /// separate streams.
    pub dimensions_separated: bool,
    /// Whether the dimension ratio is locked in the UI.
    pub locked_ratio: bool,
    /// Stored component count.
    pub dimensions: u16,
    /// Option labels for enum controls.
    pub enum_options: Vec<String>,
    /// Last value recorded by the effect parameter definition.
    pub last_value: Option<PropertyValue>,
    /// Default value recorded by the effect parameter definition.
    pub default_value: Option<PropertyValue>,
    /// Lower bound recorded by the effect parameter definition.
    pub min_value: Option<f64>,
    /// Upper bound recorded by the effect parameter definition.
    pub max_value: Option<f64>,
    /// Decoded text documents, one per keyframe of a source-text property.
    pub text_documents: Vec<TextDocument>,
    /// Fonts referenced by the text documents.
    pub fonts: Vec<FontInfo>,
}

impl Property {
    /// A property with only its identity filled in.
    pub fn named(match_name: &str, name: &str) -> Self {
        Self {
            match_name: match_name.to_owned(),
            name: name.to_owned(),
            enabled: true,
            ..Self::default()
        }
    }

    /// Whether this property holds at least one keyframe.
    pub fn is_animated(&self) -> bool {
        !self.keyframes.is_empty()
    }

    /// Whether the value can change over time: animated, or driven by an
    /// enabled non-empty expression.
    pub fn is_time_varying(&self) -> bool {
        self.is_animated()
            || (self.expression_enabled
                && self.expression.as_deref().is_some_and(|e| !e.is_empty()))
    }
}

/// A named group of properties and nested groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyGroup {
    /// Unique scripting identifier, e.g. `ADBE Transform Group`.
    pub match_name: String,
    /// Display name shown in the timeline.
    pub name: String,
    /// One-based position within the parent group.
    pub index: u32,
    /// Eyeball switch state.
    pub enabled: bool,
    /// Whether this group is an effect instance.
    pub is_effect: bool,
    /// Child properties and groups, in stored order.
    pub children: Vec<PropertyNode>,
}

impl PropertyGroup {
    /// A group with only its identity filled in.
    pub fn named(match_name: &str, name: &str) -> Self {
        Self {
            match_name: match_name.to_owned(),
            name: name.to_owned(),
            enabled: true,
            ..Self::default()
        }
    }

    /// Find a direct child property by match name.
    pub fn property(&self, match_name: &str) -> Option<&Property> {
        self.children.iter().find_map(|node| match node {
            PropertyNode::Property(p) if p.match_name == match_name => Some(p.as_ref()),
            _ => None,
        })
    }

    /// Find a direct child group by match name.
    pub fn group(&self, match_name: &str) -> Option<&PropertyGroup> {
        self.children.iter().find_map(|node| match node {
            PropertyNode::Group(g) if g.match_name == match_name => Some(g.as_ref()),
            _ => None,
        })
    }

    /// Iterate over direct child properties.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.children.iter().filter_map(|node| match node {
            PropertyNode::Property(p) => Some(p.as_ref()),
            PropertyNode::Group(_) => None,
        })
    }

    /// Iterate over direct child groups.
    pub fn groups(&self) -> impl Iterator<Item = &PropertyGroup> {
        self.children.iter().filter_map(|node| match node {
            PropertyNode::Group(g) => Some(g.as_ref()),
            PropertyNode::Property(_) => None,
        })
    }
}

/// A node in the property tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyNode {
    /// Leaf property.
    Property(Box<Property>),
    /// Nested group.
    Group(Box<PropertyGroup>),
}

impl PropertyNode {
    /// The match name of the wrapped node.
    pub fn match_name(&self) -> &str {
        match self {
            Self::Property(p) => &p.match_name,
            Self::Group(g) => &g.match_name,
        }
    }
}
