//! Composition and layer markers.

use serde::{Deserialize, Serialize};

use crate::model::enums::Label;

/// A marker on a layer or on a composition's marker stream.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker time in composition frames.
    pub frame: f64,
    /// Marker duration in frames.
    pub frame_duration: f64,
    /// Comment shown on the marker.
    pub comment: String,
    /// Chapter link.
    pub chapter: String,
    /// Web link URL.
    pub url: String,
    /// Web link frame target.
    pub frame_target: String,
    /// Cue point name.
    pub cue_point_name: String,
    /// Cue point parameters as name/value pairs, in stored order.
    pub params: Vec<(String, String)>,
    /// Label color index.
    pub label: Label,
    /// Whether the marker spans a protected region.
    pub protected_region: bool,
    /// Whether the cue point is a navigation event rather than an event cue.
    pub navigation: bool,
}

impl Marker {
    /// Whether the cue point fires as an event (the complement of
    /// [`navigation`](Self::navigation)).
    pub fn event_cue_point(&self) -> bool {
        !self.navigation
    }
}
