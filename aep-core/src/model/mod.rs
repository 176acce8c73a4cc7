//! Decoded project model.
//!
//! The types here mirror the scripting object model: a [`Project`] owns a
//! flat item list, compositions own layers, layers own property trees, and
//! the render queue hangs off the project. Everything serializes with
//! serde for JSON export.
//!
//! [`Project`]: project::Project

pub mod enums;
pub mod item;
pub mod keyframe;
pub mod layer;
pub mod marker;
pub mod project;
pub mod property;
pub mod render_queue;
pub mod text;
