//! Parser for Adobe After Effects `.aep` project files.
//!
//! An `.aep` file is a RIFX container: big-endian length-prefixed chunks,
//! some of them `LIST`s nesting further chunks, followed by an XMP packet.
//! This crate decodes the container into a chunk tree and assembles the
//! tree into a typed project graph mirroring the scripting object model.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: raw bytes -> [`chunk::tree::Rifx`] (the chunk tree)
//! 2. **Assemble**: chunk tree -> [`model::project::Project`] (items,
//!    layers, properties, keyframes, markers, render queue)
//! 3. **Resolve** (optional): derive values the file only stores as
//!    templates, such as output file names
//!
//! The decoder fails fast with a typed [`AepError`] on a malformed
//! envelope and tolerates unknown chunk tags, so projects written by
//! newer application versions still parse.
//!
//! # Getting started
//!
//! ```no_run
//! let data = std::fs::read("project.aep")?;
//! let project = aep::parse_project(&data)?;
//! for (item_id, comp) in project.compositions() {
//!     println!("{item_id}: {}x{} @ {} fps", comp.width, comp.height, comp.frame_rate);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod assemble;
pub mod chunk;
pub mod cos;
pub mod foundation;
pub mod model;
pub mod resolve;

pub use assemble::parse_project;
pub use chunk::tree::{Chunk, ChunkData, Rifx};
pub use foundation::error::{AepError, AepResult};
pub use model::item::{Composition, Footage, FootageSource, Item, ItemData};
pub use model::keyframe::{Keyframe, KeyframeValue};
pub use model::layer::Layer;
pub use model::marker::Marker;
pub use model::project::Project;
pub use model::property::{Property, PropertyGroup, PropertyNode, PropertyValue};
pub use model::render_queue::{OutputModule, RenderQueue, RenderQueueItem, RenderSettings};
pub use resolve::output::resolve_output_file;
