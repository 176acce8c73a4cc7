//! The top-level project model.

use serde::{Deserialize, Serialize};

use crate::model::enums::{
    BitsPerChannel, FootageTimecodeDisplayStartType, FramesCountType, TimeDisplayType,
};
use crate::model::item::{Composition, Footage, Item, ItemData};
use crate::model::layer::Layer;
use crate::model::render_queue::RenderQueue;

/// Id of the implicit root folder that contains every top-level item.
pub const ROOT_FOLDER_ID: u32 = 0;

/// A fully decoded project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Application version that last wrote the project, from the metadata
    /// packet.
    pub ae_version: Option<String>,
    /// Save counter from the file header.
    pub file_revision: Option<u16>,
    /// Project color depth.
    pub bits_per_channel: BitsPerChannel,
    /// How times are displayed.
    pub time_display_type: TimeDisplayType,
    /// Frame numbering origin.
    pub frames_count_type: FramesCountType,
    /// Where footage timecode display starts.
    pub footage_timecode_display_start_type: FootageTimecodeDisplayStartType,
    /// Project frame rate used for time display.
    pub frame_rate: f64,
    /// Expression engine name, recorded by CC 2019 and later.
    pub expression_engine: Option<String>,
    /// Names of effects used in the project, in stored order.
    pub effect_names: Vec<String>,
    /// All items in depth-first folder order, starting with the root
    /// folder.
    pub items: Vec<Item>,
    /// The render queue.
    pub render_queue: RenderQueue,
    /// Raw XMP metadata packet from the end of the file.
    pub xmp_packet: String,
    /// Non-fatal problems encountered while decoding.
    pub warnings: Vec<String>,
}

impl Project {
    /// Find an item by id.
    pub fn item_by_id(&self, item_id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Find a layer anywhere in the project by its persistent id.
    pub fn layer_by_id(&self, layer_id: u32) -> Option<&Layer> {
        self.compositions()
            .flat_map(|(_, comp)| comp.layers.iter())
            .find(|layer| layer.layer_id == layer_id)
    }

    /// Iterate over all compositions with their item ids.
    pub fn compositions(&self) -> impl Iterator<Item = (u32, &Composition)> {
        self.items
            .iter()
            .filter_map(|item| item.as_composition().map(|comp| (item.id, comp)))
    }

    /// Iterate over all footage items with their item ids.
    pub fn footages(&self) -> impl Iterator<Item = (u32, &Footage)> {
        self.items.iter().filter_map(|item| match &item.data {
            ItemData::Footage(footage) => Some((item.id, footage.as_ref())),
            _ => None,
        })
    }

    /// Iterate over all folders, including the root.
    pub fn folders(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_folder())
    }

    /// Ids of compositions with a layer sourced from the given item.
    pub fn used_in(&self, item_id: u32) -> Vec<u32> {
        self.compositions()
            .filter(|(_, comp)| {
                comp.layers
                    .iter()
                    .any(|layer| layer.source_id == Some(item_id))
            })
            .map(|(comp_id, _)| comp_id)
            .collect()
    }

    /// Items directly contained in the given folder.
    pub fn items_in(&self, folder_id: u32) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.parent_folder_id == Some(folder_id))
    }
}
