//! Item Entity
//!
//! A rankable unit: an image, a label and a tooltip. Items always live in
//! exactly one container (a tier or the unsorted bucket).

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::{ItemId, TierId};

/// Where an item currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum Container {
    Tier(TierId),
    Bucket,
}

impl Container {
    pub fn tier(self) -> Option<TierId> {
        match self {
            Container::Tier(id) => Some(id),
            Container::Bucket => None,
        }
    }
}

/// Item attribute names, carried by change events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Image,
    Text,
    Tooltip,
}

/// A rankable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Background image URL (not validated)
    pub image: String,
    /// Label, may contain markup
    pub text: String,
    /// Hover text
    pub tooltip: String,
}

impl Item {
    pub fn new(id: ItemId, image: String, text: String, tooltip: String) -> Self {
        Self {
            id,
            image,
            text,
            tooltip,
        }
    }

    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Image => &self.image,
            ItemField::Text => &self.text,
            ItemField::Tooltip => &self.tooltip,
        }
    }

    /// Overwrite one attribute. Returns false when the value is unchanged.
    pub(crate) fn set_field(&mut self, field: ItemField, value: String) -> bool {
        let slot = match field {
            ItemField::Image => &mut self.image,
            ItemField::Text => &mut self.text,
            ItemField::Tooltip => &mut self.tooltip,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
