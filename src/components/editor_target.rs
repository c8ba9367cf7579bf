//! Edit Target Type
//!
//! What the editor panel is bound to.

use tier_list_core::{ItemId, TierId};

/// Either a tier (name, color) or an item (image, text, tooltip)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Tier(TierId),
    Item(ItemId),
}
