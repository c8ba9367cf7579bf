//! Drag Payload Encoding
//!
//! Maps model payloads onto the typed `DataTransfer` formats used by
//! `leptos_dragdrop`, and element ids back onto hit targets.

use leptos_dragdrop::DragData;
use tier_list_core::{DragPayload, DropTarget, HitTarget, TierId};

pub const FORMAT_TIER: &str = "tier";
pub const FORMAT_ITEM: &str = "item";

/// Formats accepted by zones that reorder tiers
pub const TIER_FORMATS: &[&str] = &[FORMAT_TIER];
/// Formats accepted by zones that hold items
pub const ITEM_FORMATS: &[&str] = &[FORMAT_ITEM];
/// Tier rows take both: tiers reorder, items append
pub const ROW_FORMATS: &[&str] = &[FORMAT_TIER, FORMAT_ITEM];

pub fn encode(payload: DragPayload) -> DragData {
    match payload {
        DragPayload::Tier(id) => DragData {
            format: FORMAT_TIER,
            value: id.to_string(),
        },
        DragPayload::Item(id) => DragData {
            format: FORMAT_ITEM,
            value: id.to_string(),
        },
    }
}

/// Payload carried by drag data; `None` for unknown formats or values
pub fn decode(data: &DragData) -> Option<DragPayload> {
    match data.format {
        FORMAT_TIER => data.value.parse().ok().map(DragPayload::Tier),
        FORMAT_ITEM => data.value.parse().ok().map(DragPayload::Item),
        _ => None,
    }
}

/// Target for a payload dropped on a tier row outside its item area
pub fn row_drop_target(tier: TierId, payload: DragPayload) -> DropTarget {
    match payload {
        DragPayload::Tier(_) => DropTarget::TierList { before: Some(tier) },
        DragPayload::Item(_) => DropTarget::Tier { tier, before: None },
    }
}

pub fn hit_target(element_id: Option<&str>) -> HitTarget {
    element_id.map(HitTarget::parse).unwrap_or(HitTarget::Other)
}
