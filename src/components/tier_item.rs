//! Tier Item Component
//!
//! One draggable item card. Its element id is the item id so drops can
//! anchor on it.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};
use tier_list_core::{DragPayload, ItemId};
use web_sys::DragEvent;

use crate::components::EditTarget;
use crate::context::use_app_context;
use crate::dnd::{self, FORMAT_ITEM};
use crate::models::ItemCard;
use crate::store::store_set_editing;

#[component]
pub fn TierItem(id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let card = Memo::new(move |_| ctx.read(|list| list.item(id).map(ItemCard::of_item)).unwrap_or_default());

    let key = id.to_string();
    let on_dragstart = {
        let start = make_on_dragstart(ctx.dnd, dnd::encode(DragPayload::Item(id)));
        move |ev: DragEvent| {
            ctx.begin_drag(DragPayload::Item(id));
            start(ev);
        }
    };
    let on_dragend = make_on_dragend(ctx.dnd, move || ctx.cancel_drag());

    let dragging_key = key.clone();
    let class = move || {
        if ctx.dnd.is_dragging_value(FORMAT_ITEM, &dragging_key) {
            "tier-item dragging"
        } else {
            "tier-item"
        }
    };

    view! {
        <div
            id=key
            class=class
            draggable="true"
            title=move || card.with(|c| c.tooltip.clone())
            style=move || card.with(|c| c.style())
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dblclick=move |_| store_set_editing(&ctx.store, Some(EditTarget::Item(id)))
        >
            <span class="tier-item-text" inner_html=move || card.with(|c| c.text.clone())></span>
        </div>
    }
}
