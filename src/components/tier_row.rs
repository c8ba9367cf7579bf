//! Tier Row Component
//!
//! Colored head, drag handle, edit button and the item area of one tier.
//! The row only becomes draggable while its handle is pressed, so item
//! drags inside it are not hijacked. Item drops anywhere on the row land in
//! this tier.

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop, make_on_handle_mousedown,
    make_on_handle_mouseup,
};
use tier_list_core::{Container, DragPayload, DropTarget, ItemId, TierId};
use web_sys::DragEvent;

use crate::components::{EditTarget, TierItem};
use crate::context::use_app_context;
use crate::dnd::{self, FORMAT_TIER, ITEM_FORMATS, ROW_FORMATS};
use crate::models::TierHead;
use crate::store::store_set_editing;

#[component]
pub fn TierRow(id: TierId) -> impl IntoView {
    let ctx = use_app_context();
    let dnd_signals = ctx.dnd;
    let head = Memo::new(move |_| ctx.read(|list| list.tier(id).map(TierHead::of_tier)).unwrap_or_default());
    let items = move || {
        ctx.read(|list| {
            list.items_in(Container::Tier(id))
                .map(<[ItemId]>::to_vec)
                .unwrap_or_default()
        })
    };

    let key = id.to_string();
    let handle_key = format!("handle-{key}");
    let row_zone = format!("row-{key}");
    let items_zone = format!("items-{key}");

    // Row: tier drag source. Tiers dropped on it go before this one; items
    // dropped outside the item area append to this tier.
    let on_dragstart = {
        let start = make_on_dragstart(dnd_signals, dnd::encode(DragPayload::Tier(id)));
        move |ev: DragEvent| {
            ctx.begin_drag(DragPayload::Tier(id));
            start(ev);
        }
    };
    let on_dragend = make_on_dragend(dnd_signals, move || ctx.cancel_drag());
    let on_row_drop = make_on_drop(dnd_signals, ROW_FORMATS, move |data, _hit| {
        match dnd::decode(&data) {
            Some(payload) => {
                ctx.drop_payload(&data, dnd::row_drop_target(id, payload));
            }
            None => ctx.cancel_drag(),
        }
    });

    // Item area: drops anchor on the item under the pointer
    let on_items_drop = make_on_drop(dnd_signals, ITEM_FORMATS, move |data, hit| {
        let target = DropTarget::for_container(Container::Tier(id), dnd::hit_target(hit.as_deref()));
        ctx.drop_payload(&data, target);
    });

    let armed_key = handle_key.clone();
    let draggable = move || if dnd_signals.is_armed(&armed_key) { "true" } else { "false" };

    let row_class = {
        let key = key.clone();
        let zone = row_zone.clone();
        move || {
            let mut class = String::from("tier-row");
            if dnd_signals.is_dragging_value(FORMAT_TIER, &key) {
                class.push_str(" dragging");
            }
            if dnd_signals.is_over(&zone) {
                if dnd_signals.is_dragging(FORMAT_TIER) {
                    class.push_str(" drop-before");
                } else {
                    class.push_str(" drop-target");
                }
            }
            class
        }
    };
    let items_class = {
        let zone = items_zone.clone();
        move || {
            if dnd_signals.is_over(&zone) {
                "tier-items drop-target"
            } else {
                "tier-items"
            }
        }
    };

    view! {
        <div
            id=key
            class=row_class
            draggable=draggable
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dragover=make_on_dragover(dnd_signals, row_zone.clone(), ROW_FORMATS)
            on:dragleave=make_on_dragleave(dnd_signals, row_zone)
            on:drop=on_row_drop
        >
            <span
                class="tier-handle"
                title="Drag to reorder"
                on:mousedown=make_on_handle_mousedown(dnd_signals, handle_key)
                on:mouseup=make_on_handle_mouseup(dnd_signals)
            >
                "⠿"
            </span>
            <div class="tier-head" style=move || head.with(|h| h.style())>
                {move || head.with(|h| h.name.clone())}
            </div>
            <div
                class=items_class
                on:dragover=make_on_dragover(dnd_signals, items_zone.clone(), ITEM_FORMATS)
                on:dragleave=make_on_dragleave(dnd_signals, items_zone)
                on:drop=on_items_drop
            >
                <For each=items key=|item| *item children=move |item| view! { <TierItem id=item /> } />
            </div>
            <button
                class="tier-edit-btn"
                title="Edit tier"
                on:click=move |_| store_set_editing(&ctx.store, Some(EditTarget::Tier(id)))
            >
                "✎"
            </button>
        </div>
    }
}
