//! Shortcut Bar Component
//!
//! Compact strip of tier labels. Dropping an item on a label appends it
//! to that tier, which saves scrolling on long lists.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};
use tier_list_core::{DropTarget, TierId};

use crate::context::use_app_context;
use crate::dnd::ITEM_FORMATS;
use crate::models::TierHead;

#[component]
pub fn ShortcutBar() -> impl IntoView {
    let ctx = use_app_context();
    let enabled = move || ctx.read(|list| list.has_mirror());
    let entries = move || {
        ctx.read(|list| {
            list.mirror()
                .map(|mirror| mirror.entries().iter().map(|entry| entry.tier).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=enabled>
            <nav class="shortcut-bar">
                <For each=entries key=|tier| *tier children=move |tier| view! { <ShortcutEntry tier=tier /> } />
            </nav>
        </Show>
    }
}

#[component]
fn ShortcutEntry(tier: TierId) -> impl IntoView {
    let ctx = use_app_context();
    let head = Memo::new(move |_| {
        ctx.read(|list| list.mirror().and_then(|mirror| mirror.entry(tier)).map(TierHead::of_entry))
            .unwrap_or_default()
    });
    let zone = format!("shortcut-{tier}");

    let on_drop = make_on_drop(ctx.dnd, ITEM_FORMATS, move |data, _hit| {
        ctx.drop_payload(&data, DropTarget::Mirror(tier));
    });

    let over_zone = zone.clone();
    view! {
        <div
            class=move || if ctx.dnd.is_over(&over_zone) { "tier-shortcut drop-target" } else { "tier-shortcut" }
            style=move || head.with(|h| h.style())
            on:dragover=make_on_dragover(ctx.dnd, zone.clone(), ITEM_FORMATS)
            on:dragleave=make_on_dragleave(ctx.dnd, zone)
            on:drop=on_drop
        >
            {move || head.with(|h| h.name.clone())}
        </div>
    }
}
