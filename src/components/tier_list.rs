//! Tier List Component
//!
//! Container of tier rows. Tier drops that miss every row append.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};
use tier_list_core::DropTarget;

use crate::components::TierRow;
use crate::context::use_app_context;
use crate::dnd::{self, TIER_FORMATS};

const ZONE: &str = "tier-list";

#[component]
pub fn TierList() -> impl IntoView {
    let ctx = use_app_context();
    let tiers = move || ctx.read(|list| list.tier_ids());
    let is_empty = move || ctx.read(|list| list.tier_count() == 0);

    let on_drop = make_on_drop(ctx.dnd, TIER_FORMATS, move |data, hit| {
        ctx.drop_payload(&data, DropTarget::for_tier_list(dnd::hit_target(hit.as_deref())));
    });

    view! {
        <section
            class=move || if ctx.dnd.is_over(ZONE) { "tier-list drop-target" } else { "tier-list" }
            on:dragover=make_on_dragover(ctx.dnd, ZONE.to_string(), TIER_FORMATS)
            on:dragleave=make_on_dragleave(ctx.dnd, ZONE.to_string())
            on:drop=on_drop
        >
            <For each=tiers key=|tier| *tier children=move |tier| view! { <TierRow id=tier /> } />
            <Show when=is_empty>
                <p class="empty-hint">"No tiers yet. Add one or import a list."</p>
            </Show>
        </section>
    }
}
