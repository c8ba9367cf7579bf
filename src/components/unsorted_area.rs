//! Unsorted Area Component
//!
//! The bucket: items not yet placed in a tier, plus the form to add more.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};
use tier_list_core::{Container, DropTarget};

use crate::components::{NewItemForm, TierItem};
use crate::context::use_app_context;
use crate::dnd::{self, ITEM_FORMATS};

const ZONE: &str = "bucket";

#[component]
pub fn UnsortedArea() -> impl IntoView {
    let ctx = use_app_context();
    let items = move || ctx.read(|list| list.bucket().to_vec());
    let count = move || ctx.read(|list| list.bucket().len());

    let on_drop = make_on_drop(ctx.dnd, ITEM_FORMATS, move |data, hit| {
        let target = DropTarget::for_container(Container::Bucket, dnd::hit_target(hit.as_deref()));
        ctx.drop_payload(&data, target);
    });

    view! {
        <section class="unsorted">
            <h2>"Unsorted " <span class="count">{count}</span></h2>
            <div
                id=ZONE
                class=move || if ctx.dnd.is_over(ZONE) { "unsorted-items drop-target" } else { "unsorted-items" }
                on:dragover=make_on_dragover(ctx.dnd, ZONE.to_string(), ITEM_FORMATS)
                on:dragleave=make_on_dragleave(ctx.dnd, ZONE.to_string())
                on:drop=on_drop
            >
                <For each=items key=|item| *item children=move |item| view! { <TierItem id=item /> } />
            </div>
            <NewItemForm />
        </section>
    }
}
