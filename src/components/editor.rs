//! Entity Editor Panel
//!
//! Side panel for the tier or item in `AppState::editing`. Fields apply
//! on change; closing the panel only hides it.

use leptos::prelude::*;
use tier_list_core::{ItemId, TierId};

use crate::components::{DeleteConfirmButton, EditTarget};
use crate::context::use_app_context;
use crate::models::{tier_head_style, ItemCard, TierHead};
use crate::store::{store_set_editing, AppStateStoreFields};

#[component]
pub fn EntityEditor() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let on_close = Callback::new(move |_: ()| store_set_editing(&store, None));

    // the target may disappear under the panel, e.g. on a replacing import
    let target_exists = Memo::new(move |_| {
        store.editing().get().is_some_and(|target| {
            ctx.read(|list| match target {
                EditTarget::Tier(id) => list.tier(id).is_some(),
                EditTarget::Item(id) => list.item(id).is_some(),
            })
        })
    });

    view! {
        {move || {
            store
                .editing()
                .get()
                .filter(|_| target_exists.get())
                .map(|target| {
                    let form = match target {
                        EditTarget::Tier(id) => view! { <TierForm id=id on_close=on_close /> }.into_any(),
                        EditTarget::Item(id) => view! { <ItemForm id=id on_close=on_close /> }.into_any(),
                    };
                    view! {
                        <aside class="editor-panel">
                            {form}
                            <button type="button" class="editor-close" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                        </aside>
                    }
                })
        }}
    }
}

#[component]
fn TierForm(id: TierId, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let head = ctx
        .read_untracked(|list| list.tier(id).map(TierHead::of_tier))
        .unwrap_or_default();
    let (color, set_color) = signal(head.color.clone());

    let on_delete = Callback::new(move |_: ()| {
        ctx.update_list(|list| list.remove_tier(id));
        on_close.run(());
    });

    view! {
        <h2>"Edit tier"</h2>
        <label>
            "Name"
            <input
                type="text"
                value=head.name
                on:change=move |ev| {
                    let name = event_target_value(&ev);
                    ctx.update_list(|list| list.set_tier_name(id, name.trim()));
                }
            />
        </label>
        <label>
            "Color"
            <input
                type="text"
                value=head.color
                on:input=move |ev| set_color.set(event_target_value(&ev))
                on:change=move |ev| {
                    let color = event_target_value(&ev);
                    ctx.update_list(|list| list.set_tier_color(id, color.trim()));
                }
            />
        </label>
        <div class="color-preview" style=move || tier_head_style(&color.get())>"Aa"</div>
        <DeleteConfirmButton label="Delete tier" on_confirm=on_delete />
    }
}

#[component]
fn ItemForm(id: ItemId, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let card = ctx
        .read_untracked(|list| list.item(id).map(ItemCard::of_item))
        .unwrap_or_default();

    let on_delete = Callback::new(move |_: ()| {
        ctx.update_list(|list| list.remove_item(id));
        on_close.run(());
    });

    view! {
        <h2>"Edit item"</h2>
        <label>
            "Image URL"
            <input
                type="text"
                value=card.image
                on:change=move |ev| {
                    let image = event_target_value(&ev);
                    ctx.update_list(|list| list.set_item_image(id, image.trim()));
                }
            />
        </label>
        <label>
            "Label"
            <input
                type="text"
                value=card.text
                on:change=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.update_list(|list| list.set_item_text(id, &text));
                }
            />
        </label>
        <label>
            "Tooltip"
            <input
                type="text"
                value=card.tooltip
                on:change=move |ev| {
                    let tooltip = event_target_value(&ev);
                    ctx.update_list(|list| list.set_item_tooltip(id, &tooltip));
                }
            />
        </label>
        <DeleteConfirmButton label="Delete item" on_confirm=on_delete />
    }
}
