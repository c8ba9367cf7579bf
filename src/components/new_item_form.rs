//! New Item Form Component
//!
//! Adds an item to the unsorted area.

use leptos::prelude::*;
use tier_list_core::Container;

use crate::context::use_app_context;
use crate::store::NoticeLevel;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (image, set_image) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (tooltip, set_tooltip) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (image_value, text_value, tooltip_value) = (image.get(), text.get(), tooltip.get());
        if image_value.trim().is_empty() && text_value.trim().is_empty() {
            return;
        }
        let added = ctx.update_list(|list| {
            list.add_item(Container::Bucket, image_value.trim(), &text_value, &tooltip_value)
        });
        match added {
            Some(Ok(_)) => {
                set_image.set(String::new());
                set_text.set(String::new());
                set_tooltip.set(String::new());
            }
            Some(Err(e)) => ctx.notify(NoticeLevel::Error, e.to_string()),
            None => {}
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Image URL"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Label"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Tooltip"
                prop:value=move || tooltip.get()
                on:input=move |ev| set_tooltip.set(event_target_value(&ev))
            />
            <button type="submit">"Add item"</button>
        </form>
    }
}
