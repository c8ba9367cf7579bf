//! Import Dialog Component
//!
//! Paste a list document (or a flat item list when enabled) and import it.
//! The dialog stays open with the text intact when parsing fails.

use leptos::prelude::*;

use crate::context::{use_app_context, ImportKind};
use crate::store::{store_set_import_open, AppStateStoreFields};

#[component]
pub fn ImportDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let items_only_enabled = ctx.config(|c| c.items_only_import);
    let replaces = ctx.config(|c| c.import_mode == tier_list_core::ImportMode::Replace);

    let (text, set_text) = signal(String::new());
    let (kind, set_kind) = signal(ImportKind::List);

    let close = move || {
        store_set_import_open(&store, false);
        set_text.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = text.get_untracked();
        if ctx.import(&input, kind.get_untracked()).is_ok() {
            close();
        }
    };

    let kind_button = move |value: ImportKind, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || if kind.get() == value { "kind-btn active" } else { "kind-btn" }
                on:click=move |_| set_kind.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <Show when=move || store.import_open().get()>
            <div class="modal-backdrop">
                <form class="modal import-dialog" on:submit=submit>
                    <h2>"Import"</h2>
                    <Show when=move || items_only_enabled>
                        <div class="kind-selector">
                            {kind_button(ImportKind::List, "Tier list")}
                            {kind_button(ImportKind::ItemsOnly, "Items only")}
                        </div>
                    </Show>
                    <Show when=move || replaces && kind.get() == ImportKind::List>
                        <p class="warning">"Importing a list replaces the current one."</p>
                    </Show>
                    <textarea
                        rows="12"
                        placeholder=move || match kind.get() {
                            ImportKind::List => r#"{ "rows": [...], "unsorted": [...] }"#,
                            ImportKind::ItemsOnly => r#"{ "items": [...] }"#,
                        }
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
                    <div class="modal-actions">
                        <button type="submit">"Import"</button>
                        <button type="button" on:click=move |_| close()>"Cancel"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
