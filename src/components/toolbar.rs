//! Toolbar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_export, store_set_import_open, NoticeLevel};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let counts = move || ctx.read(|list| format!("{} tiers, {} items", list.tier_count(), list.item_count()));

    let export = move |_: web_sys::MouseEvent| match ctx.export() {
        Ok(json) => store_set_export(&store, Some(json)),
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            ctx.notify(NoticeLevel::Error, e.to_string());
        }
    };

    view! {
        <header class="toolbar">
            <h1>"Tier List"</h1>
            <button type="button" on:click=move |_| ctx.add_default_tier()>"Add tier"</button>
            <button type="button" on:click=move |_| store_set_import_open(&store, true)>"Import"</button>
            <button type="button" on:click=export>"Export"</button>
            <span class="toolbar-count">{counts}</span>
        </header>
    }
}
