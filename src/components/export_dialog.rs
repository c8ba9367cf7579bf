//! Export Dialog Component
//!
//! Shows the exported JSON with a copy-to-clipboard button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_set_export, AppStateStoreFields, NoticeLevel};

#[component]
pub fn ExportDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let copy = move |_: web_sys::MouseEvent| {
        let Some(json) = store.export_json().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match commands::copy_text(&json).await {
                Ok(()) => ctx.notify(NoticeLevel::Info, "Copied to clipboard".to_string()),
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    ctx.notify(NoticeLevel::Error, format!("Copy failed: {e}"));
                }
            }
        });
    };

    view! {
        {move || {
            store
                .export_json()
                .get()
                .map(|json| {
                    view! {
                        <div class="modal-backdrop">
                            <div class="modal export-dialog">
                                <h2>"Export"</h2>
                                <textarea rows="12" readonly=true prop:value=json></textarea>
                                <div class="modal-actions">
                                    <button type="button" on:click=copy>"Copy"</button>
                                    <button type="button" on:click=move |_| store_set_export(&store, None)>
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
