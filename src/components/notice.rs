//! Notice Banner Component
//!
//! Shows the current notice and dismisses it after a delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_dismiss_notice, AppStateStoreFields};

const NOTICE_DISMISS_MS: u32 = 4_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    Effect::new(move |_| {
        if let Some(seq) = store.notice().with(|n| n.as_ref().map(|n| n.seq)) {
            Timeout::new(NOTICE_DISMISS_MS, move || store_dismiss_notice(&store, seq)).forget();
        }
    });

    view! {
        {move || {
            store
                .notice()
                .get()
                .map(|notice| {
                    let seq = notice.seq;
                    view! {
                        <div class=notice.level.class() role="status">
                            <span>{notice.message}</span>
                            <button type="button" on:click=move |_| store_dismiss_notice(&store, seq)>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
