//! Tier List App
//!
//! Toolbar and shortcut strip on top, the tier rows, then the unsorted
//! area. The editor panel and dialogs overlay the layout.

use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;
use tier_list_core::Config;

use crate::components::{
    EntityEditor, ExportDialog, ImportDialog, NoticeBanner, ShortcutBar, TierList, Toolbar, UnsortedArea,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store: AppStore = AppStore::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(config, create_dnd_signals(), store));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <Toolbar />
                <NoticeBanner />
                <ShortcutBar />
                <TierList />
                <UnsortedArea />
            </main>
            <EntityEditor />
        </div>
        <ImportDialog />
        <ExportDialog />
    }
}
