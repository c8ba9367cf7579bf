//! Application Context
//!
//! Shared state provided via Leptos Context API. Owns the rank list, the
//! drag session and the serializer; every model access from a component
//! goes through here.

use leptos::prelude::*;
use leptos_dragdrop::{DndSignals, DragData};
use tier_list_core::{
    Config, DomainError, DomainResult, DragPayload, DragSession, DropOutcome, DropTarget, ImportReport, RankList,
    Serializer,
};

use crate::dnd;
use crate::store::{store_bump_revision, store_set_notice, AppStateStoreFields, AppStore, NoticeLevel};

/// Which document shape the import dialog parses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportKind {
    List,
    ItemsOnly,
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    list: StoredValue<RankList, LocalStorage>,
    session: StoredValue<DragSession>,
    serializer: StoredValue<Serializer>,
    config: StoredValue<Config>,
    pub dnd: DndSignals,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(config: Config, dnd: DndSignals, store: AppStore) -> Self {
        let mut list = RankList::from_config(&config);
        list.subscribe(move |event| {
            tracing::trace!(?event, "model event");
            store_bump_revision(&store);
        });
        tracing::info!(
            tiers = list.tier_count(),
            shortcuts = list.has_mirror(),
            "tier list ready"
        );
        Self {
            list: StoredValue::new_local(list),
            session: StoredValue::new(DragSession::new()),
            serializer: StoredValue::new(Serializer::from_config(&config)),
            config: StoredValue::new(config),
            dnd,
            store,
        }
    }

    /// Read the list, tracking model changes
    pub fn read<R>(&self, f: impl FnOnce(&RankList) -> R) -> R {
        self.store.revision().track();
        self.list.with_value(f)
    }

    /// Read the list without subscribing the caller
    pub fn read_untracked<R>(&self, f: impl FnOnce(&RankList) -> R) -> R {
        self.list.with_value(f)
    }

    /// Mutate the list; subscribers fire for whatever changed
    pub fn update_list<R>(&self, f: impl FnOnce(&mut RankList) -> R) -> Option<R> {
        let mut result = None;
        self.list.update_value(|list| result = Some(f(list)));
        result
    }

    pub fn config<R>(&self, f: impl FnOnce(&Config) -> R) -> R {
        self.config.with_value(f)
    }

    // ========================
    // Drag session
    // ========================

    pub fn begin_drag(&self, payload: DragPayload) {
        self.session.update_value(|session| session.begin(payload));
    }

    pub fn cancel_drag(&self) {
        self.session.update_value(|session| session.cancel());
    }

    /// Resolve a drop. Data that does not match the armed payload (a drag
    /// from another page, or one whose start we never saw) is ignored.
    pub fn drop_payload(&self, data: &DragData, target: DropTarget) -> bool {
        let armed = self.session.with_value(|session| session.payload());
        let payload = dnd::decode(data);
        if payload.is_none() || payload != armed {
            tracing::debug!(format = data.format, value = %data.value, ?armed, "foreign drop ignored");
            self.cancel_drag();
            return false;
        }
        let mut session = self.session.get_value();
        let outcome = self.update_list(|list| session.drop_on(list, target));
        self.session.set_value(session);
        matches!(outcome, Some(DropOutcome::Applied { changed: true, .. }))
    }

    // ========================
    // Import / export
    // ========================

    /// Parse and apply an import. User-facing failures raise an alert and
    /// a notice; the model is untouched on error.
    pub fn import(&self, text: &str, kind: ImportKind) -> DomainResult<ImportReport> {
        let serializer = self.serializer.get_value();
        let result = self
            .update_list(|list| match kind {
                ImportKind::List => serializer.import(list, text),
                ImportKind::ItemsOnly => serializer.import_items_only(list, text),
            })
            .unwrap_or_else(|| Err(DomainError::Internal("tier list disposed".to_string())));

        match &result {
            Ok(report) => self.notify(
                NoticeLevel::Info,
                format!("Imported {} tiers and {} items", report.tiers.len(), report.items.len()),
            ),
            Err(e) => {
                if e.is_user_facing() {
                    crate::commands::alert("Invalid JSON");
                }
                self.notify(NoticeLevel::Error, e.to_string());
            }
        }
        result
    }

    /// Pretty JSON of the current list; also written to the log
    pub fn export(&self) -> DomainResult<String> {
        let serializer = self.serializer.get_value();
        let json = self.list.with_value(|list| serializer.export_json(list, true))?;
        tracing::info!(json = %json, "list exported");
        Ok(json)
    }

    // ========================
    // Editing
    // ========================

    /// Append a tier with the configured defaults
    pub fn add_default_tier(&self) {
        let (name, color) = self.config(|c| (c.default_tier_name.clone(), c.default_tier_color.clone()));
        self.update_list(|list| list.add_tier(&name, &color));
    }

    pub fn notify(&self, level: NoticeLevel, message: String) {
        store_set_notice(&self.store, level, message);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
