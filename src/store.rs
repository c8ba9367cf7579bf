//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The rank list
//! itself lives outside the store (see `context`); `revision` is bumped on
//! every model event so views reading the list re-run.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::EditTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

/// Transient message shown above the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes repeated identical messages for auto-dismiss
    pub seq: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Model change counter
    pub revision: u64,
    pub notice: Option<Notice>,
    /// Entity open in the editor panel
    pub editing: Option<EditTarget>,
    pub import_open: bool,
    /// Exported document while the export dialog is open
    pub export_json: Option<String>,
    pub notice_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_bump_revision(store: &AppStore) {
    *store.revision().write() += 1;
}

pub fn store_set_notice(store: &AppStore, level: NoticeLevel, message: String) {
    let field = store.notice_seq();
    let seq = {
        let mut seq = field.write();
        *seq = seq.wrapping_add(1);
        *seq
    };
    *store.notice().write() = Some(Notice { seq, level, message });
}

/// Clear the notice if it is still the one numbered `seq`
pub fn store_dismiss_notice(store: &AppStore, seq: u32) {
    let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.seq));
    if current == Some(seq) {
        *store.notice().write() = None;
    }
}

pub fn store_set_editing(store: &AppStore, target: Option<EditTarget>) {
    *store.editing().write() = target;
}

pub fn store_set_import_open(store: &AppStore, open: bool) {
    *store.import_open().write() = open;
}

pub fn store_set_export(store: &AppStore, json: Option<String>) {
    *store.export_json().write() = json;
}
