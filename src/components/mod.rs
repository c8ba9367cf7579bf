//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod editor;
mod editor_target;
mod export_dialog;
mod import_dialog;
mod new_item_form;
mod notice;
mod shortcut_bar;
mod tier_item;
mod tier_list;
mod tier_row;
mod toolbar;
mod unsorted_area;

pub use delete_confirm_button::DeleteConfirmButton;
pub use editor::EntityEditor;
pub use editor_target::EditTarget;
pub use export_dialog::ExportDialog;
pub use import_dialog::ImportDialog;
pub use new_item_form::NewItemForm;
pub use notice::NoticeBanner;
pub use shortcut_bar::ShortcutBar;
pub use tier_item::TierItem;
pub use tier_list::TierList;
pub use tier_row::TierRow;
pub use toolbar::Toolbar;
pub use unsorted_area::UnsortedArea;
