//! Host Commands
//!
//! Thin wrappers over browser services the editor needs: blocking
//! dialogs and the clipboard.

mod clipboard;
mod dialog;

pub use clipboard::copy_text;
pub use dialog::alert;
