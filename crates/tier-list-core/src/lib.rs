//! Tier List Core
//!
//! Layered model for the tier list editor:
//! - domain: entities, typed ids and errors
//! - rank_list: the tier/item model and its mutation operations
//! - drag: drag session state machine and drop dispatch
//! - mirror: shortcut strip kept in lockstep with the tiers
//! - serializer: JSON import/export
//! - color: brightness and contrast text color
//! - config: editor variants and defaults

pub mod color;
pub mod config;
pub mod domain;
pub mod drag;
pub mod mirror;
pub mod rank_list;
pub mod serializer;


pub use color::{brightness, contrast_color, parse_color, ContrastColor, Rgb};
pub use config::{Config, ImportMode, SeedTier};
pub use domain::{Container, DomainError, DomainResult, Entity, Item, ItemField, ItemId, Tier, TierField, TierId};
pub use drag::{apply_drop, DragPayload, DragSession, DragState, DropOutcome, DropTarget, HitTarget, PayloadKind};
pub use mirror::{MirrorEntry, ShortcutMirror};
pub use rank_list::{ModelEvent, RankList, SubscriptionId};
pub use serializer::{Document, ImportReport, ItemDoc, ItemsDocument, RowDoc, Serializer};
