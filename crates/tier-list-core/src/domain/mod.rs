//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod ids;
mod item;
mod tier;

pub use entity::{position_of, DomainError, DomainResult, Entity};
pub use ids::{IdAllocator, ItemId, ParseIdError, TierId};
pub use item::{Container, Item, ItemField};
pub use tier::{Tier, TierField};
