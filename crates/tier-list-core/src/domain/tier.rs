//! Tier Entity
//!
//! A named, colored row. Item order inside a tier is rank order,
//! most preferred first.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::{ItemId, TierId};

/// Tier attribute names, carried by change events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierField {
    Name,
    Color,
}

/// A ranked row of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Unique identifier
    pub id: TierId,
    /// Row label
    pub name: String,
    /// Head color (hex or rgb syntax)
    pub color: String,
    /// Items in rank order
    pub(crate) items: Vec<ItemId>,
}

impl Tier {
    pub fn new(id: TierId, name: String, color: String) -> Self {
        Self {
            id,
            name,
            color,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Entity for Tier {
    type Id = TierId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdAllocator;

    #[test]
    fn test_tier_creation() {
        let mut ids = IdAllocator::new();
        let tier = Tier::new(ids.next_tier(), "S".to_string(), "#FF7F7F".to_string());
        assert_eq!(tier.id().to_string(), "tier-0");
        assert_eq!(tier.name, "S");
        assert!(tier.is_empty());
    }
}
