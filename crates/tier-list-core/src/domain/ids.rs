//! Typed Identifiers
//!
//! Tier and item ids are separate types so a tier id can never be handed to
//! an item operation. Their text form (`tier-3`, `item-12`) doubles as the
//! DOM element id and the drag payload value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", Self::PREFIX, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .and_then(|digits| digits.parse::<u32>().ok())
                    .map($name)
                    .ok_or_else(|| ParseIdError(s.to_string()))
            }
        }
    };
}

typed_id!(
    /// Identifier of a tier row
    TierId,
    "tier"
);

typed_id!(
    /// Identifier of a rankable item
    ItemId,
    "item"
);

/// Text did not match `<prefix>-<number>`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an id: {0:?}")]
pub struct ParseIdError(pub String);

/// Per-list id source. Each kind counts up independently from zero.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_tier: u32,
    next_item: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_tier(&mut self) -> TierId {
        let id = TierId(self.next_tier);
        self.next_tier += 1;
        id
    }

    pub fn next_item(&mut self) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        id
    }
}
