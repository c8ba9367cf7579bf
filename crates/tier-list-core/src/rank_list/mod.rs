//! Rank List
//!
//! The in-memory model of one tier list session: ordered tiers, each with
//! ordered items, plus the unsorted bucket. Operations are split across:
//! - tier_ops: add, move, remove and edit tiers
//! - item_ops: add, move, remove and edit items
//! - positioning: insert-before helpers
//! - events: change notifications
//!
//! Every item is owned by exactly one container at all times.

mod events;
mod item_ops;
pub(crate) mod positioning;
mod tier_ops;

use std::collections::HashMap;

pub use events::{ModelEvent, SubscriptionId};

use crate::config::Config;
use crate::domain::{
    position_of, Container, DomainError, DomainResult, IdAllocator, Item, ItemId, Tier, TierId,
};
use crate::mirror::ShortcutMirror;
use events::Observers;

#[derive(Debug, Default)]
pub struct RankList {
    ids: IdAllocator,
    tiers: Vec<Tier>,
    bucket: Vec<ItemId>,
    items: HashMap<ItemId, Item>,
    owners: HashMap<ItemId, Container>,
    mirror: Option<ShortcutMirror>,
    observers: Observers,
}

impl RankList {
    /// Empty list without shortcuts
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty list that maintains a shortcut mirror
    pub fn with_mirror() -> Self {
        Self {
            mirror: Some(ShortcutMirror::new()),
            ..Self::default()
        }
    }

    /// List shaped by configuration, with the configured starter tiers
    pub fn from_config(config: &Config) -> Self {
        let mut list = if config.shortcuts {
            Self::with_mirror()
        } else {
            Self::new()
        };
        for seed in &config.seed_tiers {
            list.add_tier(&seed.name, &seed.color);
        }
        list
    }

    // ========================
    // Reads
    // ========================

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn tier(&self, id: TierId) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    pub fn tier_ids(&self) -> Vec<TierId> {
        self.tiers.iter().map(|t| t.id).collect()
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Unsorted items in display order
    pub fn bucket(&self) -> &[ItemId] {
        &self.bucket
    }

    /// Item ids of a container in order, `None` for an unknown tier
    pub fn items_in(&self, container: Container) -> Option<&[ItemId]> {
        match container {
            Container::Bucket => Some(&self.bucket),
            Container::Tier(id) => self.tier(id).map(|t| t.items()),
        }
    }

    pub fn container_of(&self, item: ItemId) -> Option<Container> {
        self.owners.get(&item).copied()
    }

    pub fn contains_container(&self, container: Container) -> bool {
        match container {
            Container::Bucket => true,
            Container::Tier(id) => self.tier(id).is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty() && self.items.is_empty()
    }

    pub fn mirror(&self) -> Option<&ShortcutMirror> {
        self.mirror.as_ref()
    }

    pub fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }

    // ========================
    // Notifications
    // ========================

    /// Register a callback for every change. Callbacks must not expect to
    /// re-enter the list; they run while the caller holds `&mut self`.
    pub fn subscribe(&mut self, callback: impl FnMut(&ModelEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn emit(&mut self, event: ModelEvent) {
        self.observers.emit(event);
    }

    // ========================
    // Whole-list operations
    // ========================

    /// Drop every tier and item. Ids keep counting up; subscribers stay.
    pub fn clear(&mut self) {
        self.tiers.clear();
        self.bucket.clear();
        self.items.clear();
        self.owners.clear();
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.clear();
        }
        tracing::debug!("rank list cleared");
        self.emit(ModelEvent::Cleared);
    }

    /// Check the containment invariant and mirror consistency
    pub fn verify(&self) -> DomainResult<()> {
        let mut seen: HashMap<ItemId, Container> = HashMap::new();
        let containers = self
            .tiers
            .iter()
            .map(|t| (Container::Tier(t.id), t.items()))
            .chain(std::iter::once((Container::Bucket, self.bucket.as_slice())));

        for (container, ids) in containers {
            for id in ids {
                if let Some(previous) = seen.insert(*id, container) {
                    return Err(DomainError::Inconsistent(format!(
                        "{id} is held by both {previous:?} and {container:?}"
                    )));
                }
                if self.owners.get(id) != Some(&container) {
                    return Err(DomainError::Inconsistent(format!(
                        "{id} sits in {container:?} but is recorded in {:?}",
                        self.owners.get(id)
                    )));
                }
                if !self.items.contains_key(id) {
                    return Err(DomainError::Inconsistent(format!("{id} has no item record")));
                }
            }
        }
        if seen.len() != self.items.len() {
            return Err(DomainError::Inconsistent(format!(
                "{} item(s) are not in any container",
                self.items.len() - seen.len()
            )));
        }
        if let Some(mirror) = &self.mirror {
            if !mirror.mirrors(&self.tiers) {
                return Err(DomainError::Inconsistent("shortcut mirror out of sync".to_string()));
            }
        }
        Ok(())
    }

    // ========================
    // Internal helpers
    // ========================

    fn tier_index(&self, id: TierId) -> Option<usize> {
        position_of(&self.tiers, id)
    }

    fn tier_mut(&mut self, id: TierId) -> Option<&mut Tier> {
        self.tiers.iter_mut().find(|t| t.id == id)
    }

    fn sequence_mut(&mut self, container: Container) -> Option<&mut Vec<ItemId>> {
        match container {
            Container::Bucket => Some(&mut self.bucket),
            Container::Tier(id) => self.tier_mut(id).map(|t| &mut t.items),
        }
    }
}
