//! Shortcut Mirror
//!
//! A compact strip of tier labels used as an alternate drop target.
//! Entries are bound to a tier id and cache its name and color; the rank
//! list keeps them attribute-identical and in the same order as the tiers.
//! Data flows one way only: tier to mirror.

use serde::Serialize;

use crate::domain::{position_of, Entity, Tier, TierField, TierId};
use crate::rank_list::positioning::{insert_entity_before, relocate_entity};

/// One shortcut, bound to a tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MirrorEntry {
    /// The tier this shortcut forwards to
    pub tier: TierId,
    pub name: String,
    pub color: String,
}

impl Entity for MirrorEntry {
    type Id = TierId;

    fn id(&self) -> Self::Id {
        self.tier
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortcutMirror {
    entries: Vec<MirrorEntry>,
}

impl ShortcutMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MirrorEntry] {
        &self.entries
    }

    pub fn entry(&self, tier: TierId) -> Option<&MirrorEntry> {
        self.entries.iter().find(|e| e.tier == tier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create the entry for a freshly added tier, placed before `before`
    pub(crate) fn bind(&mut self, tier: &Tier, before: Option<TierId>) {
        let entry = MirrorEntry {
            tier: tier.id,
            name: tier.name.clone(),
            color: tier.color.clone(),
        };
        insert_entity_before(&mut self.entries, entry, before);
    }

    /// Copy one attribute from the source tier. Returns false if unbound.
    pub(crate) fn sync(&mut self, tier: &Tier, field: TierField) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.tier == tier.id) else {
            return false;
        };
        match field {
            TierField::Name => entry.name.clone_from(&tier.name),
            TierField::Color => entry.color.clone_from(&tier.color),
        }
        true
    }

    pub(crate) fn reorder(&mut self, tier: TierId, before: Option<TierId>) -> bool {
        relocate_entity(&mut self.entries, tier, before).is_some()
    }

    pub(crate) fn unbind(&mut self, tier: TierId) -> bool {
        match position_of(&self.entries, tier) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Same order, same names and colors as `tiers`
    pub fn mirrors(&self, tiers: &[Tier]) -> bool {
        self.entries.len() == tiers.len()
            && self
                .entries
                .iter()
                .zip(tiers)
                .all(|(e, t)| e.tier == t.id && e.name == t.name && e.color == t.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdAllocator;

    fn tiers(names: &[&str]) -> Vec<Tier> {
        let mut ids = IdAllocator::new();
        names
            .iter()
            .map(|n| Tier::new(ids.next_tier(), n.to_string(), "#FFF".to_string()))
            .collect()
    }

    #[test]
    fn test_bind_and_sync() {
        let mut source = tiers(&["X"]);
        let mut mirror = ShortcutMirror::new();
        mirror.bind(&source[0], None);
        assert!(mirror.mirrors(&source));

        source[0].name = "Y".to_string();
        assert!(!mirror.mirrors(&source));
        assert!(mirror.sync(&source[0], TierField::Name));
        assert_eq!(mirror.entry(source[0].id).map(|e| e.name.as_str()), Some("Y"));
        assert!(mirror.mirrors(&source));
    }

    #[test]
    fn test_reorder_and_unbind() {
        let source = tiers(&["S", "A", "B"]);
        let mut mirror = ShortcutMirror::new();
        for t in &source {
            mirror.bind(t, None);
        }
        assert!(mirror.reorder(source[2].id, Some(source[0].id)));
        let order: Vec<_> = mirror.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["B", "S", "A"]);

        assert!(mirror.unbind(source[0].id));
        assert!(!mirror.unbind(source[0].id));
        assert_eq!(mirror.len(), 2);
    }
}
