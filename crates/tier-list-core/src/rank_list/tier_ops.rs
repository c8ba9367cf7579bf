//! Tier Operations
//!
//! Adding, reordering, removing and editing tiers. Each operation keeps
//! the shortcut mirror in lockstep before notifying subscribers.

use super::positioning::relocate_entity;
use super::{ModelEvent, RankList};
use crate::domain::{Container, Tier, TierField, TierId};

impl RankList {
    /// Append an empty tier at the end
    pub fn add_tier(&mut self, name: &str, color: &str) -> TierId {
        let id = self.ids.next_tier();
        let tier = Tier::new(id, name.to_string(), color.to_string());
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.bind(&tier, None);
        }
        self.tiers.push(tier);
        tracing::debug!(%id, name, color, "tier added");
        self.emit(ModelEvent::TierAdded(id));
        if self.mirror.is_some() {
            self.emit(ModelEvent::MirrorChanged(id));
        }
        id
    }

    /// Move a tier before `before`, or to the end when the anchor is absent
    /// or unknown. Returns whether the order changed.
    pub fn move_tier(&mut self, id: TierId, before: Option<TierId>) -> bool {
        let Some((old, new)) = relocate_entity(&mut self.tiers, id, before) else {
            tracing::debug!(%id, "move_tier: unknown tier");
            return false;
        };
        if old == new {
            return false;
        }
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.reorder(id, before);
        }
        tracing::debug!(%id, from = old, to = new, "tier moved");
        self.emit(ModelEvent::TierMoved(id));
        if self.mirror.is_some() {
            self.emit(ModelEvent::MirrorChanged(id));
        }
        true
    }

    /// Remove a tier. Its items move, in order, to the end of the bucket.
    pub fn remove_tier(&mut self, id: TierId) -> bool {
        let Some(index) = self.tier_index(id) else {
            tracing::debug!(%id, "remove_tier: unknown tier");
            return false;
        };
        let tier = self.tiers.remove(index);
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.unbind(id);
        }
        let from = Container::Tier(id);
        for item in tier.items {
            self.bucket.push(item);
            self.owners.insert(item, Container::Bucket);
            self.emit(ModelEvent::ItemMoved {
                id: item,
                from,
                to: Container::Bucket,
            });
        }
        tracing::debug!(%id, "tier removed");
        self.emit(ModelEvent::TierRemoved(id));
        true
    }

    pub fn set_tier_name(&mut self, id: TierId, name: &str) -> bool {
        self.set_tier_field(id, TierField::Name, name)
    }

    pub fn set_tier_color(&mut self, id: TierId, color: &str) -> bool {
        self.set_tier_field(id, TierField::Color, color)
    }

    /// Overwrite one attribute and copy it to the shortcut entry.
    /// Returns false for an unknown tier or an unchanged value.
    fn set_tier_field(&mut self, id: TierId, field: TierField, value: &str) -> bool {
        let Some(index) = self.tier_index(id) else {
            tracing::debug!(%id, ?field, "set_tier_field: unknown tier");
            return false;
        };
        let tier = &mut self.tiers[index];
        let slot = match field {
            TierField::Name => &mut tier.name,
            TierField::Color => &mut tier.color,
        };
        if slot.as_str() == value {
            return false;
        }
        *slot = value.to_string();

        let mirrored = match self.mirror.as_mut() {
            Some(mirror) => mirror.sync(&self.tiers[index], field),
            None => false,
        };
        tracing::debug!(%id, ?field, value, "tier changed");
        self.emit(ModelEvent::TierChanged { id, field });
        if mirrored {
            self.emit(ModelEvent::MirrorChanged(id));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn names(list: &RankList) -> Vec<String> {
        list.tiers().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_add_tier_appends() {
        let mut list = RankList::new();
        let s = list.add_tier("S", "#FF7F7F");
        let a = list.add_tier("A", "#FFBF7F");
        assert_eq!(list.tier_ids(), vec![s, a]);
        assert!(list.tier(a).is_some_and(|t| t.is_empty()));
    }

    #[test]
    fn test_move_tier_before_and_to_end() {
        let mut list = RankList::new();
        let s = list.add_tier("S", "#FFF");
        let a = list.add_tier("A", "#FFF");
        let b = list.add_tier("B", "#FFF");

        assert!(list.move_tier(b, Some(s)));
        assert_eq!(names(&list), vec!["B", "S", "A"]);

        assert!(list.move_tier(b, None));
        assert_eq!(names(&list), vec!["S", "A", "B"]);

        // already last
        assert!(!list.move_tier(b, None));
        // anchor is itself
        assert!(!list.move_tier(a, Some(a)));
        assert_eq!(names(&list), vec!["S", "A", "B"]);
    }

    #[test]
    fn test_move_unknown_tier_is_noop() {
        let mut list = RankList::new();
        let s = list.add_tier("S", "#FFF");
        list.remove_tier(s);
        assert!(!list.move_tier(s, None));
    }

    #[test]
    fn test_remove_tier_returns_items_to_bucket() {
        let mut list = RankList::with_mirror();
        let s = list.add_tier("S", "#FFF");
        let loose = list.add_item(Container::Bucket, "", "loose", "").unwrap();
        let first = list.add_item(Container::Tier(s), "", "first", "").unwrap();
        let second = list.add_item(Container::Tier(s), "", "second", "").unwrap();

        assert!(list.remove_tier(s));
        assert_eq!(list.bucket(), &[loose, first, second]);
        assert_eq!(list.container_of(first), Some(Container::Bucket));
        assert!(list.mirror().is_some_and(|m| m.is_empty()));
        list.verify().unwrap();
        assert!(!list.remove_tier(s));
    }

    #[test]
    fn test_rename_updates_mirror() {
        let mut list = RankList::with_mirror();
        let x = list.add_tier("X", "#111");
        assert!(list.set_tier_name(x, "Y"));
        let entry = list.mirror().and_then(|m| m.entry(x)).unwrap();
        assert_eq!(entry.name, "Y");
        assert_eq!(entry.color, "#111");

        assert!(list.set_tier_color(x, "rgb(1, 2, 3)"));
        assert_eq!(list.mirror().and_then(|m| m.entry(x)).unwrap().color, "rgb(1, 2, 3)");
        list.verify().unwrap();
    }

    #[test]
    fn test_setter_emits_only_on_change() {
        let mut list = RankList::new();
        let x = list.add_tier("X", "#111");
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        list.subscribe(move |ev| sink.borrow_mut().push(*ev));

        assert!(!list.set_tier_name(x, "X"));
        assert!(list.set_tier_name(x, "Z"));
        assert_eq!(
            *events.borrow(),
            vec![ModelEvent::TierChanged { id: x, field: TierField::Name }]
        );
    }

    #[test]
    fn test_mirror_follows_tier_order() {
        let mut list = RankList::with_mirror();
        let s = list.add_tier("S", "#FFF");
        let _a = list.add_tier("A", "#FFF");
        let b = list.add_tier("B", "#FFF");
        list.move_tier(s, Some(b));
        let order: Vec<_> = list
            .mirror()
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(order, names(&list));
        list.verify().unwrap();
    }
}
