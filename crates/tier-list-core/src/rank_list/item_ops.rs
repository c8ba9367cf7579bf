//! Item Operations
//!
//! Adding, moving, removing and editing items. `move_item` is the single
//! reordering primitive: same container reorders, another container
//! re-ranks. Items are moved, never copied.

use super::positioning::{insert_before, remove_value};
use super::{ModelEvent, RankList};
use crate::domain::{Container, DomainError, DomainResult, Item, ItemField, ItemId};

impl RankList {
    /// Append a new item to the end of `container`
    pub fn add_item(&mut self, container: Container, image: &str, text: &str, tooltip: &str) -> DomainResult<ItemId> {
        if !self.contains_container(container) {
            return Err(DomainError::NotFound(format!("container {container:?}")));
        }
        let id = self.ids.next_item();
        let item = Item::new(id, image.to_string(), text.to_string(), tooltip.to_string());
        self.items.insert(id, item);
        self.owners.insert(id, container);
        if let Some(seq) = self.sequence_mut(container) {
            seq.push(id);
        }
        tracing::debug!(%id, ?container, "item added");
        self.emit(ModelEvent::ItemAdded { id, container });
        Ok(id)
    }

    /// Take `id` out of its container and insert it into `target` just
    /// before `before`, or at the end when `before` is absent or not in
    /// `target`. Unknown items and unknown target tiers are ignored.
    /// Returns whether anything changed.
    pub fn move_item(&mut self, id: ItemId, target: Container, before: Option<ItemId>) -> bool {
        let Some(from) = self.container_of(id) else {
            tracing::debug!(%id, "move_item: unknown item");
            return false;
        };
        if !self.contains_container(target) {
            tracing::debug!(%id, ?target, "move_item: unknown target");
            return false;
        }
        if before == Some(id) {
            return false;
        }

        let old = self.sequence_mut(from).and_then(|seq| remove_value(seq, id));
        let new = match self.sequence_mut(target) {
            Some(seq) => insert_before(seq, id, before),
            None => {
                // target existence was checked above; put the item back
                if let (Some(seq), Some(index)) = (self.sequence_mut(from), old) {
                    seq.insert(index, id);
                }
                return false;
            }
        };
        if from == target && old == Some(new) {
            return false;
        }
        self.owners.insert(id, target);
        tracing::debug!(%id, ?from, ?target, index = new, "item moved");
        self.emit(ModelEvent::ItemMoved { id, from, to: target });
        true
    }

    /// Delete an item from whichever container holds it
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(from) = self.owners.remove(&id) else {
            return false;
        };
        if let Some(seq) = self.sequence_mut(from) {
            remove_value(seq, id);
        }
        self.items.remove(&id);
        tracing::debug!(%id, ?from, "item removed");
        self.emit(ModelEvent::ItemRemoved { id, from });
        true
    }

    pub fn set_item_image(&mut self, id: ItemId, image: &str) -> bool {
        self.set_item_field(id, ItemField::Image, image)
    }

    pub fn set_item_text(&mut self, id: ItemId, text: &str) -> bool {
        self.set_item_field(id, ItemField::Text, text)
    }

    pub fn set_item_tooltip(&mut self, id: ItemId, tooltip: &str) -> bool {
        self.set_item_field(id, ItemField::Tooltip, tooltip)
    }

    fn set_item_field(&mut self, id: ItemId, field: ItemField, value: &str) -> bool {
        let Some(item) = self.items.get_mut(&id) else {
            tracing::debug!(%id, ?field, "set_item_field: unknown item");
            return false;
        };
        if !item.set_field(field, value.to_string()) {
            return false;
        }
        self.emit(ModelEvent::ItemChanged { id, field });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TierId;

    fn texts(list: &RankList, container: Container) -> Vec<String> {
        list.items_in(container)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| list.item(*id))
            .map(|i| i.text.clone())
            .collect()
    }

    fn setup() -> (RankList, TierId, Vec<ItemId>) {
        let mut list = RankList::new();
        let s = list.add_tier("S", "#FFF");
        let ids = ["a", "b", "c"]
            .iter()
            .map(|t| list.add_item(Container::Tier(s), "", t, "").unwrap())
            .collect();
        (list, s, ids)
    }

    #[test]
    fn test_add_item_to_unknown_tier_fails() {
        let (mut list, s, _) = setup();
        list.remove_tier(s);
        let err = list.add_item(Container::Tier(s), "", "x", "").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        list.verify().unwrap();
    }

    #[test]
    fn test_reorder_within_tier() {
        let (mut list, s, ids) = setup();
        assert!(list.move_item(ids[2], Container::Tier(s), Some(ids[0])));
        assert_eq!(texts(&list, Container::Tier(s)), vec!["c", "a", "b"]);

        assert!(list.move_item(ids[2], Container::Tier(s), None));
        assert_eq!(texts(&list, Container::Tier(s)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rerank_to_other_container() {
        let (mut list, s, ids) = setup();
        let a = list.add_tier("A", "#FFF");
        assert!(list.move_item(ids[1], Container::Tier(a), None));
        assert!(list.move_item(ids[0], Container::Bucket, None));
        assert_eq!(texts(&list, Container::Tier(s)), vec!["c"]);
        assert_eq!(texts(&list, Container::Tier(a)), vec!["b"]);
        assert_eq!(texts(&list, Container::Bucket), vec!["a"]);
        assert_eq!(list.container_of(ids[1]), Some(Container::Tier(a)));
        list.verify().unwrap();
    }

    #[test]
    fn test_anchor_in_other_container_appends() {
        let (mut list, s, ids) = setup();
        let loose = list.add_item(Container::Bucket, "", "z", "").unwrap();
        // ids[0] is not in the bucket, so this is an append
        assert!(list.move_item(ids[1], Container::Bucket, Some(ids[0])));
        assert_eq!(list.bucket(), &[loose, ids[1]]);
        assert_eq!(texts(&list, Container::Tier(s)), vec!["a", "c"]);
    }

    #[test]
    fn test_move_is_idempotent() {
        let (mut list, s, ids) = setup();
        assert!(list.move_item(ids[2], Container::Tier(s), Some(ids[1])));
        let once = texts(&list, Container::Tier(s));
        assert!(!list.move_item(ids[2], Container::Tier(s), Some(ids[1])));
        assert_eq!(texts(&list, Container::Tier(s)), once);
    }

    #[test]
    fn test_move_unknowns_are_noops() {
        let (mut list, s, ids) = setup();
        let a = list.add_tier("A", "#FFF");
        list.remove_tier(a);
        assert!(!list.move_item(ids[0], Container::Tier(a), None));
        list.remove_item(ids[1]);
        assert!(!list.move_item(ids[1], Container::Tier(s), None));
        assert!(!list.move_item(ids[0], Container::Tier(s), Some(ids[0])));
        assert_eq!(texts(&list, Container::Tier(s)), vec!["a", "c"]);
        list.verify().unwrap();
    }

    #[test]
    fn test_item_setters() {
        let (mut list, _, ids) = setup();
        assert!(list.set_item_image(ids[0], "https://example.com/a.png"));
        assert!(list.set_item_text(ids[0], "<b>A</b>"));
        assert!(list.set_item_tooltip(ids[0], "first"));
        assert!(!list.set_item_tooltip(ids[0], "first"));
        let item = list.item(ids[0]).unwrap();
        assert_eq!(item.image, "https://example.com/a.png");
        assert_eq!(item.text, "<b>A</b>");
    }
}
