//! Change Notifications
//!
//! The presentation layer subscribes to these instead of watching
//! attributes. Callbacks run synchronously, in subscription order, after
//! the mutation that produced the event has completed.

use crate::domain::{Container, ItemField, ItemId, TierField, TierId};

/// Something observable changed in a rank list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    TierAdded(TierId),
    TierChanged { id: TierId, field: TierField },
    TierMoved(TierId),
    TierRemoved(TierId),
    ItemAdded { id: ItemId, container: Container },
    ItemChanged { id: ItemId, field: ItemField },
    ItemMoved { id: ItemId, from: Container, to: Container },
    ItemRemoved { id: ItemId, from: Container },
    /// The shortcut entry bound to this tier was created, updated or reordered
    MirrorChanged(TierId),
    /// Everything was removed at once
    Cleared,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Callback = Box<dyn FnMut(&ModelEvent)>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u32,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub(crate) fn emit(&mut self, event: ModelEvent) {
        tracing::trace!(?event, subscribers = self.callbacks.len(), "emit");
        for (_, callback) in self.callbacks.iter_mut() {
            callback(&event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
