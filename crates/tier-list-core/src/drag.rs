//! Drag Session
//!
//! `Idle -> Armed(payload) -> Idle`. A session is armed when a drag starts
//! on a tier handle or an item and always returns to idle on drop or
//! cancel. Drops are dispatched on the (payload, target) pair; kind
//! mismatches are ignored rather than reported.

use crate::domain::{Container, DomainError, ItemId, TierId};
use crate::rank_list::RankList;

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPayload {
    Tier(TierId),
    Item(ItemId),
}

impl DragPayload {
    pub fn kind(self) -> PayloadKind {
        match self {
            DragPayload::Tier(_) => PayloadKind::Tier,
            DragPayload::Item(_) => PayloadKind::Item,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Tier,
    Item,
}

/// Where something was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The tier list itself; accepts tiers
    TierList { before: Option<TierId> },
    /// A tier's item area; accepts items
    Tier { tier: TierId, before: Option<ItemId> },
    /// The unsorted area; accepts items
    Bucket { before: Option<ItemId> },
    /// A shortcut entry; accepts items, always appends to the bound tier
    Mirror(TierId),
}

impl DropTarget {
    pub fn accepts(self) -> PayloadKind {
        match self {
            DropTarget::TierList { .. } => PayloadKind::Tier,
            DropTarget::Tier { .. } | DropTarget::Bucket { .. } | DropTarget::Mirror(_) => PayloadKind::Item,
        }
    }

    /// Item-accepting target for a container, anchored at `hit`
    pub fn for_container(container: Container, hit: HitTarget) -> Self {
        let before = hit.item();
        match container {
            Container::Tier(tier) => DropTarget::Tier { tier, before },
            Container::Bucket => DropTarget::Bucket { before },
        }
    }

    /// Tier-accepting target anchored at `hit`
    pub fn for_tier_list(hit: HitTarget) -> Self {
        DropTarget::TierList { before: hit.tier() }
    }
}

/// The topmost element under the pointer at drop time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Item(ItemId),
    Tier(TierId),
    /// Anything that is not itself an item or tier element
    Other,
}

impl HitTarget {
    /// Decode an element id as written by the presentation layer
    pub fn parse(element_id: &str) -> Self {
        if let Ok(item) = element_id.parse::<ItemId>() {
            HitTarget::Item(item)
        } else if let Ok(tier) = element_id.parse::<TierId>() {
            HitTarget::Tier(tier)
        } else {
            HitTarget::Other
        }
    }

    pub fn item(self) -> Option<ItemId> {
        match self {
            HitTarget::Item(id) => Some(id),
            _ => None,
        }
    }

    pub fn tier(self) -> Option<TierId> {
        match self {
            HitTarget::Tier(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Armed(DragPayload),
}

/// Result of resolving a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload was applied; `changed` is false when it was already in place
    Applied { payload: DragPayload, changed: bool },
    /// Ignored; the list was not touched
    Rejected(DomainError),
}

impl DropOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, DropOutcome::Applied { changed: true, .. })
    }
}

/// At most one drag in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn payload(&self) -> Option<DragPayload> {
        match self.state {
            DragState::Idle => None,
            DragState::Armed(payload) => Some(payload),
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, DragState::Armed(_))
    }

    /// Arm with `payload`. A stale armed payload (a drag whose end event
    /// never arrived) is replaced.
    pub fn begin(&mut self, payload: DragPayload) {
        if let DragState::Armed(stale) = self.state {
            tracing::debug!(?stale, "replacing stale drag");
        }
        tracing::debug!(?payload, "drag armed");
        self.state = DragState::Armed(payload);
    }

    /// Drag ended without a drop
    pub fn cancel(&mut self) {
        if let DragState::Armed(payload) = self.state {
            tracing::debug!(?payload, "drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Apply the armed payload to `target`. Always leaves the session idle.
    pub fn drop_on(&mut self, list: &mut RankList, target: DropTarget) -> DropOutcome {
        let state = std::mem::take(&mut self.state);
        let DragState::Armed(payload) = state else {
            return reject(DomainError::InvalidDropTarget("nothing is being dragged".to_string()));
        };
        apply_drop(list, payload, target)
    }
}

/// Dispatch a payload onto a target without session bookkeeping. Used when
/// the payload comes from the host's drag data rather than a session.
pub fn apply_drop(list: &mut RankList, payload: DragPayload, target: DropTarget) -> DropOutcome {
    let changed = match (payload, target) {
        (DragPayload::Tier(tier), DropTarget::TierList { before }) => list.move_tier(tier, before),
        (DragPayload::Item(item), DropTarget::Tier { tier, before }) => {
            list.move_item(item, Container::Tier(tier), before)
        }
        (DragPayload::Item(item), DropTarget::Bucket { before }) => list.move_item(item, Container::Bucket, before),
        (DragPayload::Item(item), DropTarget::Mirror(tier)) => list.move_item(item, Container::Tier(tier), None),
        (payload, target) => {
            return reject(DomainError::InvalidDropTarget(format!(
                "{:?} payload dropped on a {:?} target",
                payload.kind(),
                target.accepts()
            )));
        }
    };
    tracing::debug!(?payload, ?target, changed, "drop applied");
    DropOutcome::Applied { payload, changed }
}

fn reject(err: DomainError) -> DropOutcome {
    tracing::debug!(%err, "drop ignored");
    DropOutcome::Rejected(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RankList, TierId, TierId, ItemId, ItemId) {
        let mut list = RankList::with_mirror();
        let s = list.add_tier("S", "#FFF");
        let a = list.add_tier("A", "#FFF");
        let x = list.add_item(Container::Tier(s), "", "x", "").unwrap();
        let y = list.add_item(Container::Bucket, "", "y", "").unwrap();
        (list, s, a, x, y)
    }

    #[test]
    fn test_begin_and_cancel() {
        let (_, _, _, x, _) = setup();
        let mut session = DragSession::new();
        assert_eq!(session.state(), DragState::Idle);
        session.begin(DragPayload::Item(x));
        assert!(session.is_armed());
        session.cancel();
        assert_eq!(session.payload(), None);
    }

    #[test]
    fn test_item_drop_on_tier_before_item() {
        let (mut list, s, _, x, y) = setup();
        let mut session = DragSession::new();
        session.begin(DragPayload::Item(y));
        let outcome = session.drop_on(&mut list, DropTarget::Tier { tier: s, before: Some(x) });
        assert!(outcome.changed());
        assert_eq!(list.items_in(Container::Tier(s)), Some(&[y, x][..]));
        assert!(!session.is_armed());
    }

    #[test]
    fn test_item_drop_on_mirror_appends() {
        let (mut list, s, _, x, y) = setup();
        let mut session = DragSession::new();
        session.begin(DragPayload::Item(y));
        assert!(session.drop_on(&mut list, DropTarget::Mirror(s)).changed());
        assert_eq!(list.items_in(Container::Tier(s)), Some(&[x, y][..]));
    }

    #[test]
    fn test_tier_drop_on_list() {
        let (mut list, s, a, _, _) = setup();
        let mut session = DragSession::new();
        session.begin(DragPayload::Tier(a));
        assert!(session.drop_on(&mut list, DropTarget::TierList { before: Some(s) }).changed());
        assert_eq!(list.tier_ids(), vec![a, s]);
        list.verify().unwrap();
    }

    #[test]
    fn test_cross_kind_drops_are_rejected() {
        let (mut list, s, a, x, _) = setup();
        let before_tiers = list.tier_ids();
        let before_items = list.items_in(Container::Tier(s)).map(<[_]>::to_vec);

        let mut session = DragSession::new();
        session.begin(DragPayload::Item(x));
        let outcome = session.drop_on(&mut list, DropTarget::TierList { before: None });
        assert!(matches!(outcome, DropOutcome::Rejected(DomainError::InvalidDropTarget(_))));
        assert!(!session.is_armed());

        for target in [
            DropTarget::Tier { tier: a, before: None },
            DropTarget::Bucket { before: None },
            DropTarget::Mirror(a),
        ] {
            session.begin(DragPayload::Tier(s));
            assert!(matches!(session.drop_on(&mut list, target), DropOutcome::Rejected(_)));
        }

        assert_eq!(list.tier_ids(), before_tiers);
        assert_eq!(list.items_in(Container::Tier(s)).map(<[_]>::to_vec), before_items);
    }

    #[test]
    fn test_drop_without_drag_is_rejected() {
        let (mut list, s, _, _, _) = setup();
        let mut session = DragSession::new();
        let outcome = session.drop_on(&mut list, DropTarget::Mirror(s));
        assert!(matches!(outcome, DropOutcome::Rejected(_)));
    }

    #[test]
    fn test_hit_target_resolution() {
        let (_, s, _, x, _) = setup();
        assert_eq!(HitTarget::parse(&x.to_string()), HitTarget::Item(x));
        assert_eq!(HitTarget::parse(&s.to_string()), HitTarget::Tier(s));
        assert_eq!(HitTarget::parse("unsorted"), HitTarget::Other);

        assert_eq!(
            DropTarget::for_container(Container::Tier(s), HitTarget::Item(x)),
            DropTarget::Tier { tier: s, before: Some(x) }
        );
        assert_eq!(
            DropTarget::for_container(Container::Bucket, HitTarget::Tier(s)),
            DropTarget::Bucket { before: None }
        );
        assert_eq!(
            DropTarget::for_tier_list(HitTarget::Tier(s)),
            DropTarget::TierList { before: Some(s) }
        );
    }
}
