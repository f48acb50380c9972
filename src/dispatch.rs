//! Gesture Dispatcher
//!
//! Maps the closed set of user gestures to board mutations. Every gesture
//! that changes the board is followed by a full snapshot save. Errors stop
//! here: they are logged and the gesture becomes a no-op.

use crate::board::Board;
use crate::error::{StoreError, StoreResult};
use crate::models::{DragPayload, EntityKind};
use crate::persistence::{KeyValueStore, PersistenceGateway};

/// Which view regions need re-rendering after a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refresh {
    /// Catalog or some group's children changed
    pub content: bool,
    /// A different group (or none) is now selected
    pub selection: bool,
}

impl Refresh {
    pub const NONE: Refresh = Refresh { content: false, selection: false };
    pub const CONTENT: Refresh = Refresh { content: true, selection: false };
    pub const SELECTION: Refresh = Refresh { content: false, selection: true };
    pub const ALL: Refresh = Refresh { content: true, selection: true };

    pub fn is_none(&self) -> bool {
        !self.content && !self.selection
    }
}

/// Title being edited inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameTarget {
    Group(String),
    Item { group_id: String, item_id: String },
}

/// Row a payload was dropped on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Group(String),
    Item { group_id: String, item_id: String },
}

impl DropTarget {
    pub fn kind(&self) -> EntityKind {
        match self {
            DropTarget::Group(_) => EntityKind::Group,
            DropTarget::Item { .. } => EntityKind::Item,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DropTarget::Group(id) => id,
            DropTarget::Item { item_id, .. } => item_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    AddGroup { title: String },
    /// Add to the selected group
    AddItem { title: String },
    RemoveGroup { id: String },
    RemoveItem { group_id: String, item_id: String },
    Select { id: String },
    RenameStart(RenameTarget),
    RenameCommit { title: String },
    RenameCancel,
    Toggle { group_id: String, item_id: String, done: bool },
    DragStart(DragPayload),
    DragEnd,
    Drop { payload: DragPayload, target: DropTarget },
}

/// Owns the board and its persistence; the only writer of either
pub struct Dispatcher<S: KeyValueStore> {
    board: Board,
    gateway: PersistenceGateway<S>,
    editing: Option<RenameTarget>,
    dragging: Option<DragPayload>,
}

impl<S: KeyValueStore> Dispatcher<S> {
    /// Restore the board from the gateway's slot
    pub fn new(gateway: PersistenceGateway<S>) -> Self {
        let board = gateway.load();
        log::info!(
            "[APP] Loaded {} tasks from {}, selected={:?}",
            board.groups().len(),
            gateway.key(),
            board.selection().index()
        );
        Self {
            board,
            gateway,
            editing: None,
            dragging: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn editing(&self) -> Option<&RenameTarget> {
        self.editing.as_ref()
    }

    pub fn dragging(&self) -> Option<&DragPayload> {
        self.dragging.as_ref()
    }

    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    /// Whether the payload being dragged may land on `target`
    pub fn accepts_drop(&self, target: &DropTarget) -> bool {
        match &self.dragging {
            Some(payload) => payload.kind == target.kind() && payload.id != target.id(),
            None => false,
        }
    }

    pub fn dispatch(&mut self, gesture: Gesture) -> Refresh {
        log::debug!("[DISPATCH] {:?}", gesture);
        match self.apply(gesture) {
            Ok(refresh) => {
                if !refresh.is_none() {
                    self.gateway.save(&self.board);
                }
                refresh
            }
            Err(e) if e.is_noteworthy() => {
                log::warn!("[DISPATCH] {}", e);
                Refresh::NONE
            }
            Err(e) => {
                log::debug!("[DISPATCH] Ignored: {}", e);
                Refresh::NONE
            }
        }
    }

    fn apply(&mut self, gesture: Gesture) -> StoreResult<Refresh> {
        match gesture {
            Gesture::AddGroup { title } => {
                self.board.add_group(&title)?;
                Ok(Refresh::CONTENT)
            }
            Gesture::AddItem { title } => {
                self.board.add_item_to_selected(&title)?;
                Ok(Refresh::CONTENT)
            }
            Gesture::RemoveGroup { id } => {
                let was_selected = self.selected_id().as_deref() == Some(id.as_str());
                self.board
                    .remove_group(&id)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?;
                self.cancel_edit_if(|t| match t {
                    RenameTarget::Group(g) => *g == id,
                    RenameTarget::Item { group_id, .. } => *group_id == id,
                });
                Ok(if was_selected { Refresh::ALL } else { Refresh::CONTENT })
            }
            Gesture::RemoveItem { group_id, item_id } => {
                self.board
                    .remove_item(&group_id, &item_id)
                    .ok_or_else(|| StoreError::NotFound(item_id.clone()))?;
                self.cancel_edit_if(|t| matches!(t, RenameTarget::Item { item_id: i, .. } if *i == item_id));
                Ok(Refresh::CONTENT)
            }
            Gesture::Select { id } => {
                let previous = self.selected_id();
                if previous.as_deref() != Some(id.as_str()) {
                    self.editing = None;
                }
                match self.board.select(&id) {
                    Ok(()) => Ok(Refresh::SELECTION),
                    // Unknown id still cleared a previous selection
                    Err(e) if previous.is_some() => {
                        log::warn!("[DISPATCH] {}, selection cleared", e);
                        Ok(Refresh::SELECTION)
                    }
                    Err(e) => Err(e),
                }
            }
            Gesture::RenameStart(target) => {
                self.check_rename_target(&target)?;
                self.editing = Some(target);
                Ok(Refresh::NONE)
            }
            Gesture::RenameCommit { title } => {
                let Some(target) = self.editing.take() else {
                    log::debug!("[DISPATCH] Rename commit without an open editor");
                    return Ok(Refresh::NONE);
                };
                match target {
                    RenameTarget::Group(id) => self.board.rename_group(&id, &title)?,
                    RenameTarget::Item { group_id, item_id } => {
                        self.board.rename_item(&group_id, &item_id, &title)?
                    }
                }
                Ok(Refresh::CONTENT)
            }
            Gesture::RenameCancel => {
                self.editing = None;
                Ok(Refresh::NONE)
            }
            Gesture::Toggle { group_id, item_id, done } => {
                self.board.set_item_status(&group_id, &item_id, done)?;
                Ok(Refresh::CONTENT)
            }
            Gesture::DragStart(payload) => {
                self.dragging = Some(payload);
                Ok(Refresh::NONE)
            }
            Gesture::DragEnd => {
                self.dragging = None;
                Ok(Refresh::NONE)
            }
            Gesture::Drop { payload, target } => {
                self.dragging = None;
                self.drop_on(payload, target)
            }
        }
    }

    fn drop_on(&mut self, payload: DragPayload, target: DropTarget) -> StoreResult<Refresh> {
        if payload.id == target.id() {
            log::info!("[DND] Can't insert under itself");
            return Ok(Refresh::NONE);
        }
        if payload.kind != target.kind() {
            log::info!("[DND] Can't insert {:?} into {:?} list", payload.kind, target.kind());
            return Ok(Refresh::NONE);
        }

        let outcome = match &target {
            DropTarget::Group(target_id) => self.board.move_group(&payload.id, target_id),
            DropTarget::Item { group_id, item_id } => self.board.move_item(group_id, &payload.id, item_id),
        };
        log::debug!("[DND] {} after {}: {:?}", payload.id, target.id(), outcome);
        Ok(if outcome.changed() { Refresh::CONTENT } else { Refresh::NONE })
    }

    fn check_rename_target(&self, target: &RenameTarget) -> StoreResult<()> {
        match target {
            RenameTarget::Group(id) => {
                self.board.group(id).ok_or(StoreError::NoSelection)?;
            }
            RenameTarget::Item { group_id, item_id } => {
                let group = self.board.group(group_id).ok_or(StoreError::NoSelection)?;
                group
                    .child(item_id)
                    .ok_or_else(|| StoreError::NotFound(item_id.clone()))?;
            }
        }
        Ok(())
    }

    fn cancel_edit_if(&mut self, pred: impl Fn(&RenameTarget) -> bool) {
        if self.editing.as_ref().is_some_and(pred) {
            self.editing = None;
        }
    }

    fn selected_id(&self) -> Option<String> {
        self.board.selected().map(|g| g.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{decode_snapshot, MemoryStorage};

    const KEY: &str = "TEST_SLOT";

    fn make_dispatcher() -> Dispatcher<MemoryStorage> {
        Dispatcher::new(PersistenceGateway::new(MemoryStorage::default(), KEY))
    }

    fn add_groups(d: &mut Dispatcher<MemoryStorage>, titles: &[&str]) {
        for title in titles.iter().rev() {
            d.dispatch(Gesture::AddGroup { title: title.to_string() });
        }
    }

    fn id_of(d: &Dispatcher<MemoryStorage>, title: &str) -> String {
        d.board().groups().iter().find(|g| g.title == title).unwrap().id.clone()
    }

    fn saved(d: &Dispatcher<MemoryStorage>) -> Board {
        let raw = d.gateway().storage().get(KEY).unwrap().expect("snapshot saved");
        decode_snapshot(&raw).unwrap()
    }

    fn select(d: &mut Dispatcher<MemoryStorage>, title: &str) -> String {
        let id = id_of(d, title);
        assert_eq!(d.dispatch(Gesture::Select { id: id.clone() }), Refresh::SELECTION);
        id
    }

    #[test]
    fn test_every_mutation_is_saved() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A", "B"]);
        assert_eq!(saved(&d), *d.board());

        let a = select(&mut d, "A");
        assert_eq!(saved(&d).selected().map(|g| g.id.clone()), Some(a.clone()));

        assert_eq!(d.dispatch(Gesture::AddItem { title: "sub".into() }), Refresh::CONTENT);
        let item_id = d.board().children(&a)[0].id.clone();
        d.dispatch(Gesture::Toggle { group_id: a.clone(), item_id: item_id.clone(), done: true });
        assert!(saved(&d).children(&a)[0].done);

        d.dispatch(Gesture::RemoveItem { group_id: a.clone(), item_id });
        assert!(saved(&d).children(&a).is_empty());
    }

    #[test]
    fn test_state_restored_on_new_session() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A", "B"]);
        select(&mut d, "B");
        let storage = d.gateway().storage().clone();

        let restored = Dispatcher::new(PersistenceGateway::new(storage, KEY));
        assert_eq!(restored.board(), d.board());
        assert_eq!(restored.board().selected().unwrap().title, "B");
    }

    #[test]
    fn test_errors_are_absorbed() {
        let mut d = make_dispatcher();
        assert_eq!(d.dispatch(Gesture::AddGroup { title: "".into() }), Refresh::NONE);
        assert_eq!(d.dispatch(Gesture::AddItem { title: "orphan".into() }), Refresh::NONE);
        assert_eq!(d.dispatch(Gesture::RemoveGroup { id: "nope".into() }), Refresh::NONE);
        assert_eq!(d.dispatch(Gesture::Select { id: "nope".into() }), Refresh::NONE);
        assert!(d.board().groups().is_empty());
        assert_eq!(d.gateway().storage().get(KEY).unwrap(), None);
    }

    #[test]
    fn test_delete_selected_then_add_item_fails() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A", "X"]);
        let x = select(&mut d, "X");

        assert_eq!(d.dispatch(Gesture::RemoveGroup { id: x }), Refresh::ALL);
        assert!(d.board().selected().is_none());
        assert_eq!(d.dispatch(Gesture::AddItem { title: "sub".into() }), Refresh::NONE);
        assert_eq!(saved(&d).selection().index(), None);
    }

    #[test]
    fn test_rename_flow() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A"]);
        let a = select(&mut d, "A");

        d.dispatch(Gesture::RenameStart(RenameTarget::Group(a.clone())));
        assert_eq!(d.editing(), Some(&RenameTarget::Group(a.clone())));
        assert_eq!(d.dispatch(Gesture::RenameCommit { title: "Renamed".into() }), Refresh::CONTENT);
        assert_eq!(d.editing(), None);
        assert_eq!(saved(&d).group(&a).unwrap().title, "Renamed");

        // Blank titles close the editor without touching the title
        d.dispatch(Gesture::RenameStart(RenameTarget::Group(a.clone())));
        assert_eq!(d.dispatch(Gesture::RenameCommit { title: "  ".into() }), Refresh::NONE);
        assert_eq!(d.editing(), None);
        assert_eq!(d.board().group(&a).unwrap().title, "Renamed");

        d.dispatch(Gesture::RenameStart(RenameTarget::Group(a.clone())));
        d.dispatch(Gesture::RenameCancel);
        assert_eq!(d.dispatch(Gesture::RenameCommit { title: "Late".into() }), Refresh::NONE);
        assert_eq!(d.board().group(&a).unwrap().title, "Renamed");
    }

    #[test]
    fn test_rename_start_requires_group() {
        let mut d = make_dispatcher();
        d.dispatch(Gesture::RenameStart(RenameTarget::Group("nope".into())));
        assert_eq!(d.editing(), None);
    }

    #[test]
    fn test_rename_item_and_cancel_on_remove() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A"]);
        let a = select(&mut d, "A");
        d.dispatch(Gesture::AddItem { title: "sub".into() });
        let item_id = d.board().children(&a)[0].id.clone();

        let target = RenameTarget::Item { group_id: a.clone(), item_id: item_id.clone() };
        d.dispatch(Gesture::RenameStart(target.clone()));
        d.dispatch(Gesture::RenameCommit { title: "edited".into() });
        assert_eq!(d.board().children(&a)[0].title, "edited");

        d.dispatch(Gesture::RenameStart(target));
        d.dispatch(Gesture::RemoveItem { group_id: a, item_id });
        assert_eq!(d.editing(), None);
    }

    #[test]
    fn test_drop_reorders_groups_and_keeps_selection() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A", "B", "C", "D"]);
        select(&mut d, "D");
        let (a, dd) = (id_of(&d, "A"), id_of(&d, "D"));

        let payload = DragPayload::new(dd.clone(), EntityKind::Group);
        d.dispatch(Gesture::DragStart(payload.clone()));
        assert!(d.accepts_drop(&DropTarget::Group(a.clone())));
        assert!(!d.accepts_drop(&DropTarget::Group(dd.clone())));

        let refresh = d.dispatch(Gesture::Drop { payload: payload.clone(), target: DropTarget::Group(a.clone()) });
        assert_eq!(refresh, Refresh::CONTENT);
        assert!(d.dragging().is_none());

        let order: Vec<&str> = d.board().groups().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(order, ["A", "D", "B", "C"]);
        assert_eq!(d.board().selected().unwrap().title, "D");
        assert_eq!(saved(&d), *d.board());

        // Dropping again in the same spot changes nothing
        let refresh = d.dispatch(Gesture::Drop { payload, target: DropTarget::Group(a) });
        assert_eq!(refresh, Refresh::NONE);
    }

    #[test]
    fn test_drop_rejects_cross_type_and_self() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A", "B"]);
        let a = select(&mut d, "A");
        d.dispatch(Gesture::AddItem { title: "sub".into() });
        let item_id = d.board().children(&a)[0].id.clone();
        let before = d.board().clone();

        let group_payload = DragPayload::new(id_of(&d, "B"), EntityKind::Group);
        d.dispatch(Gesture::DragStart(group_payload.clone()));
        let item_target = DropTarget::Item { group_id: a.clone(), item_id };
        assert!(!d.accepts_drop(&item_target));
        assert_eq!(d.dispatch(Gesture::Drop { payload: group_payload, target: item_target }), Refresh::NONE);

        let self_payload = DragPayload::new(a.clone(), EntityKind::Group);
        assert_eq!(
            d.dispatch(Gesture::Drop { payload: self_payload, target: DropTarget::Group(a) }),
            Refresh::NONE
        );
        assert_eq!(*d.board(), before);
    }

    #[test]
    fn test_drop_reorders_items_within_group() {
        let mut d = make_dispatcher();
        add_groups(&mut d, &["A"]);
        let a = select(&mut d, "A");
        for title in ["3", "2", "1"] {
            d.dispatch(Gesture::AddItem { title: title.into() });
        }
        let ids: Vec<String> = d.board().children(&a).iter().map(|i| i.id.clone()).collect();

        let payload = DragPayload::new(ids[0].clone(), EntityKind::Item);
        let target = DropTarget::Item { group_id: a.clone(), item_id: ids[2].clone() };
        assert_eq!(d.dispatch(Gesture::Drop { payload, target }), Refresh::CONTENT);

        let order: Vec<&str> = d.board().children(&a).iter().map(|i| i.title.as_str()).collect();
        assert_eq!(order, ["2", "3", "1"]);
        assert_eq!(d.board().selected().unwrap().id, a);
    }

    #[test]
    fn test_drag_end_clears_drag() {
        let mut d = make_dispatcher();
        d.dispatch(Gesture::DragStart(DragPayload::new("x", EntityKind::Group)));
        assert!(d.dragging().is_some());
        assert_eq!(d.dispatch(Gesture::DragEnd), Refresh::NONE);
        assert!(d.dragging().is_none());
    }
}
