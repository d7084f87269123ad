use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Menu;

use super::menu::MenuDraft;

/// Keyed store of menus under edit.
///
/// One entry per menu id. An entry only appears while an editor session
/// is open for that menu; reads for an open menu must prefer the draft
/// over the canonical entry.
#[derive(Debug, Default)]
pub struct DraftStore {
    entries: HashMap<Uuid, MenuDraft>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins an editing session: deep-copies the canonical menu into a
    /// fresh draft, replacing any stale entry for the same id.
    pub fn open(&mut self, menu: &Menu) -> &MenuDraft {
        self.entries.insert(menu.id, MenuDraft::from_menu(menu));
        &self.entries[&menu.id]
    }

    pub fn get(&self, menu_id: Uuid) -> Option<&MenuDraft> {
        self.entries.get(&menu_id)
    }

    pub fn is_open(&self, menu_id: Uuid) -> bool {
        self.entries.contains_key(&menu_id)
    }

    /// Applies a copy-on-write mutation and swaps the stored entry.
    ///
    /// The closure receives the current draft and returns its successor;
    /// the entry is replaced wholesale so concurrent readers of a clone
    /// never see a partial update. Returns false when no draft is open.
    pub fn update<F>(&mut self, menu_id: Uuid, mutate: F) -> bool
    where
        F: FnOnce(&MenuDraft) -> MenuDraft,
    {
        match self.entries.get(&menu_id) {
            Some(current) => {
                let next = mutate(current);
                self.entries.insert(menu_id, next);
                true
            }
            None => false,
        }
    }

    /// Ends the session, discarding the entry.
    pub fn close(&mut self, menu_id: Uuid) -> Option<MenuDraft> {
        self.entries.remove(&menu_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::MenuField;

    #[test]
    fn test_absent_until_opened() {
        let store = DraftStore::new();
        assert!(!store.is_open(Uuid::new_v4()));
    }

    #[test]
    fn test_open_copies_canonical() {
        let menu = Menu::new("Lunch", 12.5);
        let mut store = DraftStore::new();
        store.open(&menu);

        assert!(store.is_open(menu.id));
        assert_eq!(store.get(menu.id).unwrap().name, "Lunch");
    }

    #[test]
    fn test_update_swaps_entry() {
        let menu = Menu::new("Lunch", 12.5);
        let mut store = DraftStore::new();
        store.open(&menu);

        let applied = store.update(menu.id, |d| d.with_field(MenuField::Name("Brunch".into())));
        assert!(applied);
        assert_eq!(store.get(menu.id).unwrap().name, "Brunch");
    }

    #[test]
    fn test_update_without_draft_is_noop() {
        let mut store = DraftStore::new();
        assert!(!store.update(Uuid::new_v4(), |d| d.clone()));
    }

    #[test]
    fn test_draft_isolated_from_canonical() {
        let menu = Menu::new("Lunch", 12.5);
        let mut store = DraftStore::new();
        store.open(&menu);
        store.update(menu.id, |d| d.with_field(MenuField::Name("Brunch".into())));

        // The canonical value is untouched by draft edits.
        assert_eq!(menu.name, "Lunch");
    }

    #[test]
    fn test_close_discards_entry() {
        let menu = Menu::new("Lunch", 12.5);
        let mut store = DraftStore::new();
        store.open(&menu);

        let closed = store.close(menu.id);
        assert!(closed.is_some());
        assert!(!store.is_open(menu.id));
        assert!(store.close(menu.id).is_none());
    }

    #[test]
    fn test_reopen_replaces_stale_entry() {
        let menu = Menu::new("Lunch", 12.5);
        let mut store = DraftStore::new();
        store.open(&menu);
        store.update(menu.id, |d| d.with_field(MenuField::Name("Stale".into())));

        store.open(&menu);
        assert_eq!(store.get(menu.id).unwrap().name, "Lunch");
    }
}
