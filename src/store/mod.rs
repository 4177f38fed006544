use chrono::Utc;

pub mod entities;

pub use entities::{ItemPatch, ListItem, TodoList};

/// In-memory repository of lists and their items. Sole owner of all state:
/// every query and mutation goes through these methods. Absence is signalled
/// with `Option`/`bool`; "not found" is an expected outcome, not an error.
///
/// Ids come from two independent monotonic counters (one for lists, one for
/// items, global across lists) and are never reused within a process lifetime.
#[derive(Debug)]
pub struct ListStore {
    lists: Vec<TodoList>,
    next_list_id: i32,
    next_item_id: i32,
}

impl ListStore {
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            next_list_id: 1,
            next_item_id: 1,
        }
    }

    /// Store pre-populated with the example lists every fresh process starts
    /// with: a shopping list with two items and a work todo list with one.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        let shopping = store.create_list(
            "Lista de Compras",
            "Compras do supermercado",
            "Shopping",
            "#10b981",
        );
        store.add_item(shopping.id, "Leite", "1 litro de leite integral", "Laticínios", 2);
        store.add_item(shopping.id, "Pão", "Pão francês", "Padaria", 3);

        let work = store.create_list(
            "Tarefas do Trabalho",
            "Tarefas importantes para esta semana",
            "Todo",
            "#f59e0b",
        );
        store.add_item(
            work.id,
            "Revisar código",
            "Revisar pull request do projeto X",
            "Desenvolvimento",
            3,
        );

        store
    }

    /// Snapshot of all lists in insertion order.
    pub fn lists(&self) -> Vec<TodoList> {
        self.lists.clone()
    }

    pub fn get(&self, id: i32) -> Option<TodoList> {
        self.lists.iter().find(|list| list.id == id).cloned()
    }

    pub fn create_list(
        &mut self,
        name: &str,
        description: &str,
        kind: &str,
        color: &str,
    ) -> TodoList {
        let list = TodoList {
            id: self.take_list_id(),
            name: name.to_string(),
            description: description.to_string(),
            kind: kind.to_string(),
            color: color.to_string(),
            created_at: Utc::now(),
            items: Vec::new(),
        };
        self.lists.push(list.clone());
        list
    }

    /// Overwrites the display fields of a list. `created_at` and the item
    /// sequence are untouched.
    pub fn update_list(
        &mut self,
        id: i32,
        name: &str,
        description: &str,
        kind: &str,
        color: &str,
    ) -> Option<TodoList> {
        let list = self.find_list_mut(id)?;
        list.name = name.to_string();
        list.description = description.to_string();
        list.kind = kind.to_string();
        list.color = color.to_string();
        Some(list.clone())
    }

    /// Removes a list and, with it, every item it owns.
    pub fn delete_list(&mut self, id: i32) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);
        self.lists.len() != before
    }

    /// Appends a new item to a list. Returns `None` without consuming an item
    /// id when the list does not exist.
    pub fn add_item(
        &mut self,
        list_id: i32,
        title: &str,
        description: &str,
        category: &str,
        priority: i32,
    ) -> Option<ListItem> {
        let id = self.next_item_id;
        let list = self.find_list_mut(list_id)?;
        let item = ListItem {
            id,
            title: title.to_string(),
            description: description.to_string(),
            is_completed: false,
            created_at: Utc::now(),
            completed_at: None,
            category: category.to_string(),
            priority,
        };
        list.items.push(item.clone());
        self.next_item_id += 1;
        Some(item)
    }

    /// Applies the fields present in `patch`, leaving the rest alone. When the
    /// patch carries `is_completed`, `completed_at` is stamped or cleared even
    /// if the value did not actually change.
    pub fn update_item(&mut self, list_id: i32, item_id: i32, patch: ItemPatch) -> Option<ListItem> {
        let item = self.find_item_mut(list_id, item_id)?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(priority) = patch.priority {
            item.priority = priority;
        }
        if let Some(done) = patch.is_completed {
            item.is_completed = done;
            item.completed_at = if done { Some(Utc::now()) } else { None };
        }
        Some(item.clone())
    }

    pub fn delete_item(&mut self, list_id: i32, item_id: i32) -> bool {
        let Some(list) = self.find_list_mut(list_id) else {
            return false;
        };
        let before = list.items.len();
        list.items.retain(|item| item.id != item_id);
        list.items.len() != before
    }

    /// Flips `is_completed` and stamps or clears `completed_at` to match.
    pub fn toggle_item(&mut self, list_id: i32, item_id: i32) -> bool {
        let Some(item) = self.find_item_mut(list_id, item_id) else {
            return false;
        };
        item.is_completed = !item.is_completed;
        item.completed_at = if item.is_completed {
            Some(Utc::now())
        } else {
            None
        };
        true
    }

    fn find_list_mut(&mut self, id: i32) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    fn find_item_mut(&mut self, list_id: i32, item_id: i32) -> Option<&mut ListItem> {
        self.find_list_mut(list_id)?
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
    }

    fn take_list_id(&mut self) -> i32 {
        let id = self.next_list_id;
        self.next_list_id += 1;
        id
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemPatch, ListStore};

    fn store_with_list(name: &str) -> (ListStore, i32) {
        let mut store = ListStore::new();
        let list = store.create_list(name, "", "Todo", "#3b82f6");
        (store, list.id)
    }

    #[test]
    fn list_ids_are_sequential_and_never_reused() {
        let mut store = ListStore::new();
        let first = store.create_list("First", "", "Todo", "#3b82f6");
        let second = store.create_list("Second", "", "Todo", "#3b82f6");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert!(store.delete_list(second.id));
        let third = store.create_list("Third", "", "Todo", "#3b82f6");
        assert_eq!(third.id, 3);
    }

    #[test]
    fn item_ids_are_unique_across_lists() {
        let mut store = ListStore::new();
        let a = store.create_list("A", "", "Todo", "#3b82f6");
        let b = store.create_list("B", "", "Todo", "#3b82f6");

        let first = store.add_item(a.id, "one", "", "Geral", 1).unwrap();
        let second = store.add_item(b.id, "two", "", "Geral", 1).unwrap();
        let third = store.add_item(a.id, "three", "", "Geral", 1).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn add_item_to_missing_list_consumes_no_id() {
        let (mut store, list_id) = store_with_list("Only");
        assert!(store.add_item(99, "ghost", "", "Geral", 1).is_none());

        let item = store.add_item(list_id, "real", "", "Geral", 1).unwrap();
        assert_eq!(item.id, 1);
    }

    #[test]
    fn deleting_a_list_removes_its_items() {
        let (mut store, list_id) = store_with_list("Doomed");
        let first = store.add_item(list_id, "one", "", "Geral", 1).unwrap();
        let second = store.add_item(list_id, "two", "", "Geral", 1).unwrap();

        assert!(store.delete_list(list_id));
        assert!(store.get(list_id).is_none());
        assert!(
            store
                .update_item(list_id, first.id, ItemPatch::default())
                .is_none()
        );
        assert!(!store.delete_item(list_id, second.id));
        assert!(!store.toggle_item(list_id, first.id));
    }

    #[test]
    fn completed_at_tracks_is_completed() {
        let (mut store, list_id) = store_with_list("Toggles");
        let item = store.add_item(list_id, "task", "", "Geral", 1).unwrap();
        assert!(!item.is_completed);
        assert!(item.completed_at.is_none());

        let patch = ItemPatch {
            is_completed: Some(true),
            ..ItemPatch::default()
        };
        let updated = store.update_item(list_id, item.id, patch).unwrap();
        assert!(updated.is_completed);
        assert!(updated.completed_at.is_some());

        // Stamped again even though the value did not change.
        let patch = ItemPatch {
            is_completed: Some(true),
            ..ItemPatch::default()
        };
        let updated = store.update_item(list_id, item.id, patch).unwrap();
        assert!(updated.completed_at.is_some());

        let patch = ItemPatch {
            is_completed: Some(false),
            ..ItemPatch::default()
        };
        let updated = store.update_item(list_id, item.id, patch).unwrap();
        assert!(!updated.is_completed);
        assert!(updated.completed_at.is_none());
    }

    #[test]
    fn empty_patch_leaves_item_unchanged() {
        let (mut store, list_id) = store_with_list("Stable");
        let item = store
            .add_item(list_id, "task", "details", "Casa", 2)
            .unwrap();

        let updated = store
            .update_item(list_id, item.id, ItemPatch::default())
            .unwrap();
        assert_eq!(updated.title, item.title);
        assert_eq!(updated.description, item.description);
        assert_eq!(updated.category, item.category);
        assert_eq!(updated.priority, item.priority);
        assert_eq!(updated.is_completed, item.is_completed);
        assert_eq!(updated.completed_at, item.completed_at);
        assert_eq!(updated.created_at, item.created_at);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let (mut store, list_id) = store_with_list("Partial");
        let item = store
            .add_item(list_id, "task", "details", "Casa", 2)
            .unwrap();

        let patch = ItemPatch {
            title: Some("renamed".to_string()),
            priority: Some(3),
            ..ItemPatch::default()
        };
        let updated = store.update_item(list_id, item.id, patch).unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.priority, 3);
        assert_eq!(updated.description, "details");
        assert_eq!(updated.category, "Casa");
        assert!(!updated.is_completed);
    }

    #[test]
    fn double_toggle_restores_initial_state() {
        let (mut store, list_id) = store_with_list("Flip");
        let item = store.add_item(list_id, "task", "", "Geral", 1).unwrap();

        assert!(store.toggle_item(list_id, item.id));
        let toggled = store.get(list_id).unwrap().items[0].clone();
        assert!(toggled.is_completed);
        assert!(toggled.completed_at.is_some());

        assert!(store.toggle_item(list_id, item.id));
        let restored = store.get(list_id).unwrap().items[0].clone();
        assert!(!restored.is_completed);
        assert!(restored.completed_at.is_none());
    }

    #[test]
    fn update_list_preserves_created_at_and_items() {
        let (mut store, list_id) = store_with_list("Before");
        let created_at = store.get(list_id).unwrap().created_at;
        store.add_item(list_id, "keep me", "", "Geral", 1).unwrap();

        let updated = store
            .update_list(list_id, "After", "new words", "Notes", "#111111")
            .unwrap();
        assert_eq!(updated.name, "After");
        assert_eq!(updated.kind, "Notes");
        assert_eq!(updated.color, "#111111");
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.items.len(), 1);
    }

    #[test]
    fn items_keep_insertion_order() {
        let (mut store, list_id) = store_with_list("Ordered");
        store.add_item(list_id, "low", "", "Geral", 1).unwrap();
        store.add_item(list_id, "high", "", "Geral", 3).unwrap();
        store.add_item(list_id, "medium", "", "Geral", 2).unwrap();

        let titles: Vec<String> = store
            .get(list_id)
            .unwrap()
            .items
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, ["low", "high", "medium"]);
    }

    #[test]
    fn groceries_scenario() {
        let mut store = ListStore::seeded();

        let list = store.create_list("Groceries", "", "Shopping", "#10b981");
        assert_eq!(list.id, 3);
        assert_eq!(list.kind, "Shopping");
        assert_eq!(list.color, "#10b981");
        assert!(list.items.is_empty());

        let item = store.add_item(list.id, "Milk", "", "Dairy", 2).unwrap();
        assert_eq!(item.id, 4);
        assert!(!item.is_completed);
        assert!(item.completed_at.is_none());

        assert!(store.toggle_item(list.id, item.id));
        let toggled = store.get(list.id).unwrap().items[0].clone();
        assert!(toggled.is_completed);
        assert!(toggled.completed_at.is_some());

        assert!(store.toggle_item(list.id, item.id));
        let restored = store.get(list.id).unwrap().items[0].clone();
        assert!(!restored.is_completed);
        assert!(restored.completed_at.is_none());
    }

    #[test]
    fn seeded_store_matches_startup_fixture() {
        let store = ListStore::seeded();
        let lists = store.lists();
        assert_eq!(lists.len(), 2);

        assert_eq!(lists[0].name, "Lista de Compras");
        assert_eq!(lists[0].kind, "Shopping");
        assert_eq!(lists[0].items.len(), 2);
        assert_eq!(lists[1].name, "Tarefas do Trabalho");
        assert_eq!(lists[1].items.len(), 1);

        let item_ids: Vec<i32> = lists
            .iter()
            .flat_map(|list| list.items.iter().map(|item| item.id))
            .collect();
        assert_eq!(item_ids, [1, 2, 3]);
    }
}
