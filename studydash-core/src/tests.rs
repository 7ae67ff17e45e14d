//! List and dashboard tests against real stores.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::dashboard::{Dashboard, TODO_KEYS};
    use crate::domain::{DomainError, DomainResult, Priority, TodoItem};
    use crate::list::{DropTarget, ReorderableList, RenderSurface};
    use crate::progress::{Progress, ProgressSink};
    use crate::storage::{keys, JsonFileStore, JsonStoreExt, KeyValueStore, MemoryStore, SharedStore};

    /// Surface that records every render for inspection
    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Vec<String>>>>);

    impl Recorder {
        fn renders(&self) -> Vec<Vec<String>> {
            self.0.lock().unwrap().clone()
        }
    }

    impl RenderSurface<TodoItem> for Recorder {
        fn render(&mut self, rows: &[TodoItem]) {
            self.0.lock().unwrap().push(rows.iter().map(|t| t.text.clone()).collect());
        }
    }

    #[derive(Clone, Default)]
    struct ChartRecorder(Arc<Mutex<Vec<Progress>>>);

    impl ProgressSink for ChartRecorder {
        fn draw(&mut self, progress: Progress) {
            self.0.lock().unwrap().push(progress);
        }
    }

    /// Store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: Mutex<bool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> DomainResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> DomainResult<()> {
            if *self.fail_writes.lock().unwrap() {
                return Err(DomainError::Storage("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> DomainResult<()> {
            self.inner.remove(key)
        }
    }

    fn todo(text: &str, priority: Priority) -> TodoItem {
        TodoItem::new(text, priority)
    }

    fn texts(list: &ReorderableList<TodoItem>) -> Vec<&str> {
        list.items().iter().map(|t| t.text.as_str()).collect()
    }

    fn seeded(store: &SharedStore, names: &[&str]) -> ReorderableList<TodoItem> {
        let mut list = ReorderableList::load(store.clone(), TODO_KEYS);
        for name in names {
            list.append(todo(name, Priority::Low)).unwrap();
        }
        list
    }

    #[test]
    fn test_append_persists_and_renders() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let recorder = Recorder::default();
        let mut list = ReorderableList::load(store.clone(), TODO_KEYS)
            .with_surface(Box::new(recorder.clone()));

        list.append(todo("A", Priority::Low)).unwrap();
        list.append(todo("B", Priority::High)).unwrap();
        list.append(todo("C", Priority::Medium)).unwrap();

        assert_eq!(texts(&list), vec!["A", "B", "C"]);
        let persisted: Vec<TodoItem> = store.get_json(keys::TODOS).unwrap().unwrap();
        assert_eq!(persisted, list.items());
        assert_eq!(recorder.renders().last().unwrap(), &vec!["A", "B", "C"]);
        assert_eq!(recorder.renders().len(), 3);
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let list = seeded(&store, &[""]);
        assert_eq!(texts(&list), vec![""]);
    }

    #[test]
    fn test_reload_yields_equal_sequence() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let list = seeded(&store, &["A", "B", "C"]);

        let reloaded = ReorderableList::<TodoItem>::load(store.clone(), TODO_KEYS);
        assert_eq!(reloaded.items(), list.items());
    }

    #[test]
    fn test_complete_removes_item_and_counts() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A", "B", "C"]);
        assert_eq!(list.completed_count(), 0);

        let done = list.complete(1).unwrap();

        assert_eq!(done.text, "B");
        assert_eq!(texts(&list), vec!["A", "C"]);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(store.get(keys::TASKS_COMPLETED).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_complete_out_of_range_is_rejected() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let recorder = Recorder::default();
        let mut list = seeded(&store, &["A"]).with_surface(Box::new(recorder.clone()));

        let err = list.complete(5).unwrap_err();

        assert!(matches!(err, DomainError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(texts(&list), vec!["A"]);
        assert_eq!(list.completed_count(), 0);
        assert!(recorder.renders().is_empty());
    }

    #[test]
    fn test_remove_does_not_count() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A", "B"]);
        list.remove(0).unwrap();
        assert_eq!(texts(&list), vec!["B"]);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_reorder_to_end() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A", "B", "C"]);

        list.reorder(0, DropTarget::End).unwrap();

        assert_eq!(texts(&list), vec!["B", "C", "A"]);
        let persisted: Vec<TodoItem> = store.get_json(keys::TODOS).unwrap().unwrap();
        assert_eq!(persisted, list.items());
    }

    #[test]
    fn test_reorder_before_target() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A", "B", "C", "D"]);

        // Downward: A lands just before D.
        list.reorder(0, DropTarget::Before(3)).unwrap();
        assert_eq!(texts(&list), vec!["B", "C", "A", "D"]);

        // Upward: D lands just before B.
        list.reorder(3, DropTarget::Before(0)).unwrap();
        assert_eq!(texts(&list), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn test_reorder_onto_itself_or_successor_is_unchanged() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A", "B", "C"]);

        list.reorder(1, DropTarget::Before(1)).unwrap();
        list.reorder(1, DropTarget::Before(2)).unwrap();

        assert_eq!(texts(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_past_end_appends() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A", "B", "C"]);
        list.reorder(1, DropTarget::Before(99)).unwrap();
        assert_eq!(texts(&list), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let names = ["A", "B", "C", "D", "E"];
        let mut list = seeded(&store, &names);

        for from in 0..names.len() {
            for to in 0..=names.len() {
                let target = if to == names.len() { DropTarget::End } else { DropTarget::Before(to) };
                list.reorder(from, target).unwrap();
                let mut sorted: Vec<&str> = texts(&list);
                sorted.sort();
                assert_eq!(sorted, names.to_vec());
            }
        }
    }

    #[test]
    fn test_reorder_out_of_range_is_rejected() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut list = seeded(&store, &["A"]);
        assert!(list.reorder(3, DropTarget::End).is_err());
        assert_eq!(texts(&list), vec!["A"]);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let flaky = Arc::new(FlakyStore::default());
        let store: SharedStore = flaky.clone();
        let mut list = seeded(&store, &["A", "B"]);

        *flaky.fail_writes.lock().unwrap() = true;
        assert!(list.complete(0).is_err());
        assert!(list.append(todo("C", Priority::High)).is_err());

        assert_eq!(texts(&list), vec!["A", "B"]);
        assert_eq!(list.completed_count(), 0);
        let persisted: Vec<TodoItem> = store.get_json(keys::TODOS).unwrap().unwrap();
        assert_eq!(persisted, list.items());
    }

    /// Accepts every write except the completed counter
    #[derive(Default)]
    struct CounterWriteFails {
        inner: MemoryStore,
    }

    impl KeyValueStore for CounterWriteFails {
        fn get(&self, key: &str) -> DomainResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> DomainResult<()> {
            if key == keys::TASKS_COMPLETED {
                return Err(DomainError::Storage("counter locked".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> DomainResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_counter_write_restores_items_key() {
        let failing = CounterWriteFails::default();
        failing
            .inner
            .set(
                keys::TODOS,
                &serde_json::to_string(&[
                    todo("A", Priority::Low),
                    todo("B", Priority::Low),
                    todo("C", Priority::Low),
                ])
                .unwrap(),
            )
            .unwrap();
        let store: SharedStore = Arc::new(failing);
        let mut list = ReorderableList::<TodoItem>::load(store.clone(), TODO_KEYS);

        assert!(list.complete(1).is_err());

        assert_eq!(texts(&list), vec!["A", "B", "C"]);
        let persisted: Vec<TodoItem> = store.get_json(keys::TODOS).unwrap().unwrap();
        assert_eq!(persisted, list.items());
    }

    #[test]
    fn test_completed_counter_saturates() {
        let store: SharedStore = Arc::new(MemoryStore::with_entries([
            (keys::TODOS, r#"[{"text":"A","priority":"low"}]"#),
            (keys::TASKS_COMPLETED, "4294967295"),
        ]));
        let mut list = ReorderableList::<TodoItem>::load(store.clone(), TODO_KEYS);
        assert_eq!(list.completed_count(), u32::MAX);

        list.complete(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.completed_count(), u32::MAX);
        assert_eq!(store.get(keys::TASKS_COMPLETED).unwrap().as_deref(), Some("4294967295"));
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let store: SharedStore = Arc::new(MemoryStore::with_entries([
            (keys::TODOS, "{not json"),
            (keys::TASKS_COMPLETED, "lots"),
        ]));
        let list = ReorderableList::<TodoItem>::load(store, TODO_KEYS);
        assert!(list.is_empty());
        assert_eq!(list.completed_count(), 0);

        let store: SharedStore = Arc::new(MemoryStore::with_entries([(keys::TASKS_COMPLETED, "3abc")]));
        assert_eq!(ReorderableList::<TodoItem>::load(store, TODO_KEYS).completed_count(), 0);
    }

    #[test]
    fn test_null_and_wrong_shape_load_empty() {
        let store: SharedStore = Arc::new(MemoryStore::with_entries([(keys::TODOS, "null")]));
        assert!(ReorderableList::<TodoItem>::load(store, TODO_KEYS).is_empty());

        let store: SharedStore =
            Arc::new(MemoryStore::with_entries([(keys::TODOS, r#"[{"text":"A","priority":"urgent"}]"#)]));
        assert!(ReorderableList::<TodoItem>::load(store, TODO_KEYS).is_empty());
    }

    #[test]
    fn test_existing_browser_data_loads() {
        let store: SharedStore = Arc::new(MemoryStore::with_entries([
            (keys::TODOS, r#"[{"text":"A","priority":"low"},{"text":"B","priority":"high"}]"#),
            (keys::TASKS_COMPLETED, "4"),
        ]));
        let list = ReorderableList::<TodoItem>::load(store, TODO_KEYS);
        assert_eq!(texts(&list), vec!["A", "B"]);
        assert_eq!(list.items()[1].priority, Priority::High);
        assert_eq!(list.completed_count(), 4);
    }

    #[test]
    fn test_dashboard_scenario() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let chart = ChartRecorder::default();
        let mut dash = Dashboard::load(store.clone());
        dash.set_progress_sink(Box::new(chart.clone()));

        dash.add_todo("A", Priority::Low).unwrap();
        dash.add_todo("B", Priority::High).unwrap();
        dash.add_todo("C", Priority::Medium).unwrap();
        dash.add_assignment("Essay", "2024-05-01T14:30").unwrap();
        dash.add_class("Physics", "Mon 9:00").unwrap();

        dash.complete_todo(1).unwrap();
        dash.complete_assignment(0).unwrap();

        assert_eq!(
            dash.progress(),
            Progress {
                tasks_completed: 1,
                assignments_completed: 1
            }
        );
        let drawn = chart.0.lock().unwrap().clone();
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].tasks_completed, 1);
        assert_eq!(drawn[0].assignments_completed, 0);

        // Everything comes back after a restart.
        let reloaded = Dashboard::load(store);
        assert_eq!(texts(reloaded.todos()), vec!["A", "C"]);
        assert_eq!(reloaded.schedule().items()[0].label(), "Physics - Mon 9:00");
        assert!(reloaded.assignments().is_empty());
        assert_eq!(reloaded.progress(), dash.progress());
    }

    #[test]
    fn test_dashboard_theme_toggle_persists() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut dash = Dashboard::load(store.clone());
        assert!(!dash.theme().is_dark());
        dash.toggle_theme().unwrap();
        assert!(Dashboard::load(store).theme().is_dark());
    }

    #[test]
    fn test_json_file_store_backs_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        {
            let store: SharedStore = Arc::new(JsonFileStore::open(&path).unwrap());
            let mut dash = Dashboard::load(store);
            dash.add_todo("Revise", Priority::High).unwrap();
            dash.add_todo("Email TA", Priority::Low).unwrap();
            dash.reorder_todo(1, DropTarget::Before(0)).unwrap();
        }
        let store: SharedStore = Arc::new(JsonFileStore::open(&path).unwrap());
        let dash = Dashboard::load(store);
        assert_eq!(texts(dash.todos()), vec!["Email TA", "Revise"]);
    }
}
