use tasklist_server::server::data_models::Task;
use tasklist_server::server::store::{StoreError, TaskStore};

fn task(id: &str, description: &str) -> Task {
    Task {
        id: id.to_string(),
        description: description.to_string(),
        note: "".to_string(),
        applications: vec!["Terminal".to_string()],
    }
}

#[test]
fn test_seeded_store_contents() {
    let store = TaskStore::with_seed_tasks();

    assert_eq!(store.len(), 2);
    assert!(store.get("1").is_some());
    assert!(store.get("2").is_some());
}

#[test]
fn test_insert_and_get() {
    let store = TaskStore::new();
    let t = task("42", "try the store");

    store.insert(t.clone()).unwrap();
    assert_eq!(store.get("42"), Some(t));
}

#[test]
fn test_insert_conflict_keeps_existing() {
    let store = TaskStore::new();
    let first = task("1", "first");

    store.insert(first.clone()).unwrap();
    let err = store.insert(task("1", "second")).unwrap_err();

    assert_eq!(err, StoreError::Conflict("1".to_string()));
    assert_eq!(store.get("1"), Some(first));
}

#[test]
fn test_remove() {
    let store = TaskStore::with_seed_tasks();

    let removed = store.remove("1").unwrap();
    assert_eq!(removed.id, "1");
    assert_eq!(store.get("1"), None);
    assert_eq!(store.remove("1"), Err(StoreError::NotFound));
}

#[test]
fn test_list_snapshot_keys() {
    let store = TaskStore::new();
    store.insert(task("a", "one")).unwrap();
    store.insert(task("b", "two")).unwrap();

    let snapshot = store.list();
    let mut keys: Vec<_> = snapshot.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

    // The snapshot is a copy; mutating the store afterwards does not change it.
    store.remove("a").unwrap();
    assert!(snapshot.contains_key("a"));
    assert!(!store.is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_task_json_shape() {
    let t = task("1", "check the wire shape");
    let value = serde_json::to_value(&t).unwrap();

    assert_eq!(value["id"], "1");
    assert_eq!(value["description"], "check the wire shape");
    assert_eq!(value["note"], "");
    assert_eq!(value["applications"][0], "Terminal");

    let decoded: Task = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, t);
}
