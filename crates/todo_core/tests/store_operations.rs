use std::collections::HashSet;
use todo_core::{Task, TaskAction, TaskId, TaskStore};

fn id(raw: u64) -> TaskId {
    TaskId::new(raw)
}

#[test]
fn add_appends_pending_task_with_trimmed_text() {
    let mut store = TaskStore::new();

    let list = store.add("  buy milk  ");

    assert_eq!(list.len(), 1);
    let task = list.get(id(1)).unwrap();
    assert_eq!(task.text(), "buy milk");
    assert!(!task.is_done());
}

#[test]
fn add_blank_text_leaves_list_unchanged() {
    let mut store = TaskStore::new();
    store.add("keep");
    let before = store.snapshot();

    for blank in ["", "   ", "\t\n", "\r\n  "] {
        let after = store.add(blank);
        assert_eq!(after, before);
    }
    assert_eq!(store.revision(), 1);
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = TaskStore::new();
    store.add("one");
    store.add("two");
    let list = store.add("three");

    let texts: Vec<&str> = list.iter().map(Task::text).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn delete_present_id_removes_exactly_one() {
    let mut store = TaskStore::new();
    store.add("a");
    store.add("b");
    store.add("c");

    let list = store.delete(id(2));

    assert_eq!(list.len(), 2);
    assert_eq!(list.ids(), vec![id(1), id(3)]);
}

#[test]
fn delete_absent_id_is_noop() {
    let mut store = TaskStore::new();
    store.add("a");
    let before = store.snapshot();

    let after = store.delete(id(42));

    assert_eq!(after, before);
    assert_eq!(store.revision(), 1);
}

#[test]
fn mark_done_sets_flag_and_keeps_length() {
    let mut store = TaskStore::new();
    store.add("a");
    store.add("b");

    let list = store.mark_done(id(2));

    assert_eq!(list.len(), 2);
    assert!(!list.get(id(1)).unwrap().is_done());
    assert!(list.get(id(2)).unwrap().is_done());
    assert_eq!(list.done_count(), 1);
}

#[test]
fn mark_done_absent_or_repeated_is_noop() {
    let mut store = TaskStore::new();
    store.add("a");
    store.mark_done(id(1));
    let revision = store.revision();
    let before = store.snapshot();

    assert_eq!(store.mark_done(id(1)), before);
    assert_eq!(store.mark_done(id(99)), before);
    assert_eq!(store.revision(), revision);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut store = TaskStore::new();
    store.add("first");
    store.delete(id(1));

    let list = store.add("second");

    assert_eq!(list.ids(), vec![id(2)]);
}

#[test]
fn walkthrough_add_mark_delete() {
    let mut store = TaskStore::new();
    assert!(store.snapshot().is_empty());

    let list = store.add("buy milk");
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": 1, "text": "buy milk", "done": false }])
    );

    let list = store.mark_done(id(1));
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": 1, "text": "buy milk", "done": true }])
    );

    let list = store.delete(id(1));
    assert!(list.is_empty());
    assert_eq!(store.revision(), 3);
}

#[test]
fn old_snapshots_are_not_affected_by_later_operations() {
    let mut store = TaskStore::new();
    store.add("a");
    let old = store.snapshot();

    store.mark_done(id(1));
    store.add("b");

    assert_eq!(old.len(), 1);
    assert!(!old.get(id(1)).unwrap().is_done());
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn noop_returns_same_snapshot_allocation() {
    let mut store = TaskStore::new();
    store.add("a");
    let before = store.snapshot();

    let after = store.delete(id(7));

    assert!(before.ptr_eq(&after));
}

#[test]
fn dispatch_routes_every_action() {
    let mut store = TaskStore::new();

    store.dispatch(TaskAction::add("write report"));
    store.dispatch(TaskAction::add("   "));
    store.dispatch(TaskAction::add("call bob"));
    store.dispatch(TaskAction::mark_done(id(1)));
    let list = store.dispatch(TaskAction::delete(id(2)));

    assert_eq!(list.len(), 1);
    let task = list.get(id(1)).unwrap();
    assert_eq!(task.text(), "write report");
    assert!(task.is_done());
}

#[test]
fn recorded_actions_replay_from_json() {
    let script = serde_json::json!([
        { "type": "add", "text": "one" },
        { "type": "add", "text": "two" },
        { "type": "mark_done", "id": 2 },
        { "type": "delete", "id": 1 },
        { "type": "delete", "id": 1 }
    ]);
    let actions: Vec<TaskAction> = serde_json::from_value(script).unwrap();

    let mut store = TaskStore::new();
    for action in actions {
        store.dispatch(action);
    }

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": 2, "text": "two", "done": true }])
    );
}

#[test]
fn action_serialization_uses_type_tag() {
    let json = serde_json::to_value(TaskAction::mark_done(id(3))).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "mark_done", "id": 3 }));

    let json = serde_json::to_value(TaskAction::add("x")).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "add", "text": "x" }));
}

#[test]
fn ids_stay_unique_over_mixed_operation_sequence() {
    let mut store = TaskStore::new();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut issued = HashSet::new();

    for step in 0..500 {
        // xorshift keeps the sequence deterministic without extra deps.
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let target = id(seed % 40 + 1);

        match seed % 4 {
            0 | 1 => {
                let text = if step % 10 == 0 { " ".to_string() } else { format!("task {step}") };
                if let Ok(new_id) = store.try_add(&text) {
                    assert!(issued.insert(new_id), "id {new_id} issued twice");
                }
            }
            2 => {
                store.delete(target);
            }
            _ => {
                store.mark_done(target);
            }
        }

        let list = store.snapshot();
        let unique: HashSet<TaskId> = list.ids().into_iter().collect();
        assert_eq!(unique.len(), list.len());
    }
}
