mod common;

use common::{entry, mood};
use diaryfold::{reduce, Action, Emotion, EntryStore, Event, Journal};
use serde_json::json;

#[test]
fn test_create_on_empty_store() {
    let mut store = EntryStore::new();
    let id = store.create("a", "hi", Emotion::BEST);

    assert_eq!(id, 0);
    assert_eq!(store.len(), 1);
    let first = &store.entries()[0];
    assert_eq!(first.id, 0);
    assert_eq!(first.author, "a");
    assert_eq!(first.content, "hi");
    assert_eq!(first.emotion, Emotion::BEST);
    assert!(first.created_date > 0);

    let stats = *store.analytics();
    assert_eq!(stats.good_count, 1);
    assert_eq!(stats.bad_count, 0);
    assert_eq!(stats.good_ratio, 100.0);
}

#[test]
fn test_create_prepends_newest_first() {
    let mut store = EntryStore::new();
    store.create("a", "x", mood(1));
    store.create("b", "y", mood(5));

    let entries = store.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[0].author, "b");
    assert_eq!(entries[0].content, "y");
    assert_eq!(entries[1].id, 0);
    assert_eq!(entries[1].content, "x");

    let stats = *store.analytics();
    assert_eq!((stats.good_count, stats.bad_count), (1, 1));
    assert_eq!(stats.good_ratio, 50.0);
}

#[test]
fn test_create_keeps_relative_order_of_others() {
    let mut store = EntryStore::new();
    store.init(vec![entry(10, "a", "one", 3), entry(11, "b", "two", 2)]);
    store.create("c", "three", mood(4));

    let ids: Vec<_> = store.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 10, 11]);
}

#[test]
fn test_create_stamps_event_time() {
    let journal = reduce(
        Journal::default(),
        Event::at(
            Action::Create {
                author: "a".into(),
                content: "hi".into(),
                emotion: mood(2),
            },
            42,
        ),
    );
    assert_eq!(journal.entries[0].created_date, 42);
}

#[test]
fn test_init_replaces_verbatim() {
    let mut store = EntryStore::new();
    store.create("old", "gone soon", mood(3));

    let batch = vec![entry(7, "a", "x", 1), entry(3, "b", "y", 5), entry(9, "c", "z", 3)];
    store.init(batch.clone());
    assert_eq!(store.entries(), batch.as_slice());
}

#[test]
fn test_init_does_not_advance_counter() {
    let mut store = EntryStore::new();
    store.init(vec![entry(100, "a", "x", 1), entry(101, "b", "y", 2)]);
    assert_eq!(store.next_id(), 0);

    let id = store.create("c", "z", mood(3));
    assert_eq!(id, 0);
}

#[test]
fn test_create_after_seeded_batch_continues_counter() {
    let mut store = EntryStore::new();
    let batch: Vec<_> = (0..20)
        .map(|_| {
            let id = store.reserve_id();
            entry(id, "seed", "body", 3)
        })
        .collect();
    store.init(batch);
    assert_eq!(store.len(), 20);

    let id = store.create("a", "fresh", mood(4));
    assert_eq!(id, 20);
    assert_eq!(store.entries()[0].id, 20);
}

#[test]
fn test_remove_existing() {
    let mut store = EntryStore::new();
    store.init(vec![entry(0, "a", "x", 1), entry(1, "b", "y", 2), entry(2, "c", "z", 3)]);
    store.remove(1);

    let ids: Vec<_> = store.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut store = EntryStore::new();
    let batch = vec![entry(0, "a", "x", 1), entry(1, "b", "y", 2), entry(2, "c", "z", 3)];
    store.init(batch.clone());
    store.remove(99);
    assert_eq!(store.entries(), batch.as_slice());
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = EntryStore::new();
    store.init(vec![entry(0, "a", "x", 1), entry(1, "b", "y", 2)]);
    store.remove(0);
    let once = store.entries().to_vec();
    store.remove(0);
    assert_eq!(store.entries(), once.as_slice());
}

#[test]
fn test_removed_id_is_never_reused() {
    let mut store = EntryStore::new();
    let first = store.create("a", "x", mood(1));
    store.remove(first);
    let second = store.create("a", "y", mood(1));
    assert_ne!(first, second);
    assert_eq!(second, 1);
}

#[test]
fn test_edit_changes_only_content() {
    let mut store = EntryStore::new();
    store.init(vec![entry(0, "a", "x", 1), entry(1, "b", "y", 5)]);
    let before = store.entries().to_vec();

    store.edit(1, "rewritten");

    let after = store.entries();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].content, "rewritten");
    assert_eq!(after[1].id, before[1].id);
    assert_eq!(after[1].author, before[1].author);
    assert_eq!(after[1].emotion, before[1].emotion);
    assert_eq!(after[1].created_date, before[1].created_date);
}

#[test]
fn test_edit_twice_keeps_order() {
    let mut store = EntryStore::new();
    store.init(vec![entry(0, "a", "x", 1), entry(1, "b", "y", 5), entry(2, "c", "z", 3)]);
    let ids_before: Vec<_> = store.entries().iter().map(|e| e.id).collect();

    store.edit(1, "first edit");
    store.edit(1, "second edit");

    let ids_after: Vec<_> = store.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids_before, ids_after);
    assert_eq!(store.get(1).unwrap().content, "second edit");
}

#[test]
fn test_edit_absent_is_noop() {
    let mut store = EntryStore::new();
    let batch = vec![entry(0, "a", "x", 1)];
    store.init(batch.clone());
    store.edit(5, "nobody home");
    assert_eq!(store.entries(), batch.as_slice());
}

#[test]
fn test_counter_only_advances_on_create() {
    let mut store = EntryStore::new();
    store.create("a", "x", mood(1));
    store.create("a", "y", mood(1));
    assert_eq!(store.next_id(), 2);

    store.edit(0, "changed");
    store.remove(1);
    store.remove(1);
    store.init(vec![]);
    assert_eq!(store.next_id(), 2);
}

#[test]
fn test_dispatch_value_create() {
    let mut store = EntryStore::new();
    let entries = store
        .dispatch_value(json!({"type": "CREATE", "author": "kim", "content": "sunny", "emotion": 4}))
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].author, "kim");
    assert_eq!(entries[0].emotion, mood(4));
}

#[test]
fn test_dispatch_value_unknown_tag_leaves_store_untouched() {
    let mut store = EntryStore::new();
    store.init(vec![entry(0, "a", "x", 1)]);

    let result = store.dispatch_value(json!({"type": "ARCHIVE", "targetId": 0, "newContent": "y"}));
    assert!(result.is_err());
    assert_eq!(store.get(0).unwrap().content, "x");
}

#[test]
fn test_journal_tracks_counter() {
    let mut store = EntryStore::new();
    store.create("a", "x", mood(1));
    assert_eq!(store.journal().counter.peek(), 1);
    assert_eq!(store.journal().entries.len(), 1);
}
