//! Concurrency tests for the item store
//!
//! Many threads hammer one shared store; identifiers must stay unique and
//! gap-free and no update may be lost or half-applied.

use itemhub_core::{ItemFields, ItemId, ItemStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const CREATES_PER_THREAD: usize = 250;

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let store = Arc::new(ItemStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                let mut ids = Vec::with_capacity(CREATES_PER_THREAD);
                for i in 0..CREATES_PER_THREAD {
                    let item = store.create(ItemFields::new(format!("t{t}"), i.to_string()));
                    ids.push(item.id);
                }
                ids
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        // Each thread observes its own allocations in increasing order
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert!(all_ids.insert(id), "identifier {id} allocated twice");
        }
    }

    let total = THREADS * CREATES_PER_THREAD;
    assert_eq!(all_ids.len(), total);
    assert_eq!(store.len(), total);

    let expected: HashSet<ItemId> = (1..=total as ItemId).collect();
    assert_eq!(all_ids, expected);
}

#[test]
fn test_concurrent_updates_are_never_torn() {
    let store = Arc::new(ItemStore::new());
    let id = store.create(ItemFields::new("w0", "w0")).id;

    let writers: Vec<_> = (1..=THREADS)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..CREATES_PER_THREAD {
                    let tag = format!("w{t}");
                    store.update(id, ItemFields::new(tag.clone(), tag)).unwrap();
                }
            })
        })
        .collect();

    let reader = {
        let store = store.clone();
        thread::spawn(move || {
            for _ in 0..CREATES_PER_THREAD * 4 {
                let item = store.get(id).unwrap();
                // Name and value are always written together
                assert_eq!(item.name, item.value);
                assert_eq!(item.id, id);
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    assert_eq!(store.len(), 1);
}

#[test]
fn test_reads_after_write_observe_it() {
    let store = Arc::new(ItemStore::new());

    let created = {
        let store = store.clone();
        thread::spawn(move || store.create(ItemFields::new("a", "1")))
            .join()
            .unwrap()
    };

    let fetched = {
        let store = store.clone();
        thread::spawn(move || store.get(created.id).unwrap())
            .join()
            .unwrap()
    };

    assert_eq!(fetched, created);
}
