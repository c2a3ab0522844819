mod common;

use striped_hashtable::{HashTable, TableError, DEFAULT_CAPACITY};

#[test]
fn create_accepts_positive_capacity_only() {
    for cap in [1usize, 2, 17, DEFAULT_CAPACITY, 4096] {
        let t = HashTable::new(cap).expect("positive capacity");
        assert_eq!(t.capacity(), cap);
    }
    let e = HashTable::new(0).unwrap_err();
    assert!(matches!(
        e,
        TableError::InvalidArgument {
            argument: "capacity",
            ..
        }
    ));
}

#[test]
fn insert_search_and_overwrite() {
    common::init_tracing();
    let t = HashTable::new(DEFAULT_CAPACITY).unwrap();
    assert_eq!(t.insert("apple", 1), None);
    assert_eq!(t.insert("banana", 2), None);
    assert_eq!(t.search("apple"), Some(1));
    assert_eq!(t.search("banana"), Some(2));
    assert_eq!(t.search("cherry"), None);

    assert_eq!(t.insert("apple", 10), Some(1));
    assert_eq!(t.search("apple"), Some(10));
    assert_eq!(t.len(), 2);
    assert_eq!(t.destroy(), 2);
}

#[test]
fn keys_are_raw_bytes() {
    let t = HashTable::new(8).unwrap();
    t.insert([0u8, 159, 146, 150], -1);
    t.insert([0u8], -2);
    assert_eq!(t.search([0u8, 159, 146, 150]), Some(-1));
    assert_eq!(t.search([0u8]), Some(-2));
    assert_eq!(t.search(b""), None);
    assert_eq!(t.len(), 2);
}

#[test]
fn extreme_values_round_trip() {
    let t = HashTable::new(3).unwrap();
    t.insert("min", i32::MIN);
    t.insert("max", i32::MAX);
    t.insert("zero", 0);
    assert_eq!(t.search("min"), Some(i32::MIN));
    assert_eq!(t.search("max"), Some(i32::MAX));
    assert_eq!(t.search("zero"), Some(0));
}

#[test]
fn slot_occupancy_accounts_for_every_key() {
    let t = HashTable::new(16).unwrap();
    for i in 0..500 {
        t.insert(format!("key-{}", i), i);
    }
    let total: usize = (0..16).map(|i| t.slot_len(i).unwrap()).sum();
    assert_eq!(total, 500);
    assert_eq!(t.len(), 500);
    assert!(t.slot_len(16).is_none());
    // 500 djb2 keys over 16 slots should not all collapse into a few slots.
    let used = (0..16).filter(|&i| t.slot_len(i).unwrap() > 0).count();
    assert!(used > 8, "only {} of 16 slots used", used);
}

#[test]
fn dump_lists_every_bucket() {
    let t = HashTable::new(4).unwrap();
    t.insert("k", 7);
    let dump = t.to_string();
    for i in 0..4 {
        assert!(dump.contains(&format!("Bucket {}\n", i)));
    }
    assert!(dump.contains("  k:7\n"));
    assert_eq!(dump.lines().count(), 5);
}

#[test]
fn drop_without_destroy_releases_entries() {
    let t = HashTable::new(2).unwrap();
    for i in 0..10 {
        t.insert(i.to_string(), i);
    }
    drop(t);
}
