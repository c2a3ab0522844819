#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// slot occupancy next to the public API.

use crate::chain::Value;
use crate::hash_table::HashTable;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, Value),
    Search(usize),
    SearchFresh(Vec<u8>),
}

// Small key pools over a tiny alphabet keep collisions and overwrites common.
fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Vec<u8>>, Vec<OpI>)> {
    (1usize..=8, proptest::collection::vec("[ab]{0,3}", 1..=8)).prop_flat_map(|(cap, pool)| {
        let pool: Vec<Vec<u8>> = pool.into_iter().map(String::into_bytes).collect();
        let idx = 0..pool.len();
        let op = prop_oneof![
            (idx.clone(), any::<Value>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.prop_map(OpI::Search),
            proptest::collection::vec(any::<u8>(), 0..4).prop_map(OpI::SearchFresh),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// - `insert` returns the previous value exactly when the model had one.
// - `search` agrees with the model for pool keys and arbitrary bytes.
// - `len` equals the model's distinct key count after each step.
// - Slot occupancies sum to `len` and every key sits in `slot_of(key)`.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let sut = HashTable::new(cap).unwrap();
        let mut model: HashMap<Vec<u8>, Value> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let prev = sut.insert(&pool[i], v);
                    prop_assert_eq!(prev, model.insert(pool[i].clone(), v));
                }
                OpI::Search(i) => {
                    prop_assert_eq!(sut.search(&pool[i]), model.get(&pool[i]).copied());
                }
                OpI::SearchFresh(k) => {
                    prop_assert_eq!(sut.search(&k), model.get(&k).copied());
                }
            }
            prop_assert_eq!(sut.len(), model.len());
        }

        let occupancy: usize = (0..cap).map(|i| sut.slot_len(i).unwrap()).sum();
        prop_assert_eq!(occupancy, model.len());
        for k in model.keys() {
            let slot = sut.slot_of(k);
            prop_assert!(slot < cap);
            prop_assert_eq!(Some(slot), crate::hash::slot_index(k, cap));
        }
        prop_assert_eq!(sut.destroy(), model.len());
    }
}
