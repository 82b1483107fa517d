//! Property tests for sorting and searching over arbitrary backpacks

use proptest::prelude::*;
use stash_inventory::{
    Backpack, InventoryError, ItemRecord, ItemStore, LinkedBackpack, SearchOutcome, SortKey,
    SortStrategy, MAX_CAPACITY,
};

fn arb_record() -> impl Strategy<Value = ItemRecord> {
    ("[A-Za-z0-9-]{1,8}", "[a-z]{0,6}", -5i32..50).prop_map(|(name, category, rank)| {
        ItemRecord::new(name, category, rank).expect("generated fields are within bounds")
    })
}

fn arb_backpack() -> impl Strategy<Value = Backpack> {
    prop::collection::vec(arb_record(), 0..=MAX_CAPACITY).prop_map(|items| {
        let mut backpack = Backpack::new(MAX_CAPACITY).expect("max capacity is valid");
        for item in items {
            backpack.insert(item).expect("generated length fits");
        }
        backpack
    })
}

fn multiset(items: &[ItemRecord]) -> Vec<(String, String, i32)> {
    let mut tuples: Vec<_> = items
        .iter()
        .map(|i| (i.name().to_string(), i.category().to_string(), i.rank()))
        .collect();
    tuples.sort();
    tuples
}

proptest! {
    #[test]
    fn name_sort_orders_adjacent_pairs(mut backpack in arb_backpack()) {
        backpack.sort(SortStrategy::Bubble);
        for pair in backpack.as_slice().windows(2) {
            prop_assert!(pair[0].name() <= pair[1].name());
        }
        prop_assert_eq!(backpack.sort_key(), SortKey::Name);
    }

    #[test]
    fn category_sort_orders_adjacent_pairs(mut backpack in arb_backpack()) {
        backpack.sort(SortStrategy::Insertion);
        for pair in backpack.as_slice().windows(2) {
            prop_assert!(pair[0].category() <= pair[1].category());
        }
        prop_assert_eq!(backpack.sort_key(), SortKey::Category);
    }

    #[test]
    fn rank_sort_orders_adjacent_pairs(mut backpack in arb_backpack()) {
        backpack.sort(SortStrategy::Selection);
        for pair in backpack.as_slice().windows(2) {
            prop_assert!(pair[0].rank() <= pair[1].rank());
        }
        prop_assert_eq!(backpack.sort_key(), SortKey::Rank);
    }

    #[test]
    fn sorts_preserve_the_multiset(backpack in arb_backpack()) {
        let before = multiset(backpack.as_slice());
        for strategy in SortStrategy::ALL {
            let mut sorted = backpack.clone();
            sorted.sort(strategy);
            prop_assert_eq!(multiset(sorted.as_slice()), before.clone());
        }
    }

    #[test]
    fn quadratic_sorts_count_every_pair(mut backpack in arb_backpack()) {
        let n = backpack.len();
        let expected = n * n.saturating_sub(1) / 2;

        prop_assert_eq!(backpack.sort(SortStrategy::Bubble).comparisons, expected);
        prop_assert_eq!(backpack.sort(SortStrategy::Selection).comparisons, expected);

        // Insertion sort never exceeds the bubble count
        prop_assert!(backpack.sort(SortStrategy::Insertion).comparisons <= expected);
    }

    #[test]
    fn binary_search_agrees_with_sequential(
        mut backpack in arb_backpack(),
        query in "[A-Za-z0-9-]{1,8}",
    ) {
        backpack.sort(SortStrategy::Bubble);

        let mut queries: Vec<String> = backpack.as_slice().iter().map(|i| i.name().to_string()).collect();
        queries.push(query);

        for name in &queries {
            let binary = backpack.binary_search(name).expect("sorted by name");
            let sequential = backpack.find(name);
            prop_assert_eq!(binary.outcome.is_found(), sequential.outcome.is_found());

            // Any matching index is acceptable with duplicates
            if let SearchOutcome::Found(index) = binary.outcome {
                prop_assert_eq!(backpack.as_slice()[index].name(), name.as_str());
            }
        }
    }

    #[test]
    fn binary_search_needs_name_order(
        mut backpack in arb_backpack(),
        prior in prop_oneof![
            Just(None),
            Just(Some(SortStrategy::Insertion)),
            Just(Some(SortStrategy::Selection)),
        ],
        query in "[A-Za-z0-9-]{1,8}",
    ) {
        if let Some(strategy) = prior {
            backpack.sort(strategy);
        }

        let result = backpack.binary_search(&query);
        let is_precondition = matches!(result, Err(InventoryError::Precondition { .. }));
        prop_assert!(is_precondition);
    }

    #[test]
    fn insert_on_full_leaves_backpack_unchanged(
        records in prop::collection::vec(arb_record(), 1..=MAX_CAPACITY),
        extra in arb_record(),
    ) {
        let mut backpack = Backpack::new(records.len()).expect("within max capacity");
        for record in records {
            backpack.insert(record).expect("fits");
        }
        let before = backpack.as_slice().to_vec();

        let err = backpack.insert(extra).unwrap_err();
        prop_assert_eq!(err, InventoryError::CapacityExceeded { capacity: before.len() });
        prop_assert_eq!(backpack.as_slice(), before.as_slice());
    }

    #[test]
    fn removing_absent_name_keeps_length(mut backpack in arb_backpack()) {
        // Generated names never contain '#'
        let len = backpack.len();
        let err = backpack.remove("#absent").unwrap_err();

        prop_assert_eq!(err, InventoryError::not_found("#absent"));
        prop_assert_eq!(backpack.len(), len);
    }

    #[test]
    fn stores_agree_on_membership(
        records in prop::collection::vec(arb_record(), 0..=MAX_CAPACITY),
        query in "[A-Za-z0-9-]{1,8}",
    ) {
        let mut array = Backpack::new(MAX_CAPACITY).expect("valid");
        let mut linked = LinkedBackpack::new(MAX_CAPACITY).expect("valid");
        for record in records {
            array.insert(record.clone()).expect("fits");
            linked.insert(record).expect("fits");
        }

        prop_assert_eq!(array.len(), linked.len());
        prop_assert_eq!(array.find(&query).outcome.is_found(), linked.find(&query).outcome.is_found());
    }
}
