use faraway_core::{display_order, packing_stats, ItemStore, SequentialIdSource, SortMode};
use std::collections::HashSet;

fn store() -> ItemStore<SequentialIdSource> {
    ItemStore::with_id_source(SequentialIdSource::new())
}

#[test]
fn input_mode_matches_insertion_order() {
    let mut store = store();
    store.add("Socks", 3);
    store.add("Passport", 1);
    store.add("Sunscreen", 2);
    store.toggle(store.items()[0].id);

    let view = display_order(store.items(), SortMode::Input);
    let expected: Vec<_> = store.items().iter().map(|item| item.id).collect();
    let actual: Vec<_> = view.iter().map(|item| item.id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn description_mode_sorts_ascending() {
    let mut store = store();
    store.add("Banana", 1);
    store.add("Apple", 1);

    let view = display_order(store.items(), SortMode::Description);
    let descriptions: Vec<_> = view.iter().map(|item| item.description.as_str()).collect();
    assert_eq!(descriptions, ["Apple", "Banana"]);
}

#[test]
fn description_mode_ignores_case() {
    let mut store = store();
    store.add("banana", 1);
    store.add("Apple", 1);
    store.add("cherry", 1);

    let view = display_order(store.items(), SortMode::Description);
    let descriptions: Vec<_> = view.iter().map(|item| item.description.as_str()).collect();
    assert_eq!(descriptions, ["Apple", "banana", "cherry"]);
}

#[test]
fn description_mode_keeps_source_order_for_equal_keys() {
    let mut store = store();
    let first = store.add("Towel", 1);
    let second = store.add("towel", 2);

    let view = display_order(store.items(), SortMode::Description);
    assert_eq!(view[0].id, first.id);
    assert_eq!(view[1].id, second.id);
}

#[test]
fn packed_mode_puts_unpacked_before_packed() {
    let mut store = store();
    let socks = store.add("Socks", 3);
    store.add("Passport", 1);
    let sunscreen = store.add("Sunscreen", 2);
    store.add("Charger", 1);
    store.toggle(socks.id);
    store.toggle(sunscreen.id);

    let view = display_order(store.items(), SortMode::Packed);
    for pair in view.windows(2) {
        assert!(
            !(pair[0].packed && !pair[1].packed),
            "unpacked item listed after a packed one"
        );
    }

    let descriptions: Vec<_> = view.iter().map(|item| item.description.as_str()).collect();
    assert_eq!(descriptions, ["Passport", "Charger", "Socks", "Sunscreen"]);
}

#[test]
fn every_mode_yields_a_permutation_of_the_collection() {
    let mut store = store();
    store.add("Socks", 3);
    store.add("apple", 1);
    store.add("Banana", 2);
    store.toggle(store.items()[2].id);

    let source_ids: HashSet<_> = store.items().iter().map(|item| item.id).collect();
    for mode in [SortMode::Input, SortMode::Description, SortMode::Packed] {
        let view = display_order(store.items(), mode);
        assert_eq!(view.len(), store.len());
        let view_ids: HashSet<_> = view.iter().map(|item| item.id).collect();
        assert_eq!(view_ids, source_ids);
    }
}

#[test]
fn sorting_never_mutates_the_collection() {
    let mut store = store();
    store.add("Banana", 1);
    store.add("Apple", 1);
    let before = store.items().to_vec();

    let _ = display_order(store.items(), SortMode::Description);
    let _ = display_order(store.items(), SortMode::Packed);

    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn stats_on_an_empty_list_have_no_percentage() {
    let store = store();
    let stats = packing_stats(store.items());

    assert_eq!(stats.total, 0);
    assert_eq!(stats.packed, 0);
    assert_eq!(stats.percentage, None);
}

#[test]
fn stats_track_packed_share() {
    let mut store = store();
    store.add("Socks", 3);
    let passport = store.add("Passport", 1);
    store.toggle(passport.id);

    let stats = packing_stats(store.items());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.packed, 1);
    assert_eq!(stats.percentage, Some(50));
}

#[test]
fn stats_hit_one_hundred_only_when_everything_is_packed() {
    let mut store = store();
    let socks = store.add("Socks", 3);
    let passport = store.add("Passport", 1);
    store.toggle(socks.id);

    let stats = packing_stats(store.items());
    assert!(stats.percentage < Some(100));

    store.toggle(passport.id);
    let stats = packing_stats(store.items());
    assert_eq!(stats.percentage, Some(100));
    assert_eq!(stats.packed, stats.total);
}

#[test]
fn stats_round_thirds_to_nearest() {
    let mut store = store();
    let first = store.add("a", 1);
    let second = store.add("b", 1);
    store.add("c", 1);

    store.toggle(first.id);
    assert_eq!(packing_stats(store.items()).percentage, Some(33));

    store.toggle(second.id);
    assert_eq!(packing_stats(store.items()).percentage, Some(67));
}

#[test]
fn packed_count_never_exceeds_total() {
    let mut store = store();
    for n in 0..6 {
        let item = store.add(format!("item-{n}"), 1);
        if n % 2 == 0 {
            store.toggle(item.id);
        }
        let stats = packing_stats(store.items());
        assert!(stats.packed <= stats.total);
    }
}

#[test]
fn stats_after_clear_show_the_empty_state() {
    let mut store = store();
    for n in 1..=5 {
        let item = store.add(format!("item-{n}"), 1);
        store.toggle(item.id);
    }

    store.clear_all();

    let stats = packing_stats(store.items());
    assert_eq!((stats.total, stats.packed, stats.percentage), (0, 0, None));
}
