//! Folding, flattening, sorting, zipping and set operation tests

use std::collections::HashMap;

use collkit::{
    defaults, difference, extend, flatten, intersection, nested, reduce, reduce_with, shuffle,
    sort_by, sort_by_key_fn, sort_by_property, zip, zip_pair, Collection, Nested, ReduceMode,
};
use serde_json::{json, Map, Value};

fn add(acc: i32, x: &i32) -> i32 {
    acc + x
}

// ============================================================================
// reduce
// ============================================================================

#[test]
fn test_reduce_documented_cases() {
    assert_eq!(reduce(&vec![1, 2, 3], add, Some(0)), Some(6));
    assert_eq!(reduce(&Vec::<i32>::new(), add, Some(5)), Some(5));
    assert_eq!(reduce(&Vec::<i32>::new(), add, None), None);
}

#[test]
fn test_reduce_zero_element_with_seed() {
    // The accumulator never turns falsy here, so both modes agree.
    for mode in [ReduceMode::Corrected, ReduceMode::Faithful] {
        assert_eq!(reduce_with(&vec![0, 1, 2], add, Some(10), mode), Some(13));
    }
}

#[test]
fn test_reduce_over_mapping() {
    let prices: HashMap<&str, u32> = HashMap::from([("tea", 3), ("cake", 5)]);
    let total = reduce(&prices, |acc: u32, price| acc + price, None);
    assert_eq!(total, Some(8));
}

#[test]
fn test_reduce_over_collection_sequence() {
    let words = vec!["a".to_string(), "b".to_string()];
    let coll: Collection<'_, (), String> = Collection::Sequence(&words);
    let joined = reduce(&coll, |acc: String, w| acc + w, None);
    assert_eq!(joined.as_deref(), Some("ab"));
}

#[test]
fn test_faithful_mode_resets_falsy_json_accumulator_to_zero() {
    let items = vec![json!(1), json!(2)];
    let sum = |acc: Value, x: &Value| {
        json!(acc.as_i64().unwrap_or(-100) + x.as_i64().unwrap_or(0))
    };

    // A null seed is falsy: the faithful mode swaps it for numeric zero.
    let faithful = reduce_with(&items, sum, Some(json!(null)), ReduceMode::Faithful);
    assert_eq!(faithful, Some(json!(3)));

    // Corrected passes the null through, which this combiner reads as -100.
    let corrected = reduce_with(&items, sum, Some(json!(null)), ReduceMode::Corrected);
    assert_eq!(corrected, Some(json!(-97)));

    // A zero seed is reset to zero, so both modes agree.
    for mode in [ReduceMode::Corrected, ReduceMode::Faithful] {
        assert_eq!(reduce_with(&items, sum, Some(json!(0)), mode), Some(json!(3)));
    }
}

#[test]
fn test_faithful_mode_missing_seed_starts_from_zero() {
    let items = vec![json!(4), json!(5)];
    let sum = |acc: Value, x: &Value| match (acc.as_i64(), x.as_i64()) {
        (Some(a), Some(b)) => json!(a + b),
        _ => Value::Null,
    };
    assert_eq!(reduce_with(&items, sum, None, ReduceMode::Faithful), Some(json!(9)));
    assert_eq!(reduce_with(&items, sum, None, ReduceMode::Corrected), Some(Value::Null));
}

#[test]
fn test_faithful_mode_nan_seed() {
    let items = vec![1.5f64, 2.5];
    let sum = |acc: f64, x: &f64| acc + x;
    assert_eq!(
        reduce_with(&items, sum, Some(f64::NAN), ReduceMode::Faithful),
        Some(4.0)
    );
    assert!(reduce_with(&items, sum, Some(f64::NAN), ReduceMode::Corrected)
        .unwrap()
        .is_nan());
}

// ============================================================================
// flatten
// ============================================================================

#[test]
fn test_flatten_documented_case() {
    let tree = nested![1, [2, [3, [4, 5]], 6]];
    assert_eq!(flatten(&[tree]), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_flatten_flat_sequence_is_identity() {
    for len in 0..6 {
        let flat: Vec<u32> = (0..len).collect();
        let wrapped = Nested::List(flat.iter().copied().map(Nested::Leaf).collect());
        assert_eq!(flatten(&[wrapped]), flat);
    }
}

#[test]
fn test_flatten_top_level_slice() {
    let items = vec![Nested::Leaf("a"), nested!["b", ["c"]], Nested::Leaf("d")];
    assert_eq!(flatten(&items), vec!["a", "b", "c", "d"]);
}

// ============================================================================
// sort_by
// ============================================================================

#[test]
fn test_sort_by_property_documented_case() {
    let items = vec![json!({"n": 3}), json!({"n": 1}), json!({"n": 2})];
    let sorted = sort_by(&items, "n");
    assert_eq!(sorted, vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]);
}

#[test]
fn test_sort_by_string_property_on_maps() {
    let people: Vec<Map<String, Value>> = ["mia", "bob", "eve"]
        .iter()
        .map(|name| {
            let mut row = Map::new();
            row.insert("name".to_string(), json!(name));
            row
        })
        .collect();
    let sorted = sort_by_property(&people, "name");
    let names: Vec<&str> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["bob", "eve", "mia"]);
}

#[test]
fn test_sort_by_accepts_key_function_on_plain_sequences() {
    let words = vec!["kiwi", "fig", "banana", "yam"];
    let sorted = sort_by(&words, |w: &&str| w.len());
    assert_eq!(sorted, vec!["fig", "yam", "kiwi", "banana"]);

    let numbers = vec![10u32, 3, 7];
    assert_eq!(sort_by(&numbers, |n: &u32| *n), vec![3, 7, 10]);
}

#[test]
fn test_sort_by_key_fn_leaves_input() {
    let items = vec![3.5, -1.0, 2.0];
    let sorted = sort_by_key_fn(&items, |x| *x);
    assert_eq!(sorted, vec![-1.0, 2.0, 3.5]);
    assert_eq!(items, vec![3.5, -1.0, 2.0]);
}

// ============================================================================
// zip
// ============================================================================

#[test]
fn test_zip_documented_case() {
    let rows = zip_pair(&["a", "b", "c"], &[1, 2]);
    assert_eq!(
        rows,
        vec![(Some("a"), Some(1)), (Some("b"), Some(2)), (Some("c"), None)]
    );
}

#[test]
fn test_zip_row_count_is_longest() {
    let rows = zip(&[vec![1], vec![], vec![1, 2, 3, 4]]);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == 3));
    assert_eq!(rows[3], vec![None, None, Some(4)]);
}

// ============================================================================
// Sets and records
// ============================================================================

#[test]
fn test_intersection_and_difference_keep_first_order() {
    let sets = [vec![5, 1, 4, 2], vec![2, 5, 9], vec![1, 2, 5]];
    assert_eq!(intersection(&sets), vec![5, 2]);
    assert_eq!(difference(&sets), vec![4]);
}

#[test]
fn test_extend_then_defaults() {
    let mut config: HashMap<String, i32> = HashMap::from([("retries".to_string(), 1)]);
    extend(&mut config, &[HashMap::from([("retries".to_string(), 3)])]);
    defaults(
        &mut config,
        &[HashMap::from([
            ("retries".to_string(), 9),
            ("timeout".to_string(), 30),
        ])],
    );
    assert_eq!(config["retries"], 3);
    assert_eq!(config["timeout"], 30);
}

#[test]
fn test_shuffle_preserves_multiset() {
    let items = vec![1, 1, 2, 3, 5, 8];
    let mut shuffled = shuffle(&items);
    shuffled.sort();
    assert_eq!(shuffled, items);
}
