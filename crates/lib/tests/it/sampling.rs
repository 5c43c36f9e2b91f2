//! Random picks and shuffles.

use collection::{Collection, Pick, Value, collection};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::helpers::*;

#[test]
fn test_random_single_value_comes_from_collection() {
    let values: Collection = collection!["a", "b", "c"];

    for _ in 0..20 {
        let picked = values.random(1).unwrap().unwrap().into_one().unwrap();
        assert!(values.contains(&picked));
    }
}

#[test]
fn test_random_many_is_a_sub_collection() {
    let values: Collection = collection![10, 20, 30, 40, 50];
    let mut rng = StdRng::seed_from_u64(1);

    let picked = values.random_with(&mut rng, 3).unwrap().unwrap();
    assert_eq!(picked.len(), 3);

    let Pick::Many(subset) = picked else {
        panic!("expected several values");
    };
    for (key, value) in &subset {
        assert_eq!(values.get(key), Some(value));
    }
    assert_eq!(subset.unique().count(), 3);
}

#[test]
fn test_random_is_deterministic_with_seed() {
    let values: Collection = collection![1, 2, 3, 4, 5, 6, 7, 8];

    let first = values.random_with(&mut StdRng::seed_from_u64(99), 4).unwrap();
    let second = values.random_with(&mut StdRng::seed_from_u64(99), 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_random_amount_errors() {
    let values: Collection = collection![1, 2];

    let err = values.random(3).unwrap_err();
    assert!(err.is_range_error());
    assert!(values.random(0).is_err());
}

#[test]
fn test_random_on_empty() {
    let empty: Collection = Collection::new();

    assert_eq!(empty.random(1).unwrap(), None);
}

#[test]
fn test_shuffle_keeps_values() {
    let values: Collection = collection![1, 2, 3, 4, 5, 6];

    let shuffled = values.shuffle();
    assert!(shuffled.is_list());
    assert_eq!(shuffled.count(), values.count());
    for value in values_of(&values) {
        assert!(shuffled.contains(&value));
    }
}

#[test]
fn test_shuffle_renumbers_keys() {
    let values: Collection = collection! { "a" => 1, "b" => 2 };

    let shuffled = values.shuffle_with(&mut StdRng::seed_from_u64(3));

    assert!(!shuffled.has("a"));
    assert!(shuffled.has(0) && shuffled.has(1));
    assert_eq!(shuffled.sum().unwrap(), 3);
}

#[test]
fn test_shuffle_empty() {
    let empty: Collection<Value> = Collection::new();

    assert!(empty.shuffle().is_empty());
}
