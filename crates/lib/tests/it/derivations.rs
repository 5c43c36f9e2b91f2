//! Operations that derive a new collection from an existing one.

use collection::{Collection, Key, Value, collection};

use crate::helpers::*;

#[test]
fn test_keys() {
    let values: Collection = collection! { "name" => "Alex", 3 => "three" };
    let keys = values.keys();

    assert!(keys.is_list());
    assert_eq!(values_of(&keys), vec![Key::from("name"), Key::from(3)]);
}

#[test]
fn test_map_keeps_keys_and_leaves_source_alone() {
    let records = people();

    let names = records.map(|record| {
        record
            .as_map()
            .and_then(|fields| fields.get("name"))
            .cloned()
            .unwrap_or_default()
    });

    assert_eq!(values_of(&names), list(["Alex", "Beth"]));
    assert_eq!(names.keys().to_vec(), records.keys().to_vec());
    assert_eq!(records, people());
}

#[test]
fn test_map_can_change_value_type() {
    let words: Collection = collection!["a", "bb", "ccc"];
    let lengths: Collection<usize> = words.map(|word| word.as_text().map_or(0, str::len));

    assert_eq!(lengths.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_filter_keeps_matching_entries_with_keys() {
    let records = people();

    let filtered = records.filter(|record| {
        record
            .as_map()
            .and_then(|fields| fields.get("email"))
            .is_some_and(|email| email == "beth@mail.com")
    });

    assert_eq!(filtered.count(), 1);
    assert_eq!(filtered.get(1), Some(&person("Beth", "beth@mail.com")));
    assert!(!filtered.has(0));
}

#[test]
fn test_filter_then_values_renumbers() {
    let numbers: Collection = collection![1, 2, 3, 4, 5, 6];

    let mut even = numbers.filter(|n| n.as_int().is_some_and(|n| n % 2 == 0));
    assert!(!even.is_list());

    even.values();
    assert!(even.is_list());
    assert_eq!(values_of(&even), list([2, 4, 6]));
}

#[test]
fn test_reduce() {
    let numbers: Collection = collection![1, 2, 3];

    let total = numbers.reduce(0, |carry, item| carry + item.as_int().unwrap_or(0));
    assert_eq!(total, 6);

    let empty: Collection = Collection::new();
    assert_eq!(empty.reduce(42, |carry, _| carry + 1), 42);
}

#[test]
fn test_reduce_visits_in_order() {
    let letters: Collection = collection!["a", "b", "c"];

    let joined = letters.reduce(String::new(), |mut carry, item| {
        carry.push_str(item.as_text().unwrap_or_default());
        carry
    });

    assert_eq!(joined, "abc");
}

#[test]
fn test_unique() {
    let values: Collection = collection![1, 1, 1, 2, 2, 3];

    assert_eq!(values_of(&values.unique()), list([1, 2, 3]));
}

#[test]
fn test_unique_compares_strictly() {
    let values: Collection = collection![1, 1.0, "1"];

    assert_eq!(values.unique().count(), 3);
}

#[test]
fn test_unique_compares_nested_values_structurally() {
    let values = Collection::from_values(vec![
        person("Alex", "alex@mail.com"),
        person("Alex", "alex@mail.com"),
        person("Alex", "other@mail.com"),
    ]);

    let unique = values.unique();
    assert_eq!(unique.count(), 2);
    assert!(unique.has(0));
    assert!(unique.has(2));
}

#[test]
fn test_unique_is_idempotent() {
    let values: Collection = collection!["x", "y", "x", "z", "y"];
    let once = values.unique();

    assert_eq!(once.unique(), once);
}

#[test]
fn test_duplicates() {
    let names: Collection = collection!["Bram", "Bram", "John", "Doe"];
    assert_eq!(values_of(&names.duplicates()), list(["Bram"]));

    let numbers: Collection = collection![1, 1, 2, 5, 11, 28, 45, 45, 60];
    assert_eq!(values_of(&numbers.duplicates()), list([1, 45]));
}

#[test]
fn test_duplicates_of_distinct_values_is_empty() {
    let values: Collection = collection![1, 2, 3, "1"];

    assert!(values.duplicates().is_empty());
}

#[test]
fn test_duplicates_keep_second_occurrence_key() {
    let values: Collection = collection! { "a" => "x", "b" => "y", "c" => "x" };
    let duplicates = values.duplicates();

    assert_eq!(duplicates.get("c"), Some(&Value::from("x")));
    assert!(!duplicates.has("a"));
}

#[test]
fn test_reverse() {
    let numbers: Collection = collection![1, 2, 3];
    let mut reversed = numbers.reverse();

    assert_eq!(values_of(&reversed), list([3, 2, 1]));
    // Keys travel with their values
    assert_eq!(reversed.first(), numbers.get(2));

    reversed.values();
    assert_eq!(reversed.get(0), Some(&Value::Int(3)));
}

#[test]
fn test_reverse_twice_restores_original() {
    let values: Collection = collection! { "a" => 1, "b" => 2, 7 => 3 };

    assert_eq!(values.reverse().reverse(), values);
}

#[test]
fn test_flip() {
    let letters: Collection = collection!["a", "b"];
    let flipped = letters.flip().unwrap();

    assert_eq!(flipped.get("a"), Some(&Key::from(0)));
    assert_eq!(flipped.get("b"), Some(&Key::from(1)));
    assert_eq!(flipped.to_json().unwrap(), r#"{"a":0,"b":1}"#);
}

#[test]
fn test_flip_integer_values() {
    let values: Collection = collection! { "one" => 1, "two" => 2 };
    let flipped = values.flip().unwrap();

    assert_eq!(flipped.get(1), Some(&Key::from("one")));
    assert_eq!(flipped.get(2), Some(&Key::from("two")));
}

#[test]
fn test_flip_rejects_non_key_values() {
    let values: Collection = collection!["a", 1.5];
    let err = values.flip().unwrap_err();
    assert!(err.is_type_error());

    let nested: Collection = collection![Value::from(collection![1])];
    assert!(nested.flip().is_err());
}
