//! Operations that look inside values: aggregates, de-duplication and flipping.

use super::traits::{Indexable, ToKey, ToNumber, ToText};
use super::{Collection, CollectionError, Key, Number};
use crate::Result;

impl<V: ToNumber> Collection<V> {
    /// Sums every value.
    ///
    /// Integers stay integers until a float takes part or the sum overflows.
    /// An empty collection sums to `Number::Int(0)`.
    ///
    /// ```
    /// # use collection::{Collection, Number, collection};
    /// let numbers: Collection = collection![1, 2, 3];
    /// assert_eq!(numbers.sum().unwrap(), Number::Int(6));
    ///
    /// let mixed: Collection = collection![1, 0.5];
    /// assert_eq!(mixed.sum().unwrap(), Number::Float(1.5));
    /// ```
    pub fn sum(&self) -> Result<Number> {
        self.iter().try_fold(Number::default(), |total, (_, value)| -> Result<Number> {
            let number = value.to_number().ok_or_else(|| CollectionError::TypeMismatch {
                operation: "sum",
                expected: "number",
                actual: ToNumber::kind(value).to_string(),
            })?;
            Ok(total + number)
        })
    }
}

impl<V: Indexable> Collection<V> {
    /// Sums the field `key` of every value.
    ///
    /// Every value must be a list or map holding a numeric field under `key`.
    pub fn sum_by(&self, key: impl Into<Key>) -> Result<Number> {
        let key = key.into();
        self.iter().try_fold(Number::default(), |total, (_, value)| -> Result<Number> {
            let fields = value.fields().ok_or_else(|| CollectionError::TypeMismatch {
                operation: "sum_by",
                expected: "list or map",
                actual: Indexable::kind(value).to_string(),
            })?;
            let field = fields
                .get(&key)
                .ok_or_else(|| CollectionError::MissingField {
                    key: key.to_string(),
                })?;
            let number = field.to_number().ok_or_else(|| CollectionError::TypeMismatch {
                operation: "sum_by",
                expected: "number",
                actual: field.type_name().to_string(),
            })?;
            Ok(total + number)
        })
    }
}

impl<V: ToText> Collection<V> {
    /// Joins the text form of every value with `glue`.
    ///
    /// Fails on the first value without a natural text form.
    pub fn implode(&self, glue: &str) -> Result<String> {
        let parts = self
            .iter()
            .map(|(_, value)| {
                value.to_text().ok_or_else(|| CollectionError::TypeMismatch {
                    operation: "implode",
                    expected: "a value with a text form",
                    actual: ToText::kind(value).to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(parts.join(glue))
    }
}

impl<V: ToKey> Collection<V> {
    /// Swaps keys and values.
    ///
    /// Every value must be key-like (an integer or text). When two values
    /// collide the later entry wins, keeping the position of the first.
    ///
    /// ```
    /// # use collection::{Collection, collection};
    /// let letters: Collection = collection!["a", "b"];
    /// let flipped = letters.flip().unwrap();
    ///
    /// assert_eq!(flipped.get("a"), Some(&0.into()));
    /// assert_eq!(flipped.get("b"), Some(&1.into()));
    /// ```
    pub fn flip(&self) -> Result<Collection<Key>> {
        let mut flipped = Collection::new();
        for (key, value) in self.iter() {
            let new_key = value.to_key().ok_or_else(|| CollectionError::InvalidKey {
                actual: ToKey::kind(value).to_string(),
            })?;
            if flipped.has(&new_key) {
                tracing::debug!(key = %new_key, "flip collision, later entry wins");
            }
            flipped.put(new_key, key.clone());
        }
        Ok(flipped)
    }
}

impl<V: PartialEq + Clone> Collection<V> {
    /// Returns a new collection keeping the first occurrence of each value.
    ///
    /// Values are compared structurally; keys are preserved.
    pub fn unique(&self) -> Self {
        let mut seen: Vec<&V> = Vec::new();
        let entries = self
            .iter()
            .filter(|(_, value)| {
                if seen.contains(value) {
                    false
                } else {
                    seen.push(*value);
                    true
                }
            })
            .map(|(key, value)| (key.clone(), value.clone()));
        Self::from_unique_entries(entries)
    }

    /// Returns a new collection with one entry for every repeated value.
    ///
    /// The entry reported is the value's second occurrence, under its own key.
    ///
    /// ```
    /// # use collection::{Collection, collection};
    /// let numbers: Collection = collection![1, 1, 2, 5, 11, 28, 45, 45, 60];
    /// let mut duplicates = numbers.duplicates();
    ///
    /// assert_eq!(duplicates.values().to_json().unwrap(), "[1,45]");
    /// ```
    pub fn duplicates(&self) -> Self {
        let mut seen: Vec<&V> = Vec::new();
        let mut reported: Vec<&V> = Vec::new();
        let mut entries = Vec::new();
        for (key, value) in self.iter() {
            if !seen.contains(&value) {
                seen.push(value);
            } else if !reported.contains(&value) {
                reported.push(value);
                entries.push((key.clone(), value.clone()));
            }
        }
        Self::from_unique_entries(entries)
    }
}
